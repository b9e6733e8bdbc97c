//! Catalog module - the static, read-only set of surveys.
//!
//! Surveys come either from the built-in catalog or from a YAML file read
//! once at start-up. Nothing in the catalog changes while the quiz runs.

mod builtin;
#[allow(clippy::module_inception)]
mod catalog;
mod error;
mod question;
mod survey;

pub use catalog::SurveyCatalog;
pub use error::CatalogError;
pub use question::Question;
pub use survey::{Survey, MIN_OPTIONS};
