//! Domain layer containing the quiz model and its rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors, state machine trait)
//! - `catalog` - Static survey catalog
//! - `quiz` - Session state machine, events and effects

pub mod catalog;
pub mod foundation;
pub mod quiz;
