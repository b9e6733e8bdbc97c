//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Identifier of a question, unique within its survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u32);

impl QuestionId {
    /// Creates a QuestionId from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// URL-safe survey identifier, e.g. `work-style`.
///
/// Lowercase ASCII letters, digits and `-` only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SurveySlug(String);

impl SurveySlug {
    /// Creates a validated slug.
    pub fn new(slug: impl Into<String>) -> Result<Self, ValidationError> {
        let slug = slug.into();
        if slug.is_empty() {
            return Err(ValidationError::empty_field("slug"));
        }
        if let Some(c) = slug
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(ValidationError::invalid_format(
                "slug",
                format!("unexpected character '{}'", c),
            ));
        }
        Ok(Self(slug))
    }

    /// Wraps a compile-time literal that is known to be a valid slug.
    pub(crate) fn from_static(slug: &'static str) -> Self {
        debug_assert!(Self::new(slug).is_ok(), "invalid static slug {slug}");
        Self(slug.to_string())
    }

    /// Returns the slug as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurveySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SurveySlug {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SurveySlug {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SurveySlug> for String {
    fn from(slug: SurveySlug) -> Self {
        slug.0
    }
}
