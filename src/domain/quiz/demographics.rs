//! Self-reported respondent attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Gender as reported on the demographics form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
    NonBinary,
    PreferNotToSay,
}

impl Gender {
    /// Form options in display order.
    pub const ALL: [Gender; 4] = [
        Gender::Female,
        Gender::Male,
        Gender::NonBinary,
        Gender::PreferNotToSay,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-binary",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }

    /// Returns true if the respondent chose to share this attribute.
    pub fn is_disclosed(&self) -> bool {
        !matches!(self, Gender::PreferNotToSay)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Demographic context captured once per session, before the first question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    pub gender: Gender,
}

impl Demographics {
    pub fn new(gender: Gender) -> Self {
        Self { gender }
    }
}
