//! Question value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::QuestionId;

/// A multiple-choice question with an ordered set of options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    options: Vec<String>,
}

impl Question {
    /// Creates a question. Validation happens when the owning survey is built.
    pub fn new<I, S>(id: QuestionId, text: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Returns true if `answer` is exactly one of the options.
    pub fn has_option(&self, answer: &str) -> bool {
        self.options.iter().any(|o| o == answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_option_matches_exactly() {
        let q = Question::new(QuestionId::new(1), "Pick one", ["Tea", "Coffee"]);
        assert!(q.has_option("Tea"));
        assert!(!q.has_option("tea"));
        assert!(!q.has_option("Water"));
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = "id: 3\ntext: Morning or night?\noptions: [Morning, Night]\n";
        let q: Question = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(q.id(), QuestionId::new(3));
        assert_eq!(q.text(), "Morning or night?");
        assert_eq!(q.options(), ["Morning".to_string(), "Night".to_string()]);
    }
}
