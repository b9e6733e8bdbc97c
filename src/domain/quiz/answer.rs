//! Answer record.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Question;
use crate::domain::foundation::QuestionId;

/// One submitted answer.
///
/// The question text is copied at answer time so the record stays
/// self-describing after the question index has moved on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub question_text: String,
    pub answer: String,
}

impl Answer {
    /// Builds the answer record for `question`.
    pub fn for_question(question: &Question, answer: impl Into<String>) -> Self {
        Self {
            question_id: question.id(),
            question_text: question.text().to_string(),
            answer: answer.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_question_copies_id_and_text() {
        let question = Question::new(QuestionId::new(4), "Tea or coffee?", ["Tea", "Coffee"]);
        let answer = Answer::for_question(&question, "Tea");

        assert_eq!(answer.question_id, QuestionId::new(4));
        assert_eq!(answer.question_text, "Tea or coffee?");
        assert_eq!(answer.answer, "Tea");
    }
}
