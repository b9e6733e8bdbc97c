//! State machine trait for stage enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions on lifecycle enums such as [`QuizStage`](crate::domain::quiz::QuizStage).

use super::ValidationError;

/// Trait for enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for QuizStage {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         matches!((self, target), (Selection, Demographics) | (Quiz, Loading))
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Selection => vec![Selection, Demographics],
///             // ... etc
///         }
///     }
/// }
///
/// let next = QuizStage::Quiz.transition_to(QuizStage::Loading)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Red,
        Green,
        Broken,
    }

    impl StateMachine for Light {
        fn can_transition_to(&self, target: &Self) -> bool {
            self.valid_transitions().contains(target)
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use Light::*;
            match self {
                Red => vec![Green, Broken],
                Green => vec![Red, Broken],
                Broken => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        assert_eq!(Light::Red.transition_to(Light::Green), Ok(Light::Green));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let err = Light::Broken.transition_to(Light::Green).unwrap_err();
        assert!(err.to_string().contains("Cannot transition from Broken to Green"));
    }

    #[test]
    fn is_terminal_reflects_outgoing_transitions() {
        assert!(Light::Broken.is_terminal());
        assert!(!Light::Red.is_terminal());
    }
}
