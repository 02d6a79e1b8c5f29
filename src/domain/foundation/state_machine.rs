//! State machine trait for status enums.
//!
//! Provides a consistent interface for validating and performing state
//! transitions across entity lifecycle enums (interview stages and the like).

use super::ValidationError;

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    ///
    /// This is the preferred way to change state, as it ensures
    /// the transition is valid according to the state machine rules.
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

    // Test enum for StateMachine trait
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum PromptLifecycle {
        Drafted,
        Live,
        Retired,
    }

    impl StateMachine for PromptLifecycle {
        fn can_transition_to(&self, target: &Self) -> bool {
            use PromptLifecycle::*;
            matches!((self, target), (Drafted, Live) | (Live, Retired))
        }

        fn valid_transitions(&self) -> Vec<Self> {
            use PromptLifecycle::*;
            match self {
                Drafted => vec![Live],
                Live => vec![Retired],
                Retired => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_valid_transition() {
        let state = PromptLifecycle::Drafted;
        let result = state.transition_to(PromptLifecycle::Live);
        assert_eq!(result, Ok(PromptLifecycle::Live));
    }

    #[test]
    fn transition_to_fails_for_invalid_transition() {
        let state = PromptLifecycle::Drafted;
        let result = state.transition_to(PromptLifecycle::Retired);
        assert!(result.is_err());
    }

    #[test]
    fn is_terminal_returns_true_for_retired() {
        assert!(PromptLifecycle::Retired.is_terminal());
    }

    #[test]
    fn is_terminal_returns_false_for_non_terminal() {
        assert!(!PromptLifecycle::Drafted.is_terminal());
        assert!(!PromptLifecycle::Live.is_terminal());
    }

    #[test]
    fn can_transition_to_is_consistent_with_valid_transitions() {
        for state in [
            PromptLifecycle::Drafted,
            PromptLifecycle::Live,
            PromptLifecycle::Retired,
        ] {
            for valid_target in state.valid_transitions() {
                assert!(
                    state.can_transition_to(&valid_target),
                    "can_transition_to should return true for {:?} -> {:?}",
                    state,
                    valid_target
                );
            }
        }
    }
}
