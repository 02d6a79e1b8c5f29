//! Stage enum representing the 10 interview stages.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

use super::StageSequence;

/// The 10 interview stages, from greeting to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Welcome,
    DomainQuestion,
    ProblemIntro,
    ProblemResonance,
    ProblemExplanation,
    ValueProp,
    PriceTest,
    Intent,
    Closing,
    Complete,
}

impl Stage {
    /// Returns all stages in canonical order.
    pub fn all() -> &'static [Stage] {
        StageSequence::all()
    }

    /// Returns the 0-based index of this stage in the canonical order.
    pub fn order_index(&self) -> usize {
        StageSequence::order_index(*self)
    }

    /// Returns the next stage in order, if any.
    pub fn next(&self) -> Option<Stage> {
        StageSequence::next(*self)
    }

    /// Returns the previous stage in order, if any.
    pub fn previous(&self) -> Option<Stage> {
        StageSequence::previous(*self)
    }

    /// Returns true if this stage comes before another in order.
    pub fn is_before(&self, other: &Stage) -> bool {
        self.order_index() < other.order_index()
    }

    /// Returns true if this stage comes after another in order.
    pub fn is_after(&self, other: &Stage) -> bool {
        self.order_index() > other.order_index()
    }

    /// Returns true if this is the terminal interview stage.
    pub fn is_complete(&self) -> bool {
        matches!(self, Stage::Complete)
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Welcome => "Welcome",
            Stage::DomainQuestion => "Domain Question",
            Stage::ProblemIntro => "Problem Intro",
            Stage::ProblemResonance => "Problem Resonance",
            Stage::ProblemExplanation => "Problem Explanation",
            Stage::ValueProp => "Value Proposition",
            Stage::PriceTest => "Price Test",
            Stage::Intent => "Intent",
            Stage::Closing => "Closing",
            Stage::Complete => "Complete",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Forward edges along the canonical order, plus the reset edge from
/// `Complete` back to `Welcome`.
impl StateMachine for Stage {
    fn can_transition_to(&self, target: &Stage) -> bool {
        if self.is_complete() {
            return matches!(target, Stage::Welcome);
        }
        self.next() == Some(*target)
    }

    fn valid_transitions(&self) -> Vec<Stage> {
        if self.is_complete() {
            return vec![Stage::Welcome];
        }
        self.next().into_iter().collect()
    }
}
