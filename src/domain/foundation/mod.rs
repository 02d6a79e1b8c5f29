//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types
//! that form the vocabulary of the Verity domain.

mod errors;
mod ids;
mod resonance;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::SessionId;
pub use resonance::ResonanceScore;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
