//! Adapters - Presentation surfaces over the domain.
//!
//! Adapters connect the sequencer to the outside world:
//! - `terminal` - Line-oriented terminal front end

pub mod terminal;

pub use terminal::{SessionSummary, TerminalSession};
