//! Interview module - stages, script, record, and the sequencer.
//!
//! The interview is a strictly linear flow: 10 stages, 9 forward edges, and
//! one reset edge from the terminal stage back to the start. The sequencer
//! advances by looking up the current step in a data-driven script.

mod progress;
mod record;
mod script;
mod sequence;
mod sequencer;
mod stage;

pub use progress::InterviewProgress;
pub use record::{InterviewRecord, ResponseField};
pub use script::{
    Gate, InputControl, InterviewScript, PromptDeck, PromptOverride, ResearchBrief,
    ScaleCaptions, StepPrompt, StepSpec,
};
pub use sequence::StageSequence;
pub use sequencer::{Advanced, InterviewSequencer};
pub use stage::Stage;
