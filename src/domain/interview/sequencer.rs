//! InterviewSequencer aggregate entity.
//!
//! The sequencer owns the state triple for one respondent's session: the
//! current stage, the accumulated record, and the pending input buffer. All
//! transitions run synchronously in response to a discrete user action; there
//! is no I/O and no shared state across sessions.
//!
//! # Invariants
//!
//! - `stage` only moves forward along the canonical order, except for the
//!   reset edge from the terminal stage back to the start
//! - A stage's record field is committed exactly when that stage is left
//! - A refused advance leaves stage, record, and buffer untouched

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    DomainError, ErrorCode, ResonanceScore, SessionId, Timestamp, ValidationError,
};

use super::{
    Gate, InterviewProgress, InterviewRecord, InterviewScript, ResearchBrief, ResponseField,
    Stage, StageSequence, StepSpec,
};

/// Outcome of a successful advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advanced {
    /// Stage that was left.
    pub from: Stage,

    /// Stage that is now current.
    pub to: Stage,

    /// Record field committed while leaving, if any.
    pub recorded: Option<ResponseField>,
}

/// Interview sequencer - the state machine for one respondent's session.
#[derive(Debug, Clone)]
pub struct InterviewSequencer {
    /// Unique identifier for this session.
    id: SessionId,

    /// The step table driving prompts, gates, and field mappings.
    script: InterviewScript,

    /// Current stage.
    stage: Stage,

    /// Accumulated answers.
    record: InterviewRecord,

    /// Transient buffer for the control currently being edited.
    pending_input: String,

    /// When the session was created.
    started_at: Timestamp,

    /// When the session last changed.
    updated_at: Timestamp,
}

impl InterviewSequencer {
    /// Creates a sequencer running the standard script for a research brief.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if any brief text is empty
    pub fn new(brief: ResearchBrief) -> Result<Self, ValidationError> {
        brief.validate()?;
        let script = InterviewScript::for_brief(&brief);
        Self::with_script(script, brief.domain)
    }

    /// Creates a sequencer from a prepared script and domain seed.
    ///
    /// Used when prompt deck overrides have been applied to the script.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the domain seed is empty
    pub fn with_script(
        script: InterviewScript,
        domain_seed: String,
    ) -> Result<Self, ValidationError> {
        if domain_seed.trim().is_empty() {
            return Err(ValidationError::empty_field("domain"));
        }

        let now = Timestamp::now();
        Ok(Self {
            id: SessionId::new(),
            script,
            stage: StageSequence::first(),
            record: InterviewRecord::seeded(domain_seed),
            pending_input: String::new(),
            started_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session ID.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Returns the current stage.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the accumulated record.
    pub fn record(&self) -> &InterviewRecord {
        &self.record
    }

    /// Returns the pending input buffer.
    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Returns the step descriptor for the current stage.
    pub fn current_step(&self) -> &StepSpec {
        self.script.step(self.stage)
    }

    /// Returns when the session was created.
    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    /// Returns when the session last changed.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Returns a progress snapshot for "step N of M" displays.
    pub fn progress(&self) -> InterviewProgress {
        InterviewProgress::new(self.stage, self.record.answered_count())
    }

    /// Returns true if the current stage's gate admits the buffer.
    ///
    /// Presentation surfaces use this to keep the advance control inert
    /// until the precondition is satisfied.
    pub fn can_advance(&self) -> bool {
        if self.stage.is_complete() {
            return false;
        }
        self.current_step().gate.admits(&self.pending_input)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Unconditionally overwrites the pending input buffer.
    ///
    /// No validation happens here; gating checks run at advance time.
    pub fn set_pending_input(&mut self, text: impl Into<String>) {
        self.pending_input = text.into();
    }

    /// Sets the buffer to the string form of a score.
    ///
    /// Equivalent to typing the digit at the resonance stage.
    pub fn select_score(&mut self, score: ResonanceScore) {
        self.pending_input = score.to_string();
    }

    /// Commits the pending input (if the current stage collects one) and
    /// moves to the next stage.
    ///
    /// A refusal leaves stage, record, and buffer untouched; callers keep the
    /// respondent on the same view rather than surfacing the error.
    ///
    /// # Errors
    ///
    /// - `InterviewComplete` if invoked from the terminal stage
    /// - `GateNotSatisfied` if the buffer fails the stage's gate
    pub fn advance(&mut self) -> Result<Advanced, DomainError> {
        if self.stage.is_complete() {
            return Err(DomainError::new(
                ErrorCode::InterviewComplete,
                "The interview is complete; only reset is valid",
            ));
        }

        let step = self.script.step(self.stage);
        let gate = step.gate;
        let writes = step.writes;

        if !gate.admits(&self.pending_input) {
            return Err(DomainError::new(
                ErrorCode::GateNotSatisfied,
                format!("{} requires a valid response to continue", self.stage),
            )
            .with_detail("stage", self.stage.display_name()));
        }

        let recorded = match writes {
            // An optional-text stage with a blank buffer advances without
            // committing anything.
            Some(_) if gate == Gate::OptionalText && self.pending_input.trim().is_empty() => {
                None
            }
            Some(field) => {
                self.record.commit(field, &self.pending_input)?;
                Some(field)
            }
            None => None,
        };

        let from = self.stage;
        let to = from
            .next()
            .expect("every non-terminal stage has a successor");

        self.pending_input.clear();
        self.stage = to;
        self.updated_at = Timestamp::now();

        Ok(Advanced { from, to, recorded })
    }

    /// Returns the session to its initial state for a new respondent pass.
    ///
    /// The record is re-seeded with the same researched domain; stage and
    /// buffer return to their starting values.
    ///
    /// # Errors
    ///
    /// - `ResetUnavailable` if the session has not reached the terminal stage
    pub fn reset(&mut self) -> Result<(), DomainError> {
        if !self.stage.is_complete() {
            return Err(DomainError::new(
                ErrorCode::ResetUnavailable,
                "Reset is only available from the completion stage",
            ));
        }

        self.stage = StageSequence::first();
        self.record = InterviewRecord::seeded(self.record.domain().to_owned());
        self.pending_input.clear();
        self.updated_at = Timestamp::now();
        Ok(())
    }
}
