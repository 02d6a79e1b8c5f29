//! Interactive terminal session loop.
//!
//! Drives an [`InterviewSequencer`] over a line-oriented input and a write
//! sink. All transitions are synchronous; the loop re-renders after every
//! state change. EOF on the input ends the session, which needs no cleanup
//! since no external resource is held.

use std::io::{self, BufRead, Write};

use crate::domain::interview::{InputControl, InterviewSequencer};

use super::render;

/// Summary of a finished terminal session.
///
/// Counts only; recorded answers never leave the sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Interviews that reached the completion stage.
    pub completed_interviews: usize,
}

/// One respondent's terminal session.
pub struct TerminalSession<R, W> {
    sequencer: InterviewSequencer,
    input: R,
    output: W,
    show_banner: bool,
}

impl<R: BufRead, W: Write> TerminalSession<R, W> {
    /// Creates a session over the given input and output.
    pub fn new(sequencer: InterviewSequencer, input: R, output: W) -> Self {
        Self {
            sequencer,
            input,
            output,
            show_banner: true,
        }
    }

    /// Sets whether the logotype banner is rendered.
    pub fn with_banner(mut self, show_banner: bool) -> Self {
        self.show_banner = show_banner;
        self
    }

    /// Runs the interview loop until the respondent finishes or abandons.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` only for failures on the input or output streams.
    pub fn run(mut self) -> io::Result<SessionSummary> {
        let mut completed = 0;
        tracing::info!(session_id = %self.sequencer.id(), "interview session started");

        loop {
            let step = self.sequencer.current_step().clone();
            let progress = self.sequencer.progress();
            render::render_step(&mut self.output, &step, &progress, self.show_banner)?;

            if self.sequencer.stage().is_complete() {
                completed += 1;
                tracing::info!(
                    session_id = %self.sequencer.id(),
                    answered = self.sequencer.record().answered_count(),
                    "interview complete"
                );

                render::render_restart_prompt(&mut self.output, &step.prompt.advance_label)?;
                let Some(line) = self.read_line()? else { break };
                if line.trim().eq_ignore_ascii_case("q") {
                    break;
                }

                match self.sequencer.reset() {
                    Ok(()) => {
                        tracing::debug!(session_id = %self.sequencer.id(), "session reset");
                    }
                    Err(err) => tracing::warn!(%err, "reset refused"),
                }
                continue;
            }

            let Some(line) = self.read_line()? else { break };

            if step.control != InputControl::None {
                self.sequencer.set_pending_input(line);
            }

            if !self.sequencer.can_advance() {
                render::render_refusal(&mut self.output, &step)?;
                continue;
            }

            match self.sequencer.advance() {
                Ok(advanced) => {
                    tracing::debug!(
                        from = %advanced.from,
                        to = %advanced.to,
                        recorded = advanced.recorded.map(|f| f.display_name()),
                        "stage advanced"
                    );
                }
                Err(err) => {
                    // can_advance held, so this branch should not be reached;
                    // keep the respondent on the same view regardless.
                    tracing::warn!(%err, "advance refused");
                    render::render_refusal(&mut self.output, &step)?;
                }
            }
        }

        tracing::info!(completed, "interview session ended");
        Ok(SessionSummary {
            completed_interviews: completed,
        })
    }

    /// Reads one line, stripping the trailing newline.
    ///
    /// Returns `None` on EOF (the respondent abandoned the session).
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}
