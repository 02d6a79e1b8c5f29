//! Stage rendering for the terminal surface.
//!
//! Pure write-side functions: each takes the output sink explicitly so tests
//! can render into a buffer. Recorded answers are never echoed back.

use std::io::{self, Write};

use crate::domain::foundation::ResonanceScore;
use crate::domain::interview::{Gate, InputControl, InterviewProgress, StepSpec};

/// Logotype shown on the welcome and completion views.
const LOGO: &str = include_str!("../../../assets/logo.txt");

const RULE: &str = "────────────────────────────────────────────────────────────";

/// Renders one step: logo, heading, progress, prompt blocks, and the input
/// affordance for the step's control.
pub fn render_step(
    out: &mut impl Write,
    step: &StepSpec,
    progress: &InterviewProgress,
    show_banner: bool,
) -> io::Result<()> {
    writeln!(out)?;

    if step.prompt.show_logo && show_banner {
        write!(out, "{}", LOGO)?;
        writeln!(out)?;
    }

    if let Some(heading) = &step.prompt.heading {
        writeln!(out, "{}", heading)?;
    }

    writeln!(out, "{}", RULE)?;
    writeln!(
        out,
        "Step {} of {}",
        progress.step_number(),
        progress.total_steps()
    )?;
    writeln!(out)?;

    for paragraph in &step.prompt.lead {
        writeln!(out, "{}", paragraph)?;
        writeln!(out)?;
    }

    if let Some(callout) = &step.prompt.callout {
        writeln!(out, "  ▌ \"{}\"", callout)?;
        writeln!(out)?;
    }

    for line in &step.prompt.detail {
        writeln!(out, "  → {}", line)?;
    }
    if !step.prompt.detail.is_empty() {
        writeln!(out)?;
    }

    match step.control {
        InputControl::None => {
            // The completion view gets its own restart prompt instead.
            if !progress.is_complete() {
                writeln!(out, "[Enter] {}", step.prompt.advance_label)?;
            }
        }
        InputControl::ScorePicker => {
            render_score_scale(out, step)?;
            write!(out, "> ")?;
            out.flush()?;
        }
        InputControl::TextArea | InputControl::EmailEntry => {
            if let Some(placeholder) = &step.prompt.placeholder {
                writeln!(out, "({})", placeholder)?;
            }
            write!(out, "> ")?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Renders the 1-5 score row with its end captions.
fn render_score_scale(out: &mut impl Write, step: &StepSpec) -> io::Result<()> {
    for score in ResonanceScore::all() {
        write!(out, "  [{}]", score)?;
    }
    writeln!(out)?;

    if let Some(captions) = &step.prompt.scale_captions {
        writeln!(out, "  1 = {}   ...   5 = {}", captions.low, captions.high)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Renders the message shown when an advance was refused.
///
/// The respondent stays on the same view; the message names the gate that
/// held, never an error code.
pub fn render_refusal(out: &mut impl Write, step: &StepSpec) -> io::Result<()> {
    let message = match step.gate {
        Gate::Score => "Please answer with a whole number from 1 to 5.",
        Gate::RequiredText => "A response is required to continue.",
        Gate::None | Gate::OptionalText => "Please try again.",
    };
    writeln!(out, "{}", message)?;
    Ok(())
}

/// Renders the restart prompt shown at the completion view.
pub fn render_restart_prompt(out: &mut impl Write, advance_label: &str) -> io::Result<()> {
    writeln!(out, "[Enter] {}   [q] Finish", advance_label)?;
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::{InterviewScript, ResearchBrief, Stage};

    fn rendered(stage: Stage) -> String {
        let script = InterviewScript::for_brief(&ResearchBrief::default());
        let step = script.step(stage);
        let progress = InterviewProgress::new(stage, 0);
        let mut out = Vec::new();
        render_step(&mut out, step, &progress, true).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn welcome_view_shows_logo_heading_and_advance_label() {
        let text = rendered(Stage::Welcome);
        assert!(text.contains("\\ \\ / /"));
        assert!(text.contains("User Interview"));
        assert!(text.contains("Step 1 of 10"));
        assert!(text.contains("Let's Begin"));
    }

    #[test]
    fn banner_can_be_suppressed() {
        let script = InterviewScript::for_brief(&ResearchBrief::default());
        let step = script.step(Stage::Welcome);
        let progress = InterviewProgress::new(Stage::Welcome, 0);
        let mut out = Vec::new();
        render_step(&mut out, step, &progress, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("\\ \\ / /"));
        assert!(text.contains("User Interview"));
    }

    #[test]
    fn resonance_view_shows_callout_scale_and_captions() {
        let text = rendered(Stage::ProblemResonance);
        assert!(text.contains("scale of 1 to 5"));
        assert!(text.contains("▌"));
        assert!(text.contains("[1]  [2]  [3]  [4]  [5]") || text.contains("[1]"));
        assert!(text.contains("Not at all"));
        assert!(text.contains("Completely"));
    }

    #[test]
    fn text_views_show_placeholder_hint() {
        let text = rendered(Stage::PriceTest);
        assert!(text.contains("Share your thoughts on pricing..."));
        assert!(text.contains("What would feel fair?"));
    }

    #[test]
    fn refusal_message_names_the_gate() {
        let script = InterviewScript::for_brief(&ResearchBrief::default());

        let mut out = Vec::new();
        render_refusal(&mut out, script.step(Stage::ProblemResonance)).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("whole number from 1 to 5"));

        let mut out = Vec::new();
        render_refusal(&mut out, script.step(Stage::Intent)).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("required to continue"));
    }

    #[test]
    fn restart_prompt_offers_restart_and_quit() {
        let mut out = Vec::new();
        render_restart_prompt(&mut out, "Start New Interview").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Start New Interview"));
        assert!(text.contains("[q]"));
    }
}
