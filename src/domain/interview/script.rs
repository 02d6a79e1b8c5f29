//! InterviewScript - the data-driven step table.
//!
//! Each stage is described by a step descriptor carrying its gate, the record
//! field it writes (if any), and its prompt metadata. The sequencer advances
//! by looking up the current step; adding or reordering steps is a data
//! change, not a control-flow change.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{ResonanceScore, ValidationError};

use super::{ResponseField, Stage};

/// The texts a founder customizes for one research run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearchBrief {
    /// Topic under research, quoted back to the respondent.
    pub domain: String,

    /// Problem statement rated at the resonance stage.
    pub problem_statement: String,

    /// Value proposition pitched after the problem questions.
    pub value_proposition: String,
}

impl ResearchBrief {
    /// Validates that no brief text is empty after trimming.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.domain.trim().is_empty() {
            return Err(ValidationError::empty_field("domain"));
        }
        if self.problem_statement.trim().is_empty() {
            return Err(ValidationError::empty_field("problem_statement"));
        }
        if self.value_proposition.trim().is_empty() {
            return Err(ValidationError::empty_field("value_proposition"));
        }
        Ok(())
    }
}

impl Default for ResearchBrief {
    fn default() -> Self {
        Self {
            domain: "productivity and time management".to_string(),
            problem_statement: "I struggle to stay focused and productive throughout my \
                workday, often getting distracted by notifications, emails, and competing \
                priorities."
                .to_string(),
            value_proposition: "An AI-powered focus assistant that blocks distractions, \
                prioritizes your tasks, and helps you maintain deep work sessions \
                throughout your day."
                .to_string(),
        }
    }
}

/// Precondition a stage's buffer must satisfy before advance succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gate {
    /// No input collected; advance always succeeds.
    None,
    /// Buffer must be non-empty after trimming.
    RequiredText,
    /// Buffer must parse as an integer in [1,5].
    Score,
    /// Input is welcome but not required.
    OptionalText,
}

impl Gate {
    /// Returns true if the buffer satisfies this gate.
    pub fn admits(&self, buffer: &str) -> bool {
        match self {
            Gate::None | Gate::OptionalText => true,
            Gate::RequiredText => !buffer.trim().is_empty(),
            Gate::Score => ResonanceScore::parse(buffer).is_ok(),
        }
    }
}

/// Input control a presentation surface should render for a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputControl {
    None,
    TextArea,
    ScorePicker,
    EmailEntry,
}

/// Captions for the ends of the 1-5 score scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleCaptions {
    pub low: String,
    pub high: String,
}

/// Prompt metadata for one step, consumed by the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepPrompt {
    /// Large heading, shown on the welcome and completion views.
    #[serde(default)]
    pub heading: Option<String>,

    /// Lead paragraphs.
    pub lead: Vec<String>,

    /// Highlighted statement quoted to the respondent.
    #[serde(default)]
    pub callout: Option<String>,

    /// Secondary lines shown after the callout.
    #[serde(default)]
    pub detail: Vec<String>,

    /// Hint describing the expected input.
    #[serde(default)]
    pub placeholder: Option<String>,

    /// Label for the advance control.
    pub advance_label: String,

    /// Whether the logotype is shown above the heading.
    #[serde(default)]
    pub show_logo: bool,

    /// End captions for the score scale, when a score is collected.
    #[serde(default)]
    pub scale_captions: Option<ScaleCaptions>,
}

/// One step of the interview: gate, record field, and prompt metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    pub stage: Stage,
    pub gate: Gate,
    /// Record field committed when this stage is left, if any.
    pub writes: Option<ResponseField>,
    pub control: InputControl,
    pub prompt: StepPrompt,
}

/// Per-step prompt text overrides loaded from a YAML prompt deck.
///
/// Overrides replace only the named texts; gates, record fields, and input
/// controls are fixed by the script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptOverride {
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub lead: Option<Vec<String>>,
    #[serde(default)]
    pub callout: Option<String>,
    #[serde(default)]
    pub detail: Option<Vec<String>>,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub advance_label: Option<String>,
}

/// A deck of prompt overrides keyed by stage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptDeck {
    #[serde(default)]
    pub steps: HashMap<Stage, PromptOverride>,
}

impl PromptDeck {
    /// Parses a deck from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }
}

/// The ordered table of step descriptors driving the sequencer.
///
/// # Invariants
///
/// - Steps cover every stage exactly once, in canonical order
/// - The terminal stage collects nothing and writes nothing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewScript {
    steps: Vec<StepSpec>,
}

impl InterviewScript {
    /// Builds the standard script for a research brief.
    pub fn for_brief(brief: &ResearchBrief) -> Self {
        let steps = vec![
            StepSpec {
                stage: Stage::Welcome,
                gate: Gate::None,
                writes: None,
                control: InputControl::None,
                prompt: StepPrompt {
                    heading: Some("User Interview".to_string()),
                    lead: vec![
                        "Hi! Thanks so much for taking the time to chat with me.".to_string(),
                        "I'm doing early research on behalf of a founder who's exploring a \
                         new idea. They're genuinely interested in learning what's really \
                         going on for people like you, even if the truth is messy or \
                         unexpected."
                            .to_string(),
                        "So please be brutally honest. That's exactly what the founder \
                         wants and needs at this stage."
                            .to_string(),
                        "Everything you share will be kept confidential and only shared in \
                         aggregated form with the founder, never directly linked to you."
                            .to_string(),
                        "Sound good?".to_string(),
                    ],
                    callout: None,
                    detail: vec![],
                    placeholder: None,
                    advance_label: "Let's Begin".to_string(),
                    show_logo: true,
                    scale_captions: None,
                },
            },
            StepSpec {
                stage: Stage::DomainQuestion,
                gate: Gate::RequiredText,
                writes: Some(ResponseField::DomainBackground),
                control: InputControl::TextArea,
                prompt: StepPrompt {
                    heading: None,
                    lead: vec![
                        format!(
                            "The founder is keen to understand your experience when it \
                             comes to \"{}\".",
                            brief.domain
                        ),
                        format!(
                            "Could you share some background? Could you tell me about any \
                             goals you currently have with regards to \"{}\"? What are you \
                             currently trying to do to reach those goals? What emotions do \
                             you feel as you work towards them?",
                            brief.domain
                        ),
                    ],
                    callout: None,
                    detail: vec![],
                    placeholder: Some("Share your experience and goals...".to_string()),
                    advance_label: "Continue".to_string(),
                    show_logo: false,
                    scale_captions: None,
                },
            },
            StepSpec {
                stage: Stage::ProblemIntro,
                gate: Gate::None,
                writes: None,
                control: InputControl::None,
                prompt: StepPrompt {
                    heading: None,
                    lead: vec![
                        "Thanks! Unless there's anything else you'd like to share, we can \
                         zoom into some specific 'problem spaces' that the founder is \
                         exploring."
                            .to_string(),
                    ],
                    callout: None,
                    detail: vec![],
                    placeholder: None,
                    advance_label: "Let's Explore Problems".to_string(),
                    show_logo: false,
                    scale_captions: None,
                },
            },
            StepSpec {
                stage: Stage::ProblemResonance,
                gate: Gate::Score,
                writes: Some(ResponseField::Resonance),
                control: InputControl::ScorePicker,
                prompt: StepPrompt {
                    heading: None,
                    lead: vec![
                        "On a scale of 1 to 5, how much does this statement resonate with \
                         your own personal experience?"
                            .to_string(),
                    ],
                    callout: Some(brief.problem_statement.clone()),
                    detail: vec![],
                    placeholder: None,
                    advance_label: "Continue".to_string(),
                    show_logo: false,
                    scale_captions: Some(ScaleCaptions {
                        low: "Not at all".to_string(),
                        high: "Completely".to_string(),
                    }),
                },
            },
            StepSpec {
                stage: Stage::ProblemExplanation,
                gate: Gate::RequiredText,
                writes: Some(ResponseField::ProblemExplanation),
                control: InputControl::TextArea,
                prompt: StepPrompt {
                    heading: None,
                    lead: vec![
                        "Can you tell me more about why you gave that score?".to_string(),
                    ],
                    callout: None,
                    detail: vec![
                        "Was there a situation or example that came to mind?".to_string(),
                    ],
                    placeholder: Some("Tell me about your experience...".to_string()),
                    advance_label: "Continue".to_string(),
                    show_logo: false,
                    scale_captions: None,
                },
            },
            StepSpec {
                stage: Stage::ValueProp,
                gate: Gate::RequiredText,
                writes: Some(ResponseField::ValueProposition),
                control: InputControl::TextArea,
                prompt: StepPrompt {
                    heading: None,
                    lead: vec![
                        "Here's a value proposition the founder is exploring:".to_string(),
                    ],
                    callout: Some(brief.value_proposition.clone()),
                    detail: vec![
                        "If they delivered on that, how likely would you be to sign up \
                         for early access?"
                            .to_string(),
                        "(Very likely, somewhat likely, unsure, unlikely, very unlikely)"
                            .to_string(),
                    ],
                    placeholder: Some("How likely would you be to sign up? Why?".to_string()),
                    advance_label: "Continue".to_string(),
                    show_logo: false,
                    scale_captions: None,
                },
            },
            StepSpec {
                stage: Stage::PriceTest,
                gate: Gate::RequiredText,
                writes: Some(ResponseField::PriceExpectation),
                control: InputControl::TextArea,
                prompt: StepPrompt {
                    heading: None,
                    lead: vec![
                        "If that worked as promised, what would you expect to pay for it?"
                            .to_string(),
                    ],
                    callout: None,
                    detail: vec![
                        "What would feel fair?".to_string(),
                        "What would feel expensive?".to_string(),
                    ],
                    placeholder: Some("Share your thoughts on pricing...".to_string()),
                    advance_label: "Continue".to_string(),
                    show_logo: false,
                    scale_captions: None,
                },
            },
            StepSpec {
                stage: Stage::Intent,
                gate: Gate::RequiredText,
                writes: Some(ResponseField::ContactIntent),
                control: InputControl::EmailEntry,
                prompt: StepPrompt {
                    heading: None,
                    lead: vec![
                        "Would it be okay if we shared your email with the founder so they \
                         can invite you to get early access?"
                            .to_string(),
                    ],
                    callout: None,
                    detail: vec![],
                    placeholder: Some(
                        "your.email@example.com (or 'no thanks')".to_string(),
                    ),
                    advance_label: "Continue".to_string(),
                    show_logo: false,
                    scale_captions: None,
                },
            },
            StepSpec {
                stage: Stage::Closing,
                gate: Gate::OptionalText,
                writes: Some(ResponseField::ClosingRemarks),
                control: InputControl::TextArea,
                prompt: StepPrompt {
                    heading: None,
                    lead: vec![
                        "That's all from my side. Is there anything else you think I \
                         should understand about your experience?"
                            .to_string(),
                        "Really appreciate your time and honesty.".to_string(),
                    ],
                    callout: None,
                    detail: vec![],
                    placeholder: Some("Any final thoughts? (optional)".to_string()),
                    advance_label: "Finish Interview".to_string(),
                    show_logo: false,
                    scale_captions: None,
                },
            },
            StepSpec {
                stage: Stage::Complete,
                gate: Gate::None,
                writes: None,
                control: InputControl::None,
                prompt: StepPrompt {
                    heading: Some("Thank You!".to_string()),
                    lead: vec![
                        "That's all for now. Thanks so much for your time and thoughtful \
                         answers. You've really helped the founder understand which \
                         problems matter most."
                            .to_string(),
                        "Your responses have been recorded and will be shared with the \
                         founder in aggregated form to help improve their product."
                            .to_string(),
                    ],
                    callout: None,
                    detail: vec![],
                    placeholder: None,
                    advance_label: "Start New Interview".to_string(),
                    show_logo: true,
                    scale_captions: None,
                },
            },
        ];

        Self { steps }
    }

    /// Returns the step descriptor for a stage.
    ///
    /// # Panics
    ///
    /// This function will never panic because the script covers every stage.
    pub fn step(&self, stage: Stage) -> &StepSpec {
        self.steps
            .iter()
            .find(|s| s.stage == stage)
            .expect("script covers every stage")
    }

    /// Returns all steps in order.
    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    /// Applies prompt text overrides from a deck.
    pub fn apply_overrides(&mut self, deck: &PromptDeck) {
        for step in &mut self.steps {
            if let Some(over) = deck.steps.get(&step.stage) {
                if let Some(heading) = &over.heading {
                    step.prompt.heading = Some(heading.clone());
                }
                if let Some(lead) = &over.lead {
                    step.prompt.lead = lead.clone();
                }
                if let Some(callout) = &over.callout {
                    step.prompt.callout = Some(callout.clone());
                }
                if let Some(detail) = &over.detail {
                    step.prompt.detail = detail.clone();
                }
                if let Some(placeholder) = &over.placeholder {
                    step.prompt.placeholder = Some(placeholder.clone());
                }
                if let Some(label) = &over.advance_label {
                    step.prompt.advance_label = label.clone();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::interview::StageSequence;

    fn default_script() -> InterviewScript {
        InterviewScript::for_brief(&ResearchBrief::default())
    }

    #[test]
    fn brief_default_carries_research_texts() {
        let brief = ResearchBrief::default();
        assert_eq!(brief.domain, "productivity and time management");
        assert!(brief.problem_statement.contains("stay focused"));
        assert!(brief.value_proposition.contains("focus assistant"));
        assert!(brief.validate().is_ok());
    }

    #[test]
    fn brief_validate_rejects_empty_texts() {
        let mut brief = ResearchBrief::default();
        brief.domain = "   ".to_string();
        assert!(brief.validate().is_err());

        let mut brief = ResearchBrief::default();
        brief.problem_statement = String::new();
        assert!(brief.validate().is_err());

        let mut brief = ResearchBrief::default();
        brief.value_proposition = String::new();
        assert!(brief.validate().is_err());
    }

    #[test]
    fn gate_none_admits_anything() {
        assert!(Gate::None.admits(""));
        assert!(Gate::None.admits("whatever"));
    }

    #[test]
    fn gate_required_text_rejects_blank_input() {
        assert!(!Gate::RequiredText.admits(""));
        assert!(!Gate::RequiredText.admits("   \t "));
        assert!(Gate::RequiredText.admits("an answer"));
    }

    #[test]
    fn gate_score_admits_only_integers_in_range() {
        assert!(Gate::Score.admits("1"));
        assert!(Gate::Score.admits(" 5 "));
        assert!(!Gate::Score.admits("0"));
        assert!(!Gate::Score.admits("6"));
        assert!(!Gate::Score.admits("abc"));
        assert!(!Gate::Score.admits(""));
    }

    #[test]
    fn gate_optional_text_admits_blank_input() {
        assert!(Gate::OptionalText.admits(""));
        assert!(Gate::OptionalText.admits("final thoughts"));
    }

    #[test]
    fn script_covers_every_stage_in_order() {
        let script = default_script();
        assert_eq!(script.steps().len(), StageSequence::len());
        for (step, stage) in script.steps().iter().zip(StageSequence::all()) {
            assert_eq!(step.stage, *stage);
        }
    }

    #[test]
    fn step_looks_up_by_stage() {
        let script = default_script();
        assert_eq!(script.step(Stage::Welcome).stage, Stage::Welcome);
        assert_eq!(script.step(Stage::Complete).stage, Stage::Complete);
    }

    #[test]
    fn gates_match_the_stage_table() {
        let script = default_script();
        assert_eq!(script.step(Stage::Welcome).gate, Gate::None);
        assert_eq!(script.step(Stage::DomainQuestion).gate, Gate::RequiredText);
        assert_eq!(script.step(Stage::ProblemIntro).gate, Gate::None);
        assert_eq!(script.step(Stage::ProblemResonance).gate, Gate::Score);
        assert_eq!(script.step(Stage::ProblemExplanation).gate, Gate::RequiredText);
        assert_eq!(script.step(Stage::ValueProp).gate, Gate::RequiredText);
        assert_eq!(script.step(Stage::PriceTest).gate, Gate::RequiredText);
        assert_eq!(script.step(Stage::Intent).gate, Gate::RequiredText);
        assert_eq!(script.step(Stage::Closing).gate, Gate::OptionalText);
        assert_eq!(script.step(Stage::Complete).gate, Gate::None);
    }

    #[test]
    fn written_fields_match_the_stage_table() {
        let script = default_script();
        assert_eq!(script.step(Stage::Welcome).writes, None);
        assert_eq!(
            script.step(Stage::DomainQuestion).writes,
            Some(ResponseField::DomainBackground)
        );
        assert_eq!(script.step(Stage::ProblemIntro).writes, None);
        assert_eq!(
            script.step(Stage::ProblemResonance).writes,
            Some(ResponseField::Resonance)
        );
        assert_eq!(
            script.step(Stage::ProblemExplanation).writes,
            Some(ResponseField::ProblemExplanation)
        );
        assert_eq!(
            script.step(Stage::ValueProp).writes,
            Some(ResponseField::ValueProposition)
        );
        assert_eq!(
            script.step(Stage::PriceTest).writes,
            Some(ResponseField::PriceExpectation)
        );
        assert_eq!(script.step(Stage::Intent).writes, Some(ResponseField::ContactIntent));
        assert_eq!(
            script.step(Stage::Closing).writes,
            Some(ResponseField::ClosingRemarks)
        );
        assert_eq!(script.step(Stage::Complete).writes, None);
    }

    #[test]
    fn brief_texts_flow_into_prompts() {
        let brief = ResearchBrief {
            domain: "meal planning".to_string(),
            problem_statement: "Cooking for one is wasteful.".to_string(),
            value_proposition: "A fridge-aware recipe planner.".to_string(),
        };
        let script = InterviewScript::for_brief(&brief);

        assert!(script.step(Stage::DomainQuestion).prompt.lead[0].contains("meal planning"));
        assert_eq!(
            script.step(Stage::ProblemResonance).prompt.callout.as_deref(),
            Some("Cooking for one is wasteful.")
        );
        assert_eq!(
            script.step(Stage::ValueProp).prompt.callout.as_deref(),
            Some("A fridge-aware recipe planner.")
        );
    }

    #[test]
    fn score_scale_captions_match_the_original_endpoints() {
        let script = default_script();
        let captions = script
            .step(Stage::ProblemResonance)
            .prompt
            .scale_captions
            .clone()
            .unwrap();
        assert_eq!(captions.low, "Not at all");
        assert_eq!(captions.high, "Completely");
    }

    #[test]
    fn logo_shows_on_welcome_and_completion_only() {
        let script = default_script();
        for step in script.steps() {
            let expected = matches!(step.stage, Stage::Welcome | Stage::Complete);
            assert_eq!(step.prompt.show_logo, expected, "stage {:?}", step.stage);
        }
    }

    #[test]
    fn prompt_deck_parses_from_yaml() {
        let yaml = r#"
steps:
  domain_question:
    placeholder: "Tell us about your week..."
  closing:
    advance_label: "Wrap Up"
"#;
        let deck = PromptDeck::from_yaml_str(yaml).unwrap();
        assert_eq!(deck.steps.len(), 2);
        assert_eq!(
            deck.steps[&Stage::DomainQuestion].placeholder.as_deref(),
            Some("Tell us about your week...")
        );
    }

    #[test]
    fn apply_overrides_replaces_only_named_texts() {
        let mut script = default_script();
        let original_lead = script.step(Stage::DomainQuestion).prompt.lead.clone();

        let yaml = r#"
steps:
  domain_question:
    placeholder: "Your story..."
"#;
        let deck = PromptDeck::from_yaml_str(yaml).unwrap();
        script.apply_overrides(&deck);

        let step = script.step(Stage::DomainQuestion);
        assert_eq!(step.prompt.placeholder.as_deref(), Some("Your story..."));
        assert_eq!(step.prompt.lead, original_lead);
        assert_eq!(step.gate, Gate::RequiredText);
        assert_eq!(step.writes, Some(ResponseField::DomainBackground));
    }

    #[test]
    fn apply_overrides_ignores_stages_not_in_deck() {
        let mut script = default_script();
        let before = script.clone();
        script.apply_overrides(&PromptDeck::default());
        assert_eq!(script, before);
    }
}
