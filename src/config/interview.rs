//! Interview configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::interview::{PromptDeck, ResearchBrief};

use super::error::{ConfigError, ValidationError};

/// Interview configuration (research texts and prompt overrides)
///
/// Defaults carry the original research copy; founders override the texts
/// per research run via environment variables or the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct InterviewConfig {
    /// Topic under research, quoted back to the respondent
    #[serde(default = "default_domain")]
    pub domain: String,

    /// Problem statement rated at the resonance stage
    #[serde(default = "default_problem_statement")]
    pub problem_statement: String,

    /// Value proposition pitched after the problem questions
    #[serde(default = "default_value_proposition")]
    pub value_proposition: String,

    /// Optional YAML prompt deck overriding individual prompt texts
    #[serde(default)]
    pub prompt_deck: Option<PathBuf>,
}

impl InterviewConfig {
    /// Validate interview configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.domain.trim().is_empty() {
            return Err(ValidationError::EmptyDomain);
        }
        if self.problem_statement.trim().is_empty() {
            return Err(ValidationError::EmptyProblemStatement);
        }
        if self.value_proposition.trim().is_empty() {
            return Err(ValidationError::EmptyValueProposition);
        }
        Ok(())
    }

    /// Build the research brief for the configured texts
    pub fn research_brief(&self) -> ResearchBrief {
        ResearchBrief {
            domain: self.domain.clone(),
            problem_statement: self.problem_statement.clone(),
            value_proposition: self.value_proposition.clone(),
        }
    }

    /// Load the prompt deck referenced by `prompt_deck`, if any
    pub fn load_prompt_deck(&self) -> Result<Option<PromptDeck>, ConfigError> {
        let Some(path) = &self.prompt_deck else {
            return Ok(None);
        };
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::DeckRead {
            path: path.clone(),
            source,
        })?;
        Ok(Some(PromptDeck::from_yaml_str(&raw)?))
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            problem_statement: default_problem_statement(),
            value_proposition: default_value_proposition(),
            prompt_deck: None,
        }
    }
}

fn default_domain() -> String {
    ResearchBrief::default().domain
}

fn default_problem_statement() -> String {
    ResearchBrief::default().problem_statement
}

fn default_value_proposition() -> String {
    ResearchBrief::default().value_proposition
}
