//! InterviewRecord - accumulator for one respondent's answers.
//!
//! The record is created with the researched domain pre-seeded and every
//! response field unset. Fields are committed exactly once, when their owning
//! stage is left, and never mutated afterward. The record is discarded and
//! re-seeded when the respondent restarts from the terminal stage.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{DomainError, ErrorCode, ResonanceScore};

/// The record fields a stage can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseField {
    DomainBackground,
    Resonance,
    ProblemExplanation,
    ValueProposition,
    PriceExpectation,
    ContactIntent,
    ClosingRemarks,
}

impl ResponseField {
    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ResponseField::DomainBackground => "Domain Background",
            ResponseField::Resonance => "Resonance",
            ResponseField::ProblemExplanation => "Problem Explanation",
            ResponseField::ValueProposition => "Value Proposition",
            ResponseField::PriceExpectation => "Price Expectation",
            ResponseField::ContactIntent => "Contact Intent",
            ResponseField::ClosingRemarks => "Closing Remarks",
        }
    }
}

impl fmt::Display for ResponseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Accumulated answers for one interview session.
///
/// # Invariants
///
/// - `domain` is fixed at seeding time and never rewritten
/// - Each response field is write-once; a second commit is refused
/// - `resonance_score`, once set, is an integer in [1,5]
/// - Fields for stages not yet passed remain unset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewRecord {
    /// Seed text describing the topic under research.
    domain: String,

    /// Respondent background in the researched domain.
    domain_response: Option<String>,

    /// 1-5 agreement with the presented problem statement.
    resonance_score: Option<ResonanceScore>,

    /// Why the respondent gave that score.
    explanation_response: Option<String>,

    /// Reaction to the value proposition.
    value_prop_response: Option<String>,

    /// Price expectation for the proposed product.
    price_response: Option<String>,

    /// Email for early access, or a decline.
    intent_response: Option<String>,

    /// Optional final thoughts from the closing stage.
    closing_remarks: Option<String>,
}

impl InterviewRecord {
    /// Creates a fresh record seeded with the researched domain.
    pub fn seeded(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            domain_response: None,
            resonance_score: None,
            explanation_response: None,
            value_prop_response: None,
            price_response: None,
            intent_response: None,
            closing_remarks: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the researched domain seed text.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the domain background response.
    pub fn domain_response(&self) -> Option<&str> {
        self.domain_response.as_deref()
    }

    /// Returns the resonance score.
    pub fn resonance_score(&self) -> Option<ResonanceScore> {
        self.resonance_score
    }

    /// Returns the score explanation response.
    pub fn explanation_response(&self) -> Option<&str> {
        self.explanation_response.as_deref()
    }

    /// Returns the value proposition response.
    pub fn value_prop_response(&self) -> Option<&str> {
        self.value_prop_response.as_deref()
    }

    /// Returns the price expectation response.
    pub fn price_response(&self) -> Option<&str> {
        self.price_response.as_deref()
    }

    /// Returns the contact intent response.
    pub fn intent_response(&self) -> Option<&str> {
        self.intent_response.as_deref()
    }

    /// Returns the optional closing remarks.
    pub fn closing_remarks(&self) -> Option<&str> {
        self.closing_remarks.as_deref()
    }

    /// Returns true if the given field has been committed.
    pub fn is_recorded(&self, field: ResponseField) -> bool {
        match field {
            ResponseField::DomainBackground => self.domain_response.is_some(),
            ResponseField::Resonance => self.resonance_score.is_some(),
            ResponseField::ProblemExplanation => self.explanation_response.is_some(),
            ResponseField::ValueProposition => self.value_prop_response.is_some(),
            ResponseField::PriceExpectation => self.price_response.is_some(),
            ResponseField::ContactIntent => self.intent_response.is_some(),
            ResponseField::ClosingRemarks => self.closing_remarks.is_some(),
        }
    }

    /// Returns the number of committed response fields.
    pub fn answered_count(&self) -> usize {
        [
            ResponseField::DomainBackground,
            ResponseField::Resonance,
            ResponseField::ProblemExplanation,
            ResponseField::ValueProposition,
            ResponseField::PriceExpectation,
            ResponseField::ContactIntent,
            ResponseField::ClosingRemarks,
        ]
        .iter()
        .filter(|f| self.is_recorded(**f))
        .count()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Commits respondent input into the given field.
    ///
    /// Free-text fields store the input as supplied (after rejecting
    /// whitespace-only input); the resonance field parses it into a
    /// [`ResonanceScore`].
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the input is empty after trimming
    /// - `InvalidFormat` / `OutOfRange` if a resonance input does not parse
    /// - `ResponseAlreadyRecorded` if the field was committed before
    pub fn commit(&mut self, field: ResponseField, input: &str) -> Result<(), DomainError> {
        if self.is_recorded(field) {
            return Err(DomainError::new(
                ErrorCode::ResponseAlreadyRecorded,
                format!("{} has already been recorded", field),
            ));
        }

        if input.trim().is_empty() {
            return Err(DomainError::new(
                ErrorCode::EmptyField,
                format!("{} requires a non-empty response", field),
            ));
        }

        match field {
            ResponseField::DomainBackground => {
                self.domain_response = Some(input.to_string());
            }
            ResponseField::Resonance => {
                self.resonance_score = Some(ResonanceScore::parse(input)?);
            }
            ResponseField::ProblemExplanation => {
                self.explanation_response = Some(input.to_string());
            }
            ResponseField::ValueProposition => {
                self.value_prop_response = Some(input.to_string());
            }
            ResponseField::PriceExpectation => {
                self.price_response = Some(input.to_string());
            }
            ResponseField::ContactIntent => {
                self.intent_response = Some(input.to_string());
            }
            ResponseField::ClosingRemarks => {
                self.closing_remarks = Some(input.to_string());
            }
        }

        Ok(())
    }
}
