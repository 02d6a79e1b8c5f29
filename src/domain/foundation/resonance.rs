//! ResonanceScore value object for the problem-resonance question (1 to 5 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Resonance rating: 1 (not at all) to 5 (completely).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ResonanceScore {
    NotAtAll = 1,
    Slightly = 2,
    Moderately = 3,
    Strongly = 4,
    Completely = 5,
}

impl ResonanceScore {
    /// Returns all scores in ascending order.
    pub fn all() -> &'static [ResonanceScore] {
        &[
            ResonanceScore::NotAtAll,
            ResonanceScore::Slightly,
            ResonanceScore::Moderately,
            ResonanceScore::Strongly,
            ResonanceScore::Completely,
        ]
    }

    /// Creates a ResonanceScore from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        match value {
            1 => Ok(ResonanceScore::NotAtAll),
            2 => Ok(ResonanceScore::Slightly),
            3 => Ok(ResonanceScore::Moderately),
            4 => Ok(ResonanceScore::Strongly),
            5 => Ok(ResonanceScore::Completely),
            _ => Err(ValidationError::out_of_range(
                "resonance_score",
                1,
                5,
                value as i32,
            )),
        }
    }

    /// Parses a ResonanceScore from respondent input.
    ///
    /// The input must be a whole number in [1,5] after trimming whitespace.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let value: u8 = trimmed.parse().map_err(|_| {
            ValidationError::invalid_format(
                "resonance_score",
                format!("'{}' is not a whole number from 1 to 5", trimmed),
            )
        })?;
        Self::try_from_u8(value)
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ResonanceScore::NotAtAll => "Not at all",
            ResonanceScore::Slightly => "Slightly",
            ResonanceScore::Moderately => "Moderately",
            ResonanceScore::Strongly => "Strongly",
            ResonanceScore::Completely => "Completely",
        }
    }

    /// Returns true if the statement resonated (4 or 5).
    pub fn is_resonant(&self) -> bool {
        self.value() >= 4
    }
}

impl fmt::Display for ResonanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_from_u8_accepts_valid_values() {
        assert_eq!(ResonanceScore::try_from_u8(1).unwrap(), ResonanceScore::NotAtAll);
        assert_eq!(ResonanceScore::try_from_u8(2).unwrap(), ResonanceScore::Slightly);
        assert_eq!(ResonanceScore::try_from_u8(3).unwrap(), ResonanceScore::Moderately);
        assert_eq!(ResonanceScore::try_from_u8(4).unwrap(), ResonanceScore::Strongly);
        assert_eq!(ResonanceScore::try_from_u8(5).unwrap(), ResonanceScore::Completely);
    }

    #[test]
    fn try_from_u8_rejects_invalid_values() {
        assert!(ResonanceScore::try_from_u8(0).is_err());
        assert!(ResonanceScore::try_from_u8(6).is_err());
        assert!(ResonanceScore::try_from_u8(100).is_err());
    }

    #[test]
    fn parse_accepts_digits_with_whitespace() {
        assert_eq!(ResonanceScore::parse("3").unwrap(), ResonanceScore::Moderately);
        assert_eq!(ResonanceScore::parse("  5  ").unwrap(), ResonanceScore::Completely);
    }

    #[test]
    fn parse_rejects_out_of_range_values() {
        assert!(ResonanceScore::parse("0").is_err());
        assert!(ResonanceScore::parse("6").is_err());
    }

    #[test]
    fn parse_rejects_non_numeric_input() {
        assert!(ResonanceScore::parse("abc").is_err());
        assert!(ResonanceScore::parse("").is_err());
        assert!(ResonanceScore::parse("3.5").is_err());
        assert!(ResonanceScore::parse("-1").is_err());
    }

    #[test]
    fn value_returns_correct_integer() {
        assert_eq!(ResonanceScore::NotAtAll.value(), 1);
        assert_eq!(ResonanceScore::Slightly.value(), 2);
        assert_eq!(ResonanceScore::Moderately.value(), 3);
        assert_eq!(ResonanceScore::Strongly.value(), 4);
        assert_eq!(ResonanceScore::Completely.value(), 5);
    }

    #[test]
    fn label_returns_display_text() {
        assert_eq!(ResonanceScore::NotAtAll.label(), "Not at all");
        assert_eq!(ResonanceScore::Completely.label(), "Completely");
    }

    #[test]
    fn is_resonant_works() {
        assert!(!ResonanceScore::NotAtAll.is_resonant());
        assert!(!ResonanceScore::Moderately.is_resonant());
        assert!(ResonanceScore::Strongly.is_resonant());
        assert!(ResonanceScore::Completely.is_resonant());
    }

    #[test]
    fn all_returns_five_scores_ascending() {
        let all = ResonanceScore::all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0], ResonanceScore::NotAtAll);
        assert_eq!(all[4], ResonanceScore::Completely);
    }

    #[test]
    fn displays_as_numeric_value() {
        assert_eq!(format!("{}", ResonanceScore::NotAtAll), "1");
        assert_eq!(format!("{}", ResonanceScore::Completely), "5");
    }

    #[test]
    fn ordering_works() {
        assert!(ResonanceScore::NotAtAll < ResonanceScore::Slightly);
        assert!(ResonanceScore::Strongly < ResonanceScore::Completely);
    }

    #[test]
    fn serializes_to_snake_case_json() {
        let json = serde_json::to_string(&ResonanceScore::NotAtAll).unwrap();
        assert_eq!(json, "\"not_at_all\"");
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let score: ResonanceScore = serde_json::from_str("\"completely\"").unwrap();
        assert_eq!(score, ResonanceScore::Completely);
    }
}
