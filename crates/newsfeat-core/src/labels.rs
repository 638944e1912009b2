//! The sentiment vocabulary shared by the headline labeler and the corpus
//! converter.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Three-way sentiment class with its fixed integer code.
///
/// Serializes as the integer code (`0`, `1`, `2`), which is the form every
/// downstream file and feature record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SentimentLabel {
    Negative,
    Positive,
    Neutral,
}

impl SentimentLabel {
    /// Integer code used in CSV and feature output.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            SentimentLabel::Negative => 0,
            SentimentLabel::Positive => 1,
            SentimentLabel::Neutral => 2,
        }
    }

    /// Inverse of [`SentimentLabel::code`].
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(SentimentLabel::Negative),
            1 => Some(SentimentLabel::Positive),
            2 => Some(SentimentLabel::Neutral),
            _ => None,
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Negative => write!(f, "negative"),
            SentimentLabel::Positive => write!(f, "positive"),
            SentimentLabel::Neutral => write!(f, "neutral"),
        }
    }
}

/// Returned when a string is not one of the three sentiment words.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment label \"{0}\"")]
pub struct UnknownLabel(pub String);

impl FromStr for SentimentLabel {
    type Err = UnknownLabel;

    /// Case-insensitive: `Negative`, `NEGATIVE` and `negative` all match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "negative" => Ok(SentimentLabel::Negative),
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            _ => Err(UnknownLabel(s.to_string())),
        }
    }
}

impl From<SentimentLabel> for u8 {
    fn from(label: SentimentLabel) -> Self {
        label.code()
    }
}

impl TryFrom<u8> for SentimentLabel {
    type Error = UnknownLabel;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        SentimentLabel::from_code(code).ok_or_else(|| UnknownLabel(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_fixed_vocabulary() {
        assert_eq!(SentimentLabel::Negative.code(), 0);
        assert_eq!(SentimentLabel::Positive.code(), 1);
        assert_eq!(SentimentLabel::Neutral.code(), 2);
    }

    #[test]
    fn parse_is_case_insensitive() {
        for s in ["negative", "Negative", "NEGATIVE"] {
            assert_eq!(s.parse::<SentimentLabel>().unwrap().code(), 0, "{s}");
        }
        assert_eq!("positive".parse::<SentimentLabel>().unwrap().code(), 1);
        assert_eq!("Neutral".parse::<SentimentLabel>().unwrap().code(), 2);
    }

    #[test]
    fn parse_rejects_unknown_word() {
        let err = "bullish".parse::<SentimentLabel>().unwrap_err();
        assert_eq!(err, UnknownLabel("bullish".to_string()));
    }

    #[test]
    fn parse_rejects_padded_word() {
        assert!(" positive".parse::<SentimentLabel>().is_err());
    }

    #[test]
    fn from_code_rejects_out_of_range() {
        assert_eq!(SentimentLabel::from_code(3), None);
    }

    #[test]
    fn serializes_as_integer_code() {
        let json = serde_json::to_string(&SentimentLabel::Neutral).unwrap();
        assert_eq!(json, "2");
        let back: SentimentLabel = serde_json::from_str("0").unwrap();
        assert_eq!(back, SentimentLabel::Negative);
    }

    #[test]
    fn display_is_lowercase_word() {
        assert_eq!(SentimentLabel::Positive.to_string(), "positive");
    }
}
