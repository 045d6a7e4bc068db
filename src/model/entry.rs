// src/model/entry.rs
// =============================================================================
// One entry of the crawl report: the URL as it was discovered, and what
// happened when we tried to fetch it.
//
// The outcome is either the HTTP status code the server answered with, or
// INVALID when the URL was malformed or the fetch failed.
// =============================================================================

use serde::{Serialize, Serializer};
use std::fmt;

/// What happened to a single crawl target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server answered; holds the numeric status code (200, 404, 501, ...)
    Status(u16),
    /// Malformed URL, or the fetch/read failed
    Invalid,
}

// "INVALID" or the decimal status code - this is exactly what the
// text report prints in front of the URL.
impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Status(code) => write!(f, "{}", code),
            Outcome::Invalid => f.write_str("INVALID"),
        }
    }
}

// In JSON a status stays a number and INVALID becomes a string,
// so `{"status": 200}` and `{"status": "INVALID"}`.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Status(code) => serializer.serialize_u16(*code),
            Outcome::Invalid => serializer.serialize_str("INVALID"),
        }
    }
}

/// One line of the final report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// The URL as originally discovered (trimmed)
    pub url: String,
    /// What happened when we processed it
    #[serde(rename = "status")]
    pub outcome: Outcome,
}

impl ReportEntry {
    pub fn new(url: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            url: url.into(),
            outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Status(200).to_string(), "200");
        assert_eq!(Outcome::Invalid.to_string(), "INVALID");
    }

    #[test]
    fn test_entry_serializes_status_as_number_or_token() {
        let ok = ReportEntry::new("http://a.com", Outcome::Status(501));
        let bad = ReportEntry::new("bad", Outcome::Invalid);
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"url":"http://a.com","status":501}"#
        );
        assert_eq!(
            serde_json::to_string(&bad).unwrap(),
            r#"{"url":"bad","status":"INVALID"}"#
        );
    }
}
