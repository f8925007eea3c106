use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a quiz question as issued by the server.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(u64);

impl QuestionId {
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Identifier of a learner, used as a path segment when fetching detail.
///
/// Only ASCII letters, digits, `-` and `_` are accepted so the id can be
/// placed in a URL path without escaping.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentId(String);

impl StudentId {
    /// # Errors
    ///
    /// Returns `ParseIdError` if the id is empty or has characters outside
    /// `[A-Za-z0-9_-]`.
    pub fn new(raw: impl Into<String>) -> Result<Self, ParseIdError> {
        let raw = raw.into();
        let trimmed = raw.trim();
        let valid = !trimmed.is_empty()
            && trimmed
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(ParseIdError {
                kind: "StudentId".to_string(),
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StudentId {
    type Error = ParseIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StudentId> for String {
    fn from(value: StudentId) -> Self {
        value.0
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Debug for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StudentId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from string", self.kind)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    /// Accepts either the bare number or the form field name `question_<n>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("question_").unwrap_or(s);
        digits
            .parse::<u64>()
            .map(QuestionId::new)
            .map_err(|_| ParseIdError {
                kind: "QuestionId".to_string(),
            })
    }
}

impl FromStr for StudentId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StudentId::new(s)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_id_parses_form_field_name() {
        let id: QuestionId = "question_17".parse().unwrap();
        assert_eq!(id, QuestionId::new(17));
        let bare: QuestionId = "17".parse().unwrap();
        assert_eq!(bare, id);
    }

    #[test]
    fn question_id_rejects_garbage() {
        assert!("question_".parse::<QuestionId>().is_err());
        assert!("q17".parse::<QuestionId>().is_err());
    }

    #[test]
    fn student_id_trims_and_displays() {
        let id = StudentId::new("  STU-001 ").unwrap();
        assert_eq!(id.to_string(), "STU-001");
        assert_eq!(format!("{id:?}"), "StudentId(STU-001)");
    }

    #[test]
    fn student_id_rejects_path_characters() {
        assert!(StudentId::new("").is_err());
        assert!(StudentId::new("a/b").is_err());
        assert!(StudentId::new("../etc").is_err());
        assert!("x y".parse::<StudentId>().is_err());
    }

    #[test]
    fn student_id_deserialization_validates() {
        let ok: StudentId = serde_json::from_str("\"S_42\"").unwrap();
        assert_eq!(ok.as_str(), "S_42");
        assert!(serde_json::from_str::<StudentId>("\"bad id\"").is_err());
    }
}
