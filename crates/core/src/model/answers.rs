use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::model::ids::QuestionId;

/// Key of a single choice within a question (`"a"`, `"b"`, ...).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceKey(String);

impl ChoiceKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ChoiceKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChoiceKey({})", self.0)
    }
}

impl fmt::Display for ChoiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Selected choice per question.
///
/// Serializes as a flat JSON object keyed by the numeric question id, which is
/// the shape kept in local storage under `quiz_answers`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet(BTreeMap<QuestionId, ChoiceKey>);

impl AnswerSheet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `choice` for `question`, returning the choice it replaced.
    pub fn record(&mut self, question: QuestionId, choice: ChoiceKey) -> Option<ChoiceKey> {
        self.0.insert(question, choice)
    }

    #[must_use]
    pub fn get(&self, question: QuestionId) -> Option<&ChoiceKey> {
        self.0.get(&question)
    }

    #[must_use]
    pub fn contains(&self, question: QuestionId) -> bool {
        self.0.contains_key(&question)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &ChoiceKey)> {
        self.0.iter().map(|(id, choice)| (*id, choice))
    }
}

impl FromIterator<(QuestionId, ChoiceKey)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (QuestionId, ChoiceKey)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
