use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::model::answers::ChoiceKey;
use crate::model::ids::QuestionId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizConfigError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("quiz has too many questions: {len}")]
    TooManyQuestions { len: usize },

    #[error("time limit must be at least one minute")]
    ZeroTimeLimit,

    #[error("question {id} appears more than once")]
    DuplicateQuestion { id: QuestionId },

    #[error("question {id} has no choices")]
    NoChoices { id: QuestionId },

    #[error("question {id} repeats choice {key}")]
    DuplicateChoice { id: QuestionId, key: ChoiceKey },

    #[error("invalid submission url: {raw}")]
    InvalidActionUrl { raw: String },
}

//
// ─── DEFINITION ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub key: ChoiceKey,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    pub choices: Vec<Choice>,
}

impl Question {
    #[must_use]
    pub fn has_choice(&self, key: &ChoiceKey) -> bool {
        self.choices.iter().any(|choice| &choice.key == key)
    }
}

/// Quiz as delivered by the server, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    #[serde(default)]
    pub title: String,
    pub time_limit_minutes: u32,
    pub action_url: String,
    pub questions: Vec<Question>,
}

//
// ─── CONFIG ────────────────────────────────────────────────────────────────────
//

/// Validated quiz. Question numbers are 1-based positions in `questions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    title: String,
    time_limit_minutes: u32,
    action_url: Url,
    questions: Vec<Question>,
}

impl QuizConfig {
    /// Validate a definition whose `action_url` is absolute.
    ///
    /// # Errors
    ///
    /// Returns `QuizConfigError` when the definition is empty, has a zero time
    /// limit, repeats question ids or choice keys, or carries a bad URL.
    pub fn new(definition: QuizDefinition) -> Result<Self, QuizConfigError> {
        let action_url =
            Url::parse(&definition.action_url).map_err(|_| QuizConfigError::InvalidActionUrl {
                raw: definition.action_url.clone(),
            })?;
        Self::validated(definition, action_url)
    }

    /// Validate a definition, resolving a relative `action_url` against `base`.
    ///
    /// # Errors
    ///
    /// Same as [`QuizConfig::new`].
    pub fn with_base(definition: QuizDefinition, base: &Url) -> Result<Self, QuizConfigError> {
        let action_url =
            base.join(&definition.action_url)
                .map_err(|_| QuizConfigError::InvalidActionUrl {
                    raw: definition.action_url.clone(),
                })?;
        Self::validated(definition, action_url)
    }

    fn validated(definition: QuizDefinition, action_url: Url) -> Result<Self, QuizConfigError> {
        if definition.questions.is_empty() {
            return Err(QuizConfigError::NoQuestions);
        }
        if u32::try_from(definition.questions.len()).is_err() {
            return Err(QuizConfigError::TooManyQuestions {
                len: definition.questions.len(),
            });
        }
        if definition.time_limit_minutes == 0 {
            return Err(QuizConfigError::ZeroTimeLimit);
        }

        let mut seen = HashSet::new();
        for question in &definition.questions {
            if !seen.insert(question.id) {
                return Err(QuizConfigError::DuplicateQuestion { id: question.id });
            }
            if question.choices.is_empty() {
                return Err(QuizConfigError::NoChoices { id: question.id });
            }
            let mut keys = HashSet::new();
            for choice in &question.choices {
                if !keys.insert(&choice.key) {
                    return Err(QuizConfigError::DuplicateChoice {
                        id: question.id,
                        key: choice.key.clone(),
                    });
                }
            }
        }

        Ok(Self {
            title: definition.title,
            time_limit_minutes: definition.time_limit_minutes,
            action_url,
            questions: definition.questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_minutes
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> u32 {
        self.time_limit_minutes.saturating_mul(60)
    }

    #[must_use]
    pub fn action_url(&self) -> &Url {
        &self.action_url
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Number of questions. Validation guarantees this fits in `u32`.
    #[must_use]
    pub fn total(&self) -> u32 {
        u32::try_from(self.questions.len()).unwrap_or(u32::MAX)
    }

    /// Question at a 1-based position.
    #[must_use]
    pub fn question(&self, number: u32) -> Option<&Question> {
        let index = usize::try_from(number.checked_sub(1)?).ok()?;
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_by_id(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    /// 1-based position of a question id.
    #[must_use]
    pub fn number_of(&self, id: QuestionId) -> Option<u32> {
        let index = self.questions.iter().position(|question| question.id == id)?;
        u32::try_from(index + 1).ok()
    }
}
