use url::Url;

use crate::model::{AnswerSheet, QuestionId, QuizConfig};

/// Form field name the server expects for a question.
#[must_use]
pub fn field_name(question: QuestionId) -> String {
    format!("question_{question}")
}

/// Form POST carrying every selected choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    action_url: Url,
    fields: Vec<(String, String)>,
}

impl Submission {
    /// Build the form body in quiz order; unanswered questions are omitted.
    #[must_use]
    pub fn from_answers(config: &QuizConfig, answers: &AnswerSheet) -> Self {
        let fields = config
            .questions()
            .iter()
            .filter_map(|question| {
                answers
                    .get(question.id)
                    .map(|choice| (field_name(question.id), choice.as_str().to_string()))
            })
            .collect();
        Self {
            action_url: config.action_url().clone(),
            fields,
        }
    }

    #[must_use]
    pub fn action_url(&self) -> &Url {
        &self.action_url
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
