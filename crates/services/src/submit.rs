use async_trait::async_trait;
use nura_core::quiz::Submission;
use reqwest::Client;
use tracing::info;

use crate::error::SubmitError;

/// Sends a finished quiz to the server.
#[async_trait]
pub trait AnswerSubmitter: Send + Sync {
    /// Transmit the submission once.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError` when the request fails or is rejected.
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError>;
}

/// Posts submissions as `application/x-www-form-urlencoded`.
#[derive(Clone)]
pub struct HttpSubmitter {
    client: Client,
}

impl HttpSubmitter {
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AnswerSubmitter for HttpSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(submission.action_url().clone())
            .form(submission.fields())
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SubmitError::HttpStatus(response.status()));
        }

        info!(
            url = %submission.action_url(),
            fields = submission.len(),
            "quiz submitted"
        );
        Ok(())
    }
}
