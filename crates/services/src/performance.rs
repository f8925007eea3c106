use async_trait::async_trait;
use nura_core::model::{StudentDetail, StudentId};
use reqwest::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::DetailFetchError;

/// Source of per-student performance detail.
#[async_trait]
pub trait StudentDetailSource: Send + Sync {
    /// Fetch one student's detail.
    ///
    /// # Errors
    ///
    /// Returns `DetailFetchError` when the request fails, is rejected, or the
    /// body does not parse.
    async fn fetch(&self, student: &StudentId) -> Result<StudentDetail, DetailFetchError>;
}

/// Reads `GET {base}/api/performance/{student_id}`.
#[derive(Clone)]
pub struct PerformanceClient {
    client: Client,
    config: ClientConfig,
}

impl PerformanceClient {
    #[must_use]
    pub fn new(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn detail_url(&self, student: &StudentId) -> String {
        self.config
            .endpoint(&format!("api/performance/{}", student.as_str()))
    }
}

#[async_trait]
impl StudentDetailSource for PerformanceClient {
    async fn fetch(&self, student: &StudentId) -> Result<StudentDetail, DetailFetchError> {
        let url = self.detail_url(student);
        debug!(%url, "fetching student detail");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(DetailFetchError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}
