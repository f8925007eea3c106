use std::sync::Arc;

use nura_core::model::{DashboardData, DashboardRole, QuizConfig};
use nura_core::quiz::QuizSession;
use storage::repository::Storage;

use crate::Clock;
use crate::answers::AnswerPersistence;
use crate::config::ClientConfig;
use crate::dashboard::{Dashboard, TeacherFeatures};
use crate::error::AppServicesError;
use crate::performance::{PerformanceClient, StudentDetailSource};
use crate::quiz_runner::QuizRunner;
use crate::submit::{AnswerSubmitter, HttpSubmitter};

/// Assembles app-facing services over one storage backend and HTTP client.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    config: ClientConfig,
    storage: Storage,
    submitter: Arc<dyn AnswerSubmitter>,
    details: Arc<dyn StudentDetailSource>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization or HTTP client setup fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: ClientConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let client = config.http_client()?;
        let submitter: Arc<dyn AnswerSubmitter> = Arc::new(HttpSubmitter::new(client.clone()));
        let details: Arc<dyn StudentDetailSource> =
            Arc::new(PerformanceClient::new(client, config.clone()));
        Ok(Self::from_parts(clock, config, storage, submitter, details))
    }

    /// Build services from already constructed parts.
    #[must_use]
    pub fn from_parts(
        clock: Clock,
        config: ClientConfig,
        storage: Storage,
        submitter: Arc<dyn AnswerSubmitter>,
        details: Arc<dyn StudentDetailSource>,
    ) -> Self {
        Self {
            clock,
            config,
            storage,
            submitter,
            details,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn client_config(&self) -> &ClientConfig {
        &self.config
    }

    #[must_use]
    pub fn answers(&self) -> AnswerPersistence {
        AnswerPersistence::new(Arc::clone(&self.storage.local))
    }

    /// A fresh runner for one attempt at `quiz`.
    #[must_use]
    pub fn quiz_runner(&self, quiz: QuizConfig) -> QuizRunner {
        QuizRunner::new(
            QuizSession::new(quiz, self.clock),
            self.answers(),
            Arc::clone(&self.submitter),
        )
    }

    /// The dashboard for `role`, with the teacher extension attached when needed.
    #[must_use]
    pub fn dashboard(&self, data: DashboardData, role: DashboardRole) -> Dashboard {
        let dashboard = Dashboard::new(data);
        match role {
            DashboardRole::Teacher => {
                dashboard.with_teacher(TeacherFeatures::new(Arc::clone(&self.details)))
            }
            DashboardRole::Student => dashboard,
        }
    }
}
