//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `PerformanceClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DetailFetchError {
    #[error("student detail request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `AnswerSubmitter` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("quiz submission failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors raised while carrying out a quiz effect.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizRunError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
