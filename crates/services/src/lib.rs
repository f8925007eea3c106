#![forbid(unsafe_code)]

pub mod answers;
pub mod app_services;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod performance;
pub mod quiz_runner;
pub mod submit;
pub mod timer;

pub use nura_core::Clock;

pub use answers::AnswerPersistence;
pub use app_services::AppServices;
pub use config::ClientConfig;
pub use dashboard::{Dashboard, TeacherFeatures};
pub use error::{AppServicesError, DetailFetchError, QuizRunError, SubmitError};
pub use performance::{PerformanceClient, StudentDetailSource};
pub use quiz_runner::QuizRunner;
pub use submit::{AnswerSubmitter, HttpSubmitter};
pub use timer::CountdownDriver;
