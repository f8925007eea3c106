use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use nura_core::dashboard::PanelState;
use nura_core::model::{DashboardData, DashboardRole, StudentDetail, StudentId};
use services::{
    AppServices, AnswerSubmitter, ClientConfig, DetailFetchError, StudentDetailSource,
    SubmitError,
};
use storage::repository::Storage;
use url::Url;

/// Answers after a per-student delay; `slow` fails with a server error.
struct DelayedSource;

#[async_trait]
impl StudentDetailSource for DelayedSource {
    async fn fetch(&self, student: &StudentId) -> Result<StudentDetail, DetailFetchError> {
        let delay = match student.as_str() {
            "slow" => 200,
            _ => 50,
        };
        tokio::time::sleep(Duration::from_millis(delay)).await;
        if student.as_str() == "broken" {
            return Err(DetailFetchError::HttpStatus(
                reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            ));
        }
        let mut detail = StudentDetail::default();
        detail
            .subject_proficiency
            .insert(format!("{}-subject", student.as_str()), 64.0);
        Ok(detail)
    }
}

struct NoSubmit;

#[async_trait]
impl AnswerSubmitter for NoSubmit {
    async fn submit(
        &self,
        _submission: &nura_core::quiz::Submission,
    ) -> Result<(), SubmitError> {
        Ok(())
    }
}

fn services() -> AppServices {
    AppServices::from_parts(
        nura_core::time::fixed_clock(),
        ClientConfig::new(Url::parse("http://localhost:5000/").unwrap()),
        Storage::in_memory(),
        Arc::new(NoSubmit),
        Arc::new(DelayedSource),
    )
}

fn id(raw: &str) -> StudentId {
    StudentId::new(raw).unwrap()
}

#[tokio::test]
async fn student_role_has_no_teacher_features() {
    let dashboard = services().dashboard(DashboardData::default(), DashboardRole::Student);
    assert!(dashboard.teacher().is_none());
}

#[tokio::test(start_paused = true)]
async fn slower_older_response_wins_the_panel() {
    let dashboard = services().dashboard(DashboardData::default(), DashboardRole::Teacher);
    let teacher = dashboard.teacher().unwrap();

    let slow = teacher.open_student(id("slow")).await;
    let fast = teacher.open_student(id("fast")).await;
    assert!(matches!(
        teacher.panel_state().await,
        PanelState::Loading { student } if student.as_str() == "fast"
    ));

    tokio::join!(teacher.complete(slow), teacher.complete(fast));

    let PanelState::Ready { student, rows, .. } = teacher.panel_state().await else {
        panic!("expected ready panel");
    };
    assert_eq!(student.as_str(), "slow");
    assert_eq!(rows[0].subject, "slow-subject");
    assert_eq!(rows[0].score_label(), "64.0%");
}

#[tokio::test(start_paused = true)]
async fn fetch_failure_becomes_error_placeholder() {
    let dashboard = services().dashboard(DashboardData::default(), DashboardRole::Teacher);
    let teacher = dashboard.teacher().unwrap();

    let state = teacher.load_student_detail(id("broken")).await;
    assert!(matches!(state, PanelState::Failed { message, .. } if message.contains("500")));

    teacher.close_panel().await;
    assert_eq!(teacher.panel_state().await, PanelState::Closed);
}
