use std::sync::Arc;

use nura_core::dashboard::{
    ChartSeries, ClassAction, CounterAnimation, DetailPanel, DetailRequest, MANUAL_REFRESH_DELAY,
    PanelState, RefreshController,
};
use nura_core::model::{DashboardData, DashboardRole, Notification, StudentId};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::performance::StudentDetailSource;

/// Dashboard capabilities shared by every role.
#[derive(Clone)]
pub struct Dashboard {
    data: Arc<DashboardData>,
    refresh: Arc<Mutex<RefreshController>>,
    teacher: Option<TeacherFeatures>,
}

impl Dashboard {
    #[must_use]
    pub fn new(data: DashboardData) -> Self {
        Self {
            data: Arc::new(data),
            refresh: Arc::new(Mutex::new(RefreshController::new())),
            teacher: None,
        }
    }

    /// Attach the teacher extension.
    #[must_use]
    pub fn with_teacher(mut self, teacher: TeacherFeatures) -> Self {
        self.teacher = Some(teacher);
        self
    }

    #[must_use]
    pub fn role(&self) -> DashboardRole {
        if self.teacher.is_some() {
            DashboardRole::Teacher
        } else {
            DashboardRole::Student
        }
    }

    #[must_use]
    pub fn data(&self) -> &DashboardData {
        &self.data
    }

    #[must_use]
    pub fn teacher(&self) -> Option<&TeacherFeatures> {
        self.teacher.as_ref()
    }

    #[must_use]
    pub fn score_trend(&self) -> ChartSeries {
        ChartSeries::score_trend(&self.data)
    }

    #[must_use]
    pub fn subject_breakdown(&self) -> ChartSeries {
        ChartSeries::subject_breakdown(&self.data)
    }

    #[must_use]
    pub fn counters(&self) -> Vec<(String, CounterAnimation)> {
        self.data
            .counters
            .iter()
            .map(|tile| (tile.label.clone(), CounterAnimation::new(tile.value)))
            .collect()
    }

    pub async fn is_refreshing(&self) -> bool {
        self.refresh.lock().await.is_in_flight()
    }

    /// Run one manual refresh. Returns `None` if a refresh was already running.
    pub async fn refresh(&self) -> Option<Notification> {
        if !self.refresh.lock().await.begin() {
            return None;
        }
        tokio::time::sleep(MANUAL_REFRESH_DELAY).await;
        let notice = self.refresh.lock().await.finish();
        info!("dashboard refreshed");
        notice
    }

    pub async fn refresh_count(&self) -> u32 {
        self.refresh.lock().await.completed()
    }
}

/// Teacher-only extension: student drill-down and class actions.
#[derive(Clone)]
pub struct TeacherFeatures {
    source: Arc<dyn StudentDetailSource>,
    panel: Arc<Mutex<DetailPanel>>,
}

impl TeacherFeatures {
    #[must_use]
    pub fn new(source: Arc<dyn StudentDetailSource>) -> Self {
        Self {
            source,
            panel: Arc::new(Mutex::new(DetailPanel::new())),
        }
    }

    pub async fn panel_state(&self) -> PanelState {
        self.panel.lock().await.state().clone()
    }

    /// Show the loading placeholder and hand back the request ticket.
    pub async fn open_student(&self, student: StudentId) -> DetailRequest {
        self.panel.lock().await.open(student)
    }

    /// Fetch the detail for an opened request and apply it to the panel.
    ///
    /// The panel lock is not held across the fetch, so concurrent requests
    /// resolve in completion order.
    pub async fn complete(&self, request: DetailRequest) -> PanelState {
        let result = self
            .source
            .fetch(&request.student)
            .await
            .map_err(|err| {
                warn!(student = %request.student, error = %err, "student detail fetch failed");
                err.to_string()
            });

        let mut panel = self.panel.lock().await;
        panel.resolve(request, result);
        panel.state().clone()
    }

    /// Open the panel for `student` and load its detail.
    pub async fn load_student_detail(&self, student: StudentId) -> PanelState {
        let request = self.open_student(student).await;
        self.complete(request).await
    }

    pub async fn close_panel(&self) {
        self.panel.lock().await.close();
    }

    #[must_use]
    pub fn class_action(&self, action: ClassAction) -> Option<Notification> {
        info!(action = action.as_str(), "class action");
        action.notification()
    }
}
