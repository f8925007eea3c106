use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use nura_core::model::{DashboardRole, QuizConfig};
use services::{Dashboard, QuizRunner};
use tokio::sync::Mutex;

/// Page shown first after launch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StartPage {
    #[default]
    Home,
    Quiz,
    Dashboard,
}

pub trait UiApp: Send + Sync {
    fn start_page(&self) -> StartPage;

    /// Runner for the loaded quiz, if one was supplied.
    fn quiz_runner(&self) -> Option<QuizRunner>;

    /// Dashboard for the loaded data, if any was supplied.
    fn dashboard(&self) -> Option<Dashboard>;
}

/// The quiz being taken, shared between the page and its event loop.
#[derive(Clone)]
pub struct QuizHandle {
    config: Arc<QuizConfig>,
    runner: Arc<Mutex<QuizRunner>>,
}

impl QuizHandle {
    #[must_use]
    pub fn new(runner: QuizRunner) -> Self {
        Self {
            config: Arc::new(runner.session().config().clone()),
            runner: Arc::new(Mutex::new(runner)),
        }
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn runner(&self) -> Arc<Mutex<QuizRunner>> {
        Arc::clone(&self.runner)
    }

    /// True while an unsubmitted attempt is under way.
    ///
    /// A runner busy with an action counts as under way.
    #[must_use]
    pub fn blocks_leaving(&self) -> bool {
        self.runner
            .try_lock()
            .map_or(true, |runner| runner.session().blocks_leaving())
    }
}

impl PartialEq for QuizHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.runner, &other.runner)
    }
}

#[derive(Clone)]
pub struct DashboardHandle(pub Dashboard);

impl PartialEq for DashboardHandle {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.0.data(), other.0.data())
    }
}

#[derive(Clone)]
pub struct AppContext {
    start_page: StartPage,
    open_start_page_once: Arc<AtomicBool>,

    quiz: Option<QuizHandle>,
    dashboard: Option<Dashboard>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_page = app.start_page();
        Self {
            start_page,
            open_start_page_once: Arc::new(AtomicBool::new(start_page != StartPage::Home)),
            quiz: app.quiz_runner().map(QuizHandle::new),
            dashboard: app.dashboard(),
        }
    }

    /// The configured start page, handed out once.
    #[must_use]
    pub fn take_start_page(&self) -> Option<StartPage> {
        self.open_start_page_once
            .swap(false, Ordering::AcqRel)
            .then_some(self.start_page)
    }

    #[must_use]
    pub fn quiz(&self) -> Option<QuizHandle> {
        self.quiz.clone()
    }

    #[must_use]
    pub fn dashboard(&self) -> Option<DashboardHandle> {
        self.dashboard.clone().map(DashboardHandle)
    }

    /// Whether a loaded quiz would be abandoned by navigating away from it.
    #[must_use]
    pub fn quiz_in_progress(&self) -> bool {
        self.quiz.as_ref().is_some_and(QuizHandle::blocks_leaving)
    }

    #[must_use]
    pub fn role(&self) -> Option<DashboardRole> {
        self.dashboard.as_ref().map(Dashboard::role)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
