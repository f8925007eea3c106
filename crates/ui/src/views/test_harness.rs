use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use nura_core::model::{
    Choice, ChoiceKey, DashboardData, DashboardRole, Question, QuestionId, QuizConfig,
    QuizDefinition, StudentDetail, StudentId,
};
use nura_core::quiz::Submission;
use nura_core::time::fixed_now;
use services::{
    AnswerSubmitter, AppServices, ClientConfig, Clock, Dashboard, DetailFetchError, QuizRunner,
    StudentDetailSource, SubmitError,
};
use storage::repository::Storage;
use url::Url;

use crate::context::{AppContext, StartPage, UiApp, build_app_context};
use crate::views::{DashboardView, HomeView, QuizView};

#[derive(Default)]
pub struct RecordingSubmitter {
    pub sent: Mutex<Vec<Submission>>,
}

#[async_trait]
impl AnswerSubmitter for RecordingSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        self.sent
            .lock()
            .expect("submitter lock")
            .push(submission.clone());
        Ok(())
    }
}

pub struct FixedSource;

#[async_trait]
impl StudentDetailSource for FixedSource {
    async fn fetch(&self, _student: &StudentId) -> Result<StudentDetail, DetailFetchError> {
        let mut detail = StudentDetail::default();
        detail.subject_proficiency.insert("Mathematics".into(), 72.0);
        Ok(detail)
    }
}

struct TestApp {
    start_page: StartPage,
    services: AppServices,
    quiz: Option<QuizConfig>,
    dashboard: Option<(DashboardData, DashboardRole)>,
}

impl UiApp for TestApp {
    fn start_page(&self) -> StartPage {
        self.start_page
    }

    fn quiz_runner(&self) -> Option<QuizRunner> {
        self.quiz
            .clone()
            .map(|quiz| self.services.quiz_runner(quiz))
    }

    fn dashboard(&self) -> Option<Dashboard> {
        self.dashboard
            .clone()
            .map(|(data, role)| self.services.dashboard(data, role))
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Quiz,
    Dashboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    use_context_provider(|| props.context.clone());
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Dashboard => rsx! { DashboardView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub context: AppContext,
    pub storage: Storage,
    pub submitter: Arc<RecordingSubmitter>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until the rendered markup contains `needle`, giving up after a few rounds.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        let mut html = self.render();
        for _ in 0..20 {
            if html.contains(needle) {
                break;
            }
            self.drive_async().await;
            html = self.render();
        }
        html
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// A quiz of `total` two-choice questions with ids 1..=total.
pub fn sample_quiz(total: u64, minutes: u32) -> QuizConfig {
    let questions = (1..=total)
        .map(|id| Question {
            id: QuestionId::new(id),
            prompt: format!("What is {id} + {id}?"),
            choices: ["a", "b"]
                .iter()
                .map(|key| Choice {
                    key: ChoiceKey::new(*key),
                    label: format!("Option {key}"),
                })
                .collect(),
        })
        .collect();
    let base = Url::parse("http://127.0.0.1:5000/").expect("base url");
    QuizConfig::with_base(
        QuizDefinition {
            title: "Arithmetic".into(),
            time_limit_minutes: minutes,
            action_url: "/quiz/submit".into(),
            questions,
        },
        &base,
    )
    .expect("valid quiz")
}

pub struct HarnessSetup {
    pub view: ViewKind,
    pub start_page: StartPage,
    pub quiz: Option<QuizConfig>,
    pub dashboard: Option<(DashboardData, DashboardRole)>,
    pub storage: Storage,
}

impl HarnessSetup {
    pub fn new(view: ViewKind) -> Self {
        Self {
            view,
            start_page: StartPage::Home,
            quiz: None,
            dashboard: None,
            storage: Storage::in_memory(),
        }
    }
}

pub fn setup_view_harness(setup: HarnessSetup) -> ViewHarness {
    let submitter = Arc::new(RecordingSubmitter::default());
    let base = Url::parse("http://127.0.0.1:5000/").expect("base url");
    let services = AppServices::from_parts(
        Clock::fixed(fixed_now()),
        ClientConfig::new(base),
        setup.storage.clone(),
        Arc::clone(&submitter) as Arc<dyn AnswerSubmitter>,
        Arc::new(FixedSource),
    );

    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        start_page: setup.start_page,
        services,
        quiz: setup.quiz,
        dashboard: setup.dashboard,
    });
    let context = build_app_context(&app);

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            context: context.clone(),
            view: setup.view,
        },
    );

    ViewHarness {
        dom,
        context,
        storage: setup.storage,
        submitter,
    }
}
