use chrono::NaiveDate;
use nura_core::model::{
    AnswerSheet, ChoiceKey, CounterTile, DashboardData, DashboardRole, PerformanceData,
    QuestionId, QuizAttempt, StudentId, StudentStanding, SubjectStat,
};
use dioxus::prelude::*;
use nura_core::quiz::QuizAction;
use services::AnswerPersistence;
use std::sync::Arc;

use super::test_harness::{HarnessSetup, ViewKind, drive_dom, sample_quiz, setup_view_harness};
use crate::routes::{LeavePrompt, Route, leaving_needs_confirm};

fn dashboard_data() -> DashboardData {
    let mut data = DashboardData {
        performance_data: PerformanceData {
            recent_quizzes: vec![QuizAttempt {
                topic: Some("Fractions".into()),
                score: 82.5,
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            }],
        },
        counters: vec![CounterTile {
            label: "Quizzes Taken".into(),
            value: 12,
        }],
        students: vec![
            StudentStanding {
                learner_name: "Ada Lovelace".into(),
                student_id: StudentId::new("s1").unwrap(),
                avg_score: 91.0,
                quiz_count: 5,
            },
            StudentStanding {
                learner_name: "Alan Turing".into(),
                student_id: StudentId::new("s2").unwrap(),
                avg_score: 42.0,
                quiz_count: 3,
            },
        ],
        ..DashboardData::default()
    };
    data.subject_data.insert(
        "Mathematics".into(),
        SubjectStat {
            average_score: 74.0,
            total_quizzes: 6,
        },
    );
    data
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_links_loaded_pages() {
    let mut setup = HarnessSetup::new(ViewKind::Home);
    setup.quiz = Some(sample_quiz(2, 10));
    setup.dashboard = Some((DashboardData::default(), DashboardRole::Student));
    let mut harness = setup_view_harness(setup);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Take the quiz"), "missing quiz link in {html}");
    assert!(html.contains("Student dashboard"), "missing dashboard link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_without_quiz_shows_placeholder() {
    let mut harness = setup_view_harness(HarnessSetup::new(ViewKind::Quiz));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No quiz loaded."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_renders_questions_and_timer() {
    let mut setup = HarnessSetup::new(ViewKind::Quiz);
    setup.quiz = Some(sample_quiz(3, 10));
    let mut harness = setup_view_harness(setup);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Arithmetic"), "missing title in {html}");
    assert!(html.contains("What is 3 + 3?"), "missing prompt in {html}");
    assert!(html.contains("10:00"), "missing timer in {html}");
    assert!(html.contains("Answered: 0"), "missing count in {html}");
    assert!(html.contains("question_1"), "missing field name in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_starts_on_first_question_with_saved_answers() {
    let mut setup = HarnessSetup::new(ViewKind::Quiz);
    setup.quiz = Some(sample_quiz(3, 10));
    let answers = AnswerPersistence::new(Arc::clone(&setup.storage.local));
    let saved: AnswerSheet = [(QuestionId::new(1), ChoiceKey::new("b"))]
        .into_iter()
        .collect();
    answers.save(&saved).await.expect("save answers");

    let mut harness = setup_view_harness(setup);
    harness.rebuild();
    let html = harness.drive_until("Answered: 1").await;
    assert!(html.contains("Answered: 1"), "missing restored count in {html}");
    assert!(html.contains("Remaining: 2"), "missing remaining in {html}");
    assert!(
        html.contains("question-nav-btn current answered"),
        "missing restored marker in {html}"
    );
    assert!(html.contains("question-panel active"), "no visible panel in {html}");
    assert!(harness.submitter.sent.lock().unwrap().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_without_data_shows_placeholder() {
    let mut harness = setup_view_harness(HarnessSetup::new(ViewKind::Dashboard));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("No dashboard data loaded."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn student_dashboard_renders_charts_and_filters() {
    let mut setup = HarnessSetup::new(ViewKind::Dashboard);
    setup.dashboard = Some((dashboard_data(), DashboardRole::Student));
    let mut harness = setup_view_harness(setup);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("My Dashboard"), "missing heading in {html}");
    assert!(html.contains("Quizzes Taken"), "missing counter in {html}");
    assert!(html.contains("Mar 1, 2024"), "missing trend label in {html}");
    assert!(html.contains("82.5%"), "missing trend score in {html}");
    assert!(html.contains("data-filter=\"Mathematics\""), "missing filter in {html}");
    assert!(html.contains("Refresh"), "missing refresh button in {html}");
    assert!(!html.contains("Class Roster"), "student sees roster in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn teacher_dashboard_renders_roster_alerts_and_actions() {
    let mut setup = HarnessSetup::new(ViewKind::Dashboard);
    setup.dashboard = Some((dashboard_data(), DashboardRole::Teacher));
    let mut harness = setup_view_harness(setup);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Class Dashboard"), "missing heading in {html}");
    assert!(html.contains("Ada Lovelace"), "missing roster row in {html}");
    assert!(html.contains("Needs attention"), "missing alerts in {html}");
    assert!(html.contains("status-dot status-red"), "missing red status in {html}");
    assert!(html.contains("Export Data"), "missing class action in {html}");
    assert!(html.contains("data-filter=\"green\""), "missing status filter in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn leaving_a_started_quiz_needs_confirmation_until_submitted() {
    let mut setup = HarnessSetup::new(ViewKind::Quiz);
    setup.quiz = Some(sample_quiz(2, 10));
    let mut harness = setup_view_harness(setup);
    let quiz = harness.context.quiz().expect("quiz handle");
    assert!(!harness.context.quiz_in_progress());

    harness.rebuild();
    let html = harness.drive_until("question-panel active").await;
    assert!(html.contains("question-panel active"), "quiz did not start in {html}");
    assert!(harness.context.quiz_in_progress());
    assert!(leaving_needs_confirm(
        &Route::Quiz {},
        &Route::Home {},
        harness.context.quiz_in_progress()
    ));

    {
        let runner = quiz.runner();
        let mut runner = runner.lock().await;
        runner.dispatch(QuizAction::RequestSubmit).await;
        runner.dispatch(QuizAction::ConfirmSubmit).await;
    }
    assert!(!harness.context.quiz_in_progress());
    assert_eq!(harness.submitter.sent.lock().unwrap().len(), 1);
}

#[component]
fn LeavePromptHarness() -> Element {
    rsx! {
        LeavePrompt { on_stay: move |()| {}, on_leave: move |()| {} }
    }
}

#[test]
fn leave_prompt_warns_about_lost_progress() {
    let mut dom = VirtualDom::new(LeavePromptHarness);
    dom.rebuild_in_place();
    drive_dom(&mut dom);
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Leave quiz?"), "missing heading in {html}");
    assert!(
        html.contains("Your quiz progress will be lost."),
        "missing warning in {html}"
    );
    assert!(html.contains("Stay"), "missing stay button in {html}");
}
