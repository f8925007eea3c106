use dioxus::document::eval;
use dioxus::prelude::*;
use nura_core::dashboard::{AUTO_REFRESH_INTERVAL, REVEAL_THRESHOLD, RevealTracker};
use nura_core::model::DashboardRole;
use tokio::time::{Instant, interval_at};
use tracing::debug;

use crate::context::{AppContext, DashboardHandle};
use crate::vm::{DashboardVm, NoticeQueue};

use super::super::notices::{NoticeStack, show_notice};
use super::super::scripts::reveal_observer_script;
use super::components::{CounterTile, DashboardCard, FilterButton, ScoreBar};
use super::teacher::TeacherSection;

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    match ctx.dashboard() {
        Some(handle) => rsx! { DashboardPage { handle } },
        None => rsx! {
            div { class: "page",
                h2 { "Dashboard" }
                p { class: "muted", "No dashboard data loaded." }
            }
        },
    }
}

#[component]
fn DashboardPage(handle: DashboardHandle) -> Element {
    let vm = use_hook(|| DashboardVm::from_dashboard(&handle.0));
    let mut filter = use_signal(|| vm.filter_bar());
    let notices = use_signal(NoticeQueue::new);
    let mut refreshing = use_signal(|| false);
    let mut epoch = use_signal(|| 0_u32);
    let mut revealed = use_signal(RevealTracker::new);

    let refresh = {
        let dashboard = handle.0.clone();
        use_callback(move |()| {
            let dashboard = dashboard.clone();
            spawn(async move {
                refreshing.set(true);
                let notice = dashboard.refresh().await;
                refreshing.set(dashboard.is_refreshing().await);
                if let Some(notice) = notice {
                    *epoch.write() += 1;
                    show_notice(notices, &notice);
                }
            });
        })
    };

    use_future(move || async move {
        let mut every = interval_at(Instant::now() + AUTO_REFRESH_INTERVAL, AUTO_REFRESH_INTERVAL);
        loop {
            every.tick().await;
            debug!("periodic dashboard refresh");
            refresh.call(());
        }
    });

    use_future(move || async move {
        let mut observer = eval(&reveal_observer_script(REVEAL_THRESHOLD));
        while let Ok((card, ratio)) = observer.recv::<(String, f64)>().await {
            revealed.write().observe(&card, ratio);
        }
    });

    let bar = filter.read().clone();
    let active = bar.active().clone();
    let tracker = revealed.read().clone();
    let generation = epoch();
    let filters_subjects = vm.role == DashboardRole::Student;
    let heading = match vm.role {
        DashboardRole::Student => "My Dashboard",
        DashboardRole::Teacher => "Class Dashboard",
    };

    rsx! {
        div { class: "page dashboard",
            NoticeStack { queue: notices }

            header { class: "dashboard-header",
                h2 { "{heading}" }
                button {
                    id: "refresh-btn",
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: refreshing(),
                    onclick: move |_| refresh.call(()),
                    if refreshing() { "Refreshing..." } else { "Refresh" }
                }
            }

            div { class: "counters",
                for (label, target) in vm.counters.clone() {
                    CounterTile { key: "{label}", label: label.clone(), target }
                }
            }

            div { class: "filters",
                for option in bar.options().to_vec() {
                    FilterButton {
                        key: "{option.as_str()}",
                        active: bar.is_active(&option),
                        option: option.clone(),
                        on_select: move |selected| filter.write().select(selected),
                    }
                }
            }

            DashboardCard {
                card_id: "score-trend",
                title: "Score Trend",
                reveal: tracker.class_for("score-trend").to_string(),
                if vm.trend.is_empty() {
                    p { class: "muted", "No quizzes taken yet." }
                }
                for item in vm.trend.clone() {
                    ScoreBar { key: "{item.key}-{generation}", bar: item.clone(), hidden: false }
                }
            }

            DashboardCard {
                card_id: "subject-breakdown",
                title: "Subject Breakdown",
                reveal: tracker.class_for("subject-breakdown").to_string(),
                for item in vm.subjects.clone() {
                    ScoreBar {
                        key: "{item.key}-{generation}",
                        hidden: filters_subjects && !active.matches(&item.category),
                        bar: item.clone(),
                    }
                }
            }

            if vm.role == DashboardRole::Teacher {
                DashboardCard {
                    card_id: "class-roster",
                    title: "Class Roster",
                    reveal: tracker.class_for("class-roster").to_string(),
                    TeacherSection {
                        handle: handle.clone(),
                        roster: vm.roster.clone(),
                        alerts: vm.alerts.clone(),
                        filter,
                        notices,
                    }
                }
            }
        }
    }
}
