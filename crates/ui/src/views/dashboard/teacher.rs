use dioxus::prelude::*;
use nura_core::dashboard::{ClassAction, FilterBar};
use nura_core::model::StudentId;

use crate::context::DashboardHandle;
use crate::vm::{NoticeQueue, RosterRowVm, StudentDetailVm, map_student_detail};

use super::super::notices::show_notice;
use super::components::ScoreBar;

#[component]
pub(super) fn TeacherSection(
    handle: DashboardHandle,
    roster: Vec<RosterRowVm>,
    alerts: Vec<RosterRowVm>,
    filter: Signal<FilterBar>,
    notices: Signal<NoticeQueue>,
) -> Element {
    let mut detail = use_signal(|| StudentDetailVm::Hidden);

    let open_student = {
        let handle = handle.clone();
        use_callback(move |student: StudentId| {
            let Some(teacher) = handle.0.teacher().cloned() else {
                return;
            };
            spawn(async move {
                let request = teacher.open_student(student).await;
                detail.set(map_student_detail(&teacher.panel_state().await));
                let state = teacher.complete(request).await;
                detail.set(map_student_detail(&state));
            });
        })
    };

    let close_detail = {
        let handle = handle.clone();
        use_callback(move |()| {
            detail.set(StudentDetailVm::Hidden);
            if let Some(teacher) = handle.0.teacher().cloned() {
                spawn(async move { teacher.close_panel().await });
            }
        })
    };

    let class_action = use_callback(move |action: ClassAction| {
        let notice = handle
            .0
            .teacher()
            .and_then(|teacher| teacher.class_action(action));
        if let Some(notice) = notice {
            show_notice(notices, &notice);
        }
    });

    let active = filter.read().active().clone();
    let detail_vm = detail.read().clone();

    rsx! {
        section { class: "teacher-section",
            div { class: "class-actions",
                for action in ClassAction::ALL {
                    button {
                        key: "{action.as_str()}",
                        class: "btn btn-outline class-action",
                        r#type: "button",
                        "data-action": action.as_str(),
                        onclick: move |_| class_action.call(action),
                        "{action.label()}"
                    }
                }
            }

            if !alerts.is_empty() {
                div { class: "alerts",
                    h3 { "Needs attention" }
                    for row in alerts {
                        AlertRow { key: "alert-{row.student_id}", row: row.clone(), on_open: open_student }
                    }
                }
            }

            table { class: "roster",
                thead {
                    tr {
                        th { "" }
                        th { "Student" }
                        th { "Average" }
                        th { "Quizzes" }
                    }
                }
                tbody {
                    for row in roster {
                        RosterRow {
                            key: "{row.student_id}",
                            hidden: !active.matches(row.category()),
                            row: row.clone(),
                            on_open: open_student,
                        }
                    }
                }
            }

            if detail_vm.is_open() {
                StudentDetailModal { detail: detail_vm, on_close: close_detail }
            }
        }
    }
}

#[component]
fn AlertRow(row: RosterRowVm, on_open: Callback<StudentId>) -> Element {
    let student = row.student_id.clone();
    rsx! {
        button {
            class: "alert-item",
            r#type: "button",
            "data-student-id": "{row.student_id}",
            onclick: move |_| on_open.call(student.clone()),
            "{row.name} · {row.average_label}"
        }
    }
}

#[component]
fn RosterRow(row: RosterRowVm, hidden: bool, on_open: Callback<StudentId>) -> Element {
    let student = row.student_id.clone();
    rsx! {
        tr {
            class: "student-row",
            "data-category": row.category(),
            "data-student-id": "{row.student_id}",
            hidden,
            onclick: move |_| on_open.call(student.clone()),
            td { span { class: row.status_class() } }
            td { "{row.name}" }
            td { "{row.average_label}" }
            td { "{row.quiz_count}" }
        }
    }
}

#[component]
fn StudentDetailModal(detail: StudentDetailVm, on_close: Callback<()>) -> Element {
    let title = detail.title();
    rsx! {
        div { class: "modal-backdrop",
            div { id: "studentDetailModal", class: "modal", role: "dialog",
                header { class: "modal-header",
                    h3 { "{title}" }
                    button {
                        class: "btn-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "modal-body",
                    match detail {
                        StudentDetailVm::Hidden => rsx! {},
                        StudentDetailVm::Loading { .. } => rsx! {
                            div { class: "loading", "Loading student data..." }
                        },
                        StudentDetailVm::Failed { .. } => rsx! {
                            div { class: "alert alert-danger", "Failed to load student data." }
                        },
                        StudentDetailVm::Ready { subjects, trend, .. } => rsx! {
                            h4 { "Subject Performance" }
                            for bar in subjects {
                                ScoreBar { key: "{bar.key}", bar: bar.clone(), hidden: false }
                            }
                            if !trend.is_empty() {
                                h4 { "Recent Trend" }
                                for bar in trend {
                                    ScoreBar { key: "{bar.key}", bar: bar.clone(), hidden: false }
                                }
                            }
                        },
                    }
                }
            }
        }
    }
}
