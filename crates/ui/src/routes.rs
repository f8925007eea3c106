use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_navigator, use_route};
use nura_core::quiz::LEAVE_WARNING;

use crate::context::AppContext;
use crate::views::{DashboardView, HomeView, QuizView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/dashboard", DashboardView)] Dashboard {},
}

/// True when going from `from` to `to` would abandon a quiz in progress.
#[must_use]
pub fn leaving_needs_confirm(from: &Route, to: &Route, quiz_in_progress: bool) -> bool {
    quiz_in_progress && matches!(from, Route::Quiz {}) && !matches!(to, Route::Quiz {})
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let route = use_route::<Route>();
    let navigator = use_navigator();
    let mut pending = use_signal(|| None::<Route>);

    let request = use_callback(move |target: Route| {
        if leaving_needs_confirm(&route, &target, ctx.quiz_in_progress()) {
            pending.set(Some(target));
        } else {
            navigator.push(target);
        }
    });

    let links = [
        ("Home", Route::Home {}),
        ("Quiz", Route::Quiz {}),
        ("Dashboard", Route::Dashboard {}),
    ];

    rsx! {
        nav { class: "sidebar",
            h1 { "Nura" }
            ul {
                for (label, target) in links {
                    li { key: "{label}",
                        a {
                            href: "{target}",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                request.call(target.clone());
                            },
                            "{label}"
                        }
                    }
                }
            }
        }

        if let Some(target) = pending() {
            LeavePrompt {
                on_stay: move |()| pending.set(None),
                on_leave: move |()| {
                    pending.set(None);
                    navigator.push(target.clone());
                },
            }
        }
    }
}

#[component]
pub(crate) fn LeavePrompt(on_stay: EventHandler<()>, on_leave: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-backdrop",
            div { id: "leave-prompt", class: "modal", role: "dialog",
                h3 { "Leave quiz?" }
                p { "{LEAVE_WARNING}" }
                div { class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| on_stay.call(()),
                        "Stay"
                    }
                    button {
                        class: "btn btn-danger",
                        r#type: "button",
                        onclick: move |_| on_leave.call(()),
                        "Leave"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_leaving_an_active_quiz_needs_confirmation() {
        let quiz = Route::Quiz {};
        assert!(leaving_needs_confirm(&quiz, &Route::Home {}, true));
        assert!(leaving_needs_confirm(&quiz, &Route::Dashboard {}, true));
        assert!(!leaving_needs_confirm(&quiz, &Route::Quiz {}, true));
        assert!(!leaving_needs_confirm(&quiz, &Route::Home {}, false));
        assert!(!leaving_needs_confirm(&Route::Home {}, &Route::Dashboard {}, true));
    }
}
