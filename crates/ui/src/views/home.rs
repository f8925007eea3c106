use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::{AppContext, StartPage};
use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    use_hook(|| match ctx.take_start_page() {
        Some(StartPage::Quiz) => {
            navigator.replace(Route::Quiz {});
        }
        Some(StartPage::Dashboard) => {
            navigator.replace(Route::Dashboard {});
        }
        Some(StartPage::Home) | None => {}
    });

    let has_quiz = ctx.quiz().is_some();
    let role_label = ctx.role().map(|role| match role {
        nura_core::model::DashboardRole::Student => "Student dashboard",
        nura_core::model::DashboardRole::Teacher => "Teacher dashboard",
    });

    rsx! {
        div { class: "page",
            h2 { "Home" }
            if has_quiz {
                p { Link { to: Route::Quiz {}, "Take the quiz" } }
            } else {
                p { class: "muted", "No quiz loaded." }
            }
            if let Some(label) = role_label {
                p { Link { to: Route::Dashboard {}, "{label}" } }
            } else {
                p { class: "muted", "No dashboard data loaded." }
            }
        }
    }
}
