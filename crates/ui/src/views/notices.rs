use dioxus::prelude::*;
use nura_core::model::Notification;

use crate::vm::NoticeQueue;

/// Show `notification` and dismiss it once its duration has passed.
pub(crate) fn show_notice(mut queue: Signal<NoticeQueue>, notification: &Notification) {
    let id = queue.write().push(notification);
    let duration = notification.duration;
    spawn(async move {
        tokio::time::sleep(duration).await;
        queue.write().dismiss(id);
    });
}

#[component]
pub(crate) fn NoticeStack(queue: Signal<NoticeQueue>) -> Element {
    let items = queue.read().items().to_vec();
    rsx! {
        div { class: "notifications",
            for item in items {
                div { key: "{item.id}", class: "{item.class}", role: "alert",
                    span { "{item.message}" }
                    button {
                        class: "btn-close",
                        r#type: "button",
                        "aria-label": "Close",
                        onclick: move |_| {
                            queue.write().dismiss(item.id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}
