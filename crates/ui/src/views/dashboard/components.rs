use dioxus::prelude::*;
use nura_core::dashboard::{CardElevation, CategoryFilter, CounterAnimation, FILL_DELAY};

use crate::vm::BarVm;

/// Number that counts up from zero when mounted.
#[component]
pub(super) fn CounterTile(label: String, target: u64) -> Element {
    let mut shown = use_signal(|| 0_u64);

    use_future(move || async move {
        let animation = CounterAnimation::new(target);
        let mut frame = tokio::time::interval(animation.frame_interval());
        for value in animation.frames() {
            frame.tick().await;
            shown.set(value);
        }
    });

    rsx! {
        div { class: "counter-tile",
            span { class: "counter", "data-target": "{target}", "{shown}" }
            span { class: "counter-label", "{label}" }
        }
    }
}

/// Horizontal bar that fills shortly after it is mounted.
///
/// Remount (by changing its key) to replay the fill.
#[component]
pub(super) fn ScoreBar(bar: BarVm, hidden: bool) -> Element {
    let mut filling = use_signal(|| false);

    use_future(move || async move {
        tokio::time::sleep(FILL_DELAY).await;
        filling.set(true);
    });

    let style = bar.fill(filling()).style();
    rsx! {
        div { class: "score-row", "data-category": "{bar.category}", hidden,
            span { class: "score-label", "{bar.label}" }
            div { class: "progress",
                div { class: "progress-bar bg-{bar.band_class}", style: "{style}" }
            }
            span { class: "score-value text-{bar.band_class}", "{bar.score_label}" }
        }
    }
}

/// Card that lifts under the pointer and fades in once scrolled into view.
#[component]
pub(super) fn DashboardCard(card_id: String, title: String, reveal: String, children: Element) -> Element {
    let mut hovered = use_signal(|| false);
    let elevation = CardElevation::on_pointer(hovered());

    rsx! {
        div {
            class: "dashboard-card {reveal}",
            "data-card": "{card_id}",
            style: elevation.style(),
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            h3 { class: "card-title", "{title}" }
            {children}
        }
    }
}

#[component]
pub(super) fn FilterButton(
    option: CategoryFilter,
    active: bool,
    on_select: EventHandler<CategoryFilter>,
) -> Element {
    let label = match &option {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Only(tag) => tag.clone(),
    };
    let value = option.as_str().to_string();
    rsx! {
        button {
            class: if active { "filter-btn active" } else { "filter-btn" },
            r#type: "button",
            "data-filter": "{value}",
            onclick: move |_| on_select.call(option.clone()),
            "{label}"
        }
    }
}
