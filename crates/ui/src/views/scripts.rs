pub(crate) const SCROLL_TO_TOP_SCRIPT: &str = "window.scrollTo({ top: 0, behavior: 'smooth' });";

/// Reports `document.hidden` on every visibility change.
pub(crate) const VISIBILITY_SCRIPT: &str = r#"
    const report = () => dioxus.send(document.hidden);
    document.addEventListener("visibilitychange", report);
    await new Promise(() => {});
"#;

/// Reports `[card id, visible ratio]` for each `[data-card]` element that
/// intersects the viewport.
pub(crate) fn reveal_observer_script(threshold: f64) -> String {
    format!(
        r#"
        const observer = new IntersectionObserver((entries) => {{
            for (const entry of entries) {{
                if (entry.isIntersecting) {{
                    dioxus.send([entry.target.dataset.card, entry.intersectionRatio]);
                }}
            }}
        }}, {{ threshold: {threshold}, rootMargin: "0px 0px -50px 0px" }});
        const watch = () => document
            .querySelectorAll("[data-card]")
            .forEach((card) => observer.observe(card));
        watch();
        new MutationObserver(watch).observe(document.body, {{ childList: true, subtree: true }});
        await new Promise(() => {{}});
        "#,
    )
}
