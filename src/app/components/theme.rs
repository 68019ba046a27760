//! Dark mode checkbox.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Checkbox switching between light and dark.
///
/// Rendered with the configured toggle id so server-rendered pages and the
/// Dioxus UI share the same DOM contract.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let toggle_id = theme.toggle_id();

    rsx! {
        label {
            class: "theme-toggle",
            r#for: "{toggle_id}",
            input {
                r#type: "checkbox",
                id: "{toggle_id}",
                checked: theme.is_dark(),
                onchange: move |evt: Event<FormData>| {
                    if let Err(e) = theme.set_dark(evt.checked()) {
                        tracing::error!("Theme change not persisted: {}", e);
                    }
                },
            }
            span { class: "theme-toggle-track", aria_hidden: "true" }
            span { class: "sr-only", "Dark mode" }
        }
    }
}
