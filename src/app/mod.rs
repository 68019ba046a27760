//! Dioxus application entry point.
//!
//! Provides the root `App` component: the site header with the theme toggle.

use dioxus::prelude::*;

pub mod components;
pub mod theme;

use crate::config::ThemeConfig;
use components::ThemeToggle;
use theme::use_theme_provider;

/// Root app component
#[component]
pub fn App() -> Element {
    let config = use_hook(initial_config);

    // Initialize theme context at app root (handles localStorage + DOM class)
    use_theme_provider(config);

    rsx! {
        header {
            class: "site-header",
            a { class: "brand", href: "/", "BigHouse" }
            ThemeToggle {}
        }
    }
}

/// Page-supplied overrides in the browser, defaults elsewhere.
fn initial_config() -> ThemeConfig {
    #[cfg(target_arch = "wasm32")]
    {
        match crate::web::Page::current() {
            Ok(page) => return crate::page::page_config(&page),
            Err(e) => tracing::warn!("No page for theme config: {}", e),
        }
    }
    ThemeConfig::default()
}
