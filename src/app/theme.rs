//! Theme context for the Dioxus UI.
//!
//! The dark flag lives in a signal that doubles as the controller's toggle
//! control, so the rendered checkbox follows the resolved theme.

use dioxus::prelude::*;

use crate::config::ThemeConfig;
use crate::dom::ToggleControl;
use crate::error::ThemeError;
use crate::theme::Theme;

impl ToggleControl for Signal<bool> {
    fn is_checked(&self) -> bool {
        *self.peek()
    }

    fn set_checked(&mut self, checked: bool) {
        self.set(checked);
    }
}

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    dark: Signal<bool>,
    config: Signal<ThemeConfig>,
}

impl ThemeContext {
    pub fn is_dark(&self) -> bool {
        (self.dark)()
    }

    /// Id the checkbox is rendered with
    pub fn toggle_id(&self) -> String {
        self.config.read().toggle_id.clone()
    }

    /// Apply a checkbox change and persist it.
    ///
    /// The signal and root class are updated before the write, so a storage
    /// failure still leaves the page showing the state the user chose.
    pub fn set_dark(&self, checked: bool) -> Result<Theme, ThemeError> {
        let mut dark = self.dark;
        dark.set(checked);

        #[cfg(target_arch = "wasm32")]
        {
            use crate::page::controller_with;
            use crate::web::Page;

            let config = self.config.peek().clone();
            controller_with(&Page::current()?, config, self.dark)?.on_toggle(checked)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Ok(Theme::from_checked(checked))
        }
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider(config: ThemeConfig) -> ThemeContext {
    let dark = use_signal(|| false);
    let config = use_signal(move || config);

    let ctx = use_context_provider(|| ThemeContext { dark, config });

    // Client-side only: resolve from localStorage / OS preference once mounted
    #[cfg(target_arch = "wasm32")]
    {
        use crate::page::{controller_with, PageSurfaces};
        use crate::web::Page;

        use_effect(move || {
            let config = config.peek().clone();
            let result = Page::current().and_then(|page| {
                let scheme = page.color_scheme(&config.color_scheme_query);
                controller_with(&page, config, dark)?.init(&scheme)
            });
            if let Err(e) = result {
                tracing::error!("Theme setup failed: {}", e);
            }
        });
    }

    ctx
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}
