//! Theme controller: keeps storage, root class and toggle in step.
//!
//! The controller owns no browser globals. Storage, the root element and the
//! checkbox are injected, so the same logic runs against `localStorage` in the
//! browser, a Dioxus signal in the component, and in-memory doubles in tests.

use tracing::{debug, info};

use crate::config::ThemeConfig;
use crate::dom::{ColorSchemeSource, RootClassList, ToggleControl};
use crate::error::ThemeError;
use crate::store::ThemeStore;
use crate::theme::Theme;

pub struct ThemeController<S, R, T> {
    config: ThemeConfig,
    store: S,
    root: R,
    toggle: T,
    current: Theme,
}

impl<S, R, T> ThemeController<S, R, T>
where
    S: ThemeStore,
    R: RootClassList,
    T: ToggleControl,
{
    pub fn new(config: ThemeConfig, store: S, root: R, toggle: T) -> Self {
        Self {
            config,
            store,
            root,
            toggle,
            current: Theme::Light,
        }
    }

    /// Page-ready handler: resolve the theme and reflect it on the page.
    ///
    /// Reads storage but never writes it.
    pub fn init(&mut self, scheme: &impl ColorSchemeSource) -> Result<Theme, ThemeError> {
        let stored = self.store.get(&self.config.storage_key)?;
        let prefers_dark = scheme.prefers_dark();
        let theme = Theme::resolve(stored.as_deref(), prefers_dark);

        info!(
            "Theme resolved to {} (stored: {:?}, prefers dark: {})",
            theme, stored, prefers_dark
        );

        self.reflect(theme);
        Ok(theme)
    }

    /// Change handler for the checkbox.
    ///
    /// The root class is updated before the write, so a failed write leaves
    /// the page showing the new theme without persisting it.
    pub fn on_toggle(&mut self, checked: bool) -> Result<Theme, ThemeError> {
        let theme = Theme::from_checked(checked);
        self.reflect(theme);

        debug!("Persisting theme {} under '{}'", theme, self.config.storage_key);
        self.store.set(&self.config.storage_key, theme.as_str())?;
        Ok(theme)
    }

    pub fn theme(&self) -> Theme {
        self.current
    }

    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn toggle(&self) -> &T {
        &self.toggle
    }

    fn reflect(&mut self, theme: Theme) {
        self.root.set_class(&self.config.dark_class, theme.is_dark());
        if self.toggle.is_checked() != theme.is_dark() {
            self.toggle.set_checked(theme.is_dark());
        }
        self.current = theme;
    }
}
