//! Page setup: config lookup and controller assembly.
//!
//! Generic over [`PageSurfaces`] so the browser bindings and the Dioxus
//! context share one setup path, and tests can run it against fakes.

use tracing::{debug, warn};

use crate::config::{ThemeConfig, CONFIG_ELEMENT_ID};
use crate::controller::ThemeController;
use crate::dom::{ColorSchemeSource, RootClassList, ToggleControl};
use crate::error::ThemeError;
use crate::store::ThemeStore;

/// Everything the controller needs from a loaded page.
pub trait PageSurfaces {
    type Store: ThemeStore;
    type Root: RootClassList;
    type Toggle: ToggleControl;
    type Scheme: ColorSchemeSource;

    /// Text content of the element with `id`, if present.
    fn element_text(&self, id: &str) -> Option<String>;

    /// Handle on persistent storage.
    ///
    /// Must not fail: an unavailable backend reports from `get`/`set`, so the
    /// root class is still applied before a write error surfaces.
    fn store(&self) -> Self::Store;

    fn root(&self) -> Result<Self::Root, ThemeError>;

    /// The checkbox with `id`; missing or non-checkbox elements are errors.
    fn toggle(&self, id: &str) -> Result<Self::Toggle, ThemeError>;

    fn color_scheme(&self, query: &str) -> Self::Scheme;
}

/// Config overrides from the `#theme-config` element.
///
/// A malformed or invalid override is logged and the defaults are used, so a
/// bad config block never costs the page its theme toggle.
pub fn page_config(page: &impl PageSurfaces) -> ThemeConfig {
    match page.element_text(CONFIG_ELEMENT_ID) {
        Some(json) if !json.trim().is_empty() => match ThemeConfig::from_json(&json) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
                ThemeConfig::default()
            }
        },
        _ => ThemeConfig::default(),
    }
}

/// Controller over `page` with a caller-supplied toggle.
pub fn controller_with<P, T>(
    page: &P,
    config: ThemeConfig,
    toggle: T,
) -> Result<ThemeController<P::Store, P::Root, T>, ThemeError>
where
    P: PageSurfaces,
    T: ToggleControl,
{
    let root = page.root()?;
    Ok(ThemeController::new(config, page.store(), root, toggle))
}

/// Page-ready setup: find the checkbox (fatal if absent) and resolve the
/// initial theme.
pub fn mount<P: PageSurfaces>(
    page: &P,
    config: ThemeConfig,
) -> Result<ThemeController<P::Store, P::Root, P::Toggle>, ThemeError> {
    let toggle = page.toggle(&config.toggle_id)?;
    let scheme = page.color_scheme(&config.color_scheme_query);

    let mut controller = controller_with(page, config, toggle)?;
    let theme = controller.init(&scheme)?;
    debug!("Mounted theme controller ({})", theme);
    Ok(controller)
}
