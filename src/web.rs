//! Browser bindings (wasm32 only).
//!
//! This is the one module allowed to touch `window`, `localStorage` and the
//! live document; everything else goes through the traits in `dom`, `store`
//! and `page`.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, Storage, Window};

use crate::dom::{ColorSchemeSource, RootClassList, ToggleControl};
use crate::error::ThemeError;
use crate::page::{mount, page_config, PageSurfaces};
use crate::store::ThemeStore;

/// `window.localStorage`, looked up on every access.
///
/// Disabled or denied storage only fails the read or write that hits it.
pub struct LocalStorage {
    window: Window,
}

impl LocalStorage {
    fn storage(&self) -> Result<Storage, ThemeError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(ThemeError::StorageUnavailable(
                "localStorage is not supported".into(),
            )),
            Err(e) => Err(ThemeError::StorageUnavailable(format!("{:?}", e))),
        }
    }
}

impl ThemeStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| ThemeError::StorageRead {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| ThemeError::StorageWrite {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// `document.documentElement`
pub struct RootElement(Element);

impl RootClassList for RootElement {
    fn set_class(&mut self, class: &str, present: bool) {
        let list = self.0.class_list();
        let result = if present {
            list.add_1(class)
        } else {
            list.remove_1(class)
        };
        if let Err(e) = result {
            warn!("Failed to update root class '{}': {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }
}

/// The `<input type="checkbox">` driving the theme.
#[derive(Clone)]
pub struct CheckboxToggle(HtmlInputElement);

impl CheckboxToggle {
    pub fn input(&self) -> &HtmlInputElement {
        &self.0
    }
}

impl ToggleControl for CheckboxToggle {
    fn is_checked(&self) -> bool {
        self.0.checked()
    }

    fn set_checked(&mut self, checked: bool) {
        self.0.set_checked(checked);
    }
}

/// `matchMedia(query).matches`, evaluated when asked.
pub struct MediaQueryScheme {
    window: Window,
    query: String,
}

impl ColorSchemeSource for MediaQueryScheme {
    fn prefers_dark(&self) -> bool {
        match self.window.match_media(&self.query) {
            Ok(Some(list)) => list.matches(),
            Ok(None) => false,
            Err(e) => {
                debug!("matchMedia('{}') failed: {:?}", self.query, e);
                false
            }
        }
    }
}

/// Handles on the current window and document.
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    pub fn current() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::NoDocument)?;
        let document = window.document().ok_or(ThemeError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl PageSurfaces for Page {
    type Store = LocalStorage;
    type Root = RootElement;
    type Toggle = CheckboxToggle;
    type Scheme = MediaQueryScheme;

    fn element_text(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
    }

    fn store(&self) -> LocalStorage {
        LocalStorage {
            window: self.window.clone(),
        }
    }

    fn root(&self) -> Result<RootElement, ThemeError> {
        self.document
            .document_element()
            .map(RootElement)
            .ok_or(ThemeError::NoDocument)
    }

    fn toggle(&self, id: &str) -> Result<CheckboxToggle, ThemeError> {
        let element = self
            .document
            .get_element_by_id(id)
            .ok_or_else(|| ThemeError::MissingToggle(id.to_string()))?;
        element
            .dyn_into::<HtmlInputElement>()
            .map(CheckboxToggle)
            .map_err(|_| ThemeError::NotACheckbox(id.to_string()))
    }

    fn color_scheme(&self, query: &str) -> MediaQueryScheme {
        MediaQueryScheme {
            window: self.window.clone(),
            query: query.to_string(),
        }
    }
}

/// Entry point for server-rendered pages.
///
/// Initializes on `DOMContentLoaded`, or right away when the document has
/// already been parsed.
#[wasm_bindgen(js_name = installThemeController)]
pub fn install_theme_controller() -> Result<(), JsValue> {
    info!("bighouse-theme v{}", env!("CARGO_PKG_VERSION"));

    let page = Page::current()?;

    if page.document.ready_state() == "loading" {
        let on_ready = Closure::once_into_js(
            move |_event: web_sys::Event| -> Result<(), JsValue> {
                attach().map_err(JsValue::from)
            },
        );
        page.document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
        debug!("Theme controller waiting for DOMContentLoaded");
        Ok(())
    } else {
        attach().map_err(JsValue::from)
    }
}

/// Mount on the parsed page and wire the checkbox's change listener.
///
/// Config is read here so a `#theme-config` block anywhere in the body is seen.
fn attach() -> Result<(), ThemeError> {
    let page = Page::current()?;
    let config = page_config(&page);
    let controller = mount(&page, config)?;
    let input = controller.toggle().input().clone();

    let controller = Rc::new(RefCell::new(controller));
    let on_change = Closure::<dyn FnMut(web_sys::Event) -> Result<(), JsValue>>::new({
        let input = input.clone();
        move |_event: web_sys::Event| {
            let checked = input.checked();
            controller
                .borrow_mut()
                .on_toggle(checked)
                .map(|_| ())
                .map_err(JsValue::from)
        }
    });

    input
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
        .map_err(|e| ThemeError::Listener {
            event: "change".into(),
            reason: format!("{:?}", e),
        })?;
    // Listener lives for the rest of the page.
    on_change.forget();

    Ok(())
}
