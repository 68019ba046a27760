//! In-memory page surfaces for driving the controller without a browser.

#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};

use bighouse_theme::dom::{ColorSchemeSource, RootClassList, ToggleControl};
use bighouse_theme::page::PageSurfaces;
use bighouse_theme::{MemoryStore, ThemeError, ThemeStore};

/// Root element with a plain class set
#[derive(Debug, Default)]
pub struct FakeRoot {
    classes: BTreeSet<String>,
}

impl FakeRoot {
    pub fn with_class(class: &str) -> Self {
        let mut classes = BTreeSet::new();
        classes.insert(class.to_string());
        Self { classes }
    }
}

impl RootClassList for FakeRoot {
    fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.classes.insert(class.to_string());
        } else {
            self.classes.remove(class);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

/// Checkbox that records how often it was written
#[derive(Debug, Default)]
pub struct FakeCheckbox {
    pub checked: bool,
    pub writes: usize,
}

impl ToggleControl for FakeCheckbox {
    fn is_checked(&self) -> bool {
        self.checked
    }

    fn set_checked(&mut self, checked: bool) {
        self.writes += 1;
        self.checked = checked;
    }
}

/// Fixed OS preference
pub struct OsPrefers {
    pub dark: bool,
}

impl ColorSchemeSource for OsPrefers {
    fn prefers_dark(&self) -> bool {
        self.dark
    }
}

/// Storage that reads fine but rejects every write (quota / disabled storage)
#[derive(Debug, Default)]
pub struct ReadOnlyStore {
    pub value: Option<String>,
}

impl ThemeStore for ReadOnlyStore {
    fn get(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.value.clone())
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageWrite {
            key: key.to_string(),
            reason: "QuotaExceededError".into(),
        })
    }
}

/// Storage whose reads throw (access denied by privacy settings)
#[derive(Debug, Default)]
pub struct DeniedStore;

impl ThemeStore for DeniedStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::StorageRead {
            key: key.to_string(),
            reason: "SecurityError".into(),
        })
    }

    fn set(&mut self, key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::StorageWrite {
            key: key.to_string(),
            reason: "SecurityError".into(),
        })
    }
}

/// Storage as a page hands it out: usable, or disabled outright
#[derive(Debug, Default)]
pub struct PageStore {
    pub inner: MemoryStore,
    pub disabled: bool,
}

impl ThemeStore for PageStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.disabled {
            return Err(ThemeError::StorageUnavailable("localStorage is null".into()));
        }
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.disabled {
            return Err(ThemeError::StorageUnavailable("localStorage is null".into()));
        }
        self.inner.set(key, value)
    }
}

/// What sits at a given element id
#[derive(Debug, Clone)]
pub enum FakeElement {
    Checkbox { checked: bool },
    Button,
    Script(String),
}

/// A loaded page assembled from parts
#[derive(Debug, Default)]
pub struct FakePage {
    pub elements: HashMap<String, FakeElement>,
    pub stored: Option<String>,
    pub storage_disabled: bool,
    pub os_dark: bool,
}

impl FakePage {
    /// Page with an unchecked `#theme-toggle`
    pub fn with_toggle() -> Self {
        let mut page = Self::default();
        page.elements.insert(
            "theme-toggle".into(),
            FakeElement::Checkbox { checked: false },
        );
        page
    }

    pub fn with_element(mut self, id: &str, element: FakeElement) -> Self {
        self.elements.insert(id.to_string(), element);
        self
    }
}

impl PageSurfaces for FakePage {
    type Store = PageStore;
    type Root = FakeRoot;
    type Toggle = FakeCheckbox;
    type Scheme = OsPrefers;

    fn element_text(&self, id: &str) -> Option<String> {
        match self.elements.get(id) {
            Some(FakeElement::Script(text)) => Some(text.clone()),
            _ => None,
        }
    }

    fn store(&self) -> PageStore {
        let inner = match &self.stored {
            Some(value) => MemoryStore::with_entry("theme", value),
            None => MemoryStore::new(),
        };
        PageStore {
            inner,
            disabled: self.storage_disabled,
        }
    }

    fn root(&self) -> Result<FakeRoot, ThemeError> {
        Ok(FakeRoot::default())
    }

    fn toggle(&self, id: &str) -> Result<FakeCheckbox, ThemeError> {
        match self.elements.get(id) {
            Some(FakeElement::Checkbox { checked }) => Ok(FakeCheckbox {
                checked: *checked,
                writes: 0,
            }),
            Some(_) => Err(ThemeError::NotACheckbox(id.to_string())),
            None => Err(ThemeError::MissingToggle(id.to_string())),
        }
    }

    fn color_scheme(&self, _query: &str) -> OsPrefers {
        OsPrefers { dark: self.os_dark }
    }
}
