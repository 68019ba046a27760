//! Page surfaces the controller reads and writes.
//!
//! The browser implementations live in `web`; the Dioxus component backs
//! [`ToggleControl`] with a signal; tests use in-memory doubles.

/// Root element whose class list carries the dark marker.
pub trait RootClassList {
    /// Add `class` when `present`, remove it otherwise.
    fn set_class(&mut self, class: &str, present: bool);

    fn has_class(&self, class: &str) -> bool;
}

/// A control with a boolean checked state (the theme checkbox).
pub trait ToggleControl {
    fn is_checked(&self) -> bool;

    fn set_checked(&mut self, checked: bool);
}

/// Read-only OS color-scheme preference.
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}
