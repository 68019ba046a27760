//! BigHouse theme toggle
//!
//! Dark/light mode switching for the BigHouse web UI.
//!
//! This library provides:
//! - Theme resolution (stored preference, then OS color scheme)
//! - A storage-agnostic controller driving the root `dark` class and checkbox
//! - Browser bindings over `localStorage` and `matchMedia` (wasm32)
//! - A Dioxus `ThemeToggle` component

pub mod app;
pub mod config;
pub mod controller;
pub mod dom;
pub mod error;
pub mod page;
pub mod store;
pub mod theme;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use store::{MemoryStore, ThemeStore};
pub use theme::Theme;
