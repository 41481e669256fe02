//! Dark/light theme preference controller with persistent storage and
//! ambient fallback.
//!
//! nightswitch owns a single two-state theme preference for a page-like
//! surface: it resolves the value at startup (persisted choice first,
//! then the ambient host signal, then light), persists every change,
//! and keeps the page root and all toggle controls consistent with it.
//!
//! This crate provides:
//!
//! - [`Theme`]: the two-state preference value
//! - [`Controller`]: resolves, applies, toggles, and persists the theme
//! - [`Page`], [`ToggleControl`], [`IconPair`]: the managed surface
//! - [`PreferenceStore`], [`MemoryStore`], [`FileStore`]: persistence
//! - [`install`], [`toggle_theme`], [`current_theme`], [`set_theme`]:
//!   the process-wide controller and its debug entry points
//!
//! # Example
//!
//! ```rust
//! use nightswitch::{Controller, Page, Theme, ToggleControl};
//!
//! let mut controller = Controller::builder()
//!     .ambient(|| Some(Theme::Dark))
//!     .page(Page::new().with_control(ToggleControl::new("header").with_icons()))
//!     .build();
//! controller.initialize();
//!
//! assert_eq!(controller.current(), Theme::Dark);
//! assert!(controller.page().control("header").unwrap().pressed());
//!
//! controller.toggle();
//! assert_eq!(controller.current(), Theme::Light);
//! ```

pub mod ambient;
pub mod controller;
pub mod page;
pub mod scheme;
pub mod store;
pub mod theme;

pub use controller::{
    current_theme, global, install, set_theme, toggle_theme, Controller, ControllerBuilder,
    SharedController,
};
pub use page::{IconPair, Page, ToggleControl, TO_DARK_LABEL, TO_LIGHT_LABEL};
pub use scheme::Scheme;
pub use store::{FileStore, MemoryStore, PreferenceStore, StoreError, THEME_KEY};
pub use theme::{ParseThemeError, Theme};
