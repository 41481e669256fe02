//! The theme preference controller.
//!
//! This module provides:
//!
//! - [`Controller`]: owns a [`Page`](crate::page::Page) and drives every
//!   theme read, write, and control update
//! - [`ControllerBuilder`]: injection point for the store, the ambient
//!   detector, and the starting page
//! - [`install`] / [`global`]: the process-wide controller, plus the
//!   [`toggle_theme`], [`current_theme`], and [`set_theme`] entry points
//!
//! The controller is deliberately boring about failure: storage and
//! environment problems are logged and swallowed, and the worst case is
//! a session on the light default.

mod builder;
#[allow(clippy::module_inception)]
mod controller;
mod global;

pub use builder::ControllerBuilder;
pub use controller::Controller;
pub use global::{current_theme, global, install, set_theme, toggle_theme, SharedController};
