//! In-memory model of the themed surface.
//!
//! This module provides:
//!
//! - [`Page`]: root theme attribute, color-scheme hint, chrome color
//!   metadata, and the toggle controls mounted on the surface
//! - [`ToggleControl`]: one toggle affordance with pressed state,
//!   next-action label, and optional icons
//! - [`IconPair`]: mutually exclusive sun/moon visibility flags
//!
//! Consumers mutate page structure freely (mounting and unmounting
//! controls); theme state on the page and its controls is written only
//! by the controller, so no affordance can drift from the root value.

mod control;
#[allow(clippy::module_inception)]
mod page;

pub use control::{IconPair, ToggleControl, TO_DARK_LABEL, TO_LIGHT_LABEL};
pub use page::Page;
