//! Controller construction.

use crate::ambient::{self, AmbientDetector};
use crate::page::Page;
use crate::store::{MemoryStore, PreferenceStore};

use super::controller::Controller;

/// Fluent builder for [`Controller`].
///
/// Defaults to an empty [`MemoryStore`], the OS ambient detector
/// ([`ambient::detect`]), and an empty page.
///
/// # Example
///
/// ```rust
/// use nightswitch::store::{MemoryStore, THEME_KEY};
/// use nightswitch::{Controller, Theme};
///
/// let mut controller = Controller::builder()
///     .store(MemoryStore::new().seed(THEME_KEY, "dark"))
///     .ambient(|| None)
///     .build();
/// controller.initialize();
/// assert_eq!(controller.current(), Theme::Dark);
/// ```
pub struct ControllerBuilder {
    page: Page,
    store: Option<Box<dyn PreferenceStore>>,
    ambient: AmbientDetector,
}

impl ControllerBuilder {
    /// Creates a builder with the defaults above.
    pub fn new() -> Self {
        Self {
            page: Page::new(),
            store: None,
            ambient: ambient::detect,
        }
    }

    /// Uses `store` for persistence.
    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Box::new(store));
        self
    }

    /// Uses `detector` for the ambient signal.
    pub fn ambient(mut self, detector: AmbientDetector) -> Self {
        self.ambient = detector;
        self
    }

    /// Starts from `page` instead of an empty one.
    pub fn page(mut self, page: Page) -> Self {
        self.page = page;
        self
    }

    /// Builds the controller. Call [`Controller::initialize`] before
    /// relying on the resolved theme.
    pub fn build(self) -> Controller {
        Controller {
            page: self.page,
            store: self.store.unwrap_or_else(|| Box::new(MemoryStore::new())),
            ambient: self.ambient,
            initialized: false,
        }
    }
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
