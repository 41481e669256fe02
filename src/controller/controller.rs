//! Resolution, apply, and toggle logic.

use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::ambient::AmbientDetector;
use crate::page::Page;
use crate::scheme::Scheme;
use crate::store::{PreferenceStore, THEME_KEY};
use crate::theme::Theme;

use super::builder::ControllerBuilder;

/// Owns one page's theme preference.
///
/// The controller resolves the initial value and persists every
/// change, keeping the page root and all toggle controls consistent.
/// It is the only writer of theme state; affordances raise clicks
/// instead of writing. No operation panics or returns an error.
///
/// # Example
///
/// ```rust
/// use nightswitch::{Controller, Page, Theme, ToggleControl};
///
/// let mut controller = Controller::builder()
///     .ambient(|| None)
///     .page(Page::new().with_control(ToggleControl::new("header").with_icons()))
///     .build();
/// controller.initialize();
///
/// assert_eq!(controller.current(), Theme::Light);
/// assert_eq!(controller.toggle(), Theme::Dark);
/// assert!(controller.page().control("header").unwrap().pressed());
/// ```
pub struct Controller {
    pub(super) page: Page,
    pub(super) store: Box<dyn PreferenceStore>,
    pub(super) ambient: AmbientDetector,
    pub(super) initialized: bool,
}

impl Controller {
    /// Starts building a controller.
    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    /// Resolves the initial theme, applies it, and binds the page's
    /// controls.
    ///
    /// Runs once per controller; repeat calls log and return without
    /// touching anything. Resolution prefers the persisted value, then
    /// the ambient signal, then [`Theme::Light`], and persists whatever
    /// it picked so the next session starts from the same place.
    pub fn initialize(&mut self) {
        if self.initialized {
            debug!("controller already initialized, skipping");
            return;
        }
        self.initialized = true;

        let theme = self.resolve();
        self.apply(theme);
        self.rescan();
        self.persist(theme);
        info!(theme = %theme, "theme initialized");
    }

    /// Applies the opposite of the current theme, persists it, and
    /// returns it.
    pub fn toggle(&mut self) -> Theme {
        let from = self.current();
        let to = from.opposite();
        self.apply(to);
        self.persist(to);
        info!(theme.from = %from, theme.to = %to, "theme toggled");
        to
    }

    /// Applies an explicit theme and persists it.
    pub fn set(&mut self, theme: Theme) {
        self.apply(theme);
        self.persist(theme);
        info!(theme = %theme, "theme set");
    }

    /// Writes `theme` into the page root and synchronizes every control.
    ///
    /// Sets the root attribute and the color-scheme hint, rewrites
    /// chrome color metadata when the page declares it, and updates each
    /// control's pressed state, label, and icons. Idempotent; pages with
    /// zero controls or controls without icons need no special care.
    pub fn apply(&mut self, theme: Theme) {
        self.page.set_theme_attr(theme);
        self.page.set_color_scheme(theme);
        if self.page.chrome_color().is_some() {
            let chrome = Scheme::for_theme(theme).chrome_color();
            self.page.set_chrome_color(chrome.to_string());
        }
        for control in self.page.controls_mut() {
            control.sync(theme);
        }
    }

    /// Theme currently applied to the page root, or [`Theme::Light`]
    /// when nothing has been applied yet.
    pub fn current(&self) -> Theme {
        self.page.theme_attr().unwrap_or(Theme::Light)
    }

    /// Raw root attribute; `None` until the first apply.
    pub fn applied(&self) -> Option<Theme> {
        self.page.theme_attr()
    }

    /// Dispatches a click on the control named `id`.
    ///
    /// Each binding on the control fires one toggle, so a bound control
    /// flips the theme exactly once. Returns the resulting theme, or
    /// `None` when no such control is mounted.
    pub fn click(&mut self, id: &str) -> Option<Theme> {
        let bindings = match self.page.control(id) {
            Some(control) => control.bindings(),
            None => {
                debug!(control = id, "click on missing control ignored");
                return None;
            }
        };
        for _ in 0..bindings {
            self.toggle();
        }
        Some(self.current())
    }

    /// Binds and synchronizes any control that appeared without a
    /// binding.
    ///
    /// Safe to call repeatedly; bound controls are left alone, so no
    /// control can accumulate a second listener.
    pub fn rescan(&mut self) {
        let theme = self.current();
        for control in self.page.controls_mut() {
            if !control.is_bound() {
                control.sync(theme);
                control.bind();
                debug!(control = control.id(), "toggle control bound");
            }
        }
    }

    /// Runs a structural mutation against the page, then rescans.
    ///
    /// This is the hook for affordances that arrive after
    /// initialization: mutate the page however needed and any new
    /// control comes out synchronized and bound exactly once.
    pub fn mutate<R>(&mut self, f: impl FnOnce(&mut Page) -> R) -> R {
        let result = f(&mut self.page);
        self.rescan();
        result
    }

    /// The page under management.
    pub fn page(&self) -> &Page {
        &self.page
    }

    fn resolve(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Ok(Some(raw)) => match Theme::from_str(&raw) {
                Ok(theme) => {
                    debug!(theme = %theme, "using persisted theme");
                    return theme;
                }
                Err(e) => {
                    warn!(error = %e, "ignoring persisted theme");
                }
            },
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "preference store unreadable");
            }
        }
        if let Some(theme) = (self.ambient)() {
            debug!(theme = %theme, "using ambient theme");
            return theme;
        }
        debug!("no persisted or ambient theme, using the default");
        Theme::Light
    }

    fn persist(&mut self, theme: Theme) {
        if let Err(e) = self.store.set(THEME_KEY, theme.as_str()) {
            warn!(error = %e, "failed to persist theme");
        }
    }
}
