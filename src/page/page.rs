//! The themed page surface.

use crate::theme::Theme;

use super::control::ToggleControl;

/// Stand-in for the document being themed.
///
/// Tracks the root theme attribute, the root color-scheme hint, chrome
/// color metadata (absent on pages that never declared it), and the
/// toggle controls currently mounted. Theme state setters are
/// crate-private; the controller is the only writer.
///
/// # Example
///
/// ```rust
/// use nightswitch::{Page, ToggleControl};
///
/// let page = Page::new()
///     .with_chrome_color("#50358d")
///     .with_control(ToggleControl::new("header").with_icons());
///
/// assert!(page.theme_attr().is_none());
/// assert_eq!(page.controls().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Page {
    theme_attr: Option<Theme>,
    color_scheme: Option<Theme>,
    chrome_color: Option<String>,
    controls: Vec<ToggleControl>,
}

impl Page {
    /// Creates an empty, unthemed page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares chrome color metadata, returning the page for chaining.
    ///
    /// Pages without this declaration skip chrome updates entirely.
    pub fn with_chrome_color(mut self, initial: impl Into<String>) -> Self {
        self.chrome_color = Some(initial.into());
        self
    }

    /// Mounts a control, returning the page for chaining.
    pub fn with_control(mut self, control: ToggleControl) -> Self {
        self.controls.push(control);
        self
    }

    /// Mounts a control on an existing page.
    pub fn add_control(&mut self, control: ToggleControl) {
        self.controls.push(control);
    }

    /// Unmounts the control with `id`, returning it when present.
    pub fn remove_control(&mut self, id: &str) -> Option<ToggleControl> {
        let index = self.controls.iter().position(|c| c.id() == id)?;
        Some(self.controls.remove(index))
    }

    /// Applied root theme attribute; `None` until the first apply.
    pub fn theme_attr(&self) -> Option<Theme> {
        self.theme_attr
    }

    /// Root color-scheme hint.
    pub fn color_scheme(&self) -> Option<Theme> {
        self.color_scheme
    }

    /// Current chrome color metadata value.
    pub fn chrome_color(&self) -> Option<&str> {
        self.chrome_color.as_deref()
    }

    /// All mounted controls.
    pub fn controls(&self) -> &[ToggleControl] {
        &self.controls
    }

    /// Looks up a control by id.
    pub fn control(&self, id: &str) -> Option<&ToggleControl> {
        self.controls.iter().find(|c| c.id() == id)
    }

    pub(crate) fn set_theme_attr(&mut self, theme: Theme) {
        self.theme_attr = Some(theme);
    }

    pub(crate) fn set_color_scheme(&mut self, theme: Theme) {
        self.color_scheme = Some(theme);
    }

    pub(crate) fn set_chrome_color(&mut self, value: String) {
        self.chrome_color = Some(value);
    }

    pub(crate) fn controls_mut(&mut self) -> &mut [ToggleControl] {
        &mut self.controls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_page_is_unthemed() {
        let page = Page::new();
        assert_eq!(page.theme_attr(), None);
        assert_eq!(page.color_scheme(), None);
        assert_eq!(page.chrome_color(), None);
        assert!(page.controls().is_empty());
    }

    #[test]
    fn test_builder_mounts_controls_and_chrome() {
        let page = Page::new()
            .with_chrome_color("#ffffff")
            .with_control(ToggleControl::new("a"))
            .with_control(ToggleControl::new("b"));

        assert_eq!(page.chrome_color(), Some("#ffffff"));
        assert_eq!(page.controls().len(), 2);
        assert!(page.control("a").is_some());
        assert!(page.control("missing").is_none());
    }

    #[test]
    fn test_add_and_remove_control() {
        let mut page = Page::new();
        page.add_control(ToggleControl::new("late"));
        assert!(page.control("late").is_some());

        let removed = page.remove_control("late").unwrap();
        assert_eq!(removed.id(), "late");
        assert!(page.control("late").is_none());
        assert!(page.remove_control("late").is_none());
    }

    #[test]
    fn test_theme_state_setters_are_visible() {
        let mut page = Page::new().with_chrome_color("#ffffff");
        page.set_theme_attr(Theme::Dark);
        page.set_color_scheme(Theme::Dark);
        page.set_chrome_color("#0f0f14".to_string());

        assert_eq!(page.theme_attr(), Some(Theme::Dark));
        assert_eq!(page.color_scheme(), Some(Theme::Dark));
        assert_eq!(page.chrome_color(), Some("#0f0f14"));
    }
}
