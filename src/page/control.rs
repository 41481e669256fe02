//! Toggle affordances and their icons.

use crate::theme::Theme;

/// Action label shown while the dark theme is active.
pub const TO_LIGHT_LABEL: &str = "Switch to light theme";

/// Action label shown while the light theme is active.
pub const TO_DARK_LABEL: &str = "Switch to dark theme";

/// Sun and moon visibility flags for a toggle control.
///
/// After any apply exactly one icon is visible and it matches the
/// active theme: the moon under dark, the sun under light.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPair {
    sun_visible: bool,
    moon_visible: bool,
}

impl IconPair {
    /// Creates a pair with both icons visible, as on an unthemed page.
    pub fn new() -> Self {
        Self {
            sun_visible: true,
            moon_visible: true,
        }
    }

    /// Returns true when the sun icon is shown.
    pub fn sun_visible(&self) -> bool {
        self.sun_visible
    }

    /// Returns true when the moon icon is shown.
    pub fn moon_visible(&self) -> bool {
        self.moon_visible
    }

    pub(crate) fn sync(&mut self, theme: Theme) {
        self.moon_visible = theme.is_dark();
        self.sun_visible = !theme.is_dark();
    }
}

impl Default for IconPair {
    fn default() -> Self {
        Self::new()
    }
}

/// One theme toggle affordance mounted on a page.
///
/// Controls start unbound and unsynchronized; the controller
/// synchronizes and binds them when it initializes or rescans the
/// page. The binding count doubles as the rebind guard, so a control
/// fires its toggle exactly once per click no matter how often the
/// page is rescanned.
#[derive(Debug, Clone)]
pub struct ToggleControl {
    id: String,
    pressed: bool,
    label: String,
    icons: Option<IconPair>,
    bindings: u8,
}

impl ToggleControl {
    /// Creates an unbound control with a generic label and no icons.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pressed: false,
            label: "Toggle theme".to_string(),
            icons: None,
            bindings: 0,
        }
    }

    /// Attaches a sun/moon icon pair, returning the control for chaining.
    pub fn with_icons(mut self) -> Self {
        self.icons = Some(IconPair::new());
        self
    }

    /// Identifier used by click dispatch.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// True when the control reports the dark theme active.
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Describes what activating the control does next.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Icon pair, when the control carries icons.
    pub fn icons(&self) -> Option<&IconPair> {
        self.icons.as_ref()
    }

    /// True once a toggle listener has been bound.
    pub fn is_bound(&self) -> bool {
        self.bindings > 0
    }

    pub(crate) fn bindings(&self) -> u8 {
        self.bindings
    }

    pub(crate) fn bind(&mut self) {
        self.bindings += 1;
    }

    pub(crate) fn sync(&mut self, theme: Theme) {
        self.pressed = theme.is_dark();
        self.label = match theme {
            Theme::Dark => TO_LIGHT_LABEL.to_string(),
            Theme::Light => TO_DARK_LABEL.to_string(),
        };
        if let Some(icons) = self.icons.as_mut() {
            icons.sync(theme);
        }
    }
}
