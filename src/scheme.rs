//! Per-theme presentation constants.

use console::Style;

use crate::theme::Theme;

/// Chrome color metadata value under the dark theme.
pub const DARK_CHROME_COLOR: &str = "#0f0f14";

/// Chrome color metadata value under the light theme.
pub const LIGHT_CHROME_COLOR: &str = "#50358d";

/// Visual constants tied to one theme value.
///
/// Bundles the chrome color written into page metadata with a pair of
/// [`console`] styles for terminal-facing consumers.
///
/// # Example
///
/// ```rust
/// use nightswitch::{Scheme, Theme};
///
/// let scheme = Scheme::for_theme(Theme::Dark);
/// println!("{}", scheme.accent().apply_to("dark mode on"));
/// assert_eq!(scheme.chrome_color(), "#0f0f14");
/// ```
#[derive(Debug, Clone)]
pub struct Scheme {
    chrome_color: &'static str,
    surface: Style,
    accent: Style,
}

impl Scheme {
    /// Returns the scheme for a theme value.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                chrome_color: LIGHT_CHROME_COLOR,
                surface: Style::new().black().on_white(),
                accent: Style::new().magenta().bold(),
            },
            Theme::Dark => Self {
                chrome_color: DARK_CHROME_COLOR,
                surface: Style::new().white().on_black(),
                accent: Style::new().yellow().bold(),
            },
        }
    }

    /// Chrome color hex written into page metadata.
    pub fn chrome_color(&self) -> &'static str {
        self.chrome_color
    }

    /// Style for body text on the themed surface.
    pub fn surface(&self) -> &Style {
        &self.surface
    }

    /// Style for highlighted elements.
    pub fn accent(&self) -> &Style {
        &self.accent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chrome_color_per_theme() {
        assert_eq!(Scheme::for_theme(Theme::Dark).chrome_color(), "#0f0f14");
        assert_eq!(Scheme::for_theme(Theme::Light).chrome_color(), "#50358d");
    }

    #[test]
    fn test_schemes_differ_between_themes() {
        let light = Scheme::for_theme(Theme::Light);
        let dark = Scheme::for_theme(Theme::Dark);
        assert_ne!(light.chrome_color(), dark.chrome_color());
    }
}
