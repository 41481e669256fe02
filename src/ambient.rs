//! Ambient host preference detection.

use dark_light::{detect as detect_os_mode, Mode as OsMode};
use tracing::debug;

use crate::theme::Theme;

/// Signature of an ambient preference probe.
///
/// Returns `None` when the host exposes no color-scheme signal, which
/// lets resolution fall through to the default. Non-capturing closures
/// coerce, so tests can inject `|| Some(Theme::Dark)` directly.
pub type AmbientDetector = fn() -> Option<Theme>;

/// Reads the host color-scheme preference.
pub fn detect() -> Option<Theme> {
    let theme = match detect_os_mode() {
        OsMode::Dark => Theme::Dark,
        OsMode::Light => Theme::Light,
    };
    debug!(theme = %theme, "ambient color scheme detected");
    Some(theme)
}

/// Detector reporting that the host has no color-scheme signal.
pub fn none() -> Option<Theme> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_reports_no_signal() {
        assert_eq!(none(), None);
    }

    #[test]
    fn test_closures_coerce_to_detector() {
        let dark: AmbientDetector = || Some(Theme::Dark);
        assert_eq!(dark(), Some(Theme::Dark));
    }
}
