//! Lives in its own test binary so nothing here (or anywhere else in
//! the process) has installed the global controller.

use nightswitch::{current_theme, global, set_theme, toggle_theme, Theme};

#[test]
fn test_entry_points_without_installed_controller() {
    assert!(global().is_none());
    assert_eq!(toggle_theme(), None);
    assert_eq!(current_theme(), None);
    assert_eq!(set_theme(Theme::Dark), None);
    assert!(global().is_none());
}
