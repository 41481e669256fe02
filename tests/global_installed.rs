//! The process-wide controller shares one `OnceCell`, so these tests
//! run serially and normalize the theme themselves instead of assuming
//! which one of them installed the controller.

use serial_test::serial;

use nightswitch::store::MemoryStore;
use nightswitch::{
    current_theme, global, install, set_theme, toggle_theme, Controller, Page, Theme,
    ToggleControl,
};

fn build_controller() -> Controller {
    Controller::builder()
        .store(MemoryStore::new())
        .ambient(|| None)
        .page(Page::new().with_control(ToggleControl::new("header").with_icons()))
        .build()
}

#[test]
#[serial]
fn test_install_is_first_come_only() {
    let shared = install(build_controller());
    shared.set(Theme::Dark);

    // A second install is ignored; the first controller remains.
    let again = install(build_controller());
    assert_eq!(again.current(), Theme::Dark);
    assert!(global().is_some());
}

#[test]
#[serial]
fn test_entry_points_drive_installed_controller() {
    install(build_controller());
    set_theme(Theme::Light);

    assert_eq!(current_theme(), Some(Theme::Light));
    assert_eq!(toggle_theme(), Some(Theme::Dark));
    assert_eq!(current_theme(), Some(Theme::Dark));
    assert_eq!(set_theme(Theme::Light), Some(Theme::Light));
    assert_eq!(current_theme(), Some(Theme::Light));
}

#[test]
#[serial]
fn test_clicks_through_shared_handle() {
    let shared = install(build_controller());
    shared.set(Theme::Light);

    assert_eq!(shared.click("header"), Some(Theme::Dark));
    assert_eq!(shared.click("missing"), None);
    assert_eq!(shared.current(), Theme::Dark);
}

#[test]
#[serial]
fn test_with_exposes_page_state() {
    let shared = install(build_controller());
    shared.set(Theme::Dark);

    let pressed = shared.with(|controller| {
        controller
            .page()
            .control("header")
            .map(|control| control.pressed())
    });
    assert_eq!(pressed, Some(true));
}
