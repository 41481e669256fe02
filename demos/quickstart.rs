//! Walkthrough: wire a page, install the process-wide controller, and
//! drive it through toggles and clicks.
//!
//! Run with: cargo run --example quickstart

use nightswitch::store::MemoryStore;
use nightswitch::{install, toggle_theme, Controller, Page, Scheme, SharedController, ToggleControl};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let page = Page::new()
        .with_chrome_color("#ffffff")
        .with_control(ToggleControl::new("header").with_icons())
        .with_control(ToggleControl::new("footer"));

    // The ambient OS preference seeds the first session; after that the
    // persisted choice wins.
    let shared = install(
        Controller::builder()
            .store(MemoryStore::new())
            .page(page)
            .build(),
    );

    print_state("after initialize", shared);

    toggle_theme();
    print_state("after toggle", shared);

    shared.click("header");
    print_state("after header click", shared);
}

fn print_state(stage: &str, shared: &SharedController) {
    shared.with(|controller| {
        let theme = controller.current();
        let scheme = Scheme::for_theme(theme);
        println!(
            "{}: {} (chrome {})",
            stage,
            scheme.accent().apply_to(theme),
            scheme.chrome_color(),
        );
        for control in controller.page().controls() {
            println!(
                "  {}",
                scheme.surface().apply_to(format!(
                    "[{}] pressed={} label={:?}",
                    control.id(),
                    control.pressed(),
                    control.label(),
                )),
            );
        }
    });
}
