//! Process-wide controller and debug entry points.

use std::sync::Mutex;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::theme::Theme;

use super::controller::Controller;

static GLOBAL: OnceCell<SharedController> = OnceCell::new();

/// Thread-safe handle around the installed [`Controller`].
///
/// Methods lock for the duration of one operation, so concurrent
/// callers serialize per operation.
pub struct SharedController {
    inner: Mutex<Controller>,
}

impl SharedController {
    fn new(controller: Controller) -> Self {
        Self {
            inner: Mutex::new(controller),
        }
    }

    /// See [`Controller::toggle`].
    pub fn toggle(&self) -> Theme {
        self.lock().toggle()
    }

    /// See [`Controller::set`].
    pub fn set(&self, theme: Theme) {
        self.lock().set(theme)
    }

    /// See [`Controller::current`].
    pub fn current(&self) -> Theme {
        self.lock().current()
    }

    /// See [`Controller::click`].
    pub fn click(&self, id: &str) -> Option<Theme> {
        self.lock().click(id)
    }

    /// Runs `f` against the locked controller.
    ///
    /// Escape hatch for page mutation and inspection through the shared
    /// handle.
    pub fn with<R>(&self, f: impl FnOnce(&mut Controller) -> R) -> R {
        f(&mut self.lock())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Controller> {
        self.inner.lock().expect("controller lock poisoned")
    }
}

/// Installs `controller` as the process-wide instance, initializing it.
///
/// The first call wins. Later calls drop their argument, log, and
/// return the already installed handle, so redundant startup wiring
/// initializes at most once per process.
pub fn install(controller: Controller) -> &'static SharedController {
    let mut candidate = Some(controller);
    let shared = GLOBAL.get_or_init(|| {
        let mut controller = candidate.take().expect("install closure runs once");
        controller.initialize();
        SharedController::new(controller)
    });
    if candidate.is_some() {
        debug!("global controller already installed, ignoring");
    }
    shared
}

/// Returns the installed controller, if any.
pub fn global() -> Option<&'static SharedController> {
    GLOBAL.get()
}

/// Toggles the global theme. `None` when no controller is installed.
pub fn toggle_theme() -> Option<Theme> {
    global().map(|shared| shared.toggle())
}

/// Reads the global theme. `None` when no controller is installed.
pub fn current_theme() -> Option<Theme> {
    global().map(|shared| shared.current())
}

/// Sets the global theme, returning the applied value. `None` when no
/// controller is installed.
pub fn set_theme(theme: Theme) -> Option<Theme> {
    global().map(|shared| {
        shared.set(theme);
        theme
    })
}
