// Logging setup: `log` facade routed to the browser console.

use log::Level;

/// Installs the console logger; later calls are ignored.
pub fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if let Err(e) = console_log::init_with_level(level) {
        log::warn!("console logger already installed: {e}");
    }
}
