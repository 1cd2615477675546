//! Saved Todo Board Entry Point

use todo_board::app;
use todo_board::config::BoardConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = BoardConfig::default();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger not installed: {}", err).into());
    }

    if let Err(err) = app::mount_saved_board(&config) {
        log::error!("[SAVED] {}", err);
    }
}
