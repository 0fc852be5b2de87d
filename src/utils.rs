use crate::config::LogLevel;

pub fn set_panic_hook() {
    // With the `console_error_panic_hook` feature enabled, panics are
    // reported through `console.error` instead of an opaque
    // "unreachable executed".
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes the `log` facade to the JavaScript console.
///
/// The console logger passes every record and filtering is left to the
/// global maximum level, so the level can change after initialisation.
pub fn init_logging(level: LogLevel) {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Trace));
    set_log_level(level);
}

pub fn set_log_level(level: LogLevel) {
    log::set_max_level(level.to_level_filter());
}
