//! Console Logger
//!
//! `log` backend writing to the browser console as `[TARGET] LEVEL message`.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record.level(), record.target(), &record.args().to_string());
        let line = JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::log_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; fails if a logger is already set
pub fn init(level: LevelFilter) -> Result<(), String> {
    log::set_logger(&LOGGER).map_err(|e| e.to_string())?;
    log::set_max_level(level);
    Ok(())
}

/// `tag_grid::state` -> `[STATE]`
fn target_label(target: &str) -> String {
    target.rsplit("::").next().unwrap_or(target).to_uppercase()
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {} {}", target_label(target), level, message)
}
