use wasm_bindgen::JsValue;

use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider, get_time_provider};

/// Browser console implementation of the domain [`Logger`]
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new_development() -> Self {
        Self {
            min_level: LogLevel::Debug,
        }
    }

    pub fn new_production() -> Self {
        Self {
            min_level: LogLevel::Info,
        }
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let line = format!(
            "[{}] {} {}: {}",
            get_time_provider().format_timestamp(entry.timestamp),
            entry.level,
            entry.component,
            entry.message
        );

        match entry.level {
            LogLevel::Error => gloo::console::error!(line),
            LogLevel::Warn => gloo::console::warn!(line),
            _ => gloo::console::log!(line),
        }
    }
}

/// Wall-clock time from `js_sys::Date`
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        let date = js_sys::Date::new(&JsValue::from_f64(timestamp as f64));
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}
