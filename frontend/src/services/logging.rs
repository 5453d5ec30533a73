use log::{Level, LevelFilter, Log, Metadata, Record};
use shared::{FieldErrors, FormValues};

/// `log` backend that writes to the browser console
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install the console logger. Later calls only adjust the level.
    pub fn init(level: LevelFilter) {
        if log::set_logger(&LOGGER).is_err() {
            gloo::console::debug!("console logger already installed");
        }
        log::set_max_level(level);
    }

    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!(target: component, "{}", message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!(target: component, "{}", message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!(target: component, "{}", message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!(target: component, "{}", message);
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format_record(record.target(), &record.args().to_string());
        match record.level() {
            Level::Error => gloo::console::error!(line),
            Level::Warn => gloo::console::warn!(line),
            Level::Info => gloo::console::info!(line),
            Level::Debug | Level::Trace => gloo::console::debug!(line),
        }
    }

    fn flush(&self) {}
}

fn format_record(component: &str, message: &str) -> String {
    format!("[{}] {}", component, message)
}

/// Report an accepted submission
pub fn report_submit(values: &FormValues) {
    match serde_json::to_string(values) {
        Ok(json) => Logger::info_with_component("account-form", &format!("submit {}", json)),
        Err(e) => Logger::error_with_component(
            "account-form",
            &format!("Failed to serialize submitted values: {}", e),
        ),
    }
}

/// Report the errors that blocked a submission
pub fn report_errors(errors: &FieldErrors) {
    match serde_json::to_string(errors) {
        Ok(json) => Logger::warn_with_component("account-form", &format!("errors {}", json)),
        Err(e) => Logger::error_with_component(
            "account-form",
            &format!("Failed to serialize form errors: {}", e),
        ),
    }
}
