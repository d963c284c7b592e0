use std::sync::OnceLock;

use chrono::Local;

static LOG_PREFIX: OnceLock<Option<String>> = OnceLock::new();

/// Installs the process-wide logger. The first call wins; later calls keep
/// the original prefix.
pub fn init_logger(prefix: Option<String>) {
    LOG_PREFIX.get_or_init(|| prefix);
}

pub fn log(message: &str) {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    match LOG_PREFIX.get() {
        Some(Some(prefix)) => println!("[{}][{}] {}", timestamp, prefix, message),
        Some(None) => println!("[{}] {}", timestamp, message),
        None => eprintln!("Logger not initialized! Call init_logger() first."),
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(&format!($($arg)*))
    };
}
