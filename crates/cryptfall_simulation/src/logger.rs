//! Глобальный logger симуляции
//!
//! Pluggable sink: движковый bridge может подставить свой printer
//! (console по умолчанию). Timestamp добавляется здесь, не в printer'е.

use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn set_logger(printer: Box<dyn LogPrinter>) {
    *LOGGER.lock().unwrap() = Some(printer);
}

pub fn set_logger_if_needed(printer: Box<dyn LogPrinter>) {
    let mut slot = LOGGER.lock().unwrap();
    if slot.is_none() {
        *slot = Some(printer);
    }
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    if let Some(printer) = LOGGER.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        printer.log(level, &format!("[{}] {}", timestamp, message));
    }
}

struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}
