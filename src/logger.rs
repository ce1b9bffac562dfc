//! Structured diagnostic logging.
//!
//! Standard output is reserved for the single result line consumed by the
//! scheduler script, so every message here is written to standard error.
//! Messages carry a level prefix; detail lines are indented under them.
//!
//! `[LOG]` lines are the verbose strategy trace and are only printed once the
//! debug switch is on.

use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Log level enumeration for categorizing message importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Log,  // Debug trace (only shown with --debug)
    Warn, // Degraded but recovered
    Err,  // A strategy or the whole run failed
    Crit, // Fault escaped the estimator
    Info, // Advisory notices
}

impl LogLevel {
    /// Prefix printed in front of every message of this level.
    pub fn prefix(self) -> &'static str {
        match self {
            LogLevel::Log => "[LOG]",
            LogLevel::Warn => "[WARN]",
            LogLevel::Err => "[ERR]",
            LogLevel::Crit => "[CRIT]",
            LogLevel::Info => "[INFO]",
        }
    }
}

/// Main logging interface.
pub struct Log;

impl Log {
    /// Enable or disable `[LOG]` debug lines.
    pub fn set_debug(enabled: bool) {
        DEBUG_ENABLED.store(enabled, Ordering::SeqCst);
    }

    pub fn is_debug() -> bool {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }

    /// Main log function with level-based prefixes.
    ///
    /// # Arguments
    /// * `level` - LogLevel indicating message importance
    /// * `message` - Text content to log
    pub fn log(level: LogLevel, message: &str) {
        if level == LogLevel::Log && !Self::is_debug() {
            return;
        }
        eprintln!("{} {}", level.prefix(), message);
    }

    // ═══ Convenience Methods for Common Log Levels ═══

    pub fn log_error(message: &str) {
        Self::log(LogLevel::Err, message);
    }

    pub fn log_warning(message: &str) {
        Self::log(LogLevel::Warn, message);
    }

    pub fn log_info(message: &str) {
        Self::log(LogLevel::Info, message);
    }

    pub fn log_debug(message: &str) {
        Self::log(LogLevel::Log, message);
    }

    pub fn log_critical(message: &str) {
        Self::log(LogLevel::Crit, message);
    }

    // ═══ Visual Formatting Functions ═══

    /// Log an indented detail line under the previous message.
    pub fn log_indented(message: &str) {
        eprintln!("    {}", message);
    }

    /// Log an error together with its full cause chain.
    ///
    /// The top-level message is logged at `level`; every underlying cause is
    /// printed as an indented `caused by:` line so the failure can be traced
    /// back to the strategy or parser that produced it.
    pub fn log_error_chain(level: LogLevel, error: &anyhow::Error) {
        Self::log(level, &error.to_string());
        for cause in error.chain().skip(1) {
            Self::log_indented(&format!("caused by: {}", cause));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_prefixes() {
        assert_eq!(LogLevel::Log.prefix(), "[LOG]");
        assert_eq!(LogLevel::Warn.prefix(), "[WARN]");
        assert_eq!(LogLevel::Err.prefix(), "[ERR]");
        assert_eq!(LogLevel::Crit.prefix(), "[CRIT]");
        assert_eq!(LogLevel::Info.prefix(), "[INFO]");
    }
}
