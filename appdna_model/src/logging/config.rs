//! Configuration access for logging
//!
//! Audit floor is a compile-time constant; everything else is a user
//! preference resolved through `config::runtime`.

use crate::config::compile_time::logging::*;
use crate::config::runtime::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

/// Initialize runtime logging preferences
pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    validate_preferences(&preferences)?;

    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime logging preferences already initialized".to_string())?;

    Ok(())
}

/// Get runtime preferences (with fallback to defaults)
fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

/// Validate runtime preferences against the audit floor
pub fn validate_config() -> Result<(), String> {
    validate_preferences(&get_runtime_preferences())
}

fn validate_preferences(preferences: &LoggingPreferences) -> Result<(), String> {
    // The audit floor keeps warnings visible regardless of user preference
    let user_level = preferences.min_log_level.to_events_log_level() as u8;
    if user_level < AUDIT_MIN_LOG_LEVEL {
        return Err(format!(
            "Audit logging cannot be suppressed: minimum level {} required",
            AUDIT_MIN_LOG_LEVEL
        ));
    }
    Ok(())
}

/// Get minimum log level (user preference, errors always pass)
pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

/// Check if structured logging is enabled (user preference)
pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

/// Check if performance events should be logged (user preference)
pub fn log_performance_events() -> bool {
    get_runtime_preferences().log_performance_events
}

/// Get total collector capacity (compile-time constant)
pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}

/// Get maximum log events retained per batch (compile-time constant)
pub fn get_max_log_events_per_batch() -> usize {
    MAX_LOG_EVENTS_PER_BATCH
}
