// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

/// Preferences for batch validation behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationPreferences {
    /// Whether to log each per-line validation decision
    pub log_validation_details: bool,

    /// Whether to include the raw line text in validation messages
    /// (line numbers are always included)
    pub include_raw_line_in_messages: bool,

    /// Whether batch size limit violations fail the whole submission,
    /// or are reported inline as a single validation result
    pub reject_oversized_batches: bool,
}

impl Default for ValidationPreferences {
    fn default() -> Self {
        Self {
            log_validation_details: env::var("APPDNA_LOG_VALIDATION_DETAILS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            include_raw_line_in_messages: env::var("APPDNA_INCLUDE_RAW_LINE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            reject_oversized_batches: env::var("APPDNA_REJECT_OVERSIZED_BATCHES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// User-tunable logging preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Minimum log level: "error", "warning", "info", or "debug"
    pub min_log_level: LogLevel,

    /// Whether to emit JSON-structured log lines instead of plain text
    pub use_structured_logging: bool,

    /// Whether to log pipeline performance metrics
    pub log_performance_events: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            min_log_level: env::var("APPDNA_MIN_LOG_LEVEL")
                .ok()
                .and_then(|v| LogLevel::parse(&v))
                .unwrap_or(LogLevel::Info),
            use_structured_logging: env::var("APPDNA_STRUCTURED_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_performance_events: env::var("APPDNA_LOG_PERFORMANCE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

/// Log level as written in preference files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    Debug,
}

impl LogLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warning" | "warn" => Some(LogLevel::Warning),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            _ => None,
        }
    }

    pub fn to_events_log_level(self) -> crate::logging::LogLevel {
        match self {
            LogLevel::Error => crate::logging::LogLevel::Error,
            LogLevel::Warning => crate::logging::LogLevel::Warning,
            LogLevel::Info => crate::logging::LogLevel::Info,
            LogLevel::Debug => crate::logging::LogLevel::Debug,
        }
    }
}

/// Complete runtime preference set, loadable from an `appdna.toml` file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimePreferences {
    pub validation: ValidationPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimePreferences {
    /// Load preferences from a TOML file, falling back to env-var/default
    /// values for any missing section or key
    pub fn load_from_file(path: &Path) -> Result<Self, PreferencesError> {
        let content = std::fs::read_to_string(path).map_err(|e| PreferencesError::Io {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, PreferencesError> {
        toml::from_str(content).map_err(|e| PreferencesError::Parse {
            error: e.to_string(),
        })
    }
}

/// Errors while loading runtime preferences
#[derive(Debug, thiserror::Error)]
pub enum PreferencesError {
    #[error("Cannot read preferences file {path}: {error}")]
    Io { path: String, error: String },

    #[error("Invalid preferences file: {error}")]
    Parse { error: String },
}
