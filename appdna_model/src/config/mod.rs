//! Configuration module for the AppDNA model engine
//!
//! Compile-time limits live in `constants`; user-tunable preferences
//! (env vars with optional `appdna.toml` override) live in `runtime`.

pub mod constants;
pub mod runtime;

pub use constants::compile_time;
pub use runtime::{
    LoggingPreferences, PreferencesError, RuntimePreferences, ValidationPreferences,
};
