//! Global logging module for the AppDNA model engine
//!
//! Provides thread-safe global logging with batch-aware event collection,
//! cargo-style error reporting, and a clean macro interface.

pub mod codes;
pub mod collector;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use collector::{BatchProcessingContext, ErrorCollector, ProcessingSummary};
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();
static GLOBAL_ERROR_COLLECTOR: OnceLock<Arc<ErrorCollector>> = OnceLock::new();

thread_local! {
    static BATCH_CONTEXT: RefCell<Option<BatchProcessingContext>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());
    let error_collector = Arc::new(ErrorCollector::new());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    GLOBAL_ERROR_COLLECTOR
        .set(error_collector)
        .map_err(|_| "Global error collector already initialized")?;

    // Validate error code system
    let test_codes = ["ERR001", "E020", "E030", "E041", "E050"];
    for &code in &test_codes {
        if codes::get_description(code) == "Unknown error" {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    let event = events::LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );
    logging_service.log_event(event);

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    let error_collector = Arc::new(ErrorCollector::new());

    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;

    GLOBAL_ERROR_COLLECTOR
        .set(error_collector)
        .map_err(|_| "Global error collector already initialized")?;

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some() && GLOBAL_ERROR_COLLECTOR.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

/// Safe access to global error collector
pub fn try_get_global_error_collector() -> Option<&'static ErrorCollector> {
    GLOBAL_ERROR_COLLECTOR
        .get()
        .map(|collector| collector.as_ref())
}

// ============================================================================
// BATCH CONTEXT MANAGEMENT
// ============================================================================

/// Set batch context for current thread
pub fn set_batch_context(batch_id: usize, line_count: usize) {
    let context = BatchProcessingContext::new(batch_id, line_count);

    if let Some(collector) = try_get_global_error_collector() {
        collector.record_batch_context(context.clone());
    }

    BATCH_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(context);
    });
}

/// Clear batch context for current thread
pub fn clear_batch_context() {
    BATCH_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Execute function with batch context
pub fn with_batch_context<F, R>(batch_id: usize, line_count: usize, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_batch_context(batch_id, line_count);
    let result = f();
    clear_batch_context();
    result
}

/// Get current batch context (used by macros)
pub fn get_current_batch_context() -> Option<BatchProcessingContext> {
    BATCH_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Route an event to the global logger and, when in batch context, the collector
pub fn dispatch_event(mut event: LogEvent) {
    if let Some(batch_ctx) = get_current_batch_context() {
        event = event.with_context("batch_id", &batch_ctx.batch_id.to_string());
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event.clone());
    }

    if let Some(batch_ctx) = get_current_batch_context() {
        if let Some(collector) = try_get_global_error_collector() {
            collector.record_event(batch_ctx.batch_id, event);
        }
    }
}

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(
    code: Code,
    message: &str,
    line: Option<usize>,
    context: Vec<(&str, &str)>,
) {
    let mut event = LogEvent::error(code, message);

    if let Some(l) = line {
        event = event.with_line(l);
    }

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    dispatch_event(event);
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::success(code, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    dispatch_event(event);
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::info(message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    dispatch_event(event);
}

// ============================================================================
// BATCH REPORTING
// ============================================================================

/// Get processing summary
pub fn get_processing_summary() -> ProcessingSummary {
    try_get_global_error_collector()
        .map(|collector| collector.get_summary())
        .unwrap_or_default()
}

/// Get errors for a specific batch
pub fn get_batch_errors(batch_id: usize) -> Vec<LogEvent> {
    try_get_global_error_collector()
        .map(|collector| collector.get_batch_errors(batch_id))
        .unwrap_or_default()
}

/// Print cargo-style summary of collected errors
pub fn print_cargo_style_summary() {
    if let Some(collector) = try_get_global_error_collector() {
        println!("{}", collector::format_cargo_style_errors(collector));
    } else {
        println!("No error collector available for summary");
    }
}

/// Clear all collected errors
pub fn clear_error_collection() {
    if let Some(collector) = try_get_global_error_collector() {
        collector.clear();
    }
}

/// Safe error logging (won't panic if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_context_management() {
        assert!(get_current_batch_context().is_none());

        set_batch_context(9, 5);
        let context = get_current_batch_context();
        assert_eq!(context, Some(BatchProcessingContext::new(9, 5)));

        clear_batch_context();
        assert!(get_current_batch_context().is_none());
    }

    #[test]
    fn test_with_batch_context() {
        let result = with_batch_context(3, 2, || {
            let context = get_current_batch_context().unwrap();
            assert_eq!(context.batch_id, 3);
            assert_eq!(context.line_count, 2);
            42
        });

        assert_eq!(result, 42);
        assert!(get_current_batch_context().is_none());
    }

    #[test]
    fn test_safe_logging_without_init() {
        // Should not panic even if global logging is not initialized
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
    }

    #[test]
    fn test_summary_without_init_is_empty() {
        if is_initialized() {
            return;
        }
        assert_eq!(get_processing_summary(), ProcessingSummary::default());
        assert!(get_batch_errors(1).is_empty());
    }
}
