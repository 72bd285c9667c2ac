//! Batch-aware error collection
//!
//! Groups events by the batch submission that produced them so hosts can
//! render cargo-style summaries per submission.

use super::config;
use super::events::LogEvent;
use std::collections::HashMap;
use std::sync::Mutex;

/// Identifies the batch submission currently being processed on a thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchProcessingContext {
    pub batch_id: usize,
    /// Non-blank declaration lines in the submission
    pub line_count: usize,
}

impl BatchProcessingContext {
    pub fn new(batch_id: usize, line_count: usize) -> Self {
        Self {
            batch_id,
            line_count,
        }
    }
}

#[derive(Debug, Default)]
struct BatchRecord {
    context: Option<BatchProcessingContext>,
    events: Vec<LogEvent>,
}

/// Thread-safe collector of per-batch events
pub struct ErrorCollector {
    batches: Mutex<HashMap<usize, BatchRecord>>,
    total_events: Mutex<usize>,
}

/// Aggregate view over everything collected so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
    pub total_batches: usize,
    pub total_errors: usize,
    pub total_warnings: usize,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self {
            batches: Mutex::new(HashMap::new()),
            total_events: Mutex::new(0),
        }
    }

    /// Remember the context of a batch before events arrive
    pub fn record_batch_context(&self, context: BatchProcessingContext) {
        let mut batches = self.batches.lock().unwrap();
        batches
            .entry(context.batch_id)
            .or_default()
            .context
            .get_or_insert(context);
    }

    /// Record an event against a batch, respecting capacity limits
    pub fn record_event(&self, batch_id: usize, event: LogEvent) {
        let mut total = self.total_events.lock().unwrap();
        if *total >= config::get_error_buffer_size() {
            return;
        }

        let mut batches = self.batches.lock().unwrap();
        let record = batches.entry(batch_id).or_default();
        if record.events.len() >= config::get_max_log_events_per_batch() {
            return;
        }

        record.events.push(event);
        *total += 1;
    }

    /// All error events recorded for one batch
    pub fn get_batch_errors(&self, batch_id: usize) -> Vec<LogEvent> {
        self.batches
            .lock()
            .unwrap()
            .get(&batch_id)
            .map(|r| r.events.iter().filter(|e| e.is_error()).cloned().collect())
            .unwrap_or_default()
    }

    pub fn get_summary(&self) -> ProcessingSummary {
        let batches = self.batches.lock().unwrap();
        let mut summary = ProcessingSummary {
            total_batches: batches.len(),
            ..Default::default()
        };

        for record in batches.values() {
            summary.total_errors += record.events.iter().filter(|e| e.is_error()).count();
            summary.total_warnings += record.events.iter().filter(|e| e.is_warning()).count();
        }

        summary
    }

    /// Current usage versus capacity (current, max, fraction)
    pub fn get_capacity_info(&self) -> (usize, usize, f64) {
        let current = *self.total_events.lock().unwrap();
        let max = config::get_error_buffer_size();
        (current, max, current as f64 / max as f64)
    }

    pub fn clear(&self) {
        self.batches.lock().unwrap().clear();
        *self.total_events.lock().unwrap() = 0;
    }
}

impl Default for ErrorCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Cargo-style rendering of collected errors, grouped by batch
pub fn format_cargo_style_errors(collector: &ErrorCollector) -> String {
    let batches = collector.batches.lock().unwrap();
    let mut batch_ids: Vec<usize> = batches.keys().copied().collect();
    batch_ids.sort_unstable();

    let mut output = String::new();
    let mut error_total = 0usize;

    for batch_id in batch_ids {
        let record = &batches[&batch_id];
        let errors: Vec<&LogEvent> = record.events.iter().filter(|e| e.is_error()).collect();
        if errors.is_empty() {
            continue;
        }

        let line_count = record
            .context
            .as_ref()
            .map(|c| c.line_count.to_string())
            .unwrap_or_else(|| "?".to_string());

        output.push_str(&format!(
            "batch {} ({} declaration lines):\n",
            batch_id, line_count
        ));

        for event in &errors {
            output.push_str(&format!("    {}\n", event.format()));
        }
        error_total += errors.len();
    }

    if error_total == 0 {
        output.push_str("no errors collected\n");
    } else {
        output.push_str(&format!("error: {} previous errors\n", error_total));
    }

    output
}
