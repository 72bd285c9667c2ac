//! Bulk ingestion pipeline
//!
//! Ties parser, validator, and committer together. Every invocation runs
//! inside a batch logging context so collected events group by batch id.
//! Per-line problems accumulate as `ValidationResult`s; only batch-level
//! limit violations and commit failures return `PipelineError`.

pub mod error;

pub use error::{PipelineError, PipelineResult};

use crate::commit;
use crate::config::runtime::ValidationPreferences;
use crate::logging::{self, codes};
use crate::model::ModelStore;
use crate::parser::{self, Declaration};
use crate::validation::{self, BatchValidator, ValidationResult};
use crate::{log_debug, log_error, log_success};
use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_BATCH_ID: AtomicUsize = AtomicUsize::new(1);

fn next_batch_id() -> usize {
    NEXT_BATCH_ID.fetch_add(1, Ordering::Relaxed)
}

/// Outcome of validating one batch submission
#[derive(Debug, Clone)]
pub struct BulkValidationOutcome {
    /// One entry per non-blank input line, in input order
    pub results: Vec<ValidationResult>,

    /// Declarations that passed every check, in input order
    pub valid_declarations: Vec<Declaration>,
}

impl BulkValidationOutcome {
    pub fn all_valid(&self) -> bool {
        self.results.iter().all(|r| r.is_valid)
    }
}

/// Parse and validate a raw batch submission against the current model.
///
/// Runs synchronously and never fails on a per-line problem. Batch size
/// limit violations either fail the submission or, when the preference
/// says so, land inline as a single invalid result.
pub fn validate_bulk_input(
    input: &str,
    store: &ModelStore,
    prefs: &ValidationPreferences,
) -> PipelineResult<BulkValidationOutcome> {
    let lines = match parser::parse_batch(input) {
        Ok(lines) => lines,
        Err(limit_error) if !prefs.reject_oversized_batches => {
            log_error!(limit_error.error_code(), &limit_error.to_string());
            return Ok(BulkValidationOutcome {
                results: vec![ValidationResult::invalid("Batch", &limit_error.to_string())],
                valid_declarations: Vec::new(),
            });
        }
        Err(limit_error) => {
            log_error!(limit_error.error_code(), &limit_error.to_string());
            return Err(limit_error.into());
        }
    };

    let batch_id = next_batch_id();
    logging::with_batch_context(batch_id, lines.len(), || {
        let started = std::time::Instant::now();
        let mut results = Vec::with_capacity(lines.len());
        let mut validator = BatchValidator::new(store);

        for line in &lines {
            match &line.outcome {
                Err(parse_error) => {
                    log_error!(
                        parse_error.error_code(),
                        &parse_error.to_string(),
                        line = line.line_number
                    );
                    results.push(ValidationResult::for_line(
                        line.line_number,
                        false,
                        &parse_error.to_string(),
                    ));
                }
                Ok(declaration) => match validator.check(declaration) {
                    Ok(()) => {
                        if prefs.log_validation_details {
                            log_debug!(
                                "Declaration accepted",
                                "name" => declaration.object_name,
                                "line" => line.line_number
                            );
                        }
                        results.push(ValidationResult::for_line(
                            line.line_number,
                            true,
                            validation::success_message(declaration),
                        ));
                    }
                    Err(rule_error) => {
                        log_error!(
                            rule_error.error_code(),
                            &rule_error.to_string(),
                            line = line.line_number,
                            "name" => declaration.object_name
                        );
                        let message = if prefs.include_raw_line_in_messages {
                            format!("{} ({})", rule_error, declaration.raw_line)
                        } else {
                            rule_error.to_string()
                        };
                        results.push(ValidationResult::for_line(
                            line.line_number,
                            false,
                            &message,
                        ));
                    }
                },
            }
        }

        let valid_declarations = validator.into_accepted();

        log_success!(
            codes::success::BATCH_VALIDATION_COMPLETE,
            "Batch validation complete",
            "lines" => results.len(),
            "valid" => valid_declarations.len()
        );

        if logging::config::log_performance_events() {
            crate::log_info!(
                "Batch validation timing",
                "lines" => results.len(),
                "elapsed_ms" => started.elapsed().as_millis()
            );
        }

        Ok(BulkValidationOutcome {
            results,
            valid_declarations,
        })
    })
}

/// Commit previously validated declarations atomically.
///
/// Returns the number of objects appended to the model.
pub fn commit_bulk(store: &mut ModelStore, declarations: &[Declaration]) -> PipelineResult<usize> {
    let batch_id = next_batch_id();
    logging::with_batch_context(batch_id, declarations.len(), || {
        match commit::commit_batch(store, declarations) {
            Ok(count) => Ok(count),
            Err(commit_error) => {
                log_error!(commit_error.error_code(), &commit_error.to_string());
                Err(commit_error.into())
            }
        }
    })
}

/// Identification and self-check data for the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub registered_error_codes: usize,
}

pub fn pipeline_info() -> PipelineInfo {
    PipelineInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        registered_error_codes: codes::registered_error_codes().len(),
    }
}

/// Verify every error code this pipeline can emit is registered with
/// metadata, so summaries never render "Unknown error".
pub fn validate_pipeline() -> PipelineResult<PipelineInfo> {
    let emitted = [
        codes::system::INTERNAL_ERROR,
        codes::system::INITIALIZATION_FAILURE,
        codes::parsing::UNRECOGNIZED_DECLARATION,
        codes::parsing::EMPTY_BATCH,
        codes::parsing::BATCH_TOO_LARGE,
        codes::parsing::INPUT_TOO_LARGE,
        codes::naming::EMPTY_NAME,
        codes::naming::NAME_TOO_LONG,
        codes::naming::NAME_CONTAINS_SPACES,
        codes::naming::NAME_NOT_ALPHABETIC,
        codes::naming::NAME_NOT_PASCAL_CASE,
        codes::naming::DUPLICATE_IN_BATCH,
        codes::naming::DUPLICATE_IN_MODEL,
        codes::naming::REDUNDANT_LOOKUP_NAME,
        codes::dependency::MISSING_PARENT,
        codes::dependency::UNKNOWN_PARENT,
        codes::commit::MODEL_UNAVAILABLE,
        codes::commit::COMMIT_REJECTED,
        codes::model::DUPLICATE_OBJECT_NAME,
        codes::model::MODEL_IO_ERROR,
        codes::model::MODEL_PARSE_ERROR,
    ];

    for code in emitted {
        if codes::get_description(code.as_str()) == "Unknown error" {
            return Err(PipelineError::self_check(&format!(
                "error code {} has no registered metadata",
                code
            )));
        }
    }

    let info = pipeline_info();
    log_success!(
        codes::success::PIPELINE_VALIDATION_PASSED,
        "Pipeline self-check passed",
        "codes" => info.registered_error_codes
    );
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ParseError;
    use assert_matches::assert_matches;

    fn prefs() -> ValidationPreferences {
        ValidationPreferences {
            log_validation_details: false,
            include_raw_line_in_messages: false,
            reject_oversized_batches: true,
        }
    }

    #[test]
    fn test_ordered_batch_validates_fully() {
        let store = ModelStore::empty();
        let input = "Customer is a child of Pac\nOrderStatus is a lookup\nOrder is a child of Customer";

        let outcome = validate_bulk_input(input, &store, &prefs()).unwrap();

        assert!(outcome.all_valid());
        assert_eq!(outcome.results.len(), 3);
        assert_eq!(outcome.results[0].line_descriptor, "Line 1");
        assert_eq!(outcome.results[2].line_descriptor, "Line 3");

        let names: Vec<&str> = outcome
            .valid_declarations
            .iter()
            .map(|d| d.object_name.as_str())
            .collect();
        assert_eq!(names, vec!["Customer", "OrderStatus", "Order"]);
    }

    #[test]
    fn test_child_before_parent_fails_that_line_only() {
        let store = ModelStore::empty();
        let input = "Order is a child of Customer\nCustomer is a child of Pac";

        let outcome = validate_bulk_input(input, &store, &prefs()).unwrap();

        assert!(!outcome.results[0].is_valid);
        assert!(outcome.results[0].message.contains("does not exist"));
        assert!(outcome.results[1].is_valid);
        assert_eq!(outcome.valid_declarations.len(), 1);
        assert_eq!(outcome.valid_declarations[0].object_name, "Customer");
    }

    #[test]
    fn test_duplicate_line_in_input_fails_second() {
        let store = ModelStore::empty();
        let input = "Foo is a lookup\nFoo is a lookup";

        let outcome = validate_bulk_input(input, &store, &prefs()).unwrap();

        assert!(outcome.results[0].is_valid);
        assert!(!outcome.results[1].is_valid);
        assert!(outcome.results[1].message.contains("duplicates an earlier line"));
    }

    #[test]
    fn test_unparseable_line_reports_format_guidance() {
        let store = ModelStore::empty();
        let outcome = validate_bulk_input("Customer please", &store, &prefs()).unwrap();

        assert!(!outcome.results[0].is_valid);
        assert!(outcome.results[0].message.contains("is a child of"));
        assert!(outcome.valid_declarations.is_empty());
    }

    #[test]
    fn test_blank_lines_keep_original_numbering() {
        let store = ModelStore::empty();
        let input = "Customer is a child of Pac\n\nOrder is a child of Customer";

        let outcome = validate_bulk_input(input, &store, &prefs()).unwrap();

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.results[1].line_descriptor, "Line 3");
    }

    #[test]
    fn test_raw_line_appended_when_preference_set() {
        let store = ModelStore::empty();
        let mut raw_prefs = prefs();
        raw_prefs.include_raw_line_in_messages = true;

        let outcome = validate_bulk_input("foo is a lookup", &store, &raw_prefs).unwrap();
        assert!(outcome.results[0].message.contains("(foo is a lookup)"));
    }

    #[test]
    fn test_oversized_batch_rejected_by_default() {
        let store = ModelStore::empty();
        let input =
            "X is a lookup\n".repeat(crate::config::compile_time::batch::MAX_BATCH_LINES + 1);

        let result = validate_bulk_input(&input, &store, &prefs());
        assert_matches!(
            result,
            Err(PipelineError::Parse(ParseError::BatchTooLarge { .. }))
        );
    }

    #[test]
    fn test_oversized_batch_reported_inline_when_preferred() {
        let store = ModelStore::empty();
        let mut lenient = prefs();
        lenient.reject_oversized_batches = false;
        let input =
            "X is a lookup\n".repeat(crate::config::compile_time::batch::MAX_BATCH_LINES + 1);

        let outcome = validate_bulk_input(&input, &store, &lenient).unwrap();
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].line_descriptor, "Batch");
        assert!(!outcome.results[0].is_valid);
        assert!(outcome.valid_declarations.is_empty());
    }

    #[test]
    fn test_validate_then_commit_round_trip() {
        let mut store = ModelStore::empty();
        let input = "Customer is a child of Pac\nOrderStatus is a lookup";

        let outcome = validate_bulk_input(input, &store, &prefs()).unwrap();
        let count = commit_bulk(&mut store, &outcome.valid_declarations).unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.object_count(), 2);
        assert!(store.object_exists("Customer"));
        assert!(store.object_exists("OrderStatus"));

        // Resubmitting the same validated batch is rejected wholesale
        let result = commit_bulk(&mut store, &outcome.valid_declarations);
        assert_matches!(result, Err(PipelineError::Commit(_)));
        assert_eq!(store.object_count(), 2);
    }

    #[test]
    fn test_validation_against_updated_model_sees_new_objects() {
        let mut store = ModelStore::empty();
        let first = validate_bulk_input("Customer is a child of Pac", &store, &prefs()).unwrap();
        commit_bulk(&mut store, &first.valid_declarations).unwrap();

        let second = validate_bulk_input("Order is a child of Customer", &store, &prefs()).unwrap();
        assert!(second.all_valid());

        let duplicate = validate_bulk_input("Customer is a child of Pac", &store, &prefs()).unwrap();
        assert!(!duplicate.results[0].is_valid);
        assert!(duplicate.results[0].message.contains("already exists"));
    }

    #[test]
    fn test_pipeline_self_check_passes() {
        let info = validate_pipeline().unwrap();
        assert_eq!(info.name, "appdna_model");
        assert!(info.registered_error_codes >= 20);
    }
}
