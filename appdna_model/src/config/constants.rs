pub mod compile_time {
    pub mod model {
        /// Sentinel root object every model is anchored on.
        /// Lookup declarations implicitly parent to this object.
        pub const ROOT_OBJECT_NAME: &str = "Pac";

        /// Namespace synthesized when a model has none
        pub const DEFAULT_NAMESPACE_NAME: &str = "Default";

        /// SQL data type assigned to synthesized foreign-key properties
        pub const FK_PROPERTY_DATA_TYPE: &str = "int";

        /// Default entry name for newly created lookup objects
        pub const DEFAULT_LOOKUP_ITEM_NAME: &str = "Unknown";

        /// Maximum model document size accepted by the loader (10MB)
        /// SECURITY: Prevents resource exhaustion via oversized model files
        pub const MAX_MODEL_FILE_SIZE: u64 = 10 * 1024 * 1024;
    }

    pub mod naming {
        /// Maximum object name length (characters)
        pub const MAX_OBJECT_NAME_LENGTH: usize = 100;

        /// Substring forbidden in lookup object names (checked case-insensitively)
        pub const REDUNDANT_LOOKUP_SUBSTRING: &str = "lookup";
    }

    pub mod batch {
        /// Maximum non-blank declaration lines per batch submission
        /// SECURITY: Prevents resource exhaustion via enormous paste input
        pub const MAX_BATCH_LINES: usize = 1_000;

        /// Maximum raw input size per batch submission (1MB)
        /// SECURITY: Prevents resource exhaustion via enormous paste input
        pub const MAX_BATCH_INPUT_SIZE: usize = 1_048_576;
    }

    pub mod logging {
        /// Maximum log events retained per batch
        /// RESOURCE: Prevents unbounded memory growth in the collector
        pub const MAX_LOG_EVENTS_PER_BATCH: usize = 5_000;

        /// Total collector capacity across all batches
        /// RESOURCE: Prevents unbounded memory growth in the collector
        pub const LOG_BUFFER_SIZE: usize = 50_000;

        /// Minimum log level that cannot be suppressed by preferences
        /// (0 = Error, 1 = Warning)
        pub const AUDIT_MIN_LOG_LEVEL: u8 = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn test_limits_are_sane() {
        assert_eq!(naming::MAX_OBJECT_NAME_LENGTH, 100);
        assert!(batch::MAX_BATCH_LINES > 0);
        assert!(logging::MAX_LOG_EVENTS_PER_BATCH <= logging::LOG_BUFFER_SIZE);
    }

    #[test]
    fn test_root_object_is_valid_name() {
        assert!(model::ROOT_OBJECT_NAME.chars().all(|c| c.is_ascii_alphabetic()));
        assert!(model::ROOT_OBJECT_NAME.starts_with(|c: char| c.is_ascii_uppercase()));
    }
}
