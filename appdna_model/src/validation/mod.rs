//! Per-line declaration validation with cross-line dependency resolution
//!
//! `BatchValidator` carries the accepted-so-far set, making parent
//! resolution a linear one-pass affair: a parent must exist in the
//! persisted model or on an earlier accepted line. Forward references are
//! rejected, not reordered.

pub mod error;
pub mod rules;
pub mod types;

pub use error::{NameRuleResult, ValidationError};
pub use types::ValidationResult;

use crate::model::ModelStore;
use crate::parser::Declaration;

/// Success message for an accepted lookup declaration
pub const VALID_LOOKUP_MESSAGE: &str = "Valid lookup object declaration";

/// Success message for an accepted child declaration
pub const VALID_CHILD_MESSAGE: &str = "Valid child object declaration";

/// Validates declarations one at a time, accumulating the accepted set
pub struct BatchValidator<'a> {
    store: &'a ModelStore,
    accepted: Vec<Declaration>,
}

impl<'a> BatchValidator<'a> {
    pub fn new(store: &'a ModelStore) -> Self {
        Self {
            store,
            accepted: Vec::new(),
        }
    }

    /// Declarations accepted so far, in input order
    pub fn accepted(&self) -> &[Declaration] {
        &self.accepted
    }

    pub fn into_accepted(self) -> Vec<Declaration> {
        self.accepted
    }

    /// Run the ordered checks; on success the declaration joins the
    /// accepted set so later lines can reference it as parent.
    pub fn check(&mut self, declaration: &Declaration) -> NameRuleResult {
        self.check_name(&declaration.object_name, declaration.is_lookup)?;

        if !declaration.is_lookup {
            self.check_parent(&declaration.parent_object_name)?;
        }

        self.accepted.push(declaration.clone());
        Ok(())
    }

    /// Naming rules 1-8 (everything except parent resolution)
    fn check_name(&self, name: &str, is_lookup: bool) -> NameRuleResult {
        rules::check_non_empty(name)?;
        rules::check_length(name)?;
        rules::check_no_spaces(name)?;
        rules::check_alphabetic(name)?;
        rules::check_pascal_case_entry(name)?;

        if self.accepted.iter().any(|d| d.object_name == name) {
            return Err(ValidationError::duplicate_in_batch(name));
        }

        if self.store.object_exists(name) {
            return Err(ValidationError::duplicate_in_model(name));
        }

        if is_lookup {
            rules::check_no_redundant_lookup(name)?;
        }

        Ok(())
    }

    /// Rule 9: parent must be persisted or accepted earlier in this batch
    fn check_parent(&self, parent: &str) -> NameRuleResult {
        if parent.is_empty() {
            return Err(ValidationError::MissingParent);
        }

        let persisted = self.store.object_exists(parent);
        let in_batch = self.accepted.iter().any(|d| d.object_name == parent);
        let is_root = parent == crate::config::compile_time::model::ROOT_OBJECT_NAME;

        if persisted || in_batch || is_root {
            Ok(())
        } else {
            Err(ValidationError::unknown_parent(parent))
        }
    }
}

/// Single-declaration variant used by the name-entry field of the wizard
/// (naming rules only; parent resolution needs batch context)
pub fn validate_name(name: &str, is_lookup: bool, store: &ModelStore) -> ValidationResult {
    let validator = BatchValidator::new(store);
    match validator.check_name(name, is_lookup) {
        Ok(()) => ValidationResult::valid(name, "Object name is valid"),
        Err(error) => ValidationResult::invalid(name, &error.to_string()),
    }
}

/// Success message for an accepted declaration
pub fn success_message(declaration: &Declaration) -> &'static str {
    if declaration.is_lookup {
        VALID_LOOKUP_MESSAGE
    } else {
        VALID_CHILD_MESSAGE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ModelCommand, ModelObject, ModelStore};
    use assert_matches::assert_matches;

    fn store_with(names: &[&str]) -> ModelStore {
        let mut store = ModelStore::empty();
        if !names.is_empty() {
            store
                .apply(ModelCommand::AddObjects {
                    objects: names
                        .iter()
                        .map(|n| ModelObject::new(n, "Pac", false))
                        .collect(),
                })
                .unwrap();
        }
        store
    }

    #[test]
    fn test_ordered_chain_accepts_batch_local_parent() {
        let store = store_with(&[]);
        let mut validator = BatchValidator::new(&store);

        validator
            .check(&Declaration::child("Customer is a child of Pac", "Customer", "Pac"))
            .unwrap();
        validator
            .check(&Declaration::lookup("OrderStatus is a lookup", "OrderStatus"))
            .unwrap();
        validator
            .check(&Declaration::child(
                "Order is a child of Customer",
                "Order",
                "Customer",
            ))
            .unwrap();

        let names: Vec<&str> = validator
            .accepted()
            .iter()
            .map(|d| d.object_name.as_str())
            .collect();
        assert_eq!(names, vec!["Customer", "OrderStatus", "Order"]);
    }

    #[test]
    fn test_forward_reference_rejected() {
        let store = store_with(&[]);
        let mut validator = BatchValidator::new(&store);

        // Child declared before its parent in the same batch
        let result = validator.check(&Declaration::child(
            "Order is a child of Customer",
            "Order",
            "Customer",
        ));
        assert_matches!(result, Err(ValidationError::UnknownParent { parent }) if parent == "Customer");

        // The parent line itself still validates afterwards
        validator
            .check(&Declaration::child("Customer is a child of Pac", "Customer", "Pac"))
            .unwrap();
    }

    #[test]
    fn test_duplicate_within_batch() {
        let store = store_with(&[]);
        let mut validator = BatchValidator::new(&store);

        validator
            .check(&Declaration::lookup("Foo is a lookup", "Foo"))
            .unwrap();
        let result = validator.check(&Declaration::lookup("Foo is a lookup", "Foo"));
        assert_matches!(result, Err(ValidationError::DuplicateInBatch { name }) if name == "Foo");
    }

    #[test]
    fn test_duplicate_against_persisted_model() {
        let store = store_with(&["Customer"]);
        let mut validator = BatchValidator::new(&store);

        let result = validator.check(&Declaration::child(
            "Customer is a child of Pac",
            "Customer",
            "Pac",
        ));
        assert_matches!(result, Err(ValidationError::DuplicateInModel { name }) if name == "Customer");
    }

    #[test]
    fn test_parent_resolves_against_persisted_model() {
        let store = store_with(&["Customer"]);
        let mut validator = BatchValidator::new(&store);

        validator
            .check(&Declaration::child(
                "Order is a child of Customer",
                "Order",
                "Customer",
            ))
            .unwrap();
    }

    #[test]
    fn test_checks_run_in_order_first_failure_wins() {
        let store = store_with(&[]);
        let mut validator = BatchValidator::new(&store);

        // Both too long and non-alphabetic; length is checked first
        let long_and_numeric = format!("{}9", "A".repeat(101));
        let decl = Declaration::lookup("raw", &long_and_numeric);
        assert_matches!(
            validator.check(&decl),
            Err(ValidationError::NameTooLong { .. })
        );
    }

    #[test]
    fn test_lookup_name_containing_lookup_rejected_any_case() {
        let store = store_with(&[]);
        let mut validator = BatchValidator::new(&store);

        let result = validator.check(&Declaration::lookup("raw", "StatusLOOKUP"));
        assert_matches!(result, Err(ValidationError::RedundantLookupName));

        // Same name is fine for a non-lookup child
        validator
            .check(&Declaration::child("raw", "StatusLOOKUP", "Pac"))
            .unwrap();
    }

    #[test]
    fn test_validate_name_variant() {
        let store = store_with(&["Customer"]);

        assert!(validate_name("Supplier", false, &store).is_valid);

        let result = validate_name("Customer", false, &store);
        assert!(!result.is_valid);
        assert!(result.message.contains("already exists"));

        let result = validate_name("Order Line", false, &store);
        assert!(!result.is_valid);
        assert!(result.message.contains("spaces"));

        let result = validate_name("Order2", false, &store);
        assert!(!result.is_valid);
        assert!(result.message.contains("only letters"));

        let result = validate_name("order", false, &store);
        assert!(!result.is_valid);
        assert!(result.message.contains("uppercase"));
    }
}
