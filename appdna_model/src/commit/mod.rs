//! Batch committer
//!
//! Object construction is staged fully before any model mutation: all
//! `ModelObject`s for a batch are built first, then applied through one
//! `ModelCommand::AddObjects`. A rejected command leaves the model exactly
//! as it was.

pub mod error;

pub use error::{CommitError, CommitResult};

use crate::log_success;
use crate::model::{LookupItem, ModelCommand, ModelObject, ModelStore, PropertyDefinition};
use crate::parser::Declaration;

/// Materialize one declaration into a committable object.
///
/// A parented object gets exactly one synthesized `<Parent>ID` foreign-key
/// property; a lookup additionally gets the default lookup item and its FK
/// carries the lookup flag.
pub fn build_object(declaration: &Declaration) -> ModelObject {
    let mut object = ModelObject::new(
        &declaration.object_name,
        &declaration.parent_object_name,
        declaration.is_lookup,
    );

    if !declaration.parent_object_name.is_empty() {
        let fk = PropertyDefinition::foreign_key(&declaration.parent_object_name);
        object.prop.push(if declaration.is_lookup {
            fk.with_fk_lookup()
        } else {
            fk
        });
    }

    if declaration.is_lookup {
        object.lookup_item.push(LookupItem::default_entry());
    }

    object
}

/// Commit validated declarations atomically, in input order.
///
/// Returns the number of objects appended. The caller is expected to have
/// validated the batch; uniqueness is still re-checked by the store and a
/// violation rejects the whole batch.
pub fn commit_batch(store: &mut ModelStore, declarations: &[Declaration]) -> CommitResult<usize> {
    if declarations.is_empty() {
        return Err(CommitError::EmptyBatch);
    }

    let objects: Vec<ModelObject> = declarations.iter().map(build_object).collect();
    let count = objects.len();

    store.apply(ModelCommand::AddObjects { objects })?;

    log_success!(
        crate::logging::codes::success::BATCH_COMMIT_COMPLETE,
        "Batch committed",
        "count" => count
    );

    Ok(count)
}

/// Single-object variant sharing the batch construction path
pub fn commit_single(
    store: &mut ModelStore,
    name: &str,
    parent: &str,
    is_lookup: bool,
) -> CommitResult<()> {
    let declaration = if is_lookup {
        Declaration::lookup(&format!("{} is a lookup", name), name)
    } else {
        Declaration::child(&format!("{} is a child of {}", name, parent), name, parent)
    };

    commit_batch(store, &[declaration]).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_child_object_gets_single_fk_property() {
        let decl = Declaration::child("Order is a child of Customer", "Order", "Customer");
        let object = build_object(&decl);

        assert_eq!(object.name, "Order");
        assert_eq!(object.parent_object_name, "Customer");
        assert!(!object.is_lookup);
        assert_eq!(object.prop.len(), 1);
        assert_eq!(object.prop[0].name, "CustomerID");
        assert!(object.prop[0].is_fk);
        assert_eq!(object.prop[0].is_fk_lookup, None);
        assert!(object.lookup_item.is_empty());
    }

    #[test]
    fn test_lookup_object_gets_flagged_fk_and_default_item() {
        let decl = Declaration::lookup("OrderStatus is a lookup", "OrderStatus");
        let object = build_object(&decl);

        assert!(object.is_lookup);
        assert_eq!(object.parent_object_name, "Pac");
        assert_eq!(object.prop.len(), 1);
        assert_eq!(object.prop[0].name, "PacID");
        assert_eq!(object.prop[0].is_fk_lookup, Some(true));
        assert_eq!(object.lookup_item.len(), 1);
        assert_eq!(object.lookup_item[0].name, "Unknown");
    }

    #[test]
    fn test_commit_batch_appends_in_order() {
        let mut store = ModelStore::empty();
        let batch = vec![
            Declaration::child("Customer is a child of Pac", "Customer", "Pac"),
            Declaration::lookup("OrderStatus is a lookup", "OrderStatus"),
            Declaration::child("Order is a child of Customer", "Order", "Customer"),
        ];

        let count = commit_batch(&mut store, &batch).unwrap();
        assert_eq!(count, 3);
        assert_eq!(store.object_count(), 3);
        assert!(store.has_unsaved_changes());

        let ns = store.first_namespace().unwrap();
        let names: Vec<&str> = ns.object.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Customer", "OrderStatus", "Order"]);
    }

    #[test]
    fn test_resubmitting_same_batch_fails_whole() {
        let mut store = ModelStore::empty();
        let batch = vec![Declaration::lookup("OrderStatus is a lookup", "OrderStatus")];

        commit_batch(&mut store, &batch).unwrap();
        let result = commit_batch(&mut store, &batch);

        assert_matches!(result, Err(CommitError::Rejected(_)));
        assert_eq!(store.object_count(), 1);
    }

    #[test]
    fn test_empty_batch_rejected() {
        let mut store = ModelStore::empty();
        assert_matches!(commit_batch(&mut store, &[]), Err(CommitError::EmptyBatch));
    }

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(CommitError::EmptyBatch.error_code().as_str(), "E021");
        assert_eq!(
            CommitError::model_unavailable("lock poisoned")
                .error_code()
                .as_str(),
            "E050"
        );

        let mut store = ModelStore::empty();
        commit_single(&mut store, "Customer", "Pac", false).unwrap();
        let rejected = commit_single(&mut store, "Customer", "Pac", false).unwrap_err();
        assert_eq!(rejected.error_code().as_str(), "E051");
    }

    #[test]
    fn test_commit_single_lookup() {
        let mut store = ModelStore::empty();
        commit_single(&mut store, "Currency", "", true).unwrap();

        let object = store.model().find_object("Currency").unwrap();
        assert!(object.is_lookup);
        assert_eq!(object.lookup_item[0].name, "Unknown");
    }
}
