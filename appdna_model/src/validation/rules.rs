//! Ordered naming rules
//!
//! Checks run in a fixed order and the first failure wins. The PascalCase
//! rule is an entry check only (leading uppercase); internal word-boundary
//! casing is deliberately not verified.

use super::error::{NameRuleResult, ValidationError};
use crate::config::compile_time::naming::{MAX_OBJECT_NAME_LENGTH, REDUNDANT_LOOKUP_SUBSTRING};

pub fn check_non_empty(name: &str) -> NameRuleResult {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

pub fn check_length(name: &str) -> NameRuleResult {
    let length = name.chars().count();
    if length > MAX_OBJECT_NAME_LENGTH {
        return Err(ValidationError::name_too_long(length, MAX_OBJECT_NAME_LENGTH));
    }
    Ok(())
}

pub fn check_no_spaces(name: &str) -> NameRuleResult {
    if name.contains(' ') {
        return Err(ValidationError::NameContainsSpaces);
    }
    Ok(())
}

pub fn check_alphabetic(name: &str) -> NameRuleResult {
    if !name.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::NameNotAlphabetic);
    }
    Ok(())
}

pub fn check_pascal_case_entry(name: &str) -> NameRuleResult {
    match name.chars().next() {
        Some(first) if first.is_ascii_uppercase() => Ok(()),
        _ => Err(ValidationError::NameNotPascalCase),
    }
}

pub fn check_no_redundant_lookup(name: &str) -> NameRuleResult {
    if name
        .to_ascii_lowercase()
        .contains(REDUNDANT_LOOKUP_SUBSTRING)
    {
        return Err(ValidationError::RedundantLookupName);
    }
    Ok(())
}
