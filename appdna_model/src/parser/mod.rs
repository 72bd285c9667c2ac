//! Declaration line parser
//!
//! Splits raw multi-line batch input into declarations. Two mutually
//! exclusive patterns are recognized, case-insensitively:
//!
//! - `<Name> is a child of <Parent>`
//! - `<Name> is a lookup`
//!
//! Blank lines are skipped but still counted, so reported line numbers
//! always match the text the user pasted.

pub mod declaration;
pub mod error;

pub use declaration::{Declaration, ParsedLine};
pub use error::ParseError;

use crate::config::compile_time::batch::{MAX_BATCH_INPUT_SIZE, MAX_BATCH_LINES};

/// Parse a whole batch submission into ordered lines.
///
/// Per-line format failures land inside the returned `ParsedLine`s;
/// only batch-level limit violations fail the submission as a whole.
pub fn parse_batch(input: &str) -> Result<Vec<ParsedLine>, ParseError> {
    if input.len() > MAX_BATCH_INPUT_SIZE {
        return Err(ParseError::InputTooLarge {
            size: input.len(),
            max: MAX_BATCH_INPUT_SIZE,
        });
    }

    let mut lines = Vec::new();

    for (index, raw) in input.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        lines.push(ParsedLine {
            line_number: index + 1,
            outcome: parse_line(trimmed),
        });
    }

    if lines.len() > MAX_BATCH_LINES {
        return Err(ParseError::BatchTooLarge {
            count: lines.len(),
            max: MAX_BATCH_LINES,
        });
    }

    Ok(lines)
}

/// Classify one trimmed, non-blank line against the two patterns
pub fn parse_line(trimmed: &str) -> Result<Declaration, ParseError> {
    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens.as_slice() {
        [name, is, a, lookup]
            if is.eq_ignore_ascii_case("is")
                && a.eq_ignore_ascii_case("a")
                && lookup.eq_ignore_ascii_case("lookup") =>
        {
            Ok(Declaration::lookup(trimmed, name))
        }
        [name, is, a, child, of, parent]
            if is.eq_ignore_ascii_case("is")
                && a.eq_ignore_ascii_case("a")
                && child.eq_ignore_ascii_case("child")
                && of.eq_ignore_ascii_case("of") =>
        {
            Ok(Declaration::child(trimmed, name, parent))
        }
        _ => Err(ParseError::unrecognized(trimmed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_child_pattern() {
        let decl = parse_line("Customer is a child of Pac").unwrap();
        assert_eq!(decl.object_name, "Customer");
        assert_eq!(decl.parent_object_name, "Pac");
        assert!(!decl.is_lookup);
        assert_eq!(decl.raw_line, "Customer is a child of Pac");
    }

    #[test]
    fn test_lookup_pattern() {
        let decl = parse_line("OrderStatus is a lookup").unwrap();
        assert_eq!(decl.object_name, "OrderStatus");
        assert_eq!(decl.parent_object_name, "Pac");
        assert!(decl.is_lookup);
    }

    #[test]
    fn test_patterns_are_case_insensitive() {
        let decl = parse_line("Customer IS A CHILD OF Pac").unwrap();
        assert_eq!(decl.object_name, "Customer");
        // Name casing is preserved for the validator to judge
        let decl = parse_line("orderStatus Is A Lookup").unwrap();
        assert_eq!(decl.object_name, "orderStatus");
        assert!(decl.is_lookup);
    }

    #[test]
    fn test_unrecognized_lines() {
        assert_matches!(
            parse_line("Customer"),
            Err(ParseError::UnrecognizedDeclaration { .. })
        );
        assert_matches!(
            parse_line("Customer is a parent of Pac"),
            Err(ParseError::UnrecognizedDeclaration { .. })
        );
        assert_matches!(
            parse_line("Customer is a child of"),
            Err(ParseError::UnrecognizedDeclaration { .. })
        );
        // Extra trailing tokens do not match either pattern
        assert_matches!(
            parse_line("Customer is a child of Pac please"),
            Err(ParseError::UnrecognizedDeclaration { .. })
        );
    }

    #[test]
    fn test_batch_preserves_original_line_numbers() {
        let input = "Customer is a child of Pac\n\n  \nOrderStatus is a lookup\nnonsense";
        let lines = parse_batch(input).unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].line_number, 1);
        assert_eq!(lines[1].line_number, 4);
        assert_eq!(lines[2].line_number, 5);
        assert!(lines[0].is_declaration());
        assert!(lines[1].is_declaration());
        assert!(!lines[2].is_declaration());
    }

    #[test]
    fn test_lines_are_trimmed() {
        let lines = parse_batch("   Customer is a child of Pac   ").unwrap();
        let decl = lines[0].outcome.as_ref().unwrap();
        assert_eq!(decl.raw_line, "Customer is a child of Pac");
    }

    #[test]
    fn test_blank_input_yields_no_lines() {
        assert!(parse_batch("").unwrap().is_empty());
        assert!(parse_batch("\n  \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn test_batch_line_limit() {
        let input = "X is a lookup\n".repeat(crate::config::compile_time::batch::MAX_BATCH_LINES + 1);
        assert_matches!(parse_batch(&input), Err(ParseError::BatchTooLarge { .. }));
    }
}
