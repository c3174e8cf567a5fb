//! Field rules shared by the CSV import and single-review paths.

use revdock_core::{is_valid_handle, parse_rating, ReviewDraft};

use crate::types::CsvRow;

pub(crate) const MESSAGE_MAX_CHARS: usize = 200;

/// Checks every field rule against `row` and returns one diagnostic per
/// broken rule, each prefixed with the row's 1-based file line number
/// (the header is line 1, so data rows start at 2).
///
/// All four rules run regardless of earlier failures, so one bad row
/// reports every problem at once. An empty return means the row is valid.
#[must_use]
pub fn validate_row(row: &CsvRow, line_number: usize) -> Vec<String> {
    let mut diagnostics = Vec::new();

    if !is_valid_handle(&row.handle) {
        diagnostics.push(format!(
            "Row {line_number}: Invalid 'Handle' (should be dash-separated, received '{}').",
            row.handle
        ));
    }

    if row.name.trim().is_empty() {
        diagnostics.push(format!("Row {line_number}: 'Name' is missing or empty."));
    }

    if !message_within_limit(&row.message) {
        diagnostics.push(format!(
            "Row {line_number}: 'Message' is either missing or exceeds {MESSAGE_MAX_CHARS} characters."
        ));
    }

    if parse_rating(&row.rating).is_none() {
        diagnostics.push(format!(
            "Row {line_number}: 'Rating' should be a number between 1 and 5 (received '{}').",
            row.rating
        ));
    }

    diagnostics
}

/// Checks the submission field rules against a single-review draft.
///
/// The rule set matches [`validate_row`] minus the handle (the handle
/// arrives separately and the store lookup vouches for it) and the
/// diagnostics carry no row prefix.
///
/// # Errors
///
/// Returns one diagnostic per broken rule; on success the parsed rating
/// comes back so callers never parse twice.
pub fn validate_draft(draft: &ReviewDraft) -> Result<u8, Vec<String>> {
    let mut diagnostics = Vec::new();

    if draft.name.trim().is_empty() {
        diagnostics.push("'Name' is missing or empty.".to_string());
    }

    if !message_within_limit(&draft.message) {
        diagnostics.push(format!(
            "'Message' is either missing or exceeds {MESSAGE_MAX_CHARS} characters."
        ));
    }

    let rating = parse_rating(&draft.rating);
    if rating.is_none() {
        diagnostics.push(format!(
            "'Rating' should be a number between 1 and 5 (received '{}').",
            draft.rating
        ));
    }

    match rating {
        Some(rating) if diagnostics.is_empty() => Ok(rating),
        _ => Err(diagnostics),
    }
}

/// Non-empty and at most [`MESSAGE_MAX_CHARS`] characters, counted as
/// Unicode scalar values rather than bytes.
fn message_within_limit(message: &str) -> bool {
    !message.is_empty() && message.chars().count() <= MESSAGE_MAX_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(handle: &str, name: &str, message: &str, rating: &str) -> CsvRow {
        CsvRow {
            handle: handle.to_string(),
            name: name.to_string(),
            message: message.to_string(),
            rating: rating.to_string(),
        }
    }

    #[test]
    fn clean_row_has_no_diagnostics() {
        let row = make_row("red-shoe", "Alice", "Great shoe", "5");
        assert!(validate_row(&row, 2).is_empty());
    }

    #[test]
    fn invalid_handle_diagnostic_text() {
        let row = make_row("Red Shoe", "Alice", "Great", "5");
        let diagnostics = validate_row(&row, 2);
        assert_eq!(
            diagnostics,
            vec![
                "Row 2: Invalid 'Handle' (should be dash-separated, received 'Red Shoe')."
                    .to_string()
            ]
        );
    }

    #[test]
    fn empty_name_diagnostic_text() {
        let row = make_row("red-shoe", "   ", "Great", "5");
        let diagnostics = validate_row(&row, 4);
        assert_eq!(
            diagnostics,
            vec!["Row 4: 'Name' is missing or empty.".to_string()]
        );
    }

    #[test]
    fn empty_message_and_long_message_share_a_diagnostic() {
        let empty = make_row("red-shoe", "Alice", "", "5");
        let long = make_row("red-shoe", "Alice", &"a".repeat(201), "5");
        let expected =
            vec!["Row 2: 'Message' is either missing or exceeds 200 characters.".to_string()];
        assert_eq!(validate_row(&empty, 2), expected);
        assert_eq!(validate_row(&long, 2), expected);
    }

    #[test]
    fn message_limit_counts_characters_not_bytes() {
        // 200 two-byte characters stay within the limit.
        let row = make_row("red-shoe", "Alice", &"é".repeat(200), "5");
        assert!(validate_row(&row, 2).is_empty());
        let over = make_row("red-shoe", "Alice", &"é".repeat(201), "5");
        assert_eq!(validate_row(&over, 2).len(), 1);
    }

    #[test]
    fn rating_diagnostic_echoes_raw_value() {
        let row = make_row("red-shoe", "Alice", "Great", "ten");
        let diagnostics = validate_row(&row, 3);
        assert_eq!(
            diagnostics,
            vec![
                "Row 3: 'Rating' should be a number between 1 and 5 (received 'ten').".to_string()
            ]
        );
    }

    #[test]
    fn all_rules_run_even_when_first_fails() {
        let row = make_row("BAD HANDLE", "", "", "9");
        let diagnostics = validate_row(&row, 2);
        assert_eq!(diagnostics.len(), 4);
        assert!(diagnostics[0].contains("'Handle'"));
        assert!(diagnostics[1].contains("'Name'"));
        assert!(diagnostics[2].contains("'Message'"));
        assert!(diagnostics[3].contains("'Rating'"));
    }

    #[test]
    fn fractional_rating_truncates_to_valid() {
        let row = make_row("red-shoe", "Alice", "Great", "3.9");
        assert!(validate_row(&row, 2).is_empty());
    }

    #[test]
    fn draft_valid_returns_parsed_rating() {
        let draft = ReviewDraft {
            name: "Alice".to_string(),
            message: "Great shoe".to_string(),
            rating: "4".to_string(),
        };
        assert_eq!(validate_draft(&draft), Ok(4));
    }

    #[test]
    fn draft_diagnostics_have_no_row_prefix() {
        let draft = ReviewDraft {
            name: String::new(),
            message: String::new(),
            rating: "zero".to_string(),
        };
        let diagnostics = validate_draft(&draft).unwrap_err();
        assert_eq!(
            diagnostics,
            vec![
                "'Name' is missing or empty.".to_string(),
                "'Message' is either missing or exceeds 200 characters.".to_string(),
                "'Rating' should be a number between 1 and 5 (received 'zero').".to_string(),
            ]
        );
    }

    #[test]
    fn draft_with_valid_rating_but_bad_name_still_fails() {
        let draft = ReviewDraft {
            name: " ".to_string(),
            message: "Fine".to_string(),
            rating: "5".to_string(),
        };
        let diagnostics = validate_draft(&draft).unwrap_err();
        assert_eq!(diagnostics, vec!["'Name' is missing or empty.".to_string()]);
    }
}
