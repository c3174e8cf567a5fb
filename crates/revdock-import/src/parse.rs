//! Parsing and validation of uploaded review CSVs.
//!
//! The grammar is deliberately naive and matches what the dashboard has
//! always accepted: lines split on `\n`, cells split on `,`, no quoting
//! or escaping on the way in. Callers send `\n`-delimited text; a `\r`
//! left over from a CRLF file survives into the last cell and usually
//! fails validation there. Every line after the header counts as a data
//! row, so a trailing newline produces one final empty row that reports
//! all four field diagnostics.

use crate::headers::HeaderIndex;
use crate::types::{ImportOutcome, ParsedProduct, RowGroups};
use crate::validate::validate_row;

/// Parses, validates, and groups an uploaded CSV document.
///
/// When the header line is incomplete the outcome carries the single
/// missing-headers diagnostic and no row is examined. Otherwise every row
/// is validated; any diagnostic at all makes the whole upload the error
/// outcome, in row-then-field encounter order. A clean document yields
/// the per-handle grouping plus its first-row summaries.
#[must_use]
pub fn parse_reviews_csv(text: &str) -> ImportOutcome {
    let (header_line, body) = match text.split_once('\n') {
        Some((header, body)) => (header, Some(body)),
        None => (text, None),
    };

    let index = match HeaderIndex::from_header_line(header_line) {
        Ok(index) => index,
        Err(diagnostic) => return ImportOutcome::validation_error(vec![diagnostic]),
    };

    let mut diagnostics = Vec::new();
    let mut groups = RowGroups::new();

    if let Some(body) = body {
        for (offset, line) in body.split('\n').enumerate() {
            // Header is line 1; the first data row is line 2.
            let line_number = offset + 2;
            let row = index.read_row(line);
            let row_diagnostics = validate_row(&row, line_number);
            if row_diagnostics.is_empty() {
                groups.entry(row.handle.clone()).or_default().push(row);
            } else {
                diagnostics.extend(row_diagnostics);
            }
        }
    }

    if !diagnostics.is_empty() {
        return ImportOutcome::validation_error(diagnostics);
    }

    ImportOutcome::Success {
        products: summarize_groups(&groups),
        products_raw: groups,
    }
}

/// First-row-wins summaries, one per handle, in group order.
///
/// The summary reflects only the first row of each group; the commit path
/// uses every row. Mixed names or ratings under one handle are legal
/// input and are not reconciled here.
#[must_use]
pub fn summarize_groups(groups: &RowGroups) -> Vec<ParsedProduct> {
    groups
        .iter()
        .filter_map(|(handle, rows)| {
            rows.first().map(|first| ParsedProduct {
                handle: handle.clone(),
                name: first.name.clone(),
                message: first.message.clone(),
                rating: first.rating.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
