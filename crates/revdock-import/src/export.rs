//! Review list serialization back to downloadable CSV.

use revdock_core::Review;

/// Serializes reviews into the dashboard's download format: a fixed
/// `Name,Rating,Message` header line, every field double-quoted, interior
/// quotes doubled, rows joined by `\n` with no trailing newline.
///
/// The quoting is one-way. The import side splits naively on commas and
/// strips nothing, so a download whose fields contain commas or quotes is
/// not generally re-importable as-is.
#[must_use]
pub fn reviews_to_csv(reviews: &[Review]) -> String {
    let header = "Name,Rating,Message\n";
    let rows = reviews
        .iter()
        .map(|review| {
            format!(
                "\"{}\",\"{}\",\"{}\"",
                escape_quotes(&review.name),
                review.rating,
                escape_quotes(&review.message)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{header}{rows}")
}

fn escape_quotes(field: &str) -> String {
    field.replace('"', "\"\"")
}
