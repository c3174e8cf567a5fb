//! Import command handlers for the CLI.
//!
//! `validate` parses a review CSV and prints the grouped preview without
//! touching the shop; `import` runs the same validation and then commits
//! every handle group through the Admin API.

use std::fmt::Write;
use std::path::Path;

use revdock_import::{
    parse_reviews_csv, upload_reviews, ImportOutcome, ParsedProduct, RowGroups, UploadOutcome,
};

fn read_csv(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", file.display()))
}

/// Parse and validate a CSV file, printing the import preview.
///
/// Diagnostics go to stderr, one per line, in row order.
///
/// # Errors
///
/// Returns an error when the file cannot be read or the CSV fails
/// validation.
pub(crate) fn validate_file(file: &Path) -> anyhow::Result<()> {
    let body = read_csv(file)?;
    match parse_reviews_csv(&body) {
        ImportOutcome::Error { error, details } => {
            for detail in &details {
                eprintln!("{detail}");
            }
            anyhow::bail!("{error}")
        }
        ImportOutcome::Success {
            products,
            products_raw,
        } => {
            print!("{}", render_preview(&products, &products_raw));
            Ok(())
        }
    }
}

/// Validate a CSV file and commit every handle group to the shop.
///
/// Groups are appended to each product's existing reviews; a failing
/// handle is reported without stopping the others.
///
/// # Errors
///
/// Returns an error when the file cannot be read, the CSV fails
/// validation, configuration is incomplete, or any handle group fails to
/// commit.
pub(crate) async fn import_file(file: &Path, max_concurrent: Option<usize>) -> anyhow::Result<()> {
    let body = read_csv(file)?;
    let groups = match parse_reviews_csv(&body) {
        ImportOutcome::Error { error, details } => {
            for detail in &details {
                eprintln!("{detail}");
            }
            anyhow::bail!("{error}")
        }
        ImportOutcome::Success { products_raw, .. } => products_raw,
    };

    let (config, admin) = crate::connect_admin()?;
    let max_concurrent = max_concurrent.unwrap_or(config.upload_max_concurrent);
    tracing::info!(
        products = groups.len(),
        max_concurrent,
        "committing review import"
    );

    match upload_reviews(&admin, &groups, max_concurrent).await {
        UploadOutcome::Success { details } => {
            for detail in &details {
                println!("{detail}");
            }
            Ok(())
        }
        UploadOutcome::Error { error, details } => {
            for detail in &details {
                eprintln!("{detail}");
            }
            anyhow::bail!("{error}")
        }
    }
}

/// Render the grouped preview table: one line per product handle with its
/// row count and first-row summary, then a totals line.
fn render_preview(products: &[ParsedProduct], groups: &RowGroups) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<28}{:<7}{:<18}{:<8}MESSAGE",
        "HANDLE", "ROWS", "NAME", "RATING"
    );
    for product in products {
        let rows = groups.get(&product.handle).map_or(0, Vec::len);
        let message = if product.message.chars().count() > 50 {
            format!("{}...", product.message.chars().take(50).collect::<String>())
        } else {
            product.message.clone()
        };
        let _ = writeln!(
            out,
            "{:<28}{:<7}{:<18}{:<8}{}",
            product.handle, rows, product.name, product.rating, message
        );
    }
    let total_rows: usize = groups.values().map(Vec::len).sum();
    let _ = writeln!(out, "{} products, {total_rows} rows valid", products.len());
    out
}
