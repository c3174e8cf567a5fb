//! Export command handler for the CLI.

use std::path::Path;

use revdock_import::reviews_to_csv;

/// Download a product's reviews and write them as CSV.
///
/// The file form writes the exact bytes the dashboard download serves;
/// the stdout form appends a trailing newline for the terminal.
///
/// # Errors
///
/// Returns an error when configuration is incomplete, the product does
/// not exist, or the output file cannot be written.
pub(crate) async fn export_reviews(handle: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let (_config, admin) = crate::connect_admin()?;
    let product = admin.product_by_handle(handle).await?;
    let csv = reviews_to_csv(&product.reviews);

    match output {
        Some(path) => {
            std::fs::write(path, &csv)
                .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", path.display()))?;
            println!(
                "wrote {} reviews for '{handle}' to {}",
                product.reviews.len(),
                path.display()
            );
        }
        None => println!("{csv}"),
    }
    Ok(())
}
