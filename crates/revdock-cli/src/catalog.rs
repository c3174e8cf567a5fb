//! Catalog and setup command handlers for the CLI.

use std::fmt::Write;

use revdock_admin::ProductsPage;

/// List a page of products with their stored review counts.
///
/// # Errors
///
/// Returns an error when configuration is incomplete or the Admin API
/// call fails.
pub(crate) async fn list_products(first: u32, after: Option<&str>) -> anyhow::Result<()> {
    let (_config, admin) = crate::connect_admin()?;
    let page = admin.list_products(first, after).await?;
    print!("{}", render_listing(&page));
    Ok(())
}

/// Ensure the review metafield definition exists on the shop, creating it
/// when absent.
///
/// # Errors
///
/// Returns an error when configuration is incomplete or the Admin API
/// rejects the lookup or the create.
pub(crate) async fn ensure_metafield_definition() -> anyhow::Result<()> {
    let (_config, admin) = crate::connect_admin()?;
    match admin.review_metafield_definition().await? {
        Some(definition) => println!(
            "review metafield definition already present: {} (type {})",
            definition.name, definition.type_name
        ),
        None => {
            let id = admin.create_review_metafield_definition().await?;
            println!("created review metafield definition {id}");
        }
    }
    Ok(())
}

fn render_listing(page: &ProductsPage) -> String {
    let mut out = String::new();
    if page.products.is_empty() {
        let _ = writeln!(out, "no products found");
        return out;
    }
    let _ = writeln!(
        out,
        "{:<28}{:<10}{:<9}TITLE",
        "HANDLE", "STATUS", "REVIEWS"
    );
    for product in &page.products {
        let _ = writeln!(
            out,
            "{:<28}{:<10}{:<9}{}",
            product.handle, product.status, product.review_count, product.title
        );
    }
    if page.page.has_next_page {
        if let Some(cursor) = &page.page.end_cursor {
            let _ = writeln!(out, "next page: --after {cursor}");
        }
    }
    out
}
