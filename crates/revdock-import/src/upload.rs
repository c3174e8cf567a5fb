//! Commit of grouped review rows to the product store.
//!
//! Each handle group is fetched, appended to, and written back as one
//! unit. Groups never abort the run for each other: a failed handle
//! becomes a diagnostic and the remaining handles still commit.

use futures::stream::{self, StreamExt};
use revdock_core::{parse_rating, Review, ReviewListUpdate, ReviewStore, StoreError};

use crate::types::{CsvRow, RowGroups, UploadOutcome};

/// Outcome of one handle group's commit: the success detail or the
/// per-handle failure diagnostic.
enum GroupOutcome {
    Imported(String),
    Failed(String),
}

/// Builds the reviews a group of validated rows will add: one review per
/// row, fresh id each, in row order.
///
/// Rows whose rating does not parse are skipped; validated input never
/// contains such rows.
#[must_use]
pub fn build_reviews(rows: &[CsvRow]) -> Vec<Review> {
    rows.iter()
        .filter_map(|row| {
            parse_rating(&row.rating)
                .map(|rating| Review::new(row.name.clone(), rating, row.message.clone()))
        })
        .collect()
}

/// Commits every handle group to `store`, appending each group's reviews
/// to the product's existing list.
///
/// At most `max_concurrent` groups are in flight at once (1 reproduces
/// strictly sequential processing) and results are collected in group
/// order, so the returned details never reorder. A failing handle
/// contributes `Error updating product with handle '…'` without stopping
/// the others. Any failure makes the outcome the error variant listing
/// only the failures; otherwise the success variant lists every import.
/// Empty input short-circuits to `No products to upload.` before any
/// store call.
pub async fn upload_reviews<S: ReviewStore + ?Sized>(
    store: &S,
    groups: &RowGroups,
    max_concurrent: usize,
) -> UploadOutcome {
    if groups.is_empty() {
        return UploadOutcome::upload_errors(vec!["No products to upload.".to_string()]);
    }

    let max_concurrent = max_concurrent.max(1);

    let commits: Vec<_> = groups
        .iter()
        .map(|(handle, rows)| commit_group(store, handle, rows))
        .collect();
    let outcomes: Vec<GroupOutcome> = stream::iter(commits)
        .buffered(max_concurrent)
        .collect()
        .await;

    let mut failures = Vec::new();
    let mut imported = Vec::new();
    for outcome in outcomes {
        match outcome {
            GroupOutcome::Imported(detail) => imported.push(detail),
            GroupOutcome::Failed(diagnostic) => failures.push(diagnostic),
        }
    }

    if failures.is_empty() {
        UploadOutcome::Success { details: imported }
    } else {
        UploadOutcome::upload_errors(failures)
    }
}

async fn commit_group<S: ReviewStore + ?Sized>(
    store: &S,
    handle: &str,
    rows: &[CsvRow],
) -> GroupOutcome {
    match try_commit_group(store, handle, rows).await {
        Ok(added) => {
            tracing::info!(handle, added, "imported reviews");
            GroupOutcome::Imported(format!("Successfully imported reviews for '{handle}'"))
        }
        Err(error) => {
            tracing::warn!(handle, %error, "review import failed");
            GroupOutcome::Failed(format!("Error updating product with handle '{handle}'"))
        }
    }
}

async fn try_commit_group<S: ReviewStore + ?Sized>(
    store: &S,
    handle: &str,
    rows: &[CsvRow],
) -> Result<usize, StoreError> {
    let product = store.product_with_reviews(handle).await?;
    let additions = build_reviews(rows);
    let added = additions.len();

    let mut reviews = product.reviews;
    reviews.extend(additions);

    store
        .replace_reviews(ReviewListUpdate {
            product_id: product.product_id,
            metafield_id: product.metafield_id,
            reviews,
        })
        .await?;

    Ok(added)
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
