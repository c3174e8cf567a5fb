//! Single-review submission and removal for one product.
//!
//! This is the storefront path: one shopper, one product, one review.
//! It shares the field rules and store seam with the bulk import so a
//! review is held to the same standard whichever way it arrives.

use revdock_core::{Review, ReviewDraft, ReviewListUpdate, ReviewStore, StoreError};
use thiserror::Error;

use crate::validate::validate_draft;

/// Why a single-review submission was not stored.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("invalid review submission: {}", .0.join("; "))]
    Invalid(Vec<String>),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates `draft` and appends it to the product's review list.
///
/// Returns the stored review, id included, so callers can echo it back.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] with one diagnostic per broken field
/// rule (nothing is fetched in that case), or [`SubmitError::Store`] when
/// the product cannot be fetched or written.
pub async fn submit_review<S: ReviewStore + ?Sized>(
    store: &S,
    handle: &str,
    draft: &ReviewDraft,
) -> Result<Review, SubmitError> {
    let rating = validate_draft(draft).map_err(SubmitError::Invalid)?;

    let product = store.product_with_reviews(handle).await?;
    let review = Review::new(draft.name.clone(), rating, draft.message.clone());

    let mut reviews = product.reviews;
    reviews.push(review.clone());

    store
        .replace_reviews(ReviewListUpdate {
            product_id: product.product_id,
            metafield_id: product.metafield_id,
            reviews,
        })
        .await?;

    tracing::info!(handle, review_id = %review.id, "stored review");
    Ok(review)
}

/// Removes the review with `review_id` from the product's list.
///
/// Returns whether a review was removed; `Ok(false)` means the list did
/// not contain the id and nothing was written.
///
/// # Errors
///
/// Returns [`StoreError`] when the product cannot be fetched or written.
pub async fn withdraw_review<S: ReviewStore + ?Sized>(
    store: &S,
    handle: &str,
    review_id: &str,
) -> Result<bool, StoreError> {
    let product = store.product_with_reviews(handle).await?;

    let before = product.reviews.len();
    let reviews: Vec<Review> = product
        .reviews
        .into_iter()
        .filter(|review| review.id != review_id)
        .collect();
    if reviews.len() == before {
        return Ok(false);
    }

    store
        .replace_reviews(ReviewListUpdate {
            product_id: product.product_id,
            metafield_id: product.metafield_id,
            reviews,
        })
        .await?;

    tracing::info!(handle, review_id, "removed review");
    Ok(true)
}
