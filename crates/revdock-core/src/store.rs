//! The seam between the review pipeline and the product platform.
//!
//! The import, export, and single-review paths all talk to the backing
//! store through [`ReviewStore`]; the Admin API client provides the real
//! implementation and tests provide in-memory ones.

use async_trait::async_trait;
use thiserror::Error;

use crate::reviews::Review;

/// Failure from the backing product store.
///
/// The pipeline reports store failures per handle as plain diagnostic
/// strings, so this error carries a display message. The missing-product
/// case keeps its identity so HTTP surfaces can answer 404 instead of
/// 500.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
    not_found: bool,
}

impl StoreError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            not_found: false,
        }
    }

    /// A lookup that failed because the product does not exist.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            not_found: true,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.not_found
    }
}

/// A product joined with the contents of its review metafield.
#[derive(Debug, Clone)]
pub struct ProductWithReviews {
    /// Platform global id of the product.
    pub product_id: String,
    pub title: String,
    pub handle: String,
    /// Id of the review metafield; absent until the first write.
    pub metafield_id: Option<String>,
    pub reviews: Vec<Review>,
}

/// A wholesale replacement of a product's review list.
#[derive(Debug, Clone)]
pub struct ReviewListUpdate {
    pub product_id: String,
    /// Existing metafield id when one exists; `None` creates the metafield.
    pub metafield_id: Option<String>,
    pub reviews: Vec<Review>,
}

#[async_trait]
pub trait ReviewStore: Send + Sync {
    /// Fetches a product and its current review list by storefront handle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when no product carries the handle or the
    /// backend call fails.
    async fn product_with_reviews(&self, handle: &str) -> Result<ProductWithReviews, StoreError>;

    /// Replaces the product's review list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend rejects the write.
    async fn replace_reviews(&self, update: ReviewListUpdate) -> Result<(), StoreError>;
}
