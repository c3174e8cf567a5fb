//! [`ReviewStore`] implementation backed by the Admin GraphQL API.

use async_trait::async_trait;
use revdock_core::{ProductWithReviews, ReviewListUpdate, ReviewStore, StoreError};

use crate::client::AdminClient;

#[async_trait]
impl ReviewStore for AdminClient {
    async fn product_with_reviews(&self, handle: &str) -> Result<ProductWithReviews, StoreError> {
        self.product_by_handle(handle)
            .await
            .map_err(StoreError::from)
    }

    async fn replace_reviews(&self, update: ReviewListUpdate) -> Result<(), StoreError> {
        self.update_product_reviews(&update)
            .await
            .map_err(StoreError::from)
    }
}
