//! HTTP client for the shop's Admin GraphQL endpoint.
//!
//! Wraps `reqwest` with access-token handling, the GraphQL envelope
//! checks, and typed decoding of the operations the review pipeline
//! needs. Transport-level failures, top-level GraphQL `errors`, and
//! mutation `userErrors` all surface as [`AdminError`]; nothing here is
//! retried.

use std::time::Duration;

use reqwest::{Client, Url};
use revdock_core::{AppConfig, ProductWithReviews, Review, ReviewListUpdate};
use serde::de::DeserializeOwned;

use crate::error::AdminError;
use crate::gql;
use crate::types::{
    GraphqlEnvelope, MetafieldDefinitionCreateData, MetafieldDefinitionSummary,
    MetafieldDefinitionsData, PageCursors, ProductByHandleData, ProductListing, ProductUpdateData,
    ProductsPage, ProductsPageData, UserError,
};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for the Admin GraphQL API.
///
/// Use [`AdminClient::from_config`] in binaries or
/// [`AdminClient::with_endpoint`] to point at a mock server in tests.
pub struct AdminClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl AdminClient {
    /// Creates a client for `shop_domain` (e.g. `my-shop.myshopify.com`).
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AdminError::InvalidEndpoint`] if the
    /// domain does not form a valid URL.
    pub fn new(
        shop_domain: &str,
        access_token: &str,
        api_version: &str,
        timeout_secs: u64,
    ) -> Result<Self, AdminError> {
        let endpoint = format!("https://{shop_domain}/admin/api/{api_version}/graphql.json");
        Self::with_endpoint(&endpoint, access_token, timeout_secs)
    }

    /// Creates a client from the application configuration.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`AdminClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, AdminError> {
        Self::new(
            &config.shop_domain,
            &config.admin_token,
            &config.admin_api_version,
            config.admin_request_timeout_secs,
        )
    }

    /// Creates a client with an explicit endpoint URL (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`AdminError::InvalidEndpoint`] if
    /// `endpoint` is not a valid URL.
    pub fn with_endpoint(
        endpoint: &str,
        access_token: &str,
        timeout_secs: u64,
    ) -> Result<Self, AdminError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("revdock/0.1 (review-pipeline)")
            .build()?;

        let endpoint = Url::parse(endpoint).map_err(|e| AdminError::InvalidEndpoint {
            url: endpoint.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            endpoint,
            access_token: access_token.to_owned(),
        })
    }

    /// Fetches a product and its decoded review list by storefront handle.
    ///
    /// A product without the review metafield comes back with an empty
    /// list and no metafield id; the first write then creates the
    /// metafield.
    ///
    /// # Errors
    ///
    /// - [`AdminError::ProductNotFound`] when no product carries the handle.
    /// - [`AdminError::MetafieldPayload`] when the metafield value is not
    ///   a JSON review list.
    /// - [`AdminError::Http`] / [`AdminError::Graphql`] /
    ///   [`AdminError::Deserialize`] for transport and envelope failures.
    pub async fn product_by_handle(&self, handle: &str) -> Result<ProductWithReviews, AdminError> {
        let data: ProductByHandleData = self
            .execute(
                "productByHandle",
                gql::PRODUCT_BY_HANDLE_QUERY,
                serde_json::json!({ "handle": handle }),
            )
            .await?;

        let node = data
            .product_by_handle
            .ok_or_else(|| AdminError::ProductNotFound {
                handle: handle.to_owned(),
            })?;

        let (metafield_id, reviews) = match node.metafield {
            Some(metafield) => {
                let reviews = decode_review_list(&metafield.value, &node.id)?;
                (Some(metafield.id), reviews)
            }
            None => (None, Vec::new()),
        };

        Ok(ProductWithReviews {
            product_id: node.id,
            title: node.title,
            handle: node.handle,
            metafield_id,
            reviews,
        })
    }

    /// Replaces a product's review list via `productUpdate`.
    ///
    /// With a metafield id the existing metafield is overwritten; without
    /// one the metafield is created under the review namespace and key.
    ///
    /// # Errors
    ///
    /// - [`AdminError::UserErrors`] when the mutation reports validation
    ///   failures.
    /// - [`AdminError::Http`] / [`AdminError::Graphql`] /
    ///   [`AdminError::Deserialize`] for transport and envelope failures.
    pub async fn update_product_reviews(&self, update: &ReviewListUpdate) -> Result<(), AdminError> {
        let value =
            serde_json::to_string(&update.reviews).map_err(|e| AdminError::EncodeReviews {
                product_id: update.product_id.clone(),
                source: e,
            })?;

        let metafield = match &update.metafield_id {
            Some(id) => serde_json::json!({ "id": id, "value": value }),
            None => serde_json::json!({
                "namespace": gql::REVIEWS_NAMESPACE,
                "key": gql::REVIEWS_KEY,
                "type": "json",
                "value": value,
            }),
        };

        let data: ProductUpdateData = self
            .execute(
                "productUpdate",
                gql::PRODUCT_UPDATE_MUTATION,
                serde_json::json!({
                    "input": { "id": update.product_id, "metafields": [metafield] }
                }),
            )
            .await?;

        let payload = data.product_update.ok_or_else(|| AdminError::Graphql {
            operation: "productUpdate".to_string(),
            messages: "response carried no mutation payload".to_string(),
        })?;
        Self::check_user_errors("productUpdate", &payload.user_errors)?;

        tracing::debug!(
            product_id = %update.product_id,
            reviews = update.reviews.len(),
            "replaced review list"
        );
        Ok(())
    }

    /// Fetches one page of the product catalog with per-product review
    /// counts, paginating forward from `after`.
    ///
    /// # Errors
    ///
    /// - [`AdminError::MetafieldPayload`] when a product's metafield value
    ///   is not a JSON review list.
    /// - [`AdminError::Http`] / [`AdminError::Graphql`] /
    ///   [`AdminError::Deserialize`] for transport and envelope failures.
    pub async fn list_products(
        &self,
        first: u32,
        after: Option<&str>,
    ) -> Result<ProductsPage, AdminError> {
        let data: ProductsPageData = self
            .execute(
                "getProducts",
                gql::PRODUCTS_PAGE_QUERY,
                serde_json::json!({ "numProducts": first, "cursor": after }),
            )
            .await?;

        let mut products = Vec::with_capacity(data.products.edges.len());
        for edge in data.products.edges {
            let node = edge.node;
            let review_count = match &node.metafield {
                Some(metafield) => decode_review_list(&metafield.value, &node.id)?.len(),
                None => 0,
            };
            products.push(ProductListing {
                id: node.id,
                title: node.title,
                handle: node.handle,
                status: node.status,
                review_count,
            });
        }

        let info = data.products.page_info;
        Ok(ProductsPage {
            products,
            page: PageCursors {
                start_cursor: info.start_cursor,
                end_cursor: info.end_cursor,
                has_next_page: info.has_next_page,
                has_previous_page: info.has_previous_page,
            },
        })
    }

    /// Looks up the review metafield definition, if the shop has one.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] / [`AdminError::Graphql`] /
    /// [`AdminError::Deserialize`] for transport and envelope failures.
    pub async fn review_metafield_definition(
        &self,
    ) -> Result<Option<MetafieldDefinitionSummary>, AdminError> {
        let data: MetafieldDefinitionsData = self
            .execute(
                "reviewMetafieldDefinition",
                gql::METAFIELD_DEFINITION_QUERY,
                serde_json::json!({}),
            )
            .await?;

        Ok(data
            .metafield_definitions
            .edges
            .into_iter()
            .next()
            .map(|edge| MetafieldDefinitionSummary {
                name: edge.node.name,
                type_name: edge.node.type_ref.name,
            }))
    }

    /// Creates the review metafield definition and returns its id.
    ///
    /// # Errors
    ///
    /// - [`AdminError::UserErrors`] when the mutation reports validation
    ///   failures (a definition already existing, for instance).
    /// - [`AdminError::Http`] / [`AdminError::Graphql`] /
    ///   [`AdminError::Deserialize`] for transport and envelope failures.
    pub async fn create_review_metafield_definition(&self) -> Result<String, AdminError> {
        let data: MetafieldDefinitionCreateData = self
            .execute(
                "createReviewMetafieldDefinition",
                gql::METAFIELD_DEFINITION_CREATE_MUTATION,
                serde_json::json!({}),
            )
            .await?;

        let payload = data
            .metafield_definition_create
            .ok_or_else(|| AdminError::Graphql {
                operation: "createReviewMetafieldDefinition".to_string(),
                messages: "response carried no mutation payload".to_string(),
            })?;
        Self::check_user_errors("createReviewMetafieldDefinition", &payload.user_errors)?;

        payload
            .created_definition
            .map(|definition| definition.id)
            .ok_or_else(|| AdminError::Graphql {
                operation: "createReviewMetafieldDefinition".to_string(),
                messages: "no definition was created".to_string(),
            })
    }

    /// POSTs one GraphQL operation and decodes the `data` member.
    ///
    /// # Errors
    ///
    /// Returns [`AdminError::Http`] on network failure or a non-2xx
    /// status, [`AdminError::Graphql`] when the envelope carries `errors`
    /// or no `data`, and [`AdminError::Deserialize`] when the body does
    /// not match the expected shape.
    async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, AdminError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&serde_json::json!({ "query": query, "variables": variables }))
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;

        let envelope: GraphqlEnvelope<T> =
            serde_json::from_str(&body).map_err(|e| AdminError::Deserialize {
                context: operation.to_string(),
                source: e,
            })?;

        if !envelope.errors.is_empty() {
            let messages = envelope
                .errors
                .iter()
                .map(|error| error.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AdminError::Graphql {
                operation: operation.to_string(),
                messages,
            });
        }

        envelope.data.ok_or_else(|| AdminError::Graphql {
            operation: operation.to_string(),
            messages: "response carried no data".to_string(),
        })
    }

    fn check_user_errors(
        operation: &'static str,
        user_errors: &[UserError],
    ) -> Result<(), AdminError> {
        if user_errors.is_empty() {
            return Ok(());
        }
        let messages = user_errors
            .iter()
            .map(|error| error.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        Err(AdminError::UserErrors {
            operation: operation.to_string(),
            messages,
        })
    }
}

/// Decodes a metafield value into the review list it should hold.
fn decode_review_list(value: &str, product_id: &str) -> Result<Vec<Review>, AdminError> {
    serde_json::from_str(value).map_err(|e| AdminError::MetafieldPayload {
        product_id: product_id.to_owned(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_builds_the_versioned_graphql_endpoint() {
        let client = AdminClient::new("test-shop.myshopify.com", "shpat_x", "2025-07", 30)
            .expect("client construction should not fail");
        assert_eq!(
            client.endpoint.as_str(),
            "https://test-shop.myshopify.com/admin/api/2025-07/graphql.json"
        );
    }

    #[test]
    fn with_endpoint_rejects_invalid_urls() {
        let result = AdminClient::with_endpoint("not a url", "token", 30);
        assert!(matches!(result, Err(AdminError::InvalidEndpoint { .. })));
    }

    #[test]
    fn decode_review_list_accepts_string_ratings() {
        let reviews =
            decode_review_list(r#"[{"id":"r1","name":"A","rating":"5","message":"m"}]"#, "p1")
                .unwrap();
        assert_eq!(reviews[0].rating, 5);
    }

    #[test]
    fn decode_review_list_rejects_non_list_payloads() {
        let err = decode_review_list(r#"{"not":"a list"}"#, "p1").unwrap_err();
        assert!(matches!(err, AdminError::MetafieldPayload { .. }));
    }
}
