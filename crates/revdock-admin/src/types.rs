//! Wire types for the Admin GraphQL API.
//!
//! Responses arrive in the standard GraphQL envelope; `errors` can appear
//! alongside partial `data` and any entry fails the call:
//!
//! ```json
//! {"data": {"productByHandle": {...}}, "errors": [{"message": "..."}]}
//! ```
//!
//! Only the fields the client reads are modeled; everything else in the
//! response is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlEnvelope<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

/// Shopify mutation-level validation failure.
#[derive(Debug, Deserialize)]
pub(crate) struct UserError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Edge<T> {
    pub node: T,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductByHandleData {
    #[serde(rename = "productByHandle")]
    pub product_by_handle: Option<ProductNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub metafield: Option<MetafieldNode>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetafieldNode {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductUpdateData {
    #[serde(rename = "productUpdate")]
    pub product_update: Option<ProductUpdatePayload>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductUpdatePayload {
    #[serde(rename = "userErrors", default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductsPageData {
    pub products: ProductsConnection,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductsConnection {
    pub edges: Vec<Edge<ProductPageNode>>,
    pub page_info: PageInfoNode,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProductPageNode {
    pub id: String,
    pub title: String,
    pub status: String,
    pub handle: String,
    pub metafield: Option<MetafieldNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PageInfoNode {
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MetafieldDefinitionsData {
    #[serde(rename = "metafieldDefinitions")]
    pub metafield_definitions: DefinitionsConnection,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DefinitionsConnection {
    pub edges: Vec<Edge<DefinitionNode>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DefinitionNode {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypeRef {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct MetafieldDefinitionCreateData {
    pub metafield_definition_create: Option<DefinitionCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DefinitionCreatePayload {
    pub created_definition: Option<CreatedDefinition>,
    #[serde(default)]
    pub user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedDefinition {
    pub id: String,
}

/// One row of the product catalog listing: identity plus review count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductListing {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub status: String,
    pub review_count: usize,
}

/// Cursor state for the catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageCursors {
    pub start_cursor: Option<String>,
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// A page of the product catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductsPage {
    pub products: Vec<ProductListing>,
    pub page: PageCursors,
}

/// The review metafield definition, as reported by the platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetafieldDefinitionSummary {
    pub name: String,
    pub type_name: String,
}
