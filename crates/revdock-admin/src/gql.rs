//! GraphQL documents sent to the Admin API.
//!
//! The namespace and key are baked into the documents; the exported
//! constants exist for the code paths that build metafield inputs by
//! hand, and a test keeps the two in sync.

/// Metafield namespace owning the review list.
pub const REVIEWS_NAMESPACE: &str = "revdock_reviews";

/// Metafield key holding the review list JSON.
pub const REVIEWS_KEY: &str = "product_reviews";

pub(crate) const PRODUCT_BY_HANDLE_QUERY: &str = r#"
query getProduct($handle: String!) {
  productByHandle(handle: $handle) {
    id
    title
    handle
    metafield(namespace: "revdock_reviews", key: "product_reviews") {
      id
      key
      namespace
      value
    }
  }
}"#;

pub(crate) const PRODUCT_UPDATE_MUTATION: &str = r#"
mutation updateProduct($input: ProductInput!) {
  productUpdate(input: $input) {
    product {
      id
    }
    userErrors {
      field
      message
    }
  }
}"#;

pub(crate) const PRODUCTS_PAGE_QUERY: &str = r#"
query getProducts($numProducts: Int!, $cursor: String) {
  products(first: $numProducts, after: $cursor) {
    edges {
      node {
        id
        title
        status
        handle
        metafield(namespace: "revdock_reviews", key: "product_reviews") {
          id
          value
        }
      }
    }
    pageInfo {
      startCursor
      endCursor
      hasNextPage
      hasPreviousPage
    }
  }
}"#;

pub(crate) const METAFIELD_DEFINITION_QUERY: &str = r#"
query reviewMetafieldDefinition {
  metafieldDefinitions(namespace: "revdock_reviews", ownerType: PRODUCT, first: 1) {
    edges {
      node {
        name
        type {
          name
        }
      }
    }
  }
}"#;

pub(crate) const METAFIELD_DEFINITION_CREATE_MUTATION: &str = r#"
mutation createReviewMetafieldDefinition {
  metafieldDefinitionCreate(
    definition: {namespace: "revdock_reviews", key: "product_reviews", name: "Product Reviews", ownerType: PRODUCT, type: "json"}
  ) {
    createdDefinition {
      id
    }
    userErrors {
      field
      message
    }
  }
}"#;
