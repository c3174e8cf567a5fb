use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdminError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("GraphQL errors for {operation}: {messages}")]
    Graphql {
        operation: String,
        messages: String,
    },

    #[error("user errors for {operation}: {messages}")]
    UserErrors {
        operation: String,
        messages: String,
    },

    #[error("no product with handle '{handle}'")]
    ProductNotFound { handle: String },

    #[error("review metafield for product {product_id} does not hold a review list: {source}")]
    MetafieldPayload {
        product_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("serializing review list for product {product_id}: {source}")]
    EncodeReviews {
        product_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl From<AdminError> for revdock_core::StoreError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::ProductNotFound { .. } => Self::not_found(err.to_string()),
            _ => Self::new(err.to_string()),
        }
    }
}
