mod import;
mod products;
mod reviews;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use revdock_admin::{AdminClient, AdminError};
use revdock_core::{AppConfig, StoreError};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub admin: Arc<AdminClient>,
    pub config: Arc<AppConfig>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    shop_domain: String,
    admin_api_version: String,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Catalog pages default to the dashboard's table size.
pub(super) fn normalize_page_size(first: Option<u32>) -> u32 {
    first.unwrap_or(10).clamp(1, 50)
}

pub(super) fn map_admin_error(request_id: String, error: &AdminError) -> ApiError {
    match error {
        AdminError::ProductNotFound { .. } => {
            ApiError::new(request_id, "not_found", error.to_string())
        }
        _ => {
            tracing::error!(error = %error, "admin API request failed");
            ApiError::new(request_id, "internal_error", "admin API request failed")
        }
    }
}

pub(super) fn map_store_error(request_id: String, error: &StoreError) -> ApiError {
    if error.is_not_found() {
        ApiError::new(request_id, "not_found", error.to_string())
    } else {
        tracing::error!(error = %error, "store request failed");
        ApiError::new(request_id, "internal_error", "store request failed")
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/v1/import/validate", post(import::validate_csv))
        .route("/api/v1/import/commit", post(import::commit_csv))
        .route("/api/v1/products", get(products::list_products))
        .route(
            "/api/v1/products/{handle}/reviews.csv",
            get(reviews::export_csv),
        )
        .route("/api/v1/products/{handle}/reviews", post(reviews::submit))
        .route(
            "/api/v1/products/{handle}/reviews/{review_id}",
            delete(reviews::withdraw),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData {
            status: "ok",
            shop_domain: state.config.shop_domain.clone(),
            admin_api_version: state.config.admin_api_version.clone(),
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
