//! Product catalog listing with per-product review counts.

use axum::{
    extract::{Query, State},
    Extension, Json,
};
use revdock_admin::ProductsPage;
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{map_admin_error, normalize_page_size, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct ProductsQuery {
    pub first: Option<u32>,
    pub after: Option<String>,
}

/// GET /api/v1/products — one page of the catalog, paginated forward with
/// `first` and `after` cursors.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<ProductsQuery>,
) -> Result<Json<ApiResponse<ProductsPage>>, ApiError> {
    let first = normalize_page_size(query.first);
    let page = state
        .admin
        .list_products(first, query.after.as_deref())
        .await
        .map_err(|e| map_admin_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: page,
        meta: ResponseMeta::new(req_id.0),
    }))
}
