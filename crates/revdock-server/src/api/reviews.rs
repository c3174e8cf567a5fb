//! Per-product review endpoints: CSV export, submission, removal.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use revdock_core::{Review, ReviewDraft};
use revdock_import::{reviews_to_csv, submit_review, withdraw_review, SubmitError};

use crate::middleware::RequestId;

use super::{map_admin_error, map_store_error, ApiError, ApiResponse, AppState, ResponseMeta};

/// GET /api/v1/products/{handle}/reviews.csv — download a product's
/// reviews as a CSV attachment.
pub(super) async fn export_csv(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(handle): Path<String>,
) -> Result<Response, ApiError> {
    let product = state
        .admin
        .product_by_handle(&handle)
        .await
        .map_err(|e| map_admin_error(req_id.0, &e))?;

    let body = reviews_to_csv(&product.reviews);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=reviews.csv",
            ),
        ],
        body,
    )
        .into_response())
}

/// POST /api/v1/products/{handle}/reviews — store one new review.
pub(super) async fn submit(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(handle): Path<String>,
    Json(draft): Json<ReviewDraft>,
) -> Result<(StatusCode, Json<ApiResponse<Review>>), ApiError> {
    match submit_review(state.admin.as_ref(), &handle, &draft).await {
        Ok(review) => Ok((
            StatusCode::CREATED,
            Json(ApiResponse {
                data: review,
                meta: ResponseMeta::new(req_id.0),
            }),
        )),
        Err(SubmitError::Invalid(details)) => Err(ApiError::new(
            req_id.0,
            "validation_error",
            details.join("; "),
        )),
        Err(SubmitError::Store(error)) => Err(map_store_error(req_id.0, &error)),
    }
}

/// DELETE /api/v1/products/{handle}/reviews/{review_id} — remove one
/// review from the product's list.
pub(super) async fn withdraw(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((handle, review_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    match withdraw_review(state.admin.as_ref(), &handle, &review_id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("no review with id '{review_id}' on product '{handle}'"),
        )),
        Err(error) => Err(map_store_error(req_id.0, &error)),
    }
}
