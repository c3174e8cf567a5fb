//! CSV import endpoints: validation preview and commit.
//!
//! Both endpoints answer with the legacy tagged envelope the dashboard
//! consumes, discriminated by `status`; only a wrong upload media type is
//! rejected at the HTTP level, before any parsing.

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use revdock_import::{parse_reviews_csv, upload_reviews, ImportOutcome};

use super::AppState;

/// POST /api/v1/import/validate — parse and validate without committing.
pub(super) async fn validate_csv(headers: HeaderMap, body: String) -> Response {
    if !is_csv_content_type(&headers) {
        return invalid_file_type();
    }

    Json(parse_reviews_csv(&body)).into_response()
}

/// POST /api/v1/import/commit — parse, validate, and commit to the store.
pub(super) async fn commit_csv(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    if !is_csv_content_type(&headers) {
        return invalid_file_type();
    }

    match parse_reviews_csv(&body) {
        outcome @ ImportOutcome::Error { .. } => Json(outcome).into_response(),
        ImportOutcome::Success { products_raw, .. } => {
            let outcome = upload_reviews(
                state.admin.as_ref(),
                &products_raw,
                state.config.upload_max_concurrent,
            )
            .await;
            Json(outcome).into_response()
        }
    }
}

/// The upload must arrive as `text/csv`; media-type parameters are fine.
fn is_csv_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::trim)
        .is_some_and(|essence| essence.eq_ignore_ascii_case("text/csv"))
}

fn invalid_file_type() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "error": "Invalid file type." })),
    )
        .into_response()
}
