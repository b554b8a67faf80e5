//! # REST API for Course Assets
//!
//! `PUT /api/assets/:kind/:file_name` with the raw file as the body.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::put,
    Router,
};
use tracing::{error, info};

use crate::io::rest::mappers::AssetMapper;
use crate::AppState;
use shared::AssetKind;

/// Largest accepted upload
pub const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Create a router for asset related APIs
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/assets/:kind/:file_name", put(upload_asset))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Upload a thumbnail or course document
pub async fn upload_asset(
    State(state): State<AppState>,
    Path((kind, file_name)): Path<(AssetKind, String)>,
    body: Bytes,
) -> impl IntoResponse {
    info!("PUT /api/assets/{:?}/{} - {} bytes", kind, file_name, body.len());

    let command = AssetMapper::to_upload_command(kind, file_name, body.to_vec());
    match state.asset_service.upload_asset(command).await {
        Ok(result) => (StatusCode::OK, Json(AssetMapper::to_upload_response(result))).into_response(),
        Err(e) => {
            error!("Failed to upload asset: {}", e);
            e.into_response()
        }
    }
}
