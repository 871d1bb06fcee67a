use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use assetmarket_core::{
    snapshot::AssetSnapshot,
    verification::{VerificationConfig, VerificationReport},
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Run the verification rules against a listing snapshot.
#[utoipa::path(
    post,
    path = "/api/v1/verification",
    responses(
        (status = 200, description = "Severity-sorted verification flags"),
        (status = 400, description = "Snapshot failed validation")
    )
)]
pub async fn run_listing_verification(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<AssetSnapshot>,
) -> ApiResult<Json<VerificationReport>> {
    snapshot.validate()?;
    let report = state.verification_service.run_checks(&snapshot);
    tracing::debug!(
        asset_type = snapshot.asset_type.as_str(),
        flags = report.flags.len(),
        "Verification completed"
    );
    Ok(Json(report))
}

/// Get the active verification thresholds.
#[utoipa::path(
    get,
    path = "/api/v1/verification/config",
    responses((status = 200, description = "Verification thresholds"))
)]
pub async fn get_verification_config(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<VerificationConfig>> {
    Ok(Json(state.verification_service.config().clone()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/verification", post(run_listing_verification))
        .route("/verification/config", get(get_verification_config))
}
