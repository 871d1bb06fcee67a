use std::sync::Arc;

use crate::{error::ApiResult, main_lib::AppState};
use assetmarket_core::{
    snapshot::AssetSnapshot,
    valuation::{ValuationResult, ValuationRules},
};
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

/// Compute the valuation range for a listing snapshot.
#[utoipa::path(
    post,
    path = "/api/v1/valuation",
    responses(
        (status = 200, description = "Valuation range"),
        (status = 400, description = "Snapshot failed validation")
    )
)]
pub async fn calculate_listing_valuation(
    State(state): State<Arc<AppState>>,
    Json(snapshot): Json<AssetSnapshot>,
) -> ApiResult<Json<ValuationResult>> {
    snapshot.validate()?;
    let result = state.valuation_service.calculate_valuation(&snapshot);
    tracing::debug!(
        asset_type = snapshot.asset_type.as_str(),
        basis = ?result.basis,
        "Valuation computed"
    );
    Ok(Json(result))
}

/// Get the active valuation rule table.
#[utoipa::path(
    get,
    path = "/api/v1/valuation/rules",
    responses((status = 200, description = "Valuation rules keyed by asset type"))
)]
pub async fn get_valuation_rules(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ValuationRules>> {
    Ok(Json(state.valuation_service.rules().clone()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/valuation", post(calculate_listing_valuation))
        .route("/valuation/rules", get(get_valuation_rules))
}
