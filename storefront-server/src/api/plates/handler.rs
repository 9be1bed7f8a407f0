//! Plate API Handlers

use axum::{Json, extract::State};
use plate_engine::pricing::to_f64;
use plate_engine::registration::{normalize, validate as validate_reg};
use plate_engine::{PlateView, PriceBreakdown, render_plates, submit_with};
use serde::{Deserialize, Serialize};
use shared::catalog::{FRONT_SIZES, REAR_SIZES};
use shared::models::{CartItem, PlateConfig, PlateSize};

use crate::core::ServerState;
use crate::utils::{AppResult, ErrorCode};

#[derive(Debug, Serialize)]
pub struct SizesResponse {
    pub front: &'static [PlateSize],
    pub rear: &'static [PlateSize],
}

pub async fn list_sizes() -> Json<SizesResponse> {
    Json(SizesResponse {
        front: FRONT_SIZES.as_slice(),
        rear: REAR_SIZES.as_slice(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    #[serde(default)]
    pub reg: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    /// Normalized registration, what the input field should now show
    pub reg: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,
}

/// Per-keystroke check: normalize, then validate
pub async fn validate(Json(payload): Json<ValidateRequest>) -> Json<ValidateResponse> {
    let reg = normalize(&payload.reg);
    let error = validate_reg(&reg).err();
    Json(ValidateResponse {
        reg,
        valid: error.is_none(),
        error: error.map(|e| e.to_string()),
        code: error.map(|e| e.code()),
    })
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub total: f64,
    pub breakdown: PriceBreakdown,
    pub plates: Vec<PlateView>,
}

/// Live price and preview for an in-progress configuration
pub async fn quote(
    State(state): State<ServerState>,
    Json(config): Json<PlateConfig>,
) -> Json<QuoteResponse> {
    let breakdown = state.prices.breakdown(&config);
    Json(QuoteResponse {
        total: to_f64(breakdown.total),
        breakdown,
        plates: render_plates(&config),
    })
}

/// Run the submission checks and return the priced cart line
pub async fn create_cart_item(
    State(state): State<ServerState>,
    Json(config): Json<PlateConfig>,
) -> AppResult<Json<CartItem>> {
    let item = submit_with(&config, &state.prices)?;
    Ok(Json(item))
}
