use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::consultant::{InlineImage, StyleAdvice, StylePreset, STYLE_PRESETS};
use crate::state::AppState;

// GET /api/consultant/status
#[derive(Serialize)]
pub struct ConsultantStatus {
    configured: bool,
    provider: Option<String>,
}

pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ConsultantStatus> {
    let configured = state.consultant.is_some();
    Json(ConsultantStatus {
        configured,
        provider: configured.then(|| state.config.consultant_provider.clone()),
    })
}

// GET /api/consultant/presets
pub async fn list_presets() -> Json<&'static [StylePreset]> {
    Json(STYLE_PRESETS)
}

// POST /api/consultant/advise
#[derive(Deserialize)]
pub struct AdviseRequest {
    #[serde(default)]
    pub prompt: String,
    #[serde(default)]
    pub image: Option<InlineImage>,
}

pub async fn advise(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AdviseRequest>,
) -> Result<Json<StyleAdvice>, AppError> {
    let consultant = state
        .consultant
        .as_deref()
        .ok_or(AppError::ConsultantUnavailable)?;

    if body.image.is_none() && body.prompt.trim().is_empty() {
        return Err(AppError::Invalid(
            "an image or a prompt is required".to_string(),
        ));
    }

    let advice = consultant
        .generate_advice(body.image.as_ref(), &body.prompt)
        .await?;
    Ok(Json(advice))
}

// POST /api/consultant/simulate
#[derive(Deserialize)]
pub struct SimulateRequest {
    pub image: InlineImage,
    pub style: String,
}

#[derive(Serialize)]
pub struct SimulateResponse {
    pub image: InlineImage,
}

pub async fn simulate(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, AppError> {
    let consultant = state
        .consultant
        .as_deref()
        .ok_or(AppError::ConsultantUnavailable)?;

    if body.style.trim().is_empty() {
        return Err(AppError::Invalid("a style name is required".to_string()));
    }

    let image = consultant
        .generate_styled_image(&body.image, &body.style)
        .await?;
    Ok(Json(SimulateResponse { image }))
}
