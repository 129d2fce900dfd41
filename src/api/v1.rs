//! JSON prediction API, for clients that do not want the HTML pages.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::app::AppState;
use crate::ml::{FeatureVector, ModelMetadata};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict))
        .route("/model", get(model_info))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction_kw: f64,
    pub model_id: String,
}

/// POST /api/v1/predict
pub async fn predict(
    State(st): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let expected = st.model.metadata.feature_names.len();
    if req.features.len() != expected {
        return Err(ApiError::BadRequest(format!(
            "Expected {} features, got {}",
            expected,
            req.features.len()
        )));
    }

    if req.features.iter().any(|f| !f.is_finite()) {
        return Err(ApiError::BadRequest(
            "Features must be finite numbers".to_string(),
        ));
    }

    let features = FeatureVector::new(
        req.features,
        st.model.metadata.feature_names.clone(),
    )
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let prediction = st
        .model
        .predict(&features)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok((
        StatusCode::OK,
        Json(PredictResponse {
            prediction_kw: prediction.value,
            model_id: st.model.metadata.model_id.clone(),
        }),
    ))
}

/// GET /api/v1/model
pub async fn model_info(State(st): State<AppState>) -> Json<ModelMetadata> {
    Json(st.model.metadata.clone())
}
