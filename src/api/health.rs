use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use crate::app::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: chrono::DateTime<chrono::Utc>,
    checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    model: ComponentHealth,
}

/// Health status of a component
#[derive(Debug, Serialize)]
pub struct ComponentHealth {
    status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

impl ComponentHealth {
    fn healthy(detail: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            detail: Some(detail.into()),
        }
    }
}

/// GET /healthz - liveness probe
pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

/// GET /health - component health
///
/// The model is loaded at startup, so a running service always reports
/// it healthy; the detail line identifies which artifact is serving.
pub async fn health_check(State(st): State<AppState>) -> impl IntoResponse {
    let model = ComponentHealth::healthy(format!(
        "{} ({} features, trained {})",
        st.model.metadata.model_id,
        st.model.metadata.feature_names.len(),
        st.model.metadata.trained_at.format("%Y-%m-%d"),
    ));

    let response = HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        checks: HealthChecks { model },
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_health_healthy() {
        let health = ComponentHealth::healthy("power_rf_abc");
        assert_eq!(health.status, "healthy");
        assert_eq!(health.detail, Some("power_rf_abc".to_string()));
    }
}
