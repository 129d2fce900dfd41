//! Shared application state for the predictor service.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::ml::PowerForest;
use crate::weather::WeatherClient;

/// State shared across request handlers.
///
/// The model is loaded once at startup and held read-only; prediction is
/// side-effect-free so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub model: Arc<PowerForest>,
    pub weather: Arc<WeatherClient>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let model = PowerForest::load(&cfg.model.artifact_path)
            .with_context(|| {
                format!(
                    "Failed to load model artifact '{}'. Run the trainer first.",
                    cfg.model.artifact_path
                )
            })?;

        info!(
            model_id = %model.metadata.model_id,
            trained_at = %model.metadata.trained_at,
            r2 = model.metadata.validation_metrics.r2,
            "model loaded"
        );

        let weather = WeatherClient::new(&cfg.weather);

        Ok(Self {
            cfg,
            model: Arc::new(model),
            weather: Arc::new(weather),
        })
    }

    /// Assemble state from pre-built parts, bypassing artifact loading.
    pub fn with_parts(cfg: Config, model: PowerForest, weather: WeatherClient) -> Self {
        Self {
            cfg,
            model: Arc::new(model),
            weather: Arc::new(weather),
        }
    }
}
