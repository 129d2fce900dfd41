//! Machine learning support for power prediction.
//!
//! - Offline training pipeline (random forest over turbine telemetry)
//! - Model persistence and startup loading
//! - Validation metrics and diagnostic plotting

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub mod forest;
pub mod metrics;
pub mod plot;

pub use forest::PowerForest;

/// Model metadata captured at fit time and persisted with the artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_id: String,
    pub version: String,
    pub trained_at: chrono::DateTime<chrono::Utc>,
    pub training_samples: usize,
    pub validation_metrics: ValidationMetrics,
    pub feature_names: Vec<String>,
}

/// Regression accuracy metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationMetrics {
    pub mae: f64,
    pub rmse: f64,
    pub mape: f64,
    pub r2: f64,
}

impl ValidationMetrics {
    pub fn new(mae: f64, rmse: f64, mape: f64, r2: f64) -> Self {
        Self { mae, rmse, mape, r2 }
    }
}

/// Feature vector submitted for prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureVector {
    pub features: Vec<f64>,
    pub feature_names: Vec<String>,
}

impl FeatureVector {
    pub fn new(features: Vec<f64>, feature_names: Vec<String>) -> Result<Self> {
        if features.len() != feature_names.len() {
            anyhow::bail!(
                "Feature count mismatch: {} features, {} names",
                features.len(),
                feature_names.len()
            );
        }
        Ok(Self {
            features,
            feature_names,
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// A single model prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub value: f64,
}

impl Prediction {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_vector_creation() {
        let fv = FeatureVector::new(
            vec![5.3, 420.0],
            vec!["wind_speed".to_string(), "theoretical_power".to_string()],
        )
        .unwrap();
        assert_eq!(fv.len(), 2);
        assert!(!fv.is_empty());
    }

    #[test]
    fn feature_vector_rejects_name_mismatch() {
        let result = FeatureVector::new(vec![1.0, 2.0], vec!["only_one".to_string()]);
        assert!(result.is_err());
    }
}
