//! Random forest power prediction model.
//!
//! Wraps SmartCore's `RandomForestRegressor` with training, persistence
//! and prediction over turbine feature vectors.

use super::{FeatureVector, ModelMetadata, Prediction};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;

/// Fitted random forest regressor plus its metadata.
///
/// The inner SmartCore model is carried as serialized bytes across
/// persistence boundaries and rehydrated on load.
#[derive(Debug, Serialize, Deserialize)]
pub struct PowerForest {
    pub metadata: ModelMetadata,
    #[serde(skip)]
    model: Option<RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>>,
    model_bytes: Option<Vec<u8>>,
    pub n_trees: usize,
    pub seed: u64,
}

impl PowerForest {
    /// Training parameters: the production pipeline uses 100 trees with
    /// a fixed seed and no depth cap.
    pub fn parameters(n_trees: usize, seed: u64) -> RandomForestRegressorParameters {
        RandomForestRegressorParameters {
            max_depth: None,
            min_samples_leaf: 1,
            min_samples_split: 2,
            n_trees,
            m: None,
            keep_samples: false,
            seed,
        }
    }

    /// Fit a random forest on the given feature rows and targets.
    pub fn train(
        x: &[Vec<f64>],
        y: &[f64],
        params: RandomForestRegressorParameters,
        feature_names: Vec<String>,
    ) -> Result<Self> {
        if x.is_empty() || y.is_empty() {
            anyhow::bail!("Cannot train on empty dataset");
        }

        if x.len() != y.len() {
            anyhow::bail!(
                "Feature and target count mismatch: {} rows, {} targets",
                x.len(),
                y.len()
            );
        }

        let n_trees = params.n_trees;
        let seed = params.seed;

        let n_samples = x.len();
        let n_features = x[0].len();

        let mut flat_data = Vec::with_capacity(n_samples * n_features);
        for row in x {
            if row.len() != n_features {
                anyhow::bail!("All feature rows must have the same length");
            }
            flat_data.extend_from_slice(row);
        }

        let x_matrix = DenseMatrix::new(n_samples, n_features, flat_data, false);
        let y_vec = y.to_vec();

        let model = RandomForestRegressor::fit(&x_matrix, &y_vec, params)
            .map_err(|e| anyhow::anyhow!("Random forest training failed: {:?}", e))?;

        // Training-set metrics; callers evaluate held-out data separately
        let predictions = model
            .predict(&x_matrix)
            .map_err(|e| anyhow::anyhow!("Prediction failed during validation: {:?}", e))?;

        let metrics = super::metrics::regression_metrics(&predictions, y)?;

        let metadata = ModelMetadata {
            model_id: format!("power_rf_{}", uuid::Uuid::new_v4()),
            version: env!("CARGO_PKG_VERSION").to_string(),
            trained_at: chrono::Utc::now(),
            training_samples: n_samples,
            validation_metrics: metrics,
            feature_names,
        };

        Ok(Self {
            metadata,
            model: Some(model),
            model_bytes: None,
            n_trees,
            seed,
        })
    }

    /// Predict active power (kW) for a feature vector.
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Model not loaded"))?;

        let expected = self.metadata.feature_names.len();
        if features.len() != expected {
            anyhow::bail!(
                "Feature count mismatch: expected {}, got {}",
                expected,
                features.len()
            );
        }

        let x = DenseMatrix::new(1, features.len(), features.features.clone(), false);

        let predictions = model
            .predict(&x)
            .map_err(|e| anyhow::anyhow!("Prediction failed: {:?}", e))?;

        if predictions.is_empty() {
            anyhow::bail!("Model returned empty predictions");
        }

        let value = predictions[0];

        if !value.is_finite() {
            anyhow::bail!("Invalid prediction: non-finite value");
        }

        Ok(Prediction::new(value))
    }

    /// Serialize the model to a file.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.prepare_for_serialization()?;

        let bytes = bincode::serialize(self)
            .context("Failed to serialize model artifact")?;
        std::fs::write(path, bytes)
            .with_context(|| format!("Failed to write model artifact to {}", path.display()))?;
        Ok(())
    }

    /// Load a serialized model from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read model artifact from {}", path.display()))?;

        let mut forest: PowerForest = bincode::deserialize(&bytes)
            .context("Failed to deserialize model artifact")?;
        forest.restore_from_serialization()?;
        Ok(forest)
    }

    fn prepare_for_serialization(&mut self) -> Result<()> {
        if let Some(model) = &self.model {
            let bytes = bincode::serialize(model)
                .map_err(|e| anyhow::anyhow!("Failed to serialize inner model: {}", e))?;
            self.model_bytes = Some(bytes);
        }
        Ok(())
    }

    fn restore_from_serialization(&mut self) -> Result<()> {
        let bytes = self
            .model_bytes
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("Model artifact carries no model bytes"))?;
        let model: RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>> =
            bincode::deserialize(bytes)
                .map_err(|e| anyhow::anyhow!("Failed to deserialize inner model: {}", e))?;
        self.model = Some(model);
        Ok(())
    }
}
