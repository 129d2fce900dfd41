//! One-shot training pipeline.
//!
//! Loads the turbine telemetry CSV, fits a random forest, reports
//! held-out metrics, writes the diagnostic plot and the model artifact.

use anyhow::{Context, Result};
use tracing::info;

use wind_power_predictor::config::Config;
use wind_power_predictor::dataset;
use wind_power_predictor::ml::{
    metrics::regression_metrics, plot::scatter_plot, FeatureVector, PowerForest,
};
use wind_power_predictor::telemetry::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?.trainer;

    info!(path = %cfg.dataset_path, "loading dataset");
    let readings = dataset::load_readings(&cfg.dataset_path)?;
    info!(rows = readings.len(), "dataset loaded");

    let (train, test) = dataset::train_test_split(&readings, cfg.test_ratio, cfg.seed)?;
    info!(train = train.len(), test = test.len(), "dataset split");

    let (x_train, y_train) = dataset::to_xy(&train);
    let (x_test, y_test) = dataset::to_xy(&test);

    let params = PowerForest::parameters(cfg.n_trees, cfg.seed);
    info!(n_trees = cfg.n_trees, seed = cfg.seed, "training random forest");
    let mut forest = PowerForest::train(&x_train, &y_train, params, dataset::feature_names())?;

    let mut predictions = Vec::with_capacity(x_test.len());
    for row in &x_test {
        let features = FeatureVector::new(row.clone(), dataset::feature_names())?;
        predictions.push(forest.predict(&features)?.value);
    }

    let metrics = regression_metrics(&predictions, &y_test)?;
    info!(
        r2 = metrics.r2,
        rmse = metrics.rmse,
        mae = metrics.mae,
        "held-out evaluation"
    );
    println!("R2 Score: {}", metrics.r2);
    println!("RMSE: {}", metrics.rmse);

    scatter_plot(&y_test, &predictions, &cfg.plot_path)
        .with_context(|| format!("Failed to write diagnostic plot to {}", cfg.plot_path))?;
    info!(path = %cfg.plot_path, "diagnostic plot written");

    forest.save(&cfg.artifact_path)?;
    info!(path = %cfg.artifact_path, "model artifact written");

    Ok(())
}
