//! Regression accuracy metrics.

use super::ValidationMetrics;
use anyhow::Result;

/// Compute MAE, RMSE, MAPE and R² for a set of predictions.
pub fn regression_metrics(predictions: &[f64], targets: &[f64]) -> Result<ValidationMetrics> {
    if predictions.len() != targets.len() {
        anyhow::bail!(
            "Prediction and target count mismatch: {} predictions, {} targets",
            predictions.len(),
            targets.len()
        );
    }

    if predictions.is_empty() {
        anyhow::bail!("No predictions to evaluate");
    }

    let n = predictions.len() as f64;

    let mae: f64 = predictions
        .iter()
        .zip(targets.iter())
        .map(|(p, t)| (p - t).abs())
        .sum::<f64>()
        / n;

    let mse: f64 = predictions
        .iter()
        .zip(targets.iter())
        .map(|(p, t)| (p - t).powi(2))
        .sum::<f64>()
        / n;
    let rmse = mse.sqrt();

    // Targets near zero are excluded from MAPE to avoid division blowup;
    // the mean runs over the included terms only
    let mape_terms: Vec<f64> = predictions
        .iter()
        .zip(targets.iter())
        .filter(|(_, t)| t.abs() > 1e-10)
        .map(|(p, t)| ((p - t) / t).abs() * 100.0)
        .collect();
    let mape = if mape_terms.is_empty() {
        0.0
    } else {
        mape_terms.iter().sum::<f64>() / mape_terms.len() as f64
    };

    let mean_target: f64 = targets.iter().sum::<f64>() / n;
    let ss_tot: f64 = targets.iter().map(|t| (t - mean_target).powi(2)).sum();
    let ss_res: f64 = predictions
        .iter()
        .zip(targets.iter())
        .map(|(p, t)| (t - p).powi(2))
        .sum();

    let r2 = if ss_tot.abs() < 1e-10 {
        0.0
    } else {
        1.0 - (ss_res / ss_tot)
    };

    Ok(ValidationMetrics::new(mae, rmse, mape, r2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_perfect_predictions() {
        let predictions = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let targets = vec![1.1, 2.1, 2.9, 4.2, 4.8];

        let metrics = regression_metrics(&predictions, &targets).unwrap();

        assert!(metrics.mae < 0.3);
        assert!(metrics.rmse < 0.4);
        assert!(metrics.r2 > 0.9);
    }

    #[test]
    fn exact_predictions_give_r2_one() {
        let targets = vec![100.0, 200.0, 300.0];
        let metrics = regression_metrics(&targets, &targets).unwrap();

        assert_eq!(metrics.mae, 0.0);
        assert_eq!(metrics.rmse, 0.0);
        assert_eq!(metrics.r2, 1.0);
    }

    #[test]
    fn mape_averages_over_nonzero_targets_only() {
        // One target is zero and must not dilute the mean
        let predictions = vec![2.0, 1.0];
        let targets = vec![1.0, 0.0];

        let metrics = regression_metrics(&predictions, &targets).unwrap();
        assert_eq!(metrics.mape, 100.0);
    }

    #[test]
    fn mape_is_zero_when_all_targets_are_zero() {
        let metrics = regression_metrics(&[1.0, 2.0], &[0.0, 0.0]).unwrap();
        assert_eq!(metrics.mape, 0.0);
    }

    #[test]
    fn length_mismatch_is_an_error() {
        assert!(regression_metrics(&[1.0], &[1.0, 2.0]).is_err());
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(regression_metrics(&[], &[]).is_err());
    }
}
