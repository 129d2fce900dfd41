//! Diagnostic plot for trained models.

use anyhow::Result;
use plotters::prelude::*;
use std::path::Path;

/// Draw an actual-vs-predicted scatter plot to a PNG file.
pub fn scatter_plot(actual: &[f64], predicted: &[f64], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if actual.len() != predicted.len() {
        anyhow::bail!(
            "Actual and predicted count mismatch: {} actual, {} predicted",
            actual.len(),
            predicted.len()
        );
    }

    let max_val = actual
        .iter()
        .chain(predicted.iter())
        .cloned()
        .fold(f64::NAN, f64::max);
    let max_val = if max_val.is_finite() && max_val > 0.0 {
        max_val * 1.05
    } else {
        1.0
    };

    let root = BitMapBackend::new(path, (800, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|e| anyhow::anyhow!("{}", e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Actual vs Predicted Power", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..max_val, 0f64..max_val)
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    chart
        .configure_mesh()
        .x_desc("Actual Power (kW)")
        .y_desc("Predicted Power (kW)")
        .draw()
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    chart
        .draw_series(
            actual
                .iter()
                .zip(predicted.iter())
                .map(|(&a, &p)| Circle::new((a, p), 2, BLUE.filled())),
        )
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    root.present().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_png_file() {
        let actual = vec![100.0, 200.0, 300.0, 400.0];
        let predicted = vec![110.0, 190.0, 310.0, 395.0];

        let path = std::env::temp_dir().join(format!("scatter_{}.png", uuid::Uuid::new_v4()));
        scatter_plot(&actual, &predicted, &path).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn rejects_length_mismatch() {
        let path = std::env::temp_dir().join("never_written.png");
        assert!(scatter_plot(&[1.0], &[1.0, 2.0], &path).is_err());
    }
}
