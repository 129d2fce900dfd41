//! Turbine telemetry dataset loading and splitting.
//!
//! The dataset is a SCADA export where header names carry stray
//! whitespace; headers are trimmed before schema lookup.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Feature column: measured wind speed.
pub const COL_WIND_SPEED: &str = "WindSpeed(m/s)";
/// Feature column: manufacturer theoretical power curve value.
pub const COL_THEORETICAL_POWER: &str = "Theoretical_Power_Curve (KWh)";
/// Target column: measured LV active power.
pub const COL_ACTIVE_POWER: &str = "LV ActivePower (kW)";

/// One telemetry row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurbineReading {
    pub wind_speed_ms: f64,
    pub theoretical_power_kwh: f64,
    pub active_power_kw: f64,
}

impl TurbineReading {
    pub fn features(&self) -> Vec<f64> {
        vec![self.wind_speed_ms, self.theoretical_power_kwh]
    }

    pub fn target(&self) -> f64 {
        self.active_power_kw
    }
}

/// Feature names matching `TurbineReading::features` order.
pub fn feature_names() -> Vec<String> {
    vec![
        COL_WIND_SPEED.to_string(),
        COL_THEORETICAL_POWER.to_string(),
    ]
}

/// Load telemetry readings from a CSV file.
///
/// Rows with unparseable numeric fields are skipped with a warning.
pub fn load_readings(path: impl AsRef<Path>) -> Result<Vec<TurbineReading>> {
    let path = path.as_ref();
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;

    let headers = reader
        .headers()
        .context("Failed to read CSV headers")?
        .clone();

    let column = |name: &str| -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .with_context(|| format!("Dataset is missing column '{}'", name))
    };

    let wind_idx = column(COL_WIND_SPEED)?;
    let theory_idx = column(COL_THEORETICAL_POWER)?;
    let power_idx = column(COL_ACTIVE_POWER)?;

    let mut readings = Vec::new();
    let mut skipped = 0usize;

    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read CSV record {}", line + 1))?;

        let parse = |idx: usize| -> Option<f64> {
            record.get(idx).and_then(|f| f.trim().parse::<f64>().ok())
        };

        match (parse(wind_idx), parse(theory_idx), parse(power_idx)) {
            (Some(wind_speed_ms), Some(theoretical_power_kwh), Some(active_power_kw)) => {
                readings.push(TurbineReading {
                    wind_speed_ms,
                    theoretical_power_kwh,
                    active_power_kw,
                });
            }
            _ => {
                skipped += 1;
                warn!(line = line + 1, "skipping row with unparseable fields");
            }
        }
    }

    if skipped > 0 {
        warn!(skipped, total = readings.len(), "dataset rows skipped");
    }

    if readings.is_empty() {
        anyhow::bail!("Dataset {} contains no usable rows", path.display());
    }

    Ok(readings)
}

/// Split readings into train and test sets with a seeded shuffle.
pub fn train_test_split(
    readings: &[TurbineReading],
    test_ratio: f64,
    seed: u64,
) -> Result<(Vec<TurbineReading>, Vec<TurbineReading>)> {
    if !(0.0..1.0).contains(&test_ratio) || test_ratio == 0.0 {
        anyhow::bail!("Test ratio must be between 0 and 1, got {}", test_ratio);
    }

    if readings.is_empty() {
        anyhow::bail!("Cannot split an empty dataset");
    }

    let mut shuffled: Vec<TurbineReading> = readings.to_vec();
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    shuffled.shuffle(&mut rng);

    let test_size = ((readings.len() as f64) * test_ratio).round() as usize;
    let test_size = test_size.clamp(1, readings.len().saturating_sub(1).max(1));

    let train = shuffled[test_size..].to_vec();
    let test = shuffled[..test_size].to_vec();

    Ok((train, test))
}

/// Decompose readings into feature rows and targets.
pub fn to_xy(readings: &[TurbineReading]) -> (Vec<Vec<f64>>, Vec<f64>) {
    let x = readings.iter().map(|r| r.features()).collect();
    let y = readings.iter().map(|r| r.target()).collect();
    (x, y)
}
