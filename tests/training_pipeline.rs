//! End-to-end trainer pipeline test on a synthetic SCADA export.

use std::io::Write;

use wind_power_predictor::dataset;
use wind_power_predictor::ml::{metrics::regression_metrics, plot::scatter_plot, PowerForest};

fn synthetic_csv(rows: usize) -> String {
    let mut csv = String::from(
        "Date/Time,LV ActivePower (kW), WindSpeed(m/s) ,Theoretical_Power_Curve (KWh)\n",
    );
    for i in 0..rows {
        // Power roughly proportional to wind speed cubed, as a turbine's is
        let wind = 3.0 + (i as f64 % 10.0);
        let theoretical = wind.powi(3) * 1.6;
        let actual = theoretical * 0.92;
        csv.push_str(&format!(
            "01 01 2018 {:02}:00,{:.2},{:.2},{:.2}\n",
            i % 24,
            actual,
            wind,
            theoretical
        ));
    }
    csv
}

#[test]
fn train_evaluate_persist_plot() {
    let tmp = std::env::temp_dir();
    let run_id = uuid::Uuid::new_v4();
    let csv_path = tmp.join(format!("pipeline_{}.csv", run_id));
    let artifact_path = tmp.join(format!("pipeline_{}.bin", run_id));
    let plot_path = tmp.join(format!("pipeline_{}.png", run_id));

    let mut file = std::fs::File::create(&csv_path).unwrap();
    file.write_all(synthetic_csv(100).as_bytes()).unwrap();

    let readings = dataset::load_readings(&csv_path).unwrap();
    assert_eq!(readings.len(), 100);

    let (train, test) = dataset::train_test_split(&readings, 0.2, 42).unwrap();
    assert_eq!(test.len(), 20);

    let (x_train, y_train) = dataset::to_xy(&train);
    let (x_test, y_test) = dataset::to_xy(&test);

    let mut forest = PowerForest::train(
        &x_train,
        &y_train,
        PowerForest::parameters(20, 42),
        dataset::feature_names(),
    )
    .unwrap();

    let predictions: Vec<f64> = x_test
        .iter()
        .map(|row| {
            let fv = wind_power_predictor::ml::FeatureVector::new(
                row.clone(),
                dataset::feature_names(),
            )
            .unwrap();
            forest.predict(&fv).unwrap().value
        })
        .collect();

    let metrics = regression_metrics(&predictions, &y_test).unwrap();
    // The relationship is deterministic, so the fit should be tight
    assert!(metrics.r2 > 0.9, "r2 was {}", metrics.r2);

    scatter_plot(&y_test, &predictions, &plot_path).unwrap();
    assert!(std::fs::metadata(&plot_path).unwrap().len() > 0);

    forest.save(&artifact_path).unwrap();
    let restored = PowerForest::load(&artifact_path).unwrap();
    assert_eq!(
        restored.metadata.training_samples,
        forest.metadata.training_samples
    );

    std::fs::remove_file(&csv_path).ok();
    std::fs::remove_file(&artifact_path).ok();
    std::fs::remove_file(&plot_path).ok();
}
