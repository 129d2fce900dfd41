//! Prediction endpoint backing the prediction page.

use anyhow::{Context, Result};
use axum::{extract::State, response::Html, Form};
use tracing::{info, warn};

use super::pages::render_predict;
use crate::app::AppState;
use crate::ml::FeatureVector;

/// Fixed user-facing message shown for any prediction failure.
pub const PREDICTION_ERROR: &str = "Error in prediction. Please check your input values.";

/// POST /y_predict and /result - coerce all submitted form values to
/// floats in submission order, run the model, render the result.
pub async fn predict(
    State(st): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Html<String> {
    match run_prediction(&st, &fields) {
        Ok(text) => Html(render_predict(&[("prediction_text", &text)])),
        Err(e) => {
            warn!(error = %e, "prediction failed");
            Html(render_predict(&[("error", PREDICTION_ERROR)]))
        }
    }
}

fn run_prediction(st: &AppState, fields: &[(String, String)]) -> Result<String> {
    let mut names = Vec::with_capacity(fields.len());
    let mut values = Vec::with_capacity(fields.len());

    for (name, value) in fields {
        let parsed: f64 = value
            .trim()
            .parse()
            .with_context(|| format!("Field '{}' is not a number: '{}'", name, value))?;
        names.push(name.clone());
        values.push(parsed);
    }

    let features = FeatureVector::new(values, names)?;
    let prediction = st.model.predict(&features)?;

    info!(value_kw = prediction.value, "prediction served");

    Ok(format!("The energy predicted is {:.2} kW", prediction.value))
}
