//! Weather lookup endpoint backing the prediction page.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::warn;

use super::pages::render_predict;
use crate::app::AppState;

/// Fixed user-facing message shown for any weather lookup failure.
pub const WEATHER_ERROR: &str =
    "Error fetching weather data. Please check the city name and try again.";

#[derive(Debug, Deserialize)]
pub struct WindApiForm {
    pub city: Option<String>,
}

/// POST /windapi - fetch current weather for a city and render it into
/// the prediction page.
pub async fn windapi(State(st): State<AppState>, Form(form): Form<WindApiForm>) -> Html<String> {
    let city = match form.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => city.to_string(),
        _ => {
            warn!("windapi called without a city");
            return Html(render_predict(&[("error", WEATHER_ERROR)]));
        }
    };

    match st.weather.current(&city).await {
        Ok(snapshot) => Html(render_predict(&[
            ("temp", &snapshot.temperature),
            ("humid", &snapshot.humidity),
            ("pressure", &snapshot.pressure),
            ("speed", &snapshot.wind_speed),
        ])),
        Err(e) => {
            warn!(city, error = %e, "weather lookup failed");
            Html(render_predict(&[("error", WEATHER_ERROR)]))
        }
    }
}
