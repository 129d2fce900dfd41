//! Current-weather lookup (OpenWeatherMap-compatible API).
//!
//! Used by the prediction page to prefill turbine site conditions for a
//! city the user types in.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::config::WeatherConfig;

/// Current conditions formatted for page display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: String,
    pub humidity: String,
    pub pressure: String,
    pub wind_speed: String,
}

/// HTTP client for the weather provider.
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    pub fn new(cfg: &WeatherConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(cfg.http_timeout_seconds))
                .build()
                .unwrap_or_default(),
            base_url: cfg.base_url.clone(),
            api_key: cfg.api_key.clone(),
        }
    }

    /// Fetch current weather for a city by name.
    pub async fn current(&self, city: &str) -> Result<WeatherSnapshot> {
        let url = format!("{}/weather", self.base_url);

        debug!(city, "fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", &self.api_key)])
            .send()
            .await
            .context("Failed to send request to weather API")?;

        if !response.status().is_success() {
            error!(status = %response.status(), city, "weather API returned error status");
            anyhow::bail!("Weather API error: {}", response.status());
        }

        let current: CurrentWeatherResponse = response
            .json()
            .await
            .context("Failed to parse weather API response")?;

        Ok(WeatherSnapshot {
            temperature: format!("{} °C", current.main.temp),
            humidity: format!("{} %", current.main.humidity),
            pressure: format!("{} mmHG", current.main.pressure),
            wind_speed: format!("{} m/s", current.wind.speed),
        })
    }
}

// Weather API response structures
#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainReadings,
    wind: WindReadings,
}

#[derive(Debug, Deserialize)]
struct MainReadings {
    temp: f64,
    humidity: f64,
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct WindReadings {
    speed: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_fields_carry_units() {
        let snapshot = WeatherSnapshot {
            temperature: "285.2 °C".to_string(),
            humidity: "81 %".to_string(),
            pressure: "1012 mmHG".to_string(),
            wind_speed: "4.6 m/s".to_string(),
        };

        assert!(snapshot.temperature.ends_with("°C"));
        assert!(snapshot.wind_speed.ends_with("m/s"));
    }

    #[test]
    fn response_parses_provider_json() {
        let body = r#"{
            "main": {"temp": 285.2, "humidity": 81, "pressure": 1012},
            "wind": {"speed": 4.6}
        }"#;

        let parsed: CurrentWeatherResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.main.temp, 285.2);
        assert_eq!(parsed.main.humidity, 81.0);
        assert_eq!(parsed.wind.speed, 4.6);
    }
}
