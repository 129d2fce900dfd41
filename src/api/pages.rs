//! Static pages and template rendering.
//!
//! Pages are embedded HTML with `{{name}}` placeholders; no template
//! engine is involved.

use axum::response::Html;

const INTRO_PAGE: &str = include_str!("../../templates/intro.html");
const PREDICT_PAGE: &str = include_str!("../../templates/predict.html");

/// Placeholders the predict page knows about. Unfilled ones render empty.
const PREDICT_VARS: &[&str] = &["temp", "humid", "pressure", "speed", "prediction_text", "error"];

/// Render the predict page with the given placeholder values.
pub fn render_predict(vars: &[(&str, &str)]) -> String {
    let mut page = PREDICT_PAGE.to_string();
    for (key, value) in vars {
        page = page.replace(&format!("{{{{{}}}}}", key), value);
    }
    for key in PREDICT_VARS {
        page = page.replace(&format!("{{{{{}}}}}", key), "");
    }
    page
}

/// GET / - landing page
pub async fn intro() -> Html<&'static str> {
    Html(INTRO_PAGE)
}

/// GET /predict - prediction form page
pub async fn predict_page() -> Html<String> {
    Html(render_predict(&[]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_values() {
        let page = render_predict(&[("prediction_text", "The energy predicted is 42.00 kW")]);
        assert!(page.contains("The energy predicted is 42.00 kW"));
    }

    #[test]
    fn render_clears_unused_placeholders() {
        let page = render_predict(&[]);
        assert!(!page.contains("{{"));
        assert!(!page.contains("}}"));
    }

    #[test]
    fn intro_page_is_embedded() {
        assert!(INTRO_PAGE.contains("Wind Turbine Power Prediction"));
    }
}
