//! Helpers for reading the hosting page's environment: the injected
//! endpoint URL, the Django CSRF field, and metric text parsing.

use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::config::{CSRF_FIELD_SELECTOR, PLAN_API_URL_GLOBAL};

/// Read the exercise-plan endpoint URL injected by the page template as
/// `window.exercisePlanApiUrl`. `None` when the global is missing or not
/// a string.
pub fn plan_api_url() -> Option<String> {
    let window = gloo_utils::window();
    js_sys::Reflect::get(&window, &PLAN_API_URL_GLOBAL.into())
        .ok()
        .and_then(|value| value.as_string())
}

/// Read the CSRF token from the hidden `csrfmiddlewaretoken` input the
/// server renders into the page.
pub fn csrf_token() -> Option<String> {
    gloo_utils::document()
        .query_selector(CSRF_FIELD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
}

/// Parse a weight/height field value. Mirrors `parseFloat` enough for this
/// form: junk becomes NaN and is serialized as `null` for the server to
/// reject, instead of failing client-side.
///
/// Unlike `parseFloat`, trailing garbage is not prefix-parsed: `"70x"` is
/// NaN here, not 70. The inputs are `type="number"`, so such values never
/// reach us from the browser form anyway.
pub fn parse_metric(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::parse_metric;

    #[test]
    fn parses_plain_and_padded_numbers() {
        assert_eq!(parse_metric("70.5"), 70.5);
        assert_eq!(parse_metric("  175 "), 175.0);
    }

    #[test]
    fn junk_and_empty_become_nan() {
        assert!(parse_metric("heavy").is_nan());
        assert!(parse_metric("").is_nan());
        // no parseFloat-style prefix parsing
        assert!(parse_metric("70x").is_nan());
    }
}
