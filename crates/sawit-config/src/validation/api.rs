//! Endpoint and sampling-parameter validation.

use crate::schema::SawitConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate endpoint settings.
pub(crate) fn validate_api(errors: &mut Vec<String>, config: &SawitConfig) {
    let api = &config.api;
    if api.model.trim().is_empty() {
        errors.push("api.model must not be empty".into());
    }
    if !(api.base_url.starts_with("http://") || api.base_url.starts_with("https://")) {
        errors.push(format!(
            "api.base_url = {:?} must start with http:// or https://",
            api.base_url
        ));
    }
    validate_range(
        errors,
        "api.request_timeout_secs",
        api.request_timeout_secs,
        1,
        600,
    );
}

/// Validate sampling parameters.
pub(crate) fn validate_generation(errors: &mut Vec<String>, config: &SawitConfig) {
    let generation = &config.generation;
    validate_range_f64(
        errors,
        "generation.temperature",
        generation.temperature,
        0.0,
        2.0,
    );
    validate_range_f64(errors, "generation.top_p", generation.top_p, 0.0, 1.0);
    validate_range(
        errors,
        "generation.max_output_tokens",
        generation.max_output_tokens,
        1,
        8192,
    );
}
