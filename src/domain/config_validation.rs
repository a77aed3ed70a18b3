//! Configuration validation.
//!
//! Every key is optional; present values must be usable.

use crate::domain::error::DessertError;
use crate::domain::forecast::MergeMode;
use crate::ports::config_port::ConfigPort;

/// Keys read by dessertdash, by section.
pub const KNOWN_KEYS: &[(&str, &[&str])] = &[
    ("pricing", &["delivery_fee", "tax_rate"]),
    ("forecast", &["endpoint", "sample_data", "merge_mode"]),
    ("logging", &["filter"]),
];

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), DessertError> {
    validate_pricing_config(config)?;
    validate_forecast_config(config)?;
    Ok(())
}

pub fn validate_pricing_config(config: &dyn ConfigPort) -> Result<(), DessertError> {
    validate_delivery_fee(config)?;
    validate_tax_rate(config)?;
    Ok(())
}

pub fn validate_forecast_config(config: &dyn ConfigPort) -> Result<(), DessertError> {
    validate_endpoint(config)?;
    validate_merge_mode(config)?;
    Ok(())
}

/// Present keys that nothing reads. Usually a typo; reported, never fatal.
pub fn unknown_keys(config: &dyn ConfigPort) -> Vec<(String, String)> {
    config
        .entries()
        .into_iter()
        .filter(|(section, key)| {
            !KNOWN_KEYS
                .iter()
                .any(|(s, keys)| *s == section.as_str() && keys.contains(&key.as_str()))
        })
        .collect()
}

fn invalid(section: &str, key: &str, reason: impl Into<String>) -> DessertError {
    DessertError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn numeric(config: &dyn ConfigPort, section: &str, key: &str) -> Result<Option<f64>, DessertError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| invalid(section, key, format!("'{raw}' is not a number"))),
    }
}

fn validate_delivery_fee(config: &dyn ConfigPort) -> Result<(), DessertError> {
    if let Some(fee) = numeric(config, "pricing", "delivery_fee")? {
        if fee < 0.0 || !fee.is_finite() {
            return Err(invalid("pricing", "delivery_fee", "delivery_fee must be non-negative"));
        }
    }
    Ok(())
}

fn validate_tax_rate(config: &dyn ConfigPort) -> Result<(), DessertError> {
    if let Some(rate) = numeric(config, "pricing", "tax_rate")? {
        if !(0.0..1.0).contains(&rate) {
            return Err(invalid("pricing", "tax_rate", "tax_rate must be between 0 and 1"));
        }
    }
    Ok(())
}

fn validate_endpoint(config: &dyn ConfigPort) -> Result<(), DessertError> {
    if let Some(endpoint) = config.get_string("forecast", "endpoint") {
        let endpoint = endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(invalid("forecast", "endpoint", "endpoint must be an http(s) URL"));
        }
    }
    Ok(())
}

fn validate_merge_mode(config: &dyn ConfigPort) -> Result<(), DessertError> {
    if let Some(mode) = config.get_string("forecast", "merge_mode") {
        mode.parse::<MergeMode>()
            .map_err(|reason| invalid("forecast", "merge_mode", reason))?;
    }
    Ok(())
}
