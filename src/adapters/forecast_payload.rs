//! JSON wire format shared by the forecast service and the sample data file.
//!
//! ```json
//! {
//!   "forecast":   [{"date": "2025-01-11", "forecast": 123.0, "lower": 100.0, "upper": 145.0}],
//!   "historical": [{"ds": "2025-01-01", "y": 120}],
//!   "top_items":  [{"item": "Chocolate Cake", "quantity": 543}]
//! }
//! ```

use serde::Deserialize;

use crate::domain::dataset::{ForecastDataset, TopItem};
use crate::domain::error::DessertError;
use crate::domain::forecast::{ForecastPoint, HistoricalPoint};

pub const DEFAULT_FAILURE_MESSAGE: &str = "failed to process file";

#[derive(Debug, Deserialize)]
struct WireForecastPoint {
    date: String,
    forecast: f64,
    lower: f64,
    upper: f64,
}

#[derive(Debug, Deserialize)]
struct WireHistoricalPoint {
    ds: String,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct WireTopItem {
    item: String,
    quantity: f64,
}

#[derive(Debug, Deserialize)]
struct Payload {
    forecast: Option<Vec<WireForecastPoint>>,
    historical: Option<Vec<WireHistoricalPoint>>,
    top_items: Option<Vec<WireTopItem>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

fn forecast_points(wire: Vec<WireForecastPoint>) -> Vec<ForecastPoint> {
    wire.into_iter()
        .map(|p| ForecastPoint {
            date: p.date,
            predicted_value: p.forecast,
            lower_bound: p.lower,
            upper_bound: p.upper,
        })
        .collect()
}

fn historical_points(wire: Vec<WireHistoricalPoint>) -> Vec<HistoricalPoint> {
    wire.into_iter()
        .map(|p| HistoricalPoint {
            date: p.ds,
            observed_value: p.y,
        })
        .collect()
}

fn top_items(wire: Vec<WireTopItem>) -> Vec<TopItem> {
    wire.into_iter()
        .map(|t| TopItem {
            item: t.item,
            quantity: t.quantity,
        })
        .collect()
}

fn parse_payload(body: &str) -> Result<Payload, DessertError> {
    serde_json::from_str(body).map_err(|e| DessertError::InvalidResponse {
        reason: e.to_string(),
    })
}

/// Decode a forecast service response.
///
/// Non-2xx statuses fail with the body's `error` message when there is one.
/// A successful body must carry `forecast`; the other arrays default to empty.
pub fn decode_service_response(status: u16, body: &str) -> Result<ForecastDataset, DessertError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
        return Err(DessertError::ForecastRejected { status, message });
    }

    let payload = parse_payload(body)?;
    let forecast = payload.forecast.ok_or_else(|| DessertError::InvalidResponse {
        reason: "missing forecast".into(),
    })?;

    Ok(ForecastDataset {
        historical: historical_points(payload.historical.unwrap_or_default()),
        forecast: forecast_points(forecast),
        top_items: top_items(payload.top_items.unwrap_or_default()),
    })
}

/// Decode a local sample data file. All three arrays must be present.
pub fn decode_sample_data(body: &str) -> Result<ForecastDataset, DessertError> {
    let payload = parse_payload(body)?;
    match (payload.forecast, payload.historical, payload.top_items) {
        (Some(forecast), Some(historical), Some(items)) => Ok(ForecastDataset {
            historical: historical_points(historical),
            forecast: forecast_points(forecast),
            top_items: top_items(items),
        }),
        _ => Err(DessertError::InvalidResponse {
            reason: "sample data needs forecast, historical and top_items".into(),
        }),
    }
}
