//! HTTP client for the forecast service.
//!
//! Sends the sales CSV as the `file` field of a multipart form. A single
//! attempt is made and no timeout is applied.

use crate::adapters::forecast_payload::decode_service_response;
use crate::domain::dataset::ForecastDataset;
use crate::domain::error::DessertError;
use crate::ports::config_port::ConfigPort;
use crate::ports::forecast_port::ForecastPort;
use reqwest::blocking::{Client, multipart};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/forecast";

pub struct HttpForecastAdapter {
    client: Client,
    endpoint: String,
}

impl HttpForecastAdapter {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, DessertError> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .build()
            .map_err(|e| DessertError::ForecastRequest {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Uses `[forecast] endpoint`, or the local development service.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, DessertError> {
        let endpoint = config
            .get_trimmed("forecast", "endpoint")
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ForecastPort for HttpForecastAdapter {
    fn request_forecast(&self, csv_path: &Path) -> Result<ForecastDataset, DessertError> {
        let form = multipart::Form::new().file("file", csv_path)?;

        tracing::debug!(endpoint = %self.endpoint, file = %csv_path.display(), "POST forecast");
        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| DessertError::ForecastRequest {
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| DessertError::ForecastRequest {
            reason: format!("failed to read response body: {e}"),
        })?;

        if !(200..300).contains(&status) {
            tracing::warn!(status, "forecast service rejected upload");
        }
        decode_service_response(status, &body)
    }
}
