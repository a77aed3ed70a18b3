//! Concrete adapter implementations for ports.

pub mod console_report;
pub mod csv_cart_adapter;
pub mod file_config_adapter;
pub mod forecast_payload;
#[cfg(feature = "http")]
pub mod http_forecast_adapter;
pub mod json_dataset_adapter;
