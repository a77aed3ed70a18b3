//! Port traits implemented by adapters.

pub mod cart_port;
pub mod config_port;
pub mod dataset_port;
pub mod forecast_port;
