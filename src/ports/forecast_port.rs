//! Remote forecast service port.

use crate::domain::dataset::ForecastDataset;
use crate::domain::error::DessertError;
use std::path::Path;

pub trait ForecastPort {
    /// Upload a sales CSV and return the service's forecast. One attempt, no retry.
    fn request_forecast(&self, csv_path: &Path) -> Result<ForecastDataset, DessertError>;
}
