//! Sample data JSON file adapter.

use crate::adapters::forecast_payload::decode_sample_data;
use crate::domain::dataset::ForecastDataset;
use crate::domain::error::DessertError;
use crate::ports::dataset_port::DatasetPort;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_SAMPLE_DATA_PATH: &str = "public/sample-data.json";

pub struct JsonDatasetAdapter {
    path: PathBuf,
}

impl JsonDatasetAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DatasetPort for JsonDatasetAdapter {
    fn load_dataset(&self) -> Result<ForecastDataset, DessertError> {
        let content = fs::read_to_string(&self.path).map_err(|e| DessertError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        decode_sample_data(&content)
    }
}
