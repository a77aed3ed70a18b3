//! Local dashboard dataset source.

use crate::domain::dataset::ForecastDataset;
use crate::domain::error::DessertError;

pub trait DatasetPort {
    /// Fails unless historical, forecast and top items are all present.
    fn load_dataset(&self) -> Result<ForecastDataset, DessertError>;
}
