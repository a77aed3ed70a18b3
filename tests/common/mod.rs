#![allow(dead_code)]

use dessertdash::domain::cart::CartLineItem;
use dessertdash::domain::dataset::{ForecastDataset, TopItem};
use dessertdash::domain::error::DessertError;
use dessertdash::domain::forecast::{ForecastPoint, HistoricalPoint};
use dessertdash::ports::cart_port::CartPort;
use dessertdash::ports::dataset_port::DatasetPort;
use dessertdash::ports::forecast_port::ForecastPort;
use std::cell::RefCell;
use std::path::{Path, PathBuf};

/// Forecast service stand-in that records the uploaded paths.
pub struct MockForecastPort {
    pub response: Result<ForecastDataset, (u16, String)>,
    pub calls: RefCell<Vec<PathBuf>>,
}

impl MockForecastPort {
    pub fn returning(dataset: ForecastDataset) -> Self {
        Self {
            response: Ok(dataset),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn rejecting(status: u16, message: &str) -> Self {
        Self {
            response: Err((status, message.to_string())),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl ForecastPort for MockForecastPort {
    fn request_forecast(&self, csv_path: &Path) -> Result<ForecastDataset, DessertError> {
        self.calls.borrow_mut().push(csv_path.to_path_buf());
        match &self.response {
            Ok(dataset) => Ok(dataset.clone()),
            Err((status, message)) => Err(DessertError::ForecastRejected {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}

pub struct MockDatasetPort {
    pub dataset: Option<ForecastDataset>,
}

impl DatasetPort for MockDatasetPort {
    fn load_dataset(&self) -> Result<ForecastDataset, DessertError> {
        self.dataset.clone().ok_or_else(|| DessertError::Data {
            reason: "sample data not found".into(),
        })
    }
}

pub struct MockCartPort {
    pub items: Vec<CartLineItem>,
}

impl CartPort for MockCartPort {
    fn load_items(&self) -> Result<Vec<CartLineItem>, DessertError> {
        Ok(self.items.clone())
    }
}

pub fn line(id: u32, name: &str, unit_price: f64, quantity: u32) -> CartLineItem {
    CartLineItem {
        id,
        name: name.to_string(),
        bakery: "Sweet Delights".to_string(),
        unit_price,
        quantity,
    }
}

/// `days` historical points starting at 2025-03-01 and `horizon` forecast points after them.
pub fn generate_dataset(days: u32, horizon: u32) -> ForecastDataset {
    let historical = (0..days)
        .map(|i| HistoricalPoint {
            date: format!("2025-03-{:02}", i + 1),
            observed_value: 100.0 + f64::from(i),
        })
        .collect();
    let forecast = (0..horizon)
        .map(|i| {
            let value = 110.0 + f64::from(i) * 1.5;
            ForecastPoint {
                date: format!("2025-04-{:02}", i + 1),
                predicted_value: value,
                lower_bound: value - 12.0,
                upper_bound: value + 12.0,
            }
        })
        .collect();
    ForecastDataset {
        historical,
        forecast,
        top_items: vec![
            TopItem {
                item: "Tiramisu".into(),
                quantity: 88.0,
            },
            TopItem {
                item: "Apple Pie".into(),
                quantity: 61.0,
            },
        ],
    }
}
