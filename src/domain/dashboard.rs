//! Forecast dashboard state.
//!
//! Holds the loaded dataset, the active tab and the file picked for upload,
//! and derives what each tab shows.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::dataset::{ForecastDataset, TopItem};
use super::error::DessertError;
use super::forecast::{MergeMode, MergedSeriesPoint, merge_series_with};
use crate::ports::dataset_port::DatasetPort;
use crate::ports::forecast_port::ForecastPort;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Overview,
    Products,
    Forecast,
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overview" | "dashboard" => Ok(Tab::Overview),
            "products" => Ok(Tab::Products),
            "forecast" => Ok(Tab::Forecast),
            other => Err(format!("unknown tab '{other}'")),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tab::Overview => "overview",
            Tab::Products => "products",
            Tab::Forecast => "forecast",
        };
        f.write_str(name)
    }
}

/// Where the current dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    SampleFile,
    Fallback,
    Upload,
    Cleared,
}

/// One row of the detailed forecast table, values already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastRow {
    pub date: String,
    pub forecast: String,
    pub min: String,
    pub max: String,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    active_tab: Tab,
    dataset: ForecastDataset,
    origin: DataOrigin,
    selected_file: Option<PathBuf>,
    merge_mode: MergeMode,
}

impl Dashboard {
    pub fn new(merge_mode: MergeMode) -> Self {
        Dashboard {
            active_tab: Tab::Overview,
            dataset: ForecastDataset::default(),
            origin: DataOrigin::Cleared,
            selected_file: None,
            merge_mode,
        }
    }

    /// Load the sample dataset, falling back to the built-in data on any failure.
    pub fn load(source: &dyn DatasetPort, merge_mode: MergeMode) -> Self {
        let mut dashboard = Dashboard::new(merge_mode);
        match source.load_dataset() {
            Ok(dataset) => {
                tracing::info!(
                    historical = dataset.historical.len(),
                    forecast = dataset.forecast.len(),
                    "loaded sample data"
                );
                dashboard.dataset = dataset;
                dashboard.origin = DataOrigin::SampleFile;
            }
            Err(e) => {
                tracing::warn!(error = %e, "using fallback sample data");
                dashboard.dataset = ForecastDataset::fallback();
                dashboard.origin = DataOrigin::Fallback;
            }
        }
        dashboard
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn dataset(&self) -> &ForecastDataset {
        &self.dataset
    }

    pub fn origin(&self) -> DataOrigin {
        self.origin
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    /// Pick a CSV file for upload. Clears the currently shown data.
    pub fn select_file(&mut self, path: impl Into<PathBuf>) -> Result<(), DessertError> {
        let path = path.into();
        validate_upload_path(&path)?;
        tracing::debug!(file = %path.display(), "selected upload file");
        self.selected_file = Some(path);
        self.dataset = ForecastDataset::default();
        self.origin = DataOrigin::Cleared;
        Ok(())
    }

    /// Send the selected file to the forecast service.
    ///
    /// On failure the dataset is left as it was and the error is returned for
    /// the caller to show.
    pub fn upload(&mut self, service: &dyn ForecastPort) -> Result<(), DessertError> {
        let path = self
            .selected_file
            .clone()
            .ok_or(DessertError::NoFileSelected)?;

        tracing::info!(file = %path.display(), "requesting forecast");
        let dataset = service.request_forecast(&path).map_err(|e| {
            tracing::error!(error = %e, "forecast upload failed");
            e
        })?;

        tracing::info!(
            forecast = dataset.forecast.len(),
            top_items = dataset.top_items.len(),
            "forecast received"
        );
        self.dataset = dataset;
        self.origin = DataOrigin::Upload;
        self.active_tab = Tab::Overview;
        Ok(())
    }

    /// Chart data for the overview tab.
    pub fn chart_series(&self) -> Vec<MergedSeriesPoint> {
        merge_series_with(
            &self.dataset.historical,
            &self.dataset.forecast,
            self.merge_mode,
        )
    }

    /// The "Next N Days" figure.
    pub fn horizon_days(&self) -> usize {
        self.dataset.forecast.len()
    }

    pub fn forecast_rows(&self) -> Vec<ForecastRow> {
        self.dataset
            .forecast
            .iter()
            .map(|p| ForecastRow {
                date: p.date.clone(),
                forecast: format!("{:.2}", p.predicted_value),
                min: format!("{:.2}", p.lower_bound),
                max: format!("{:.2}", p.upper_bound),
            })
            .collect()
    }

    pub fn top_items(&self) -> &[TopItem] {
        &self.dataset.top_items
    }
}

/// Only `.csv` files are accepted for upload.
pub fn validate_upload_path(path: &Path) -> Result<(), DessertError> {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    if is_csv {
        Ok(())
    } else {
        Err(DessertError::UnsupportedFileType {
            file: path.display().to_string(),
        })
    }
}
