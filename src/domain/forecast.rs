//! Historical and forecast series, and their merge into one chart series.

use std::str::FromStr;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalPoint {
    pub date: String,
    pub observed_value: f64,
}

/// A predicted value with its confidence interval. `lower_bound <= predicted_value
/// <= upper_bound` is assumed from the service and not checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub date: String,
    pub predicted_value: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

/// One charted date. Either `actual_value` or the predicted group is set, never both.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSeriesPoint {
    pub date: String,
    pub actual_value: Option<f64>,
    pub predicted_value: Option<f64>,
    pub lower_bound: Option<f64>,
    pub upper_bound: Option<f64>,
}

impl MergedSeriesPoint {
    pub fn is_forecast(&self) -> bool {
        self.predicted_value.is_some()
    }
}

impl From<&HistoricalPoint> for MergedSeriesPoint {
    fn from(p: &HistoricalPoint) -> Self {
        MergedSeriesPoint {
            date: p.date.clone(),
            actual_value: Some(p.observed_value),
            predicted_value: None,
            lower_bound: None,
            upper_bound: None,
        }
    }
}

impl From<&ForecastPoint> for MergedSeriesPoint {
    fn from(p: &ForecastPoint) -> Self {
        MergedSeriesPoint {
            date: p.date.clone(),
            actual_value: None,
            predicted_value: Some(p.predicted_value),
            lower_bound: Some(p.lower_bound),
            upper_bound: Some(p.upper_bound),
        }
    }
}

/// How the merge treats a missing side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MergeMode {
    /// Produce nothing unless both series have points. An empty array counts
    /// as missing here, so a response with `historical: []` charts nothing.
    #[default]
    RequireBoth,
    /// Always concatenate, even when one side is empty. This matches the web
    /// dashboard, which only skipped the chart when a field was absent.
    Concatenate,
}

impl FromStr for MergeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "require_both" => Ok(MergeMode::RequireBoth),
            "concatenate" => Ok(MergeMode::Concatenate),
            other => Err(format!(
                "unknown merge mode '{other}' (expected require_both or concatenate)"
            )),
        }
    }
}

/// Historical points followed by forecast points, in input order.
///
/// Returns an empty series when either input is empty.
pub fn merge_series(
    historical: &[HistoricalPoint],
    forecast: &[ForecastPoint],
) -> Vec<MergedSeriesPoint> {
    merge_series_with(historical, forecast, MergeMode::RequireBoth)
}

pub fn merge_series_with(
    historical: &[HistoricalPoint],
    forecast: &[ForecastPoint],
    mode: MergeMode,
) -> Vec<MergedSeriesPoint> {
    if mode == MergeMode::RequireBoth && (historical.is_empty() || forecast.is_empty()) {
        if historical.len() + forecast.len() > 0 {
            tracing::warn!(
                historical = historical.len(),
                forecast = forecast.len(),
                "one series is empty, chart series left empty"
            );
        }
        return Vec::new();
    }

    let mut merged = Vec::with_capacity(historical.len() + forecast.len());
    merged.extend(historical.iter().map(MergedSeriesPoint::from));
    merged.extend(forecast.iter().map(MergedSeriesPoint::from));
    merged
}
