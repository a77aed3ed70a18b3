//! The data behind the forecast dashboard.

use super::forecast::{ForecastPoint, HistoricalPoint};

/// Best-selling item and its total units sold.
#[derive(Debug, Clone, PartialEq)]
pub struct TopItem {
    pub item: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForecastDataset {
    pub historical: Vec<HistoricalPoint>,
    pub forecast: Vec<ForecastPoint>,
    pub top_items: Vec<TopItem>,
}

impl ForecastDataset {
    pub fn is_empty(&self) -> bool {
        self.historical.is_empty() && self.forecast.is_empty() && self.top_items.is_empty()
    }

    /// Built-in dataset shown when no sample file can be used.
    pub fn fallback() -> Self {
        let historical = [
            ("2025-01-01", 120.0),
            ("2025-01-02", 132.0),
            ("2025-01-03", 101.0),
            ("2025-01-04", 134.0),
            ("2025-01-05", 90.0),
            ("2025-01-06", 110.0),
            ("2025-01-07", 120.0),
            ("2025-01-08", 132.0),
            ("2025-01-09", 121.0),
            ("2025-01-10", 134.0),
        ]
        .into_iter()
        .map(|(date, y)| HistoricalPoint {
            date: date.to_string(),
            observed_value: y,
        })
        .collect();

        let forecast = [
            ("2025-01-11", 123.0, 100.0, 145.0),
            ("2025-01-12", 125.0, 105.0, 148.0),
            ("2025-01-13", 128.0, 110.0, 150.0),
            ("2025-01-14", 130.0, 112.0, 152.0),
            ("2025-01-15", 133.0, 115.0, 155.0),
            ("2025-01-16", 135.0, 118.0, 158.0),
            ("2025-01-17", 138.0, 120.0, 160.0),
        ]
        .into_iter()
        .map(|(date, value, lower, upper)| ForecastPoint {
            date: date.to_string(),
            predicted_value: value,
            lower_bound: lower,
            upper_bound: upper,
        })
        .collect();

        let top_items = [
            ("Chocolate Cake", 543.0),
            ("Strawberry Cheesecake", 432.0),
            ("Vanilla Cupcake", 387.0),
            ("Tiramisu", 321.0),
            ("Apple Pie", 289.0),
        ]
        .into_iter()
        .map(|(item, quantity)| TopItem {
            item: item.to_string(),
            quantity,
        })
        .collect();

        ForecastDataset {
            historical,
            forecast,
            top_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_shape() {
        let data = ForecastDataset::fallback();
        assert_eq!(data.historical.len(), 10);
        assert_eq!(data.forecast.len(), 7);
        assert_eq!(data.top_items.len(), 5);
        assert_eq!(data.top_items[0].item, "Chocolate Cake");
        assert!(!data.is_empty());
    }

    #[test]
    fn fallback_bounds_bracket_prediction() {
        for p in ForecastDataset::fallback().forecast {
            assert!(p.lower_bound <= p.predicted_value);
            assert!(p.predicted_value <= p.upper_bound);
        }
    }

    #[test]
    fn default_is_empty() {
        assert!(ForecastDataset::default().is_empty());
    }
}
