//! Seasonal events and the items to stock for them.

#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalEvent {
    /// ISO `YYYY-MM-DD`.
    pub date: String,
    pub name: String,
    pub kind: String,
    pub recommended_items: Vec<String>,
    /// Percent over a normal day.
    pub expected_sales_increase: u32,
}

fn event(date: &str, name: &str, items: [&str; 3], increase: u32) -> SeasonalEvent {
    SeasonalEvent {
        date: date.to_string(),
        name: name.to_string(),
        kind: "holiday".to_string(),
        recommended_items: items.iter().map(|i| i.to_string()).collect(),
        expected_sales_increase: increase,
    }
}

pub fn sample_events() -> Vec<SeasonalEvent> {
    vec![
        event(
            "2024-04-14",
            "Easter Sunday",
            ["Chocolate Easter Eggs", "Hot Cross Buns", "Carrot Cake"],
            45,
        ),
        event(
            "2024-05-12",
            "Mother's Day",
            ["Red Velvet Cake", "Chocolate Truffles", "Fruit Tart"],
            60,
        ),
        event(
            "2024-06-16",
            "Father's Day",
            ["Chocolate Fudge Cake", "Cheesecake", "Apple Pie"],
            40,
        ),
    ]
}

/// Events on or after `from`, soonest first. ISO dates order correctly as strings.
pub fn upcoming<'a>(
    events: &'a [SeasonalEvent],
    from: Option<&str>,
) -> Vec<&'a SeasonalEvent> {
    let mut selected: Vec<_> = events
        .iter()
        .filter(|e| from.is_none_or(|from| e.date.as_str() >= from))
        .collect();
    selected.sort_by(|a, b| a.date.cmp(&b.date));
    selected
}

/// Recommended items of the soonest event.
pub fn seasonal_items<'a>(events: &[&'a SeasonalEvent]) -> &'a [String] {
    events
        .iter()
        .copied()
        .min_by(|a, b| a.date.cmp(&b.date))
        .map(|e| e.recommended_items.as_slice())
        .unwrap_or(&[])
}
