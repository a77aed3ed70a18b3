//! Plain-text rendering of the cart and the dashboard tabs.

use crate::domain::bakery::Bakery;
use crate::domain::cart::Cart;
use crate::domain::catalog::MenuItem;
use crate::domain::dashboard::{Dashboard, Tab};
use crate::domain::forecast::MergedSeriesPoint;
use crate::domain::pricing::{CartSummary, format_currency};
use crate::domain::recommendations::SeasonalEvent;

fn opt(value: Option<f64>) -> String {
    value.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string())
}

pub fn render_menu(items: &[&MenuItem]) -> String {
    if items.is_empty() {
        return "No items in this category\n".to_string();
    }
    let mut out = String::new();
    for item in items {
        out.push_str(&format!(
            "{:>4}  {:<24} {:<10} {:<16} {:>8}\n",
            item.id,
            item.name,
            item.category,
            item.bakery,
            format_currency(item.price),
        ));
    }
    out
}

pub fn render_categories(categories: &[&str]) -> String {
    let mut out = String::new();
    for category in categories {
        out.push_str(category);
        out.push('\n');
    }
    out
}

pub fn render_bakeries(bakeries: &[Bakery]) -> String {
    if bakeries.is_empty() {
        return "No bakeries found\n".to_string();
    }
    let mut out = String::from("=== Nearby Bakeries ===\n");
    for bakery in bakeries {
        out.push_str(&format!(
            "{:>3}  {:<16} {:>3.1} stars  {:<10} {}\n",
            bakery.id,
            bakery.name,
            bakery.rating,
            bakery.distance,
            bakery.specialties.join(", "),
        ));
        for offer in bakery.offers.iter().chain(&bakery.festival_offers) {
            out.push_str(&format!("       * {offer}\n"));
        }
    }
    out
}

pub fn render_bakery(bakery: &Bakery, menu: &[&MenuItem]) -> String {
    let mut out = format!(
        "=== {} ===\n{:.1} stars, {}\n{}\n\nSpecialties: {}\n",
        bakery.name,
        bakery.rating,
        bakery.distance,
        bakery.description,
        bakery.specialties.join(", "),
    );

    out.push_str("\n=== Opening Hours ===\n");
    for day in &bakery.hours {
        out.push_str(&format!("{:<10} {}\n", day.day, day.hours));
    }

    out.push_str("\n=== Menu ===\n");
    out.push_str(&render_menu(menu));
    out
}

pub fn render_recommendations(events: &[&SeasonalEvent], seasonal_items: &[String]) -> String {
    let mut out = String::from("=== Top Seasonal Items ===\n");
    if seasonal_items.is_empty() {
        out.push_str("None\n");
    }
    for item in seasonal_items {
        out.push_str(&format!("  * {item}\n"));
    }

    out.push_str("\n=== Upcoming Events & Predictions ===\n");
    if events.is_empty() {
        out.push_str("No upcoming events\n");
        return out;
    }
    for event in events {
        out.push_str(&format!(
            "{}  {} ({})\n  Recommended Items: {}\n  Expected Sales Increase: +{}%\n",
            event.date,
            event.name,
            event.kind,
            event.recommended_items.join(", "),
            event.expected_sales_increase,
        ));
    }
    out
}

pub fn render_cart(cart: &Cart, summary: &CartSummary) -> String {
    let mut out = format!("Items: {}\n", cart.item_count());
    if cart.is_empty() {
        out.push_str("Your cart is empty\n");
    } else {
        out.push_str("=== Order Items ===\n");
        for line in cart.items() {
            out.push_str(&format!(
                "{:>4}  {:<24} {:<16} x{:<3} {:>9}\n",
                line.id,
                line.name,
                line.bakery,
                line.quantity,
                format_currency(line.line_total()),
            ));
        }
    }

    out.push_str("\n=== Order Summary ===\n");
    out.push_str(&format!("Subtotal:      {:>10}\n", format_currency(summary.subtotal)));
    out.push_str(&format!("Delivery Fee:  {:>10}\n", format_currency(summary.delivery_fee)));
    out.push_str(&format!("Tax:           {:>10}\n", format_currency(summary.tax)));
    out.push_str(&format!("Total:         {:>10}\n", format_currency(summary.total)));
    out
}

pub fn render_dashboard(dashboard: &Dashboard) -> String {
    match dashboard.active_tab() {
        Tab::Overview => render_overview(dashboard),
        Tab::Products => render_products(dashboard),
        Tab::Forecast => render_forecast(dashboard),
    }
}

fn render_overview(dashboard: &Dashboard) -> String {
    let mut out = format!(
        "=== Sales Forecast (Next {} Days) ===\n",
        dashboard.horizon_days()
    );
    let series = dashboard.chart_series();
    if series.is_empty() {
        out.push_str("No forecast data available\n");
        return out;
    }
    out.push_str(&format!(
        "{:<32} {:<8} {:>10} {:>10} {:>10} {:>10}\n",
        "Date", "Kind", "Actual", "Forecast", "Lower", "Upper"
    ));
    for point in &series {
        out.push_str(&series_line(point));
    }
    out
}

fn series_line(point: &MergedSeriesPoint) -> String {
    let kind = if point.is_forecast() {
        "forecast"
    } else {
        "actual"
    };
    format!(
        "{:<32} {:<8} {:>10} {:>10} {:>10} {:>10}\n",
        point.date,
        kind,
        opt(point.actual_value),
        opt(point.predicted_value),
        opt(point.lower_bound),
        opt(point.upper_bound),
    )
}

fn render_products(dashboard: &Dashboard) -> String {
    let mut out = String::from("=== Top Products ===\n");
    let items = dashboard.top_items();
    if items.is_empty() {
        out.push_str("No product data available\n");
        return out;
    }
    for (rank, item) in items.iter().enumerate() {
        out.push_str(&format!(
            "{:>2}. {:<28} Total Sold: {}\n",
            rank + 1,
            item.item,
            item.quantity
        ));
    }
    out
}

fn render_forecast(dashboard: &Dashboard) -> String {
    let mut out = format!(
        "=== Detailed Forecast (Next {} Days) ===\n",
        dashboard.horizon_days()
    );
    let rows = dashboard.forecast_rows();
    if rows.is_empty() {
        out.push_str("No forecast data available\n");
        return out;
    }
    out.push_str(&format!(
        "{:<12} {:>10} {:>10} {:>10}\n",
        "Date", "Forecast", "Min", "Max"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:<12} {:>10} {:>10} {:>10}\n",
            row.date, row.forecast, row.min, row.max
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::CartLineItem;
    use crate::domain::bakery::{bakery_menu, sample_bakeries};
    use crate::domain::catalog::{categories, filter_by_category, sample_menu};
    use crate::domain::dataset::ForecastDataset;
    use crate::domain::error::DessertError;
    use crate::domain::forecast::MergeMode;
    use crate::domain::pricing::PricingPolicy;
    use crate::domain::recommendations::{sample_events, seasonal_items, upcoming};
    use crate::ports::dataset_port::DatasetPort;

    struct Fallback;

    impl DatasetPort for Fallback {
        fn load_dataset(&self) -> Result<ForecastDataset, DessertError> {
            Err(DessertError::Data {
                reason: "no file".into(),
            })
        }
    }

    fn dashboard(tab: Tab) -> Dashboard {
        let mut d = Dashboard::load(&Fallback, MergeMode::default());
        d.set_tab(tab);
        d
    }

    #[test]
    fn cart_summary_lines() {
        let cart = Cart::from_items(vec![
            CartLineItem {
                id: 1,
                name: "Chocolate Fudge Cake".into(),
                bakery: "Sweet Delights".into(),
                unit_price: 24.99,
                quantity: 1,
            },
            CartLineItem {
                id: 2,
                name: "Red Velvet Cupcake".into(),
                bakery: "Cupcake Heaven".into(),
                unit_price: 3.99,
                quantity: 4,
            },
        ]);
        let text = render_cart(&cart, &cart.summary(&PricingPolicy::default()));
        assert!(text.contains("Chocolate Fudge Cake"));
        assert!(text.contains("$15.96"));
        assert!(text.contains("Subtotal:"));
        assert!(text.contains("$40.95"));
        assert!(text.contains("$5.99"));
        assert!(text.contains("$50.22"));
    }

    #[test]
    fn cart_badge_counts_units() {
        let menu = sample_menu();
        let mut cart = Cart::new();
        cart.add(&menu[0]);
        cart.add(&menu[2]);
        cart.add(&menu[2]);
        let text = render_cart(&cart, &cart.summary(&PricingPolicy::default()));
        assert_eq!(text.lines().next(), Some("Items: 3"));
    }

    #[test]
    fn empty_cart_message() {
        let cart = Cart::new();
        let text = render_cart(&cart, &cart.summary(&PricingPolicy::default()));
        assert!(text.contains("Your cart is empty"));
        assert!(text.contains("$0.00"));
    }

    #[test]
    fn overview_lists_series() {
        let text = render_dashboard(&dashboard(Tab::Overview));
        assert!(text.contains("Next 7 Days"));
        assert!(text.contains("2025-01-01"));
        assert!(text.contains("2025-01-17"));
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("2025-01-17") && last.contains("forecast"));
        assert!(text.lines().nth(2).unwrap().contains("actual"));
        // 10 historical + 7 forecast + title + header
        assert_eq!(text.lines().count(), 19);
    }

    #[test]
    fn products_are_ranked() {
        let text = render_dashboard(&dashboard(Tab::Products));
        assert!(text.contains(" 1. Chocolate Cake"));
        assert!(text.contains("Total Sold: 543"));
        assert!(text.contains(" 5. Apple Pie"));
    }

    #[test]
    fn forecast_table_two_decimals() {
        let text = render_dashboard(&dashboard(Tab::Forecast));
        assert!(text.contains("123.00"));
        assert!(text.contains("100.00"));
        assert!(text.contains("145.00"));
    }

    #[test]
    fn cleared_dashboard_shows_placeholders() {
        let mut d = dashboard(Tab::Overview);
        d.select_file("sales.csv").unwrap();
        assert!(render_dashboard(&d).contains("No forecast data available"));
        d.set_tab(Tab::Products);
        assert!(render_dashboard(&d).contains("No product data available"));
    }

    #[test]
    fn menu_rows() {
        let menu = sample_menu();
        let text = render_menu(&filter_by_category(&menu, "bread"));
        assert!(text.contains("Sourdough Bread"));
        assert!(text.contains("$8.99"));
        assert_eq!(text.lines().count(), 1);
        assert!(render_menu(&[]).contains("No items"));
    }

    #[test]
    fn category_list() {
        let menu = sample_menu();
        let text = render_categories(&categories(&menu));
        assert_eq!(text, "Cakes\nCupcakes\nCookies\nBread\nPastries\n");
    }

    #[test]
    fn bakery_directory_lists_offers() {
        let text = render_bakeries(&sample_bakeries());
        assert!(text.contains("Sweet Delights"));
        assert!(text.contains("4.9 stars"));
        assert!(text.contains("* Free delivery on orders above $30"));
        assert!(text.contains("* Christmas special cake - 25% off"));
        assert!(render_bakeries(&[]).contains("No bakeries"));
    }

    #[test]
    fn bakery_detail_has_hours_and_menu() {
        let bakeries = sample_bakeries();
        let menu = sample_menu();
        let sweet = &bakeries[0];
        let text = render_bakery(sweet, &bakery_menu(sweet, &menu));
        assert!(text.contains("=== Sweet Delights ==="));
        assert!(text.contains("Saturday   10:00 AM - 9:00 PM"));
        assert!(text.contains("Chocolate Chip Cookie"));
        assert!(!text.contains("Sourdough Bread"));
    }

    #[test]
    fn recommendations_list_events() {
        let events = sample_events();
        let listed = upcoming(&events, None);
        let text = render_recommendations(&listed, seasonal_items(&listed));
        assert!(text.contains("  * Hot Cross Buns"));
        assert!(text.contains("2024-05-12  Mother's Day (holiday)"));
        assert!(text.contains("Expected Sales Increase: +60%"));

        let none = render_recommendations(&[], &[]);
        assert!(none.contains("No upcoming events"));
    }
}
