//! Sample bakery menu.

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: String,
    pub bakery: String,
    pub price: f64,
}

/// Category name that matches every item.
pub const ALL_CATEGORIES: &str = "all";

fn item(
    id: u32,
    name: &str,
    description: &str,
    category: &str,
    bakery: &str,
    price: f64,
) -> MenuItem {
    MenuItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        bakery: bakery.to_string(),
        price,
    }
}

pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        item(
            101,
            "Chocolate Fudge Cake",
            "Rich chocolate cake with fudge filling and chocolate ganache",
            "Cakes",
            "Sweet Delights",
            24.99,
        ),
        item(
            102,
            "Red Velvet Cake",
            "Classic red velvet with cream cheese frosting",
            "Cakes",
            "Sweet Delights",
            26.99,
        ),
        item(
            201,
            "Vanilla Cupcake",
            "Light and fluffy vanilla cupcake with buttercream frosting",
            "Cupcakes",
            "Cupcake Heaven",
            3.99,
        ),
        item(
            202,
            "Chocolate Cupcake",
            "Rich chocolate cupcake with chocolate ganache",
            "Cupcakes",
            "Cupcake Heaven",
            3.99,
        ),
        item(
            203,
            "Red Velvet Cupcake",
            "Red velvet cupcake with cream cheese swirl",
            "Cupcakes",
            "Cupcake Heaven",
            3.99,
        ),
        item(
            301,
            "Chocolate Chip Cookie",
            "Chewy cookie loaded with dark chocolate chips",
            "Cookies",
            "Sweet Delights",
            2.49,
        ),
        item(
            401,
            "Sourdough Bread",
            "Slow-fermented country loaf",
            "Bread",
            "Bake & Take",
            8.99,
        ),
        item(
            501,
            "Butter Croissant",
            "Flaky all-butter croissant",
            "Pastries",
            "Bake & Take",
            3.49,
        ),
    ]
}

pub fn find(items: &[MenuItem], id: u32) -> Option<&MenuItem> {
    items.iter().find(|i| i.id == id)
}

/// Case-insensitive category filter; `"all"` keeps everything.
pub fn filter_by_category<'a>(items: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    let wanted = category.trim();
    if wanted.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|i| i.category.eq_ignore_ascii_case(wanted))
        .collect()
}

/// Distinct categories in first-seen order.
pub fn categories(items: &[MenuItem]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for i in items {
        if !seen.contains(&i.category.as_str()) {
            seen.push(&i.category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_everything() {
        let menu = sample_menu();
        assert_eq!(filter_by_category(&menu, "all").len(), menu.len());
        assert_eq!(filter_by_category(&menu, " ALL ").len(), menu.len());
    }

    #[test]
    fn category_match_ignores_case() {
        let menu = sample_menu();
        let cupcakes = filter_by_category(&menu, "cupcakes");
        assert_eq!(cupcakes.len(), 3);
        assert!(cupcakes.iter().all(|i| i.category == "Cupcakes"));
    }

    #[test]
    fn unknown_category_is_empty() {
        let menu = sample_menu();
        assert!(filter_by_category(&menu, "pies").is_empty());
    }

    #[test]
    fn find_by_id() {
        let menu = sample_menu();
        assert_eq!(find(&menu, 401).map(|i| i.name.as_str()), Some("Sourdough Bread"));
        assert!(find(&menu, 999).is_none());
    }

    #[test]
    fn categories_in_menu_order() {
        let menu = sample_menu();
        assert_eq!(
            categories(&menu),
            vec!["Cakes", "Cupcakes", "Cookies", "Bread", "Pastries"]
        );
    }
}
