//! Bakery directory.

use super::catalog::MenuItem;

/// Opening hours for one day, as shown to customers.
#[derive(Debug, Clone, PartialEq)]
pub struct OpeningHours {
    pub day: String,
    pub hours: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bakery {
    pub id: u32,
    pub name: String,
    /// 0.0 to 5.0 stars.
    pub rating: f64,
    pub distance: String,
    pub specialties: Vec<String>,
    pub offers: Vec<String>,
    pub festival_offers: Vec<String>,
    pub description: String,
    /// Monday through Sunday.
    pub hours: Vec<OpeningHours>,
}

const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn week(hours: [&str; 7]) -> Vec<OpeningHours> {
    DAYS.iter()
        .zip(hours)
        .map(|(day, hours)| OpeningHours {
            day: day.to_string(),
            hours: hours.to_string(),
        })
        .collect()
}

pub fn sample_bakeries() -> Vec<Bakery> {
    vec![
        Bakery {
            id: 1,
            name: "Sweet Delights".into(),
            rating: 4.8,
            distance: "0.5 miles".into(),
            specialties: strings(&["Cakes", "Cupcakes", "Cookies"]),
            offers: strings(&["10% off on all cakes", "Buy 2 get 1 free on cookies"]),
            festival_offers: strings(&["Special Diwali sweets box - 20% off"]),
            description: "A family-owned bakery specializing in custom cakes and desserts. \
                We use only the finest ingredients to create delicious treats that will make \
                your special occasions even more memorable."
                .into(),
            hours: week([
                "9:00 AM - 8:00 PM",
                "9:00 AM - 8:00 PM",
                "9:00 AM - 8:00 PM",
                "9:00 AM - 8:00 PM",
                "9:00 AM - 9:00 PM",
                "10:00 AM - 9:00 PM",
                "10:00 AM - 6:00 PM",
            ]),
        },
        Bakery {
            id: 2,
            name: "Bake & Take".into(),
            rating: 4.6,
            distance: "1.2 miles".into(),
            specialties: strings(&["Bread", "Pastries", "Muffins"]),
            offers: strings(&["15% off on first order", "Free delivery on orders above $30"]),
            festival_offers: strings(&["Christmas special cake - 25% off"]),
            description: "Neighbourhood bakery baking bread and pastries fresh every morning."
                .into(),
            hours: week([
                "7:00 AM - 6:00 PM",
                "7:00 AM - 6:00 PM",
                "7:00 AM - 6:00 PM",
                "7:00 AM - 6:00 PM",
                "7:00 AM - 7:00 PM",
                "8:00 AM - 7:00 PM",
                "Closed",
            ]),
        },
        Bakery {
            id: 3,
            name: "Cupcake Heaven".into(),
            rating: 4.9,
            distance: "0.8 miles".into(),
            specialties: strings(&["Cupcakes", "Cake Pops", "Macarons"]),
            offers: strings(&["20% off on bulk orders", "Free customization"]),
            festival_offers: strings(&["Easter special cupcake box - 15% off"]),
            description: "Cupcakes, cake pops and macarons decorated to order.".into(),
            hours: week([
                "10:00 AM - 8:00 PM",
                "10:00 AM - 8:00 PM",
                "10:00 AM - 8:00 PM",
                "10:00 AM - 8:00 PM",
                "10:00 AM - 9:00 PM",
                "10:00 AM - 9:00 PM",
                "11:00 AM - 5:00 PM",
            ]),
        },
    ]
}

pub fn find_bakery(bakeries: &[Bakery], id: u32) -> Option<&Bakery> {
    bakeries.iter().find(|b| b.id == id)
}

/// Menu items sold by `bakery`, in menu order.
pub fn bakery_menu<'a>(bakery: &Bakery, menu: &'a [MenuItem]) -> Vec<&'a MenuItem> {
    menu.iter().filter(|i| i.bakery == bakery.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::sample_menu;

    #[test]
    fn lookup_by_id() {
        let bakeries = sample_bakeries();
        assert_eq!(
            find_bakery(&bakeries, 3).map(|b| b.name.as_str()),
            Some("Cupcake Heaven")
        );
        assert!(find_bakery(&bakeries, 9).is_none());
    }

    #[test]
    fn every_bakery_has_a_full_week() {
        for bakery in sample_bakeries() {
            assert_eq!(bakery.hours.len(), 7, "{}", bakery.name);
            assert_eq!(bakery.hours[0].day, "Monday");
            assert_eq!(bakery.hours[6].day, "Sunday");
            assert!((0.0..=5.0).contains(&bakery.rating));
        }
    }

    #[test]
    fn sweet_delights_weekend_hours() {
        let bakeries = sample_bakeries();
        let sweet = find_bakery(&bakeries, 1).unwrap();
        assert_eq!(sweet.hours[4].hours, "9:00 AM - 9:00 PM");
        assert_eq!(sweet.hours[6].hours, "10:00 AM - 6:00 PM");
        assert_eq!(sweet.festival_offers.len(), 1);
    }

    #[test]
    fn menu_is_filtered_by_bakery_name() {
        let bakeries = sample_bakeries();
        let menu = sample_menu();
        let ids: Vec<u32> = bakery_menu(&bakeries[0], &menu)
            .iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![101, 102, 301]);
        assert_eq!(bakery_menu(&bakeries[1], &menu).len(), 2);
        assert_eq!(bakery_menu(&bakeries[2], &menu).len(), 3);
    }
}
