//! Shopping cart state.
//!
//! Line items keep insertion order. Quantities never drop below 1: a
//! request that would do so is ignored rather than reported.

use super::catalog::MenuItem;
use super::pricing::{CartSummary, PricingPolicy, price_items};

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub id: u32,
    pub name: String,
    pub bakery: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl CartLineItem {
    /// unit_price * quantity
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}

impl From<&MenuItem> for CartLineItem {
    fn from(item: &MenuItem) -> Self {
        CartLineItem {
            id: item.id,
            name: item.name.clone(),
            bakery: item.bakery.clone(),
            unit_price: item.price,
            quantity: 1,
        }
    }
}

/// Outcome of a quantity change request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated,
    Ignored,
    NotFound,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    pub fn new() -> Self {
        Cart::default()
    }

    /// Build a cart from already-validated line items.
    pub fn from_items(items: Vec<CartLineItem>) -> Self {
        Cart { items }
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Total units across all lines, the cart badge figure. Saturates at `u32::MAX`.
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, i| count.saturating_add(i.quantity))
    }

    pub fn get(&self, id: u32) -> Option<&CartLineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Add one unit of a menu item, merging with an existing line of the same id.
    /// A line already at `u32::MAX` stays there.
    pub fn add(&mut self, item: &MenuItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.items.push(CartLineItem::from(item)),
        }
    }

    pub fn set_quantity(&mut self, id: u32, quantity: i64) -> QuantityChange {
        if quantity < 1 {
            return QuantityChange::Ignored;
        }
        let Ok(quantity) = u32::try_from(quantity) else {
            return QuantityChange::Ignored;
        };
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(line) => {
                line.quantity = quantity;
                QuantityChange::Updated
            }
            None => QuantityChange::NotFound,
        }
    }

    pub fn increment(&mut self, id: u32) -> QuantityChange {
        match self.get(id) {
            Some(line) => self.set_quantity(id, i64::from(line.quantity) + 1),
            None => QuantityChange::NotFound,
        }
    }

    pub fn decrement(&mut self, id: u32) -> QuantityChange {
        match self.get(id) {
            Some(line) => self.set_quantity(id, i64::from(line.quantity) - 1),
            None => QuantityChange::NotFound,
        }
    }

    pub fn remove(&mut self, id: u32) -> Option<CartLineItem> {
        let pos = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn summary(&self, policy: &PricingPolicy) -> CartSummary {
        price_items(&self.items, policy)
    }
}
