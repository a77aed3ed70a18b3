//! Cart pricing: subtotal, delivery fee, tax and total.

use super::cart::CartLineItem;

pub const DEFAULT_DELIVERY_FEE: f64 = 5.99;
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Fee and tax parameters applied on top of the item subtotal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPolicy {
    pub delivery_fee: f64,
    pub tax_rate: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        PricingPolicy {
            delivery_fee: DEFAULT_DELIVERY_FEE,
            tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub tax: f64,
    pub total: f64,
}

/// Price a list of line items. The delivery fee is charged even for an empty cart.
pub fn price_items(items: &[CartLineItem], policy: &PricingPolicy) -> CartSummary {
    let subtotal = items
        .iter()
        .fold(0.0, |acc, item| acc + item.line_total());
    let tax = subtotal * policy.tax_rate;
    CartSummary {
        subtotal,
        delivery_fee: policy.delivery_fee,
        tax,
        total: subtotal + policy.delivery_fee + tax,
    }
}

/// `$12.34`
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}
