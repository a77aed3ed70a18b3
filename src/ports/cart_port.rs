//! Cart contents source.

use crate::domain::cart::CartLineItem;
use crate::domain::error::DessertError;

pub trait CartPort {
    /// Line items in display order. Every returned item has quantity >= 1.
    fn load_items(&self) -> Result<Vec<CartLineItem>, DessertError>;
}
