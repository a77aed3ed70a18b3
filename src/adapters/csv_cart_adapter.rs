//! CSV file cart adapter.
//!
//! Expected header: `id,name,bakery,price,quantity`.

use crate::domain::cart::CartLineItem;
use crate::domain::error::DessertError;
use crate::ports::cart_port::CartPort;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, serde::Deserialize)]
struct CartRow {
    id: u32,
    name: String,
    #[serde(default)]
    bakery: String,
    price: f64,
    quantity: u32,
}

pub struct CsvCartAdapter {
    path: PathBuf,
}

impl CsvCartAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Parse cart rows from CSV text. `source` only labels error messages.
    pub fn parse(content: &str, source: &str) -> Result<Vec<CartLineItem>, DessertError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes());
        let mut items = Vec::new();
        let mut seen = HashSet::new();

        for (index, result) in rdr.deserialize::<CartRow>().enumerate() {
            let line = index + 2;
            let row = result.map_err(|e| DessertError::Data {
                reason: format!("{source} line {line}: {e}"),
            })?;

            if row.quantity < 1 {
                return Err(DessertError::Data {
                    reason: format!("{source} line {line}: quantity must be at least 1"),
                });
            }
            if !row.price.is_finite() || row.price < 0.0 {
                return Err(DessertError::Data {
                    reason: format!("{source} line {line}: price must be non-negative"),
                });
            }
            if !seen.insert(row.id) {
                return Err(DessertError::Data {
                    reason: format!("{source} line {line}: duplicate item id {}", row.id),
                });
            }

            items.push(CartLineItem {
                id: row.id,
                name: row.name,
                bakery: row.bakery,
                unit_price: row.price,
                quantity: row.quantity,
            });
        }

        Ok(items)
    }
}

impl CartPort for CsvCartAdapter {
    fn load_items(&self) -> Result<Vec<CartLineItem>, DessertError> {
        let content = fs::read_to_string(&self.path).map_err(|e| DessertError::Data {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        let items = Self::parse(&content, &self.path.display().to_string())?;
        tracing::debug!(path = %self.path.display(), lines = items.len(), "loaded cart");
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = "id,name,bakery,price,quantity\n\
        1,Chocolate Fudge Cake,Sweet Delights,24.99,1\n\
        2,Red Velvet Cupcake,Cupcake Heaven,3.99,4\n";

    fn data_error(err: DessertError) -> String {
        match err {
            DessertError::Data { reason } => reason,
            other => panic!("expected Data error, got {other:?}"),
        }
    }

    #[test]
    fn load_items_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cart.csv");
        fs::write(&path, SAMPLE).unwrap();

        let items = CsvCartAdapter::new(path).load_items().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Chocolate Fudge Cake");
        assert_eq!(items[0].unit_price, 24.99);
        assert_eq!(items[1].bakery, "Cupcake Heaven");
        assert_eq!(items[1].quantity, 4);
    }

    #[test]
    fn missing_file_is_data_error() {
        let adapter = CsvCartAdapter::new(PathBuf::from("/nonexistent/cart.csv"));
        let reason = data_error(adapter.load_items().unwrap_err());
        assert!(reason.contains("failed to read"));
    }

    #[test]
    fn zero_quantity_rejected() {
        let csv = "id,name,bakery,price,quantity\n1,Tiramisu,Sweet Delights,6.50,0\n";
        let reason = data_error(CsvCartAdapter::parse(csv, "cart.csv").unwrap_err());
        assert!(reason.contains("line 2"));
        assert!(reason.contains("at least 1"));
    }

    #[test]
    fn negative_price_rejected() {
        let csv = "id,name,bakery,price,quantity\n1,Tiramisu,Sweet Delights,-6.50,1\n";
        let reason = data_error(CsvCartAdapter::parse(csv, "cart.csv").unwrap_err());
        assert!(reason.contains("non-negative"));
    }

    #[test]
    fn duplicate_id_rejected() {
        let csv = "id,name,bakery,price,quantity\n1,A,B,1.0,1\n1,A,B,1.0,2\n";
        let reason = data_error(CsvCartAdapter::parse(csv, "cart.csv").unwrap_err());
        assert!(reason.contains("duplicate item id 1"));
    }

    #[test]
    fn malformed_number_rejected() {
        let csv = "id,name,bakery,price,quantity\n1,A,B,cheap,1\n";
        assert!(CsvCartAdapter::parse(csv, "cart.csv").is_err());
    }

    #[test]
    fn header_only_is_empty_cart() {
        let items = CsvCartAdapter::parse("id,name,bakery,price,quantity\n", "cart.csv").unwrap();
        assert!(items.is_empty());
    }
}
