use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор товара из справочника (первичный ключ на сервере)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Разобрать значение `<option value>` селектора товара.
    ///
    /// Пустое значение ("Select Product") и мусор дают `None`.
    pub fn from_option_value(raw: &str) -> Option<Self> {
        raw.trim().parse::<i64>().ok().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Product
// ============================================================================

/// Товар справочника, встроенный в страницу счёта.
///
/// На странице хранится как кортеж `[id, name, unitPrice, stockQuantity]`,
/// поэтому (де)сериализация идёт через [`ProductTuple`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProductTuple", into = "ProductTuple")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub unit_price: f64,
    pub stock_quantity: i64,
}

#[derive(Serialize, Deserialize)]
struct ProductTuple(ProductId, String, f64, i64);

impl From<ProductTuple> for Product {
    fn from(ProductTuple(id, name, unit_price, stock_quantity): ProductTuple) -> Self {
        Self {
            id,
            name,
            unit_price,
            stock_quantity,
        }
    }
}

impl From<Product> for ProductTuple {
    fn from(p: Product) -> Self {
        ProductTuple(p.id, p.name, p.unit_price, p.stock_quantity)
    }
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, unit_price: f64, stock_quantity: i64) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            unit_price,
            stock_quantity,
        }
    }

    /// Подпись пункта в селекторе товара: "Pen - ₹10 (Stock: 50)"
    pub fn option_label(&self) -> String {
        format!(
            "{} - ₹{} (Stock: {})",
            self.name, self.unit_price, self.stock_quantity
        )
    }

    /// Хватает ли остатка на складе для указанного количества
    pub fn has_stock_for(&self, quantity: u32) -> bool {
        i64::from(quantity) <= self.stock_quantity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_tuple() {
        let product: Product = serde_json::from_str(r#"[1, "Pen", 10, 50]"#).unwrap();
        assert_eq!(product, Product::new(1, "Pen", 10.0, 50));
    }

    #[test]
    fn test_serialize_back_to_tuple() {
        let json = serde_json::to_string(&Product::new(2, "Book", 200.5, 5)).unwrap();
        assert_eq!(json, r#"[2,"Book",200.5,5]"#);
    }

    #[test]
    fn test_option_label() {
        assert_eq!(
            Product::new(1, "Pen", 10.0, 50).option_label(),
            "Pen - ₹10 (Stock: 50)"
        );
        assert_eq!(
            Product::new(3, "Syrup", 12.5, 0).option_label(),
            "Syrup - ₹12.5 (Stock: 0)"
        );
    }

    #[test]
    fn test_option_value_parsing() {
        assert_eq!(ProductId::from_option_value("7"), Some(ProductId(7)));
        assert_eq!(ProductId::from_option_value(" 7 "), Some(ProductId(7)));
        assert_eq!(ProductId::from_option_value(""), None);
        assert_eq!(ProductId::from_option_value("abc"), None);
    }

    #[test]
    fn test_has_stock_for() {
        let product = Product::new(2, "Book", 200.0, 5);
        assert!(product.has_stock_for(5));
        assert!(!product.has_stock_for(6));
    }
}
