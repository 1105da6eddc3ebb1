//! Справочник товаров, переданный сервером в атрибуте `data-products`.

use super::aggregate::{Product, ProductId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid product list: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Неизменяемый список товаров страницы
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Разобрать значение атрибута `data-products`.
    ///
    /// Отсутствующий или пустой атрибут означает пустой справочник.
    pub fn parse_attribute(raw: Option<&str>) -> Result<Self, CatalogError> {
        let raw = raw.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Ok(Self::default());
        }
        let products: Vec<Product> = serde_json::from_str(raw)?;
        Ok(Self { products })
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Найти товар по значению `<option value>` селектора
    pub fn find_by_option_value(&self, raw: &str) -> Option<&Product> {
        ProductId::from_option_value(raw).and_then(|id| self.find(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attribute() {
        let catalog =
            ProductCatalog::parse_attribute(Some(r#"[[1,"Pen",10,50],[2,"Book",200,5]]"#))
                .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find(ProductId(2)).unwrap().name, "Book");
    }

    #[test]
    fn test_missing_or_blank_attribute_is_empty() {
        assert!(ProductCatalog::parse_attribute(None).unwrap().is_empty());
        assert!(ProductCatalog::parse_attribute(Some("")).unwrap().is_empty());
        assert!(ProductCatalog::parse_attribute(Some("  ")).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_attribute_is_error() {
        assert!(ProductCatalog::parse_attribute(Some("[[1,\"Pen\"")).is_err());
        assert!(ProductCatalog::parse_attribute(Some(r#"{"id":1}"#)).is_err());
        assert!(ProductCatalog::parse_attribute(Some(r#"[["x","Pen",10,50]]"#)).is_err());
    }

    #[test]
    fn test_find_by_option_value() {
        let catalog = ProductCatalog::new(vec![Product::new(1, "Pen", 10.0, 50)]);
        assert_eq!(catalog.find_by_option_value("1").unwrap().name, "Pen");
        assert!(catalog.find_by_option_value("2").is_none());
        assert!(catalog.find_by_option_value("").is_none());
    }
}
