//! Данные счёта для отправки формы.
//!
//! Сервер ожидает в скрытом поле `items` JSON вида
//! `[{"id": 1, "quantity": 3}, ...]` и отклоняет счёт без позиций.

use super::total::BillLine;
use crate::domain::a001_product::aggregate::ProductId;
use crate::domain::a001_product::catalog::ProductCatalog;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Имя скрытого поля формы с позициями счёта
pub const PAYLOAD_FIELD_NAME: &str = "items";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillPayloadItem {
    pub id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("Please add at least one product to the bill.")]
    Empty,

    #[error("Failed to serialize bill items: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Собрать позиции из строк с известным товаром и положительным количеством
pub fn build_payload(
    lines: &[BillLine],
    catalog: &ProductCatalog,
) -> Result<Vec<BillPayloadItem>, PayloadError> {
    let items: Vec<BillPayloadItem> = lines
        .iter()
        .filter_map(|line| {
            let product = line.product(catalog)?;
            let quantity = line.quantity();
            (quantity > 0).then_some(BillPayloadItem {
                id: product.id,
                quantity,
            })
        })
        .collect();

    if items.is_empty() {
        return Err(PayloadError::Empty);
    }
    Ok(items)
}

/// Значение для скрытого поля `items`
pub fn payload_json(
    lines: &[BillLine],
    catalog: &ProductCatalog,
) -> Result<String, PayloadError> {
    let items = build_payload(lines, catalog)?;
    Ok(serde_json::to_string(&items)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ProductCatalog {
        ProductCatalog::parse_attribute(Some(r#"[[1,"Pen",10,50],[2,"Book",200,5]]"#)).unwrap()
    }

    fn line(product: &str, quantity: &str) -> BillLine {
        BillLine::new(Some(product.to_string()), Some(quantity.to_string()))
    }

    #[test]
    fn test_payload_skips_incomplete_rows() {
        let lines = vec![line("1", "3"), line("2", ""), line("9", "2"), line("", "1")];
        let json = payload_json(&lines, &catalog()).unwrap();
        assert_eq!(json, r#"[{"id":1,"quantity":3}]"#);
    }

    #[test]
    fn test_payload_keeps_row_order_and_duplicates() {
        let lines = vec![line("2", "1"), line("1", "4"), line("2", "2")];
        let items = build_payload(&lines, &catalog()).unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id.value()).collect();
        assert_eq!(ids, vec![2, 1, 2]);
    }

    #[test]
    fn test_empty_payload_is_rejected() {
        let lines = vec![line("", "3"), line("1", "0")];
        assert!(matches!(
            build_payload(&lines, &catalog()),
            Err(PayloadError::Empty)
        ));
        assert!(matches!(
            build_payload(&[], &catalog()),
            Err(PayloadError::Empty)
        ));
    }
}
