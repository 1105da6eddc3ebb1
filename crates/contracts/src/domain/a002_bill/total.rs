use crate::domain::a001_product::aggregate::Product;
use crate::domain::a001_product::catalog::ProductCatalog;

/// Сырые значения одной строки счёта, как они прочитаны из формы.
///
/// `None` означает, что поле в строке не найдено.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillLine {
    pub product_value: Option<String>,
    pub quantity_value: Option<String>,
}

impl BillLine {
    pub fn new(product_value: Option<String>, quantity_value: Option<String>) -> Self {
        Self {
            product_value,
            quantity_value,
        }
    }

    pub fn quantity(&self) -> u32 {
        self.quantity_value
            .as_deref()
            .map(parse_quantity)
            .unwrap_or(0)
    }

    pub fn product<'a>(&self, catalog: &'a ProductCatalog) -> Option<&'a Product> {
        self.product_value
            .as_deref()
            .and_then(|value| catalog.find_by_option_value(value))
    }

    /// Сумма строки; неизвестный товар даёт 0
    pub fn amount(&self, catalog: &ProductCatalog) -> f64 {
        self.product(catalog)
            .map(|p| p.unit_price * f64::from(self.quantity()))
            .unwrap_or(0.0)
    }

    /// Количество больше складского остатка выбранного товара
    pub fn exceeds_stock(&self, catalog: &ProductCatalog) -> bool {
        self.product(catalog)
            .map(|p| !p.has_stock_for(self.quantity()))
            .unwrap_or(false)
    }
}

/// Изменение отметки "не хватает остатка" у строки между пересчётами
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFlagChange {
    Raised,
    Cleared,
    Unchanged,
}

impl StockFlagChange {
    pub fn between(was_short: bool, is_short: bool) -> Self {
        match (was_short, is_short) {
            (false, true) => StockFlagChange::Raised,
            (true, false) => StockFlagChange::Cleared,
            _ => StockFlagChange::Unchanged,
        }
    }
}

/// Разбор количества как целого префикса: "3" -> 3, "3.7" -> 3, "4abc" -> 4.
///
/// Пустое или нечисловое значение даёт 0, отрицательное тоже 0.
pub fn parse_quantity(raw: &str) -> u32 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(d);
    }

    if negative || !seen_digit {
        0
    } else {
        value
    }
}

/// Итог счёта по всем строкам
pub fn compute_total(lines: &[BillLine], catalog: &ProductCatalog) -> f64 {
    lines.iter().map(|line| line.amount(catalog)).sum()
}
