//! Настройки фронтенда: селекторы разметки страницы и уровень логирования.
//!
//! Значения по умолчанию соответствуют шаблонам сервера. Уровень логов
//! задаётся атрибутом `<body data-log-level="debug">`.

use log::Level;
use web_sys::Document;

const LOG_LEVEL_ATTRIBUTE: &str = "data-log-level";
const DEFAULT_LOG_LEVEL: Level = Level::Info;

#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub log_level: Level,

    // bill form
    pub add_item_id: String,
    pub bill_items_id: String,
    pub total_amount_id: String,
    pub products_attribute: String,
    pub bill_item_class: String,
    pub remove_button_class: String,
    pub invalid_class: String,

    // bill history
    pub collapse_trigger_selector: String,

    // inventory
    pub inventory_table_selector: String,
    pub header_cell_selector: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL,
            add_item_id: "add-item".to_string(),
            bill_items_id: "bill-items".to_string(),
            total_amount_id: "total-amount".to_string(),
            products_attribute: "data-products".to_string(),
            bill_item_class: "bill-item".to_string(),
            remove_button_class: "remove-item-btn".to_string(),
            invalid_class: "is-invalid".to_string(),
            collapse_trigger_selector: "[data-toggle=\"collapse\"]".to_string(),
            inventory_table_selector: ".inventory-table".to_string(),
            header_cell_selector: "th".to_string(),
        }
    }
}

impl FrontendConfig {
    pub fn from_document(document: &Document) -> Self {
        let raw_level = document
            .body()
            .and_then(|body| body.get_attribute(LOG_LEVEL_ATTRIBUTE));
        Self {
            log_level: parse_log_level(raw_level.as_deref()),
            ..Self::default()
        }
    }

    /// Селектор строк счёта: ".bill-item"
    pub fn bill_item_selector(&self) -> String {
        format!(".{}", self.bill_item_class)
    }
}

pub fn parse_log_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse::<Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
