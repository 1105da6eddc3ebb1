//! Редактор позиций счёта на странице нового счёта.
//!
//! Добавляет и удаляет строки `.bill-item`, пересчитывает итог в
//! `#total-amount` и скрывает кнопку удаления у единственной строки.
//! Удаление и изменение полей обрабатываются делегированием на контейнере.

use super::mounted_rows::MountedRows;
use super::row_view::{mount_row, MountedRow, ROW_KEY_ATTRIBUTE};
use super::submit_guard;
use crate::config::FrontendConfig;
use crate::shared::dom::{elements, event_target_element, set_display};
use contracts::domain::a001_product::catalog::ProductCatalog;
use contracts::domain::a002_bill::draft::{
    is_remove_control_visible, BillDraft, RowKey, PRODUCT_FIELD_NAME, QUANTITY_FIELD_NAME,
};
use contracts::domain::a002_bill::total::{compute_total, BillLine, StockFlagChange};
use contracts::shared::money::format_amount;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, HtmlElement, HtmlInputElement, HtmlSelectElement, MouseEvent,
};

pub struct BillItemEditor {
    container: HtmlElement,
    total_display: Element,
    catalog: ProductCatalog,
    draft: BillDraft,
    mounted: MountedRows<MountedRow>,
    config: FrontendConfig,
}

/// Подключить редактор, если на странице есть форма счёта.
///
/// Возвращает `false`, когда нужной разметки нет.
pub fn attach(document: &Document, config: &FrontendConfig) -> Result<bool, JsValue> {
    let (Some(container), Some(add_button), Some(total_display)) = (
        document.get_element_by_id(&config.bill_items_id),
        document.get_element_by_id(&config.add_item_id),
        document.get_element_by_id(&config.total_amount_id),
    ) else {
        log::debug!("No bill form on page, bill item editor disabled");
        return Ok(false);
    };
    let container: HtmlElement = container.dyn_into()?;

    let editor = Rc::new(RefCell::new(BillItemEditor::new(
        container.clone(),
        total_display,
        config.clone(),
    )?));

    // Add row
    let editor_add = editor.clone();
    let on_add = Closure::wrap(Box::new(move |_: MouseEvent| {
        if let Err(err) = editor_add.borrow_mut().add_row() {
            log::error!("Failed to add bill item: {:?}", err);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    add_button.add_event_listener_with_callback("click", on_add.as_ref().unchecked_ref())?;
    on_add.forget();

    // Remove row (delegated)
    let editor_remove = editor.clone();
    let on_click = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(target) = event_target_element(&e) else {
            return;
        };
        if let Err(err) = editor_remove.borrow_mut().handle_click(&target) {
            log::error!("Failed to remove bill item: {:?}", err);
        }
    }) as Box<dyn FnMut(MouseEvent)>);
    container.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
    on_click.forget();

    // Product or quantity changed (delegated)
    let editor_change = editor.clone();
    let on_change = Closure::wrap(Box::new(move |e: Event| {
        let Some(target) = event_target_element(&e) else {
            return;
        };
        if let Err(err) = editor_change.borrow().handle_change(&target) {
            log::error!("Failed to recalculate bill total: {:?}", err);
        }
    }) as Box<dyn FnMut(Event)>);
    container.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    submit_guard::attach(&container, editor.clone())?;

    editor.borrow().refresh()?;
    log::debug!(
        "Bill item editor attached: {} rows, {} products",
        editor.borrow().draft.row_count(),
        editor.borrow().catalog.len()
    );
    Ok(true)
}

impl BillItemEditor {
    fn new(
        container: HtmlElement,
        total_display: Element,
        config: FrontendConfig,
    ) -> Result<Self, JsValue> {
        let raw_products = container.get_attribute(&config.products_attribute);
        let catalog =
            ProductCatalog::parse_attribute(raw_products.as_deref()).unwrap_or_else(|e| {
                log::warn!("{}; bill total will stay at zero", e);
                ProductCatalog::default()
            });

        // Строки, уже отрисованные сервером
        let rendered = elements(&container.query_selector_all(&config.bill_item_selector())?);
        let mut hints = Vec::with_capacity(rendered.len());
        for row in &rendered {
            let hint = row
                .query_selector(&field_selector(PRODUCT_FIELD_NAME))?
                .and_then(|select| RowKey::from_product_field_id(&select.id()))
                .map(|key| key.0);
            hints.push(hint);
        }
        let draft = BillDraft::from_rendered(hints);
        for (row, key) in rendered.iter().zip(draft.rows()) {
            row.set_attribute(ROW_KEY_ATTRIBUTE, &key.to_string())?;
        }

        Ok(Self {
            container,
            total_display,
            catalog,
            draft,
            mounted: MountedRows::default(),
            config,
        })
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    pub fn config(&self) -> &FrontendConfig {
        &self.config
    }

    pub fn add_row(&mut self) -> Result<(), JsValue> {
        let key = self.draft.add_row();
        let handle = mount_row(
            &self.container,
            key,
            &self.catalog,
            &self.config.bill_item_class,
            &self.config.remove_button_class,
        );
        self.mounted.insert(key, handle);
        log::debug!("Bill item {} added", key);
        self.refresh()
    }

    fn handle_click(&mut self, target: &Element) -> Result<(), JsValue> {
        if !target.class_list().contains(&self.config.remove_button_class) {
            return Ok(());
        }
        let Some(row) = target.closest(&self.config.bill_item_selector())? else {
            return Ok(());
        };
        self.remove_row(&row)
    }

    fn remove_row(&mut self, row: &Element) -> Result<(), JsValue> {
        let key = row
            .get_attribute(ROW_KEY_ATTRIBUTE)
            .and_then(|value| value.parse::<usize>().ok())
            .map(RowKey);
        if let Some(key) = key {
            self.draft.remove_row(key);
            // снятие handle размонтирует строку и освободит её owner
            self.mounted.release(key);
            log::debug!("Bill item {} removed", key);
        }
        // строки сервера handle не имеют
        row.remove();
        self.refresh()
    }

    fn handle_change(&self, target: &Element) -> Result<(), JsValue> {
        let name = target.get_attribute("name");
        match name.as_deref() {
            Some(PRODUCT_FIELD_NAME) | Some(QUANTITY_FIELD_NAME) => self.recalculate(),
            _ => Ok(()),
        }
    }

    /// Кнопки удаления и итог после любого структурного изменения
    pub fn refresh(&self) -> Result<(), JsValue> {
        self.update_remove_buttons()?;
        self.recalculate()
    }

    fn row_element(&self, key: RowKey) -> Result<Option<Element>, JsValue> {
        self.container.query_selector(&format!("[{}=\"{}\"]", ROW_KEY_ATTRIBUTE, key))
    }

    fn update_remove_buttons(&self) -> Result<(), JsValue> {
        let count = self.draft.row_count();
        let button_selector = format!(".{}", self.config.remove_button_class);
        for (position, key) in self.draft.rows().iter().enumerate() {
            let Some(row) = self.row_element(*key)? else { continue };
            let Some(button) = row.query_selector(&button_selector)? else {
                continue;
            };
            let display = if is_remove_control_visible(position, count) {
                "inline-block"
            } else {
                "none"
            };
            set_display(&button, display)?;
        }
        Ok(())
    }

    /// Значения полей каждой строки в порядке отрисовки.
    ///
    /// Строка без селектора или поля количества даёт `None` в этом поле.
    pub fn read_lines(&self) -> Result<Vec<BillLine>, JsValue> {
        let mut lines = Vec::with_capacity(self.draft.row_count());
        for key in self.draft.rows() {
            let Some(row) = self.row_element(*key)? else {
                lines.push(BillLine::default());
                continue;
            };
            let product_value = row
                .query_selector(&field_selector(PRODUCT_FIELD_NAME))?
                .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
                .map(|select| select.value());
            let quantity_value = quantity_input(&row)?.map(|input| input.value());
            lines.push(BillLine::new(product_value, quantity_value));
        }
        Ok(lines)
    }

    fn recalculate(&self) -> Result<(), JsValue> {
        let lines = self.read_lines()?;
        let total = compute_total(&lines, &self.catalog);
        self.total_display.set_text_content(Some(&format_amount(total)));
        self.mark_stock_shortages(&lines)
    }

    /// Подсветить количества больше складского остатка
    fn mark_stock_shortages(&self, lines: &[BillLine]) -> Result<(), JsValue> {
        for (key, line) in self.draft.rows().iter().zip(lines) {
            let Some(row) = self.row_element(*key)? else { continue };
            let Some(input) = quantity_input(&row)? else {
                continue;
            };
            let classes = input.class_list();
            let was_short = classes.contains(&self.config.invalid_class);
            let short = line.exceeds_stock(&self.catalog);
            classes.toggle_with_force(&self.config.invalid_class, short)?;
            match StockFlagChange::between(was_short, short) {
                StockFlagChange::Raised => {
                    log::warn!("Bill item {}: quantity exceeds available stock", key)
                }
                StockFlagChange::Cleared => log::debug!("Bill item {}: stock is sufficient", key),
                StockFlagChange::Unchanged => {}
            }
        }
        Ok(())
    }
}

fn field_selector(name: &str) -> String {
    format!("[name=\"{}\"]", name)
}

fn quantity_input(row: &Element) -> Result<Option<HtmlInputElement>, JsValue> {
    Ok(row
        .query_selector(&field_selector(QUANTITY_FIELD_NAME))?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok()))
}
