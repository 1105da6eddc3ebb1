//! Сортировка таблицы склада кликом по заголовку колонки.
//!
//! Направление хранится в классах `asc`/`desc` самого заголовка. Клик по
//! другой колонке не сбрасывает классы ранее отсортированных заголовков.
//! Строки `tbody` переставляются, а не пересоздаются.

use crate::config::FrontendConfig;
use crate::shared::dom::elements;
use contracts::shared::table_sort::{sort_rows, SortDirection, ASC_CLASS, DESC_CLASS};
use std::cmp::Ordering;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlTableRowElement, HtmlTableSectionElement, MouseEvent};

/// Навесить сортировку на заголовки таблицы склада, если она есть на странице
pub fn attach_table_sort(document: &Document, config: &FrontendConfig) -> Result<bool, JsValue> {
    let Some(table) = document.query_selector(&config.inventory_table_selector)? else {
        log::debug!("No inventory table on page, sorting disabled");
        return Ok(false);
    };

    let headers = elements(&table.query_selector_all(&config.header_cell_selector)?);
    for (column, header) in headers.iter().enumerate() {
        let table = table.clone();
        let header_for_click = header.clone();
        let column = column as u32;

        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            if let Err(err) = sort_by_column(&table, &header_for_click, column) {
                log::error!("Sorting by column {} failed: {:?}", column, err);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        header.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    Ok(true)
}

fn sort_by_column(table: &Element, header: &Element, column: u32) -> Result<(), JsValue> {
    let Some(tbody) = table.query_selector("tbody")? else {
        return Ok(());
    };
    let tbody: HtmlTableSectionElement = tbody.dyn_into()?;

    let classes = header.class_list();
    let direction = SortDirection::after_click(classes.contains(ASC_CLASS));
    classes.toggle_with_force(ASC_CLASS, direction.is_ascending())?;
    classes.toggle_with_force(DESC_CLASS, !direction.is_ascending())?;

    let body_rows = tbody.rows();
    let mut rows: Vec<(String, HtmlTableRowElement)> =
        Vec::with_capacity(body_rows.length() as usize);
    for i in 0..body_rows.length() {
        let Some(row) = body_rows.item(i) else { continue };
        let row: HtmlTableRowElement = row.dyn_into()?;
        let text = row
            .cells()
            .item(column)
            .and_then(|cell| cell.text_content())
            .unwrap_or_default()
            .trim()
            .to_string();
        rows.push((text, row));
    }

    sort_rows(&mut rows, |(text, _)| text.as_str(), direction, locale_compare);

    // appendChild переносит существующий узел в конец tbody
    for (_, row) in &rows {
        tbody.append_child(row)?;
    }

    log::debug!(
        "Inventory sorted by column {} ({:?}), {} rows",
        column,
        direction,
        rows.len()
    );
    Ok(())
}

fn locale_compare(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}
