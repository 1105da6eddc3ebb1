//! Перед отправкой формы записывает позиции счёта в скрытое поле `items`.
//!
//! Сервер читает из него JSON `[{"id": .., "quantity": ..}]` и отклоняет
//! счёт без позиций, поэтому пустой счёт не отправляется вовсе. Формы без
//! скрытого поля отправляются как есть.

use super::editor::BillItemEditor;
use contracts::domain::a002_bill::payload::{payload_json, PayloadError, PAYLOAD_FIELD_NAME};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlInputElement};

pub fn attach(
    container: &HtmlElement,
    editor: Rc<RefCell<BillItemEditor>>,
) -> Result<(), JsValue> {
    let Some(form) = container.closest("form")? else {
        return Ok(());
    };

    let form_for_submit = form.clone();
    let on_submit = Closure::wrap(Box::new(move |e: Event| {
        if let Err(err) = handle_submit(&form_for_submit, &editor.borrow(), &e) {
            log::error!("Failed to prepare bill items for submit: {:?}", err);
        }
    }) as Box<dyn FnMut(Event)>);
    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();
    Ok(())
}

fn handle_submit(form: &Element, editor: &BillItemEditor, event: &Event) -> Result<(), JsValue> {
    let Some(field) = form
        .query_selector(&format!("input[name=\"{}\"]", PAYLOAD_FIELD_NAME))?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(());
    };

    let invalid_class = &editor.config().invalid_class;
    let lines = editor.read_lines()?;
    match payload_json(&lines, editor.catalog()) {
        Ok(json) => {
            field.set_value(&json);
            editor.container().class_list().remove_1(invalid_class)?;
            log::info!("Submitting bill with payload {}", json);
        }
        Err(err @ PayloadError::Empty) => {
            event.prevent_default();
            editor.container().class_list().add_1(invalid_class)?;
            log::warn!("{}", err);
        }
        Err(err) => {
            event.prevent_default();
            log::error!("{}", err);
        }
    }
    Ok(())
}
