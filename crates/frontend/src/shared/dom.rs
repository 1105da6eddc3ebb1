//! Мелкие помощники поверх web-sys.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, NodeList};

/// Элементы из `NodeList`, пропуская узлы, которые не являются `Element`
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Элемент, на котором произошло событие
pub fn event_target_element(event: &Event) -> Option<Element> {
    event.target().and_then(|t| t.dyn_into::<Element>().ok())
}

/// Значение CSS `display` для элемента
pub fn set_display(element: &Element, display: &str) -> Result<(), JsValue> {
    match element.dyn_ref::<HtmlElement>() {
        Some(el) => el.style().set_property("display", display),
        None => Ok(()),
    }
}
