//! Раскрывающиеся панели деталей счёта на странице истории.
//!
//! Триггер `[data-toggle="collapse"]` ссылается на панель селектором из
//! `data-target`. Клик переключает пару классов `collapse`/`show` у панели
//! и `aria-expanded` у триггера. Пары триггер/панель независимы.

use crate::config::FrontendConfig;
use crate::shared::dom::elements;
use contracts::shared::collapse::{toggled_aria_expanded, COLLAPSED_CLASS, SHOWN_CLASS};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

const TARGET_ATTRIBUTE: &str = "data-target";
const EXPANDED_ATTRIBUTE: &str = "aria-expanded";

/// Навесить обработчики на все триггеры страницы. Возвращает их количество.
pub fn attach_collapse_toggles(
    document: &Document,
    config: &FrontendConfig,
) -> Result<usize, JsValue> {
    let triggers = elements(&document.query_selector_all(&config.collapse_trigger_selector)?);

    for trigger in &triggers {
        let document = document.clone();
        let trigger_for_click = trigger.clone();

        let on_click = Closure::wrap(Box::new(move |_: MouseEvent| {
            if let Err(err) = toggle_panel(&document, &trigger_for_click) {
                log::error!("Collapse toggle failed: {:?}", err);
            }
        }) as Box<dyn FnMut(MouseEvent)>);

        trigger.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }

    if !triggers.is_empty() {
        log::debug!("Collapse toggles attached: {}", triggers.len());
    }
    Ok(triggers.len())
}

fn toggle_panel(document: &Document, trigger: &Element) -> Result<(), JsValue> {
    let Some(selector) = trigger.get_attribute(TARGET_ATTRIBUTE) else {
        log::warn!("Collapse trigger has no {} attribute", TARGET_ATTRIBUTE);
        return Ok(());
    };
    let Some(panel) = document.query_selector(&selector)? else {
        log::warn!("Collapse target not found: {}", selector);
        return Ok(());
    };

    let expanded = toggled_aria_expanded(trigger.get_attribute(EXPANDED_ATTRIBUTE).as_deref());
    trigger.set_attribute(EXPANDED_ATTRIBUTE, expanded)?;

    let classes = panel.class_list();
    classes.toggle(COLLAPSED_CLASS)?;
    classes.toggle(SHOWN_CLASS)?;
    Ok(())
}
