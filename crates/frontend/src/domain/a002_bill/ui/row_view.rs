//! Разметка новой строки счёта.

use contracts::domain::a001_product::catalog::ProductCatalog;
use contracts::domain::a002_bill::draft::{RowKey, PRODUCT_FIELD_NAME, QUANTITY_FIELD_NAME};
use leptos::mount::UnmountHandle;
use leptos::prelude::*;
use leptos::tachys::view::any_view::AnyViewState;
use web_sys::HtmlElement;

/// Атрибут строки с её ключом в [`contracts::domain::a002_bill::draft::BillDraft`]
pub const ROW_KEY_ATTRIBUTE: &str = "data-row-key";

/// Пункты селектора товара: (value, подпись)
pub fn product_options(catalog: &ProductCatalog) -> Vec<(String, String)> {
    catalog
        .iter()
        .map(|p| (p.id.to_string(), p.option_label()))
        .collect()
}

#[component]
fn BillItemRow(
    row_key: RowKey,
    options: Vec<(String, String)>,
    #[prop(into)] item_class: String,
    #[prop(into)] remove_button_class: String,
) -> impl IntoView {
    let row_key_value = row_key.to_string();
    let product_field = row_key.product_field_id();
    let product_label_for = product_field.clone();
    let quantity_field = row_key.quantity_field_id();
    let quantity_label_for = quantity_field.clone();

    view! {
        <div class=item_class data-row-key=row_key_value>
            <div class="form-group">
                <label for=product_label_for>"Product"</label>
                <select name=PRODUCT_FIELD_NAME id=product_field required=true>
                    <option value="">"Select Product"</option>
                    {options
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="form-group">
                <label for=quantity_label_for>"Quantity"</label>
                <input
                    type="number"
                    name=QUANTITY_FIELD_NAME
                    id=quantity_field
                    min="1"
                    required=true
                />
                <button type="button" class=remove_button_class>"Remove"</button>
            </div>
        </div>
    }
}

/// Handle смонтированной строки; его drop убирает строку из DOM
pub type MountedRow = UnmountHandle<AnyViewState>;

/// Дописать строку в конец контейнера
pub fn mount_row(
    container: &HtmlElement,
    row_key: RowKey,
    catalog: &ProductCatalog,
    item_class: &str,
    remove_button_class: &str,
) -> MountedRow {
    let options = product_options(catalog);
    let item_class = item_class.to_string();
    let remove_button_class = remove_button_class.to_string();
    leptos::mount::mount_to(container.clone(), move || {
        let row = view! {
            <BillItemRow
                row_key=row_key
                options=options
                item_class=item_class
                remove_button_class=remove_button_class
            />
        };
        row.into_any()
    })
}
