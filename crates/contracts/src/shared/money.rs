/// Форматирует сумму с ровно двумя знаками после точки, без разделителей: "230.00"
pub fn format_amount(value: f64) -> String {
    // -0.0 печатается как "-0.00"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.2}", value)
}
