//! Состояние раскрывающихся панелей (триггер с `aria-expanded`).

/// Класс свёрнутой панели
pub const COLLAPSED_CLASS: &str = "collapse";
/// Класс раскрытой панели
pub const SHOWN_CLASS: &str = "show";

/// Отсутствующий атрибут считается свёрнутым состоянием
pub fn is_expanded(aria_expanded: Option<&str>) -> bool {
    aria_expanded == Some("true")
}

/// Новое значение `aria-expanded` после клика по триггеру
pub fn toggled_aria_expanded(aria_expanded: Option<&str>) -> &'static str {
    if is_expanded(aria_expanded) {
        "false"
    } else {
        "true"
    }
}
