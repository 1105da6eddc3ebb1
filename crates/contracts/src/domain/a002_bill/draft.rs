//! Модель строк составляемого счёта.
//!
//! Отражает порядок отрисованных строк `.bill-item`. Ключ строки растёт
//! монотонно и после удаления не переиспользуется, поэтому идентификаторы
//! `items-N` / `quantities-N` на странице остаются уникальными.

use std::fmt;

/// Имя поля селектора товара в форме счёта
pub const PRODUCT_FIELD_NAME: &str = "items[]";
/// Имя поля количества в форме счёта
pub const QUANTITY_FIELD_NAME: &str = "quantities[]";

const PRODUCT_FIELD_PREFIX: &str = "items-";
const QUANTITY_FIELD_PREFIX: &str = "quantities-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowKey(pub usize);

impl RowKey {
    /// `id` селектора товара этой строки
    pub fn product_field_id(&self) -> String {
        format!("{}{}", PRODUCT_FIELD_PREFIX, self.0)
    }

    /// `id` поля количества этой строки
    pub fn quantity_field_id(&self) -> String {
        format!("{}{}", QUANTITY_FIELD_PREFIX, self.0)
    }

    /// Обратное к [`RowKey::product_field_id`]: "items-3" -> 3
    pub fn from_product_field_id(id: &str) -> Option<Self> {
        id.strip_prefix(PRODUCT_FIELD_PREFIX)?
            .parse::<usize>()
            .ok()
            .map(Self)
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Упорядоченный список строк счёта и счётчик следующего ключа
#[derive(Debug, Clone, Default)]
pub struct BillDraft {
    rows: Vec<RowKey>,
    next_key: usize,
}

impl BillDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Принять строки, уже отрисованные сервером.
    ///
    /// Для каждой строки передаётся номер из её `items-N`, если он есть.
    /// Строки без номера или с повторяющимся номером получают новый ключ.
    pub fn from_rendered<I>(rendered: I) -> Self
    where
        I: IntoIterator<Item = Option<usize>>,
    {
        let hints: Vec<Option<usize>> = rendered.into_iter().collect();
        let mut next_key = hints.iter().flatten().map(|n| n + 1).max().unwrap_or(0);
        let mut rows: Vec<RowKey> = Vec::with_capacity(hints.len());

        for hint in hints {
            let key = match hint {
                Some(n) if !rows.contains(&RowKey(n)) => RowKey(n),
                _ => {
                    let key = RowKey(next_key);
                    next_key += 1;
                    key
                }
            };
            rows.push(key);
        }

        Self { rows, next_key }
    }

    /// Добавить строку в конец, вернуть её ключ
    pub fn add_row(&mut self) -> RowKey {
        let key = RowKey(self.next_key);
        self.next_key += 1;
        self.rows.push(key);
        key
    }

    /// Удалить строку. Возвращает `false`, если такой строки нет.
    pub fn remove_row(&mut self, key: RowKey) -> bool {
        match self.position(key) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn position(&self, key: RowKey) -> Option<usize> {
        self.rows.iter().position(|k| *k == key)
    }

    pub fn rows(&self) -> &[RowKey] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Видимость кнопок удаления по строкам, в порядке отрисовки
    pub fn remove_control_visibility(&self) -> Vec<(RowKey, bool)> {
        let count = self.rows.len();
        self.rows
            .iter()
            .enumerate()
            .map(|(position, key)| (*key, is_remove_control_visible(position, count)))
            .collect()
    }
}

/// Кнопка удаления скрыта только у первой строки, когда она единственная
pub fn is_remove_control_visible(position: usize, row_count: usize) -> bool {
    !(position == 0 && row_count == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_visible(draft: &BillDraft) -> Option<bool> {
        draft.remove_control_visibility().first().map(|(_, v)| *v)
    }

    #[test]
    fn test_single_row_hides_remove_control() {
        let mut draft = BillDraft::new();
        draft.add_row();
        assert_eq!(first_visible(&draft), Some(false));

        draft.add_row();
        let visibility = draft.remove_control_visibility();
        assert_eq!(visibility.len(), 2);
        assert!(visibility.iter().all(|(_, visible)| *visible));
    }

    #[test]
    fn test_first_row_visibility_tracks_row_count() {
        let mut draft = BillDraft::from_rendered([Some(0)]);
        // Случайная последовательность добавлений и удалений
        let script = [true, true, false, true, false, false, true, false, false];
        for add in script {
            if add {
                draft.add_row();
            } else if let Some(last) = draft.rows().last().copied() {
                draft.remove_row(last);
            }
            if let Some(visible) = first_visible(&draft) {
                assert_eq!(visible, draft.row_count() > 1);
            }
        }
    }

    #[test]
    fn test_keys_are_never_reused() {
        let mut draft = BillDraft::from_rendered([Some(0)]);
        let second = draft.add_row();
        assert_eq!(second, RowKey(1));
        assert!(draft.remove_row(second));
        let third = draft.add_row();
        assert_eq!(third, RowKey(2));
        assert_eq!(draft.rows(), &[RowKey(0), RowKey(2)]);
    }

    #[test]
    fn test_remove_keeps_order_contiguous() {
        let mut draft = BillDraft::new();
        let a = draft.add_row();
        let b = draft.add_row();
        let c = draft.add_row();
        assert!(draft.remove_row(b));
        assert_eq!(draft.rows(), &[a, c]);
        assert_eq!(draft.position(c), Some(1));
        assert!(!draft.remove_row(b));
    }

    #[test]
    fn test_remove_last_row_leaves_empty_draft() {
        let mut draft = BillDraft::from_rendered([Some(0)]);
        assert!(draft.remove_row(RowKey(0)));
        assert!(draft.is_empty());
        assert!(!draft.remove_row(RowKey(0)));
        assert_eq!(draft.row_count(), 0);
        assert!(draft.remove_control_visibility().is_empty());
    }

    #[test]
    fn test_from_rendered_resolves_missing_and_duplicate_ids() {
        let draft = BillDraft::from_rendered([Some(4), None, Some(4), Some(1)]);
        assert_eq!(draft.rows(), &[RowKey(4), RowKey(5), RowKey(6), RowKey(1)]);

        let mut draft = draft;
        assert_eq!(draft.add_row(), RowKey(7));
    }

    #[test]
    fn test_field_ids() {
        let key = RowKey(3);
        assert_eq!(key.product_field_id(), "items-3");
        assert_eq!(key.quantity_field_id(), "quantities-3");
        assert_eq!(RowKey::from_product_field_id("items-3"), Some(key));
        assert_eq!(RowKey::from_product_field_id("quantities-3"), None);
        assert_eq!(RowKey::from_product_field_id("items-"), None);
    }
}
