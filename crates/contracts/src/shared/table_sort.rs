//! Сортировка строк таблицы по тексту ячеек колонки.
//!
//! Если оба значения числовые, сравниваются как числа, иначе через
//! переданную функцию сравнения строк (в браузере это `localeCompare`).

use std::cmp::Ordering;

/// Класс заголовка при сортировке по возрастанию
pub const ASC_CLASS: &str = "asc";
/// Класс заголовка при сортировке по убыванию
pub const DESC_CLASS: &str = "desc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Направление после клика по заголовку.
    ///
    /// Первый клик даёт возрастание, повторные чередуют направление.
    pub fn after_click(currently_ascending: bool) -> Self {
        if currently_ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }

    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// Числовое значение ячейки по правилам `Number(text)`.
///
/// Пустая ячейка считается нулём.
pub fn numeric_value(text: &str) -> Option<f64> {
    let s = text.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        // from_str_radix допускает знак после префикса, Number("0x+1") нет
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok().map(|v| v as f64);
    }

    // Rust принимает "inf" и "NaN", Number() их не принимает
    if s.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Сравнение двух ячеек по возрастанию
pub fn compare_cells<C>(a: &str, b: &str, collate: C) -> Ordering
where
    C: Fn(&str, &str) -> Ordering,
{
    match (numeric_value(a), numeric_value(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => collate(a, b),
    }
}

/// Стабильная сортировка строк по тексту ячейки.
///
/// Для колонки из чисел и текста сравнение не транзитивно ("9" < "10",
/// "10" < "1a", "1a" < "9"). `slice::sort_by` на таком сравнении может
/// паниковать, сортировка слиянием ниже нет.
pub fn sort_rows<T, F, C>(rows: &mut Vec<T>, cell_text: F, direction: SortDirection, collate: C)
where
    F: Fn(&T) -> &str,
    C: Fn(&str, &str) -> Ordering,
{
    let compare =
        |a: &T, b: &T| direction.apply(compare_cells(cell_text(a), cell_text(b), &collate));
    let items = std::mem::take(rows);
    *rows = merge_sort(items, &compare);
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare);
    let right = merge_sort(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        // при равенстве берётся левый элемент, это сохраняет стабильность
        if take_right {
            merged.extend(right.next());
        } else {
            merged.extend(left.next());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caseless_collate(a: &str, b: &str) -> Ordering {
        a.to_lowercase()
            .cmp(&b.to_lowercase())
            .then_with(|| a.cmp(b))
    }

    fn sorted(values: &[&str], direction: SortDirection) -> Vec<String> {
        let mut rows: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        sort_rows(&mut rows, |r| r.as_str(), direction, caseless_collate);
        rows
    }

    #[test]
    fn test_numeric_cells_sort_numerically() {
        assert_eq!(
            sorted(&["10", "9", "100", "2.5"], SortDirection::Ascending),
            vec!["2.5", "9", "10", "100"]
        );
    }

    #[test]
    fn test_text_cells_sort_lexicographically() {
        assert_eq!(
            sorted(&["Banana", "apple", "Cherry"], SortDirection::Ascending),
            vec!["apple", "Banana", "Cherry"]
        );
        assert_eq!(
            sorted(&["Banana", "Apple"], SortDirection::Ascending),
            vec!["Apple", "Banana"]
        );
    }

    #[test]
    fn test_descending_is_reverse_of_ascending() {
        let values = ["Paracetamol", "Amoxicillin", "Ibuprofen", "Cetirizine"];
        let asc = sorted(&values, SortDirection::Ascending);
        let mut desc = sorted(&values, SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);

        let numbers = ["5", "12", "0.5", "7"];
        let asc = sorted(&numbers, SortDirection::Ascending);
        let mut desc = sorted(&numbers, SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut rows = vec![("3", 'a'), ("1", 'b'), ("3", 'c'), ("1", 'd')];
        sort_rows(&mut rows, |r| r.0, SortDirection::Ascending, caseless_collate);
        let order: Vec<char> = rows.iter().map(|r| r.1).collect();
        assert_eq!(order, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn test_numeric_value_follows_number_rules() {
        assert_eq!(numeric_value(" 42 "), Some(42.0));
        assert_eq!(numeric_value(""), Some(0.0));
        assert_eq!(numeric_value("1e3"), Some(1000.0));
        assert_eq!(numeric_value("0x1F"), Some(31.0));
        assert_eq!(numeric_value("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(numeric_value("inf"), None);
        assert_eq!(numeric_value("NaN"), None);
        assert_eq!(numeric_value("12 tabs"), None);
        assert_eq!(numeric_value("2024-01-05"), None);
        assert_eq!(numeric_value("0x+1"), None);
        assert_eq!(numeric_value("0x-1"), None);
        assert_eq!(numeric_value("0x"), None);
        assert_eq!(numeric_value("0b102"), None);
    }

    #[test]
    fn test_direction_after_click() {
        let first = SortDirection::after_click(false);
        assert_eq!(first, SortDirection::Ascending);
        let second = SortDirection::after_click(first.is_ascending());
        assert_eq!(second, SortDirection::Descending);
        assert_eq!(SortDirection::after_click(second.is_ascending()), first);
    }

    #[test]
    fn test_mixed_column_sorts_without_panicking() {
        let pool = ["9", "10", "1a", "N/A", "100", "2b", "", "05", "x9", "3"];
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
        for _ in 0..200 {
            let mut column: Vec<String> = (0..40)
                .map(|_| {
                    seed ^= seed << 13;
                    seed ^= seed >> 7;
                    seed ^= seed << 17;
                    pool[(seed % pool.len() as u64) as usize].to_string()
                })
                .collect();
            let mut expected = column.clone();
            expected.sort();

            sort_rows(&mut column, |r| r.as_str(), SortDirection::Ascending, caseless_collate);

            let mut rows_after = column.clone();
            rows_after.sort();
            assert_eq!(rows_after, expected);
        }
    }

    #[test]
    fn test_mixed_cells_fall_back_to_collation() {
        assert_eq!(compare_cells("10", "9", caseless_collate), Ordering::Greater);
        assert_eq!(compare_cells("10", "n/a", caseless_collate), Ordering::Less);
    }
}
