//! Handle'ы строк, добавленных на клиенте, по ключу строки.

use contracts::domain::a002_bill::draft::RowKey;
use std::collections::HashMap;

#[derive(Debug)]
pub struct MountedRows<H> {
    handles: HashMap<RowKey, H>,
}

impl<H> Default for MountedRows<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H> MountedRows<H> {
    pub fn insert(&mut self, key: RowKey, handle: H) {
        self.handles.insert(key, handle);
    }

    /// Освободить handle строки. `false`, если строка отрисована сервером.
    pub fn release(&mut self, key: RowKey) -> bool {
        self.handles.remove(&key).is_some()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
