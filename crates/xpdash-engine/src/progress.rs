use xpdash_types::ProgressRecord;

/// Graded progress records with a navigable cursor, newest first.
///
/// The cursor clamps at both ends (no wraparound) and navigation is a
/// no-op while the history is empty.
#[derive(Debug, Clone, Default)]
pub struct ProgressHistory {
    items: Vec<ProgressRecord>,
    cursor: usize,
}

impl ProgressHistory {
    /// Keep graded records only, sorted descending by creation time, with
    /// the cursor on the newest record.
    pub fn from_records(records: Vec<ProgressRecord>) -> Self {
        let mut items: Vec<ProgressRecord> = records
            .into_iter()
            .filter(|record| record.grade.is_some())
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Self { items, cursor: 0 }
    }

    /// The record under the cursor; `None` when no graded records exist.
    pub fn current(&self) -> Option<&ProgressRecord> {
        self.items.get(self.cursor)
    }

    /// Step toward older records. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.cursor + 1 < self.items.len() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Step back toward the newest record. Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Cursor position, undefined while empty.
    pub fn position(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[ProgressRecord] {
        &self.items
    }
}
