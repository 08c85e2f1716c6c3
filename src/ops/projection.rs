use crate::model::{Partition, TodoId, TodoRecord};

/// One row of the day view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Item(TodoRecord),
    /// Boundary between active and completed items. Never carries a record.
    Separator,
}

impl Slot {
    pub fn record(&self) -> Option<&TodoRecord> {
        match self {
            Slot::Item(record) => Some(record),
            Slot::Separator => None,
        }
    }

    pub fn is_separator(&self) -> bool {
        matches!(self, Slot::Separator)
    }
}

/// A day's todos in display order: active items, then (if any completed
/// items exist) one separator, then completed items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplaySequence {
    slots: Vec<Slot>,
}

impl DisplaySequence {
    /// Build the display order for one day's records.
    ///
    /// Each partition is sorted by `position`; the sort is stable, so records
    /// sharing a position keep the order they were given in.
    pub fn project(records: Vec<TodoRecord>) -> Self {
        let (mut active, mut completed): (Vec<TodoRecord>, Vec<TodoRecord>) =
            records.into_iter().partition(|r| !r.completed);
        active.sort_by_key(|r| r.position);
        completed.sort_by_key(|r| r.position);

        let mut slots: Vec<Slot> = Vec::with_capacity(active.len() + completed.len() + 1);
        slots.extend(active.into_iter().map(Slot::Item));
        if !completed.is_empty() {
            slots.push(Slot::Separator);
            slots.extend(completed.into_iter().map(Slot::Item));
        }
        DisplaySequence { slots }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The record at `index`, or None for the separator / out of range
    pub fn record_at(&self, index: usize) -> Option<&TodoRecord> {
        self.slots.get(index).and_then(Slot::record)
    }

    /// Number of real items (excludes the separator)
    pub fn item_count(&self) -> usize {
        self.slots.iter().filter(|s| !s.is_separator()).count()
    }

    pub fn separator_index(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_separator)
    }

    pub fn position_of(&self, id: TodoId) -> Option<usize> {
        self.slots
            .iter()
            .position(|s| s.record().is_some_and(|r| r.id == id))
    }

    /// Partition of the item at `index`
    pub fn partition_at(&self, index: usize) -> Option<Partition> {
        self.record_at(index).map(TodoRecord::partition)
    }

    /// Item slots with their slot index, in display order
    pub fn items(&self) -> impl Iterator<Item = (usize, &TodoRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.record().map(|r| (i, r)))
    }

    /// Swap two slots in place. Rule checking is the caller's job.
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.slots.swap(a, b);
    }
}
