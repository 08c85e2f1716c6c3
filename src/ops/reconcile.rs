use tracing::{debug, warn};

use crate::io::store::{StoreError, TodoStore};
use crate::model::TodoId;

use super::projection::DisplaySequence;

/// Outcome of writing one batch of positions
#[derive(Debug, Default)]
pub struct ReconcileReport {
    /// Records whose position was written
    pub written: Vec<TodoId>,
    /// Records whose write failed, with the error
    pub failed: Vec<(TodoId, StoreError)>,
}

impl ReconcileReport {
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Positions to persist: every item slot gets its absolute slot index.
/// The separator's index is skipped, leaving a gap before completed items.
pub fn plan_positions(seq: &DisplaySequence) -> Vec<(TodoId, i64)> {
    seq.items().map(|(i, record)| (record.id, i as i64)).collect()
}

/// Write the sequence's order back to the store.
///
/// Every planned update is attempted. A failed write is logged and
/// recorded in the report but does not stop the rest of the batch; the
/// caller reloads from the store afterwards either way.
pub fn reconcile(store: &dyn TodoStore, seq: &DisplaySequence) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    for (id, position) in plan_positions(seq) {
        match store.update_position(id, position) {
            Ok(()) => report.written.push(id),
            Err(e) => {
                warn!(todo = %id, position, error = %e, "failed to save position");
                report.failed.push((id, e));
            }
        }
    }
    debug!(
        written = report.written.len(),
        failed = report.failed.len(),
        "positions reconciled"
    );
    report
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::super::move_session::{Direction, MoveState};
    use super::super::projection::fixtures::*;
    use super::*;
    use crate::io::store::SqliteStore;
    use crate::io::store::flaky::FlakyStore;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Seed A(active,0), B(active,1), C(completed,0) into a store
    fn seed(store: &dyn TodoStore) -> (TodoId, TodoId, TodoId) {
        let a = store.insert("A", day(), 0).unwrap();
        let b = store.insert("B", day(), 1).unwrap();
        let c = store.insert("C", day(), 0).unwrap();
        store.update_completed(c, true).unwrap();
        (a, b, c)
    }

    fn load(store: &dyn TodoStore) -> DisplaySequence {
        DisplaySequence::project(store.query_by_date(day()).unwrap())
    }

    #[test]
    fn plan_uses_absolute_slot_indices() {
        let seq = DisplaySequence::project(abc());
        assert_eq!(
            plan_positions(&seq),
            vec![(TodoId(1), 0), (TodoId(2), 1), (TodoId(3), 3)]
        );
    }

    #[test]
    fn plan_for_empty_sequence_is_empty() {
        assert!(plan_positions(&DisplaySequence::default()).is_empty());
    }

    #[test]
    fn move_then_reconcile_round_trips() {
        let store = SqliteStore::open_in_memory().unwrap();
        let (a, b, c) = seed(&store);

        let mut seq = load(&store);
        let mut state = MoveState::default();
        assert!(state.begin(&seq, 1));
        state.step(&mut seq, Direction::Up);
        state.step(&mut seq, Direction::Up);
        assert_eq!(state.confirm(), Some(0));

        let report = reconcile(&store, &seq);
        assert!(report.is_clean());
        assert_eq!(report.written.len(), 3);

        let reloaded = load(&store);
        assert_eq!(labels(&reloaded), vec!["B", "A", "--", "C"]);
        let positions: Vec<(TodoId, i64)> = reloaded
            .items()
            .map(|(_, r)| (r.id, r.position))
            .collect();
        assert_eq!(positions, vec![(b, 0), (a, 1), (c, 3)]);
    }

    #[test]
    fn zero_step_confirm_keeps_order() {
        let store = SqliteStore::open_in_memory().unwrap();
        seed(&store);
        let before = load(&store);

        let mut seq = before.clone();
        let mut state = MoveState::default();
        assert!(state.begin(&seq, 0));
        state.confirm();
        reconcile(&store, &seq);

        seq = load(&store);
        assert_eq!(labels(&seq), labels(&before));
    }

    #[test]
    fn failed_write_does_not_block_siblings() {
        let inner = SqliteStore::open_in_memory().unwrap();
        let (a, b, c) = seed(&inner);
        let mut store = FlakyStore::new(inner);
        store.fail_positions.insert(b);

        let mut seq = load(&store);
        let mut state = MoveState::default();
        assert!(state.begin(&seq, 0));
        state.step(&mut seq, Direction::Down);

        let report = reconcile(&store, &seq);
        assert!(!report.is_clean());
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, b);
        assert_eq!(report.written, vec![a, c]);
        assert_eq!(store.attempts.borrow().len(), 3);

        // A was written at 1, B kept its stored 1: the tie resolves by id,
        // so the store's order is the degraded-but-consistent truth.
        let reloaded = load(&store);
        assert_eq!(labels(&reloaded), vec!["A", "B", "--", "C"]);
    }
}
