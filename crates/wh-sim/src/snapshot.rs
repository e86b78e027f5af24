//! Whole-warehouse snapshots for backup and restore.

use wh_core::Tick;

use crate::Warehouse;
use crate::warehouse::State;

/// An independently owned deep copy of every store, the volunteer registry,
/// the customers, all id counters, and the clock.
///
/// A snapshot shares nothing with the warehouse it came from; later ticks on
/// the live warehouse never show up in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    state: State,
}

impl Snapshot {
    /// Tick the source warehouse was at when the snapshot was taken.
    #[inline]
    pub fn tick(&self) -> Tick {
        self.state.clock.current_tick
    }

    /// Total orders across the three stores.
    pub fn order_count(&self) -> usize {
        self.state.pending.len() + self.state.in_process.len() + self.state.completed.len()
    }
}

impl Warehouse {
    /// Capture the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot { state: self.state.clone() }
    }

    /// Replace the live state with `snapshot` in a single assignment.
    ///
    /// `config` is not part of the snapshot and is left as is.
    pub fn restore(&mut self, snapshot: Snapshot) {
        self.state = snapshot.state;
        tracing::debug!(tick = self.current_tick().0, "state restored from snapshot");
    }
}
