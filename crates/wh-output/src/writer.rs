//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OrderSnapshotRow, OutputResult, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// surfaced by its `take_error`/`finish`.
pub trait OutputWriter {
    /// Write a batch of order snapshots.
    fn write_order_snapshots(&mut self, rows: &[OrderSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Push buffered rows to disk.  Called at the end of every run; more rows
    /// may follow.
    fn flush(&mut self) -> OutputResult<()>;

    /// Flush and close.  Idempotent; no rows may be written afterwards.
    fn finish(&mut self) -> OutputResult<()> {
        self.flush()
    }
}
