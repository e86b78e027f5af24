//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use tracing::warn;

use wh_core::Tick;
use wh_sim::{SimObserver, TickSummary, Warehouse};

use crate::row::{OrderSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes tick summaries and order snapshots to any
/// [`OutputWriter`] backend.
///
/// Tick summaries are written every tick; order snapshots only on the ticks
/// the warehouse reports through `on_snapshot`.  Errors from the writer are
/// stored internally because `SimObserver` methods have no return value;
/// only the first one is kept.
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Close the writer, returning the first error seen over the whole
    /// lifetime of the observer.
    pub fn finish(&mut self) -> OutputResult<()> {
        let result = self.writer.finish();
        self.store_err(result);
        match self.take_error() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, warehouse: &Warehouse) {
        let rows: Vec<OrderSnapshotRow> = warehouse
            .all_orders()
            .map(|order| OrderSnapshotRow::new(tick.0, order))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_order_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
