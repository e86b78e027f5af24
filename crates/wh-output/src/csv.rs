//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `order_snapshots.csv`
//! - `tick_summaries.csv`
//!
//! Unassigned collector/driver ids are written as empty fields.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::{OrderSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("order_snapshots.csv"))?;
        snapshots.write_record(["tick", "order_id", "customer_id", "status", "collector_id", "driver_id"])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick", "pending", "in_process", "completed", "volunteers", "assigned", "finished", "reaped",
        ])?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

fn opt(id: Option<u32>) -> String {
    id.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_order_snapshots(&mut self, rows: &[OrderSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.order_id.to_string(),
                row.customer_id.to_string(),
                row.status.to_owned(),
                opt(row.collector_id),
                opt(row.driver_id),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.pending.to_string(),
            row.in_process.to_string(),
            row.completed.to_string(),
            row.volunteers.to_string(),
            row.assigned.to_string(),
            row.finished.to_string(),
            row.reaped.to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.flush()
    }
}
