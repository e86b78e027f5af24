//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! two tables: `order_snapshots` and `tick_summaries`.  A restored warehouse
//! replays tick numbers, so neither table keys on `tick`.

use std::path::Path;

use rusqlite::Connection;

use crate::{OrderSnapshotRow, OutputResult, TickSummaryRow};
use crate::writer::OutputWriter;

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS order_snapshots (
                 tick         INTEGER NOT NULL,
                 order_id     INTEGER NOT NULL,
                 customer_id  INTEGER NOT NULL,
                 status       TEXT    NOT NULL,
                 collector_id INTEGER,
                 driver_id    INTEGER
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick       INTEGER NOT NULL,
                 pending    INTEGER NOT NULL,
                 in_process INTEGER NOT NULL,
                 completed  INTEGER NOT NULL,
                 volunteers INTEGER NOT NULL,
                 assigned   INTEGER NOT NULL,
                 finished   INTEGER NOT NULL,
                 reaped     INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_order_snapshots(&mut self, rows: &[OrderSnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO order_snapshots \
                 (tick, order_id, customer_id, status, collector_id, driver_id) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.tick,
                    row.order_id,
                    row.customer_id,
                    row.status,
                    row.collector_id,
                    row.driver_id,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries \
             (tick, pending, in_process, completed, volunteers, assigned, finished, reaped) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            rusqlite::params![
                row.tick,
                row.pending,
                row.in_process,
                row.completed,
                row.volunteers,
                row.assigned,
                row.finished,
                row.reaped,
            ],
        )?;
        Ok(())
    }

    /// Rows are committed as they are written.
    fn flush(&mut self) -> OutputResult<()> {
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
