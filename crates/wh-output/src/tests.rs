//! Integration tests for wh-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{OrderSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(order_id: u32, tick: u64) -> OrderSnapshotRow {
        OrderSnapshotRow {
            tick,
            order_id,
            customer_id:  order_id % 2,
            status:       "COLLECTING",
            collector_id: Some(3),
            driver_id:    None,
        }
    }

    fn summary_row(tick: u64) -> TickSummaryRow {
        TickSummaryRow {
            tick,
            pending:    2,
            in_process: 1,
            completed:  tick,
            volunteers: 4,
            assigned:   1,
            finished:   0,
            reaped:     0,
        }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("order_snapshots.csv").exists());
        assert!(dir.path().join("tick_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("order_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["tick", "order_id", "customer_id", "status", "collector_id", "driver_id"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers2,
            ["tick", "pending", "in_process", "completed", "volunteers", "assigned", "finished", "reaped"]
        );
    }

    #[test]
    fn csv_snapshot_rows_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_order_snapshots(&[snap_row(0, 5), snap_row(1, 5)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("order_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[1][1], "1");          // order_id
        assert_eq!(&rows[1][3], "COLLECTING"); // status
        assert_eq!(&rows[1][4], "3");          // collector_id
        assert_eq!(&rows[1][5], "");           // no driver yet
    }

    #[test]
    fn csv_tick_summary_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3"); // tick
        assert_eq!(&rows[0][3], "3"); // completed
        assert_eq!(&rows[0][4], "4"); // volunteers
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        use wh_core::{CustomerId, SimConfig, VolunteerId};
        use wh_model::{Customer, CustomerKind, Volunteer};
        use wh_sim::WarehouseBuilder;

        use crate::observer::SimOutputObserver;

        let config = SimConfig { total_ticks: 6, output_interval_ticks: 2 };
        let mut warehouse = WarehouseBuilder::new(config)
            .customers(vec![Customer::new(CustomerId(0), "ana", CustomerKind::Civilian, 4, 2)])
            .volunteers(vec![
                Volunteer::collector(VolunteerId(0), "cal", 1),
                Volunteer::driver(VolunteerId(1), "dee", 10, 2),
            ])
            .build()
            .unwrap();
        warehouse.place_order(CustomerId(0)).unwrap();
        warehouse.place_order(CustomerId(0)).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        warehouse.run(&mut obs);
        assert!(obs.finish().is_ok(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        assert_eq!(rdr.records().count(), 6);

        // output_interval = 2 → snapshots at ticks 0, 2, 4; two orders each.
        let mut rdr = csv::Reader::from_path(dir.path().join("order_snapshots.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6, "expected 3 ticks × 2 orders = 6 snapshot rows, got {}", rows.len());
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[5][0], "4");
    }
}

#[cfg(test)]
mod observer_tests {
    use wh_core::Tick;
    use wh_sim::{SimObserver, TickSummary};

    use crate::observer::SimOutputObserver;
    use crate::row::{OrderSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;
    use crate::{OutputError, OutputResult};

    /// Accepts `ok_writes` summaries, then fails every call.
    struct Flaky {
        ok_writes: usize,
        written:   Vec<TickSummaryRow>,
        flushes:   usize,
    }

    impl OutputWriter for Flaky {
        fn write_order_snapshots(&mut self, _rows: &[OrderSnapshotRow]) -> OutputResult<()> {
            Ok(())
        }

        fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
            if self.written.len() == self.ok_writes {
                return Err(OutputError::Io(std::io::Error::other(format!("disk full at {}", row.tick))));
            }
            self.written.push(*row);
            Ok(())
        }

        fn flush(&mut self) -> OutputResult<()> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn summary(tick: u64) -> TickSummary {
        TickSummary { tick: Tick(tick), ..TickSummary::default() }
    }

    #[test]
    fn keeps_first_error_only() {
        let mut obs = SimOutputObserver::new(Flaky { ok_writes: 1, written: vec![], flushes: 0 });
        for t in 0..3 {
            obs.on_tick_end(&summary(t));
        }
        let err = obs.take_error().expect("error stored");
        assert!(err.to_string().contains("disk full at 1"));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn sim_end_flushes_without_finishing() {
        let mut obs = SimOutputObserver::new(Flaky { ok_writes: 10, written: vec![], flushes: 0 });
        obs.on_tick_end(&summary(0));
        obs.on_sim_end(Tick(1));
        obs.on_tick_end(&summary(1));
        obs.on_sim_end(Tick(2));
        assert!(obs.finish().is_ok());

        let writer = obs.into_writer();
        assert_eq!(writer.written.len(), 2);
        assert_eq!(writer.flushes, 3);
    }

    #[test]
    fn finish_reports_stored_error() {
        let mut obs = SimOutputObserver::new(Flaky { ok_writes: 0, written: vec![], flushes: 0 });
        obs.on_tick_end(&summary(0));
        assert!(obs.finish().is_err());
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{OrderSnapshotRow, TickSummaryRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("output.db").exists());
    }

    #[test]
    fn sqlite_snapshot_nulls_for_unassigned() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows = vec![
            OrderSnapshotRow { tick: 2, order_id: 0, customer_id: 0, status: "PENDING",    collector_id: None,    driver_id: None },
            OrderSnapshotRow { tick: 2, order_id: 1, customer_id: 1, status: "DELIVERING", collector_id: Some(0), driver_id: Some(3) },
        ];
        w.write_order_snapshots(&rows).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM order_snapshots WHERE collector_id IS NULL", [], |r| r.get(0)
        ).unwrap();
        assert_eq!(count, 1);

        let (status, driver): (String, i64) = conn.query_row(
            "SELECT status, driver_id FROM order_snapshots WHERE order_id = 1",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(status, "DELIVERING");
        assert_eq!(driver, 3);
    }

    #[test]
    fn sqlite_repeated_ticks_allowed() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let row = TickSummaryRow {
            tick: 7, pending: 1, in_process: 2, completed: 3, volunteers: 4, assigned: 5, finished: 6, reaped: 0,
        };
        w.write_tick_summary(&row).unwrap();
        w.write_tick_summary(&row).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("output.db")).unwrap();
        let (count, completed): (i64, i64) = conn.query_row(
            "SELECT COUNT(*), MAX(completed) FROM tick_summaries WHERE tick = 7",
            [],
            |r| Ok((r.get(0)?, r.get(1)?)),
        ).unwrap();
        assert_eq!(count, 2);
        assert_eq!(completed, 3);
    }
}
