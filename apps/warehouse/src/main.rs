//! warehouse — interactive order-routing simulation.
//!
//! ```text
//! warehouse <config_path> [--output-dir DIR]
//! ```
//!
//! Loads customers and volunteers from the setup file, then reads one command
//! per line from stdin until `close` or end of input.  With `--output-dir`,
//! every tick is also written to `tick_summaries.csv` and
//! `order_snapshots.csv` in DIR (`output.db` when built with `sqlite`).
//!
//! Logs go to stderr; set `RUST_LOG` to change the level (default `warn`).

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wh_action::Session;
use wh_core::SimConfig;
use wh_output::SimOutputObserver;
use wh_sim::{NoopObserver, SimObserver, Warehouse};

// ── Constants ─────────────────────────────────────────────────────────────────

const USAGE: &str = "usage: warehouse <config_path> [--output-dir DIR]";

/// Order snapshots are written every tick when output is enabled.
const OUTPUT_INTERVAL_TICKS: u64 = 1;

// ── Arguments ─────────────────────────────────────────────────────────────────

struct Args {
    config_path: PathBuf,
    output_dir:  Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut config_path = None;
    let mut output_dir = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--output-dir" => {
                let dir = args.next().context("--output-dir needs a directory")?;
                output_dir = Some(PathBuf::from(dir));
            }
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            path if config_path.is_none() => config_path = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument {extra}\n{USAGE}"),
        }
    }

    Ok(Args {
        config_path: config_path.context(USAGE)?,
        output_dir,
    })
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = SimConfig {
        total_ticks:           0,
        output_interval_ticks: if args.output_dir.is_some() { OUTPUT_INTERVAL_TICKS } else { 0 },
    };
    let warehouse = Warehouse::from_config_file(&args.config_path, config)
        .with_context(|| format!("loading {}", args.config_path.display()))?;
    info!(
        customers = warehouse.customers().len(),
        volunteers = warehouse.volunteers().len(),
        "setup loaded"
    );

    let mut session = Session::new(warehouse);

    let stdin = io::stdin();
    match &args.output_dir {
        None => repl(&mut session, stdin.lock(), &mut NoopObserver),
        Some(dir) => {
            std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            let mut obs = SimOutputObserver::new(open_writer(dir)?);
            repl(&mut session, stdin.lock(), &mut obs)?;
            obs.finish().context("writing simulation output")?;
            info!(dir = %dir.display(), "output written");
            Ok(())
        }
    }
}

#[cfg(not(feature = "sqlite"))]
fn open_writer(dir: &Path) -> Result<wh_output::CsvWriter> {
    Ok(wh_output::CsvWriter::new(dir)?)
}

#[cfg(feature = "sqlite")]
fn open_writer(dir: &Path) -> Result<wh_output::SqliteWriter> {
    Ok(wh_output::SqliteWriter::new(dir)?)
}

/// Read commands until `close` or end of input.
fn repl<O: SimObserver>(session: &mut Session, input: impl BufRead, observer: &mut O) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Warehouse is open!")?;

    let mut lines = input.lines();
    while session.is_open() {
        write!(stdout, "Enter an action: ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        match session.execute_line(&line, observer) {
            Ok(output) => stdout.write_all(output.as_bytes())?,
            Err(err) => writeln!(stdout, "Error: {err}")?,
        }
    }

    info!(
        tick = session.warehouse().current_tick().0,
        actions = session.log().len(),
        "session ended"
    );
    Ok(())
}
