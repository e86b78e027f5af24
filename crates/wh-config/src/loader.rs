//! Setup file loader.
//!
//! # Format
//!
//! One entity per line, whitespace-separated tokens.  Lines starting with `#`
//! and blank lines are skipped.
//!
//! ```text
//! # customers
//! customer Moshe soldier 3 2
//! customer Ron civilian 7 1
//! # volunteers
//! volunteer Tamar collector 2
//! volunteer Ng limited_collector 3 2
//! volunteer Din driver 10 4
//! volunteer Jay limited_driver 7 3 1
//! ```
//!
//! | Role                | Parameters                                          |
//! |---------------------|-----------------------------------------------------|
//! | `collector`         | `cooldown`                                          |
//! | `limited_collector` | `cooldown max_orders`                               |
//! | `driver`            | `max_distance distance_per_step`                    |
//! | `limited_driver`    | `max_distance distance_per_step max_orders`         |
//!
//! Tokenising is delegated to the `csv` crate with a space delimiter; runs of
//! spaces produce empty fields, which are dropped.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use wh_core::{CustomerId, VolunteerId};
use wh_model::{Customer, CustomerKind, Volunteer};

use crate::ConfigError;

// ── Output ────────────────────────────────────────────────────────────────────

/// Everything a setup file describes, ids already assigned.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WarehouseSetup {
    /// Customers in file order; `customers[i].id == CustomerId(i)`.
    pub customers:  Vec<Customer>,
    /// Volunteers in file order; `volunteers[i].id == VolunteerId(i)`.
    pub volunteers: Vec<Volunteer>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`WarehouseSetup`] from a file on disk.
pub fn load_config_file(path: &Path) -> Result<WarehouseSetup, ConfigError> {
    let file = std::fs::File::open(path).map_err(ConfigError::Io)?;
    load_config_reader(file)
}

/// Like [`load_config_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_config_reader<R: Read>(reader: R) -> Result<WarehouseSetup, ConfigError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut setup = WarehouseSetup::default();

    for result in csv_reader.records() {
        let record = result?;
        let line = record.position().map_or(0, |p| p.line());
        let tokens: Vec<&str> = record.iter().filter(|t| !t.is_empty()).collect();

        match tokens.first().copied() {
            None => continue,
            Some("customer") => {
                let id = CustomerId::try_from(setup.customers.len())
                    .map_err(|e| parse_err(line, e.to_string()))?;
                setup.customers.push(parse_customer(id, &tokens, line)?);
            }
            Some("volunteer") => {
                let id = VolunteerId::try_from(setup.volunteers.len())
                    .map_err(|e| parse_err(line, e.to_string()))?;
                setup.volunteers.push(parse_volunteer(id, &tokens, line)?);
            }
            Some(other) => {
                return Err(parse_err(
                    line,
                    format!("unknown entry {other:?}: expected \"customer\" or \"volunteer\""),
                ));
            }
        }
    }

    debug!(
        customers = setup.customers.len(),
        volunteers = setup.volunteers.len(),
        "setup loaded"
    );
    Ok(setup)
}

// ── Line parsers ──────────────────────────────────────────────────────────────

fn parse_customer(id: CustomerId, tokens: &[&str], line: u64) -> Result<Customer, ConfigError> {
    expect_arity(tokens, 5, line)?;
    let kind: CustomerKind = tokens[2]
        .parse()
        .map_err(|e: wh_core::WhError| parse_err(line, e.to_string()))?;
    let distance   = parse_u32(tokens[3], "distance", line)?;
    let max_orders = parse_u32(tokens[4], "max_orders", line)?;
    Ok(Customer::new(id, tokens[1], kind, distance, max_orders))
}

fn parse_volunteer(id: VolunteerId, tokens: &[&str], line: u64) -> Result<Volunteer, ConfigError> {
    let Some(&role) = tokens.get(2) else {
        return Err(parse_err(line, "volunteer entry is missing its role".to_owned()));
    };
    let name = tokens[1];

    match role {
        "collector" => {
            expect_arity(tokens, 4, line)?;
            let cooldown = parse_u32(tokens[3], "cooldown", line)?;
            Ok(Volunteer::collector(id, name, cooldown))
        }
        "limited_collector" => {
            expect_arity(tokens, 5, line)?;
            let cooldown   = parse_u32(tokens[3], "cooldown", line)?;
            let max_orders = parse_u32(tokens[4], "max_orders", line)?;
            Ok(Volunteer::limited_collector(id, name, cooldown, max_orders))
        }
        "driver" => {
            expect_arity(tokens, 5, line)?;
            let max_distance      = parse_u32(tokens[3], "max_distance", line)?;
            let distance_per_step = parse_step(tokens[4], line)?;
            Ok(Volunteer::driver(id, name, max_distance, distance_per_step))
        }
        "limited_driver" => {
            expect_arity(tokens, 6, line)?;
            let max_distance      = parse_u32(tokens[3], "max_distance", line)?;
            let distance_per_step = parse_step(tokens[4], line)?;
            let max_orders        = parse_u32(tokens[5], "max_orders", line)?;
            Ok(Volunteer::limited_driver(id, name, max_distance, distance_per_step, max_orders))
        }
        other => Err(parse_err(
            line,
            format!(
                "invalid role {other:?}: expected collector, limited_collector, driver, or limited_driver"
            ),
        )),
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Too few tokens is an error; extra trailing tokens are ignored with a warning.
fn expect_arity(tokens: &[&str], n: usize, line: u64) -> Result<(), ConfigError> {
    if tokens.len() < n {
        return Err(parse_err(
            line,
            format!("expected {} parameters after {:?}, found {}", n - 1, tokens[0], tokens.len() - 1),
        ));
    }
    if tokens.len() > n {
        warn!(line, extra = ?&tokens[n..], "ignoring trailing tokens");
    }
    Ok(())
}

fn parse_u32(s: &str, what: &str, line: u64) -> Result<u32, ConfigError> {
    s.parse::<u32>()
        .map_err(|_| parse_err(line, format!("invalid {what} {s:?}: expected a non-negative integer")))
}

/// A driver that covers no distance per tick would never finish an order.
fn parse_step(s: &str, line: u64) -> Result<u32, ConfigError> {
    match parse_u32(s, "distance_per_step", line)? {
        0 => Err(parse_err(line, "distance_per_step must be positive".to_owned())),
        n => Ok(n),
    }
}

fn parse_err(line: u64, message: String) -> ConfigError {
    ConfigError::Parse { line, message }
}
