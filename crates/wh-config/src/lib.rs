//! `wh-config` — loads the initial customers and volunteers.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`loader`]  | `load_config_file`, `load_config_reader`, `WarehouseSetup`|
//! | [`error`]   | `ConfigError`, `ConfigResult<T>`                          |
//!
//! # File format (summary)
//!
//! ```text
//! # comment
//! customer <name> <soldier|civilian> <distance> <max_orders>
//! volunteer <name> collector <cooldown>
//! volunteer <name> limited_collector <cooldown> <max_orders>
//! volunteer <name> driver <max_distance> <distance_per_step>
//! volunteer <name> limited_driver <max_distance> <distance_per_step> <max_orders>
//! ```
//!
//! Customers and volunteers are numbered separately from 0 in file order.

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigResult};
pub use loader::{WarehouseSetup, load_config_file, load_config_reader};
