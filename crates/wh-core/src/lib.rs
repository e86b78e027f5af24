//! `wh-core` — foundational types for the warehouse simulation.
//!
//! This crate is a dependency of every other `wh-*` crate.  It has no `wh-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `OrderId`, `CustomerId`, `VolunteerId`, `IdCounter`   |
//! | [`time`]        | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`error`]       | `WhError`, `WhResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{WhError, WhResult};
pub use ids::{CustomerId, IdCounter, OrderId, VolunteerId};
pub use time::{SimClock, SimConfig, Tick};
