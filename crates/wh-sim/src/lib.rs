//! `wh-sim` — tick loop orchestrator for the warehouse simulation.
//!
//! # Four-pass tick loop
//!
//! ```text
//! for each of n ticks:
//!   ① Assign    — scan the pending store in queue order; a Pending order
//!                 goes to the first idle collector in registry order, a
//!                 Collecting order (already collected) to the first idle
//!                 driver whose range covers it.  Matched orders move to
//!                 the in-process store; the rest wait for the next tick.
//!   ② Step      — every busy volunteer advances its countdown by one tick;
//!                 a countdown reaching its threshold frees the volunteer
//!                 and stamps its completed-order flag.
//!   ③ Complete  — scan the in-process store; collected orders go back to
//!                 the pending store (still Collecting), delivered orders
//!                 become Completed and move to the completed store.
//!   ④ Reap      — remove idle volunteers whose quota is exhausted.
//! ```
//!
//! The order is fixed.  A volunteer assigned in ① is stepped in ② of the same
//! tick, so a collector with cooldown `c` finishes on the `c`-th tick after
//! assignment.  Reaping last means a volunteer freed in ② is removed in the
//! same tick.
//!
//! Every scan runs in insertion order and every decision is a pure function of
//! current state, so two runs from equal snapshots end in equal states.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wh_config::load_config_file;
//! use wh_core::SimConfig;
//! use wh_sim::{NoopObserver, WarehouseBuilder};
//!
//! let setup = load_config_file(path)?;
//! let mut warehouse = WarehouseBuilder::new(SimConfig::default()).setup(setup).build()?;
//! let order = warehouse.place_order(CustomerId(0))?;
//! warehouse.run_ticks(5, &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod snapshot;
pub mod tick;
pub mod warehouse;


pub use builder::WarehouseBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunSummary, SimObserver, TickSummary};
pub use snapshot::Snapshot;
pub use warehouse::{OrderLocation, Warehouse};
