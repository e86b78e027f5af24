//! `wh-action` — the command layer between a user and a [`wh_sim::Warehouse`].
//!
//! # Crate layout
//!
//! | Module        | Contents                                                 |
//! |---------------|----------------------------------------------------------|
//! | [`action`]    | `Action` — one parsed command line                       |
//! | [`log`]       | `ActionLog`, `ActionRecord`, `ActionStatus`              |
//! | [`report`]    | Plain-text status blocks and the closing summary         |
//! | [`session`]   | `Session` — warehouse + action log + backup slot         |
//! | [`error`]     | `ActionError`, `ActionResult`                            |
//!
//! # Command syntax
//!
//! ```text
//! step <n>                                   advance n ticks
//! order <customer_id>                        place an order
//! customer <name> <soldier|civilian> <distance> <max_orders>
//! orderStatus <order_id>
//! customerStatus <customer_id>
//! volunteerStatus <volunteer_id>
//! log                                        print every earlier command
//! backup                                     snapshot the warehouse
//! restore                                    restore the last snapshot
//! close                                      print all orders and stop
//! ```

pub mod action;
pub mod error;
pub mod log;
pub mod report;
pub mod session;


pub use action::Action;
pub use error::{ActionError, ActionResult};
pub use log::{ActionLog, ActionRecord, ActionStatus};
pub use session::Session;
