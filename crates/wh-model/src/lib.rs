//! `wh-model` — the entities the warehouse simulation moves around.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`order`]       | `Order`, `OrderStatus`                                    |
//! | [`customer`]    | `Customer`, `CustomerKind`                                |
//! | [`volunteer`]   | `Volunteer`, `Role`, `RoleKind`, `Quota`                  |
//!
//! # Capability model
//!
//! A volunteer's capability is the product of two closed enums: a [`Role`]
//! (collector with a cooldown, or driver with a range and speed) and a
//! [`Quota`] (unlimited, or a lifetime cap on accepted orders).  Everything
//! the tick loop needs (`can_take_order`, `accept_order`, `step`,
//! `has_orders_left`) is a `match` over those two enums.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.     |

pub mod customer;
pub mod order;
pub mod volunteer;

#[cfg(test)]
mod tests;

pub use customer::{Customer, CustomerKind};
pub use order::{Order, OrderStatus};
pub use volunteer::{Quota, Role, RoleKind, Volunteer};
