//! Customers — the parties that place orders.

use std::fmt;
use std::str::FromStr;

use wh_core::{CustomerId, OrderId, WhError, WhResult};

/// Customer category.  Carried for reporting; it does not affect routing.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CustomerKind {
    Soldier,
    Civilian,
}

impl CustomerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerKind::Soldier  => "soldier",
            CustomerKind::Civilian => "civilian",
        }
    }
}

impl FromStr for CustomerKind {
    type Err = WhError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "soldier"  => Ok(CustomerKind::Soldier),
            "civilian" => Ok(CustomerKind::Civilian),
            other => Err(WhError::Parse(format!(
                "invalid customer kind {other:?}: expected \"soldier\" or \"civilian\""
            ))),
        }
    }
}

impl fmt::Display for CustomerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A customer with a fixed location and a lifetime order cap.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Customer {
    pub id:         CustomerId,
    pub name:       String,
    pub kind:       CustomerKind,
    /// Distance from the warehouse; copied onto every order this customer places.
    pub distance:   u32,
    pub max_orders: u32,
    /// Ids of every order placed so far, oldest first.
    order_ids:      Vec<OrderId>,
}

impl Customer {
    pub fn new(
        id:         CustomerId,
        name:       impl Into<String>,
        kind:       CustomerKind,
        distance:   u32,
        max_orders: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            distance,
            max_orders,
            order_ids: Vec::new(),
        }
    }

    /// `true` while fewer than `max_orders` orders have been placed.
    #[inline]
    pub fn can_make_order(&self) -> bool {
        self.order_ids.len() < self.max_orders as usize
    }

    /// Orders still allowed before the cap is reached.
    #[inline]
    pub fn orders_left(&self) -> u32 {
        self.max_orders.saturating_sub(self.order_ids.len() as u32)
    }

    #[inline]
    pub fn order_ids(&self) -> &[OrderId] {
        &self.order_ids
    }

    /// Record a newly placed order.
    ///
    /// # Errors
    ///
    /// [`WhError::CapacityExceeded`] if the customer is already at its cap;
    /// nothing is recorded in that case.
    pub fn add_order(&mut self, order: OrderId) -> WhResult<()> {
        if !self.can_make_order() {
            return Err(WhError::CapacityExceeded(format!(
                "customer {} already placed {} of {} orders",
                self.id,
                self.order_ids.len(),
                self.max_orders
            )));
        }
        self.order_ids.push(order);
        Ok(())
    }
}
