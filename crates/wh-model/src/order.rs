//! Orders and their status.

use std::fmt;

use wh_core::{CustomerId, OrderId, VolunteerId};

/// Where an order is in its pipeline.
///
/// `Completed` is terminal.  A `Collecting` order is either being collected
/// right now (in-process store) or has been collected and waits for a driver
/// (pending store); the status alone does not distinguish the two.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderStatus {
    Pending,
    Collecting,
    Delivering,
    Completed,
}

impl OrderStatus {
    /// Upper-case label used in status reports.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending    => "PENDING",
            OrderStatus::Collecting => "COLLECTING",
            OrderStatus::Delivering => "DELIVERING",
            OrderStatus::Completed  => "COMPLETED",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single order placed by a customer.
///
/// Fields are private so the status/assignment invariant holds:
/// `collector` is set iff the status is past `Pending`, `driver` is set iff
/// the status is `Delivering` or `Completed`.  The transition methods are
/// the only way to change either.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    id:          OrderId,
    customer_id: CustomerId,
    distance:    u32,
    status:      OrderStatus,
    collector:   Option<VolunteerId>,
    driver:      Option<VolunteerId>,
}

impl Order {
    /// A fresh `Pending` order with no volunteers attached.
    pub fn new(id: OrderId, customer_id: CustomerId, distance: u32) -> Self {
        Self {
            id,
            customer_id,
            distance,
            status:    OrderStatus::Pending,
            collector: None,
            driver:    None,
        }
    }

    #[inline]
    pub fn id(&self) -> OrderId {
        self.id
    }

    #[inline]
    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    /// Delivery distance, fixed at creation from the customer's location.
    #[inline]
    pub fn distance(&self) -> u32 {
        self.distance
    }

    #[inline]
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    #[inline]
    pub fn collector(&self) -> Option<VolunteerId> {
        self.collector
    }

    #[inline]
    pub fn driver(&self) -> Option<VolunteerId> {
        self.driver
    }

    /// `Pending → Collecting`, recording the collector.
    pub fn assign_collector(&mut self, collector: VolunteerId) {
        debug_assert_eq!(self.status, OrderStatus::Pending, "order {} already collected", self.id);
        self.collector = Some(collector);
        self.status = OrderStatus::Collecting;
    }

    /// `Collecting → Delivering`, recording the driver.
    pub fn assign_driver(&mut self, driver: VolunteerId) {
        debug_assert_eq!(self.status, OrderStatus::Collecting, "order {} not collected", self.id);
        self.driver = Some(driver);
        self.status = OrderStatus::Delivering;
    }

    /// `Delivering → Completed`.
    pub fn complete(&mut self) {
        debug_assert_eq!(self.status, OrderStatus::Delivering, "order {} not delivering", self.id);
        self.status = OrderStatus::Completed;
    }
}
