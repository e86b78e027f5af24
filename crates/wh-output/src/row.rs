//! Plain data row types written by output backends.

use wh_model::Order;
use wh_sim::TickSummary;

/// Store sizes and pass counters at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub pending:    u64,
    pub in_process: u64,
    pub completed:  u64,
    pub volunteers: u64,
    pub assigned:   u64,
    pub finished:   u64,
    pub reaped:     u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:       s.tick.0,
            pending:    s.pending as u64,
            in_process: s.in_process as u64,
            completed:  s.completed as u64,
            volunteers: s.volunteers as u64,
            assigned:   s.assigned as u64,
            finished:   s.finished as u64,
            reaped:     s.reaped as u64,
        }
    }
}

/// One order's status at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderSnapshotRow {
    pub tick:         u64,
    pub order_id:     u32,
    pub customer_id:  u32,
    /// `PENDING`, `COLLECTING`, `DELIVERING` or `COMPLETED`.
    pub status:       &'static str,
    /// `None` until a collector is assigned.
    pub collector_id: Option<u32>,
    /// `None` until a driver is assigned.
    pub driver_id:    Option<u32>,
}

impl OrderSnapshotRow {
    pub fn new(tick: u64, order: &Order) -> Self {
        Self {
            tick,
            order_id:     order.id().0,
            customer_id:  order.customer_id().0,
            status:       order.status().as_str(),
            collector_id: order.collector().map(|v| v.0),
            driver_id:    order.driver().map(|v| v.0),
        }
    }
}
