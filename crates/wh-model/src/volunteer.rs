//! Volunteers and their capabilities.
//!
//! A volunteer is `Idle` or `Busy(order, counter)`.  The only Idle → Busy
//! edge is a successful [`Volunteer::accept_order`]; the only Busy → Idle
//! edge is [`Volunteer::step`] driving the counter to its threshold, which
//! also stamps the single-slot "just finished" flag.

use std::fmt;

use wh_core::{OrderId, VolunteerId};

use crate::Order;

// ── Role ──────────────────────────────────────────────────────────────────────

/// What a volunteer does with an order, plus the countdown for the order in
/// hand.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    /// Prepares orders.  Each order takes `cooldown` ticks regardless of
    /// distance.
    Collector {
        cooldown:  u32,
        time_left: u32,
    },

    /// Delivers collected orders no farther than `max_distance`, covering
    /// `distance_per_step` per tick.
    Driver {
        max_distance:      u32,
        distance_per_step: u32,
        distance_left:     u32,
    },
}

impl Role {
    pub fn collector(cooldown: u32) -> Self {
        Role::Collector { cooldown, time_left: 0 }
    }

    pub fn driver(max_distance: u32, distance_per_step: u32) -> Self {
        Role::Driver { max_distance, distance_per_step, distance_left: 0 }
    }

    #[inline]
    pub fn kind(&self) -> RoleKind {
        match self {
            Role::Collector { .. } => RoleKind::Collector,
            Role::Driver { .. }    => RoleKind::Driver,
        }
    }

    /// Remaining ticks (collector) or distance (driver) on the current order.
    #[inline]
    pub fn remaining(&self) -> u32 {
        match *self {
            Role::Collector { time_left, .. }  => time_left,
            Role::Driver { distance_left, .. } => distance_left,
        }
    }
}

/// Fieldless mirror of [`Role`], used to select which volunteers an order
/// stage scans.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoleKind {
    Collector,
    Driver,
}

// ── Quota ─────────────────────────────────────────────────────────────────────

/// Lifetime cap on accepted orders.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Quota {
    Unlimited,
    Limited { max_orders: u32, orders_left: u32 },
}

impl Quota {
    pub fn limited(max_orders: u32) -> Self {
        Quota::Limited { max_orders, orders_left: max_orders }
    }

    #[inline]
    pub fn has_orders_left(&self) -> bool {
        match *self {
            Quota::Unlimited                   => true,
            Quota::Limited { orders_left, .. } => orders_left > 0,
        }
    }

    /// Decrement on acceptance.  Never goes below zero.
    fn consume(&mut self) {
        if let Quota::Limited { orders_left, .. } = self {
            *orders_left = orders_left.saturating_sub(1);
        }
    }
}

// ── Volunteer ─────────────────────────────────────────────────────────────────

/// A registered volunteer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volunteer {
    pub id:          VolunteerId,
    pub name:        String,
    role:            Role,
    quota:           Quota,
    active_order:    Option<OrderId>,
    completed_order: Option<OrderId>,
}

impl Volunteer {
    pub fn new(id: VolunteerId, name: impl Into<String>, role: Role, quota: Quota) -> Self {
        Self {
            id,
            name: name.into(),
            role,
            quota,
            active_order:    None,
            completed_order: None,
        }
    }

    pub fn collector(id: VolunteerId, name: impl Into<String>, cooldown: u32) -> Self {
        Self::new(id, name, Role::collector(cooldown), Quota::Unlimited)
    }

    pub fn limited_collector(
        id:         VolunteerId,
        name:       impl Into<String>,
        cooldown:   u32,
        max_orders: u32,
    ) -> Self {
        Self::new(id, name, Role::collector(cooldown), Quota::limited(max_orders))
    }

    pub fn driver(
        id:                VolunteerId,
        name:              impl Into<String>,
        max_distance:      u32,
        distance_per_step: u32,
    ) -> Self {
        Self::new(id, name, Role::driver(max_distance, distance_per_step), Quota::Unlimited)
    }

    pub fn limited_driver(
        id:                VolunteerId,
        name:              impl Into<String>,
        max_distance:      u32,
        distance_per_step: u32,
        max_orders:        u32,
    ) -> Self {
        Self::new(
            id,
            name,
            Role::driver(max_distance, distance_per_step),
            Quota::limited(max_orders),
        )
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn role(&self) -> &Role {
        &self.role
    }

    #[inline]
    pub fn kind(&self) -> RoleKind {
        self.role.kind()
    }

    #[inline]
    pub fn quota(&self) -> Quota {
        self.quota
    }

    #[inline]
    pub fn active_order(&self) -> Option<OrderId> {
        self.active_order
    }

    #[inline]
    pub fn completed_order(&self) -> Option<OrderId> {
        self.completed_order
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.active_order.is_some()
    }

    #[inline]
    pub fn has_orders_left(&self) -> bool {
        self.quota.has_orders_left()
    }

    /// Orders left under a limited quota; `None` for unlimited volunteers.
    pub fn orders_left(&self) -> Option<u32> {
        match self.quota {
            Quota::Unlimited                   => None,
            Quota::Limited { orders_left, .. } => Some(orders_left),
        }
    }

    /// Countdown on the order in hand; `None` while idle.
    pub fn time_left(&self) -> Option<u32> {
        self.active_order.map(|_| self.role.remaining())
    }

    /// `true` for an idle, unexhausted volunteer able to handle `order`.
    ///
    /// Drivers additionally require `order.distance() <= max_distance`.
    pub fn can_take_order(&self, order: &Order) -> bool {
        if self.is_busy() || !self.has_orders_left() {
            return false;
        }
        match self.role {
            Role::Collector { .. }            => true,
            Role::Driver { max_distance, .. } => order.distance() <= max_distance,
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Start work on `order`.
    ///
    /// Returns `false` and leaves the volunteer untouched if
    /// [`can_take_order`][Self::can_take_order] does not hold.
    pub fn accept_order(&mut self, order: &Order) -> bool {
        if !self.can_take_order(order) {
            return false;
        }
        match &mut self.role {
            Role::Collector { cooldown, time_left } => *time_left = *cooldown,
            Role::Driver { distance_left, .. }      => *distance_left = order.distance(),
        }
        self.quota.consume();
        self.active_order = Some(order.id());
        self.completed_order = None;
        true
    }

    /// Advance the countdown by one tick.
    ///
    /// Returns the order id when this step finishes it; the id is also left in
    /// the completed-order slot for [`take_completed`][Self::take_completed].
    /// Idle volunteers are untouched.
    pub fn step(&mut self) -> Option<OrderId> {
        let active = self.active_order?;
        let remaining = match &mut self.role {
            Role::Collector { time_left, .. } => {
                *time_left = time_left.saturating_sub(1);
                *time_left
            }
            Role::Driver { distance_per_step, distance_left, .. } => {
                *distance_left = distance_left.saturating_sub(*distance_per_step);
                *distance_left
            }
        };
        if remaining > 0 {
            return None;
        }
        self.active_order = None;
        self.completed_order = Some(active);
        Some(active)
    }

    /// Consume the completed-order flag if it names `order`.
    pub fn take_completed(&mut self, order: OrderId) -> bool {
        if self.completed_order == Some(order) {
            self.completed_order = None;
            true
        } else {
            false
        }
    }

    /// Config-file role token: `collector`, `limited_collector`, `driver`,
    /// or `limited_driver`.
    pub fn role_label(&self) -> &'static str {
        match (self.kind(), self.quota) {
            (RoleKind::Collector, Quota::Unlimited)      => "collector",
            (RoleKind::Collector, Quota::Limited { .. }) => "limited_collector",
            (RoleKind::Driver, Quota::Unlimited)         => "driver",
            (RoleKind::Driver, Quota::Limited { .. })    => "limited_driver",
        }
    }
}

impl fmt::Display for Volunteer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.id, self.name, self.role_label())
    }
}
