//! The `Warehouse` — all simulation state plus the operations callers use
//! between ticks (order placement, customer registration, status lookups).

use std::path::Path;

use tracing::debug;

use wh_config::{WarehouseSetup, load_config_file};
use wh_core::{CustomerId, IdCounter, OrderId, SimClock, SimConfig, Tick, VolunteerId, WhError};
use wh_model::{Customer, CustomerKind, Order, Volunteer};

use crate::{SimError, SimResult, WarehouseBuilder};

// ── State ─────────────────────────────────────────────────────────────────────

/// Everything that changes while the simulation runs.
///
/// Every order lives in exactly one of the three stores.  Moving an order
/// between stores moves the value; nothing is shared, so `Clone` is a full
/// deep copy.  A [`Snapshot`][crate::Snapshot] is one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) clock:         SimClock,
    /// Orders waiting for a collector (`Pending`) or for a driver
    /// (`Collecting`, already collected), in queue order.
    pub(crate) pending:       Vec<Order>,
    /// Orders a volunteer is working on right now.
    pub(crate) in_process:    Vec<Order>,
    /// Terminal store.  Orders never leave it.
    pub(crate) completed:     Vec<Order>,
    /// The volunteer registry, in registration order.
    pub(crate) volunteers:    Vec<Volunteer>,
    pub(crate) customers:     Vec<Customer>,
    pub(crate) order_ids:     IdCounter<OrderId>,
    pub(crate) customer_ids:  IdCounter<CustomerId>,
    pub(crate) volunteer_ids: IdCounter<VolunteerId>,
}

/// Which store currently owns an order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OrderLocation {
    Pending,
    InProcess,
    Completed,
}

// ── Warehouse ─────────────────────────────────────────────────────────────────

/// The simulation context.
///
/// Create via [`WarehouseBuilder`] or [`Warehouse::from_config_file`].  The
/// tick loop lives in [`crate::tick`].
#[derive(Debug)]
pub struct Warehouse {
    /// Run-level configuration (batch length, snapshot cadence).
    pub config:       SimConfig,
    pub(crate) state: State,
}

impl Warehouse {
    pub(crate) fn from_state(config: SimConfig, state: State) -> Self {
        Self { config, state }
    }

    /// Load a setup file and build a warehouse from it.
    pub fn from_config_file(path: &Path, config: SimConfig) -> SimResult<Self> {
        let setup: WarehouseSetup = load_config_file(path)?;
        WarehouseBuilder::new(config).setup(setup).build()
    }

    // ── Order placement ───────────────────────────────────────────────────

    /// Place a new order for `customer`.
    ///
    /// The order gets the next order id and the customer's distance, and joins
    /// the back of the pending store.
    ///
    /// # Errors
    ///
    /// - [`SimError::NotFound`] if no customer has that id.
    /// - [`SimError::CannotPlaceOrder`] if the customer is at its order cap.
    ///
    /// Neither case changes any state.
    pub fn place_order(&mut self, customer: CustomerId) -> SimResult<OrderId> {
        let id = self.state.order_ids.peek();
        let cust = self
            .state
            .customers
            .iter_mut()
            .find(|c| c.id == customer)
            .ok_or(SimError::NotFound(WhError::CustomerNotFound(customer)))?;

        cust.add_order(id).map_err(|_| SimError::CannotPlaceOrder(customer))?;
        let distance = cust.distance;

        let allocated = self.state.order_ids.allocate();
        debug_assert_eq!(allocated, id);
        self.state.pending.push(Order::new(id, customer, distance));

        debug!(tick = self.current_tick().0, order = id.0, customer = customer.0, distance, "order placed");
        Ok(id)
    }

    /// Register a new customer with the next customer id.
    pub fn add_customer(
        &mut self,
        name:       impl Into<String>,
        kind:       CustomerKind,
        distance:   u32,
        max_orders: u32,
    ) -> CustomerId {
        let id = self.state.customer_ids.allocate();
        self.state.customers.push(Customer::new(id, name, kind, distance, max_orders));
        debug!(customer = id.0, %kind, distance, max_orders, "customer added");
        id
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Find an order in whichever store holds it.
    pub fn order(&self, id: OrderId) -> SimResult<&Order> {
        self.locate(id)
            .map(|(order, _)| order)
            .ok_or(SimError::NotFound(WhError::OrderNotFound(id)))
    }

    /// Which store currently holds order `id`.
    pub fn order_location(&self, id: OrderId) -> SimResult<OrderLocation> {
        self.locate(id)
            .map(|(_, loc)| loc)
            .ok_or(SimError::NotFound(WhError::OrderNotFound(id)))
    }

    pub fn customer(&self, id: CustomerId) -> SimResult<&Customer> {
        self.state
            .customers
            .iter()
            .find(|c| c.id == id)
            .ok_or(SimError::NotFound(WhError::CustomerNotFound(id)))
    }

    /// Look up a volunteer by id.  Reaped volunteers are `NotFound`.
    pub fn volunteer(&self, id: VolunteerId) -> SimResult<&Volunteer> {
        self.state
            .volunteers
            .iter()
            .find(|v| v.id == id)
            .ok_or(SimError::NotFound(WhError::VolunteerNotFound(id)))
    }

    fn locate(&self, id: OrderId) -> Option<(&Order, OrderLocation)> {
        let stores = [
            (&self.state.pending, OrderLocation::Pending),
            (&self.state.in_process, OrderLocation::InProcess),
            (&self.state.completed, OrderLocation::Completed),
        ];
        stores
            .into_iter()
            .find_map(|(store, loc)| store.iter().find(|o| o.id() == id).map(|o| (o, loc)))
    }

    // ── Read-only views ───────────────────────────────────────────────────

    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.state.clock.current_tick
    }

    #[inline]
    pub fn pending_orders(&self) -> &[Order] {
        &self.state.pending
    }

    #[inline]
    pub fn in_process_orders(&self) -> &[Order] {
        &self.state.in_process
    }

    #[inline]
    pub fn completed_orders(&self) -> &[Order] {
        &self.state.completed
    }

    /// All orders: pending, then in-process, then completed.
    pub fn all_orders(&self) -> impl Iterator<Item = &Order> {
        self.state
            .pending
            .iter()
            .chain(&self.state.in_process)
            .chain(&self.state.completed)
    }

    #[inline]
    pub fn volunteers(&self) -> &[Volunteer] {
        &self.state.volunteers
    }

    #[inline]
    pub fn customers(&self) -> &[Customer] {
        &self.state.customers
    }

    /// Number of orders placed so far (also the next order id).
    #[inline]
    pub fn orders_placed(&self) -> u32 {
        self.state.order_ids.issued()
    }
}
