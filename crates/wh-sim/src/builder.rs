//! Fluent builder for constructing a [`Warehouse`].

use std::collections::HashSet;

use wh_config::WarehouseSetup;
use wh_core::{CustomerId, IdCounter, SimConfig, VolunteerId};
use wh_model::{Customer, Volunteer};

use crate::warehouse::State;
use crate::{SimError, SimResult, Warehouse};

/// Fluent builder for [`Warehouse`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                     |
/// |--------------------|-----------------------------|
/// | `.customers(v)`    | no customers                |
/// | `.volunteers(v)`   | empty registry              |
/// | `.setup(s)`        | both of the above from `s`  |
///
/// The registry keeps the order volunteers are supplied in; that order is
/// the first-fit scan order of the assignment pass.  Later customers and
/// volunteers are numbered after the highest supplied id.
///
/// # Example
///
/// ```rust,ignore
/// let setup = wh_config::load_config_file(path)?;
/// let warehouse = WarehouseBuilder::new(SimConfig::default())
///     .setup(setup)
///     .build()?;
/// ```
pub struct WarehouseBuilder {
    config:     SimConfig,
    customers:  Vec<Customer>,
    volunteers: Vec<Volunteer>,
}

impl WarehouseBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            customers:  Vec::new(),
            volunteers: Vec::new(),
        }
    }

    /// Supply the initial customers.
    pub fn customers(mut self, customers: Vec<Customer>) -> Self {
        self.customers = customers;
        self
    }

    /// Supply the initial volunteer registry, in scan order.
    pub fn volunteers(mut self, volunteers: Vec<Volunteer>) -> Self {
        self.volunteers = volunteers;
        self
    }

    /// Supply customers and volunteers from a loaded setup file.
    pub fn setup(self, setup: WarehouseSetup) -> Self {
        self.customers(setup.customers).volunteers(setup.volunteers)
    }

    /// Validate ids and return a warehouse at tick 0 with no orders.
    pub fn build(self) -> SimResult<Warehouse> {
        check_unique("customer", self.customers.iter().map(|c| c.id.0))?;
        check_unique("volunteer", self.volunteers.iter().map(|v| v.id.0))?;

        let next_customer = self
            .customers
            .iter()
            .map(|c| c.id.next())
            .max()
            .unwrap_or(CustomerId::FIRST);
        let next_volunteer = self
            .volunteers
            .iter()
            .map(|v| v.id.next())
            .max()
            .unwrap_or(VolunteerId::FIRST);

        let state = State {
            customers:     self.customers,
            volunteers:    self.volunteers,
            customer_ids:  IdCounter::<CustomerId>::starting_at(next_customer),
            volunteer_ids: IdCounter::<VolunteerId>::starting_at(next_volunteer),
            ..State::default()
        };

        Ok(Warehouse::from_state(self.config, state))
    }
}

fn check_unique(what: &'static str, ids: impl Iterator<Item = u32>) -> SimResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(SimError::DuplicateId { what, id });
        }
    }
    Ok(())
}
