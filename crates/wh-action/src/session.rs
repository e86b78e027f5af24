//! An interactive session: one warehouse, its action log, and one backup slot.

use tracing::{debug, info};

use wh_sim::{NoopObserver, SimError, SimObserver, Snapshot, Warehouse};

use crate::report;
use crate::{Action, ActionError, ActionLog, ActionResult, ActionStatus};

/// Executes [`Action`]s against a warehouse and records each outcome.
///
/// `backup` stores the warehouse together with the log as it stood after
/// the `backup` record.  `restore` rewinds both, then appends its own
/// record.  The backup slot survives a restore, so the same backup can be
/// restored more than once.
pub struct Session {
    warehouse: Warehouse,
    log:       ActionLog,
    backup:    Option<Backup>,
    open:      bool,
}

/// Contents of the backup slot.
#[derive(Clone, Debug)]
struct Backup {
    snapshot: Snapshot,
    log:      ActionLog,
}

impl Session {
    pub fn new(warehouse: Warehouse) -> Self {
        Self {
            warehouse,
            log:    ActionLog::new(),
            backup: None,
            open:   true,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    #[inline]
    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    #[inline]
    pub fn has_backup(&self) -> bool {
        self.backup.is_some()
    }

    /// `false` once a `close` command has run.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    // ── Execution ─────────────────────────────────────────────────────────

    /// Parse and execute one command line.
    ///
    /// Parse failures are returned as `Err` and not logged.  Otherwise the
    /// returned text is what the command prints, ending with an
    /// `Error: <message>` line if the command failed.
    pub fn execute_line<O: SimObserver>(&mut self, line: &str, observer: &mut O) -> ActionResult<String> {
        let action = Action::parse(line)?;
        Ok(self.execute_with(action, observer))
    }

    /// Execute with no tick observer.
    pub fn execute(&mut self, action: Action) -> String {
        self.execute_with(action, &mut NoopObserver)
    }

    /// Execute `action`, forwarding tick callbacks of `step` to `observer`.
    pub fn execute_with<O: SimObserver>(&mut self, action: Action, observer: &mut O) -> String {
        let (output, status) = match self.apply(&action, observer) {
            Ok(text) => (text, ActionStatus::Completed),
            Err(err) => (format!("Error: {err}\n"), ActionStatus::Error(err)),
        };

        debug!(action = %action, status = %status, "action executed");
        self.log.push(action, status);
        output
    }

    fn apply<O: SimObserver>(&mut self, action: &Action, observer: &mut O) -> ActionResult<String> {
        let text = match action {
            Action::Step(n) => {
                self.warehouse.run_ticks(*n, observer);
                String::new()
            }
            Action::Order(customer) => {
                self.warehouse
                    .place_order(*customer)
                    .map_err(|_| ActionError::CannotPlaceOrder)?;
                String::new()
            }
            Action::AddCustomer { name, kind, distance, max_orders } => {
                self.warehouse.add_customer(name.as_str(), *kind, *distance, *max_orders);
                String::new()
            }
            Action::OrderStatus(id) => {
                report::order_status(&self.warehouse, *id).map_err(|e| lookup(e, ActionError::OrderNotFound))?
            }
            Action::CustomerStatus(id) => report::customer_status(&self.warehouse, *id)
                .map_err(|e| lookup(e, ActionError::CustomerNotFound))?,
            Action::VolunteerStatus(id) => report::volunteer_status(&self.warehouse, *id)
                .map_err(|e| lookup(e, ActionError::VolunteerNotFound))?,
            Action::Log => self.log.to_string(),
            Action::Backup => {
                // The saved log already ends with this backup.
                let mut log = self.log.clone();
                log.push(Action::Backup, ActionStatus::Completed);
                self.backup = Some(Backup { snapshot: self.warehouse.snapshot(), log });
                info!(tick = self.warehouse.current_tick().0, "warehouse backed up");
                String::new()
            }
            Action::Restore => {
                let Backup { snapshot, log } = self.backup.clone().ok_or(ActionError::NoBackup)?;
                self.warehouse.restore(snapshot);
                self.log = log;
                info!(
                    tick = self.warehouse.current_tick().0,
                    actions = self.log.len(),
                    "warehouse restored"
                );
                String::new()
            }
            Action::Close => {
                self.open = false;
                info!(orders = self.warehouse.orders_placed(), "warehouse closed");
                report::close_summary(&self.warehouse)
            }
        };
        Ok(text)
    }
}

/// Report lookups only fail with `NotFound`.
fn lookup(err: SimError, not_found: ActionError) -> ActionError {
    debug_assert!(err.is_not_found(), "unexpected lookup error: {err}");
    not_found
}
