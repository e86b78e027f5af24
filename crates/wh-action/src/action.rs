//! Commands a user can issue to a running warehouse.

use std::fmt;
use std::str::FromStr;

use tracing::warn;

use wh_core::{CustomerId, OrderId, VolunteerId};
use wh_model::CustomerKind;

use crate::{ActionError, ActionResult};

/// One parsed command line.
///
/// `Display` renders the text the action log prints.  It is the command
/// line itself except for `step n`, which is logged as `simulateStep n`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Advance the simulation by `n` ticks.
    Step(u64),

    /// Place an order for a customer.
    Order(CustomerId),

    /// Register a new customer.
    AddCustomer {
        name:       String,
        kind:       CustomerKind,
        distance:   u32,
        max_orders: u32,
    },

    OrderStatus(OrderId),
    CustomerStatus(CustomerId),
    VolunteerStatus(VolunteerId),

    /// Print the text of every earlier command with its outcome.
    Log,

    /// Replace the backup slot with a snapshot of the warehouse.
    Backup,

    /// Replace the warehouse with the backup slot's snapshot.
    Restore,

    /// Print every order and end the session.
    Close,
}

impl Action {
    /// Parse one command line.  Tokens are whitespace-separated; extra
    /// trailing tokens are logged and ignored.
    pub fn parse(line: &str) -> ActionResult<Action> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = tokens.split_first() else {
            return Err(ActionError::UnknownCommand(String::new()));
        };

        let action = match command {
            "step" => {
                expect_arity("step", args, 1)?;
                Action::Step(parse_num("step", args[0])?)
            }
            "order" => {
                expect_arity("order", args, 1)?;
                Action::Order(CustomerId(parse_num("order", args[0])?))
            }
            "customer" => {
                expect_arity("customer", args, 4)?;
                let kind = args[1].parse::<CustomerKind>().map_err(|e| bad("customer", e))?;
                Action::AddCustomer {
                    name: args[0].to_owned(),
                    kind,
                    distance: parse_num("customer", args[2])?,
                    max_orders: parse_num("customer", args[3])?,
                }
            }
            "orderStatus" => {
                expect_arity("orderStatus", args, 1)?;
                Action::OrderStatus(OrderId(parse_num("orderStatus", args[0])?))
            }
            "customerStatus" => {
                expect_arity("customerStatus", args, 1)?;
                Action::CustomerStatus(CustomerId(parse_num("customerStatus", args[0])?))
            }
            "volunteerStatus" => {
                expect_arity("volunteerStatus", args, 1)?;
                Action::VolunteerStatus(VolunteerId(parse_num("volunteerStatus", args[0])?))
            }
            "log" => bare("log", args, Action::Log),
            "backup" => bare("backup", args, Action::Backup),
            "restore" => bare("restore", args, Action::Restore),
            "close" => bare("close", args, Action::Close),
            other => return Err(ActionError::UnknownCommand(other.to_owned())),
        };
        Ok(action)
    }
}

impl FromStr for Action {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::parse(s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Step(n)            => write!(f, "simulateStep {n}"),
            Action::Order(c)           => write!(f, "order {}", c.0),
            Action::AddCustomer { name, kind, distance, max_orders } => {
                write!(f, "customer {name} {kind} {distance} {max_orders}")
            }
            Action::OrderStatus(o)     => write!(f, "orderStatus {}", o.0),
            Action::CustomerStatus(c)  => write!(f, "customerStatus {}", c.0),
            Action::VolunteerStatus(v) => write!(f, "volunteerStatus {}", v.0),
            Action::Log                => f.write_str("log"),
            Action::Backup             => f.write_str("backup"),
            Action::Restore            => f.write_str("restore"),
            Action::Close              => f.write_str("close"),
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn expect_arity(command: &'static str, args: &[&str], want: usize) -> ActionResult<()> {
    if args.len() < want {
        return Err(ActionError::BadArgument {
            command,
            message: format!("expected {want} argument(s), got {}", args.len()),
        });
    }
    if args.len() > want {
        warn!(command, extra = ?&args[want..], "ignoring trailing arguments");
    }
    Ok(())
}

fn bare(command: &'static str, args: &[&str], action: Action) -> Action {
    if !args.is_empty() {
        warn!(command, extra = ?args, "ignoring trailing arguments");
    }
    action
}

fn parse_num<T: FromStr>(command: &'static str, token: &str) -> ActionResult<T>
where
    T::Err: fmt::Display,
{
    token.parse::<T>().map_err(|e| bad(command, format!("{token:?}: {e}")))
}

fn bad(command: &'static str, message: impl fmt::Display) -> ActionError {
    ActionError::BadArgument { command, message: message.to_string() }
}
