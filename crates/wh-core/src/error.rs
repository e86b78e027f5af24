//! Base error type shared by the `wh-*` crates.
//!
//! Sub-crates define their own error enums and either convert into `WhError`
//! via `From` or wrap it as one variant.

use thiserror::Error;

use crate::{CustomerId, OrderId, VolunteerId};

/// The top-level error type for `wh-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WhError {
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    #[error("volunteer {0} not found")]
    VolunteerNotFound(VolunteerId),

    #[error("capacity exceeded: {0}")]
    CapacityExceeded(String),

    #[error("parse error: {0}")]
    Parse(String),
}

impl WhError {
    /// `true` for the three lookup-miss variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            WhError::OrderNotFound(_) | WhError::CustomerNotFound(_) | WhError::VolunteerNotFound(_)
        )
    }
}

/// Shorthand result type for all `wh-*` crates.
pub type WhResult<T> = Result<T, WhError>;
