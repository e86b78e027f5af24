use thiserror::Error;

use wh_config::ConfigError;
use wh_core::{CustomerId, WhError};

#[derive(Debug, Error)]
pub enum SimError {
    /// Lookup of an order, customer, or volunteer by an unknown id.
    #[error("{0}")]
    NotFound(WhError),

    /// The customer exists but is already at its order cap.
    #[error("customer {0} cannot place another order")]
    CannotPlaceOrder(CustomerId),

    #[error("duplicate {what} id {id}")]
    DuplicateId {
        what: &'static str,
        id:   u32,
    },

    #[error("setup error: {0}")]
    Setup(#[from] ConfigError),
}

impl SimError {
    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, SimError::NotFound(_))
    }
}

pub type SimResult<T> = Result<T, SimError>;
