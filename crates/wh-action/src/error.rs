use thiserror::Error;

/// Why a command line could not be parsed or a command did not complete.
///
/// The `Display` text of the execution failures is what the user sees after
/// `Error: `.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ActionError {
    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("{command}: {message}")]
    BadArgument {
        command: &'static str,
        message: String,
    },

    /// Unknown customer, or a customer already at its order cap.
    #[error("Cannot place this order")]
    CannotPlaceOrder,

    #[error("Order doesn't exist")]
    OrderNotFound,

    #[error("Customer doesn't exist")]
    CustomerNotFound,

    #[error("Volunteer doesn't exist")]
    VolunteerNotFound,

    #[error("No backup available")]
    NoBackup,
}

impl ActionError {
    /// `true` for errors raised while reading a command line, before anything
    /// was executed.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ActionError::UnknownCommand(_) | ActionError::BadArgument { .. })
    }
}

pub type ActionResult<T> = Result<T, ActionError>;
