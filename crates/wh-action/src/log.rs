//! Append-only history of executed commands.

use std::fmt;

use crate::{Action, ActionError};

/// Outcome of one executed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionStatus {
    Completed,
    Error(ActionError),
}

impl ActionStatus {
    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionStatus::Completed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionStatus::Completed => "COMPLETED",
            ActionStatus::Error(_)  => "ERROR",
        }
    }
}

impl fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command together with how it ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionRecord {
    pub action: Action,
    pub status: ActionStatus,
}

impl fmt::Display for ActionRecord {
    /// `<command text> <COMPLETED|ERROR>`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action, self.status)
    }
}

/// Every command a session has executed, oldest first.
///
/// Lines that failed to parse never reach the log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ActionLog {
    records: Vec<ActionRecord>,
}

impl ActionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action, status: ActionStatus) {
        self.records.push(ActionRecord { action, status });
    }

    #[inline]
    pub fn records(&self) -> &[ActionRecord] {
        &self.records
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&ActionRecord> {
        self.records.last()
    }
}

impl fmt::Display for ActionLog {
    /// One record per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}
