use crate::CoreError;

use std::{fmt, path::PathBuf};

/// Result of one dispatched action, rendered as exactly one reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action ran; nothing further to report.
    Success,
    /// The action produced a file for the transport to deliver.
    File(PathBuf),
    /// The action ran and has something to say.
    Text(String),
    /// The referenced descriptor or artifact does not exist.
    NotFound(String),
    /// The action failed; carries a human-readable cause.
    Failure(String),
}

impl ActionOutcome {
    /// Whether this outcome represents a completed action.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            ActionOutcome::Success | ActionOutcome::File(_) | ActionOutcome::Text(_)
        )
    }
}

impl From<CoreError> for ActionOutcome {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::DescriptorNotFound { key, .. } => ActionOutcome::NotFound(key),
            other => ActionOutcome::Failure(other.user_message()),
        }
    }
}

impl fmt::Display for ActionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionOutcome::Success => write!(f, "done"),
            ActionOutcome::File(path) => write!(f, "file: {}", path.display()),
            ActionOutcome::Text(text) => write!(f, "{text}"),
            ActionOutcome::NotFound(what) => write!(f, "not found: {what}"),
            ActionOutcome::Failure(reason) => write!(f, "error: {reason}"),
        }
    }
}
