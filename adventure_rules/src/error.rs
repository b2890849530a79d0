//! Error types for character actions and configuration loading.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

pub type ActionResult<T> = Result<T, ActionError>;

/// Validation failures raised by character actions.
///
/// Every variant is detected before any state is touched, so a failed action
/// leaves the character exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum ActionError {
    /// The item is already in the inventory.
    #[error("{0} is already in your inventory. Choose another item.")]
    DuplicateItem(String),

    /// The item is not in the inventory.
    #[error("You do not have {0}. Choose another item.")]
    ItemNotFound(String),

    #[error("Direction `{0}` not recognized. Please walk north, east, south, or west.")]
    InvalidDirection(String),

    #[error("Cannot fly to ({x}, {y}). Please make sure x and y are in the range of -100 to 100.")]
    OutOfRange { x: i32, y: i32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("starting scale must be a finite positive number, got {0}")]
    InvalidScale(f64),

    #[error("starting location must not be empty")]
    EmptyLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        assert_eq!(
            ActionError::DuplicateItem("pen".into()).to_string(),
            "pen is already in your inventory. Choose another item."
        );
        assert_eq!(
            ActionError::ItemNotFound("pen".into()).to_string(),
            "You do not have pen. Choose another item."
        );
        assert!(ActionError::InvalidDirection("up".into())
            .to_string()
            .contains("`up`"));
        assert!(ActionError::OutOfRange { x: 101, y: 0 }
            .to_string()
            .starts_with("Cannot fly to (101, 0)."));
    }
}
