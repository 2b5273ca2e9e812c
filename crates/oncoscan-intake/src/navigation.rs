use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A request for the host router to change location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Navigation {
    pub to: String,
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

impl Navigation {
    pub fn push(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            replace: false,
        }
    }

    pub fn replace(to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            replace: true,
        }
    }
}
