use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A transient error toast. The host shows it briefly and forgets it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Notification {
    pub message: String,
    pub at: jiff::Timestamp,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            at: jiff::Timestamp::now(),
        }
    }
}
