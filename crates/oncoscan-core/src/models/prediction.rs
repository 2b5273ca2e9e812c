use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Body returned by the prediction service for a submitted case.
///
/// The shape is inferred from how the service answers: `result` is present
/// when `success` is true, `message` may explain a failure. Unknown keys
/// are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PredictionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl PredictionResponse {
    pub fn from_slice(body: &[u8]) -> Result<Self, CoreError> {
        Ok(serde_json::from_slice(body)?)
    }

    /// The server's explanation, if it sent a non-empty one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.trim().is_empty())
    }
}

/// Diagnostic text returned for a case. Displayed verbatim, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionResult(pub String);

impl SubmissionResult {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for SubmissionResult {
    fn from(value: String) -> Self {
        Self(value)
    }
}
