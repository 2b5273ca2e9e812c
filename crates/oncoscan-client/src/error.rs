use thiserror::Error;

use oncoscan_core::messages;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid prediction endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("failed to build request: {0}")]
    Request(String),

    #[error("prediction service unreachable: {0}")]
    Transport(String),

    #[error("prediction service returned HTTP {status}")]
    Status { status: u16, message: Option<String> },

    #[error("prediction service rejected the case: {}", message.as_deref().unwrap_or("no reason given"))]
    Rejected { message: Option<String> },

    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),

    #[error("prediction service reported success without a result")]
    MissingResult,
}

impl ClientError {
    /// Text for the failure notification: the server's own message when
    /// it sent one, otherwise a generic line.
    pub fn user_message(&self) -> &str {
        match self {
            ClientError::Rejected {
                message: Some(message),
            }
            | ClientError::Status {
                message: Some(message),
                ..
            } => message.as_str(),
            ClientError::Rejected { message: None } => messages::SUBMISSION_FAILED,
            _ => messages::SUBMISSION_ERROR,
        }
    }
}
