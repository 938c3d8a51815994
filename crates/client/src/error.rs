//! Client error types.

/// Failure of a single service call.
///
/// Every variant is recoverable from the workflow's point of view: the
/// failed item is recorded and the step moves on.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure: connect, timeout, or body decode.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

impl ClientError {
    /// Build a rejection from a status code and service-supplied detail.
    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        ClientError::Rejected {
            status,
            message: message.into(),
        }
    }
}
