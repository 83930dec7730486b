use thiserror::Error;

/// Failure of a completion request
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never got a response, or the body could not be read
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The provider answered with a non-success status
    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    /// Rejected before anything was sent
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Success status, but no reply text could be found in the body
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider {
            status,
            message: message.into(),
        }
    }

    /// True for errors raised by the transport rather than the provider
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}
