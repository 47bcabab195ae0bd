use serde_derive::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid api endpoint: {url}")]
    InvalidEndpoint { url: String },

    #[error("unsupported api endpoint scheme: {scheme}")]
    UnsupportedScheme { scheme: String },

    #[error("failed to encode request body: {reason}")]
    Encode { reason: String },
}

/// Error body returned by the route server on a rejected request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}
