use crate::transport::ApiResponse;
use portfw_api::error::ErrorMessage;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsoleError {
    #[error("network error: {0}")]
    Network(String),

    #[error("server responded with {status}: {message}")]
    Api { status: u16, message: String },

    #[error("malformed route list: {0}")]
    Malformed(String),

    #[error(transparent)]
    Request(#[from] portfw_api::error::Error),
}

impl ConsoleError {
    pub fn from_response(res: &ApiResponse) -> Self {
        let message = match serde_json::from_str::<ErrorMessage>(&res.body) {
            Ok(msg) => msg.error,
            Err(_) if res.body.trim().is_empty() => "no response body".to_string(),
            Err(_) => res.body.trim().to_string(),
        };
        Self::Api {
            status: res.status,
            message,
        }
    }
}
