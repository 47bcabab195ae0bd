use crate::error::ConsoleError;
use async_trait::async_trait;
use portfw_api::request::ApiRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends an [`ApiRequest`] and hands back the raw response.
///
/// Only failures to complete the exchange are errors here; HTTP status
/// handling belongs to the caller.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ConsoleError>;
}
