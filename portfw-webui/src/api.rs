use crate::{
    error::ConsoleError,
    transport::{ApiResponse, Transport},
};
use log::debug;
use portfw_api::{
    endpoint::ApiEndpoint,
    request::ApiRequest,
    route::{RouteEntry, RouteMapping},
};

/// Route API client. Write calls only report success or failure; their
/// response bodies are never parsed.
pub struct RouteClient<T> {
    endpoint: ApiEndpoint,
    transport: T,
}

impl<T: Transport> RouteClient<T> {
    pub fn new(endpoint: ApiEndpoint, transport: T) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    pub async fn list_routes(&self) -> Result<RouteMapping, ConsoleError> {
        let res = self.execute(self.endpoint.list_routes()).await?;
        serde_json::from_str(&res.body).map_err(|err| ConsoleError::Malformed(err.to_string()))
    }

    pub async fn create_route(&self, entry: &RouteEntry) -> Result<(), ConsoleError> {
        self.execute(self.endpoint.create_route(entry)?).await?;
        Ok(())
    }

    pub async fn update_route(&self, local: &str, target: &str) -> Result<(), ConsoleError> {
        self.execute(self.endpoint.update_route(local, target)?)
            .await?;
        Ok(())
    }

    pub async fn delete_route(&self, local: &str) -> Result<(), ConsoleError> {
        self.execute(self.endpoint.delete_route(local)).await?;
        Ok(())
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ConsoleError> {
        debug!("{request}");
        let res = self.transport.send(request).await?;
        if res.is_success() {
            Ok(res)
        } else {
            Err(ConsoleError::from_response(&res))
        }
    }
}
