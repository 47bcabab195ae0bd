use crate::{
    error::ConsoleError,
    transport::{ApiResponse, Transport},
};
use async_trait::async_trait;
use gloo_net::http::{Method as HttpMethod, RequestBuilder};
use portfw_api::request::{ApiRequest, Method};
use web_sys::RequestMode;

/// [`Transport`] backed by the browser's fetch API.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ConsoleError> {
        let method = match request.method {
            Method::Get => HttpMethod::GET,
            Method::Post => HttpMethod::POST,
            Method::Patch => HttpMethod::PATCH,
            Method::Delete => HttpMethod::DELETE,
        };
        let builder = RequestBuilder::new(&request.url)
            .method(method)
            .mode(RequestMode::Cors);
        let req = match request.body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(body),
            None => builder.build(),
        }
        .map_err(network_error)?;

        let res = req.send().await.map_err(network_error)?;
        let status = res.status();
        let body = res.text().await.map_err(network_error)?;
        Ok(ApiResponse { status, body })
    }
}

fn network_error(err: gloo_net::Error) -> ConsoleError {
    ConsoleError::Network(err.to_string())
}
