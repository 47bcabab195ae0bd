use crate::{
    endpoint::ApiEndpoint,
    error::Error,
    route::{RouteEntry, RouteUpdate},
};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        };
        f.write_str(method)
    }
}

/// A fully resolved call against the route server, independent of the HTTP client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// JSON body, if the call carries one.
    pub body: Option<String>,
}

impl ApiRequest {
    fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            body: None,
        }
    }

    fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, Error> {
        let body = serde_json::to_string(body).map_err(|err| Error::Encode {
            reason: err.to_string(),
        })?;
        self.body = Some(body);
        Ok(self)
    }
}

impl fmt::Display for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

impl ApiEndpoint {
    pub fn list_routes(&self) -> ApiRequest {
        ApiRequest::new(Method::Get, self.routes())
    }

    pub fn create_route(&self, entry: &RouteEntry) -> Result<ApiRequest, Error> {
        ApiRequest::new(Method::Post, self.routes()).with_json(entry)
    }

    pub fn update_route(&self, local: &str, target: &str) -> Result<ApiRequest, Error> {
        ApiRequest::new(Method::Patch, self.route(local)).with_json(&RouteUpdate {
            target: target.to_string(),
        })
    }

    pub fn delete_route(&self, local: &str) -> ApiRequest {
        ApiRequest::new(Method::Delete, self.route(local))
    }
}
