use crate::{
    api::RouteClient,
    error::ConsoleError,
    state::ConsoleState,
    transport::{ApiResponse, Transport},
};
use async_trait::async_trait;
use percent_encoding::percent_decode_str;
use portfw_api::{
    endpoint::ApiEndpoint,
    request::{ApiRequest, Method},
    route::{RouteEntry, RouteMapping, RouteUpdate},
};
use std::{cell::RefCell, collections::VecDeque, rc::Rc, str::FromStr};

const ENDPOINT: &str = "http://127.0.0.1:3001";

/// In-memory route server speaking the Route API.
#[derive(Clone, Default)]
pub struct FakeServer {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    routes: RouteMapping,
    requests: Vec<ApiRequest>,
    canned: VecDeque<Result<ApiResponse, ConsoleError>>,
    observed: Option<Rc<RefCell<ConsoleState>>>,
    loading_seen: Vec<bool>,
}

impl FakeServer {
    pub fn with_routes(routes: &[(&str, &str)]) -> Self {
        let server = Self::default();
        server.inner.borrow_mut().routes = routes
            .iter()
            .map(|(local, target)| (local.to_string(), target.to_string()))
            .collect();
        server
    }

    pub fn client(&self) -> RouteClient<FakeServer> {
        let endpoint = ApiEndpoint::from_str(ENDPOINT).unwrap();
        RouteClient::new(endpoint, self.clone())
    }

    /// Queues a canned response; queued answers are used, in order, before
    /// any request is served.
    pub fn respond_with(&self, status: u16, body: &str) {
        self.inner.borrow_mut().canned.push_back(Ok(ApiResponse {
            status,
            body: body.to_owned(),
        }));
    }

    pub fn fail_next(&self, err: ConsoleError) {
        self.inner.borrow_mut().canned.push_back(Err(err));
    }

    /// Records the loading flag of `state` each time a request arrives.
    pub fn observe(&self, state: Rc<RefCell<ConsoleState>>) {
        self.inner.borrow_mut().observed = Some(state);
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.inner
            .borrow()
            .requests
            .iter()
            .map(|req| req.method)
            .collect()
    }

    pub fn loading_seen(&self) -> Vec<bool> {
        self.inner.borrow().loading_seen.clone()
    }
}

#[async_trait(?Send)]
impl Transport for FakeServer {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ConsoleError> {
        let mut inner = self.inner.borrow_mut();
        let loading = inner
            .observed
            .as_ref()
            .map(|state| state.borrow().is_loading());
        if let Some(loading) = loading {
            inner.loading_seen.push(loading);
        }
        inner.requests.push(request.clone());
        if let Some(res) = inner.canned.pop_front() {
            return res;
        }
        Ok(inner.serve(&request))
    }
}

impl Inner {
    fn serve(&mut self, request: &ApiRequest) -> ApiResponse {
        let path = request
            .url
            .strip_prefix(ENDPOINT)
            .unwrap_or(&request.url)
            .to_owned();
        let key = path
            .strip_prefix("/proxy/")
            .map(|key| percent_decode_str(key).decode_utf8_lossy().into_owned());
        let body = request.body.as_deref().unwrap_or_default();

        match (request.method, path.as_str(), key) {
            (Method::Get, "/proxy", _) => ok(&serde_json::to_string(&self.routes).unwrap()),
            (Method::Post, "/proxy", _) => {
                let entry: RouteEntry = serde_json::from_str(body).unwrap();
                self.routes.insert(entry.local, entry.target);
                ApiResponse {
                    status: 201,
                    body: r#"{"message":"done"}"#.to_owned(),
                }
            }
            (Method::Patch, _, Some(key)) => {
                let update: RouteUpdate = serde_json::from_str(body).unwrap();
                self.routes.insert(key, update.target);
                ok(r#"{"message":"done"}"#)
            }
            (Method::Delete, _, Some(key)) => {
                self.routes.shift_remove(&key);
                ok(r#"{"message":"done"}"#)
            }
            _ => ApiResponse {
                status: 404,
                body: "404 page not found".to_owned(),
            },
        }
    }
}

fn ok(body: &str) -> ApiResponse {
    ApiResponse {
        status: 200,
        body: body.to_owned(),
    }
}
