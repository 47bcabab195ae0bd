use crate::{
    api::RouteClient,
    error::ConsoleError,
    state::{StateHandle, Submission},
    transport::Transport,
};
use futures::future::{FutureExt, LocalBoxFuture};
use log::{info, warn};
use portfw_api::route::RouteEntry;
use std::rc::Rc;

/// Drives the route form and every round-trip to the route server.
///
/// Writes never touch the route list directly: each one is followed by a
/// full reload, whether the write succeeded or not.
pub struct RouteController<T, S> {
    client: Rc<RouteClient<T>>,
    state: S,
}

impl<T, S: Clone> Clone for RouteController<T, S> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            state: self.state.clone(),
        }
    }
}

impl<T, S> RouteController<T, S>
where
    T: Transport + 'static,
    S: StateHandle,
{
    pub fn new(client: RouteClient<T>, state: S) -> Self {
        Self {
            client: Rc::new(client),
            state,
        }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn begin_add(&self) {
        self.state.reduce(|state| state.begin_add());
    }

    pub fn begin_edit(&self, local: &str, target: &str) {
        self.state.reduce(|state| state.begin_edit(local, target));
    }

    pub fn set_local(&self, local: &str) {
        self.state.reduce(|state| state.set_local(local));
    }

    pub fn set_target(&self, target: &str) {
        self.state.reduce(|state| state.set_target(target));
    }

    pub fn cancel(&self) {
        self.state.reduce(|state| state.cancel());
    }

    pub fn dismiss_notice(&self) {
        self.state.reduce(|state| state.dismiss_notice());
    }

    /// Closes the dialog right away and returns the pending write, or `None`
    /// if no form was open.
    pub fn submit_form(&self) -> Option<LocalBoxFuture<'static, Result<(), ConsoleError>>> {
        let mut submission = None;
        self.state.reduce(|state| submission = state.submit());
        let submission = submission?;
        Some(self.clone().dispatch(submission).boxed_local())
    }

    pub fn delete_entry(&self, local: &str) -> LocalBoxFuture<'static, Result<(), ConsoleError>> {
        let submission = Submission::Delete {
            local: local.to_string(),
        };
        self.clone().dispatch(submission).boxed_local()
    }

    pub async fn reload(&self) -> Result<(), ConsoleError> {
        self.state.reduce(|state| state.request_started());
        let result = self.client.list_routes().await;
        let mut outcome = Ok(());
        self.state.reduce(|state| {
            state.request_finished();
            match result {
                Ok(mapping) => {
                    state.routes.replace_from(mapping);
                    state.notice = None;
                }
                Err(err) => {
                    warn!("failed to load routes: {err}");
                    state.notice = Some(format!("Failed to load routes: {err}"));
                    outcome = Err(err);
                }
            }
        });
        outcome
    }

    async fn dispatch(self, submission: Submission) -> Result<(), ConsoleError> {
        self.state.reduce(|state| {
            state.notice = None;
            state.request_started();
        });
        let written = self.write(&submission).await;
        // The write stays marked in flight until its reload is done.
        let reloaded = self.reload().await;
        self.state.reduce(|state| {
            state.request_finished();
            if let Err(err) = &written {
                warn!("{} failed: {err}", submission.describe());
                state.notice = Some(format!("Failed to {}: {err}", submission.describe()));
            }
        });
        written.and(reloaded)
    }

    async fn write(&self, submission: &Submission) -> Result<(), ConsoleError> {
        info!("{}", submission.describe());
        match submission {
            Submission::Create(entry) => self.client.create_route(entry).await,
            Submission::Update { local, target } => self.client.update_route(local, target).await,
            Submission::Delete { local } => self.client.delete_route(local).await,
        }
    }
}

impl Submission {
    fn describe(&self) -> String {
        match self {
            Self::Create(RouteEntry { local, target }) => format!("create route {local} -> {target}"),
            Self::Update { local, target } => format!("update route {local} -> {target}"),
            Self::Delete { local } => format!("delete route {local}"),
        }
    }
}
