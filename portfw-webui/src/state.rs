use crate::store::RouteStore;
use portfw_api::route::RouteEntry;
use std::{cell::RefCell, rc::Rc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Create,
    Update { original: RouteEntry },
}

/// The single route form presented by the dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub intent: Intent,
    pub local: String,
    pub target: String,
}

impl FormState {
    pub fn is_add(&self) -> bool {
        matches!(self.intent, Intent::Create)
    }

    pub fn is_complete(&self) -> bool {
        !self.local.trim().is_empty() && !self.target.trim().is_empty()
    }

    fn into_submission(self) -> Submission {
        match self.intent {
            Intent::Create => Submission::Create(RouteEntry {
                local: self.local,
                target: self.target,
            }),
            Intent::Update { original } => Submission::Update {
                local: original.local,
                target: self.target,
            },
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Dialog {
    #[default]
    Closed,
    Open(FormState),
}

impl Dialog {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn form(&self) -> Option<&FormState> {
        match self {
            Self::Open(form) => Some(form),
            Self::Closed => None,
        }
    }
}

/// A write against the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(RouteEntry),
    Update { local: String, target: String },
    Delete { local: String },
}

/// Everything the console renders.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(target_arch = "wasm32", derive(yewdux::prelude::Store))]
pub struct ConsoleState {
    pub routes: RouteStore,
    pub dialog: Dialog,
    pub notice: Option<String>,
    in_flight: usize,
    started: bool,
}

impl ConsoleState {
    /// True while a request is in flight, and before the first one is issued.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0 || !self.started
    }

    pub fn begin_add(&mut self) {
        self.dialog = Dialog::Open(FormState {
            intent: Intent::Create,
            local: String::new(),
            target: String::new(),
        });
    }

    pub fn begin_edit(&mut self, local: &str, target: &str) {
        self.dialog = Dialog::Open(FormState {
            intent: Intent::Update {
                original: RouteEntry::new(local, target),
            },
            local: local.to_string(),
            target: target.to_string(),
        });
    }

    /// Edits the key of a route being created. Existing keys are read-only.
    pub fn set_local(&mut self, local: &str) {
        if let Dialog::Open(form) = &mut self.dialog {
            if form.is_add() {
                form.local = local.to_string();
            }
        }
    }

    pub fn set_target(&mut self, target: &str) {
        if let Dialog::Open(form) = &mut self.dialog {
            form.target = target.to_string();
        }
    }

    pub fn cancel(&mut self) {
        self.dialog = Dialog::Closed;
    }

    /// Closes the dialog and returns the write its form describes.
    pub fn submit(&mut self) -> Option<Submission> {
        match std::mem::take(&mut self.dialog) {
            Dialog::Open(form) => Some(form.into_submission()),
            Dialog::Closed => None,
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub(crate) fn request_started(&mut self) {
        self.started = true;
        self.in_flight += 1;
    }

    pub(crate) fn request_finished(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

/// Shared access to the [`ConsoleState`] owned by the rendering layer.
///
/// Every mutation goes through [`StateHandle::reduce`], which must not be
/// held across an `.await`.
pub trait StateHandle: Clone + 'static {
    fn reduce<F>(&self, f: F)
    where
        F: FnOnce(&mut ConsoleState);
}

impl StateHandle for Rc<RefCell<ConsoleState>> {
    fn reduce<F>(&self, f: F)
    where
        F: FnOnce(&mut ConsoleState),
    {
        f(&mut self.borrow_mut());
    }
}
