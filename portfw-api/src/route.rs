use indexmap::IndexMap;
use serde_derive::{Deserialize, Serialize};

/// Wire form of the route table: `local -> target`, in the order the server sent it.
pub type RouteMapping = IndexMap<String, String>;

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteEntry {
    pub local: String,
    pub target: String,
}

impl RouteEntry {
    pub fn new(local: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            local: local.into(),
            target: target.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteUpdate {
    pub target: String,
}
