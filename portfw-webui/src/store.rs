use portfw_api::route::{RouteEntry, RouteMapping};

/// Last route table fetched from the server.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteStore {
    entries: Vec<RouteEntry>,
    loaded: bool,
}

impl RouteStore {
    /// Replaces every entry with the contents of `mapping`.
    ///
    /// Keys that are plain integers (ports, mostly) come first in ascending
    /// numeric order; all other keys follow in the order they were received.
    pub fn replace_from(&mut self, mapping: RouteMapping) {
        let (mut numeric, named): (Vec<_>, Vec<_>) = mapping
            .into_iter()
            .map(|(local, target)| (numeric_key(&local), RouteEntry { local, target }))
            .partition(|(key, _)| key.is_some());
        numeric.sort_by_key(|(key, _)| *key);

        self.entries = numeric
            .into_iter()
            .chain(named)
            .map(|(_, entry)| entry)
            .collect();
        self.loaded = true;
    }

    pub fn current(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn numeric_key(key: &str) -> Option<u32> {
    if key.len() > 1 && key.starts_with('0') {
        return None;
    }
    if !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse::<u32>().ok().filter(|n| *n != u32::MAX)
}
