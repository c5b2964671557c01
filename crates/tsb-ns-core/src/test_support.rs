use std::cell::RefCell;
use std::collections::HashMap;

use serde_json::Value;

use crate::entity::{EntityKind, EntityRecord};
use crate::fetch::{EntityFetcher, FetchError};

/// In-memory fetcher keyed by `(kind, parent_fqn)`; unknown keys list nothing.
#[derive(Default)]
pub(crate) struct StaticFetcher {
    listings: HashMap<(EntityKind, String), Result<Vec<EntityRecord>, FetchError>>,
    calls: RefCell<Vec<(EntityKind, String)>>,
}

impl StaticFetcher {
    pub(crate) fn with(mut self, kind: EntityKind, parent: &str, items: Value) -> Self {
        let records = items
            .as_array()
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(EntityRecord::new)
            .collect();
        self.listings.insert((kind, parent.to_string()), Ok(records));
        self
    }

    pub(crate) fn failing(mut self, kind: EntityKind, parent: &str, error: FetchError) -> Self {
        self.listings.insert((kind, parent.to_string()), Err(error));
        self
    }

    pub(crate) fn was_called(&self, kind: EntityKind, parent: &str) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|(called_kind, called_parent)| *called_kind == kind && called_parent == parent)
    }
}

impl EntityFetcher for StaticFetcher {
    fn fetch_children(
        &self,
        kind: EntityKind,
        parent_fqn: &str,
    ) -> Result<Vec<EntityRecord>, FetchError> {
        self.calls.borrow_mut().push((kind, parent_fqn.to_string()));
        self.listings
            .get(&(kind, parent_fqn.to_string()))
            .cloned()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}
