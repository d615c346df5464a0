//! Identifier index: maps each live publication id to its node slot.

use std::collections::btree_map::{BTreeMap, Entry};

use crate::error::{GraphError, Result};
use crate::node::NodeKey;

/// Ordered id → node lookup. Holds exactly one entry per live node.
#[derive(Debug)]
pub(crate) struct Index<Id> {
    entries: BTreeMap<Id, NodeKey>,
}

impl<Id: Ord + Clone> Index<Id> {
    pub(crate) fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Register `id`. Fails if another node already owns it.
    pub(crate) fn insert(&mut self, id: Id, key: NodeKey) -> Result<(), Id> {
        match self.entries.entry(id) {
            Entry::Occupied(e) => Err(GraphError::AlreadyExists(e.key().clone())),
            Entry::Vacant(e) => {
                e.insert(key);
                Ok(())
            }
        }
    }

    pub(crate) fn find(&self, id: &Id) -> Result<NodeKey, Id> {
        self.entries
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::NotFound(id.clone()))
    }

    pub(crate) fn contains(&self, id: &Id) -> bool {
        self.entries.contains_key(id)
    }

    pub(crate) fn erase(&mut self, id: &Id) -> Option<NodeKey> {
        self.entries.remove(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
