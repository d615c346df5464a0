//! Node storage and the ownership rules that decide node lifetime.
//!
//! Nodes live in a slot arena and refer to each other by `NodeKey`. A parent's
//! `children` set holds the owning links; a child's `parents` set holds the
//! back-links. A node is owned by each of its parents plus, optionally, an
//! anchor (the graph handle for the root, or an in-flight `create`). When the
//! last owner lets go the node is destroyed, which can orphan its children in
//! turn. Destruction runs off a worklist, so a long citation chain does not
//! deepen the call stack.

use std::collections::{HashSet, TryReserveError, VecDeque};
use std::ops;

use citegraph_core::Publication;

use crate::error::Result;
use crate::index::Index;

/// Stable handle to a node slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct NodeKey(pub(crate) usize);

type KeySet = HashSet<NodeKey>;

/// One vertex of the citation graph.
pub(crate) struct Node<P: Publication> {
    pub(crate) publication: P,
    /// The node's own index entry, erased when the node is destroyed.
    entry: P::Id,
    /// Owning links: publications that cite this one.
    pub(crate) children: KeySet,
    /// Back-links: publications this one cites.
    pub(crate) parents: KeySet,
    /// Owned from outside the graph edges.
    anchored: bool,
}

impl<P: Publication> Node<P> {
    pub(crate) fn id(&self) -> &P::Id {
        &self.entry
    }

    fn is_orphan(&self) -> bool {
        !self.anchored && self.parents.is_empty()
    }
}

/// Slot arena owning every live node.
pub(crate) struct Nodes<P: Publication> {
    slots: Vec<Option<Node<P>>>,
    free: Vec<usize>,
}

impl<P: Publication> Nodes<P> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
        }
    }

    /// Construct an anchored node for `id` and register it in `index`.
    ///
    /// Nothing is allocated in the arena if the id is already taken.
    pub(crate) fn construct(
        &mut self,
        id: P::Id,
        index: &mut Index<P::Id>,
    ) -> Result<NodeKey, P::Id> {
        let key = NodeKey(self.free.last().copied().unwrap_or(self.slots.len()));
        index.insert(id.clone(), key)?;

        let node = Node {
            publication: P::from_id(id.clone()),
            entry: id,
            children: KeySet::default(),
            parents: KeySet::default(),
            anchored: true,
        };
        match self.free.pop() {
            Some(slot) => self.slots[slot] = Some(node),
            None => self.slots.push(Some(node)),
        }
        Ok(key)
    }

    /// Add the edge `parent → child`.
    ///
    /// Returns `Ok(false)` if the edge already existed. Both sets are grown
    /// before either is written, so a reservation failure leaves no half edge.
    pub(crate) fn attach(
        &mut self,
        child: NodeKey,
        parent: NodeKey,
    ) -> std::result::Result<bool, TryReserveError> {
        if self[child].parents.contains(&parent) {
            return Ok(false);
        }
        self[child].parents.try_reserve(1)?;
        self[parent].children.try_reserve(1)?;

        self[child].parents.insert(parent);
        self[parent].children.insert(child);
        Ok(true)
    }

    /// Remove the single edge `parent → child`, without collecting.
    pub(crate) fn unlink(&mut self, child: NodeKey, parent: NodeKey) {
        self[parent].children.remove(&child);
        self[child].parents.remove(&parent);
    }

    /// Remove every incoming edge of `key`, without collecting.
    pub(crate) fn detach(&mut self, key: NodeKey) {
        let parents: Vec<NodeKey> = self[key].parents.drain().collect();
        for parent in parents {
            self[parent].children.remove(&key);
        }
    }

    /// Drop the anchor on `key` and collect it if nothing else owns it.
    pub(crate) fn release(&mut self, key: NodeKey, index: &mut Index<P::Id>) -> usize {
        self[key].anchored = false;
        self.collect(key, index)
    }

    /// Destroy `start` if it is orphaned, then everything that loses its last
    /// owner as a result. Returns the number of destroyed nodes.
    pub(crate) fn collect(&mut self, start: NodeKey, index: &mut Index<P::Id>) -> usize {
        if !self[start].is_orphan() {
            return 0;
        }

        let mut destroyed = 0;
        let mut queue = VecDeque::from([start]);
        while let Some(key) = queue.pop_front() {
            let node = self.take(key);
            index.erase(&node.entry);

            // An orphan sits in no `children` set, so every child here is live.
            for child in node.children {
                let child_node = &mut self[child];
                child_node.parents.remove(&key);
                if child_node.is_orphan() {
                    queue.push_back(child);
                }
            }
            destroyed += 1;
        }
        destroyed
    }

    fn take(&mut self, key: NodeKey) -> Node<P> {
        let node = self.slots[key.0].take();
        self.free.push(key.0);
        match node {
            Some(node) => node,
            None => panic!("node slot {} is already free", key.0),
        }
    }
}

impl<P: Publication> ops::Index<NodeKey> for Nodes<P> {
    type Output = Node<P>;

    fn index(&self, key: NodeKey) -> &Node<P> {
        match self.slots.get(key.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node key {}", key.0),
        }
    }
}

impl<P: Publication> ops::IndexMut<NodeKey> for Nodes<P> {
    fn index_mut(&mut self, key: NodeKey) -> &mut Node<P> {
        match self.slots.get_mut(key.0) {
            Some(Some(node)) => node,
            _ => panic!("stale node key {}", key.0),
        }
    }
}
