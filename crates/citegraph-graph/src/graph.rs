//! The public graph handle.

use citegraph_core::Publication;

use crate::error::{GraphError, Result};
use crate::index::Index;
use crate::node::{NodeKey, Nodes};

/// A citation graph rooted at a single permanent publication.
///
/// The graph owns its root and its id index. It is not `Clone`: moving it
/// hands over every node without copying any of them.
pub struct CitationGraph<P: Publication> {
    index: Index<P::Id>,
    nodes: Nodes<P>,
    root: NodeKey,
}

impl<P: Publication> CitationGraph<P> {
    /// Create a graph holding only the root publication `root_id`.
    pub fn new(root_id: P::Id) -> Self {
        let mut index = Index::new();
        let mut nodes = Nodes::new();
        let root = match nodes.construct(root_id, &mut index) {
            Ok(key) => key,
            Err(_) => unreachable!("a fresh index has no entries"),
        };
        Self { index, nodes, root }
    }

    /// Identifier of the root publication.
    pub fn root_id(&self) -> P::Id {
        self.nodes[self.root].publication.id()
    }

    /// Ids of the publications citing `id`, ascending.
    pub fn get_children(&self, id: &P::Id) -> Result<Vec<P::Id>, P::Id> {
        let node = &self.nodes[self.index.find(id)?];
        Ok(self.sorted_ids(node.children.iter()))
    }

    /// Ids of the publications cited by `id`, ascending.
    pub fn get_parents(&self, id: &P::Id) -> Result<Vec<P::Id>, P::Id> {
        let node = &self.nodes[self.index.find(id)?];
        Ok(self.sorted_ids(node.parents.iter()))
    }

    pub fn exists(&self, id: &P::Id) -> bool {
        self.index.contains(id)
    }

    pub fn get(&self, id: &P::Id) -> Result<&P, P::Id> {
        let key = self.index.find(id)?;
        Ok(&self.nodes[key].publication)
    }

    pub fn get_mut(&mut self, id: &P::Id) -> Result<&mut P, P::Id> {
        let key = self.index.find(id)?;
        Ok(&mut self.nodes[key].publication)
    }

    /// Number of live publications, root included.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false: the root is permanent.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create publication `id` citing `parent_id`.
    pub fn create(&mut self, id: P::Id, parent_id: &P::Id) -> Result<(), P::Id> {
        self.create_with_parents(id, std::slice::from_ref(parent_id))
    }

    /// Create publication `id` citing every publication in `parent_ids`.
    ///
    /// Either the node ends up attached to all listed parents, or the graph is
    /// left exactly as it was. Duplicate parent ids are tolerated. A parent id
    /// equal to `id` is reported as not found, since it did not exist before
    /// the call.
    pub fn create_with_parents(&mut self, id: P::Id, parent_ids: &[P::Id]) -> Result<(), P::Id> {
        if parent_ids.is_empty() {
            return Err(GraphError::EmptyParentList(id));
        }

        let key = self.nodes.construct(id.clone(), &mut self.index)?;
        let mut attached: Vec<NodeKey> = Vec::with_capacity(parent_ids.len());

        for parent_id in parent_ids {
            match self.attach_new(key, parent_id) {
                Ok(Some(parent)) => attached.push(parent),
                Ok(None) => {}
                Err(e) => {
                    for &parent in attached.iter().rev() {
                        self.nodes.unlink(key, parent);
                    }
                    self.nodes.release(key, &mut self.index);
                    tracing::debug!(id = ?id, undone = attached.len(), "Rolled back partial create");
                    return Err(e);
                }
            }
        }

        self.nodes.release(key, &mut self.index);
        tracing::debug!(id = ?id, parents = attached.len(), "Publication created");
        Ok(())
    }

    /// Add the citation `parent_id → child_id` between two existing
    /// publications. Adding an existing citation is a no-op.
    pub fn add_citation(&mut self, child_id: &P::Id, parent_id: &P::Id) -> Result<(), P::Id> {
        let child = self.index.find(child_id)?;
        let parent = self.index.find(parent_id)?;
        if child == self.root {
            return Err(GraphError::RootCitation(child_id.clone()));
        }

        let added = self
            .nodes
            .attach(child, parent)
            .map_err(|_| GraphError::CapacityExhausted {
                child: child_id.clone(),
                parent: parent_id.clone(),
            })?;
        if added {
            tracing::debug!(child = ?child_id, parent = ?parent_id, "Citation added");
        }
        Ok(())
    }

    /// Remove publication `id` along with every descendant left without a
    /// path to the root.
    pub fn remove(&mut self, id: &P::Id) -> Result<(), P::Id> {
        let key = self.index.find(id)?;
        if key == self.root {
            return Err(GraphError::CannotRemoveRoot(id.clone()));
        }

        self.nodes.detach(key);
        let destroyed = self.nodes.collect(key, &mut self.index);
        tracing::debug!(id = ?id, destroyed, "Publication removed");
        Ok(())
    }

    /// Attach the node under construction to `parent_id`. Returns the parent
    /// key when a new edge was added.
    fn attach_new(&mut self, key: NodeKey, parent_id: &P::Id) -> Result<Option<NodeKey>, P::Id> {
        let parent = self.index.find(parent_id)?;
        if parent == key {
            return Err(GraphError::NotFound(parent_id.clone()));
        }

        match self.nodes.attach(key, parent) {
            Ok(true) => Ok(Some(parent)),
            Ok(false) => Ok(None),
            Err(_) => Err(GraphError::CapacityExhausted {
                child: self.nodes[key].id().clone(),
                parent: parent_id.clone(),
            }),
        }
    }

    fn sorted_ids<'a>(&self, keys: impl Iterator<Item = &'a NodeKey>) -> Vec<P::Id> {
        let mut ids: Vec<P::Id> = keys.map(|&k| self.nodes[k].id().clone()).collect();
        ids.sort();
        ids
    }
}
