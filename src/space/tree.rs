//! Arena-backed space tree.
//!
//! All nodes live in one `Vec` owned by the tree; relationships are stored
//! as [`SpaceId`] indices. Nodes are created already attached and ids are
//! never re-parented, so the structure is acyclic by construction. Ids are
//! only meaningful for the tree that issued them.

use crate::common::{Error, Result};

use super::node::Space;

/// Index handle of a space inside a [`SpaceTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpaceId(usize);

impl SpaceId {
    /// Arena slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

/// The tree of spaces, owner of all [`Space`] values.
#[derive(Debug, Default)]
pub struct SpaceTree {
    nodes: Vec<Space>,
}

impl SpaceTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        SpaceTree::default()
    }

    /// Add a space with no parent.
    pub fn add_root(&mut self, space: Space) -> SpaceId {
        let id = SpaceId(self.nodes.len());
        self.nodes.push(space);
        id
    }

    /// Add a space as the last child of `parent`.
    ///
    /// Sets the child's parent back-reference and appends it to the parent's
    /// child list, preserving attachment order.
    pub fn add_child(&mut self, parent: SpaceId, mut space: Space) -> Result<SpaceId> {
        if parent.index() >= self.nodes.len() {
            return Err(Error::SpaceNotFound(parent.index()));
        }
        let id = SpaceId(self.nodes.len());
        space.parent = Some(parent);
        self.nodes.push(space);
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    /// Resolve a space by id.
    pub fn get(&self, id: SpaceId) -> Option<&Space> {
        self.nodes.get(id.index())
    }

    /// Resolve a space mutably by id.
    pub fn get_mut(&mut self, id: SpaceId) -> Option<&mut Space> {
        self.nodes.get_mut(id.index())
    }

    /// Walk the parent chain of `id`, nearest ancestor first. The space
    /// itself is not yielded.
    pub fn ancestors(&self, id: SpaceId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.get(id).and_then(Space::parent),
        }
    }

    /// Number of spaces in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no spaces.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Iterator over a space's ancestors, nearest first.
#[derive(Debug)]
pub struct Ancestors<'a> {
    tree: &'a SpaceTree,
    next: Option<SpaceId>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = &'a Space;

    fn next(&mut self) -> Option<Self::Item> {
        let space = self.tree.get(self.next?)?;
        self.next = space.parent();
        Some(space)
    }
}
