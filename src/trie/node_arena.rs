//! A flat, index-addressed arena for trie branch nodes.
//!
//! Slots of pruned nodes go on a free-list and are handed out again by later
//! allocations, so repeated insert/remove cycles don't grow the arena.

use super::children::{BranchNode, NodeId};

#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    slots: Vec<BranchNode>,
    free_list: Vec<NodeId>,
}

impl NodeArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        NodeArena::default()
    }

    /// Stores `node` and returns its id, reusing a freed slot when one exists.
    pub fn alloc(&mut self, node: BranchNode) -> NodeId {
        if let Some(id) = self.free_list.pop() {
            self.slots[id.0] = node;
            id
        } else {
            self.slots.push(node);
            NodeId(self.slots.len() - 1)
        }
    }

    /// Releases the slot of `id`. The id must not be used afterwards.
    pub fn free(&mut self, id: NodeId) {
        debug_assert!(!self.free_list.contains(&id), "double free of {id:?}");
        // Reset so a stale slot never looks like a live keyword.
        self.slots[id.0] = BranchNode::default();
        self.free_list.push(id);
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &BranchNode {
        &self.slots[id.0]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut BranchNode {
        &mut self.slots[id.0]
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// Number of slots ever allocated, live or free.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }
}
