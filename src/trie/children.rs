/// Index of a branch node inside the trie's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// The target of an edge: either a real branch node or the dead-end sentinel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeRef {
    /// A keyword ends on this edge and nothing continues past it.
    ///
    /// Takes no arena slot; a leaf only becomes a [`NodeRef::Branch`] once a
    /// longer keyword extends it.
    Sentinel,
    /// A branch node stored in the arena.
    Branch(NodeId),
}

/// The edges leaving a branch node, kept sorted by character.
///
/// Doesn't allocate until there are at least three edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) enum Children {
    /// No edges.
    #[default]
    None,
    /// Exactly one edge.
    One((char, NodeRef)),
    /// Exactly two edges, in order.
    Two((char, NodeRef, char, NodeRef)),
    /// Three or more edges stored in a sorted vector.
    Many(Vec<(char, NodeRef)>),
}

impl Children {
    /// Returns the edge at the specified index, or `None` if out of bounds.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> Option<(char, NodeRef)> {
        match self {
            Children::None => None,
            Children::One(edge) => (index == 0).then_some(*edge),
            Children::Two((c1, n1, c2, n2)) => match index {
                0 => Some((*c1, *n1)),
                1 => Some((*c2, *n2)),
                _ => None,
            },
            Children::Many(edges) => edges.get(index).copied(),
        }
    }

    /// Returns the target of the edge labeled `letter`.
    #[inline]
    pub(crate) fn find(&self, letter: char) -> Option<NodeRef> {
        match self {
            Children::None => None,
            Children::One((c, n)) => (*c == letter).then_some(*n),
            Children::Two((c1, n1, c2, n2)) => {
                if letter == *c1 {
                    Some(*n1)
                } else if letter == *c2 {
                    Some(*n2)
                } else {
                    None
                }
            }
            Children::Many(edges) => edges
                .binary_search_by_key(&letter, |&(c, _)| c)
                .ok()
                .map(|i| edges[i].1),
        }
    }

    /// Number of edges.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        match self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(edges) => edges.len(),
        }
    }

    /// True if there are no edges.
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Points the edge labeled `letter` at `target`, adding it in sorted
    /// position if it doesn't exist yet.
    pub(crate) fn set(&mut self, letter: char, target: NodeRef) {
        match self {
            Children::None => *self = Children::One((letter, target)),
            Children::One((c1, n1)) => {
                if *c1 == letter {
                    *n1 = target;
                } else if letter < *c1 {
                    *self = Children::Two((letter, target, *c1, *n1));
                } else {
                    *self = Children::Two((*c1, *n1, letter, target));
                }
            }
            Children::Two((c1, n1, c2, n2)) => {
                if *c1 == letter {
                    *n1 = target;
                } else if *c2 == letter {
                    *n2 = target;
                } else {
                    let mut edges = vec![(*c1, *n1), (*c2, *n2)];
                    let pos = edges.partition_point(|&(c, _)| c < letter);
                    edges.insert(pos, (letter, target));
                    *self = Children::Many(edges);
                }
            }
            Children::Many(edges) => match edges.binary_search_by_key(&letter, |&(c, _)| c) {
                Ok(i) => edges[i].1 = target,
                Err(i) => edges.insert(i, (letter, target)),
            },
        }
    }

    /// Removes the edge labeled `letter`, returning its target if it existed.
    pub(crate) fn remove(&mut self, letter: char) -> Option<NodeRef> {
        match self {
            Children::None => None,
            Children::One((c, n)) => {
                if *c != letter {
                    return None;
                }
                let removed = *n;
                *self = Children::None;
                Some(removed)
            }
            Children::Two((c1, n1, c2, n2)) => {
                let (c1, n1, c2, n2) = (*c1, *n1, *c2, *n2);
                if c1 == letter {
                    *self = Children::One((c2, n2));
                    Some(n1)
                } else if c2 == letter {
                    *self = Children::One((c1, n1));
                    Some(n2)
                } else {
                    None
                }
            }
            Children::Many(edges) => {
                let i = edges.binary_search_by_key(&letter, |&(c, _)| c).ok()?;
                let (_, removed) = edges.remove(i);
                if let [(c1, n1), (c2, n2)] = edges[..] {
                    *self = Children::Two((c1, n1, c2, n2));
                }
                Some(removed)
            }
        }
    }
}

/// An iterator over the edges of a [`BranchNode`], in character order.
#[derive(Clone)]
pub struct ChildIter<'t> {
    children: &'t Children,
    index: usize,
}

impl Iterator for ChildIter<'_> {
    type Item = (char, NodeRef);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.children.get(self.index)?;
        self.index += 1;
        Some(edge)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ChildIter<'_> {}

/// A node of the trie that owns outgoing edges.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BranchNode {
    children: Children,
    open_end: bool,
}

impl BranchNode {
    /// Creates an empty branch node.
    ///
    /// # Arguments
    ///
    /// * `open_end` - Whether a keyword ends at this node while longer ones
    ///   continue past it
    pub fn new(open_end: bool) -> Self {
        BranchNode {
            children: Children::None,
            open_end,
        }
    }

    /// Returns the target of `letter`'s edge, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: char) -> Option<NodeRef> {
        self.children.find(letter)
    }

    /// True if a keyword ends at this node and longer keywords extend past it.
    #[inline]
    pub fn is_open_end(&self) -> bool {
        self.open_end
    }

    /// Returns an iterator over all edges of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_> {
        ChildIter {
            children: &self.children,
            index: 0,
        }
    }

    /// Returns the number of edges.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True if this node no longer marks a keyword and has nothing below it.
    #[inline]
    pub(crate) fn is_dead(&self) -> bool {
        !self.open_end && self.children.is_empty()
    }

    pub(crate) fn set_open_end(&mut self, open_end: bool) {
        self.open_end = open_end;
    }

    pub(crate) fn set_child(&mut self, letter: char, target: NodeRef) {
        self.children.set(letter, target);
    }

    pub(crate) fn remove_child(&mut self, letter: char) -> Option<NodeRef> {
        self.children.remove(letter)
    }
}
