use std::fmt;

use itertools::{Itertools, Position};
use smallvec::SmallVec;
use tracing::debug;

use super::boundary::Mode;
use super::builder::{IntoKeyword, Spelled};
use super::children::{BranchNode, NodeId, NodeRef};
use super::error::{Result, TrieError, EMPTY_KEYWORD};
use super::node_arena::NodeArena;

/// The edge target marking a keyword that ends with no continuation.
pub const DEAD_END: NodeRef = NodeRef::Sentinel;

/// Marker printed by [`Trie::dump`] for a branch node that also ends a keyword.
pub const OPEN_END: &str = "$$";

/// Printed by [`Trie::dump`] for a [`DEAD_END`] edge.
pub const DEAD_END_MARKER: &str = "0";

/// The branch nodes visited while walking a keyword, root first.
///
/// Entry `i` is the node holding the edge for the keyword's `i`-th character.
pub type AccessPath = SmallVec<[NodeId; 32]>;

/// A keyword trie that owns all of its nodes.
///
/// Leaves that end exactly one keyword don't allocate a node: their edge
/// points at [`DEAD_END`]. A keyword that is a prefix of a longer one ends on
/// a branch node flagged open-end instead.
///
/// # Examples
///
/// ```
/// use libtrie::trie::Trie;
///
/// let mut trie = Trie::new(false);
/// trie.insert("关键").unwrap().insert("关键字").unwrap();
/// assert!(trie.contains("关键"));
/// assert!(!trie.contains("关"));
///
/// trie.remove("关键").unwrap();
/// assert!(!trie.contains("关键"));
/// assert!(trie.contains("关键字"));
/// ```
pub struct Trie {
    pub(crate) arena: NodeArena,
    pub(crate) root: NodeId,
    pub(crate) mode: Mode,
    len: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Trie::with_mode(Mode::default())
    }
}

impl Trie {
    /// Creates an empty trie. `symbolic` selects word-boundary matching for
    /// scripts that separate words; `false` matches every substring.
    pub fn new(symbolic: bool) -> Self {
        Trie::with_mode(Mode::from_symbolic(symbolic))
    }

    /// Creates an empty trie matching in the given mode.
    pub fn with_mode(mode: Mode) -> Self {
        let mut arena = NodeArena::new();
        let root = arena.alloc(BranchNode::new(false));
        Trie {
            arena,
            root,
            mode,
            len: 0,
        }
    }

    /// The matching mode fixed at construction.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of distinct keywords stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no keyword is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of live branch nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns the root node.
    pub fn root(&self) -> &BranchNode {
        self.arena.get(self.root)
    }

    /// Returns the branch node an edge points at, or `None` for [`DEAD_END`].
    pub fn branch(&self, target: NodeRef) -> Option<&BranchNode> {
        match target {
            NodeRef::Sentinel => None,
            NodeRef::Branch(id) => Some(self.arena.get(id)),
        }
    }

    /// True if reaching `target` completes a keyword.
    #[inline]
    pub(crate) fn ends_keyword(&self, target: NodeRef) -> bool {
        match target {
            NodeRef::Sentinel => true,
            NodeRef::Branch(id) => self.arena.get(id).is_open_end(),
        }
    }

    /// Adds a keyword. Adding a keyword that is already present changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`] if the keyword is empty; the trie
    /// is left untouched.
    pub fn insert(&mut self, word: impl IntoKeyword) -> Result<&mut Self> {
        let word = word.collect_keyword();
        if word.is_empty() {
            return Err(TrieError::InvalidInput(EMPTY_KEYWORD));
        }

        let mut node = self.root;
        let mut added = false;
        for (position, &ch) in word.iter().with_position() {
            let edge = self.arena.get(node).get(ch);
            if matches!(position, Position::Last | Position::Only) {
                match edge {
                    Some(NodeRef::Branch(id)) => {
                        let target = self.arena.get_mut(id);
                        added = !target.is_open_end();
                        target.set_open_end(true);
                    }
                    Some(NodeRef::Sentinel) => {}
                    None => {
                        self.arena.get_mut(node).set_child(ch, DEAD_END);
                        added = true;
                    }
                }
                break;
            }
            node = match edge {
                Some(NodeRef::Branch(id)) => id,
                Some(NodeRef::Sentinel) => {
                    // A shorter keyword ends here: promote its leaf.
                    let id = self.arena.alloc(BranchNode::new(true));
                    self.arena.get_mut(node).set_child(ch, NodeRef::Branch(id));
                    id
                }
                None => {
                    let id = self.arena.alloc(BranchNode::new(false));
                    self.arena.get_mut(node).set_child(ch, NodeRef::Branch(id));
                    id
                }
            };
        }

        if added {
            self.len += 1;
            debug!(keyword = %Spelled(&word), nodes = self.node_count(), "inserted keyword");
        }
        Ok(self)
    }

    /// Walks `word` and returns its access path if it is a stored keyword.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`] if the keyword is empty.
    pub fn lookup(&self, word: impl IntoKeyword) -> Result<Option<AccessPath>> {
        self.lookup_chars(&word.collect_keyword())
    }

    fn lookup_chars(&self, word: &[char]) -> Result<Option<AccessPath>> {
        if word.is_empty() {
            return Err(TrieError::InvalidInput(EMPTY_KEYWORD));
        }
        let mut path = AccessPath::new();
        let mut target = NodeRef::Branch(self.root);
        for &ch in word {
            let NodeRef::Branch(id) = target else {
                return Ok(None);
            };
            path.push(id);
            match self.arena.get(id).get(ch) {
                Some(next) => target = next,
                None => return Ok(None),
            }
        }
        Ok(self.ends_keyword(target).then_some(path))
    }

    /// Returns `true` if the keyword is stored. Empty input is never stored.
    pub fn contains(&self, word: impl IntoKeyword) -> bool {
        matches!(self.lookup(word), Ok(Some(_)))
    }

    /// Removes a keyword. Removing an absent keyword changes nothing.
    ///
    /// Nodes that no longer lead to any keyword are freed, from the deepest
    /// upward, and their slots are reused by later inserts.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`] if the keyword is empty.
    pub fn remove(&mut self, word: impl IntoKeyword) -> Result<&mut Self> {
        let word = word.collect_keyword();
        let Some(path) = self.lookup_chars(&word)? else {
            return Ok(self);
        };

        let last = word.len() - 1;
        match self.arena.get(path[last]).get(word[last]) {
            Some(NodeRef::Branch(id)) => self.arena.get_mut(id).set_open_end(false),
            Some(NodeRef::Sentinel) => self.prune(&path, &word),
            None => return Ok(self),
        }

        self.len -= 1;
        debug!(keyword = %Spelled(&word), nodes = self.node_count(), "removed keyword");
        Ok(self)
    }

    /// Deletes the dead-end edge at the bottom of `path`, then frees every
    /// ancestor left without edges. An emptied ancestor that still ends a
    /// keyword becomes a dead end in its parent.
    fn prune(&mut self, path: &[NodeId], word: &[char]) {
        for depth in (0..path.len()).rev() {
            let id = path[depth];
            self.arena.get_mut(id).remove_child(word[depth]);

            let node = self.arena.get(id);
            if depth == 0 || node.child_count() > 0 {
                break;
            }
            if node.is_open_end() {
                self.arena.get_mut(path[depth - 1]).set_child(word[depth - 1], DEAD_END);
                self.arena.free(id);
                break;
            }
            debug_assert!(node.is_dead());
            self.arena.free(id);
        }
    }

    /// Returns every stored keyword, in `char` order.
    pub fn keywords(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.len);
        let mut prefix = String::new();
        self.collect_keywords(self.root, &mut prefix, &mut words);
        words
    }

    fn collect_keywords(&self, id: NodeId, prefix: &mut String, words: &mut Vec<String>) {
        for (ch, target) in self.arena.get(id).children() {
            prefix.push(ch);
            match target {
                NodeRef::Sentinel => words.push(prefix.clone()),
                NodeRef::Branch(child) => {
                    if self.arena.get(child).is_open_end() {
                        words.push(prefix.clone());
                    }
                    self.collect_keywords(child, prefix, words);
                }
            }
            prefix.pop();
        }
    }

    /// Renders the node graph, one edge per line, indented by depth.
    ///
    /// Dead-end edges print as [`DEAD_END_MARKER`] and open-end nodes carry an
    /// [`OPEN_END`] line. Meant for debugging; the format is not stable.
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::default();
    /// trie.insert("H").unwrap().insert("He").unwrap();
    /// assert_eq!(trie.dump(), "H: \n $$: true\n e: 0");
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.dump_node(self.root, 0, &mut out);
        out
    }

    fn dump_node(&self, id: NodeId, depth: usize, out: &mut String) {
        let node = self.arena.get(id);
        if node.is_open_end() {
            line_start(out, depth);
            out.push_str(OPEN_END);
            out.push_str(": true");
        }
        for (ch, target) in node.children() {
            line_start(out, depth);
            out.push(ch);
            out.push_str(": ");
            match target {
                NodeRef::Sentinel => out.push_str(DEAD_END_MARKER),
                NodeRef::Branch(child) => self.dump_node(child, depth + 1, out),
            }
        }
    }
}

fn line_start(out: &mut String, depth: usize) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.extend(std::iter::repeat(' ').take(depth));
}

impl fmt::Debug for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trie")
            .field("mode", &self.mode)
            .field("keywords", &self.len)
            .field("node_count", &self.node_count())
            .field("slots", &self.arena.capacity())
            .finish()
    }
}
