/// Boundary rules for the two matching modes.
pub mod boundary;
/// Bulk construction from word iterators and keyword list files.
pub mod builder;
/// Branch nodes and their edges.
pub mod children;
/// Error type shared by all trie operations.
pub mod error;
/// Internal index-addressed node arena.
pub(crate) mod node_arena;
/// `check`, `density` and `replace` on top of the scanner.
pub mod ops;
/// The single-pass scanner.
pub mod scan;
/// The trie itself: insertion, lookup and removal.
pub mod store;

#[cfg(test)]
mod property_test;

pub use boundary::Mode;
pub use builder::{build_trie, build_trie_from_file, IntoKeyword, Keyword};
pub use children::{BranchNode, NodeId, NodeRef};
pub use error::{Result, TrieError};
pub use ops::{Density, DEFAULT_PLACEHOLDER};
pub use scan::Match;
pub use store::{AccessPath, Trie, DEAD_END, DEAD_END_MARKER, OPEN_END};
