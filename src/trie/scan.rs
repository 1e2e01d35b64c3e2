//! Single-pass multi-keyword matching.
//!
//! The scanner walks the text once, one `char` at a time, and keeps a draft
//! for every keyword prefix that ends at the current position. Each step
//! extends the surviving drafts by the current character and seeds a new one
//! from the root, so the number of live drafts never exceeds the length of
//! the longest keyword.

use std::ops::{ControlFlow, Range};

use smallvec::SmallVec;
use tracing::trace;

use super::children::{NodeId, NodeRef};
use super::error::{Result, TrieError, EMPTY_TEXT};
use super::store::Trie;

/// A keyword occurrence found in a text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Match<'t> {
    /// The matched keyword, borrowed from the scanned text.
    pub keyword: &'t str,
    /// Char offset of the first matched character.
    pub start: usize,
    /// Char offset of the last matched character.
    pub end: usize,
    /// Byte range of the match in the scanned text.
    pub bytes: Range<usize>,
}

impl Match<'_> {
    /// Number of chars covered by the match.
    pub fn char_len(&self) -> usize {
        self.end - self.start + 1
    }
}

/// A keyword prefix that ends at the current position.
#[derive(Clone, Copy, Debug)]
struct Draft {
    start: usize,
    start_byte: usize,
    node: NodeId,
}

type Drafts = SmallVec<[Draft; 16]>;

impl Trie {
    /// Scans `text` once and feeds every keyword occurrence to `on_match`.
    ///
    /// Matches are reported in order of their end offset. Matches sharing an
    /// end offset come longest first. In [`Mode::Symbolic`](super::Mode)
    /// occurrences touching a word character are skipped. Returning
    /// [`ControlFlow::Break`] from `on_match` stops the scan at once.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`] if `text` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new(true);
    /// trie.insert("Hello").unwrap();
    ///
    /// let mut ends = Vec::new();
    /// trie.scan("Hello, eHello and Hello", |m| {
    ///     ends.push(m.end);
    ///     ControlFlow::Continue(())
    /// })
    /// .unwrap();
    /// assert_eq!(ends, [4, 22]);
    /// ```
    pub fn scan<'t, F>(&self, text: &'t str, mut on_match: F) -> Result<()>
    where
        F: FnMut(Match<'t>) -> ControlFlow<()>,
    {
        if text.is_empty() {
            return Err(TrieError::InvalidInput(EMPTY_TEXT));
        }

        let mut drafts = Drafts::new();
        let mut extended = Drafts::new();
        for (pos, (byte, ch)) in text.char_indices().enumerate() {
            let end_byte = byte + ch.len_utf8();

            for draft in drafts.drain(..) {
                let Some(target) = self.arena.get(draft.node).get(ch) else {
                    continue;
                };
                if self.step(text, draft, target, pos, end_byte, &mut on_match).is_break() {
                    return Ok(());
                }
                if let NodeRef::Branch(node) = target {
                    extended.push(Draft { node, ..draft });
                }
            }

            if let Some(target) = self.root().get(ch) {
                let seed = Draft {
                    start: pos,
                    start_byte: byte,
                    node: self.root,
                };
                if self.step(text, seed, target, pos, end_byte, &mut on_match).is_break() {
                    return Ok(());
                }
                if let NodeRef::Branch(node) = target {
                    extended.push(Draft { node, ..seed });
                }
            }

            std::mem::swap(&mut drafts, &mut extended);
        }
        Ok(())
    }

    /// Reports the match that `draft` completes by moving to `target`, if any.
    fn step<'t, F>(
        &self,
        text: &'t str,
        draft: Draft,
        target: NodeRef,
        pos: usize,
        end_byte: usize,
        on_match: &mut F,
    ) -> ControlFlow<()>
    where
        F: FnMut(Match<'t>) -> ControlFlow<()>,
    {
        if !self.ends_keyword(target) {
            return ControlFlow::Continue(());
        }
        let bytes = draft.start_byte..end_byte;
        if !self.mode.accepts(text, bytes.clone()) {
            return ControlFlow::Continue(());
        }
        let found = Match {
            keyword: &text[bytes.clone()],
            start: draft.start,
            end: pos,
            bytes,
        };
        trace!(keyword = found.keyword, end = found.end, "keyword matched");
        on_match(found)
    }

    /// Collects every keyword occurrence in `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`] if `text` is empty.
    pub fn matches<'t>(&self, text: &'t str) -> Result<Vec<Match<'t>>> {
        let mut found = Vec::new();
        self.scan(text, |m| {
            found.push(m);
            ControlFlow::Continue(())
        })?;
        Ok(found)
    }
}
