use std::ops::ControlFlow;

use hashbrown::HashMap;
use tracing::debug;

use super::error::Result;
use super::store::Trie;

/// Occurrence count per matched keyword.
pub type Density<'t> = HashMap<&'t str, usize>;

/// Placeholder used by [`Trie::mask`].
pub const DEFAULT_PLACEHOLDER: char = '*';

impl Trie {
    /// Returns the first keyword found in `text`, without scanning further.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`](super::TrieError::InvalidInput) if
    /// `text` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new(true);
    /// trie.insert("World").unwrap().insert("Hello").unwrap();
    /// assert_eq!(trie.check("say Hello World").unwrap(), Some("Hello"));
    /// assert_eq!(trie.check("say nothing").unwrap(), None);
    /// ```
    pub fn check<'t>(&self, text: &'t str) -> Result<Option<&'t str>> {
        let mut first = None;
        self.scan(text, |m| {
            first = Some(m.keyword);
            ControlFlow::Break(())
        })?;
        Ok(first)
    }

    /// Counts how often each keyword occurs in `text`.
    ///
    /// Every match counts, including keywords nested inside longer ones.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`](super::TrieError::InvalidInput) if
    /// `text` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new(false);
    /// trie.insert("关键字").unwrap().insert("关键").unwrap();
    ///
    /// let density = trie.density("这段文字一共包括2个\"关键\"，1个\"关键字\"").unwrap();
    /// assert_eq!(density["关键"], 2);
    /// assert_eq!(density["关键字"], 1);
    /// ```
    pub fn density<'t>(&self, text: &'t str) -> Result<Density<'t>> {
        let mut density = Density::new();
        self.scan(text, |m| {
            *density.entry(m.keyword).or_insert(0) += 1;
            ControlFlow::Continue(())
        })?;
        debug!(keywords = density.len(), "computed keyword density");
        Ok(density)
    }

    /// Replaces every matched character of `text` with `placeholder`.
    ///
    /// Overlapping matches only mask what is not masked yet, so the result
    /// has exactly as many chars as `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`](super::TrieError::InvalidInput) if
    /// `text` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use libtrie::trie::Trie;
    ///
    /// let mut trie = Trie::new(true);
    /// trie.insert("darn").unwrap();
    /// assert_eq!(trie.replace("darn it, darnit", '#').unwrap(), "#### it, darnit");
    /// ```
    pub fn replace(&self, text: &str, placeholder: char) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        // Byte offset up to which `text` has been copied or masked.
        let mut done = 0;
        self.scan(text, |m| {
            if m.bytes.start > done {
                out.push_str(&text[done..m.bytes.start]);
            }
            let from = done.max(m.bytes.start);
            if m.bytes.end > from {
                let masked = text[from..m.bytes.end].chars().count();
                out.extend(std::iter::repeat(placeholder).take(masked));
                done = m.bytes.end;
            }
            ControlFlow::Continue(())
        })?;
        out.push_str(&text[done..]);
        Ok(out)
    }

    /// [`replace`](Trie::replace) with [`DEFAULT_PLACEHOLDER`].
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::InvalidInput`](super::TrieError::InvalidInput) if
    /// `text` is empty.
    pub fn mask(&self, text: &str) -> Result<String> {
        self.replace(text, DEFAULT_PLACEHOLDER)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::{Mode, TrieError};

    fn trie(mode: Mode, words: &[&str]) -> Trie {
        let mut trie = Trie::with_mode(mode);
        for word in words {
            trie.insert(word).unwrap();
        }
        trie
    }

    fn density<'t>(pairs: &[(&'t str, usize)]) -> Density<'t> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn check_returns_first_match() {
        let trie = trie(Mode::Pictographic, &["关键字", "文字"]);
        assert_eq!(trie.check("这段文字包括关键字").unwrap(), Some("文字"));
        assert_eq!(trie.check("没有").unwrap(), None);
    }

    #[test]
    fn check_stops_after_first_match() {
        let trie = trie(Mode::Pictographic, &["ab"]);
        let mut calls = 0;
        let mut first = None;
        trie.scan("ab ab ab", |m| {
            calls += 1;
            first = Some(m.keyword);
            ControlFlow::Break(())
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert_eq!(first, trie.check("ab ab ab").unwrap());
    }

    #[test]
    fn empty_text_is_invalid() {
        let trie = trie(Mode::Pictographic, &["ab"]);
        assert!(matches!(trie.check(""), Err(TrieError::InvalidInput(_))));
        assert!(matches!(trie.density(""), Err(TrieError::InvalidInput(_))));
        assert!(matches!(trie.replace("", '*'), Err(TrieError::InvalidInput(_))));
        assert!(matches!(trie.mask(""), Err(TrieError::InvalidInput(_))));
    }

    #[test]
    fn density_counts_repeats_and_overlaps() {
        let trie = trie(Mode::Pictographic, &["ab", "abc", "bc"]);
        assert_eq!(
            trie.density("abc ab bcab").unwrap(),
            density(&[("ab", 3), ("abc", 1), ("bc", 2)])
        );
        assert!(trie.density("nothing here").unwrap().is_empty());
    }

    #[test]
    fn replace_masks_matches() {
        let trie = trie(Mode::Pictographic, &["关键"]);
        assert_eq!(trie.replace("一个关键词", '*').unwrap(), "一个**词");
        assert_eq!(trie.mask("关键关键").unwrap(), "****");
        assert_eq!(trie.mask("无").unwrap(), "无");
    }

    #[test]
    fn replace_greedy_overlap_masks_tail_only() {
        let trie = trie(Mode::Pictographic, &["abc", "cde"]);
        assert_eq!(trie.replace("xabcdey", '-').unwrap(), "x-----y");
    }

    #[test]
    fn replace_nested_match_is_not_remasked() {
        let trie = trie(Mode::Pictographic, &["abc", "bc", "c"]);
        assert_eq!(trie.mask("zabcz").unwrap(), "z***z");
    }

    #[test]
    fn replace_keeps_char_length() {
        let trie = trie(Mode::Pictographic, &["😀😀", "😀a"]);
        let text = "x😀😀a😀y";
        let masked = trie.replace(text, '#').unwrap();
        assert_eq!(masked, "x###😀y");
        assert_eq!(masked.chars().count(), text.chars().count());
    }

    #[test]
    fn replace_respects_word_boundaries() {
        let trie = trie(Mode::Symbolic, &["Hell", "Hello"]);
        assert_eq!(trie.mask("Hello eHell \"Hell\"").unwrap(), "***** eHell \"****\"");
    }
}
