use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;
use tracing::debug;

use super::boundary::Mode;
use super::error::Result;
use super::store::Trie;

/// A keyword collected into Unicode scalar values.
pub type Keyword = SmallVec<[char; 32]>;

/// Trait for types that can be used as a keyword.
///
/// Implemented for common string and `char` sequence types so that
/// [`Trie::insert`], [`Trie::remove`] and friends accept them directly.
pub trait IntoKeyword {
    /// Collects this keyword into a character buffer.
    fn collect_keyword(self) -> Keyword;
}

impl IntoKeyword for &str {
    fn collect_keyword(self) -> Keyword {
        self.chars().collect()
    }
}

impl IntoKeyword for &&str {
    fn collect_keyword(self) -> Keyword {
        self.chars().collect()
    }
}

impl IntoKeyword for String {
    fn collect_keyword(self) -> Keyword {
        self.chars().collect()
    }
}

impl IntoKeyword for &String {
    fn collect_keyword(self) -> Keyword {
        self.chars().collect()
    }
}

impl IntoKeyword for &[char] {
    fn collect_keyword(self) -> Keyword {
        self.iter().copied().collect()
    }
}

impl IntoKeyword for Vec<char> {
    fn collect_keyword(self) -> Keyword {
        self.into_iter().collect()
    }
}

/// Displays a collected keyword as text, for log fields.
pub(crate) struct Spelled<'k>(pub(crate) &'k [char]);

impl fmt::Display for Spelled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|ch| fmt::Write::write_char(f, *ch))
    }
}

/// Builds a trie from an iterator of keywords.
///
/// Keywords may come in any order and may repeat.
///
/// # Errors
///
/// Returns [`TrieError::InvalidInput`](super::TrieError::InvalidInput) if any
/// keyword is empty.
///
/// # Examples
///
/// ```
/// use libtrie::trie::{build_trie, Mode};
///
/// let trie = build_trie(Mode::Symbolic, ["Hello", "World", "Hell"]).unwrap();
/// assert!(trie.contains("Hell"));
/// assert_eq!(trie.len(), 3);
/// ```
pub fn build_trie<W: IntoKeyword>(mode: Mode, words: impl IntoIterator<Item = W>) -> Result<Trie> {
    let mut trie = Trie::with_mode(mode);
    for word in words {
        trie.insert(word)?;
    }
    Ok(trie)
}

/// Builds a trie from a keyword list file.
///
/// Reads one keyword per line. Trailing whitespace is trimmed, empty lines
/// are skipped and lines starting with '#' are treated as comments.
///
/// # Examples
///
/// ```no_run
/// use libtrie::trie::{build_trie_from_file, Mode};
///
/// let trie = build_trie_from_file(Mode::Symbolic, "blocklist.txt").unwrap();
/// ```
pub fn build_trie_from_file(mode: Mode, path: impl AsRef<Path>) -> Result<Trie> {
    let path = path.as_ref();
    let mut trie = Trie::with_mode(mode);
    let mut reader = BufReader::new(File::open(path)?);

    // Reuse one line buffer for the whole file.
    let mut buf = String::with_capacity(80);
    while reader.read_line(&mut buf)? > 0 {
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            trie.insert(word)?;
        }
        buf.clear();
    }
    debug!(path = %path.display(), keywords = trie.len(), "loaded keyword list");
    Ok(trie)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
