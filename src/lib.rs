//! # libtrie
//!
//! A keyword [trie](https://en.wikipedia.org/wiki/Trie) for content filtering
//! and keyword density scoring.
//!
//! Keywords are inserted into a [`Trie`](trie::Trie), which then finds every
//! occurrence of every keyword in a text in a single left-to-right pass.
//! On top of that match stream it offers:
//!
//! - [`check`](trie::Trie::check): the first keyword found, if any
//! - [`density`](trie::Trie::density): how often each keyword occurs
//! - [`replace`](trie::Trie::replace): the text with matched characters masked
//!
//! ## Matching modes
//!
//! Scripts that don't separate words (Chinese, Japanese, ...) use
//! [`Mode::Pictographic`](trie::Mode::Pictographic): any substring occurrence
//! counts. Scripts with separators use [`Mode::Symbolic`](trie::Mode::Symbolic),
//! where a match touching a letter, digit or underscore on either side is
//! ignored.
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::Trie;
//!
//! let mut trie = Trie::new(true);
//! trie.insert("Hello").unwrap().insert("World").unwrap().insert("Hell").unwrap();
//!
//! let text = "\"Hello World\" and \"Hello\", but not eHello";
//! let density = trie.density(text).unwrap();
//! assert_eq!(density["Hello"], 2);
//! assert_eq!(density["World"], 1);
//! assert!(!density.contains_key("Hell"));
//!
//! assert_eq!(trie.mask("Hello there").unwrap(), "***** there");
//! ```
//!
//! Keyword lists can also be built in one go:
//!
//! ```
//! use libtrie::trie::{build_trie, Mode};
//!
//! let trie = build_trie(Mode::Pictographic, ["关键字", "关键"]).unwrap();
//! let density = trie.density("这段文字一共包括2个\"关键\"，1个\"关键字\"").unwrap();
//! assert_eq!(density["关键"], 2);
//! assert_eq!(density["关键字"], 1);
//! ```

#![warn(missing_docs)]

/// Keyword trie: node types, scanner, builder and error type.
pub mod trie;
