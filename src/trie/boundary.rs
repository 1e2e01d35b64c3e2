use std::ops::Range;

/// Selects whether matches must sit on word boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Scripts without separators between words (Chinese, Japanese, ...).
    /// Every substring occurrence counts.
    #[default]
    Pictographic,
    /// Scripts with separators between words. A match directly preceded or
    /// followed by a word character is rejected, so `Hello` doesn't match
    /// inside `eHello`.
    Symbolic,
}

impl Mode {
    /// Returns the mode for the `symbolic` flag.
    pub fn from_symbolic(symbolic: bool) -> Self {
        if symbolic {
            Mode::Symbolic
        } else {
            Mode::Pictographic
        }
    }

    /// True for [`Mode::Symbolic`].
    pub fn is_symbolic(self) -> bool {
        self == Mode::Symbolic
    }

    /// Checks whether the match covering `bytes` of `text` stands on its own.
    ///
    /// `bytes` must lie on char boundaries of `text`.
    pub fn accepts(self, text: &str, bytes: Range<usize>) -> bool {
        if !self.is_symbolic() {
            return true;
        }
        let before = text[..bytes.start].chars().next_back();
        let after = text[bytes.end..].chars().next();
        !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
    }
}

/// ASCII letters, digits and underscore.
///
/// Other scripts never count, so a Western keyword embedded in Chinese text
/// or glued to an accented letter still matches.
#[inline]
pub fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod test {
    use super::*;

    fn accepts(mode: Mode, text: &str, word: &str) -> bool {
        let start = text.find(word).unwrap();
        mode.accepts(text, start..start + word.len())
    }

    #[test]
    fn pictographic_accepts_everything() {
        assert!(accepts(Mode::Pictographic, "eHello", "Hello"));
        assert!(accepts(Mode::Pictographic, "一共包括关键字", "关键"));
    }

    #[test]
    fn symbolic_rejects_word_neighbours() {
        assert!(!accepts(Mode::Symbolic, "eHello", "Hello"));
        assert!(!accepts(Mode::Symbolic, "Hello", "Hell"));
        assert!(!accepts(Mode::Symbolic, "_Hell", "Hell"));
        assert!(!accepts(Mode::Symbolic, "Hell2", "Hell"));
    }

    #[test]
    fn symbolic_accepts_separated_words() {
        assert!(accepts(Mode::Symbolic, "Hello", "Hello"));
        assert!(accepts(Mode::Symbolic, "say \"Hell\" now", "Hell"));
        assert!(accepts(Mode::Symbolic, "Hello, World!", "World"));
        assert!(accepts(Mode::Symbolic, "-Hell-", "Hell"));
    }

    #[test]
    fn symbolic_only_treats_ascii_as_word_chars() {
        assert!(accepts(Mode::Symbolic, "使用Hello软件", "Hello"));
        assert!(accepts(Mode::Symbolic, "caféHello", "Hello"));
        assert!(accepts(Mode::Symbolic, "Helloü", "Hello"));
        assert!(accepts(Mode::Symbolic, "«Hello»", "Hello"));
        assert!(!is_word_char('用'));
        assert!(!is_word_char('é'));
        assert!(is_word_char('z') && is_word_char('7') && is_word_char('_'));
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(Mode::from_symbolic(true), Mode::Symbolic);
        assert_eq!(Mode::from_symbolic(false), Mode::Pictographic);
        assert_eq!(Mode::default(), Mode::Pictographic);
        assert!(Mode::Symbolic.is_symbolic());
        assert!(!Mode::Pictographic.is_symbolic());
    }
}
