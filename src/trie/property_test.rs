//! Property-based tests for the trie and its scanner.

use proptest::prelude::*;

use super::{Mode, Trie};

// Small alphabets so keywords share prefixes and overlap in texts.
fn keyword_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab关键]{1,6}").unwrap()
}

fn keywords_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(keyword_strategy(), 0..12)
}

fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab关键 x]{1,60}").unwrap()
}

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop::bool::ANY.prop_map(Mode::from_symbolic)
}

fn build(mode: Mode, words: &[String]) -> Trie {
    let mut trie = Trie::with_mode(mode);
    for word in words {
        trie.insert(word).unwrap();
    }
    trie
}

proptest! {
    // Property: an inserted keyword is always found.
    #[test]
    fn prop_insert_then_contains(words in keywords_strategy(), word in keyword_strategy()) {
        let mut trie = build(Mode::Pictographic, &words);
        trie.insert(&word).unwrap();
        prop_assert!(trie.contains(&word));
        for other in &words {
            prop_assert!(trie.contains(other));
        }
    }

    // Property: inserting then removing a new keyword restores the trie exactly.
    #[test]
    fn prop_insert_remove_restores_shape(words in keywords_strategy(), word in keyword_strategy()) {
        let mut trie = build(Mode::Pictographic, &words);
        prop_assume!(!trie.contains(&word));
        let nodes = trie.node_count();
        let dump = trie.dump();

        trie.insert(&word).unwrap();
        trie.remove(&word).unwrap();

        prop_assert!(!trie.contains(&word));
        prop_assert_eq!(trie.node_count(), nodes);
        prop_assert_eq!(trie.dump(), dump);
        for other in &words {
            prop_assert!(trie.contains(other));
        }
    }

    // Property: the keyword list matches the distinct inserted keywords.
    #[test]
    fn prop_keywords_are_distinct_inserts(words in keywords_strategy()) {
        let trie = build(Mode::Pictographic, &words);
        let mut expected: Vec<String> = words.clone();
        expected.sort_by(|a, b| a.chars().cmp(b.chars()));
        expected.dedup();
        prop_assert_eq!(trie.len(), expected.len());
        prop_assert_eq!(trie.keywords(), expected);
    }

    // Property: every reported match spells its keyword at its offsets.
    #[test]
    fn prop_matches_are_real_occurrences(
        words in keywords_strategy(),
        text in text_strategy(),
        mode in mode_strategy(),
    ) {
        let trie = build(mode, &words);
        let chars: Vec<char> = text.chars().collect();
        let mut last_end = 0;
        for m in trie.matches(&text).unwrap() {
            prop_assert!(trie.contains(m.keyword));
            prop_assert_eq!(&text[m.bytes.clone()], m.keyword);
            let spelled: String = chars[m.start..=m.end].iter().collect();
            prop_assert_eq!(spelled.as_str(), m.keyword);
            prop_assert!(m.end >= last_end);
            last_end = m.end;
        }
    }

    // Property: pictographic density equals a brute-force count of occurrences.
    #[test]
    fn prop_density_counts_every_occurrence(words in keywords_strategy(), text in text_strategy()) {
        let trie = build(Mode::Pictographic, &words);
        let density = trie.density(&text).unwrap();
        let chars: Vec<char> = text.chars().collect();
        for word in trie.keywords() {
            let needle: Vec<char> = word.chars().collect();
            let expected = chars.windows(needle.len()).filter(|w| *w == needle.as_slice()).count();
            prop_assert_eq!(density.get(word.as_str()).copied().unwrap_or(0), expected);
        }
    }

    // Property: texts without keyword characters have an empty density.
    #[test]
    fn prop_no_occurrence_no_density(words in keywords_strategy(), text in "[xyz ]{1,40}") {
        let trie = build(Mode::Pictographic, &words);
        prop_assert!(trie.density(&text).unwrap().is_empty());
        prop_assert_eq!(trie.check(&text).unwrap(), None);
    }

    // Property: check reports the first match of the full stream.
    #[test]
    fn prop_check_is_first_match(
        words in keywords_strategy(),
        text in text_strategy(),
        mode in mode_strategy(),
    ) {
        let trie = build(mode, &words);
        let first = trie.matches(&text).unwrap().first().map(|m| m.keyword);
        prop_assert_eq!(trie.check(&text).unwrap(), first);
    }

    // Property: masking keeps the char length and masks exactly the matched chars.
    #[test]
    fn prop_replace_keeps_length(
        words in keywords_strategy(),
        text in text_strategy(),
        mode in mode_strategy(),
    ) {
        let trie = build(mode, &words);
        let masked = trie.replace(&text, '#').unwrap();
        prop_assert_eq!(masked.chars().count(), text.chars().count());

        let mut covered = vec![false; text.chars().count()];
        let mut done = 0;
        for m in trie.matches(&text).unwrap() {
            for flag in &mut covered[m.start.max(done)..=m.end] {
                *flag = true;
            }
            done = done.max(m.end + 1);
        }
        for ((orig, out), is_masked) in text.chars().zip(masked.chars()).zip(covered) {
            if is_masked {
                prop_assert_eq!(out, '#');
            } else {
                prop_assert_eq!(out, orig);
            }
        }
    }
}
