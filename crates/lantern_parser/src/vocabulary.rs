//! Synonym store for parser vocabulary.
//!
//! Words are filed under dotted keys: `verb.take`, `prep.in`,
//! `damage.piercing`, `number.12`. A key may carry single words and
//! two-word phrases ("a couple"). Lookups run both ways: key to words for
//! matching, word to keys for prefix searches over a family.

use std::collections::{HashMap, HashSet};

/// Registered synonyms and stop-words.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    synonyms: HashMap<String, Vec<String>>,
    keys: HashMap<String, Vec<String>>,
    phrases: HashSet<String>,
    stop_words: HashSet<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Files words under a key.
    ///
    /// Words are lowercased. Registering the same word twice is harmless.
    pub fn add_synonyms<I, S>(&mut self, key: &str, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            let entry = self.synonyms.entry(key.to_owned()).or_default();
            if entry.contains(&word) {
                continue;
            }
            entry.push(word.clone());
            if word.contains(' ') {
                self.phrases.insert(word.clone());
            }
            self.keys.entry(word).or_default().push(key.to_owned());
        }
    }

    /// Builder form of [`add_synonyms`](Self::add_synonyms).
    #[must_use]
    pub fn with_synonyms<I, S>(mut self, key: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.add_synonyms(key, words);
        self
    }

    /// Adds stop-words, dropped by the tokenizer.
    pub fn add_stop_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stop_words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    /// Forgets every stop-word, so the tokenizer keeps all words.
    pub fn clear_stop_words(&mut self) {
        self.stop_words.clear();
    }

    /// Returns true if `word` (or phrase) is filed under `key`.
    #[must_use]
    pub fn matches(&self, key: &str, word: &str) -> bool {
        self.synonyms
            .get(key)
            .is_some_and(|words| words.iter().any(|w| w == word))
    }

    /// All words filed under `key`, in registration order.
    #[must_use]
    pub fn synonyms(&self, key: &str) -> &[String] {
        self.synonyms.get(key).map_or(&[], Vec::as_slice)
    }

    /// Keys starting with `prefix` that `word` is filed under.
    pub fn keys_for<'a>(&'a self, word: &str, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.keys
            .get(word)
            .into_iter()
            .flatten()
            .map(String::as_str)
            .filter(move |key| key.starts_with(prefix))
    }

    /// Returns true if the key has any words.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.synonyms.contains_key(key)
    }

    /// Returns true if `phrase` is a registered multi-word entry.
    #[must_use]
    pub fn is_phrase(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    /// Returns true if the tokenizer should drop `word`.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Every single word filed under a key starting with `prefix`.
    pub fn words_under<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.synonyms
            .iter()
            .filter(move |(key, _)| key.starts_with(prefix))
            .flat_map(|(_, words)| words.iter().map(String::as_str))
            .filter(|word| !word.contains(' '))
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Returns true if no keys are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocab() -> Vocabulary {
        Vocabulary::new()
            .with_synonyms("prep.in", ["in", "into", "inside"])
            .with_synonyms("damage.piercing", ["piercing", "pierces", "stabs"])
            .with_synonyms("damage.slashing", ["slashing", "slashes", "cuts"])
            .with_synonyms("verb.hit", ["hit", "attack", "stab"])
    }

    #[test]
    fn matches_registered_synonyms() {
        let v = vocab();
        assert!(v.matches("prep.in", "into"));
        assert!(!v.matches("prep.in", "onto"));
        assert!(!v.matches("prep.on", "on"));
    }

    #[test]
    fn synonyms_keep_registration_order() {
        let v = vocab();
        assert_eq!(v.synonyms("prep.in"), ["in", "into", "inside"]);
        assert!(v.synonyms("missing").is_empty());
    }

    #[test]
    fn keys_for_filters_by_prefix() {
        let v = vocab().with_synonyms("damage.piercing", ["stab"]);
        let damage: Vec<_> = v.keys_for("stab", "damage.").collect();
        assert_eq!(damage, ["damage.piercing"]);
        let verbs: Vec<_> = v.keys_for("stab", "verb.").collect();
        assert_eq!(verbs, ["verb.hit"]);
        assert_eq!(v.keys_for("nothing", "").count(), 0);
    }

    #[test]
    fn duplicates_and_case_are_folded() {
        let v = Vocabulary::new().with_synonyms("prep.on", ["On", "on", "onto"]);
        assert_eq!(v.synonyms("prep.on"), ["on", "onto"]);
        assert_eq!(v.len(), 1);
    }

    #[test]
    fn phrases_are_tracked() {
        let v = Vocabulary::new().with_synonyms("number.2", ["two", "a couple"]);
        assert!(v.is_phrase("a couple"));
        assert!(!v.is_phrase("two"));
        assert!(v.matches("number.2", "a couple"));
    }

    #[test]
    fn stop_words_can_be_cleared() {
        let mut v = Vocabulary::new();
        v.add_stop_words(["The", "a"]);
        assert!(v.is_stop_word("the"));
        v.clear_stop_words();
        assert!(!v.is_stop_word("the"));
    }

    #[test]
    fn words_under_skips_phrases() {
        let v = vocab().with_synonyms("verb.pick", ["pick up"]);
        let mut verbs: Vec<_> = v.words_under("verb.").collect();
        verbs.sort_unstable();
        assert!(verbs.contains(&"stab"));
        assert!(!verbs.contains(&"pick up"));
    }
}
