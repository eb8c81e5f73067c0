//! Input tokenization.
//!
//! Converts a raw line of player input into lowercase words.

use crate::vocabulary::Vocabulary;

/// Splits player input into words.
pub struct Tokenizer;

impl Tokenizer {
    /// Splits a line into lowercase words.
    ///
    /// - Converts words to lowercase
    /// - Strips punctuation (except within quotes)
    /// - Keeps quoted text as a single word
    #[must_use]
    pub fn split(input: &str) -> Vec<String> {
        let mut words = Vec::new();
        let mut chars = input.chars();
        let mut current = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    flush(&mut current, &mut words);
                    let quoted: String = chars.by_ref().take_while(|c| *c != '"').collect();
                    if !quoted.is_empty() {
                        words.push(quoted.to_lowercase());
                    }
                }
                c if c.is_whitespace() => flush(&mut current, &mut words),
                '.' | ',' | '!' | '?' | ';' | ':' | '\'' => {}
                _ => current.push(ch),
            }
        }

        flush(&mut current, &mut words);
        words
    }

    /// Splits a line and drops stop-words.
    ///
    /// A stop-word survives when it starts a multi-word phrase the vocabulary
    /// knows, so "wait a couple" keeps its "a".
    #[must_use]
    pub fn tokenize(input: &str, vocabulary: &Vocabulary) -> Vec<String> {
        let words = Self::split(input);
        let mut kept = Vec::with_capacity(words.len());

        for (i, word) in words.iter().enumerate() {
            if vocabulary.is_stop_word(word) {
                let starts_phrase = words
                    .get(i + 1)
                    .is_some_and(|next| vocabulary.is_phrase(&format!("{word} {next}")));
                if !starts_phrase {
                    continue;
                }
            }
            kept.push(word.clone());
        }

        kept
    }
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(current.to_lowercase());
        current.clear();
    }
}
