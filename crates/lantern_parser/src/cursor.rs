//! Backtrackable cursor over the words of one input line.
//!
//! The matcher walks argument parsers across the words after the verb. Each
//! attempt is bracketed by [`WordCursor::mark`] and, on failure,
//! [`WordCursor::back`], so a parser that reads ahead and gives up leaves the
//! position exactly where it found it.

use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;

/// Words of one line with a read position and a single undo mark.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCursor {
    words: Vec<String>,
    position: usize,
    anchor: usize,
    mark: Option<usize>,
    end: usize,
}

impl WordCursor {
    /// Creates a cursor over already-tokenized words.
    #[must_use]
    pub fn new(words: Vec<String>) -> Self {
        let end = words.len();
        Self {
            words,
            position: 0,
            anchor: 0,
            mark: None,
            end,
        }
    }

    /// Tokenizes a line with the vocabulary's stop-words.
    #[must_use]
    pub fn from_line(line: &str, vocabulary: &Vocabulary) -> Self {
        Self::new(Tokenizer::tokenize(line, vocabulary))
    }

    /// Consumes and returns the next word.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        let index = self.position;
        if index >= self.end {
            return None;
        }
        self.position += 1;
        Some(self.words[index].as_str())
    }

    /// The next word, without consuming it.
    #[must_use]
    pub fn peek(&self) -> Option<&str> {
        self.visible().get(self.position).map(String::as_str)
    }

    /// The next `n` words, without consuming them.
    #[must_use]
    pub fn lookahead(&self, n: usize) -> Option<&[String]> {
        self.visible().get(self.position..self.position + n)
    }

    /// Advances `n` words without inspecting them, stopping at the end.
    pub fn skip(&mut self, n: usize) {
        self.position = (self.position + n).min(self.end);
    }

    /// Makes the current position the one [`reset`](Self::reset) returns to.
    ///
    /// The dispatcher anchors just past the verb.
    pub fn anchor(&mut self) {
        self.anchor = self.position;
        self.mark = None;
    }

    /// Rewinds to the anchor, drops any mark, and lifts any reservation.
    pub fn reset(&mut self) {
        self.position = self.anchor;
        self.mark = None;
        self.release();
    }

    /// Hides the last `n` words until [`release`](Self::release).
    ///
    /// While words are reserved, reads stop short of them, so a parser
    /// cannot take words a later parameter needs.
    pub fn reserve(&mut self, n: usize) {
        self.end = self.words.len().saturating_sub(n).max(self.position);
    }

    /// Makes every word readable again.
    pub fn release(&mut self) {
        self.end = self.words.len();
    }

    fn visible(&self) -> &[String] {
        &self.words[..self.end]
    }

    /// Remembers the current position for one [`back`](Self::back).
    pub fn mark(&mut self) {
        self.mark = Some(self.position);
    }

    /// Returns to the marked position, consuming the mark.
    ///
    /// Returns false, leaving the cursor alone, if there is no mark.
    pub fn back(&mut self) -> bool {
        match self.mark.take() {
            Some(position) => {
                self.position = position;
                true
            }
            None => false,
        }
    }

    /// Returns true if at least `n` words remain from the current position.
    #[must_use]
    pub fn remaining(&self, n: usize) -> bool {
        self.end.saturating_sub(self.position) >= n
    }

    /// Returns true if the whole line has at least `n` words, verb included.
    #[must_use]
    pub fn capacity(&self, n: usize) -> bool {
        self.words.len() >= n
    }

    /// Returns true once every word has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.end
    }

    /// Consumes the next word if it is filed under `key`.
    pub fn matches(&mut self, vocabulary: &Vocabulary, key: &str) -> bool {
        let hit = self.peek().is_some_and(|word| vocabulary.matches(key, word));
        if hit {
            self.position += 1;
        }
        hit
    }

    /// Consumes the next one or two words if they form an entry under `key`.
    ///
    /// Two-word phrases are tried first.
    pub fn matches_phrase(&mut self, vocabulary: &Vocabulary, key: &str) -> bool {
        if let Some(pair) = self.lookahead(2) {
            if vocabulary.matches(key, &pair.join(" ")) {
                self.position += 2;
                return true;
            }
        }
        self.matches(vocabulary, key)
    }

    /// Current read position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Words between two positions.
    #[must_use]
    pub fn span(&self, start: usize, end: usize) -> &[String] {
        self.words.get(start..end).unwrap_or(&[])
    }

    /// Total number of words, verb included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the line had no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words of the line.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}
