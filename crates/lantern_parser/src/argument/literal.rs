//! Fixed words such as prepositions.

use crate::argument::{ArgumentParser, ParseContext};
use crate::cursor::WordCursor;
use crate::value::{ParamType, Value};

/// Matches a fixed word such as a preposition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteralParser {
    key: &'static str,
}

impl LiteralParser {
    /// Creates a parser for the words filed under `key`.
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    /// The synonym key.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

impl ArgumentParser for LiteralParser {
    fn produces(&self) -> ParamType {
        ParamType::Literal(self.key)
    }

    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value> {
        cursor
            .matches(ctx.vocabulary, self.key)
            .then_some(Value::Literal(self.key))
    }
}
