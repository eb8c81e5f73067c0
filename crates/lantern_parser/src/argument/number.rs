//! Counts, as digits or number words.

use crate::argument::{ArgumentParser, ParseContext};
use crate::cursor::WordCursor;
use crate::value::{ParamType, Value};

const NUMBER_PREFIX: &str = "number.";

/// Reads an integer, as digits or as a number word.
///
/// Number words are vocabulary entries under `number.<n>`, so "a couple"
/// filed under `number.2` reads as 2. Two-word phrases win over one word.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberParser;

impl NumberParser {
    fn lookup(phrase: &str, ctx: &ParseContext<'_>) -> Option<i64> {
        ctx.vocabulary
            .keys_for(phrase, NUMBER_PREFIX)
            .find_map(|key| key.strip_prefix(NUMBER_PREFIX)?.parse().ok())
    }
}

impl ArgumentParser for NumberParser {
    fn produces(&self) -> ParamType {
        ParamType::Number
    }

    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value> {
        if let Some(n) = cursor.peek().and_then(|word| word.parse::<i64>().ok()) {
            cursor.skip(1);
            return Some(Value::Number(n));
        }
        for width in [2, 1] {
            let Some(words) = cursor.lookahead(width) else {
                continue;
            };
            if let Some(n) = Self::lookup(&words.join(" "), ctx) {
                cursor.skip(width);
                return Some(Value::Number(n));
            }
        }
        None
    }
}
