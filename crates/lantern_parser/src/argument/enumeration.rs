//! Enum families read from their synonyms.

use crate::argument::{ArgumentParser, ParseContext};
use crate::cursor::WordCursor;
use crate::value::{ParamType, Value, WordEnum};

/// Matches any constant of an enum family by its synonyms.
///
/// The word is looked up under the family prefix, so "stabs" finds
/// `damage.piercing` without scanning every constant.
#[derive(Clone, Debug)]
pub struct EnumParser {
    family: &'static str,
    prefix: String,
    constants: Vec<(String, &'static str)>,
}

impl EnumParser {
    /// Creates a parser for every constant of `E`.
    #[must_use]
    pub fn of<E: WordEnum>() -> Self {
        Self {
            family: E::FAMILY,
            prefix: format!("{}.", E::FAMILY),
            constants: E::iter().map(|c| (c.key(), c.into())).collect(),
        }
    }

    /// Family name.
    #[must_use]
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Reads a constant at the cursor, returning its canonical name.
    pub fn parse_constant(
        &self,
        cursor: &mut WordCursor,
        ctx: &ParseContext<'_>,
    ) -> Option<&'static str> {
        let word = cursor.peek()?;
        let constant = ctx
            .vocabulary
            .keys_for(word, &self.prefix)
            .find_map(|key| self.constant_for(key))?;
        cursor.skip(1);
        Some(constant)
    }

    fn constant_for(&self, key: &str) -> Option<&'static str> {
        self.constants
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, constant)| *constant)
    }
}

impl ArgumentParser for EnumParser {
    fn produces(&self) -> ParamType {
        ParamType::Enum(self.family)
    }

    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value> {
        self.parse_constant(cursor, ctx).map(|constant| Value::Enum {
            family: self.family,
            constant,
        })
    }
}
