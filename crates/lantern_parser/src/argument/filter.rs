//! Compound filter phrases ("two handed", "weapon that pierces").

use lantern_world::DamageType;

use crate::argument::{ArgumentParser, EnumParser, ParseContext};
use crate::cursor::WordCursor;
use crate::value::{ParamType, ThingFilter, Value, WordEnum};

/// Vocabulary key for the "two handed" phrase.
pub const TWO_HANDED_KEY: &str = "filter.two-handed";
/// Vocabulary key for "weapon".
pub const WEAPON_KEY: &str = "filter.weapon";
/// Vocabulary key for the relative "that".
pub const THAT_KEY: &str = "filter.that";

/// Reads "two handed".
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoHandedParser;

impl ArgumentParser for TwoHandedParser {
    fn produces(&self) -> ParamType {
        ParamType::Filter
    }

    fn word_count(&self) -> usize {
        2
    }

    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value> {
        let phrase = cursor.lookahead(2)?.join(" ");
        if !ctx.vocabulary.matches(TWO_HANDED_KEY, &phrase) {
            return None;
        }
        cursor.skip(2);
        Some(Value::Filter(ThingFilter::TwoHanded))
    }
}

/// Reads "weapon that <damage>", as in "weapons that slash".
#[derive(Clone, Debug)]
pub struct WeaponDealingParser {
    damage: EnumParser,
}

impl Default for WeaponDealingParser {
    fn default() -> Self {
        Self {
            damage: EnumParser::of::<DamageType>(),
        }
    }
}

impl ArgumentParser for WeaponDealingParser {
    fn produces(&self) -> ParamType {
        ParamType::Filter
    }

    fn word_count(&self) -> usize {
        3
    }

    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value> {
        if !cursor.matches(ctx.vocabulary, WEAPON_KEY) || !cursor.matches(ctx.vocabulary, THAT_KEY)
        {
            return None;
        }
        let constant = self.damage.parse_constant(cursor, ctx)?;
        let kind = DamageType::from_constant(constant)?;
        Some(Value::Filter(ThingFilter::WeaponDealing(kind)))
    }
}
