//! Argument parsers.
//!
//! Each parser recognizes one shape of argument at the cursor and produces a
//! [`Value`]. Parsers are stateless; everything they resolve against comes
//! through the [`ParseContext`].
//!
//! | Parser | Produces | Words |
//! |--------|----------|-------|
//! | [`LiteralParser`] | `Literal(key)` | 1 |
//! | [`EnumParser`] | `Enum(family)` | 1 |
//! | [`NumberParser`] | `Number` | 1-2 |
//! | [`ThingParser`] | `Thing(Thing)` | 1-2 |
//! | [`PreviousObjectParser`] | `Thing(Thing)` | 1 |
//! | [`TwoHandedParser`] | `Filter` | 2 |
//! | [`WeaponDealingParser`] | `Filter` | 3 |
//! | [`EffortParser`] | `Effort` | 1 |

use std::fmt;

use lantern_foundation::EntityId;
use lantern_world::World;

use crate::cursor::WordCursor;
use crate::value::{ParamType, Value};
use crate::vocabulary::Vocabulary;

mod effort;
mod enumeration;
mod filter;
mod literal;
mod number;
mod thing;

pub use effort::EffortParser;
pub use enumeration::EnumParser;
pub use filter::{THAT_KEY, TWO_HANDED_KEY, TwoHandedParser, WEAPON_KEY, WeaponDealingParser};
pub use literal::LiteralParser;
pub use number::NumberParser;
pub use thing::{PRONOUN_KEY, PreviousObjectParser, ThingParser, ThingSource, is_reachable};

/// What a parser may look at while resolving words.
#[derive(Clone, Copy)]
pub struct ParseContext<'a> {
    /// Snapshot of the world being parsed against.
    pub world: &'a World,
    /// Who typed the command.
    pub actor: EntityId,
    /// Synonyms and stop-words.
    pub vocabulary: &'a Vocabulary,
}

impl<'a> ParseContext<'a> {
    /// Creates a context.
    #[must_use]
    pub fn new(world: &'a World, actor: EntityId, vocabulary: &'a Vocabulary) -> Self {
        Self {
            world,
            actor,
            vocabulary,
        }
    }
}

impl fmt::Debug for ParseContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseContext")
            .field("actor", &self.actor)
            .field("tick", &self.world.tick())
            .finish_non_exhaustive()
    }
}

/// Recognizes one kind of argument.
///
/// On success the cursor sits just past the consumed words. On failure the
/// parser may have moved the cursor; callers bracket every attempt with
/// [`WordCursor::mark`] and [`WordCursor::back`].
pub trait ArgumentParser: fmt::Debug + Send + Sync {
    /// Type of the values this parser yields.
    fn produces(&self) -> ParamType;

    /// Fewest words a successful parse consumes.
    fn word_count(&self) -> usize {
        1
    }

    /// Tries to read an argument at the cursor.
    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value>;
}
