//! Resolving nouns to things the actor can get at.

use lantern_foundation::{EntityId, Kind};
use lantern_world::World;

use crate::argument::{ArgumentParser, ParseContext};
use crate::cursor::WordCursor;
use crate::value::{ParamType, Value};

/// Where the thing parser looks for candidates, in priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThingSource {
    /// Things the actor carries.
    Inventory,
    /// Doors and hatches gating the exits of the actor's location.
    ExitControllers,
    /// Things lying in the actor's location. Needs light.
    Surroundings,
    /// Things inside open or transparent containers in the location. Needs
    /// light.
    OpenContainers,
}

impl ThingSource {
    /// Every source, in lookup order.
    pub const ALL: [Self; 4] = [
        Self::Inventory,
        Self::ExitControllers,
        Self::Surroundings,
        Self::OpenContainers,
    ];

    /// Returns true if the source comes up empty in the dark.
    #[must_use]
    pub const fn needs_light(self) -> bool {
        matches!(self, Self::Surroundings | Self::OpenContainers)
    }

    /// Perceivable candidates from this source, in world order.
    #[must_use]
    pub fn candidates(self, world: &World, actor: EntityId) -> Vec<EntityId> {
        let visible = |id: &EntityId| *id != actor && world.is_perceivable(*id);

        if self == Self::Inventory {
            return world.contents(actor).filter(visible).collect();
        }

        let Some(place) = world.location_of(actor) else {
            return Vec::new();
        };
        if self.needs_light() && !world.has_light(place) {
            return Vec::new();
        }

        match self {
            Self::Inventory => Vec::new(),
            Self::ExitControllers => world
                .exits(place)
                .filter_map(|exit| exit.controller)
                .filter(visible)
                .collect(),
            Self::Surroundings => world.contents(place).filter(visible).collect(),
            Self::OpenContainers => world
                .contents(place)
                .filter(|id| visible(id) && world.shows_contents(*id))
                .flat_map(|container| world.contents(container))
                .filter(visible)
                .collect(),
        }
    }
}

/// Returns true if any source would offer `thing` to `actor`.
#[must_use]
pub fn is_reachable(world: &World, actor: EntityId, thing: EntityId) -> bool {
    ThingSource::ALL
        .iter()
        .any(|source| source.candidates(world, actor).contains(&thing))
}

/// Resolves a noun, or adjective and noun, to a reachable thing.
///
/// Two-word readings are tried before one-word ones. Within a width, sources
/// are searched in order and the first thing named wins.
#[derive(Clone, Debug)]
pub struct ThingParser {
    sources: Vec<ThingSource>,
}

impl Default for ThingParser {
    fn default() -> Self {
        Self::with_sources(ThingSource::ALL)
    }
}

impl ThingParser {
    /// Creates a parser that only searches the given sources.
    #[must_use]
    pub fn with_sources(sources: impl IntoIterator<Item = ThingSource>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
        }
    }
}

impl ArgumentParser for ThingParser {
    fn produces(&self) -> ParamType {
        ParamType::Thing(Kind::Thing)
    }

    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value> {
        let pools: Vec<Vec<EntityId>> = self
            .sources
            .iter()
            .map(|source| source.candidates(ctx.world, ctx.actor))
            .collect();

        for width in [2, 1] {
            let Some(words) = cursor.lookahead(width) else {
                continue;
            };
            let words: Vec<&str> = words.iter().map(String::as_str).collect();
            let found = pools.iter().flatten().copied().find(|id| {
                ctx.world
                    .get(*id)
                    .is_ok_and(|data| data.named_by(&words))
            });
            if let Some(id) = found {
                let kind = ctx.world.kind_of(id)?;
                tracing::trace!(%id, %kind, width, "resolved thing");
                cursor.skip(width);
                return Some(Value::Thing { id, kind });
            }
        }
        None
    }
}

/// Resolves "it", "them", and "that" to the thing last mentioned.
///
/// The remembered thing must still be reachable.
#[derive(Clone, Copy, Debug, Default)]
pub struct PreviousObjectParser;

/// Vocabulary key for back-references.
pub const PRONOUN_KEY: &str = "pronoun.it";

impl ArgumentParser for PreviousObjectParser {
    fn produces(&self) -> ParamType {
        ParamType::Thing(Kind::Thing)
    }

    fn parse(&self, cursor: &mut WordCursor, ctx: &ParseContext<'_>) -> Option<Value> {
        let id = ctx
            .world
            .last_referenced(ctx.actor)
            .filter(|id| is_reachable(ctx.world, ctx.actor, *id))?;
        if !cursor.matches(ctx.vocabulary, PRONOUN_KEY) {
            return None;
        }
        let kind = ctx.world.kind_of(id)?;
        Some(Value::Thing { id, kind })
    }
}
