//! Per-thing data: names, kind, flags, and combat stats.

use bitflags::bitflags;
use lantern_foundation::Kind;
use strum::{Display, EnumIter, IntoStaticStr};

bitflags! {
    /// Boolean properties of a thing.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ThingFlags: u16 {
        /// Can be picked up.
        const PORTABLE = 1 << 0;
        /// Openable and currently open.
        const OPEN = 1 << 1;
        /// Contents are visible even when closed.
        const TRANSPARENT = 1 << 2;
        /// Gives off light (things) or is lit by default (places).
        const LIT = 1 << 3;
        /// Not perceivable by actors.
        const HIDDEN = 1 << 4;
        /// Cannot be opened until unlocked.
        const LOCKED = 1 << 5;
        /// Weapon needs both hands.
        const TWO_HANDED = 1 << 6;
    }
}

/// How a weapon hurts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DamageType {
    /// Points and blades thrust in.
    Piercing,
    /// Edges drawn across.
    Slashing,
    /// Blunt force.
    Bludgeoning,
}

/// Damage dealt by a weapon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Damage {
    /// How the damage is dealt.
    pub kind: DamageType,
    /// Maximum points per hit.
    pub amount: u32,
}

/// Everything the world knows about one thing.
#[derive(Clone, Debug, PartialEq)]
pub struct ThingData {
    /// Primary noun, lowercase.
    pub name: String,
    /// Other nouns the thing answers to.
    pub aliases: Vec<String>,
    /// Adjectives that may precede the noun.
    pub adjectives: Vec<String>,
    /// Kind in the hierarchy.
    pub kind: Kind,
    /// Boolean properties.
    pub flags: ThingFlags,
    /// Weapon damage, for weapons.
    pub damage: Option<Damage>,
    /// Remaining health, for creatures.
    pub health: Option<i32>,
    /// Long description shown by `look`.
    pub description: Option<String>,
}

impl ThingData {
    /// Creates a thing with a name and kind.
    ///
    /// Items start out portable.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: Kind) -> Self {
        let flags = if kind.is_a(Kind::Item) {
            ThingFlags::PORTABLE
        } else {
            ThingFlags::empty()
        };
        Self {
            name: name.into().to_lowercase(),
            aliases: Vec::new(),
            adjectives: Vec::new(),
            kind,
            flags,
            damage: None,
            health: None,
            description: None,
        }
    }

    /// Adds an alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    /// Adds an adjective.
    #[must_use]
    pub fn with_adjective(mut self, adjective: impl Into<String>) -> Self {
        self.adjectives.push(adjective.into().to_lowercase());
        self
    }

    /// Sets flags in addition to the defaults.
    #[must_use]
    pub fn with_flags(mut self, flags: ThingFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Clears flags, including defaults.
    #[must_use]
    pub fn without_flags(mut self, flags: ThingFlags) -> Self {
        self.flags -= flags;
        self
    }

    /// Sets weapon damage.
    #[must_use]
    pub fn with_damage(mut self, kind: DamageType, amount: u32) -> Self {
        self.damage = Some(Damage { kind, amount });
        self
    }

    /// Sets health.
    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = Some(health);
        self
    }

    /// Sets the long description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns true if the flag is set.
    #[must_use]
    pub fn has(&self, flag: ThingFlags) -> bool {
        self.flags.contains(flag)
    }

    /// Returns true if `word` is the name or an alias.
    #[must_use]
    pub fn answers_to(&self, word: &str) -> bool {
        self.name == word || self.aliases.iter().any(|alias| alias == word)
    }

    /// Returns true if the words name this thing.
    ///
    /// Accepts a bare noun, or an adjective followed by a noun.
    #[must_use]
    pub fn named_by(&self, words: &[&str]) -> bool {
        match words {
            [noun] => self.answers_to(noun),
            [adjective, noun] => {
                self.adjectives.iter().any(|a| a == adjective) && self.answers_to(noun)
            }
            _ => false,
        }
    }

    /// Whether a creature is still standing.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health.is_none_or(|health| health > 0)
    }

    /// Short description, adjectives first.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.adjectives.first() {
            Some(adjective) => format!("{adjective} {}", self.name),
            None => self.name.clone(),
        }
    }
}
