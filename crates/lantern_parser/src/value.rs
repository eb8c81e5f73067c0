//! Parameter types and the values argument parsers produce.

use std::fmt;

use lantern_foundation::{EntityId, Kind};
use lantern_world::{DamageType, Direction, ThingFlags, World};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};

/// The declared type of an action parameter, or the runtime type of a value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// A thing of the given kind or any of its descendants.
    Thing(Kind),
    /// An integer.
    Number,
    /// A fixed word, by synonym key (`prep.with`).
    Literal(&'static str),
    /// A constant of an enum family (`damage`, `direction`).
    Enum(&'static str),
    /// A predicate over things.
    Filter,
    /// A trailing effort modifier.
    Effort,
}

impl ParamType {
    /// Returns true if a value of type `actual` may fill a parameter of this
    /// type.
    #[must_use]
    pub fn accepts(self, actual: ParamType) -> bool {
        match (self, actual) {
            (Self::Thing(expected), Self::Thing(actual)) => actual.is_a(expected),
            (expected, actual) => expected == actual,
        }
    }

    /// Returns true if a parser producing `produced` is worth trying for a
    /// parameter of this type.
    ///
    /// Thing kinds overlap in either direction; a parser producing a wider
    /// kind may still come back with something acceptable.
    #[must_use]
    pub fn overlaps(self, produced: ParamType) -> bool {
        match (self, produced) {
            (Self::Thing(requested), Self::Thing(produced)) => requested.related(produced),
            (requested, produced) => requested == produced,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Thing(kind) => write!(f, "<{kind}>"),
            Self::Number => write!(f, "<number>"),
            Self::Literal(key) => write!(f, "{}", key.rsplit('.').next().unwrap_or(*key)),
            Self::Enum(family) => write!(f, "<{family}>"),
            Self::Filter => write!(f, "<filter>"),
            Self::Effort => write!(f, "[effort]"),
        }
    }
}

/// How much force an actor puts into an action.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Effort {
    /// No modifier given.
    #[default]
    Normal,
    /// Slow and deliberate.
    Careful,
    /// Fast and sloppy.
    Quick,
    /// Everything behind it.
    Forceful,
}

/// Enums whose constants can be named by words.
///
/// Constant `c` of family `f` is matched by the synonyms filed under the
/// vocabulary key `f.c`, as in `damage.piercing`.
pub trait WordEnum: Copy + IntoEnumIterator + Into<&'static str> {
    /// Family name, the key prefix.
    const FAMILY: &'static str;

    /// The vocabulary key for one constant.
    fn key(self) -> String {
        format!("{}.{}", Self::FAMILY, Into::<&'static str>::into(self))
    }

    /// Finds a constant by its canonical name.
    fn from_constant(name: &str) -> Option<Self> {
        Self::iter().find(|c| Into::<&'static str>::into(*c) == name)
    }
}

impl WordEnum for DamageType {
    const FAMILY: &'static str = "damage";
}

impl WordEnum for Direction {
    const FAMILY: &'static str = "direction";
}

impl WordEnum for Effort {
    const FAMILY: &'static str = "effort";
}

/// A predicate over things, named by a compound phrase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ThingFilter {
    /// Weapons that need both hands.
    TwoHanded,
    /// Weapons dealing the given damage.
    WeaponDealing(DamageType),
}

impl ThingFilter {
    /// Returns true if the thing passes the filter.
    #[must_use]
    pub fn matches(self, world: &World, id: EntityId) -> bool {
        let Ok(data) = world.get(id) else {
            return false;
        };
        match self {
            Self::TwoHanded => data.has(ThingFlags::TWO_HANDED),
            Self::WeaponDealing(kind) => {
                data.kind.is_a(Kind::Weapon) && data.damage.is_some_and(|d| d.kind == kind)
            }
        }
    }
}

impl fmt::Display for ThingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoHanded => write!(f, "two-handed things"),
            Self::WeaponDealing(kind) => write!(f, "{kind} weapons"),
        }
    }
}

/// A bound argument.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    /// A resolved thing and its kind at resolution time.
    Thing {
        /// The thing.
        id: EntityId,
        /// Its kind.
        kind: Kind,
    },
    /// An integer.
    Number(i64),
    /// A fixed word, by key.
    Literal(&'static str),
    /// An enum constant.
    Enum {
        /// Family name.
        family: &'static str,
        /// Canonical constant name.
        constant: &'static str,
    },
    /// A thing predicate.
    Filter(ThingFilter),
    /// An effort modifier.
    Effort(Effort),
}

impl Value {
    /// The runtime type of this value.
    #[must_use]
    pub fn param_type(&self) -> ParamType {
        match self {
            Self::Thing { kind, .. } => ParamType::Thing(*kind),
            Self::Number(_) => ParamType::Number,
            Self::Literal(key) => ParamType::Literal(*key),
            Self::Enum { family, .. } => ParamType::Enum(*family),
            Self::Filter(_) => ParamType::Filter,
            Self::Effort(_) => ParamType::Effort,
        }
    }

    /// The thing, if this is one.
    #[must_use]
    pub fn as_thing(&self) -> Option<EntityId> {
        match self {
            Self::Thing { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// The number, if this is one.
    #[must_use]
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The filter, if this is one.
    #[must_use]
    pub fn as_filter(&self) -> Option<ThingFilter> {
        match self {
            Self::Filter(filter) => Some(*filter),
            _ => None,
        }
    }

    /// The constant, if this is one of `E`'s.
    #[must_use]
    pub fn as_enum<E: WordEnum>(&self) -> Option<E> {
        match self {
            Self::Enum { family, constant } if *family == E::FAMILY => E::from_constant(constant),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thing_acceptance_follows_kinds() {
        let wants = ParamType::Thing(Kind::WorldObject);
        assert!(wants.accepts(ParamType::Thing(Kind::Container)));
        assert!(wants.accepts(ParamType::Thing(Kind::WorldObject)));
        assert!(!wants.accepts(ParamType::Thing(Kind::Thing)));
        assert!(!wants.accepts(ParamType::Thing(Kind::Place)));
        assert!(!wants.accepts(ParamType::Number));
    }

    #[test]
    fn overlap_runs_both_ways() {
        let wants = ParamType::Thing(Kind::Portal);
        assert!(wants.overlaps(ParamType::Thing(Kind::Thing)));
        assert!(wants.overlaps(ParamType::Thing(Kind::Portal)));
        assert!(!wants.overlaps(ParamType::Thing(Kind::Weapon)));
        assert!(!ParamType::Literal("prep.in").overlaps(ParamType::Literal("prep.on")));
        assert!(ParamType::Enum("damage").overlaps(ParamType::Enum("damage")));
    }

    #[test]
    fn word_enum_keys() {
        assert_eq!(DamageType::Piercing.key(), "damage.piercing");
        assert_eq!(Direction::North.key(), "direction.north");
        assert_eq!(Effort::Careful.key(), "effort.careful");
        assert_eq!(Effort::from_constant("quick"), Some(Effort::Quick));
        assert_eq!(Effort::from_constant("loudly"), None);
    }

    #[test]
    fn value_conversions() {
        let value = Value::Enum {
            family: "damage",
            constant: "slashing",
        };
        assert_eq!(value.param_type(), ParamType::Enum("damage"));
        assert_eq!(value.as_enum::<DamageType>(), Some(DamageType::Slashing));
        assert_eq!(value.as_enum::<Direction>(), None);
        assert_eq!(Value::Number(3).as_number(), Some(3));
        assert_eq!(Value::Number(3).as_thing(), None);
    }

    #[test]
    fn display_forms() {
        assert_eq!(ParamType::Thing(Kind::Creature).to_string(), "<creature>");
        assert_eq!(ParamType::Literal("prep.with").to_string(), "with");
        assert_eq!(ThingFilter::WeaponDealing(DamageType::Piercing).to_string(), "piercing weapons");
    }

    #[test]
    fn filters_check_the_world() {
        let world = World::new(0);
        let (world, spear) = world.spawn(
            lantern_world::ThingData::new("spear", Kind::Weapon)
                .with_damage(DamageType::Piercing, 4)
                .with_flags(ThingFlags::TWO_HANDED),
        );
        let (world, rock) = world.spawn(lantern_world::ThingData::new("rock", Kind::Item));
        assert!(ThingFilter::TwoHanded.matches(&world, spear));
        assert!(ThingFilter::WeaponDealing(DamageType::Piercing).matches(&world, spear));
        assert!(!ThingFilter::WeaponDealing(DamageType::Slashing).matches(&world, spear));
        assert!(!ThingFilter::TwoHanded.matches(&world, rock));
    }
}
