//! Standard vocabulary and actions for adventure games.
//!
//! [`dispatcher`] builds a ready-to-use [`CommandDispatcher`] with the word
//! tables below and every action in [`actions`].

use lantern_foundation::Kind;

use crate::action::{ActionDescriptor, ParamSpec, RegistryError};
use crate::argument::{PRONOUN_KEY, THAT_KEY, TWO_HANDED_KEY, WEAPON_KEY};
use crate::dispatcher::CommandDispatcher;
use crate::value::ParamType;
use crate::vocabulary::Vocabulary;

pub mod actions;

/// A synonym key and the words filed under it.
pub type WordTable = &'static [(&'static str, &'static [&'static str])];

/// Verbs.
pub const VERBS: WordTable = &[
    ("verb.look", &["look", "l", "examine", "x", "inspect"]),
    ("verb.inventory", &["inventory", "i", "inv"]),
    ("verb.take", &["take", "get", "grab"]),
    ("verb.drop", &["drop", "discard"]),
    ("verb.open", &["open"]),
    ("verb.close", &["close", "shut"]),
    ("verb.go", &["go", "walk", "head", "run"]),
    ("verb.compare", &["compare"]),
    ("verb.hit", &["hit", "attack", "strike", "kill"]),
    ("verb.wait", &["wait", "z"]),
    ("verb.rest", &["rest", "sleep"]),
];

/// Prepositions.
pub const PREPOSITIONS: WordTable = &[
    ("prep.with", &["with", "using"]),
    ("prep.in", &["in", "into", "inside"]),
    ("prep.on", &["on", "onto"]),
];

/// Back-references to the last thing mentioned.
pub const PRONOUNS: WordTable = &[(PRONOUN_KEY, &["it", "them", "that", "him", "her"])];

/// Directions of travel.
pub const DIRECTIONS: WordTable = &[
    ("direction.north", &["north", "n"]),
    ("direction.south", &["south", "s"]),
    ("direction.east", &["east", "e"]),
    ("direction.west", &["west", "w"]),
    ("direction.up", &["up", "u"]),
    ("direction.down", &["down", "d"]),
    ("direction.in", &["in", "inside"]),
    ("direction.out", &["out", "outside"]),
];

/// Damage types.
pub const DAMAGE: WordTable = &[
    ("damage.piercing", &["piercing", "pierce", "pierces", "stab", "stabs"]),
    ("damage.slashing", &["slashing", "slash", "slashes", "cut", "cuts"]),
    ("damage.bludgeoning", &["bludgeoning", "bludgeon", "bludgeons", "crush", "crushes"]),
];

/// Effort modifiers.
pub const EFFORTS: WordTable = &[
    ("effort.normal", &["normally"]),
    ("effort.careful", &["carefully", "gently", "cautiously"]),
    ("effort.quick", &["quickly", "fast", "hastily"]),
    ("effort.forceful", &["forcefully", "hard", "fiercely"]),
];

/// Number words.
pub const NUMBERS: WordTable = &[
    ("number.1", &["one", "once"]),
    ("number.2", &["two", "twice", "couple", "a couple", "pair", "a pair"]),
    ("number.3", &["three", "few", "a few", "several"]),
    ("number.4", &["four"]),
    ("number.5", &["five"]),
    ("number.6", &["six", "half-dozen", "half dozen"]),
    ("number.7", &["seven"]),
    ("number.8", &["eight"]),
    ("number.9", &["nine"]),
    ("number.10", &["ten"]),
    ("number.11", &["eleven"]),
    ("number.12", &["twelve", "dozen", "a dozen"]),
];

/// Filter phrases.
pub const FILTERS: WordTable = &[
    (TWO_HANDED_KEY, &["two handed"]),
    (WEAPON_KEY, &["weapon", "weapons"]),
    (THAT_KEY, &["that", "which"]),
];

/// Words the tokenizer drops.
pub const STOP_WORDS: &[&str] = &["the", "a", "an", "at", "to", "some", "please", "my"];

/// The standard vocabulary.
#[must_use]
pub fn vocabulary() -> Vocabulary {
    let mut vocabulary = Vocabulary::new();
    for table in [
        VERBS,
        PREPOSITIONS,
        PRONOUNS,
        DIRECTIONS,
        DAMAGE,
        EFFORTS,
        NUMBERS,
        FILTERS,
    ] {
        for (key, words) in table {
            vocabulary.add_synonyms(key, words.iter());
        }
    }
    vocabulary.add_stop_words(STOP_WORDS);
    vocabulary
}

/// The standard actions, in dispatch order.
///
/// Overloads sharing a verb are listed narrowest first where it matters:
/// `open <portal>` precedes `open <openable>` so doors get their own
/// message.
#[must_use]
pub fn standard_actions() -> Vec<ActionDescriptor> {
    use self::actions as a;

    let thing = ParamSpec::thing;
    vec![
        ActionDescriptor::new("look", a::look),
        ActionDescriptor::new("look", a::examine).param(thing(Kind::Thing)),
        ActionDescriptor::new("inventory", a::inventory),
        ActionDescriptor::new("inventory", a::inventory_filtered).param(ParamType::Filter),
        ActionDescriptor::new("take", a::take)
            .param(thing(Kind::WorldObject))
            .with_precondition(a::can_take),
        ActionDescriptor::new("drop", a::drop).param(thing(Kind::WorldObject).carried()),
        ActionDescriptor::new("open", a::open_portal)
            .param(thing(Kind::Portal))
            .with_precondition(a::can_open),
        ActionDescriptor::new("open", a::open)
            .param(thing(Kind::Openable))
            .with_precondition(a::can_open),
        ActionDescriptor::new("close", a::close)
            .param(thing(Kind::Openable))
            .with_precondition(a::can_close),
        ActionDescriptor::new("go", a::go)
            .param(ParamType::Enum("direction"))
            .with_precondition(a::can_go),
        ActionDescriptor::new("compare", a::compare)
            .param(thing(Kind::Thing))
            .param(thing(Kind::Thing)),
        ActionDescriptor::new("hit", a::hit)
            .param(thing(Kind::Creature))
            .with_effort()
            .with_precondition(a::can_hit),
        ActionDescriptor::new("hit", a::hit_with)
            .param(thing(Kind::Creature))
            .param(ParamSpec::literal("prep.with"))
            .param(thing(Kind::Weapon).auto_take())
            .with_effort()
            .with_precondition(a::can_hit),
        ActionDescriptor::new("wait", a::wait),
        ActionDescriptor::new("rest", a::rest)
            .param(ParamType::Number)
            .with_precondition(a::can_rest),
    ]
}

/// Registers the standard actions.
///
/// # Errors
///
/// Returns an error if any action is rejected.
pub fn register_actions(dispatcher: &mut CommandDispatcher) -> Result<(), RegistryError> {
    for action in standard_actions() {
        dispatcher.register(action)?;
    }
    Ok(())
}

/// A dispatcher with the standard vocabulary and actions.
///
/// # Errors
///
/// Returns an error if any action is rejected.
pub fn dispatcher() -> Result<CommandDispatcher, RegistryError> {
    let mut dispatcher = CommandDispatcher::new(vocabulary());
    register_actions(&mut dispatcher)?;
    Ok(dispatcher)
}
