//! Verb lookup, trailing words, effort, and reuse.

use lantern_parser::{Effort, ParserResult, Reason, ThingFilter};
use lantern_world::DamageType;

use crate::common::armory;

#[test]
fn unknown_verb_is_syntax() {
    let a = armory();
    let result = a.dispatcher.parse(&a.world, a.hero, "frobnicate the sword");
    assert_eq!(result.reason(), Some(Reason::Syntax));
}

#[test]
fn blank_line_is_syntax() {
    let a = armory();
    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "   ").reason(),
        Some(Reason::Syntax)
    );
}

#[test]
fn bare_look_has_no_arguments() {
    let a = armory();
    let command = a.dispatcher.parse(&a.world, a.hero, "look").command().unwrap();
    assert_eq!(command.action().name(), "look");
    assert!(command.args().is_empty());
}

#[test]
fn leftover_words_are_syntax() {
    let a = armory();
    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "look now").reason(),
        Some(Reason::Syntax)
    );
}

#[test]
fn synonyms_and_stop_words() {
    let a = armory();
    let command = a
        .dispatcher
        .parse(&a.world, a.hero, "Grab the rusty sword!")
        .command()
        .unwrap();
    assert_eq!(command.action().name(), "take");
    assert_eq!(command.thing(0), Some(a.sword));
}

#[test]
fn effort_suffix() {
    let a = armory();
    let careful = a
        .dispatcher
        .parse(&a.world, a.hero, "hit goblin carefully")
        .command()
        .unwrap();
    assert_eq!(careful.effort(), Effort::Careful);

    let plain = a.dispatcher.parse(&a.world, a.hero, "hit goblin").command().unwrap();
    assert_eq!(plain.effort(), Effort::Normal);

    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "hit goblin loudly-ish").reason(),
        Some(Reason::Syntax)
    );
}

#[test]
fn three_part_command_with_effort() {
    let a = armory();
    let command = a
        .dispatcher
        .parse(&a.world, a.hero, "attack the goblin with the axe forcefully")
        .command()
        .unwrap();
    assert_eq!(command.thing(0), Some(a.goblin));
    assert_eq!(command.thing(2), Some(a.axe));
    assert_eq!(command.effort(), Effort::Forceful);
}

#[test]
fn repeated_noun_binds_the_same_thing() {
    let a = armory();
    let command = a
        .dispatcher
        .parse(&a.world, a.hero, "compare sword sword")
        .command()
        .unwrap();
    assert_eq!(command.thing(0), Some(a.sword));
    assert_eq!(command.thing(0), command.thing(1));
}

#[test]
fn numbers_in_words_and_digits() {
    let a = armory();
    for line in ["rest 12", "rest a dozen", "rest twelve"] {
        let command = a.dispatcher.parse(&a.world, a.hero, line).command();
        assert_eq!(command.and_then(|c| c.number(0)), Some(12), "{line}");
    }
}

#[test]
fn filters_bind_compound_phrases() {
    let a = armory();
    let result = a.dispatcher.parse(&a.world, a.hero, "inventory two handed");
    let ParserResult::Success(command) = result else {
        panic!("expected a command, got {result:?}");
    };
    assert_eq!(command.filter(0), Some(ThingFilter::TwoHanded));

    let command = a
        .dispatcher
        .parse(&a.world, a.hero, "inventory weapons that slash")
        .command()
        .unwrap();
    assert_eq!(
        command.filter(0),
        Some(ThingFilter::WeaponDealing(DamageType::Slashing))
    );
}
