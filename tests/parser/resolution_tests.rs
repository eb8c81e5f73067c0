//! Thing resolution: sources, light, pronouns, and adjectives.

use lantern_parser::Reason;
use lantern_world::ThingFlags;

use crate::common::armory;

#[test]
fn adjective_narrows_the_noun() {
    let a = armory();
    let command = a
        .dispatcher
        .parse(&a.world, a.hero, "take rusty sword")
        .command()
        .unwrap();
    assert_eq!(command.thing(0), Some(a.sword));
    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "take shiny sword").reason(),
        Some(Reason::Syntax)
    );
}

#[test]
fn dark_room_hides_the_floor_but_not_the_pack() {
    let a = armory();
    let world = a.world.set_flag(a.lamp, ThingFlags::LIT, false).unwrap();
    assert!(!world.has_light(a.room));

    assert_eq!(
        a.dispatcher.parse(&world, a.hero, "take sword").reason(),
        Some(Reason::Syntax)
    );
    let command = a.dispatcher.parse(&world, a.hero, "drop axe").command().unwrap();
    assert_eq!(command.thing(0), Some(a.axe));
}

#[test]
fn closed_containers_hide_their_contents() {
    let a = armory();
    let (world, coin) = a
        .world
        .spawn_in(
            lantern_world::ThingData::new("coin", lantern_foundation::Kind::Item),
            a.chest,
        )
        .unwrap();
    assert_eq!(
        a.dispatcher.parse(&world, a.hero, "take coin").reason(),
        Some(Reason::Syntax)
    );

    let world = world.set_flag(a.chest, ThingFlags::OPEN, true).unwrap();
    let command = a.dispatcher.parse(&world, a.hero, "take coin").command().unwrap();
    assert_eq!(command.thing(0), Some(coin));
}

#[test]
fn pronoun_follows_last_reference() {
    let a = armory();
    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "take it").reason(),
        Some(Reason::Syntax)
    );

    let world = a.world.remember(a.hero, a.sword);
    let command = a.dispatcher.parse(&world, a.hero, "take it").command().unwrap();
    assert_eq!(command.thing(0), Some(a.sword));

    let world = world.destroy(a.sword).unwrap();
    assert_eq!(
        a.dispatcher.parse(&world, a.hero, "take it").reason(),
        Some(Reason::Syntax)
    );
}

#[test]
fn actor_is_never_a_candidate() {
    let a = armory();
    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "look hero").reason(),
        Some(Reason::Syntax)
    );
}
