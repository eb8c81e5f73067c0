//! Light and perception tests.

use lantern_foundation::{EntityId, Kind};
use lantern_world::{ThingData, ThingFlags, World};

fn dark_room() -> (World, EntityId, EntityId) {
    let (world, room) = World::new(0).spawn(ThingData::new("crypt", Kind::Place));
    let (world, hero) = world
        .spawn_in(ThingData::new("hero", Kind::Creature), room)
        .unwrap();
    (world, room, hero)
}

#[test]
fn carried_lamp_lights_the_room() {
    let (world, room, hero) = dark_room();
    assert!(!world.has_light(room));
    let (world, _) = world
        .spawn_in(
            ThingData::new("lamp", Kind::LightSource).with_flags(ThingFlags::LIT),
            hero,
        )
        .unwrap();
    assert!(world.has_light(room));
}

#[test]
fn lamp_in_closed_box_stays_hidden() {
    let (world, room, _) = dark_room();
    let (world, chest) = world
        .spawn_in(ThingData::new("chest", Kind::Container), room)
        .unwrap();
    let (world, _) = world
        .spawn_in(
            ThingData::new("lamp", Kind::LightSource).with_flags(ThingFlags::LIT),
            chest,
        )
        .unwrap();
    assert!(!world.has_light(room));

    let world = world.set_flag(chest, ThingFlags::OPEN, true).unwrap();
    assert!(world.has_light(room));
}

#[test]
fn hidden_things_are_not_perceivable() {
    let (world, room, _) = dark_room();
    let (world, key) = world
        .spawn_in(
            ThingData::new("key", Kind::Item).with_flags(ThingFlags::HIDDEN),
            room,
        )
        .unwrap();
    assert!(!world.is_perceivable(key));
    let world = world.set_flag(key, ThingFlags::HIDDEN, false).unwrap();
    assert!(world.is_perceivable(key));
}
