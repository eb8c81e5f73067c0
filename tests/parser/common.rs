//! Shared fixture: a lit armory with a goblin.

use lantern_foundation::{EntityId, Kind};
use lantern_parser::{CommandDispatcher, stdlib};
use lantern_world::{DamageType, ThingData, ThingFlags, World};

pub struct Armory {
    pub world: World,
    pub dispatcher: CommandDispatcher,
    pub room: EntityId,
    pub hero: EntityId,
    pub sword: EntityId,
    pub axe: EntityId,
    pub goblin: EntityId,
    pub chest: EntityId,
    pub lamp: EntityId,
}

pub fn armory() -> Armory {
    let world = World::new(11);
    let (world, room) = world.spawn(ThingData::new("armory", Kind::Place));
    let (world, hero) = world
        .spawn_in(ThingData::new("hero", Kind::Creature).with_health(10), room)
        .unwrap();
    let (world, lamp) = world
        .spawn_in(
            ThingData::new("lamp", Kind::LightSource).with_flags(ThingFlags::LIT),
            room,
        )
        .unwrap();
    let (world, sword) = world
        .spawn_in(
            ThingData::new("sword", Kind::Weapon)
                .with_adjective("rusty")
                .with_damage(DamageType::Slashing, 4),
            room,
        )
        .unwrap();
    let (world, axe) = world
        .spawn_in(
            ThingData::new("axe", Kind::Weapon)
                .with_flags(ThingFlags::TWO_HANDED)
                .with_damage(DamageType::Slashing, 7),
            hero,
        )
        .unwrap();
    let (world, goblin) = world
        .spawn_in(ThingData::new("goblin", Kind::Creature).with_health(5), room)
        .unwrap();
    let (world, chest) = world
        .spawn_in(ThingData::new("chest", Kind::Container), room)
        .unwrap();

    Armory {
        world,
        dispatcher: stdlib::dispatcher().unwrap(),
        room,
        hero,
        sword,
        axe,
        goblin,
        chest,
        lamp,
    }
}
