//! A two-room sample world for the REPL and tests.
//!
//! ```text
//!   +---------+  north / south  +---------+
//!   | cellar  |=====[door]======|  hall   |
//!   | lamp    |                 | goblin  |
//!   | box     |                 | sword   |
//!   |  coin   |                 |         |
//!   |  dagger |                 |         |
//!   +---------+                 +---------+
//! ```

use lantern_foundation::{EntityId, Kind, Result};
use lantern_world::{DamageType, Direction, Exit, ThingData, ThingFlags, World};

/// The sample world and the handles worth keeping.
#[derive(Clone, Debug)]
pub struct Demo {
    /// The world.
    pub world: World,
    /// The player character.
    pub player: EntityId,
    /// Starting room.
    pub cellar: EntityId,
    /// Room beyond the door.
    pub hall: EntityId,
    /// Closed door between the rooms.
    pub door: EntityId,
    /// Closed box in the cellar.
    pub chest: EntityId,
    /// Lit lamp on the cellar floor.
    pub lamp: EntityId,
    /// Goblin waiting in the hall.
    pub goblin: EntityId,
    /// Sword lying in the hall.
    pub sword: EntityId,
}

/// Builds the sample world.
///
/// # Errors
///
/// Returns an error only if the world rejects a placement.
pub fn build(seed: u64) -> Result<Demo> {
    let world = World::new(seed);

    let (world, cellar) = world.spawn(
        ThingData::new("cellar", Kind::Place)
            .with_description("A damp stone cellar. Stairs are long gone."),
    );
    let (world, hall) = world.spawn(
        ThingData::new("hall", Kind::Place)
            .with_flags(ThingFlags::LIT)
            .with_description("A draughty hall lit by guttering torches."),
    );
    let (world, door) = world.spawn(
        ThingData::new("door", Kind::Portal)
            .with_adjective("oak")
            .with_description("A heavy oak door."),
    );
    let world = world
        .add_exit(cellar, Exit::new(Direction::North, hall).through(door))?
        .add_exit(hall, Exit::new(Direction::South, cellar).through(door))?;

    let (world, player) = world.spawn_in(
        ThingData::new("you", Kind::Creature)
            .with_alias("me")
            .with_alias("self")
            .with_health(10),
        cellar,
    )?;
    let (world, lamp) = world.spawn_in(
        ThingData::new("lamp", Kind::LightSource)
            .with_alias("lantern")
            .with_adjective("brass")
            .with_flags(ThingFlags::LIT),
        cellar,
    )?;
    let (world, chest) = world.spawn_in(
        ThingData::new("box", Kind::Container)
            .with_alias("chest")
            .with_adjective("wooden")
            .without_flags(ThingFlags::PORTABLE),
        cellar,
    )?;
    let (world, _) = world.spawn_in(
        ThingData::new("coin", Kind::Item).with_adjective("gold"),
        chest,
    )?;
    let (world, _) = world.spawn_in(
        ThingData::new("dagger", Kind::Weapon)
            .with_alias("knife")
            .with_damage(DamageType::Piercing, 3),
        chest,
    )?;

    let (world, goblin) = world.spawn_in(
        ThingData::new("goblin", Kind::Creature)
            .with_adjective("snarling")
            .with_health(6),
        hall,
    )?;
    let (world, sword) = world.spawn_in(
        ThingData::new("sword", Kind::Weapon)
            .with_adjective("rusty")
            .with_damage(DamageType::Slashing, 5)
            .with_description("Notched and orange with rust, but sharp enough."),
        hall,
    )?;

    Ok(Demo {
        world,
        player,
        cellar,
        hall,
        door,
        chest,
        lamp,
        goblin,
        sword,
    })
}
