//! Overload selection when one verb has several signatures.

use lantern_foundation::Kind;
use lantern_parser::stdlib::{self, actions};
use lantern_parser::{ActionDescriptor, CommandDispatcher, ParamSpec, ParamType, Reason};
use lantern_world::ThingData;

use crate::common::{Armory, armory};

fn open_object() -> ActionDescriptor {
    ActionDescriptor::new("open", actions::open).param(ParamSpec::thing(Kind::WorldObject))
}

fn open_portal() -> ActionDescriptor {
    ActionDescriptor::new("open", actions::open_portal).param(ParamSpec::thing(Kind::Portal))
}

fn with_carried_box(mut a: Armory) -> (Armory, lantern_foundation::EntityId) {
    let (world, parcel) = a
        .world
        .spawn_in(ThingData::new("box", Kind::Container), a.hero)
        .unwrap();
    a.world = world;
    (a, parcel)
}

fn bound_kind(dispatcher: &CommandDispatcher, a: &Armory, line: &str) -> Option<ParamType> {
    dispatcher
        .parse(&a.world, a.hero, line)
        .command()
        .map(|command| command.action().params()[0].ty)
}

#[test]
fn world_object_first_wins_outright() {
    let (a, parcel) = with_carried_box(armory());
    let mut dispatcher = CommandDispatcher::new(stdlib::vocabulary());
    dispatcher.register(open_object()).unwrap();
    dispatcher.register(open_portal()).unwrap();

    let command = dispatcher.parse(&a.world, a.hero, "open box").command().unwrap();
    assert_eq!(command.thing(0), Some(parcel));
    assert_eq!(
        command.action().params()[0].ty,
        ParamType::Thing(Kind::WorldObject)
    );
}

#[test]
fn portal_first_mismatches_then_falls_through() {
    let (a, parcel) = with_carried_box(armory());
    let mut dispatcher = CommandDispatcher::new(stdlib::vocabulary());
    dispatcher.register(open_portal()).unwrap();
    dispatcher.register(open_object()).unwrap();

    let result = dispatcher.parse(&a.world, a.hero, "open box");
    assert_eq!(result.command().and_then(|c| c.thing(0)), Some(parcel));
    assert_eq!(
        bound_kind(&dispatcher, &a, "open box"),
        Some(ParamType::Thing(Kind::WorldObject))
    );
}

#[test]
fn only_openable_overload_rejects_a_sword() {
    let a = armory();
    let mut dispatcher = CommandDispatcher::new(stdlib::vocabulary());
    let open = ActionDescriptor::new("open", actions::open).param(ParamSpec::thing(Kind::Openable));
    dispatcher.register(open).unwrap();
    assert_eq!(
        dispatcher.parse(&a.world, a.hero, "open sword").reason(),
        Some(Reason::Mismatch)
    );
}

#[test]
fn standard_open_picks_the_container_overload() {
    let a = armory();
    assert_eq!(
        bound_kind(&a.dispatcher, &a, "open chest"),
        Some(ParamType::Thing(Kind::Openable))
    );
    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "open goblin").reason(),
        Some(Reason::Mismatch)
    );
}

#[test]
fn mismatch_beats_syntax_across_candidates() {
    let a = armory();
    // Neither hit overload accepts a weapon as the target; the two-word
    // overload is never tried for lack of words.
    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "hit sword").reason(),
        Some(Reason::Mismatch)
    );
    assert_eq!(
        a.dispatcher.parse(&a.world, a.hero, "hit unicorn").reason(),
        Some(Reason::Syntax)
    );
}
