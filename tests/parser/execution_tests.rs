//! Parsing and executing against a world.

use lantern_parser::{ActionError, Event};

use crate::common::armory;

#[test]
fn take_moves_the_sword() {
    let a = armory();
    let command = a.dispatcher.parse(&a.world, a.hero, "take sword").command().unwrap();
    assert_eq!(command.action().name(), "take");
    assert_eq!(command.thing(0), Some(a.sword));

    let (world, result) = command.execute(a.world.clone()).unwrap();
    assert!(world.carries(a.hero, a.sword));
    assert!(!a.world.carries(a.hero, a.sword));
    assert_eq!(result.events, [Event::Description("Taken.".into())]);
}

#[test]
fn weapon_is_picked_up_before_the_blow() {
    let a = armory();
    let command = a
        .dispatcher
        .parse(&a.world, a.hero, "hit goblin with rusty sword")
        .command()
        .unwrap();
    let (world, result) = command.execute(a.world.clone()).unwrap();

    assert!(world.carries(a.hero, a.sword));
    assert_eq!(
        result.events.first(),
        Some(&Event::Notification("first taking the rusty sword".into()))
    );
    let health = world.get(a.goblin).unwrap().health.unwrap();
    assert!((1..5).contains(&health), "goblin at {health}");
}

#[test]
fn dropping_what_is_not_held_is_refused() {
    let a = armory();
    let command = a.dispatcher.parse(&a.world, a.hero, "drop sword").command().unwrap();
    let err = command.execute(a.world.clone()).unwrap_err();
    assert!(matches!(err, ActionError::NotCarried(id) if id == a.sword));
}

#[test]
fn vanished_arguments_are_gone() {
    let a = armory();
    let command = a.dispatcher.parse(&a.world, a.hero, "take sword").command().unwrap();
    let world = a.world.destroy(a.sword).unwrap();
    let err = command.execute(world).unwrap_err();
    assert!(matches!(err, ActionError::Gone(id) if id == a.sword));
}

#[test]
fn precondition_refusals_carry_prose() {
    let a = armory();
    let command = a.dispatcher.parse(&a.world, a.hero, "take axe").command().unwrap();
    let err = command.execute(a.world.clone()).unwrap_err();
    let ActionError::Precondition(message) = err else {
        panic!("expected a refusal, got {err:?}");
    };
    assert!(!message.is_empty());
}

#[test]
fn same_seed_same_damage() {
    let a = armory();
    let run = || {
        let command = a
            .dispatcher
            .parse(&a.world, a.hero, "hit goblin with axe")
            .command()
            .unwrap();
        let (world, _) = command.execute(a.world.clone()).unwrap();
        world.get(a.goblin).unwrap().health
    };
    assert_eq!(run(), run());
}
