//! Containment tests: moves, cycles, and snapshot independence.

use lantern_foundation::{ErrorKind, Kind};
use lantern_world::{ThingData, World};
use proptest::prelude::*;

fn shelf(count: usize) -> (World, Vec<lantern_foundation::EntityId>) {
    let (mut world, room) = World::new(0).spawn(ThingData::new("room", Kind::Place));
    let mut ids = vec![room];
    for i in 0..count {
        let (next, id) = world
            .spawn_in(ThingData::new(format!("crate{i}"), Kind::Container), room)
            .unwrap();
        world = next;
        ids.push(id);
    }
    (world, ids)
}

#[test]
fn nested_containers_report_location() {
    let (world, ids) = shelf(3);
    let (room, outer, inner) = (ids[0], ids[1], ids[2]);
    let world = world.move_to(inner, outer).unwrap();
    let (world, gem) = world
        .spawn_in(ThingData::new("gem", Kind::Item), inner)
        .unwrap();

    assert_eq!(world.location_of(gem), Some(room));
    assert!(world.is_within(gem, outer));
    assert!(!world.is_within(outer, gem));
}

#[test]
fn cycles_are_rejected() {
    let (world, ids) = shelf(2);
    let world = world.move_to(ids[2], ids[1]).unwrap();
    let err = world.move_to(ids[1], ids[2]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ContainmentCycle { .. }));
}

#[test]
fn old_snapshots_survive_moves() {
    let (before, ids) = shelf(2);
    let after = before.move_to(ids[2], ids[1]).unwrap();
    assert_eq!(before.parent(ids[2]), Some(ids[0]));
    assert_eq!(after.parent(ids[2]), Some(ids[1]));
    assert_eq!(before.contents(ids[0]).count(), 2);
    assert_eq!(after.contents(ids[0]).count(), 1);
}

proptest! {
    #[test]
    fn parents_and_contents_agree(moves in prop::collection::vec((1usize..6, 0usize..6), 0..40)) {
        let (mut world, ids) = shelf(5);
        for (thing, into) in moves {
            if let Ok(next) = world.move_to(ids[thing], ids[into]) {
                world = next;
            }
        }
        for &id in &ids {
            for child in world.contents(id) {
                prop_assert_eq!(world.parent(child), Some(id));
            }
            if let Some(parent) = world.parent(id) {
                prop_assert!(world.contents(parent).any(|c| c == id));
                prop_assert!(!world.is_within(parent, id));
            }
        }
    }
}
