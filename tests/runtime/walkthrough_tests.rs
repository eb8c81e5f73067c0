//! From the cellar to the goblin.

use crate::{health, says, start};

#[test]
fn cellar_to_hall() {
    let (mut s, d) = start();
    let player = d.player;

    let out = s.submit(player, "look");
    assert!(says(&out, "Cellar"), "{out:?}");

    let out = s.submit(player, "go north");
    assert!(says(&out, "The oak door is closed."), "{out:?}");

    let out = s.submit(player, "open the oak door");
    assert!(says(&out, "revealing a way north"), "{out:?}");

    let out = s.submit(player, "go n");
    assert!(says(&out, "Hall"), "{out:?}");
    assert_eq!(s.world().location_of(player), Some(d.hall));

    let out = s.submit(player, "hit goblin with sword");
    assert_eq!(out.first().map(String::as_str), Some("(first taking the rusty sword)"));
    assert!(s.world().carries(player, d.sword));
    assert!(health(&s, d.goblin) < 6);
}

#[test]
fn box_contents_and_pronouns() {
    let (mut s, d) = start();
    let player = d.player;

    assert_eq!(s.submit(player, "take coin"), ["I don't understand that."]);

    let out = s.submit(player, "open box");
    assert!(says(&out, "coin"), "{out:?}");

    s.submit(player, "examine dagger");
    let out = s.submit(player, "take it");
    assert_eq!(out, ["Taken."]);
    assert_eq!(s.world().last_referenced(player), s.world().contents(player).next());
}

#[test]
fn refusals_do_not_end_the_session() {
    let (mut s, d) = start();
    let player = d.player;

    assert_eq!(s.submit(player, "open lamp"), ["You can't do that with that."]);
    let out = s.submit(player, "take box");
    assert!(says(&out, "won't budge"), "{out:?}");
    let out = s.submit(player, "drop lamp");
    assert!(says(&out, "You aren't holding the brass lamp."), "{out:?}");
    assert_eq!(s.world().tick(), 3);
}

#[test]
fn darkness_after_the_lamp_leaves() {
    let (mut s, d) = start();
    let player = d.player;

    s.submit(player, "take lamp");
    let world = s.world().move_to(d.lamp, d.hall).unwrap();
    s.set_world(world);

    let out = s.submit(player, "look");
    assert!(says(&out, "pitch dark"), "{out:?}");
    assert_eq!(s.submit(player, "open box"), ["I don't understand that."]);
}
