//! Delayed and repeating actions.

use crate::{health, says, start};

#[test]
fn wait_fires_after_three_ticks() {
    let (mut s, d) = start();
    let out = s.submit(d.player, "wait");
    assert_eq!(out, ["You settle in to wait."]);
    assert!(s.advance(1).is_empty());
    assert_eq!(s.advance(1), ["Time passes."]);
    assert!(!s.is_busy(d.player));
}

#[test]
fn another_command_interrupts_waiting() {
    let (mut s, d) = start();
    s.submit(d.player, "wait");
    let out = s.submit(d.player, "inventory");
    assert!(!says(&out, "Time passes."));
    assert!(s.advance(20).is_empty());
}

#[test]
fn rest_repeats_until_interrupted() {
    let (mut s, d) = start();
    let before = health(&s, d.player);

    let out = s.submit(d.player, "rest two");
    assert_eq!(out, ["You lie down to rest."]);
    let out = s.advance(5);
    assert_eq!(out.len(), 3, "{out:?}");
    assert_eq!(health(&s, d.player), before + 3);

    s.submit(d.player, "look");
    assert!(s.advance(10).is_empty());
    assert_eq!(health(&s, d.player), before + 3);
}

#[test]
fn resting_too_long_is_refused() {
    let (mut s, d) = start();
    let out = s.submit(d.player, "rest 500");
    assert!(says(&out, "between 1 and"), "{out:?}");
    assert!(!s.is_busy(d.player));
}
