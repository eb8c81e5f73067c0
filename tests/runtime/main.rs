//! Integration tests for the lantern_runtime crate.
//!
//! Plays the demo world through a [`Session`](lantern_runtime::Session):
//! - A walkthrough from cellar to hall
//! - Inductions firing, repeating, and being interrupted

mod induction_tests;
mod walkthrough_tests;

use lantern_foundation::EntityId;
use lantern_parser::stdlib;
use lantern_runtime::{Session, demo};

fn start() -> (Session, demo::Demo) {
    let demo = demo::build(5).unwrap();
    let session = Session::new(demo.world.clone(), stdlib::dispatcher().unwrap());
    (session, demo)
}

fn says(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}

fn health(session: &Session, id: EntityId) -> i32 {
    session.world().get(id).unwrap().health.unwrap_or_default()
}
