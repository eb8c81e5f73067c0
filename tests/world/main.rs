//! Integration tests for the lantern_world crate.
//!
//! - Containment across snapshots
//! - Light and perception

mod containment;
mod light;
