//! Persistent world model for Lantern.
//!
//! This crate provides:
//! - [`EntityStore`] - Generational entity allocation
//! - [`ThingData`] - Names, kind, flags, and combat stats of one thing
//! - [`Exit`] and [`Direction`] - Connections between places
//! - [`World`] - Immutable world state with structural sharing

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod direction;
pub mod entity;
pub mod thing;
pub mod world;

pub use direction::{Direction, Exit};
pub use entity::EntityStore;
pub use thing::{Damage, DamageType, ThingData, ThingFlags};
pub use world::World;
