//! Lantern - text-adventure engine with a backtracking command dispatcher
//!
//! This crate re-exports every layer of Lantern for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: lantern_runtime    - Session, scheduler, REPL, CLI
//! Layer 2: lantern_parser     - Tokenizer, argument parsers, matcher, dispatcher, stdlib
//! Layer 1: lantern_world      - Persistent world: things, containment, exits, light
//! Layer 0: lantern_foundation - Core types (EntityId, Kind, Error)
//! ```

pub use lantern_foundation as foundation;
pub use lantern_parser as parser;
pub use lantern_runtime as runtime;
pub use lantern_world as world;
