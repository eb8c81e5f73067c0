//! Command interpretation and dispatch for text adventure games.
//!
//! This crate turns player input like "take sword" or "hit goblin with axe
//! carefully" into a typed, executable [`Command`] bound to one of many
//! overloaded, registered actions.
//!
//! # Architecture
//!
//! ```text
//! "hit goblin with axe carefully"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["hit", "goblin", "with", "axe", "carefully"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DISPATCHER     │  → verb "hit" → [hit <creature>, hit <creature> with <weapon>]
//! │  (verb lookup)  │     (arity pre-filter against the cursor)
//! └─────────────────┘
//!          │  for each candidate, in registration order
//!          ▼
//! ┌─────────────────┐
//! │    MATCHER      │  → per parameter: try applicable argument parsers,
//! │  (backtracking) │     mark/back on failure, abort on kind mismatch
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    COMMAND      │  → actor, action, [goblin, with, axe], Effort::Careful
//! │ verify/execute  │     (re-checked against the world right before effects)
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Convert raw input to lowercase words
//! - [`cursor`] - Backtrackable view over the words of one line
//! - [`vocabulary`] - Synonym store for verbs, literals, and enum words
//! - [`value`] - Parameter types and argument values
//! - [`argument`] - The argument parser family
//! - [`group`] - Parser registries and their priority composition
//! - [`action`] - Action descriptors, results, and the registry
//! - [`matcher`] - Binding one candidate action against a cursor
//! - [`dispatcher`] - Verb lookup and candidate iteration
//! - [`command`] - Bound commands and their pre-execution checks
//! - [`stdlib`] - Standard vocabulary and actions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod argument;
pub mod command;
pub mod cursor;
pub mod dispatcher;
pub mod group;
pub mod matcher;
pub mod stdlib;
pub mod tokenizer;
pub mod value;
pub mod vocabulary;

// Re-export main types for convenience
pub use action::{
    ActionContext, ActionDescriptor, ActionError, ActionId, ActionRegistry, ActionResult, Event,
    Induction, ParamSpec, RegistryError,
};
pub use argument::{ArgumentParser, ParseContext};
pub use command::Command;
pub use cursor::WordCursor;
pub use dispatcher::{CommandDispatcher, ParserResult};
pub use group::{ArgumentParserGroup, ArgumentRegistry};
pub use matcher::{ActionMatcher, MatchError, Reason};
pub use value::{Effort, ParamType, ThingFilter, Value, WordEnum};
pub use vocabulary::Vocabulary;
