//! Core identifiers, kind hierarchy, and error types for Lantern.
//!
//! This crate provides:
//! - [`EntityId`] - Generational identifiers for everything in the world
//! - [`Kind`] - The closed hierarchy of thing kinds used for argument typing
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod kind;

pub use entity::EntityId;
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use kind::Kind;
