//! Error types for the Lantern world layer.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityId;
use crate::kind::Kind;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for world operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(id: EntityId) -> Self {
        Self::new(ErrorKind::EntityNotFound(id))
    }

    /// Creates a stale entity reference error.
    #[must_use]
    pub fn stale_entity(id: EntityId) -> Self {
        Self::new(ErrorKind::StaleEntity(id))
    }

    /// Creates a wrong-kind error.
    #[must_use]
    pub fn wrong_kind(entity: EntityId, expected: Kind, actual: Kind) -> Self {
        Self::new(ErrorKind::WrongKind {
            entity,
            expected,
            actual,
        })
    }

    /// Creates a containment cycle error.
    #[must_use]
    pub fn containment_cycle(thing: EntityId, into: EntityId) -> Self {
        Self::new(ErrorKind::ContainmentCycle { thing, into })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Entity was never allocated or has been destroyed.
    #[error("entity not found: {0:?}")]
    EntityNotFound(EntityId),

    /// Entity reference is stale (generation mismatch).
    #[error("stale entity reference: {0:?}")]
    StaleEntity(EntityId),

    /// Entity exists but has the wrong kind for the operation.
    #[error("entity {entity:?} is a {actual}, expected {expected}")]
    WrongKind {
        /// The entity that was checked.
        entity: EntityId,
        /// The kind the operation needed.
        expected: Kind,
        /// The kind the entity actually has.
        actual: Kind,
    },

    /// Moving a thing would put it inside itself.
    #[error("cannot move {thing:?} into {into:?}: it would contain itself")]
    ContainmentCycle {
        /// The thing being moved.
        thing: EntityId,
        /// The requested new parent.
        into: EntityId,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Operation that failed, e.g. `move_to`.
    pub operation: Option<String>,
    /// Stack of enclosing operations, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the failing operation.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        for frame in &self.stack {
            write!(f, "\n  from {frame}")?;
        }
        Ok(())
    }
}
