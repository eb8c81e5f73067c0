//! Binding one candidate action against the words of a line.
//!
//! The matcher walks the action's parameters left to right. For each one it
//! offers the words at the cursor to every applicable argument parser in
//! group order, undoing each failed attempt with mark/back. A parser that
//! succeeds with a value of the wrong kind sinks the whole candidate: the
//! player named something real, just not something this action takes.

use std::sync::Arc;

use arrayvec::ArrayVec;
use thiserror::Error;

use crate::action::{ActionDescriptor, MAX_PARAMS};
use crate::argument::{EffortParser, ParseContext};
use crate::command::Command;
use crate::cursor::WordCursor;
use crate::group::ArgumentParserGroup;
use crate::value::{Effort, ParamType, Value};

/// Why a candidate did not match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Reason {
    /// The words do not fit the action's shape.
    Syntax,
    /// The words named something of the wrong kind.
    Mismatch,
}

/// Misuse of the matcher.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The line is too short to hold the verb and every parameter.
    #[error("action needs {needed} words but the line has {available}")]
    InsufficientCapacity {
        /// Verb plus one word per parameter.
        needed: usize,
        /// Words on the line.
        available: usize,
    },
    /// The action declares more parameters than the matcher can bind.
    #[error("action declares {count} parameters, at most {MAX_PARAMS} are supported")]
    TooManyParameters {
        /// Declared parameter count.
        count: usize,
    },
}

/// An earlier binding in the current attempt.
#[derive(Debug)]
struct Slot {
    ty: ParamType,
    start: usize,
    end: usize,
    value: Value,
}

/// Matches candidate actions against a cursor.
#[derive(Debug)]
pub struct ActionMatcher<'a> {
    group: &'a ArgumentParserGroup<'a>,
    ctx: &'a ParseContext<'a>,
    effort: &'a EffortParser,
}

impl<'a> ActionMatcher<'a> {
    /// Creates a matcher.
    #[must_use]
    pub fn new(
        group: &'a ArgumentParserGroup<'a>,
        ctx: &'a ParseContext<'a>,
        effort: &'a EffortParser,
    ) -> Self {
        Self { group, ctx, effort }
    }

    /// Tries to bind `action` to the words after the verb.
    ///
    /// Returns `Ok(None)` and pushes a [`Reason`] when the candidate does not
    /// match.
    ///
    /// # Errors
    ///
    /// Returns `InsufficientCapacity` if the line cannot hold the action's
    /// parameters at all, and `TooManyParameters` if the action declares
    /// more than [`MAX_PARAMS`].
    pub fn attempt(
        &self,
        action: &Arc<ActionDescriptor>,
        cursor: &mut WordCursor,
        reasons: &mut Vec<Reason>,
    ) -> Result<Option<Command>, MatchError> {
        cursor.reset();
        let params = action.params();
        if params.len() > MAX_PARAMS {
            return Err(MatchError::TooManyParameters {
                count: params.len(),
            });
        }
        if !cursor.capacity(params.len() + 1) {
            return Err(MatchError::InsufficientCapacity {
                needed: params.len() + 1,
                available: cursor.len(),
            });
        }
        tracing::debug!(
            action = %action.id(),
            signature = %action.signature(),
            "trying candidate"
        );

        let mut slots: ArrayVec<Slot, MAX_PARAMS> = ArrayVec::new();

        for (index, spec) in params.iter().enumerate() {
            let trailing = params.len() - index - 1;

            if let Some(slot) = Self::reuse(&slots, spec.ty, cursor, trailing) {
                slots.push(slot);
                continue;
            }

            match self.bind(spec.ty, cursor, trailing) {
                Binding::Bound(slot) => slots.push(slot),
                Binding::Mismatch(value) => {
                    tracing::debug!(
                        action = %action.id(),
                        index,
                        expected = %spec.ty,
                        ?value,
                        "kind mismatch"
                    );
                    reasons.push(Reason::Mismatch);
                    return Ok(None);
                }
                Binding::Unbound => {
                    tracing::debug!(
                        action = %action.id(),
                        index,
                        expected = %spec.ty,
                        "no parser matched"
                    );
                    reasons.push(Reason::Syntax);
                    return Ok(None);
                }
            }
        }

        let effort = if action.supports_effort() && !cursor.is_exhausted() {
            let Some(effort) = self.effort.parse_effort(cursor, self.ctx) else {
                tracing::debug!(action = %action.id(), word = ?cursor.peek(), "unknown effort");
                reasons.push(Reason::Syntax);
                return Ok(None);
            };
            effort
        } else {
            Effort::Normal
        };

        if !cursor.is_exhausted() {
            tracing::debug!(action = %action.id(), leftover = ?cursor.peek(), "words left over");
            reasons.push(Reason::Syntax);
            return Ok(None);
        }

        let args = slots.into_iter().map(|slot| slot.value).collect();
        Ok(Some(Command::new(
            self.ctx.actor,
            Arc::clone(action),
            args,
            effort,
        )))
    }

    /// Reuses an earlier binding of the same type read from the same words.
    fn reuse(
        slots: &[Slot],
        ty: ParamType,
        cursor: &mut WordCursor,
        trailing: usize,
    ) -> Option<Slot> {
        let earlier = slots.iter().find(|slot| {
            let width = slot.end - slot.start;
            slot.ty == ty
                && cursor.remaining(width + trailing)
                && cursor.lookahead(width) == Some(cursor.span(slot.start, slot.end))
        })?;
        let width = earlier.end - earlier.start;
        let start = cursor.position();
        cursor.skip(width);
        tracing::trace!(%ty, start, "reused earlier binding");
        Some(Slot {
            ty,
            start,
            end: cursor.position(),
            value: earlier.value.clone(),
        })
    }

    /// Offers the words at the cursor to each applicable parser in turn.
    ///
    /// The last `trailing` words stay reserved, so a parser with a wide and
    /// a narrow reading falls back to the narrow one.
    fn bind(&self, ty: ParamType, cursor: &mut WordCursor, trailing: usize) -> Binding {
        for parser in self.group.parsers_for(ty) {
            if !cursor.remaining(parser.word_count() + trailing) {
                tracing::trace!(?parser, "not enough words left");
                continue;
            }
            let start = cursor.position();
            cursor.mark();
            cursor.reserve(trailing);
            let parsed = parser.parse(cursor, self.ctx);
            cursor.release();
            match parsed {
                None => {
                    cursor.back();
                }
                Some(value) if !ty.accepts(value.param_type()) => {
                    return Binding::Mismatch(value);
                }
                Some(value) => {
                    tracing::trace!(?parser, ?value, "bound");
                    return Binding::Bound(Slot {
                        ty,
                        start,
                        end: cursor.position(),
                        value,
                    });
                }
            }
        }
        Binding::Unbound
    }
}

enum Binding {
    Bound(Slot),
    Mismatch(Value),
    Unbound,
}
