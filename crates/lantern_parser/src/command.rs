//! Bound commands.
//!
//! A [`Command`] is what a successful parse hands back: the actor, the action
//! it matched, and one value per declared parameter. The world may move on
//! between parsing and execution, so [`Command::verify`] re-checks the thing
//! arguments right before the handler runs.

use std::sync::Arc;

use lantern_foundation::EntityId;
use lantern_world::{ThingFlags, World};

use crate::action::{ActionContext, ActionDescriptor, ActionError, ActionResult, Event};
use crate::argument::is_reachable;
use crate::value::{Effort, ThingFilter, Value, WordEnum};

/// A parsed, fully bound command.
///
/// There is one argument per declared parameter, each accepted by the
/// parameter's type. Executing consumes the command.
#[derive(Debug, PartialEq)]
pub struct Command {
    actor: EntityId,
    action: Arc<ActionDescriptor>,
    args: Vec<Value>,
    effort: Effort,
}

impl Command {
    pub(crate) fn new(
        actor: EntityId,
        action: Arc<ActionDescriptor>,
        args: Vec<Value>,
        effort: Effort,
    ) -> Self {
        debug_assert_eq!(args.len(), action.arity());
        Self {
            actor,
            action,
            args,
            effort,
        }
    }

    /// Who issued the command.
    #[must_use]
    pub fn actor(&self) -> EntityId {
        self.actor
    }

    /// The matched action.
    #[must_use]
    pub fn action(&self) -> &Arc<ActionDescriptor> {
        &self.action
    }

    /// Bound arguments, one per parameter.
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }

    /// Effort modifier; `Normal` when none was given.
    #[must_use]
    pub fn effort(&self) -> Effort {
        self.effort
    }

    /// The thing at parameter `index`.
    #[must_use]
    pub fn thing(&self, index: usize) -> Option<EntityId> {
        self.args.get(index).and_then(Value::as_thing)
    }

    /// The number at parameter `index`.
    #[must_use]
    pub fn number(&self, index: usize) -> Option<i64> {
        self.args.get(index).and_then(Value::as_number)
    }

    /// The filter at parameter `index`.
    #[must_use]
    pub fn filter(&self, index: usize) -> Option<ThingFilter> {
        self.args.get(index).and_then(Value::as_filter)
    }

    /// The enum constant at parameter `index`.
    #[must_use]
    pub fn constant<E: WordEnum>(&self, index: usize) -> Option<E> {
        self.args.get(index).and_then(Value::as_enum::<E>)
    }

    /// Every thing argument, in parameter order.
    pub fn things(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.args.iter().filter_map(Value::as_thing)
    }

    /// Re-checks the arguments against the current world.
    ///
    /// Thing arguments must still exist. Carried parameters must be in the
    /// actor's inventory; with auto-take, a reachable portable thing is
    /// picked up first and the returned world reflects that. The action's
    /// precondition runs last, against the returned world.
    ///
    /// # Errors
    ///
    /// Returns `Gone`, `NotCarried`, or whatever the precondition returns.
    pub fn verify(&self, world: &World) -> Result<World, ActionError> {
        let mut world = world.clone();

        for (spec, value) in self.action.params().iter().zip(&self.args) {
            let Some(id) = value.as_thing() else {
                continue;
            };
            if !world.exists(id) {
                return Err(ActionError::Gone(id));
            }
            if !spec.must_be_carried || world.carries(self.actor, id) {
                continue;
            }
            let takeable = spec.auto_take
                && world.has_flag(id, ThingFlags::PORTABLE)
                && is_reachable(&world, self.actor, id);
            if !takeable {
                return Err(ActionError::NotCarried(id));
            }
            tracing::debug!(actor = %self.actor, thing = %id, "taking before acting");
            world = world.move_to(id, self.actor)?;
        }

        if let Some(check) = self.action.precondition() {
            check(&world, self)?;
        }
        Ok(world)
    }

    /// Verifies, then runs the handler.
    ///
    /// Things picked up during verification are reported ahead of the
    /// handler's own events.
    ///
    /// # Errors
    ///
    /// Returns the first error from [`verify`](Self::verify) or the handler.
    pub fn execute(self, world: World) -> Result<(World, ActionResult), ActionError> {
        let verified = self.verify(&world)?;
        let mut picked_up: Vec<EntityId> = Vec::new();
        for id in self.things() {
            if !world.carries(self.actor, id)
                && verified.carries(self.actor, id)
                && !picked_up.contains(&id)
            {
                picked_up.push(id);
            }
        }
        let taken: Vec<Event> = picked_up
            .into_iter()
            .map(|id| Event::Notification(format!("first taking the {}", verified.describe(id))))
            .collect();

        let mut ctx = ActionContext::new(verified);
        let mut result = (self.action.handler())(&mut ctx, &self)?;
        result.events.splice(0..0, taken);
        tracing::debug!(action = %self.action.id(), events = result.events.len(), "executed");
        Ok((ctx.into_world(), result))
    }
}
