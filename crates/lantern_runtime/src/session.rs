//! A running game: one world, one dispatcher, one clock.
//!
//! Every submitted line goes through the same steps. The actor's pending
//! induction is interrupted first. Then the line is parsed, the command runs,
//! its events are rendered, and any new induction is scheduled. Finally the
//! clock advances and due inductions fire.

use std::collections::HashMap;

use lantern_foundation::EntityId;
use lantern_parser::{
    ActionContext, ActionResult, CommandDispatcher, Induction, ParserResult,
};
use lantern_world::World;
use tracing::{debug, info, warn};

use crate::messages::Messages;
use crate::schedule::{CancelHandle, EventQueue};

/// What scheduled callbacks can touch.
#[derive(Debug)]
pub struct TickContext {
    /// The world as of the firing tick.
    pub world: World,
    /// Lines produced while firing.
    pub output: Vec<String>,
    messages: Messages,
}

/// A game in progress.
pub struct Session {
    world: World,
    dispatcher: CommandDispatcher,
    queue: EventQueue<TickContext>,
    pending: HashMap<EntityId, CancelHandle>,
    messages: Messages,
    ticks_per_command: u64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("tick", &self.world.tick())
            .field("entities", &self.world.entity_count())
            .field("queue", &self.queue)
            .field("pending", &self.pending.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Starts a session on `world`.
    #[must_use]
    pub fn new(world: World, dispatcher: CommandDispatcher) -> Self {
        Self {
            queue: EventQueue::starting_at(world.tick()),
            world,
            dispatcher,
            pending: HashMap::new(),
            messages: Messages::english(),
            ticks_per_command: 1,
        }
    }

    /// Sets how many ticks pass after each command.
    #[must_use]
    pub fn with_ticks_per_command(mut self, ticks: u64) -> Self {
        self.ticks_per_command = ticks;
        self
    }

    /// Replaces the message table.
    #[must_use]
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// The current world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Replaces the world, keeping the clock and pending inductions.
    pub fn set_world(&mut self, world: World) {
        self.world = world;
    }

    /// The dispatcher.
    #[must_use]
    pub fn dispatcher(&self) -> &CommandDispatcher {
        &self.dispatcher
    }

    /// The dispatcher, for registering actions or words.
    pub fn dispatcher_mut(&mut self) -> &mut CommandDispatcher {
        &mut self.dispatcher
    }

    /// Returns true if `actor` has an induction waiting.
    #[must_use]
    pub fn is_busy(&self, actor: EntityId) -> bool {
        self.pending
            .get(&actor)
            .is_some_and(|handle| !handle.is_cancelled())
    }

    /// Runs one line of input for `actor` and returns what they see.
    pub fn submit(&mut self, actor: EntityId, line: &str) -> Vec<String> {
        if let Some(handle) = self.pending.remove(&actor) {
            if !handle.is_cancelled() {
                info!(%actor, "induction interrupted");
                handle.cancel();
            }
        }

        let mut output = Vec::new();
        match self.dispatcher.parse(&self.world, actor, line) {
            ParserResult::Success(command) => {
                if let Some(thing) = command.things().next() {
                    self.world = self.world.remember(actor, thing);
                }
                let action = command.action().name();
                match command.execute(self.world.clone()) {
                    Ok((world, result)) => {
                        debug!(action, "submitted");
                        self.world = world;
                        self.absorb(actor, result, &mut output);
                    }
                    Err(err) => {
                        debug!(action, error = %err, "refused");
                        output.push(self.messages.action_error(&err, &self.world));
                    }
                }
            }
            ParserResult::Failure(reason) => {
                debug!(?reason, line, "no command");
                output.push(self.messages.reason(reason).to_string());
            }
        }

        output.extend(self.advance(self.ticks_per_command));
        output
    }

    /// Moves the clock forward and fires whatever comes due.
    pub fn advance(&mut self, ticks: u64) -> Vec<String> {
        let world = self.world.advance_tick(ticks);
        let now = world.tick();
        let mut ctx = TickContext {
            world,
            output: Vec::new(),
            messages: self.messages.clone(),
        };
        let fired = self.queue.update(now, &mut ctx);
        if fired > 0 {
            debug!(fired, now, "inductions fired");
        }
        self.world = ctx.world;
        self.pending.retain(|_, handle| !handle.is_cancelled());
        ctx.output
    }

    fn absorb(&mut self, actor: EntityId, result: ActionResult, output: &mut Vec<String>) {
        output.extend(result.events.iter().map(|e| self.messages.event(e)));
        if let Some(induction) = result.induction {
            let handle = self.schedule(actor, induction);
            self.pending.insert(actor, handle);
        }
    }

    fn schedule(&mut self, actor: EntityId, induction: Induction) -> CancelHandle {
        let Induction {
            mut completion,
            duration,
            repeating,
        } = induction;
        debug!(%actor, duration, repeating, "induction scheduled");

        self.queue.add(
            Box::new(move |tick: &mut TickContext| {
                let mut ctx = ActionContext::new(tick.world.clone());
                match completion(&mut ctx) {
                    Ok(result) => {
                        tick.world = ctx.into_world();
                        let lines: Vec<_> =
                            result.events.iter().map(|e| tick.messages.event(e)).collect();
                        tick.output.extend(lines);
                    }
                    Err(err) => {
                        warn!(%actor, error = %err, "induction failed");
                        let line = tick.messages.action_error(&err, &tick.world);
                        tick.output.push(line);
                    }
                }
            }),
            duration,
            repeating,
        )
    }
}
