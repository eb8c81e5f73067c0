//! Action descriptors, their results, and the registry.
//!
//! An action is a verb plus a typed parameter list, bound to a plain handler
//! function. Several actions may share a verb; the dispatcher tries them in
//! registration order.

use std::fmt;
use std::sync::Arc;

use lantern_foundation::{EntityId, Kind};
use lantern_world::World;
use thiserror::Error;

use crate::command::Command;
use crate::value::ParamType;
use crate::vocabulary::Vocabulary;

/// Most parameters a single action may declare.
pub const MAX_PARAMS: usize = 8;

/// Runs an action against a verified world.
pub type Handler = fn(&mut ActionContext, &Command) -> Result<ActionResult, ActionError>;

/// Checks business rules before the handler runs.
pub type Precondition = fn(&World, &Command) -> Result<(), ActionError>;

/// Runs when an induction comes due.
pub type Completion =
    Box<dyn FnMut(&mut ActionContext) -> Result<ActionResult, ActionError> + Send>;

// =============================================================================
// Errors
// =============================================================================

/// Why a parsed command could not be carried out.
#[derive(Debug, Error)]
pub enum ActionError {
    /// A thing argument no longer exists.
    #[error("{0} no longer exists")]
    Gone(EntityId),
    /// A thing had to be carried and could not be picked up.
    #[error("{0} must be carried")]
    NotCarried(EntityId),
    /// A business rule refused the action. The message is player-facing.
    #[error("{0}")]
    Precondition(String),
    /// The world rejected an update.
    #[error(transparent)]
    World(#[from] lantern_foundation::Error),
}

impl ActionError {
    /// Creates a precondition failure.
    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }
}

/// Why an action could not be registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The action declares more parameters than the matcher can hold.
    #[error("action `{name}` declares {count} parameters, at most {MAX_PARAMS} are supported")]
    TooManyParameters {
        /// Action name.
        name: &'static str,
        /// Parameters declared.
        count: usize,
    },
}

// =============================================================================
// Descriptors
// =============================================================================

/// Registration order of an action. Earlier actions win ties.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ActionId(pub usize);

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// One declared parameter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParamSpec {
    /// Declared type.
    pub ty: ParamType,
    /// The thing must be in the actor's inventory.
    pub must_be_carried: bool,
    /// Pick the thing up first if it is not carried.
    pub auto_take: bool,
}

impl ParamSpec {
    /// A parameter of the given type.
    #[must_use]
    pub const fn new(ty: ParamType) -> Self {
        Self {
            ty,
            must_be_carried: false,
            auto_take: false,
        }
    }

    /// A thing of `kind` or any descendant.
    #[must_use]
    pub const fn thing(kind: Kind) -> Self {
        Self::new(ParamType::Thing(kind))
    }

    /// A fixed word.
    #[must_use]
    pub const fn literal(key: &'static str) -> Self {
        Self::new(ParamType::Literal(key))
    }

    /// Requires the thing to be carried.
    #[must_use]
    pub const fn carried(mut self) -> Self {
        self.must_be_carried = true;
        self
    }

    /// Requires the thing to be carried, picking it up if needed.
    #[must_use]
    pub const fn auto_take(mut self) -> Self {
        self.must_be_carried = true;
        self.auto_take = true;
        self
    }
}

impl From<ParamType> for ParamSpec {
    fn from(ty: ParamType) -> Self {
        Self::new(ty)
    }
}

/// An action: verb, parameters, and behavior.
#[derive(Clone)]
pub struct ActionDescriptor {
    id: ActionId,
    name: &'static str,
    verb_key: String,
    params: Vec<ParamSpec>,
    supports_effort: bool,
    handler: Handler,
    precondition: Option<Precondition>,
}

impl ActionDescriptor {
    /// Creates an action for the verb `name`.
    ///
    /// The verb is matched through the synonyms filed under `verb.<name>`.
    #[must_use]
    pub fn new(name: &'static str, handler: Handler) -> Self {
        Self {
            id: ActionId::default(),
            name,
            verb_key: format!("verb.{name}"),
            params: Vec::new(),
            supports_effort: false,
            handler,
            precondition: None,
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, spec: impl Into<ParamSpec>) -> Self {
        self.params.push(spec.into());
        self
    }

    /// Accepts a trailing effort word.
    #[must_use]
    pub fn with_effort(mut self) -> Self {
        self.supports_effort = true;
        self
    }

    /// Adds a business-rule check.
    #[must_use]
    pub fn with_precondition(mut self, precondition: Precondition) -> Self {
        self.precondition = Some(precondition);
        self
    }

    /// Registration order.
    #[must_use]
    pub fn id(&self) -> ActionId {
        self.id
    }

    /// Verb name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Vocabulary key for the verb.
    #[must_use]
    pub fn verb_key(&self) -> &str {
        &self.verb_key
    }

    /// Declared parameters.
    #[must_use]
    pub fn params(&self) -> &[ParamSpec] {
        &self.params
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Whether a trailing effort word is accepted.
    #[must_use]
    pub fn supports_effort(&self) -> bool {
        self.supports_effort
    }

    /// The handler.
    #[must_use]
    pub fn handler(&self) -> Handler {
        self.handler
    }

    /// The business-rule check, if any.
    #[must_use]
    pub fn precondition(&self) -> Option<Precondition> {
        self.precondition
    }

    /// Human-readable pattern, e.g. `hit <creature> with <weapon>`.
    #[must_use]
    pub fn signature(&self) -> String {
        let mut out = self.name.to_owned();
        for spec in &self.params {
            out.push(' ');
            out.push_str(&spec.ty.to_string());
        }
        if self.supports_effort {
            out.push_str(" [effort]");
        }
        out
    }
}

impl PartialEq for ActionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.params == other.params
    }
}

impl fmt::Debug for ActionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionDescriptor")
            .field("id", &self.id)
            .field("signature", &self.signature())
            .field("has_precondition", &self.precondition.is_some())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Registered actions, in registration order.
#[derive(Clone, Debug, Default)]
pub struct ActionRegistry {
    actions: Vec<Arc<ActionDescriptor>>,
}

impl ActionRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an action and assigns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the action declares more than [`MAX_PARAMS`]
    /// parameters.
    pub fn register(&mut self, mut action: ActionDescriptor) -> Result<ActionId, RegistryError> {
        if action.params.len() > MAX_PARAMS {
            return Err(RegistryError::TooManyParameters {
                name: action.name,
                count: action.params.len(),
            });
        }
        let id = ActionId(self.actions.len());
        action.id = id;
        tracing::debug!(%id, signature = %action.signature(), "registered action");
        self.actions.push(Arc::new(action));
        Ok(id)
    }

    /// Looks up an action by id.
    #[must_use]
    pub fn get(&self, id: ActionId) -> Option<&Arc<ActionDescriptor>> {
        self.actions.get(id.0)
    }

    /// Actions whose verb `word` names, in registration order.
    #[must_use]
    pub fn for_verb(&self, word: &str, vocabulary: &Vocabulary) -> Vec<Arc<ActionDescriptor>> {
        self.actions
            .iter()
            .filter(|action| vocabulary.matches(action.verb_key(), word))
            .cloned()
            .collect()
    }

    /// All actions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<ActionDescriptor>> {
        self.actions.iter()
    }

    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns true if no actions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

// =============================================================================
// Execution
// =============================================================================

/// Mutable state threaded through a handler.
#[derive(Clone, Debug)]
pub struct ActionContext {
    /// The world; handlers replace it with updated snapshots.
    pub world: World,
}

impl ActionContext {
    /// Wraps a world.
    #[must_use]
    pub fn new(world: World) -> Self {
        Self { world }
    }

    /// Unwraps the world.
    #[must_use]
    pub fn into_world(self) -> World {
        self.world
    }
}

/// Something the player should be told.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// What the actor sees or learns.
    Description(String),
    /// A side note, like an implicit pickup.
    Notification(String),
}

impl Event {
    /// The text of the event.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Description(text) | Self::Notification(text) => text,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Description(text) => write!(f, "{text}"),
            Self::Notification(text) => write!(f, "({text})"),
        }
    }
}

/// A delayed follow-up to an action.
pub struct Induction {
    /// Runs when the induction comes due.
    pub completion: Completion,
    /// Ticks until it comes due, and between repeats.
    pub duration: u64,
    /// Fire again every `duration` ticks until cancelled.
    pub repeating: bool,
}

impl Induction {
    /// Fires once after `duration` ticks.
    #[must_use]
    pub fn after<F>(duration: u64, completion: F) -> Self
    where
        F: FnMut(&mut ActionContext) -> Result<ActionResult, ActionError> + Send + 'static,
    {
        Self {
            completion: Box::new(completion),
            duration,
            repeating: false,
        }
    }

    /// Fires every `period` ticks until cancelled.
    #[must_use]
    pub fn every<F>(period: u64, completion: F) -> Self
    where
        F: FnMut(&mut ActionContext) -> Result<ActionResult, ActionError> + Send + 'static,
    {
        Self {
            repeating: true,
            ..Self::after(period, completion)
        }
    }
}

impl fmt::Debug for Induction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Induction")
            .field("duration", &self.duration)
            .field("repeating", &self.repeating)
            .finish_non_exhaustive()
    }
}

/// What an action produced.
#[derive(Debug, Default)]
pub struct ActionResult {
    /// Messages, in order.
    pub events: Vec<Event>,
    /// Follow-up to schedule, if any.
    pub induction: Option<Induction>,
}

impl ActionResult {
    /// An empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A result with one description.
    #[must_use]
    pub fn describe(text: impl Into<String>) -> Self {
        Self::new().with_event(Event::Description(text.into()))
    }

    /// Appends an event.
    #[must_use]
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Appends a description.
    #[must_use]
    pub fn and_describe(self, text: impl Into<String>) -> Self {
        self.with_event(Event::Description(text.into()))
    }

    /// Schedules a follow-up.
    #[must_use]
    pub fn with_induction(mut self, induction: Induction) -> Self {
        self.induction = Some(induction);
        self
    }
}
