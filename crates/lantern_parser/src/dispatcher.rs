//! Verb lookup and candidate iteration.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use lantern_foundation::EntityId;
use lantern_world::{DamageType, Direction, World};

use crate::action::{ActionDescriptor, ActionId, ActionRegistry, RegistryError};
use crate::argument::{
    ArgumentParser, EffortParser, EnumParser, NumberParser, ParseContext, PreviousObjectParser,
    ThingParser, TwoHandedParser, WeaponDealingParser,
};
use crate::command::Command;
use crate::cursor::WordCursor;
use crate::group::{ArgumentParserGroup, ArgumentRegistry};
use crate::matcher::{ActionMatcher, Reason};
use crate::value::ParamType;
use crate::vocabulary::Vocabulary;

/// The outcome of parsing one line.
#[derive(Debug, PartialEq)]
pub enum ParserResult {
    /// A bound command, ready to execute.
    Success(Command),
    /// Nothing matched.
    Failure(Reason),
}

impl ParserResult {
    /// The command, if parsing succeeded.
    #[must_use]
    pub fn command(self) -> Option<Command> {
        match self {
            Self::Success(command) => Some(command),
            Self::Failure(_) => None,
        }
    }

    /// The reason, if parsing failed.
    #[must_use]
    pub fn reason(&self) -> Option<Reason> {
        match self {
            Self::Success(_) => None,
            Self::Failure(reason) => Some(*reason),
        }
    }
}

type Candidates = Arc<[Arc<ActionDescriptor>]>;

/// Turns lines into commands.
///
/// Register every action before sharing the dispatcher; parsing only needs
/// `&self`.
#[derive(Debug)]
pub struct CommandDispatcher {
    vocabulary: Vocabulary,
    actions: ActionRegistry,
    global: ArgumentRegistry,
    actor_scope: ArgumentRegistry,
    effort: EffortParser,
    verb_cache: RwLock<HashMap<String, Candidates>>,
}

impl CommandDispatcher {
    /// Creates a dispatcher with the built-in argument parsers.
    ///
    /// The global registry reads numbers, damage types, directions, and
    /// filter phrases. The actor-scoped registry resolves pronouns and nouns
    /// relative to whoever is typing.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        let global = ArgumentRegistry::new()
            .with(NumberParser)
            .with(EnumParser::of::<DamageType>())
            .with(EnumParser::of::<Direction>())
            .with(TwoHandedParser)
            .with(WeaponDealingParser::default());
        let actor_scope = ArgumentRegistry::new()
            .with(PreviousObjectParser)
            .with(ThingParser::default());
        Self {
            vocabulary,
            actions: ActionRegistry::new(),
            global,
            actor_scope,
            effort: EffortParser::default(),
            verb_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Registers an action.
    ///
    /// The verb name is filed as a synonym of its own key, and every literal
    /// parameter gets a literal parser in the global registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry rejects the action.
    pub fn register(&mut self, action: ActionDescriptor) -> Result<ActionId, RegistryError> {
        if !self.vocabulary.matches(action.verb_key(), action.name()) {
            let key = action.verb_key().to_owned();
            self.vocabulary.add_synonyms(&key, [action.name()]);
        }
        for spec in action.params() {
            if let ParamType::Literal(key) = spec.ty {
                self.global.ensure_literal(key);
            }
        }
        let id = self.actions.register(action)?;
        self.clear_cache();
        Ok(id)
    }

    /// Adds a parser to the global registry.
    pub fn register_parser(&mut self, parser: impl ArgumentParser + 'static) {
        self.global.register(parser);
    }

    /// The vocabulary.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Mutable vocabulary. Clears the verb cache.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        self.clear_cache();
        &mut self.vocabulary
    }

    /// Registered actions.
    #[must_use]
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    /// Parses a line typed by `actor` against a world snapshot.
    #[must_use]
    pub fn parse(&self, world: &World, actor: EntityId, line: &str) -> ParserResult {
        let mut cursor = WordCursor::from_line(line, &self.vocabulary);
        let Some(verb) = cursor.next().map(str::to_owned) else {
            tracing::debug!("empty line");
            return ParserResult::Failure(Reason::Syntax);
        };

        let candidates = self.candidates(&verb);
        if candidates.is_empty() {
            tracing::debug!(%verb, "unknown verb");
            return ParserResult::Failure(Reason::Syntax);
        }
        cursor.anchor();

        let ctx = ParseContext::new(world, actor, &self.vocabulary);
        let group = ArgumentParserGroup::new()
            .with(&self.global)
            .with(&self.actor_scope);
        let matcher = ActionMatcher::new(&group, &ctx, &self.effort);
        let mut reasons = Vec::new();

        for action in candidates.iter() {
            if !cursor.capacity(action.arity() + 1) {
                tracing::trace!(action = %action.id(), "too few words");
                continue;
            }
            match matcher.attempt(action, &mut cursor, &mut reasons) {
                Ok(Some(command)) => {
                    tracing::debug!(action = %action.id(), %verb, "matched");
                    return ParserResult::Success(command);
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!(action = %action.id(), error = %e, "matcher misuse");
                    reasons.push(Reason::Syntax);
                }
            }
        }

        let reason = if reasons.contains(&Reason::Mismatch) {
            Reason::Mismatch
        } else {
            Reason::Syntax
        };
        tracing::debug!(
            %verb,
            ?reason,
            first = ?reasons.first(),
            tried = reasons.len(),
            "no match"
        );
        ParserResult::Failure(reason)
    }

    /// Actions for a verb word, cached.
    fn candidates(&self, verb: &str) -> Candidates {
        if let Some(hit) = self
            .verb_cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(verb)
        {
            return Arc::clone(hit);
        }
        let found: Candidates = self.actions.for_verb(verb, &self.vocabulary).into();
        self.verb_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(verb.to_owned(), Arc::clone(&found));
        found
    }

    fn clear_cache(&mut self) {
        self.verb_cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
