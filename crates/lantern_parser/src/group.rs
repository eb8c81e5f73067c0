//! Parser registries and their priority composition.

use std::sync::Arc;

use crate::argument::{ArgumentParser, LiteralParser};
use crate::value::ParamType;

/// An ordered collection of argument parsers.
#[derive(Clone, Debug, Default)]
pub struct ArgumentRegistry {
    parsers: Vec<Arc<dyn ArgumentParser>>,
}

impl ArgumentRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parser.
    pub fn register(&mut self, parser: impl ArgumentParser + 'static) {
        self.parsers.push(Arc::new(parser));
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with(mut self, parser: impl ArgumentParser + 'static) -> Self {
        self.register(parser);
        self
    }

    /// Registers a literal parser for `key` unless one is already present.
    pub fn ensure_literal(&mut self, key: &'static str) {
        let wanted = ParamType::Literal(key);
        if !self.parsers.iter().any(|p| p.produces() == wanted) {
            self.register(LiteralParser::new(key));
        }
    }

    /// Parsers worth trying for a parameter of type `ty`, in registration
    /// order.
    pub fn applicable(&self, ty: ParamType) -> impl Iterator<Item = &Arc<dyn ArgumentParser>> {
        self.parsers.iter().filter(move |p| ty.overlaps(p.produces()))
    }

    /// Number of parsers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    /// Returns true if the registry holds no parsers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

/// Registries consulted in priority order.
///
/// Every applicable parser of the first registry comes before any parser of
/// the second.
#[derive(Clone, Debug, Default)]
pub struct ArgumentParserGroup<'r> {
    registries: Vec<&'r ArgumentRegistry>,
}

impl<'r> ArgumentParserGroup<'r> {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a registry at the lowest priority so far.
    #[must_use]
    pub fn with(mut self, registry: &'r ArgumentRegistry) -> Self {
        self.registries.push(registry);
        self
    }

    /// Parsers for `ty`, registry by registry.
    pub fn parsers_for(
        &self,
        ty: ParamType,
    ) -> impl Iterator<Item = &'r Arc<dyn ArgumentParser>> + '_ {
        self.registries
            .iter()
            .copied()
            .flat_map(move |registry| registry.applicable(ty))
    }
}
