//! World state with immutable snapshots.
//!
//! The `World` is the unified interface to entities, containment, exits, and
//! per-actor memory. It uses persistent data structures, so cloning is O(1)
//! and every mutation returns a new world sharing structure with the old one.
//! A parser can therefore hold a snapshot while the simulation moves on.

use std::sync::Arc;

use lantern_foundation::{EntityId, Error, ErrorContext, Kind, Result};

use crate::direction::{Direction, Exit};
use crate::entity::EntityStore;
use crate::thing::{ThingData, ThingFlags};

/// Immutable world state.
#[derive(Clone, Debug)]
pub struct World {
    entities: Arc<EntityStore>,
    things: im::HashMap<EntityId, ThingData>,
    /// Child -> parent containment.
    parents: im::HashMap<EntityId, EntityId>,
    /// Parent -> children, in insertion order.
    contents: im::HashMap<EntityId, im::Vector<EntityId>>,
    exits: im::HashMap<EntityId, im::Vector<Exit>>,
    /// Actor -> thing most recently named in one of its commands.
    last_referenced: im::HashMap<EntityId, EntityId>,
    tick: u64,
    seed: u64,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            entities: Arc::new(EntityStore::new()),
            things: im::HashMap::new(),
            parents: im::HashMap::new(),
            contents: im::HashMap::new(),
            exits: im::HashMap::new(),
            last_referenced: im::HashMap::new(),
            tick: 0,
            seed,
        }
    }

    /// Current simulation tick.
    #[must_use]
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Seed for deterministic randomness.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a world advanced by `ticks`.
    #[must_use]
    pub fn advance_tick(&self, ticks: u64) -> World {
        let mut world = self.clone();
        world.tick += ticks;
        world
    }

    /// Number of live entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterates over live entities in allocation order.
    pub fn entities(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter()
    }

    // =========================================================================
    // Entities
    // =========================================================================

    /// Spawns a thing with no parent.
    #[must_use]
    pub fn spawn(&self, data: ThingData) -> (World, EntityId) {
        let mut world = self.clone();
        let id = Arc::make_mut(&mut world.entities).spawn();
        world.things.insert(id, data);
        (world, id)
    }

    /// Spawns a thing directly inside `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent does not exist.
    pub fn spawn_in(&self, data: ThingData, parent: EntityId) -> Result<(World, EntityId)> {
        let (world, id) = self.spawn(data);
        let world = world.move_to(id, parent)?;
        Ok((world, id))
    }

    /// Destroys a thing. Its contents drop into its parent, or are detached
    /// if it had none.
    ///
    /// # Errors
    ///
    /// Returns an error if the thing does not exist.
    pub fn destroy(&self, id: EntityId) -> Result<World> {
        self.entities.validate(id)?;
        let mut world = self.detach(id);
        let children: Vec<_> = world.contents(id).collect();
        for child in children {
            world = match self.parent(id) {
                Some(parent) => world.move_to(child, parent)?,
                None => world.detach(child),
            };
        }
        Arc::make_mut(&mut world.entities).destroy(id)?;
        world.things.remove(&id);
        world.contents.remove(&id);
        world.exits.remove(&id);
        world.last_referenced.remove(&id);
        Ok(world)
    }

    /// Returns true if the id refers to a live entity.
    #[must_use]
    pub fn exists(&self, id: EntityId) -> bool {
        self.entities.exists(id)
    }

    /// Gets a thing's data.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is unknown or stale.
    pub fn get(&self, id: EntityId) -> Result<&ThingData> {
        self.entities.validate(id)?;
        self.things
            .get(&id)
            .ok_or_else(|| Error::entity_not_found(id))
    }

    /// Kind of a live thing.
    #[must_use]
    pub fn kind_of(&self, id: EntityId) -> Option<Kind> {
        self.get(id).ok().map(|data| data.kind)
    }

    /// Returns a world with a thing's data changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the thing does not exist.
    pub fn update(&self, id: EntityId, f: impl FnOnce(&mut ThingData)) -> Result<World> {
        self.entities.validate(id)?;
        let mut world = self.clone();
        let data = world
            .things
            .get_mut(&id)
            .ok_or_else(|| Error::entity_not_found(id))?;
        f(data);
        Ok(world)
    }

    /// Returns a world with a flag set or cleared.
    ///
    /// # Errors
    ///
    /// Returns an error if the thing does not exist.
    pub fn set_flag(&self, id: EntityId, flag: ThingFlags, on: bool) -> Result<World> {
        self.update(id, |data| data.flags.set(flag, on))
    }

    /// Returns true if the thing exists and has the flag.
    #[must_use]
    pub fn has_flag(&self, id: EntityId, flag: ThingFlags) -> bool {
        self.get(id).is_ok_and(|data| data.has(flag))
    }

    /// Short description for messages.
    #[must_use]
    pub fn describe(&self, id: EntityId) -> String {
        self.get(id)
            .map_or_else(|_| "something".to_string(), ThingData::describe)
    }

    // =========================================================================
    // Containment
    // =========================================================================

    /// Direct parent of a thing.
    #[must_use]
    pub fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.parents.get(&id).copied()
    }

    /// Direct children of a thing, in the order they arrived.
    pub fn contents(&self, id: EntityId) -> impl Iterator<Item = EntityId> + '_ {
        self.contents.get(&id).into_iter().flatten().copied()
    }

    /// Returns true if `thing` is somewhere inside `ancestor`.
    #[must_use]
    pub fn is_within(&self, thing: EntityId, ancestor: EntityId) -> bool {
        let mut current = self.parent(thing);
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.parent(parent);
        }
        false
    }

    /// Returns true if `thing` is directly in `actor`'s inventory.
    #[must_use]
    pub fn carries(&self, actor: EntityId, thing: EntityId) -> bool {
        self.parent(thing) == Some(actor)
    }

    /// Nearest enclosing place.
    #[must_use]
    pub fn location_of(&self, id: EntityId) -> Option<EntityId> {
        let mut current = self.parent(id);
        while let Some(parent) = current {
            if self.kind_of(parent) == Some(Kind::Place) {
                return Some(parent);
            }
            current = self.parent(parent);
        }
        None
    }

    /// Moves a thing into a new parent.
    ///
    /// # Errors
    ///
    /// Returns an error if either end does not exist or if the move would
    /// put the thing inside itself.
    pub fn move_to(&self, thing: EntityId, into: EntityId) -> Result<World> {
        let context = || ErrorContext::new().with_operation("move_to");
        self.entities
            .validate(thing)
            .map_err(|e| e.with_context(context()))?;
        self.entities
            .validate(into)
            .map_err(|e| e.with_context(context()))?;
        if thing == into || self.is_within(into, thing) {
            return Err(Error::containment_cycle(thing, into).with_context(context()));
        }

        let mut world = self.detach(thing);
        world.parents.insert(thing, into);
        let mut children = world.contents.get(&into).cloned().unwrap_or_default();
        children.push_back(thing);
        world.contents.insert(into, children);
        tracing::trace!(%thing, %into, "moved");
        Ok(world)
    }

    /// Removes a thing from its parent, leaving it nowhere.
    #[must_use]
    pub fn detach(&self, thing: EntityId) -> World {
        let mut world = self.clone();
        if let Some(parent) = world.parents.remove(&thing) {
            if let Some(children) = world.contents.get_mut(&parent) {
                children.retain(|child| *child != thing);
            }
        }
        world
    }

    // =========================================================================
    // Exits
    // =========================================================================

    /// Adds an exit leaving `from`.
    ///
    /// # Errors
    ///
    /// Returns an error if either place is missing or not a place, or if the
    /// controller is not a portal.
    pub fn add_exit(&self, from: EntityId, exit: Exit) -> Result<World> {
        self.expect_kind(from, Kind::Place)?;
        self.expect_kind(exit.destination, Kind::Place)?;
        if let Some(portal) = exit.controller {
            self.expect_kind(portal, Kind::Portal)?;
        }
        let mut world = self.clone();
        let mut exits = world.exits.get(&from).cloned().unwrap_or_default();
        exits.push_back(exit);
        world.exits.insert(from, exits);
        Ok(world)
    }

    /// Exits leaving a place.
    pub fn exits(&self, place: EntityId) -> impl Iterator<Item = &Exit> + '_ {
        self.exits.get(&place).into_iter().flatten()
    }

    /// The exit leaving `place` in `direction`, if any.
    #[must_use]
    pub fn exit_towards(&self, place: EntityId, direction: Direction) -> Option<Exit> {
        self.exits(place)
            .find(|exit| exit.direction == direction)
            .copied()
    }

    /// Returns true if the exit can be walked through right now.
    #[must_use]
    pub fn is_passable(&self, exit: &Exit) -> bool {
        exit.controller
            .is_none_or(|portal| self.has_flag(portal, ThingFlags::OPEN))
    }

    // =========================================================================
    // Perception
    // =========================================================================

    /// Returns true if the thing exists and is not hidden.
    #[must_use]
    pub fn is_perceivable(&self, id: EntityId) -> bool {
        self.get(id)
            .is_ok_and(|data| !data.has(ThingFlags::HIDDEN))
    }

    /// Returns true if a container's contents can be seen.
    #[must_use]
    pub fn shows_contents(&self, id: EntityId) -> bool {
        self.get(id).is_ok_and(|data| {
            data.kind.is_a(Kind::Container)
                && (data.has(ThingFlags::OPEN) || data.has(ThingFlags::TRANSPARENT))
        })
    }

    /// Returns true if there is light to see by in `place`.
    ///
    /// A place is lit if it is lit itself, or if a lit thing lies in it
    /// directly, is held by a creature in it, or sits in a container whose
    /// contents show.
    #[must_use]
    pub fn has_light(&self, place: EntityId) -> bool {
        if self.has_flag(place, ThingFlags::LIT) {
            return true;
        }
        self.contents(place).any(|child| {
            if self.has_flag(child, ThingFlags::LIT) {
                return true;
            }
            let opens_up =
                self.kind_of(child) == Some(Kind::Creature) || self.shows_contents(child);
            opens_up
                && self
                    .contents(child)
                    .any(|inner| self.has_flag(inner, ThingFlags::LIT))
        })
    }

    // =========================================================================
    // Actor memory
    // =========================================================================

    /// Thing the actor most recently referred to.
    #[must_use]
    pub fn last_referenced(&self, actor: EntityId) -> Option<EntityId> {
        self.last_referenced
            .get(&actor)
            .copied()
            .filter(|thing| self.exists(*thing))
    }

    /// Returns a world remembering `thing` as the actor's last reference.
    #[must_use]
    pub fn remember(&self, actor: EntityId, thing: EntityId) -> World {
        let mut world = self.clone();
        world.last_referenced.insert(actor, thing);
        world
    }

    fn expect_kind(&self, id: EntityId, expected: Kind) -> Result<()> {
        let actual = self.get(id)?.kind;
        if actual.is_a(expected) {
            Ok(())
        } else {
            Err(Error::wrong_kind(id, expected, actual))
        }
    }
}
