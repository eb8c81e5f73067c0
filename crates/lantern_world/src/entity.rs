//! Entity allocation with generational slots.
//!
//! Odd generations mark a live slot, even generations a free one. Freeing a
//! slot bumps its generation so ids issued before the free stop validating.

// Slot counts never approach u32::MAX in practice
#![allow(clippy::cast_possible_truncation)]

use lantern_foundation::{EntityId, Error, Result};

/// Allocates and validates entity ids.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    generations: Vec<u32>,
    free_list: Vec<u32>,
    live: usize,
}

impl EntityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh id, recycling freed slots first.
    pub fn spawn(&mut self) -> EntityId {
        self.live += 1;

        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.generations[index as usize];
            *slot += 1;
            return EntityId::new(index, *slot);
        }

        let index = self.generations.len() as u32;
        self.generations.push(1);
        EntityId::new(index, 1)
    }

    /// Frees an id.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is stale or was never allocated.
    pub fn destroy(&mut self, id: EntityId) -> Result<()> {
        self.validate(id)?;
        self.generations[id.slot()] += 1;
        self.free_list.push(id.index);
        self.live -= 1;
        Ok(())
    }

    /// Returns true if the id refers to a live entity.
    #[must_use]
    pub fn exists(&self, id: EntityId) -> bool {
        self.generations
            .get(id.slot())
            .is_some_and(|&generation| generation == id.generation && generation % 2 == 1)
    }

    /// Checks that an id refers to a live entity.
    ///
    /// # Errors
    ///
    /// Returns `EntityNotFound` for unknown or freed slots and `StaleEntity`
    /// when the slot has been reused since the id was issued.
    pub fn validate(&self, id: EntityId) -> Result<()> {
        let Some(&current) = self.generations.get(id.slot()) else {
            return Err(Error::entity_not_found(id));
        };
        if current != id.generation {
            return Err(Error::stale_entity(id));
        }
        if current % 2 == 0 {
            return Err(Error::entity_not_found(id));
        }
        Ok(())
    }

    /// Number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns true if nothing is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Iterates over live ids in slot order.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.generations
            .iter()
            .zip(0u32..)
            .filter(|(generation, _)| *generation % 2 == 1)
            .map(|(generation, index)| EntityId::new(index, *generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_foundation::ErrorKind;

    #[test]
    fn spawn_allocates_sequential_slots() {
        let mut store = EntityStore::new();
        let a = store.spawn();
        let b = store.spawn();
        assert_eq!((a.index, b.index), (0, 1));
        assert_eq!(a.generation, 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn destroyed_ids_go_stale_after_reuse() {
        let mut store = EntityStore::new();
        let a = store.spawn();
        store.destroy(a).unwrap();
        assert!(!store.exists(a));

        let b = store.spawn();
        assert_eq!(b.index, a.index);
        assert_eq!(b.generation, 3);

        let err = store.validate(a).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::StaleEntity(_)));
    }

    #[test]
    fn double_destroy_fails() {
        let mut store = EntityStore::new();
        let a = store.spawn();
        store.destroy(a).unwrap();
        assert!(store.destroy(a).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn iter_skips_free_slots() {
        let mut store = EntityStore::new();
        let a = store.spawn();
        let b = store.spawn();
        let c = store.spawn();
        store.destroy(b).unwrap();
        let live: Vec<_> = store.iter().collect();
        assert_eq!(live, vec![a, c]);
    }
}
