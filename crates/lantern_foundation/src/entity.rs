//! Generational identifiers for things, places, and actors.

use std::fmt;

/// Identifier for anything that lives in the world.
///
/// The generation half detects references that outlived their target: when
/// a slot is recycled its generation moves on, so a stale id held by a
/// parsed command no longer compares equal to the live occupant.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct EntityId {
    /// Slot in the entity store.
    pub index: u32,
    /// Generation of the slot at the time the id was issued.
    pub generation: u32,
}

impl EntityId {
    /// Creates an id from its raw parts.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the slot as a `usize` for indexing.
    #[must_use]
    pub const fn slot(self) -> usize {
        self.index as usize
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}v{}", self.index, self.generation)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn equality_requires_both_fields(
            idx1 in any::<u32>(),
            idx2 in any::<u32>(),
            gen1 in any::<u32>(),
            gen2 in any::<u32>()
        ) {
            let e1 = EntityId::new(idx1, gen1);
            let e2 = EntityId::new(idx2, gen2);
            prop_assert_eq!(e1 == e2, idx1 == idx2 && gen1 == gen2);
        }
    }
}
