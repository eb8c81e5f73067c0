//! Compass directions and the exits that use them.

use lantern_foundation::EntityId;
use strum::{Display, EnumIter, IntoStaticStr};

/// A direction of travel.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
    /// Into an enclosed space.
    In,
    /// Out of an enclosed space.
    Out,
}

impl Direction {
    /// The direction that leads back.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::In => Self::Out,
            Self::Out => Self::In,
        }
    }
}

/// A one-way connection from a place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Exit {
    /// Direction this exit leads.
    pub direction: Direction,
    /// Place reached through the exit.
    pub destination: EntityId,
    /// Portal (door, hatch) that gates the exit, if any.
    pub controller: Option<EntityId>,
}

impl Exit {
    /// Creates an ungated exit.
    #[must_use]
    pub const fn new(direction: Direction, destination: EntityId) -> Self {
        Self {
            direction,
            destination,
            controller: None,
        }
    }

    /// Gates the exit behind a portal.
    #[must_use]
    pub const fn through(mut self, portal: EntityId) -> Self {
        self.controller = Some(portal);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn opposites_round_trip() {
        for dir in Direction::iter() {
            assert_eq!(dir.opposite().opposite(), dir);
            assert_ne!(dir.opposite(), dir);
        }
    }

    #[test]
    fn exit_builder() {
        let dest = EntityId::new(2, 1);
        let door = EntityId::new(3, 1);
        let exit = Exit::new(Direction::North, dest).through(door);
        assert_eq!(exit.controller, Some(door));
        assert_eq!(exit.direction.to_string(), "north");
    }
}
