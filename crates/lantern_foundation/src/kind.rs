//! The closed hierarchy of thing kinds.
//!
//! Action parameters are typed by [`Kind`]. A value produced by a general
//! resolver (one that yields any `Thing`) is only accepted for a parameter
//! declared with a narrower kind when the concrete kind descends from it.
//!
//! ```text
//! Thing
//! ├── Place
//! └── WorldObject
//!     ├── Item
//!     │   ├── Weapon
//!     │   └── LightSource
//!     ├── Openable
//!     │   ├── Container
//!     │   └── Portal
//!     └── Creature
//! ```

use strum::{Display, EnumIter, IntoStaticStr};

/// Kind of a thing in the world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    /// Root of the hierarchy: anything a command can name.
    Thing,
    /// A location that holds other things.
    Place,
    /// Any physical object.
    WorldObject,
    /// A portable object.
    Item,
    /// An item that can be used to hit things.
    Weapon,
    /// An item that can give off light.
    LightSource,
    /// An object that can be opened and closed.
    Openable,
    /// An openable object with contents.
    Container,
    /// An openable object that controls an exit (doors, hatches).
    Portal,
    /// A living thing.
    Creature,
}

impl Kind {
    /// Returns the direct parent kind, or `None` for [`Kind::Thing`].
    #[must_use]
    pub const fn parent(self) -> Option<Kind> {
        match self {
            Self::Thing => None,
            Self::Place | Self::WorldObject => Some(Self::Thing),
            Self::Item | Self::Openable | Self::Creature => Some(Self::WorldObject),
            Self::Weapon | Self::LightSource => Some(Self::Item),
            Self::Container | Self::Portal => Some(Self::Openable),
        }
    }

    /// Returns true if `self` is `ancestor` or descends from it.
    #[must_use]
    pub fn is_a(self, ancestor: Kind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Returns true if either kind descends from the other.
    ///
    /// Used to decide whether a resolver producing `self` could possibly
    /// yield a value for a parameter declared as `other`.
    #[must_use]
    pub fn related(self, other: Kind) -> bool {
        self.is_a(other) || other.is_a(self)
    }

    /// Number of steps to the root.
    #[must_use]
    pub fn depth(self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(kind) = current {
            depth += 1;
            current = kind.parent();
        }
        depth
    }
}
