//! Strongly typed indices for the three integer spaces the manager bridges.
//!
//! Problem nodes, solver variables and vehicles are all plain zero-based
//! integers. Wrapping each in its own newtype stops a node identifier from
//! being passed where a variable index is expected, which is the one mistake
//! the manager exists to prevent.
//!
//! ```
//! use routing_index_core::{NodeIndex, VariableIndex};
//!
//! let node = NodeIndex::new(3);
//! assert_eq!(node.get(), 3);
//! assert_eq!(node.to_string(), "NodeIndex(3)");
//! assert_eq!(usize::from(VariableIndex::from(7)), 7);
//! ```

macro_rules! define_index_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[repr(transparent)]
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $name(usize);

        impl $name {
            /// Wrap a raw zero-based value.
            #[must_use]
            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            /// Return the raw zero-based value.
            #[must_use]
            #[inline]
            pub const fn get(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self(value)
            }
        }

        impl From<$name> for usize {
            fn from(index: $name) -> Self {
                index.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_index_newtype!(
    /// A problem-facing location, `0 <= node < num_nodes`.
    NodeIndex
);

define_index_newtype!(
    /// A solver-facing variable slot, `0 <= index < num_indices`.
    ///
    /// There may be more variable indices than nodes because vehicle
    /// endpoints can occupy slots of their own.
    VariableIndex
);

define_index_newtype!(
    /// A vehicle, `0 <= vehicle < num_vehicles`.
    VehicleIndex
);
