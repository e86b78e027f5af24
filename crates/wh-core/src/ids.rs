//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Ids are allocated sequentially from
//! zero; they are identities, never positions.  A registry that removes
//! entries must be searched by id, not indexed by it.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The first id handed out by a fresh counter.
            pub const FIRST: $name = $name(0);

            /// The id allocated immediately after `self`.
            #[inline(always)]
            pub fn next(self) -> $name {
                $name(self.0 + 1)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identity of an order.  Allocated monotonically by the warehouse.
    pub struct OrderId(u32);
}

typed_id! {
    /// Identity of a customer, in registration order.
    pub struct CustomerId(u32);
}

typed_id! {
    /// Identity of a volunteer, in registration order.
    pub struct VolunteerId(u32);
}

/// Monotonic allocator for one id kind.
///
/// Holds the *next* id to hand out; `allocate` returns it and advances.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdCounter<T> {
    next: T,
}

macro_rules! id_counter {
    ($name:ident) => {
        impl Default for IdCounter<$name> {
            fn default() -> Self {
                Self { next: $name::FIRST }
            }
        }

        impl IdCounter<$name> {
            /// A counter whose next allocation is `next`.
            pub fn starting_at(next: $name) -> Self {
                Self { next }
            }

            /// Return the next id and advance the counter.
            pub fn allocate(&mut self) -> $name {
                let id = self.next;
                self.next = id.next();
                id
            }

            /// The id the next `allocate` call will return.
            pub fn peek(&self) -> $name {
                self.next
            }

            /// Number of ids handed out so far.
            pub fn issued(&self) -> u32 {
                self.next.0
            }
        }
    };
}

id_counter!(OrderId);
id_counter!(CustomerId);
id_counter!(VolunteerId);
