//! # Generic sets with set algebra
//!
//! The [`SetTrait`] contract describes what every set backend provides: membership, mutation and
//! an early-stopping traversal. The [`algebra`] module builds union, intersection, differences and
//! the Cartesian product on top of that contract alone, so any backend can take part.
//!
//! Three backends ship with the crate:
//!
//! - [`MapSet`](map_set::MapSet), the canonical hash-map backed set.
//! - [`VecSet`](vec_set::VecSet), a linear set for elements that are only [`Eq`].
//! - [`BitSet`](bit_set::BitSet), a dense set of small naturals.
//!
//! ```rust
//! use setalg::prelude::*;
//!
//! let a = MapSet::from([1, 2, 3]);
//! let b = MapSet::from([3, 4, 5]);
//!
//! assert!(intersect(&a, &b).set_eq(&MapSet::from([3])));
//! assert_eq!(union(&a, &b).len(), 5);
//! assert!(sym_diff(&a, &b).set_eq(&MapSet::from([1, 2, 4, 5])));
//! ```
//!
//! ## Iteration order
//!
//! Sets are unordered. Nothing in this crate guarantees the order in which [`SetTrait::range`],
//! [`SetTrait::slice`] or the [`Display`](std::fmt::Display) implementations visit elements, and
//! for [`MapSet`](map_set::MapSet) it differs between runs.
//!
//! ## Concurrency
//!
//! Sets carry no internal locking. Shared mutation needs an external lock, or a
//! [`Clone`] per thread.

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod algebra;
pub mod bit_set;
pub mod map_set;
pub mod prelude;
pub mod utils;
pub mod vec_set;

mod tests;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// The capability every set backend provides.
///
/// A set holds values of type [`Item`](Self::Item) with no duplicates, where presence is decided
/// by [`Eq`] alone. Only [`range`](Self::range) touches the elements in bulk, and every provided
/// method is written in terms of it, so the algebra works across differing backends.
///
/// ## Traversal and mutation
///
/// A set can't be mutated while it's being traversed, and a set can't be added to or removed from
/// itself. Both are ruled out by the borrow checker, as [`range`](Self::range) borrows the set
/// immutably while every mutating method needs `&mut self`.
///
/// ## Complexity
///
/// [`has`](Self::has) should run in expected constant time, which the algebra relies on to stay
/// linear. [`VecSet`](vec_set::VecSet) is the exception: it scans linearly in exchange for asking
/// only [`Eq`] of its elements.
pub trait SetTrait: Clone + Default {
    /// The element type.
    type Item: Eq;

    // -------------------- Basic methods -------------------- //

    /// Whether the value is in the set.
    fn has(&self, value: &Self::Item) -> bool;

    /// Inserts a value. Returns `true` if it was not already present.
    fn add(&mut self, value: Self::Item) -> bool;

    /// Removes a value. Returns `true` if it was present.
    fn remove(&mut self, value: &Self::Item) -> bool;

    /// Set cardinality.
    fn len(&self) -> usize;

    /// Whether the set is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all elements from the set.
    fn clear(&mut self);

    /// Visits every element exactly once, in no particular order, until `visit` returns `false`.
    ///
    /// Returns whether the traversal ran to completion. Each call is an independent traversal.
    fn range<F: FnMut(&Self::Item) -> bool>(&self, visit: F) -> bool;

    // -------------------- Bulk mutation -------------------- //

    /// Adds every element of `other`. Returns how many were not already present.
    fn add_set<S: SetTrait<Item = Self::Item>>(&mut self, other: &S) -> usize
    where
        Self::Item: Clone,
    {
        let mut added = 0;
        other.range(|value| {
            if self.add(value.clone()) {
                added += 1;
            }
            true
        });
        added
    }

    /// Removes every element of `other`. Returns how many were actually present.
    fn remove_set<S: SetTrait<Item = Self::Item>>(&mut self, other: &S) -> usize {
        let mut removed = 0;
        other.range(|value| {
            if self.remove(value) {
                removed += 1;
            }
            true
        });
        removed
    }

    // -------------------- Views -------------------- //

    /// A freshly allocated vector holding every element, in no particular order.
    fn slice(&self) -> Vec<Self::Item>
    where
        Self::Item: Clone,
    {
        let mut result = Vec::with_capacity(self.len());
        self.range(|value| {
            result.push(value.clone());
            true
        });
        result
    }

    /// Renders the set as `{a b c}`. The order of the elements is unspecified.
    fn roster(&self) -> String
    where
        Self::Item: std::fmt::Display,
    {
        utils::Roster(self).to_string()
    }

    // -------------------- Relations -------------------- //

    /// Subset relation ⊆.
    fn is_subset<S: SetTrait<Item = Self::Item>>(&self, other: &S) -> bool {
        self.len() <= other.len() && self.range(|value| other.has(value))
    }

    /// Superset relation ⊇.
    fn is_superset<S: SetTrait<Item = Self::Item>>(&self, other: &S) -> bool {
        other.is_subset(self)
    }

    /// Whether the sets share no element.
    fn is_disjoint<S: SetTrait<Item = Self::Item>>(&self, other: &S) -> bool {
        if self.len() <= other.len() {
            self.range(|value| !other.has(value))
        } else {
            other.range(|value| !self.has(value))
        }
    }

    /// Set equality, across backends.
    fn set_eq<S: SetTrait<Item = Self::Item>>(&self, other: &S) -> bool {
        self.len() == other.len() && self.range(|value| other.has(value))
    }
}
