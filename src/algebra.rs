//! Set algebra over any [`SetTrait`] backend.
//!
//! Every operation only calls contract methods on its operands, never looks into their storage,
//! and returns a freshly allocated [`MapSet`]. Operands are never mutated.
//!
//! For sets `A = {1 2 3}` and `B = {3 4 5}`:
//!
//! | Operation                   | Notation | Result        | Commutative |
//! |-----------------------------|----------|---------------|-------------|
//! | [`intersect`]               | A ∩ B    | `{3}`         | yes         |
//! | [`union`]                   | A ∪ B    | `{1 2 3 4 5}` | yes         |
//! | [`set_diff`]                | A \ B    | `{1 2}`       | no          |
//! | [`sym_diff`]                | A ⊖ B    | `{1 2 4 5}`   | yes         |
//! | [`cartesian_product`]       | A × B    | 9 pairs       | no          |
//!
//! The same operations are available as operators on references to every backend: `&a & &b`,
//! `&a | &b`, `&a - &b` and `&a ^ &b`.

use crate::prelude::*;
use std::ops::{BitAnd, BitOr, BitXor, Sub};
use tracing::trace;

// -------------------- Pairs -------------------- //

/// An ordered pair, the element type of a [`cartesian_product`].
///
/// Two pairs are equal when both of their components are.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display, From, Into)]
#[display(fmt = "({}, {})", fst, snd)]
pub struct Pair<A, B> {
    /// The element from the first set.
    pub fst: A,
    /// The element from the second set.
    pub snd: B,
}

impl<A, B> Pair<A, B> {
    /// Builds a pair.
    pub const fn new(fst: A, snd: B) -> Self {
        Self { fst, snd }
    }

    /// The same pair with its components swapped.
    #[must_use]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.snd, self.fst)
    }
}

// -------------------- Operations -------------------- //

/// Intersection A ∩ B, the elements in both sets.
///
/// Traverses the smaller operand and tests membership in the other.
pub fn intersect<A, B>(a: &A, b: &B) -> MapSet<A::Item>
where
    A: SetTrait,
    B: SetTrait<Item = A::Item>,
    A::Item: Hash + Clone,
{
    let mut result = MapSet::new();
    if a.len() <= b.len() {
        select(a, |value| b.has(value), &mut result);
    } else {
        select(b, |value| a.has(value), &mut result);
    }

    trace!(lhs = a.len(), rhs = b.len(), len = result.len(), "intersect");
    result
}

/// Union A ∪ B, the elements in either set.
pub fn union<A, B>(a: &A, b: &B) -> MapSet<A::Item>
where
    A: SetTrait,
    B: SetTrait<Item = A::Item>,
    A::Item: Hash + Clone,
{
    let mut result = MapSet::from_set(a);
    let added = result.add_set(b);

    trace!(lhs = a.len(), rhs = b.len(), added, "union");
    result
}

/// Set difference A \ B, the elements of the first set not in the second.
pub fn set_diff<A, B>(a: &A, b: &B) -> MapSet<A::Item>
where
    A: SetTrait,
    B: SetTrait<Item = A::Item>,
    A::Item: Hash + Clone,
{
    let mut result = MapSet::new();
    select(a, |value| !b.has(value), &mut result);

    trace!(lhs = a.len(), rhs = b.len(), len = result.len(), "set_diff");
    result
}

/// Symmetric difference A ⊖ B, the elements in exactly one of the sets.
///
/// Computed in one pass over each operand.
pub fn sym_diff<A, B>(a: &A, b: &B) -> MapSet<A::Item>
where
    A: SetTrait,
    B: SetTrait<Item = A::Item>,
    A::Item: Hash + Clone,
{
    let mut result = MapSet::new();
    select(a, |value| !b.has(value), &mut result);
    select(b, |value| !a.has(value), &mut result);

    trace!(lhs = a.len(), rhs = b.len(), len = result.len(), "sym_diff");
    result
}

/// Cartesian product A × B, every [`Pair`] of an element from each set.
///
/// The operands may hold different types. The result has exactly `a.len() * b.len()` elements.
pub fn cartesian_product<A, B>(a: &A, b: &B) -> MapSet<Pair<A::Item, B::Item>>
where
    A: SetTrait,
    B: SetTrait,
    A::Item: Hash + Clone,
    B::Item: Hash + Clone,
{
    let mut result = MapSet::with_capacity(a.len().saturating_mul(b.len()));
    a.range(|fst| {
        b.range(|snd| {
            result.add(Pair::new(fst.clone(), snd.clone()));
            true
        });
        true
    });

    trace!(lhs = a.len(), rhs = b.len(), len = result.len(), "cartesian_product");
    result
}

/// Adds the elements of `set` satisfying `pred` into `result`.
fn select<S, P>(set: &S, mut pred: P, result: &mut MapSet<S::Item>)
where
    S: SetTrait,
    S::Item: Hash + Clone,
    P: FnMut(&S::Item) -> bool,
{
    set.range(|value| {
        if pred(value) {
            result.add(value.clone());
        }
        true
    });
}

// -------------------- Operators -------------------- //

/// Implements the operators `&`, `|`, `-` and `^` between a backend and any other set with the
/// same element type.
macro_rules! set_op_impl {
    ($($imp: ident, $method: ident, $func: ident);*) => {$(
        impl<T, S, R> $imp<&R> for &MapSet<T, S>
        where
            T: Eq + Hash + Clone,
            S: BuildHasher + Clone + Default,
            R: SetTrait<Item = T>,
        {
            type Output = MapSet<T>;

            fn $method(self, rhs: &R) -> MapSet<T> {
                $func(self, rhs)
            }
        }

        impl<T, R> $imp<&R> for &VecSet<T>
        where
            T: Eq + Hash + Clone,
            R: SetTrait<Item = T>,
        {
            type Output = MapSet<T>;

            fn $method(self, rhs: &R) -> MapSet<T> {
                $func(self, rhs)
            }
        }

        impl<R: SetTrait<Item = usize>> $imp<&R> for &BitSet {
            type Output = MapSet<usize>;

            fn $method(self, rhs: &R) -> MapSet<usize> {
                $func(self, rhs)
            }
        }
    )*};
}

set_op_impl! {
    BitAnd, bitand, intersect;
    BitOr, bitor, union;
    Sub, sub, set_diff;
    BitXor, bitxor, sym_diff
}
