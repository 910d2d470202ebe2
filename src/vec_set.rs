//! Linear sets [`VecSet`] for elements that can only be compared for equality.

use crate::prelude::*;

/// A set stored as an unordered vector of distinct elements.
///
/// Membership is a linear scan, so this only asks [`Eq`] of its elements. Small sets are kept
/// inline.
///
/// ## Invariants
///
/// No two elements of the vector are equal.
///
/// ## Complexity
///
/// [`has`](SetTrait::has), [`add`](SetTrait::add) and [`remove`](SetTrait::remove) take linear
/// time rather than the expected constant time of [`MapSet`]. Algebra over two `VecSet`s is thus
/// quadratic.
#[derive(Clone)]
pub struct VecSet<T>(SmallVec<T>);

// -------------------- Basic traits -------------------- //

impl<T> Default for VecSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Clone> PartialEq for VecSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.set_eq(other)
    }
}

impl<T: Eq + Clone> Eq for VecSet<T> {}

impl<T: Debug> Debug for VecSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Displays a set in roster notation.
impl<T: Eq + Clone + Display> Display for VecSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", Roster(self))
    }
}

impl<T: Eq> Extend<T> for VecSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if !self.0.contains(&value) {
                self.0.push(value);
            }
        }
    }
}

impl<T: Eq> FromIterator<T> for VecSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Eq, const N: usize> From<[T; N]> for VecSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> IntoIterator for VecSet<T> {
    type Item = T;
    type IntoIter = smallvec::IntoIter<[T; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a VecSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -------------------- Basic methods -------------------- //

impl<T> VecSet<T> {
    /// The empty set Ø.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// The set as a slice, in insertion order up to removals.
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// An iterator over the elements of the set.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }
}

// -------------------- SetTrait -------------------- //

impl<T: Eq + Clone> SetTrait for VecSet<T> {
    type Item = T;

    fn has(&self, value: &T) -> bool {
        self.0.contains(value)
    }

    fn add(&mut self, value: T) -> bool {
        if self.has(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    fn remove(&mut self, value: &T) -> bool {
        if let Some(idx) = self.0.iter().position(|el| el == value) {
            self.0.swap_remove(idx);
            true
        } else {
            false
        }
    }

    fn len(&self) -> usize {
        self.0.len()
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn range<F: FnMut(&T) -> bool>(&self, visit: F) -> bool {
        self.0.iter().all(visit)
    }

    fn slice(&self) -> Vec<T> {
        self.0.to_vec()
    }
}
