//! Dense sets of naturals [`BitSet`].

use crate::prelude::*;

/// A set of naturals where the n-th bit records whether n is present.
///
/// Memory use is proportional to the largest element ever added, so this only suits small
/// naturals. The bit vector grows on insertion and is never shrunk by removal, which is why
/// equality ignores trailing zeros.
///
/// ## Panics
///
/// [`add`](SetTrait::add) panics when given [`usize::MAX`], whose bit lies past the largest
/// representable length.
#[derive(Clone, Default)]
pub struct BitSet(BitVec);

// -------------------- Basic traits -------------------- //

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for BitSet {}

impl Debug for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Displays a set in roster notation, in increasing order.
impl Display for BitSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", Roster(self))
    }
}

impl Extend<usize> for BitSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<const N: usize> From<[usize; N]> for BitSet {
    fn from(values: [usize; N]) -> Self {
        values.into_iter().collect()
    }
}

// -------------------- Basic methods -------------------- //

impl BitSet {
    /// The empty set Ø.
    #[must_use]
    pub fn new() -> Self {
        Self(BitVec::new())
    }

    /// The empty set Ø, with room for the naturals below `bits`.
    #[must_use]
    pub fn with_capacity(bits: usize) -> Self {
        Self(BitVec::with_capacity(bits))
    }

    /// An iterator over the elements of the set, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter_ones()
    }

    /// Drops the trailing zeros of the bit vector.
    pub fn shrink_to_fit(&mut self) {
        let len = self.0.last_one().map_or(0, |last| last + 1);
        self.0.truncate(len);
        self.0.shrink_to_fit();
    }
}

// -------------------- SetTrait -------------------- //

impl SetTrait for BitSet {
    type Item = usize;

    fn has(&self, value: &usize) -> bool {
        self.0.get(*value).is_some_and(|bit| *bit)
    }

    fn add(&mut self, value: usize) -> bool {
        if self.has(&value) {
            return false;
        }
        if value >= self.0.len() {
            let len = value
                .checked_add(1)
                .unwrap_or_else(|| panic!("cannot store {value} in a bit set"));
            self.0.resize(len, false);
        }
        self.0.set(value, true);
        true
    }

    fn remove(&mut self, value: &usize) -> bool {
        if !self.has(value) {
            return false;
        }
        self.0.set(*value, false);
        true
    }

    fn len(&self) -> usize {
        self.0.count_ones()
    }

    fn is_empty(&self) -> bool {
        self.0.not_any()
    }

    fn clear(&mut self) {
        self.0.clear();
    }

    fn range<F: FnMut(&usize) -> bool>(&self, mut visit: F) -> bool {
        self.0.iter_ones().all(|value| visit(&value))
    }
}
