//! The canonical hash-map backed set [`MapSet`].

use crate::prelude::*;
use std::collections::{hash_map, HashMap};

/// A set storing its elements as the keys of a [`HashMap`] with no payload.
///
/// Presence of a value is presence of the key, and the cardinality is the number of keys. No other
/// state is kept.
///
/// Iteration order follows the underlying map and is not stable across instances, nor across
/// runs with the default hasher.
pub struct MapSet<T, S = RandomState> {
    /// The elements, as keys mapped to the unit marker.
    map: HashMap<T, (), S>,
}

// -------------------- Basic traits -------------------- //

impl<T, S: Default> Default for MapSet<T, S> {
    fn default() -> Self {
        Self {
            map: HashMap::default(),
        }
    }
}

impl<T: Clone, S: Clone> Clone for MapSet<T, S> {
    fn clone(&self) -> Self {
        Self {
            map: self.map.clone(),
        }
    }
}

impl<T: Eq + Hash, S: BuildHasher> PartialEq for MapSet<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<T: Eq + Hash, S: BuildHasher> Eq for MapSet<T, S> {}

impl<T: Debug, S> Debug for MapSet<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self.map.keys()).finish()
    }
}

/// Displays a set in roster notation, in no particular order.
impl<T, S> Display for MapSet<T, S>
where
    T: Eq + Hash + Clone + Display,
    S: BuildHasher + Clone + Default,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", Roster(self))
    }
}

// -------------------- Construction -------------------- //

impl<T> MapSet<T> {
    /// The empty set Ø.
    #[must_use]
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// The empty set Ø, with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }
}

impl<T, S> MapSet<T, S> {
    /// The empty set Ø, hashing with `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            map: HashMap::with_hasher(hasher),
        }
    }

    /// An iterator over the elements of the set, in no particular order.
    pub fn iter(&self) -> hash_map::Keys<'_, T, ()> {
        self.map.keys()
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> MapSet<T, S> {
    /// Builds a set from the keys of a map.
    ///
    /// Works with anything iterating over borrowed entries, such as `&HashMap` or `&BTreeMap`.
    pub fn from_keys<'a, K, V, I>(map: I) -> Self
    where
        K: Into<T> + Clone + 'a,
        V: 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        map.into_iter().map(|(k, _)| k.clone().into()).collect()
    }

    /// Builds a set from the values of a map. Values shared by several keys collapse into one
    /// element.
    pub fn from_values<'a, K, V, I>(map: I) -> Self
    where
        K: 'a,
        V: Into<T> + Clone + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        map.into_iter().map(|(_, v)| v.clone().into()).collect()
    }

    /// Copies the elements of any other set.
    pub fn from_set<R: SetTrait<Item = T>>(set: &R) -> Self
    where
        T: Clone,
    {
        let mut result = Self::default();
        result.map.reserve(set.len());
        set.range(|value| {
            result.map.insert(value.clone(), ());
            true
        });
        result
    }
}

impl<T: Eq + Hash, S: BuildHasher> Extend<T> for MapSet<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.map.extend(iter.into_iter().map(|value| (value, ())));
    }
}

impl<T: Eq + Hash, S: BuildHasher + Default> FromIterator<T> for MapSet<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for MapSet<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T, S> IntoIterator for MapSet<T, S> {
    type Item = T;
    type IntoIter = hash_map::IntoKeys<T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_keys()
    }
}

impl<'a, T, S> IntoIterator for &'a MapSet<T, S> {
    type Item = &'a T;
    type IntoIter = hash_map::Keys<'a, T, ()>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// -------------------- SetTrait -------------------- //

impl<T, S> SetTrait for MapSet<T, S>
where
    T: Eq + Hash + Clone,
    S: BuildHasher + Clone + Default,
{
    type Item = T;

    fn has(&self, value: &T) -> bool {
        self.map.contains_key(value)
    }

    fn add(&mut self, value: T) -> bool {
        if self.has(&value) {
            return false;
        }
        self.map.insert(value, ());
        true
    }

    fn remove(&mut self, value: &T) -> bool {
        self.map.remove(value).is_some()
    }

    fn len(&self) -> usize {
        self.map.len()
    }

    fn clear(&mut self) {
        self.map.clear();
    }

    fn range<F: FnMut(&T) -> bool>(&self, visit: F) -> bool {
        self.map.keys().all(visit)
    }

    fn slice(&self) -> Vec<T> {
        self.map.keys().cloned().collect()
    }
}

/// Tests for [`MapSet`].
#[cfg(test)]
mod map_set {
    use super::*;
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn add_remove() {
        let mut set = MapSet::new();
        assert!(set.add("a"));
        assert!(!set.add("a"));
        assert!(set.add("b"));
        assert_eq!(set.len(), 2);

        assert!(set.remove(&"a"));
        assert!(!set.remove(&"a"));
        assert!(!set.has(&"a"));
        assert!(set.has(&"b"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn from_array_dedups() {
        let set = MapSet::from([1, 1, 2, 3, 3, 3]);
        assert_eq!(set.len(), 3);
        assert!(set.has(&1) && set.has(&2) && set.has(&3));
    }

    #[test]
    fn from_keys() {
        let map = HashMap::from([("x", 1), ("y", 2), ("z", 1)]);
        let set: MapSet<&str> = MapSet::from_keys(&map);
        assert_eq!(set, MapSet::from(["x", "y", "z"]));

        let tree = BTreeMap::from([(3u8, ()), (4u8, ())]);
        let set: MapSet<u32> = MapSet::from_keys(&tree);
        assert_eq!(set, MapSet::from([3, 4]));
    }

    #[test]
    fn from_values() {
        let map = HashMap::from([("x", 1), ("y", 2), ("z", 1)]);
        let set: MapSet<i32> = MapSet::from_values(&map);
        assert_eq!(set, MapSet::from([1, 2]));
    }

    #[test]
    fn from_set() {
        let bits: BitSet = [2, 5, 7].into_iter().collect();
        let set: MapSet<usize> = MapSet::from_set(&bits);
        assert_eq!(set, MapSet::from([2, 5, 7]));
    }

    #[test]
    fn clone_independent() {
        let mut set = MapSet::from([1, 2]);
        let mut clone = set.clone();
        clone.add(3);
        set.remove(&1);

        assert_eq!(set, MapSet::from([2]));
        assert_eq!(clone, MapSet::from([1, 2, 3]));
    }

    #[test]
    fn custom_hasher() {
        use std::hash::BuildHasherDefault;

        let mut set = MapSet::with_hasher(BuildHasherDefault::<hash_map::DefaultHasher>::default());
        set.add(10);
        set.add(10);
        assert_eq!(set.len(), 1);
        assert_eq!(set.to_string(), "{10}");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", MapSet::from(['q'])), "{'q'}");
    }
}
