//! General library tests.

#![cfg(test)]

use crate::prelude::*;
use concat_idents::concat_idents;

/// Creates analogous tests for every backend.
macro_rules! test {
    ($($name: ident),*) => {
        $(
            concat_idents!(fn_name = map_set, $name {
                #[test]
                fn fn_name() {
                    <MapSet<usize>>::$name();
                }
            });

            concat_idents!(fn_name = vec_set, $name {
                #[test]
                fn fn_name() {
                    <VecSet<usize>>::$name();
                }
            });

            concat_idents!(fn_name = bit_set, $name {
                #[test]
                fn fn_name() {
                    BitSet::$name();
                }
            });
        )*
    };
}

/// A multitude of sets of naturals for general-purpose testing. Some lists repeat elements.
const SUITE: &[&[usize]] = &[
    &[],
    &[0],
    &[1, 2, 3],
    &[3, 4, 5],
    &[5, 4, 3, 3, 4],
    &[0, 2, 4, 6, 8, 10],
    &[1, 3, 5, 7, 9],
    &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
    &[100, 64, 63],
];

/// The elements of a set, sorted.
fn sorted<S: SetTrait<Item = usize>>(set: &S) -> Vec<usize> {
    let mut elements = set.slice();
    elements.sort_unstable();
    elements
}

/// The distinct elements of a list, sorted.
fn distinct(list: &[usize]) -> Vec<usize> {
    let mut elements = list.to_vec();
    elements.sort_unstable();
    elements.dedup();
    elements
}

trait Suite: SetTrait<Item = usize> + FromIterator<usize> + Debug {
    /// Our [`SUITE`] as `(&[usize], Self)` pairs.
    fn suite() -> impl Iterator<Item = (&'static [usize], Self)> {
        SUITE
            .iter()
            .map(|&list| (list, list.iter().copied().collect()))
    }

    /// Test that sets hold each distinct element once.
    fn _unique() {
        for (list, set) in Self::suite() {
            assert_eq!(set.len(), distinct(list).len(), "cardinality fail: {set:?}");
            assert_eq!(sorted(&set), distinct(list), "membership fail: {set:?}");
        }
    }

    /// Test [`SetTrait::add`] and [`SetTrait::remove`] against a reference count.
    fn _add_remove() {
        let mut set = Self::default();
        let mut present = [false; 16];
        for (i, value) in [3, 7, 3, 0, 15, 7, 7, 2, 0, 9].into_iter().enumerate() {
            if i % 3 == 2 {
                assert_eq!(set.remove(&value), present[value], "remove fail at {i}");
                present[value] = false;
            } else {
                assert_eq!(set.add(value), !present[value], "add fail at {i}");
                present[value] = true;
            }

            assert_eq!(set.len(), present.iter().filter(|p| **p).count());
            for (value, &p) in present.iter().enumerate() {
                assert_eq!(set.has(&value), p, "membership fail for {value} at {i}");
            }
        }
    }

    /// Test that adding twice is adding once.
    fn _add_idempotent() {
        for (_, set) in Self::suite() {
            for value in [0, 3, 50] {
                let mut once = set.clone();
                once.add(value);
                let mut twice = once.clone();
                assert!(!twice.add(value));
                assert!(once.set_eq(&twice));
            }
        }
    }

    /// Test [`SetTrait::add_set`] and [`SetTrait::remove_set`].
    fn _bulk() {
        for (list_1, set_1) in Self::suite() {
            for (list_2, set_2) in Self::suite() {
                let expected = distinct(list_2)
                    .into_iter()
                    .filter(|v| !list_1.contains(v))
                    .count();

                let mut set = set_1.clone();
                assert_eq!(set.add_set(&set_2), expected);
                assert!(set.set_eq(&union(&set_1, &set_2)));

                let mut set = set_1.clone();
                let common = intersect(&set_1, &set_2).len();
                assert_eq!(set.remove_set(&set_2), common);
                assert!(set.set_eq(&set_diff(&set_1, &set_2)));
            }
        }
    }

    /// Test that bulk operations work across backends.
    fn _bulk_mixed() {
        let mut set = Self::from_iter([1, 2]);
        assert_eq!(set.add_set(&MapSet::from([2usize, 3])), 1);
        assert_eq!(set.add_set(&VecSet::from([3usize, 4])), 1);
        assert_eq!(set.remove_set(&BitSet::from([1, 4, 5])), 2);
        assert_eq!(sorted(&set), [2, 3]);
    }

    /// Test that a clone is independent of the original.
    fn _clone() {
        for (list, set) in Self::suite() {
            let mut clone = set.clone();
            assert!(clone.set_eq(&set));

            clone.add(1000);
            clone.clear();
            assert!(clone.is_empty());
            assert_eq!(sorted(&set), distinct(list));
        }
    }

    /// Test that a set can be rebuilt from its slice.
    fn _slice() {
        for (_, set) in Self::suite() {
            let slice = set.slice();
            assert_eq!(slice.len(), set.len());

            let rebuilt: Self = slice.into_iter().collect();
            assert!(rebuilt.set_eq(&set));
            assert!(set.range(|value| rebuilt.has(value)));
        }
    }

    /// Test that [`SetTrait::range`] visits everything once, and stops early when asked to.
    fn _range() {
        for (list, set) in Self::suite() {
            let mut visited = Vec::new();
            assert!(set.range(|value| {
                visited.push(*value);
                true
            }));
            visited.sort_unstable();
            assert_eq!(visited, distinct(list));

            // Each traversal starts afresh.
            let mut count = 0;
            let finished = set.range(|_| {
                count += 1;
                false
            });
            assert_eq!(count, usize::from(!set.is_empty()));
            assert_eq!(finished, set.is_empty());
        }
    }

    /// Test [`SetTrait::roster`].
    fn _roster() {
        for (_, set) in Self::suite() {
            let str = set.roster();
            assert!(str.starts_with('{') && str.ends_with('}'));

            let mut elements: Vec<usize> = str[1..str.len() - 1]
                .split(' ')
                .filter(|s| !s.is_empty())
                .map(|s| s.parse().unwrap())
                .collect();
            elements.sort_unstable();
            assert_eq!(elements, sorted(&set), "roster fail: {str}");
        }
    }

    /// Test the subset, disjointness and equality relations.
    fn _relations() {
        for (i, (_, set_1)) in Self::suite().enumerate() {
            for (j, (_, set_2)) in Self::suite().enumerate() {
                let inter = intersect(&set_1, &set_2);
                assert!(inter.is_subset(&set_1) && inter.is_subset(&set_2));
                assert!(union(&set_1, &set_2).is_superset(&set_1));
                assert_eq!(
                    set_1.is_disjoint(&set_2),
                    inter.is_empty(),
                    "disjoint fail at {i}, {j}: {set_1:?} | {set_2:?}"
                );
                assert_eq!(
                    set_1.set_eq(&set_2),
                    sorted(&set_1) == sorted(&set_2),
                    "equality fail at {i}, {j}: {set_1:?} | {set_2:?}"
                );
            }
        }
    }

    /// Test that union, intersection and symmetric difference commute.
    fn _commutative() {
        for (i, (_, set_1)) in Self::suite().enumerate() {
            for (j, (_, set_2)) in Self::suite().enumerate() {
                assert_eq!(
                    union(&set_1, &set_2),
                    union(&set_2, &set_1),
                    "union fail at {i}, {j}"
                );
                assert_eq!(
                    intersect(&set_1, &set_2),
                    intersect(&set_2, &set_1),
                    "intersection fail at {i}, {j}"
                );
                assert_eq!(
                    sym_diff(&set_1, &set_2),
                    sym_diff(&set_2, &set_1),
                    "symmetric difference fail at {i}, {j}"
                );
            }
        }
    }

    /// Test the set difference, which does not commute.
    fn _set_diff() {
        let a = Self::from_iter([1, 2, 3]);
        let b = Self::from_iter([3, 4, 5]);
        assert_eq!(set_diff(&a, &b), MapSet::from([1, 2]));
        assert_eq!(set_diff(&b, &a), MapSet::from([4, 5]));

        for (i, (_, set_1)) in Self::suite().enumerate() {
            for (j, (_, set_2)) in Self::suite().enumerate() {
                let diff = set_diff(&set_1, &set_2);
                assert!(diff.is_subset(&set_1) && diff.is_disjoint(&set_2));
                assert_eq!(
                    diff == set_diff(&set_2, &set_1),
                    set_1.set_eq(&set_2),
                    "difference fail at {i}, {j}"
                );
                assert!(sym_diff(&set_1, &set_2).set_eq(&union(&diff, &set_diff(&set_2, &set_1))));
            }
        }
    }

    /// Test the cardinality and orientation of the Cartesian product.
    fn _product() {
        for (i, (_, set_1)) in Self::suite().enumerate() {
            for (j, (_, set_2)) in Self::suite().enumerate() {
                let prod = cartesian_product(&set_1, &set_2);
                assert_eq!(
                    prod.len(),
                    set_1.len() * set_2.len(),
                    "product fail at {i}, {j}"
                );

                let swapped = cartesian_product(&set_2, &set_1);
                assert!(prod.range(|pair| set_1.has(&pair.fst) && set_2.has(&pair.snd)));
                assert!(prod.range(|pair| swapped.has(&pair.swap())));
            }
        }
    }
}

impl Suite for MapSet<usize> {}
impl Suite for VecSet<usize> {}
impl Suite for BitSet {}

test!(
    _unique,
    _add_remove,
    _add_idempotent,
    _bulk,
    _bulk_mixed,
    _clone,
    _slice,
    _range,
    _roster,
    _relations,
    _commutative,
    _set_diff,
    _product
);
