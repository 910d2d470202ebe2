//! Crate prelude.

// The actual prelude.
pub use crate::{
    algebra::{cartesian_product, intersect, set_diff, sym_diff, union, Pair},
    bit_set::BitSet,
    map_set::MapSet,
    vec_set::VecSet,
    SetTrait,
};

// Convenient imports within the crate.
pub(crate) use crate::{utils::Roster, SmallVec};
pub(crate) use bitvec::prelude::*;
pub(crate) use derive_more::{Display, From, Into};
pub(crate) use std::{
    collections::hash_map::RandomState,
    fmt::{Debug, Display, Formatter, Result as FmtResult, Write},
    hash::{BuildHasher, Hash},
};
