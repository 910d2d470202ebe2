//! Utility types for working with sets.

use crate::prelude::*;

/// Displays any set in roster notation, as `{a b c}`.
///
/// Elements are separated by single spaces and written in whatever order
/// [`SetTrait::range`] visits them, so the output for a set with two or more elements may differ
/// between calls.
#[derive(Clone, Copy)]
pub struct Roster<'a, S>(pub &'a S);

impl<S: SetTrait> Display for Roster<'_, S>
where
    S::Item: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;

        // The traversal stops on the first write error, which we then report.
        let mut res = Ok(());
        let mut first = true;
        self.0.range(|value| {
            res = if first {
                write!(f, "{value}")
            } else {
                write!(f, " {value}")
            };
            first = false;
            res.is_ok()
        });
        res?;

        f.write_char('}')
    }
}

/// Builds a set by adding each value from an iterator. Duplicates collapse into one element.
pub fn collect<S: SetTrait, I: IntoIterator<Item = S::Item>>(iter: I) -> S {
    let mut set = S::default();
    extend(&mut set, iter);
    set
}

/// Adds each value from an iterator to a set.
pub fn extend<S: SetTrait, I: IntoIterator<Item = S::Item>>(set: &mut S, iter: I) {
    for value in iter {
        set.add(value);
    }
}

/// Copies any set into another backend.
pub fn convert<S: SetTrait, T: SetTrait<Item = S::Item>>(set: &S) -> T
where
    S::Item: Clone,
{
    let mut result = T::default();
    result.add_set(set);
    result
}
