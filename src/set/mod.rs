mod algebra;
mod iter;

use std::{fmt::Debug, hash::Hash};

use hashbrown::HashMap;

pub use iter::{IntoIter, Iter};

/// An unordered collection of unique values.
///
/// Membership is the only information kept: each value maps to an empty
/// marker. Mutators work in place and return the set so calls can be chained,
/// while the algebra operations leave both operands untouched and return a
/// fresh set.
pub struct Set<T: Eq + Hash> {
    pub(crate) data: HashMap<T, ()>,
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Builds a set from `items`, keeping one copy of each distinct value.
    pub fn from_values<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut seen = 0usize;
        let mut set = Self::new();
        for value in items {
            seen += 1;
            set.add(value);
        }
        tracing::trace!(items = seen, distinct = set.size(), "set built");
        set
    }

    pub fn add(&mut self, value: T) -> &mut Self {
        self.data.entry(value).or_insert(());
        self
    }

    pub fn delete(&mut self, value: &T) -> &mut Self {
        self.data.remove(value);
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        tracing::trace!(discarded = self.data.len(), "set cleared");
        self.data.clear();
        self
    }

    pub fn has(&self, value: &T) -> bool {
        self.data.contains_key(value)
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Clone for Set<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<T: Eq + Hash + Debug> Debug for Set<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.data.keys()).finish()
    }
}

impl<T: Eq + Hash> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Eq + Hash> Eq for Set<T> {}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for Set<T> {
    fn from(values: [T; N]) -> Self {
        Self::from_values(values)
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<'a, T: Eq + Hash + Copy + 'a> Extend<&'a T> for Set<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
