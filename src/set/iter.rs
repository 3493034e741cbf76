use std::{hash::Hash, iter::FusedIterator};

use hashbrown::hash_map;
use smallvec::SmallVec;

use super::Set;

/// Borrowing iterator over the members of a [`Set`], in no particular order.
pub struct Iter<'a, T> {
    inner: hash_map::Keys<'a, T, ()>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over the members of a [`Set`], in no particular order.
pub struct IntoIter<T> {
    inner: hash_map::IntoKeys<T, ()>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T: Eq + Hash> Set<T> {
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.keys(),
        }
    }

    /// Calls `visit` once per member, in no particular order.
    ///
    /// The set stays borrowed for the whole traversal, so `visit` cannot
    /// mutate it. Use [`Set::each_snapshot`] for that.
    pub fn each<F: FnMut(&T)>(&self, mut visit: F) {
        for value in self.data.keys() {
            visit(value);
        }
    }

    /// Copies every member into a list, in no particular order.
    ///
    /// The order may differ between calls; sort the result if it matters.
    pub fn values(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.keys().cloned().collect()
    }
}

impl<T: Eq + Hash + Clone> Set<T> {
    /// Visits the members present when the call starts, giving `visit`
    /// mutable access to the set.
    ///
    /// Traversal runs over a snapshot taken up front. Values added by `visit`
    /// are not visited and values it deletes are still visited once, since
    /// the snapshot is not affected by either.
    pub fn each_snapshot<F: FnMut(&mut Self, &T)>(&mut self, mut visit: F) {
        let snapshot: SmallVec<[T; 16]> = self.data.keys().cloned().collect();
        tracing::trace!(members = snapshot.len(), "snapshot traversal");
        for value in &snapshot {
            visit(&mut *self, value);
        }
    }
}

impl<T: Eq + Hash> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.data.into_keys(),
        }
    }
}

impl<'a, T: Eq + Hash> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
