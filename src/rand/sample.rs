use std::hash::Hash;

use ::rand::{seq::IteratorRandom, Rng};

use crate::Set;

impl<T: Eq + Hash> Set<T> {
    /// Picks a member uniformly at random, or `None` if the set is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&T> {
        self.data.keys().choose(rng)
    }

    /// Picks up to `amount` distinct members at random.
    ///
    /// Returns every member when `amount` is at least the size of the set.
    /// The order of the result is not specified.
    pub fn choose_multiple<R: Rng + ?Sized>(&self, rng: &mut R, amount: usize) -> Vec<&T> {
        self.data.keys().choose_multiple(rng, amount)
    }
}
