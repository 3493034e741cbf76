use std::{
    hash::Hash,
    ops::{BitAnd, BitOr, BitXor, Sub},
};

use super::Set;

impl<T: Eq + Hash + Clone> Set<T> {
    /// Members of `self` that are not in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        self.iter()
            .filter(|value| !other.has(value))
            .cloned()
            .collect()
    }

    /// Members present in both sets.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        let (small, large) = smaller_first(self, other);
        small
            .iter()
            .filter(|value| large.has(value))
            .cloned()
            .collect()
    }

    /// Members present in either set.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let (small, large) = smaller_first(self, other);
        let mut result = large.clone();
        result.extend(small.iter().cloned());
        result
    }

    /// Members present in exactly one of the two sets.
    pub fn symmetric_difference(&self, other: &Set<T>) -> Set<T> {
        let mut result = self.difference(other);
        result.extend(other.iter().filter(|value| !self.has(value)).cloned());
        result
    }
}

impl<T: Eq + Hash> Set<T> {
    pub fn equal(&self, other: &Set<T>) -> bool {
        self.size() == other.size() && self.iter().all(|value| other.has(value))
    }

    pub fn is_subset_of(&self, other: &Set<T>) -> bool {
        if self.size() > other.size() {
            return false;
        }
        self.iter().all(|value| other.has(value))
    }

    pub fn is_superset_of(&self, other: &Set<T>) -> bool {
        if self.size() < other.size() {
            return false;
        }
        other.iter().all(|value| self.has(value))
    }

    pub fn is_disjoint_from(&self, other: &Set<T>) -> bool {
        let (small, large) = smaller_first(self, other);
        !small.iter().any(|value| large.has(value))
    }
}

fn smaller_first<'a, T: Eq + Hash>(a: &'a Set<T>, b: &'a Set<T>) -> (&'a Set<T>, &'a Set<T>) {
    if a.size() <= b.size() {
        (a, b)
    } else {
        (b, a)
    }
}

impl<T: Eq + Hash + Clone> BitOr<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: &Set<T>) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: Eq + Hash + Clone> BitAnd<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: &Set<T>) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: Eq + Hash + Clone> Sub<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: &Set<T>) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: Eq + Hash + Clone> BitXor<&Set<T>> for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: &Set<T>) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}
