use crate::set::{Construct, Set};
use std::collections::HashSet;
use std::hash::Hash;

/// String-keyed, hash-map-backed set.
pub type StringSet = HashSet<String>;

/// Integer-keyed, hash-map-backed set.
pub type IntSet = HashSet<i64>;

impl<T> Set<T> for HashSet<T>
where
    T: Clone + Eq + Hash,
{
    fn len(&self) -> usize {
        HashSet::<T>::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        HashSet::<T>::contains(self, element)
    }

    fn insert(&mut self, element: T) {
        HashSet::<T>::insert(self, element);
    }

    fn remove(&mut self, element: &T) {
        HashSet::<T>::remove(self, element);
    }

    fn values(&self) -> impl Iterator<Item = T> {
        self.iter().cloned()
    }
}

impl<T> Construct for HashSet<T> {
    fn with_capacity(capacity: usize) -> Self {
        HashSet::with_capacity(capacity)
    }
}
