use crate::set::{Construct, Set};
use std::fmt::{Debug, Formatter};

/// Sequence-backed set with linear-scan membership.
///
/// Fine for small element counts; every `contains` is O(n), so the algebra
/// routines degrade to O(n * m) over this type.
#[derive(Clone)]
pub struct VecSet<T> {
    items: Vec<T>,
}

impl<T> VecSet<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for VecSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Set<T> for VecSet<T>
where
    T: Clone + PartialEq,
{
    fn len(&self) -> usize {
        self.items.len()
    }

    fn contains(&self, element: &T) -> bool {
        self.items.contains(element)
    }

    fn insert(&mut self, element: T) {
        if !self.items.contains(&element) {
            self.items.push(element);
        }
    }

    fn remove(&mut self, element: &T) {
        if let Some(index) = self.items.iter().position(|item| item == element) {
            self.items.swap_remove(index);
        }
    }

    fn values(&self) -> impl Iterator<Item = T> {
        self.items.iter().cloned()
    }
}

impl<T> Construct for VecSet<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }
}

impl<T> FromIterator<T> for VecSet<T>
where
    T: Clone + PartialEq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<T> Extend<T> for VecSet<T>
where
    T: Clone + PartialEq,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Debug> Debug for VecSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_idempotent() {
        let mut s = VecSet::new();
        s.insert("a");
        s.insert("a");
        s.insert("b");

        assert_eq!(s.len(), 2);
        assert!(s.contains(&"a"));
        assert!(s.contains(&"b"));
    }

    #[test]
    fn test_remove() {
        let mut s: VecSet<i32> = [1, 2, 3].into_iter().collect();

        s.remove(&2);
        assert_eq!(s.len(), 2);
        assert!(!s.contains(&2));

        // Removing again is a no-op.
        s.remove(&2);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_from_iter_collapses_duplicates() {
        let s: VecSet<i32> = [1, 1, 2, 2, 2].into_iter().collect();

        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_values() {
        let s: VecSet<i32> = [3, 1, 2].into_iter().collect();

        let mut out: Vec<i32> = s.values().collect();
        out.sort_unstable();
        assert_eq!(out, vec![1, 2, 3]);
    }
}
