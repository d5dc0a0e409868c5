use crate::set::{Construct, Set};
use std::collections::BTreeSet;

impl<T> Set<T> for BTreeSet<T>
where
    T: Clone + Ord,
{
    fn len(&self) -> usize {
        BTreeSet::<T>::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        BTreeSet::<T>::contains(self, element)
    }

    fn insert(&mut self, element: T) {
        BTreeSet::<T>::insert(self, element);
    }

    fn remove(&mut self, element: &T) {
        BTreeSet::<T>::remove(self, element);
    }

    fn values(&self) -> impl Iterator<Item = T> {
        self.iter().cloned()
    }
}

impl<T> Construct for BTreeSet<T> {
    // Trees have no meaningful preallocation.
    fn with_capacity(_capacity: usize) -> Self {
        BTreeSet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contract_on_btree() {
        let mut s = BTreeSet::new();
        Set::insert(&mut s, 1u32);
        Set::insert(&mut s, 1u32);
        Set::insert(&mut s, 2u32);

        assert_eq!(Set::<u32>::len(&s), 2);
        assert!(Set::contains(&s, &2));

        Set::remove(&mut s, &2);
        Set::remove(&mut s, &2);
        assert!(!Set::contains(&s, &2));
    }
}
