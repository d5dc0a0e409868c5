use crate::set::{Construct, Set};
use fixedbitset::FixedBitSet;
use num_traits::{FromPrimitive, PrimInt, Unsigned};
use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

/// Bit-vector-backed set of unsigned integers.
///
/// Each element maps to one bit, so membership and mutation are O(1) and the
/// footprint is one bit per value of the occupied range. The backing vector
/// grows on insert. An element that does not fit in a bit index (only
/// possible for values above `usize::MAX`) is a precondition violation and
/// panics.
#[derive(Clone)]
pub struct BitSet<T = usize> {
    bits: FixedBitSet,
    _phantom: PhantomData<T>,
}

impl<T> BitSet<T> {
    pub fn new() -> Self {
        Self {
            bits: FixedBitSet::new(),
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for BitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BitSet<T>
where
    T: PrimInt + Unsigned,
{
    fn bit_index(element: &T) -> usize {
        match element.to_usize() {
            Some(bit) => bit,
            None => panic!("element does not fit in a bit index"),
        }
    }
}

impl<T> Set<T> for BitSet<T>
where
    T: PrimInt + Unsigned + FromPrimitive,
{
    fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    fn contains(&self, element: &T) -> bool {
        self.bits.contains(Self::bit_index(element))
    }

    fn insert(&mut self, element: T) {
        let bit = Self::bit_index(&element);
        if bit >= self.bits.len() {
            self.bits.grow(bit + 1);
        }
        self.bits.insert(bit);
    }

    fn remove(&mut self, element: &T) {
        let bit = Self::bit_index(element);
        if bit < self.bits.len() {
            self.bits.set(bit, false);
        }
    }

    fn values(&self) -> impl Iterator<Item = T> {
        // Every set bit was inserted from a valid T, so the conversion back
        // cannot fail.
        self.bits.ones().filter_map(T::from_usize)
    }
}

impl<T> Construct for BitSet<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
            _phantom: PhantomData,
        }
    }
}

impl<T> FromIterator<T> for BitSet<T>
where
    T: PrimInt + Unsigned + FromPrimitive,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for item in iter {
            set.insert(item);
        }
        set
    }
}

impl<T> Extend<T> for BitSet<T>
where
    T: PrimInt + Unsigned + FromPrimitive,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T> Debug for BitSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BitSet {{ len: {}, range: {} }}",
            self.bits.count_ones(..),
            self.bits.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_contains() {
        let mut s: BitSet<u32> = BitSet::new();
        s.insert(0);
        s.insert(7);
        s.insert(7);
        s.insert(1000);

        assert_eq!(s.len(), 3);
        assert!(s.contains(&0));
        assert!(s.contains(&7));
        assert!(s.contains(&1000));
        assert!(!s.contains(&8));
    }

    #[test]
    fn test_remove() {
        let mut s: BitSet<u16> = [1, 2, 3].into_iter().collect();

        s.remove(&2);
        assert_eq!(s.len(), 2);
        assert!(!s.contains(&2));

        // Absent and out-of-range removals are no-ops.
        s.remove(&2);
        s.remove(&60000);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_values() {
        let s: BitSet<u32> = [5, 1, 9].into_iter().collect();

        let mut out: Vec<u32> = s.values().collect();
        out.sort_unstable();
        assert_eq!(out, vec![1, 5, 9]);
    }

    #[test]
    #[should_panic(expected = "element does not fit in a bit index")]
    fn test_element_out_of_range() {
        let mut s: BitSet<u128> = BitSet::new();
        s.insert(u128::MAX);
    }
}
