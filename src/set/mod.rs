pub mod bit_set;
pub mod btree_set;
pub mod hash_set;
pub mod vec_set;

/// A finite collection of elements that can take part in set algebra.
///
/// Elements compare by the underlying type's own equality. Iteration order
/// is unspecified and may differ between calls and between implementations.
pub trait Set<T> {
    /// Number of elements currently in the set.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `element` is present.
    fn contains(&self, element: &T) -> bool;

    /// Adds `element` if absent. Inserting a present element is a no-op.
    fn insert(&mut self, element: T);

    /// Removes `element` if present. Removing an absent element is a no-op.
    fn remove(&mut self, element: &T);

    /// A lazy, single-pass iterator over every element, in unspecified
    /// order. Each call produces a fresh iterator reflecting the set at call
    /// time. Yields owned elements, so consumers never alias the backing
    /// storage. The shared borrow of `self` rules out mutation while the
    /// iterator is live.
    fn values(&self) -> impl Iterator<Item = T>;
}

/// Construction of a new, empty set of a known concrete type.
///
/// The algebra routines use this to build their result, so `union` of two
/// `HashSet<String>` is a `HashSet<String>` and not some other container.
/// `capacity` is a preallocation hint; implementations without meaningful
/// preallocation ignore it.
pub trait Construct: Sized {
    fn with_capacity(capacity: usize) -> Self;
}
