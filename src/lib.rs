//! Functions for working with finite sets.
//!
//! The four algebra routines — [`union`], [`intersection`], [`difference`],
//! and [`symmetric_difference`] — work over any collection implementing
//! [`Set`] and [`Construct`], and the concrete type of the result is always
//! the concrete type of the inputs. Both operands of a routine must be the
//! same concrete type; mixing two different implementations is rejected at
//! compile time, as is passing an element of the wrong type to a set.
//!
//! Inputs are never mutated and results share no storage with them. No
//! implementation guarantees an iteration order.
//!
//! ```
//! use setops::{intersection, union, Set, StringSet};
//!
//! let s: StringSet = ["a", "b", "c"].map(String::from).into_iter().collect();
//! let t: StringSet = ["b", "c", "d"].map(String::from).into_iter().collect();
//!
//! assert_eq!(Set::<String>::len(&union(&s, &t)), 4);
//! assert_eq!(Set::<String>::len(&intersection(&s, &t)), 2);
//! ```
//!
//! Operands of different concrete types do not unify:
//!
//! ```compile_fail
//! use setops::{union, IntSet, StringSet};
//!
//! let s = StringSet::from(["a".to_string()]);
//! let t = IntSet::from([1]);
//! let u = union(&s, &t);
//! ```

pub mod algebra;
pub mod set;

pub use algebra::{difference, intersection, symmetric_difference, union};
pub use set::bit_set::BitSet;
pub use set::hash_set::{IntSet, StringSet};
pub use set::vec_set::VecSet;
pub use set::{Construct, Set};
