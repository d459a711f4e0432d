//! # Binary relations
//!
//! A [`Relation`] models a binary relation R ⊆ A × B. The relation is either
//! [extensional](https://en.wikipedia.org/wiki/Extensional_definition), storing its pairs
//! explicitly, or functional, computing them on demand from a finite domain and a generating
//! function.
//!
//! Domains and codomains are [`Domain`] values: either explicit finite sets, or membership
//! predicates for collections that can't be enumerated, like the real numbers. Operations that
//! would need to enumerate a predicate-defined side fail with
//! [`RelationError::UnsupportedOperation`] instead of misbehaving.
//!
//! ```rust
//! use binrel::prelude::*;
//!
//! let mut lt = Relation::with_pairs([1, 2, 3], [1, 2, 3], [(1, 2), (2, 3)]);
//! lt.add_pair(1, 3).unwrap();
//! assert!(lt.is_transitive().unwrap());
//! assert!(lt.is_strict_order().unwrap());
//!
//! let squares = Relation::from_function([1, 2, 3, 4], |x: &i32| x * x).unwrap();
//! assert!(squares.contains(&4, &16));
//! assert!(!squares.contains(&5, &25));
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

pub mod algebra;
pub mod builder;
pub mod domain;
pub mod error;
pub mod prelude;
pub mod props;
pub mod relation;
pub mod utils;


use prelude::*;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// Trait bound shorthand for relation elements.
///
/// Elements are stored in [`BTreeSet`], so they must be totally ordered, and get cloned whenever a
/// new relation is derived from an old one.
pub trait Element: Ord + Clone {}
impl<T: Ord + Clone> Element for T {}

/// Builds a `BTreeSet` from anything iterable. Used to normalize the many ways of writing a
/// finite set.
fn set_of<T: Ord, I: IntoIterator<Item = T>>(iter: I) -> BTreeSet<T> {
    iter.into_iter().collect()
}
