//! Domains and codomains of relations, as [`Domain`].

use crate::prelude::*;

/// A membership test for a collection that can't be enumerated.
pub type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

/// The collection from which the components on one side of a relation are drawn.
///
/// This is either an explicit finite set, or a membership [`Predicate`] standing in for a
/// conceptually infinite collection, such as "every real number". Only explicit sets can be
/// enumerated, so anything requiring enumeration is undefined over predicates.
#[derive(Clone)]
pub enum Domain<T> {
    /// An explicit finite set.
    Set(BTreeSet<T>),
    /// A membership predicate.
    Pred(Predicate<T>),
}

impl<T> Default for Domain<T> {
    fn default() -> Self {
        Self::Set(BTreeSet::new())
    }
}

// -------------------- Conversions -------------------- //

impl<T> From<BTreeSet<T>> for Domain<T> {
    fn from(set: BTreeSet<T>) -> Self {
        Self::Set(set)
    }
}

impl<T: Ord> From<Vec<T>> for Domain<T> {
    fn from(vec: Vec<T>) -> Self {
        Self::Set(set_of(vec))
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Domain<T> {
    fn from(arr: [T; N]) -> Self {
        Self::Set(set_of(arr))
    }
}

impl<T: Ord> FromIterator<T> for Domain<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::Set(set_of(iter))
    }
}

// -------------------- Basic methods -------------------- //

impl<T> Domain<T> {
    /// The empty set Ø.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Set(BTreeSet::new())
    }

    /// The domain holding every element of the type.
    #[must_use]
    pub fn universe() -> Self {
        Self::pred(|_| true)
    }

    /// A domain given by a membership predicate.
    #[must_use]
    pub fn pred<P: Fn(&T) -> bool + 'static>(pred: P) -> Self {
        Self::Pred(Rc::new(pred))
    }

    /// Whether this is an explicit set.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Whether this is a membership predicate.
    #[must_use]
    pub const fn is_pred(&self) -> bool {
        matches!(self, Self::Pred(_))
    }

    /// The explicit set, if this is one.
    #[must_use]
    pub const fn as_set(&self) -> Option<&BTreeSet<T>> {
        match self {
            Self::Set(set) => Some(set),
            Self::Pred(_) => None,
        }
    }

    /// The explicit set, or an [`UnsupportedOperation`](RelationError::UnsupportedOperation) error
    /// naming the operation and side that needed it.
    pub(crate) fn require_set(&self, operation: &'static str, side: Side) -> Result<&BTreeSet<T>> {
        self.as_set().ok_or(RelationError::needs_set(operation, side))
    }

    /// The number of elements in an explicit set.
    #[must_use]
    pub fn card(&self) -> Option<usize> {
        self.as_set().map(BTreeSet::len)
    }
}

impl<T: Ord> Domain<T> {
    /// Membership test x ∈ D.
    ///
    /// This is set containment for an explicit set, and predicate evaluation otherwise.
    #[must_use]
    pub fn accepts(&self, x: &T) -> bool {
        match self {
            Self::Set(set) => set.contains(x),
            Self::Pred(pred) => pred(x),
        }
    }
}

impl<T: Element> Domain<T> {
    /// Union of two explicit sets, or `None` if either side is a predicate.
    #[must_use]
    pub fn union(&self, other: &Self) -> Option<Self> {
        let fst = self.as_set()?;
        let snd = other.as_set()?;
        Some(Self::Set(fst.union(snd).cloned().collect()))
    }
}

// -------------------- Traits -------------------- //

/// Explicit sets are equal when they hold the same elements. Predicates can't be compared by
/// behavior, so they're equal only when they're the very same closure.
impl<T: PartialEq> PartialEq for Domain<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Set(fst), Self::Set(snd)) => fst == snd,
            (Self::Pred(fst), Self::Pred(snd)) => Rc::ptr_eq(fst, snd),
            _ => false,
        }
    }
}

impl<T: Debug> Debug for Domain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Set(set) => f.debug_tuple("Set").field(set).finish(),
            Self::Pred(_) => f.write_str("Pred(..)"),
        }
    }
}

/// Displays an explicit set in roster notation. Predicates display as `{x | P(x)}`.
impl<T: Display> Display for Domain<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Set(set) => {
                f.write_str("{")?;
                let mut iter = set.iter();
                if let Some(fst) = iter.next() {
                    write!(f, "{fst}")?;
                    for el in iter {
                        write!(f, ", {el}")?;
                    }
                }
                f.write_str("}")
            }
            Self::Pred(_) => f.write_str("{x | P(x)}"),
        }
    }
}
