//! Errors raised by relation operations.

use derive_more::Display;
use thiserror::Error;

/// Which side of a relation an element was checked against.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Side {
    /// The domain, from which first components are drawn.
    #[display(fmt = "domain")]
    Domain,
    /// The codomain, from which second components are drawn.
    #[display(fmt = "codomain")]
    Codomain,
}

/// Errors that can occur when building, mutating, or combining relations.
///
/// Every error is raised before any state is changed, so the relation involved is left exactly as
/// it was.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RelationError {
    /// A malformed construction request, or a composition whose middle sets don't match.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the request.
        reason: &'static str,
    },

    /// An element offered to [`add_pair`](crate::relation::Relation::add_pair) was rejected by
    /// the domain or codomain.
    #[error("{value} is not an element of the {side}")]
    DomainViolation {
        /// The side whose membership test failed.
        side: Side,
        /// The rejected value, in its `Debug` rendering.
        value: String,
    },

    /// A pair asked to be removed isn't in the relation.
    #[error("pair {pair} not found in relation")]
    NotFound {
        /// The missing pair, in its `Debug` rendering.
        pair: String,
    },

    /// The operation is undefined for this relation.
    #[error("{operation} is unsupported: {reason}")]
    UnsupportedOperation {
        /// The operation that was attempted.
        operation: &'static str,
        /// Why it can't be carried out.
        reason: &'static str,
    },
}

/// Result type for relation operations.
pub type Result<T, E = RelationError> = std::result::Result<T, E>;

impl RelationError {
    /// An [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    pub(crate) const fn config(reason: &'static str) -> Self {
        Self::InvalidConfiguration { reason }
    }

    /// An [`UnsupportedOperation`](Self::UnsupportedOperation) error for an operation needing to
    /// enumerate a predicate-defined side.
    pub(crate) const fn needs_set(operation: &'static str, side: Side) -> Self {
        Self::UnsupportedOperation {
            operation,
            reason: match side {
                Side::Domain => "the domain is a predicate, not an explicit set",
                Side::Codomain => "the codomain is a predicate, not an explicit set",
            },
        }
    }

    /// An [`UnsupportedOperation`](Self::UnsupportedOperation) error for a mutation attempted on a
    /// functional relation.
    pub(crate) const fn functional(operation: &'static str) -> Self {
        Self::UnsupportedOperation {
            operation,
            reason: "the relation is defined by a generator and can't be mutated",
        }
    }
}
