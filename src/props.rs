//! Structural properties of relations, and the closures with respect to them.
//!
//! Every predicate here requires an explicit domain, and fails with
//! [`RelationError::UnsupportedOperation`] when given a predicate instead. Classifications
//! mentioning the codomain, like [`Relation::is_surjective`], require an explicit codomain too.
//!
//! See [Wikipedia](https://en.wikipedia.org/wiki/Homogeneous_relation#Properties) for the
//! definitions.

use crate::{prelude::*, utils::{index_by_first, BitMatrix}};

// -------------------- Functions -------------------- //

impl<A: Element, B: Element> Relation<A, B> {
    /// Whether every element of the domain relates to exactly one element.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_function(&self) -> Result<bool> {
        let domain = self.domain().require_set("is_function", Side::Domain)?;
        let graph = self.graph();
        let index = index_by_first(graph.iter());

        Ok(domain
            .iter()
            .all(|a| index.get(a).is_some_and(|bs| bs.len() == 1)))
    }

    /// Whether no two pairs share their second component.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_injective(&self) -> Result<bool> {
        self.domain().require_set("is_injective", Side::Domain)?;
        let mut seen = BTreeSet::new();
        Ok(self.graph().iter().all(|(_, b)| seen.insert(b)))
    }

    /// Whether every element of the codomain is related to.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain or codomain is a
    /// predicate.
    pub fn is_surjective(&self) -> Result<bool> {
        self.domain().require_set("is_surjective", Side::Domain)?;
        let codomain = self.codomain().require_set("is_surjective", Side::Codomain)?;

        let graph = self.graph();
        let image: BTreeSet<_> = graph.iter().map(|(_, b)| b).collect();
        Ok(codomain.iter().all(|b| image.contains(b)))
    }

    /// Whether the relation is a function that's both injective and surjective.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain or codomain is a
    /// predicate.
    pub fn is_bijective(&self) -> Result<bool> {
        Ok(self.is_function()? && self.is_injective()? && self.is_surjective()?)
    }
}

// -------------------- Homogeneous relations -------------------- //

impl<T: Element> Relation<T, T> {
    /// Whether (x, x) ∈ R for every x in the domain.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_reflexive(&self) -> Result<bool> {
        let domain = self.domain().require_set("is_reflexive", Side::Domain)?;
        Ok(domain.iter().all(|x| self.contains(x, x)))
    }

    /// Whether (x, x) ∉ R for every x in the domain.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_irreflexive(&self) -> Result<bool> {
        let domain = self.domain().require_set("is_irreflexive", Side::Domain)?;
        Ok(domain.iter().all(|x| !self.contains(x, x)))
    }

    /// Whether (a, b) ∈ R implies (b, a) ∈ R.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_symmetric(&self) -> Result<bool> {
        self.domain().require_set("is_symmetric", Side::Domain)?;
        Ok(self.graph().iter().all(|(a, b)| self.contains(b, a)))
    }

    /// Whether (a, b) ∈ R and a ≠ b imply (b, a) ∉ R.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_antisymmetric(&self) -> Result<bool> {
        self.domain().require_set("is_antisymmetric", Side::Domain)?;
        Ok(self
            .graph()
            .iter()
            .all(|(a, b)| a == b || !self.contains(b, a)))
    }

    /// Whether (a, b) ∈ R implies (b, a) ∉ R. In particular, no pair (a, a) can be in R.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_asymmetric(&self) -> Result<bool> {
        self.domain().require_set("is_asymmetric", Side::Domain)?;
        Ok(self.graph().iter().all(|(a, b)| !self.contains(b, a)))
    }

    /// Whether (a, b) ∈ R and (b, c) ∈ R imply (a, c) ∈ R.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_transitive(&self) -> Result<bool> {
        self.domain().require_set("is_transitive", Side::Domain)?;
        let graph = self.graph();
        let index = index_by_first(graph.iter());

        Ok(graph.iter().all(|(a, b)| {
            index
                .get(b)
                .into_iter()
                .flatten()
                .all(|&c| graph.contains(&(a.clone(), c.clone())))
        }))
    }

    /// Whether (a, b) ∈ R or (b, a) ∈ R for any two distinct a, b in the domain.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_connected(&self) -> Result<bool> {
        let domain = self.domain().require_set("is_connected", Side::Domain)?;
        Ok(domain.iter().enumerate().all(|(i, a)| {
            domain
                .iter()
                .skip(i + 1)
                .all(|b| self.contains(a, b) || self.contains(b, a))
        }))
    }

    /// Whether (a, b) ∈ R or (b, a) ∈ R for any a, b in the domain, including a = b.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_strongly_connected(&self) -> Result<bool> {
        let domain = self
            .domain()
            .require_set("is_strongly_connected", Side::Domain)?;
        Ok(domain.iter().enumerate().all(|(i, a)| {
            domain
                .iter()
                .skip(i)
                .all(|b| self.contains(a, b) || self.contains(b, a))
        }))
    }

    /// Whether the relation is reflexive, symmetric, and transitive.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_equivalence(&self) -> Result<bool> {
        Ok(self.is_reflexive()? && self.is_symmetric()? && self.is_transitive()?)
    }

    /// Whether the relation is reflexive, antisymmetric, and transitive.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_partial_order(&self) -> Result<bool> {
        Ok(self.is_reflexive()? && self.is_antisymmetric()? && self.is_transitive()?)
    }

    /// Whether the relation is a strongly connected partial order.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_total_order(&self) -> Result<bool> {
        Ok(self.is_partial_order()? && self.is_strongly_connected()?)
    }

    /// Whether the relation is irreflexive and transitive, which makes it asymmetric.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn is_strict_order(&self) -> Result<bool> {
        Ok(self.is_irreflexive()? && self.is_transitive()?)
    }

    // -------------------- Closures -------------------- //

    /// The smallest reflexive relation containing R.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn reflexive_closure(&self) -> Result<Self> {
        let domain = self
            .domain()
            .require_set("reflexive_closure", Side::Domain)?;

        let mut pairs = self.graph().into_owned();
        pairs.extend(domain.iter().map(|x| (x.clone(), x.clone())));
        Ok(Self::from_parts(self.domain().clone(), self.codomain().clone(), pairs))
    }

    /// The smallest symmetric relation containing R.
    #[must_use]
    pub fn symmetric_closure(&self) -> Self {
        let graph = self.graph();
        let pairs = graph
            .iter()
            .flat_map(|(a, b)| [(a.clone(), b.clone()), (b.clone(), a.clone())])
            .collect();

        Self::from_parts(self.domain().clone(), self.codomain().clone(), pairs)
    }

    /// The smallest transitive relation containing R.
    ///
    /// The elements appearing in R are indexed, and the closure is computed on their adjacency
    /// [`BitMatrix`].
    #[must_use]
    pub fn transitive_closure(&self) -> Self {
        let graph = self.graph();

        let mut indices = BTreeMap::new();
        let mut elements = Vec::new();
        let mut edges = Vec::with_capacity(graph.len());
        for (a, b) in graph.iter() {
            let mut index = |x| {
                let i = btree_index(&mut indices, x);
                if i == elements.len() {
                    elements.push(x);
                }
                i
            };
            edges.push((index(a), index(b)));
        }

        let mut matrix = BitMatrix::new(elements.len());
        for (i, j) in edges {
            matrix.set(i, j);
        }
        matrix.close_transitive();

        let pairs: BTreeSet<_> = matrix
            .iter_ones()
            .map(|(i, j)| (elements[i].clone(), elements[j].clone()))
            .collect();
        tracing::debug!(
            size = graph.len(),
            closure = pairs.len(),
            "built transitive closure"
        );

        Self::from_parts(self.domain().clone(), self.codomain().clone(), pairs)
    }
}
