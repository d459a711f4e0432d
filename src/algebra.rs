//! Set algebra and composition of relations.
//!
//! Every combinator here builds a new, extensional [`Relation`], leaving its operands untouched.
//! The one exception is [`Relation::update`], the in-place union.

use crate::{prelude::*, utils::index_by_first};

impl<A: Element, B: Element> Relation<A, B> {
    /// **Internal method.**
    ///
    /// Checks that both relations have explicit domains and codomains, and returns their unions.
    fn joint_bounds(
        &self,
        other: &Self,
        operation: &'static str,
    ) -> Result<(Domain<A>, Domain<B>)> {
        let domain = self
            .domain()
            .require_set(operation, Side::Domain)?
            .union(other.domain().require_set(operation, Side::Domain)?)
            .cloned()
            .collect();
        let codomain = self
            .codomain()
            .require_set(operation, Side::Codomain)?
            .union(other.codomain().require_set(operation, Side::Codomain)?)
            .cloned()
            .collect();

        Ok((Domain::Set(domain), Domain::Set(codomain)))
    }

    /// **Internal method.**
    ///
    /// Checks that both relations have explicit domains and codomains.
    fn require_bounds(&self, other: &Self, operation: &'static str) -> Result<()> {
        for rel in [self, other] {
            rel.domain().require_set(operation, Side::Domain)?;
            rel.codomain().require_set(operation, Side::Codomain)?;
        }
        Ok(())
    }

    /// **Internal method.**
    ///
    /// Builds a relation over the joint bounds of two relations, with pairs computed from both of
    /// their pair sets.
    fn combine<F>(&self, other: &Self, operation: &'static str, f: F) -> Result<Self>
    where
        F: FnOnce(&BTreeSet<(A, B)>, &BTreeSet<(A, B)>) -> BTreeSet<(A, B)>,
    {
        let (domain, codomain) = self.joint_bounds(other, operation)?;
        let pairs = f(&self.graph(), &other.graph());
        tracing::debug!(
            operation,
            lhs = self.size(),
            rhs = other.size(),
            size = pairs.len(),
            "combined relations"
        );

        Ok(Self::from_parts(domain, codomain, pairs))
    }

    /// Union R ∪ S.
    ///
    /// The domain and codomain of the result are the unions of those of the operands.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if any domain or codomain is a
    /// predicate.
    pub fn union(&self, other: &Self) -> Result<Self> {
        self.combine(other, "union", |fst, snd| fst.union(snd).cloned().collect())
    }

    /// Intersection R ∩ S.
    ///
    /// The domain and codomain of the result are the unions of those of the operands.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if any domain or codomain is a
    /// predicate.
    pub fn intersection(&self, other: &Self) -> Result<Self> {
        self.combine(other, "intersection", |fst, snd| {
            fst.intersection(snd).cloned().collect()
        })
    }

    /// Difference R − S.
    ///
    /// The domain and codomain of the result are the unions of those of the operands.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if any domain or codomain is a
    /// predicate.
    pub fn difference(&self, other: &Self) -> Result<Self> {
        self.combine(other, "difference", |fst, snd| {
            fst.difference(snd).cloned().collect()
        })
    }

    /// Symmetric difference R ∆ S.
    ///
    /// The domain and codomain of the result are the unions of those of the operands.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if any domain or codomain is a
    /// predicate.
    pub fn symmetric_difference(&self, other: &Self) -> Result<Self> {
        self.combine(other, "symmetric_difference", |fst, snd| {
            fst.symmetric_difference(snd).cloned().collect()
        })
    }

    /// In-place union R ∪ S, absorbing the domain, codomain, and pairs of `other`.
    ///
    /// Returns `self` for chaining.
    ///
    /// ## Errors
    ///
    /// - [`RelationError::UnsupportedOperation`] if `self` is functional, or if any domain or
    ///   codomain is a predicate.
    ///
    /// On error, `self` is left unchanged.
    pub fn update(&mut self, other: &Self) -> Result<&mut Self> {
        if self.is_functional() {
            return Err(RelationError::functional("update"));
        }
        let (joint_domain, joint_codomain) = self.joint_bounds(other, "update")?;

        let graph = other.graph();
        let (domain, codomain, pairs) = self.parts_mut("update")?;
        *domain = joint_domain;
        *codomain = joint_codomain;
        pairs.extend(graph.iter().cloned());
        tracing::debug!(size = pairs.len(), "updated relation");

        Ok(self)
    }

    /// Inverse relation R⁻¹ = {(b, a) : (a, b) ∈ R}.
    ///
    /// The domain and codomain swap roles. This never needs to enumerate either of them, so it's
    /// defined for predicates too.
    #[must_use]
    pub fn inverse(&self) -> Relation<B, A> {
        let pairs = self
            .graph()
            .iter()
            .map(|(a, b)| (b.clone(), a.clone()))
            .collect();

        Relation::from_parts(self.codomain().clone(), self.domain().clone(), pairs)
    }

    /// Complement (D × C) − R.
    ///
    /// Pairs outside of D × C are dropped.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain or codomain is a
    /// predicate.
    pub fn complement(&self) -> Result<Self> {
        let domain = self.domain().require_set("complement", Side::Domain)?;
        let codomain = self.codomain().require_set("complement", Side::Codomain)?;

        let graph = self.graph();
        let mut pairs = BTreeSet::new();
        for a in domain {
            for b in codomain {
                let pair = (a.clone(), b.clone());
                if !graph.contains(&pair) {
                    pairs.insert(pair);
                }
            }
        }

        tracing::debug!(size = pairs.len(), "built complement");
        Ok(Self::from_parts(self.domain().clone(), self.codomain().clone(), pairs))
    }

    /// Composition S ∘ R = {(a, c) : (a, b) ∈ R, (b, c) ∈ S}, applying `self` first.
    ///
    /// The result goes from the domain of `self` into the codomain of `other`.
    ///
    /// ## Errors
    ///
    /// - [`RelationError::UnsupportedOperation`] if the codomain of `self` or the domain of
    ///   `other` is a predicate.
    /// - [`RelationError::InvalidConfiguration`] if these two sets differ.
    pub fn compose<C: Element>(&self, other: &Relation<B, C>) -> Result<Relation<A, C>> {
        let mid = self.codomain().require_set("compose", Side::Codomain)?;
        if mid != other.domain().require_set("compose", Side::Domain)? {
            return Err(RelationError::config(
                "composition needs the codomain of the first relation to equal the domain of the \
                second",
            ));
        }

        let snd = other.graph();
        let index = index_by_first(snd.iter());

        let mut pairs = BTreeSet::new();
        for (a, b) in self.graph().iter() {
            if let Some(cs) = index.get(b) {
                pairs.extend(cs.iter().map(|&c| (a.clone(), c.clone())));
            }
        }

        tracing::debug!(
            lhs = self.size(),
            rhs = other.size(),
            size = pairs.len(),
            "composed relations"
        );
        Ok(Relation::from_parts(self.domain().clone(), other.codomain().clone(), pairs))
    }

    // -------------------- Comparisons -------------------- //

    /// Whether R ∩ S = Ø.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if any domain or codomain is a
    /// predicate.
    pub fn is_disjoint(&self, other: &Self) -> Result<bool> {
        self.require_bounds(other, "is_disjoint")?;
        Ok(self.graph().is_disjoint(&other.graph()))
    }

    /// Whether R ⊆ S, comparing pairs only.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if any domain or codomain is a
    /// predicate.
    pub fn is_subset(&self, other: &Self) -> Result<bool> {
        self.require_bounds(other, "is_subset")?;
        Ok(self.graph().is_subset(&other.graph()))
    }

    /// Whether R ⊇ S, comparing pairs only.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if any domain or codomain is a
    /// predicate.
    pub fn is_superset(&self, other: &Self) -> Result<bool> {
        self.require_bounds(other, "is_superset")?;
        Ok(other.graph().is_subset(&self.graph()))
    }
}

/// Tests for set algebra on relations.
#[cfg(test)]
mod algebra {
    use super::*;

    /// Shorthand for a relation over {1, 2, 3} × {1, 2, 3}.
    fn rel<const N: usize>(pairs: [(u8, u8); N]) -> Relation<u8> {
        Relation::with_pairs([1, 2, 3], [1, 2, 3], pairs)
    }

    #[test]
    fn union() {
        let fst = Relation::with_pairs([1, 2], [1], [(1, 1)]);
        let snd = Relation::with_pairs([2, 3], [2], [(2, 2), (1, 1)]);
        let union = fst.union(&snd).unwrap();

        assert_eq!(union.domain(), &Domain::from([1, 2, 3]));
        assert_eq!(union.codomain(), &Domain::from([1, 2]));
        assert_eq!(union.to_string(), "{(1, 1), (2, 2)}");
        assert_eq!(fst.size(), 1, "operands must be left untouched");
    }

    #[test]
    fn intersection_difference() {
        let fst = rel([(1, 1), (1, 2), (2, 3)]);
        let snd = rel([(1, 2), (2, 3), (3, 3)]);

        assert_eq!(fst.intersection(&snd).unwrap(), rel([(1, 2), (2, 3)]));
        assert_eq!(fst.difference(&snd).unwrap(), rel([(1, 1)]));
        assert_eq!(snd.difference(&fst).unwrap(), rel([(3, 3)]));
        assert_eq!(
            fst.symmetric_difference(&snd).unwrap(),
            rel([(1, 1), (3, 3)])
        );
    }

    #[test]
    fn predicate_operands() {
        let fst = rel([(1, 1)]);
        let snd = Relation::with_pairs(Domain::pred(|x: &u8| *x < 10), [1, 2, 3], [(1, 1)]);

        for res in [
            fst.union(&snd),
            fst.intersection(&snd),
            fst.difference(&snd),
            fst.symmetric_difference(&snd),
            snd.complement(),
        ] {
            assert!(
                matches!(res, Err(RelationError::UnsupportedOperation { .. })),
                "predicate domains can't be combined"
            );
        }
    }

    #[test]
    fn predicate_comparisons() {
        let fst = Relation::with_pairs(Domain::pred(|x: &u8| *x < 10), [1], [(1, 1)]);
        let snd = Relation::with_pairs([1], [1], []);

        for res in [
            fst.is_disjoint(&snd),
            snd.is_disjoint(&fst),
            fst.is_subset(&snd),
            snd.is_subset(&fst),
            fst.is_superset(&snd),
        ] {
            assert!(
                matches!(res, Err(RelationError::UnsupportedOperation { .. })),
                "predicate domains can't be compared"
            );
        }

        let thd = Relation::with_pairs([1], Domain::universe(), []);
        assert!(snd.is_subset(&thd).is_err());
    }

    #[test]
    fn update() {
        let mut fst = Relation::with_pairs([1], [1], [(1, 1)]);
        let snd = Relation::with_pairs([2], [2], [(2, 2)]);
        fst.update(&snd).unwrap().add_pair(1, 2).unwrap();

        assert_eq!(fst, Relation::with_pairs([1, 2], [1, 2], [(1, 1), (2, 2), (1, 2)]));
        assert_eq!(snd.size(), 1);
    }

    #[test]
    fn update_functional() {
        let mut fst = Relation::from_function([1, 2], |x: &u8| *x).unwrap();
        let snd = rel([(1, 2)]);
        assert!(matches!(
            fst.update(&snd),
            Err(RelationError::UnsupportedOperation { .. })
        ));

        // A functional relation is still a valid argument.
        let mut snd = snd;
        snd.update(&fst).unwrap();
        assert!(snd.contains(&2, &2));
    }

    #[test]
    fn update_predicate() {
        let mut fst = rel([(1, 1)]);
        let snd = Relation::with_pairs([1], Domain::universe(), [(1, 7)]);
        assert!(fst.update(&snd).is_err());
        assert_eq!(fst, rel([(1, 1)]), "failed update must not mutate");
    }

    #[test]
    fn inverse() {
        let fst = Relation::with_pairs([1, 2], ['a', 'b', 'c'], [(1, 'a'), (2, 'c')]);
        let inv = fst.inverse();
        assert_eq!(inv.domain(), &Domain::from(['a', 'b', 'c']));
        assert!(inv.contains(&'c', &2));
        assert_eq!(inv.inverse(), fst);

        // Predicates swap sides just like sets.
        let pred = Relation::with_pairs(Domain::universe(), [1], [(5, 1)]);
        assert!(pred.inverse().codomain().is_pred());
    }

    #[test]
    fn complement() {
        let fst = Relation::with_pairs([1, 2], [1, 2], [(1, 1), (2, 1)]);
        let comp = fst.complement().unwrap();
        assert_eq!(comp.to_string(), "{(1, 2), (2, 2)}");
        assert_eq!(comp.complement().unwrap(), fst);

        let full = Relation::full([1, 2], ['x']).unwrap();
        assert_eq!(full.size(), 2);
        assert!(full.complement().unwrap().is_empty());
    }

    #[test]
    fn compose() {
        let fst = Relation::with_pairs(
            [1, 2, 3],
            [1, 2, 3, 4],
            [(1, 1), (1, 4), (2, 3), (3, 1), (3, 4)],
        );
        let snd = Relation::with_pairs(
            [1, 2, 3, 4],
            [0, 1, 2],
            [(1, 0), (2, 0), (3, 1), (3, 2), (4, 1)],
        );

        let comp = fst.compose(&snd).unwrap();
        assert_eq!(
            comp,
            Relation::with_pairs(
                [1, 2, 3],
                [0, 1, 2],
                [(1, 0), (1, 1), (2, 1), (2, 2), (3, 0), (3, 1)]
            )
        );
    }

    #[test]
    fn compose_mismatch() {
        let fst = Relation::with_pairs([1], [1, 2], [(1, 2)]);
        let snd = Relation::with_pairs([1, 2, 3], [1], [(2, 1)]);
        assert!(matches!(
            fst.compose(&snd),
            Err(RelationError::InvalidConfiguration { .. })
        ));

        let snd = Relation::with_pairs(Domain::universe(), [1], [(2, 1)]);
        assert!(matches!(
            fst.compose(&snd),
            Err(RelationError::UnsupportedOperation { .. })
        ));
    }

    #[test]
    fn compose_types() {
        let names = Relation::with_pairs([1, 2], ["one", "two"], [(1, "one"), (2, "two")]);
        let lens = Relation::from_function(["one", "two"], |s: &&str| s.len()).unwrap();
        let comp = names.compose(&lens).unwrap();
        assert_eq!(comp.to_string(), "{(1, 3), (2, 3)}");
    }

    #[test]
    fn comparisons() {
        let fst = rel([(1, 1), (1, 2)]);
        let snd = rel([(1, 1)]);
        let thd = rel([(3, 3)]);

        assert_eq!(snd.is_subset(&fst), Ok(true));
        assert_eq!(fst.is_superset(&snd), Ok(true));
        assert_eq!(fst.is_subset(&snd), Ok(false));
        assert_eq!(fst.is_disjoint(&thd), Ok(true));
        assert_eq!(fst.is_disjoint(&snd), Ok(false));
        assert_eq!(Relation::new().is_subset(&thd), Ok(true));
    }
}
