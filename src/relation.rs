//! Binary relations [`Relation`].

use crate::prelude::*;
use std::{borrow::Cow, collections::btree_set, iter::FusedIterator};

/// A total function generating a relation from its domain.
pub type Generator<A, B> = Rc<dyn Fn(&A) -> B>;

/// How the pairs of a relation are held.
///
/// The variant is fixed when the relation is built.
#[derive(Clone)]
enum Body<A, B> {
    /// Pairs stored explicitly.
    Extensional(BTreeSet<(A, B)>),
    /// Pairs computed as (x, f(x)) for each x in the domain, which is an explicit set.
    Functional(Generator<A, B>),
}

/// A [binary relation](https://en.wikipedia.org/wiki/Binary_relation) R ⊆ A × B.
///
/// A relation is made out of a [`Domain`], a codomain, and the pairs relating them. The pairs are
/// either stored explicitly, in which case they can be added or removed, or computed on demand
/// from a [`Generator`] (see [`Relation::from_function`]).
///
/// ## Invariants
///
/// - A functional relation has an explicit set as its domain, and the image of its generator as
///   its codomain.
/// - Every pair added through [`Relation::add_pair`] belongs to the domain times the codomain.
///   Pairs given at construction are stored as they are.
#[derive(Clone)]
pub struct Relation<A, B = A> {
    /// The collection of first components.
    domain: Domain<A>,
    /// The collection of second components.
    codomain: Domain<B>,
    /// The related pairs.
    body: Body<A, B>,
}

// -------------------- Constructions -------------------- //

impl<A: Element, B: Element> Default for Relation<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects pairs into a relation with empty domain and codomain.
impl<A: Element, B: Element> FromIterator<(A, B)> for Relation<A, B> {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        Self::with_pairs(Domain::empty(), Domain::empty(), iter)
    }
}

impl<A: Element, B: Element> Relation<A, B> {
    /// The empty relation Ø ⊆ Ø × Ø.
    #[must_use]
    pub const fn new() -> Self {
        Self::from_parts(Domain::empty(), Domain::empty(), BTreeSet::new())
    }

    /// A relation holding exactly the given pairs.
    ///
    /// The pairs are taken as they are. Only [`Relation::add_pair`] checks pairs against the
    /// domain and codomain.
    pub fn with_pairs<D, C, I>(domain: D, codomain: C, pairs: I) -> Self
    where
        D: Into<Domain<A>>,
        C: Into<Domain<B>>,
        I: IntoIterator<Item = (A, B)>,
    {
        Self::from_parts(domain.into(), codomain.into(), set_of(pairs))
    }

    /// **Internal method.**
    ///
    /// Builds an extensional relation out of its fields.
    pub(crate) const fn from_parts(
        domain: Domain<A>,
        codomain: Domain<B>,
        pairs: BTreeSet<(A, B)>,
    ) -> Self {
        Self {
            domain,
            codomain,
            body: Body::Extensional(pairs),
        }
    }

    /// The relation {(x, f(x)) : x ∈ D} defined by a total function over an explicit domain.
    ///
    /// The codomain is the image of the function, computed once. Membership tests afterwards
    /// evaluate the function on a single element.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::InvalidConfiguration`] if the domain is a predicate, as the
    /// relation would then have to be computed over an unbounded collection.
    pub fn from_function<D, F>(domain: D, f: F) -> Result<Self>
    where
        D: Into<Domain<A>>,
        F: Fn(&A) -> B + 'static,
    {
        Self::from_generator(domain.into(), Rc::new(f))
    }

    /// **Internal method.**
    ///
    /// See [`Relation::from_function`].
    pub(crate) fn from_generator(domain: Domain<A>, generator: Generator<A, B>) -> Result<Self> {
        let Some(set) = domain.as_set() else {
            return Err(RelationError::config(
                "a functional relation needs an explicit set as its domain",
            ));
        };

        let codomain = Domain::Set(set.iter().map(|x| generator(x)).collect());
        Ok(Self {
            domain,
            codomain,
            body: Body::Functional(generator),
        })
    }

    /// The full relation D × C.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if either side is a predicate.
    pub fn full<D, C>(domain: D, codomain: C) -> Result<Self>
    where
        D: Into<Domain<A>>,
        C: Into<Domain<B>>,
    {
        let (domain, codomain) = (domain.into(), codomain.into());
        let fst = domain.require_set("full", Side::Domain)?;
        let snd = codomain.require_set("full", Side::Codomain)?;
        let pairs = fst
            .iter()
            .flat_map(|a| snd.iter().map(move |b| (a.clone(), b.clone())))
            .collect();
        Ok(Self::from_parts(domain, codomain, pairs))
    }

    /// Starts configuring a relation. See [`RelationBuilder`].
    #[must_use]
    pub fn builder() -> RelationBuilder<A, B> {
        RelationBuilder::new()
    }
}

impl<T: Element> Relation<T, T> {
    /// The identity relation {(x, x) : x ∈ D} over an explicit set.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::UnsupportedOperation`] if the domain is a predicate.
    pub fn identity<D: Into<Domain<T>>>(domain: D) -> Result<Self> {
        let domain = domain.into();
        let pairs = domain
            .require_set("identity", Side::Domain)?
            .iter()
            .map(|x| (x.clone(), x.clone()))
            .collect();

        Ok(Self::from_parts(domain.clone(), domain, pairs))
    }
}

// -------------------- Basic methods -------------------- //

impl<A, B> Relation<A, B> {
    /// The collection of first components.
    #[must_use]
    pub const fn domain(&self) -> &Domain<A> {
        &self.domain
    }

    /// The collection of second components.
    #[must_use]
    pub const fn codomain(&self) -> &Domain<B> {
        &self.codomain
    }

    /// Whether the pairs are computed from a generator rather than stored.
    #[must_use]
    pub const fn is_functional(&self) -> bool {
        matches!(self.body, Body::Functional(_))
    }

    /// The stored pairs, or `None` for a functional relation.
    #[must_use]
    pub const fn pairs(&self) -> Option<&BTreeSet<(A, B)>> {
        match &self.body {
            Body::Extensional(pairs) => Some(pairs),
            Body::Functional(_) => None,
        }
    }

    /// The number of pairs in the relation.
    ///
    /// For a functional relation, this is the size of the domain.
    #[must_use]
    pub fn size(&self) -> usize {
        match &self.body {
            Body::Extensional(pairs) => pairs.len(),
            Body::Functional(_) => self.domain.card().unwrap_or_default(),
        }
    }

    /// Alias for [`Relation::size`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Whether the relation has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterate over the pairs of the relation.
    ///
    /// Each call starts a fresh traversal. Stored pairs are yielded in increasing order, while a
    /// functional relation yields (x, f(x)) following the order of its domain.
    #[must_use]
    pub fn elements(&self) -> Elements<'_, A, B> {
        Elements(match &self.body {
            Body::Extensional(pairs) => Inner::Pairs(pairs.iter()),
            Body::Functional(generator) => Inner::Graph {
                domain: self.domain.as_set().map(BTreeSet::iter),
                generator,
            },
        })
    }
}

impl<A: Element, B: Element> Relation<A, B> {
    /// Membership test (a, b) ∈ R.
    ///
    /// For a functional relation this is a ∈ D and f(a) = b, and never enumerates the domain.
    #[must_use]
    pub fn contains(&self, a: &A, b: &B) -> bool {
        match &self.body {
            Body::Extensional(pairs) => pairs.contains(&(a.clone(), b.clone())),
            Body::Functional(generator) => self.domain.accepts(a) && generator(a) == *b,
        }
    }

    /// The image {b : (a, b) ∈ R} of an element.
    #[must_use]
    pub fn image(&self, a: &A) -> BTreeSet<B> {
        match &self.body {
            Body::Extensional(pairs) => pairs
                .iter()
                .filter(|(x, _)| x == a)
                .map(|(_, y)| y.clone())
                .collect(),
            Body::Functional(generator) => {
                self.domain.accepts(a).then(|| generator(a)).into_iter().collect()
            }
        }
    }

    /// The preimage {a : (a, b) ∈ R} of an element.
    #[must_use]
    pub fn preimage(&self, b: &B) -> BTreeSet<A> {
        self.elements()
            .filter(|(_, y)| y == b)
            .map(|(x, _)| x)
            .collect()
    }

    /// **Internal method.**
    ///
    /// The pairs of the relation as a set. Stored pairs are borrowed, generated ones are built.
    pub(crate) fn graph(&self) -> Cow<'_, BTreeSet<(A, B)>> {
        match &self.body {
            Body::Extensional(pairs) => Cow::Borrowed(pairs),
            Body::Functional(_) => Cow::Owned(self.elements().collect()),
        }
    }

    /// **Internal method.**
    ///
    /// The stored pairs, for an operation that mutates them.
    pub(crate) fn pairs_mut(&mut self, operation: &'static str) -> Result<&mut BTreeSet<(A, B)>> {
        match &mut self.body {
            Body::Extensional(pairs) => Ok(pairs),
            Body::Functional(_) => Err(RelationError::functional(operation)),
        }
    }

    /// **Internal method.**
    ///
    /// Mutable access to every field of an extensional relation at once.
    pub(crate) fn parts_mut(
        &mut self,
        operation: &'static str,
    ) -> Result<(&mut Domain<A>, &mut Domain<B>, &mut BTreeSet<(A, B)>)> {
        match &mut self.body {
            Body::Extensional(pairs) => Ok((&mut self.domain, &mut self.codomain, pairs)),
            Body::Functional(_) => Err(RelationError::functional(operation)),
        }
    }

    // -------------------- Mutation -------------------- //

    /// In-place insertion R ∪ {(a, b)}.
    ///
    /// Returns whether the pair was newly added. Adding a pair twice is a no-op.
    ///
    /// ## Errors
    ///
    /// - [`RelationError::UnsupportedOperation`] if the relation is functional.
    /// - [`RelationError::DomainViolation`] if `a` isn't accepted by the domain, or `b` by the
    ///   codomain. The domain is checked first.
    pub fn add_pair(&mut self, a: A, b: B) -> Result<bool>
    where
        A: Debug,
        B: Debug,
    {
        if self.is_functional() {
            return Err(RelationError::functional("add_pair"));
        }

        let rejected = if !self.domain.accepts(&a) {
            Some((Side::Domain, format!("{a:?}")))
        } else if !self.codomain.accepts(&b) {
            Some((Side::Codomain, format!("{b:?}")))
        } else {
            None
        };

        if let Some((side, value)) = rejected {
            tracing::debug!(%side, %value, "rejected pair outside of relation bounds");
            return Err(RelationError::DomainViolation { side, value });
        }

        let pairs = self.pairs_mut("add_pair")?;
        let added = pairs.insert((a, b));
        tracing::trace!(added, size = pairs.len(), "added pair");
        Ok(added)
    }

    /// In-place removal R − {(a, b)}.
    ///
    /// ## Errors
    ///
    /// - [`RelationError::UnsupportedOperation`] if the relation is functional.
    /// - [`RelationError::NotFound`] if the pair isn't in the relation.
    pub fn remove_pair(&mut self, a: &A, b: &B) -> Result<()>
    where
        A: Debug,
        B: Debug,
    {
        let pairs = self.pairs_mut("remove_pair")?;
        if pairs.remove(&(a.clone(), b.clone())) {
            tracing::trace!(size = pairs.len(), "removed pair");
            Ok(())
        } else {
            tracing::debug!("attempted to remove a missing pair");
            Err(RelationError::NotFound {
                pair: format!("({a:?}, {b:?})"),
            })
        }
    }
}

// -------------------- Iterators -------------------- //

/// The iterator behind [`Elements`].
enum Inner<'a, A, B> {
    /// Walks stored pairs.
    Pairs(btree_set::Iter<'a, (A, B)>),
    /// Walks the domain, applying the generator.
    Graph {
        /// The explicit domain. This is only ever `None` if the functional relation was somehow
        /// built over a predicate.
        domain: Option<btree_set::Iter<'a, A>>,
        /// The generating function.
        generator: &'a Generator<A, B>,
    },
}

/// An iterator over the pairs of a [`Relation`]. See [`Relation::elements`].
pub struct Elements<'a, A, B>(Inner<'a, A, B>);

impl<A: Clone, B: Clone> Iterator for Elements<'_, A, B> {
    type Item = (A, B);

    fn next(&mut self) -> Option<(A, B)> {
        match &mut self.0 {
            Inner::Pairs(iter) => iter.next().cloned(),
            Inner::Graph { domain, generator } => {
                let x = domain.as_mut()?.next()?;
                Some((x.clone(), generator(x)))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = match &self.0 {
            Inner::Pairs(iter) => iter.len(),
            Inner::Graph { domain, .. } => domain.as_ref().map_or(0, ExactSizeIterator::len),
        };
        (len, Some(len))
    }
}

impl<A: Clone, B: Clone> ExactSizeIterator for Elements<'_, A, B> {}
impl<A: Clone, B: Clone> FusedIterator for Elements<'_, A, B> {}

impl<'a, A: Clone, B: Clone> IntoIterator for &'a Relation<A, B> {
    type Item = (A, B);
    type IntoIter = Elements<'a, A, B>;

    fn into_iter(self) -> Elements<'a, A, B> {
        self.elements()
    }
}

// -------------------- Traits -------------------- //

/// Two relations are equal when their domains, codomains, and pairs are. Whether the pairs are
/// stored or generated makes no difference.
impl<A: Element, B: Element> PartialEq for Relation<A, B> {
    fn eq(&self, other: &Self) -> bool {
        self.domain == other.domain
            && self.codomain == other.codomain
            && self.size() == other.size()
            && self.graph() == other.graph()
    }
}

impl<A: Element + Debug, B: Element + Debug> Debug for Relation<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut f = f.debug_struct("Relation");
        f.field("domain", &self.domain).field("codomain", &self.codomain);

        match &self.body {
            Body::Extensional(pairs) => f.field("pairs", pairs),
            Body::Functional(_) => f.field("generator", &self.graph()),
        }
        .finish()
    }
}

/// Displays the pairs of a relation in roster notation.
///
/// The alternate form `{:#}` also displays the domain and codomain, as in
/// `{(1, 2)} ⊆ {1} × {2}`.
impl<A: Element + Display, B: Element + Display> Display for Relation<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("{")?;
        let graph = self.graph();
        let mut iter = graph.iter();
        if let Some((a, b)) = iter.next() {
            write!(f, "({a}, {b})")?;
            for (a, b) in iter {
                write!(f, ", ({a}, {b})")?;
            }
        }
        f.write_str("}")?;

        if f.alternate() {
            write!(f, " ⊆ {} × {}", self.domain, self.codomain)?;
        }
        Ok(())
    }
}

/// Tests for [`Relation`].
#[cfg(test)]
mod relation {
    use super::*;

    /// A stand-in for numbers, some of which aren't real.
    #[derive(Clone, Copy, Debug)]
    enum Number {
        /// A real number.
        Real(f64),
        /// A complex number a + bi.
        Complex(f64, f64),
    }

    impl Number {
        /// Key used for comparisons.
        fn key(self) -> (u8, f64, f64) {
            match self {
                Number::Real(x) => (0, x, 0.0),
                Number::Complex(x, y) => (1, x, y),
            }
        }
    }

    impl PartialEq for Number {
        fn eq(&self, other: &Self) -> bool {
            self.cmp(other).is_eq()
        }
    }

    impl Eq for Number {}

    impl PartialOrd for Number {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Number {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            let (a, b, c) = self.key();
            let (x, y, z) = other.key();
            a.cmp(&x)
                .then(b.total_cmp(&y))
                .then(c.total_cmp(&z))
        }
    }

    /// The domain of real numbers.
    fn reals() -> Domain<Number> {
        Domain::pred(|x| matches!(x, Number::Real(_)))
    }

    #[test]
    fn empty() {
        let rel = Relation::<u8>::new();
        assert!(rel.is_empty());
        assert_eq!(rel.size(), 0);
        assert_eq!(rel.domain(), &Domain::empty());
        assert_eq!(rel.to_string(), "{}");
    }

    #[test]
    fn add_pair_idempotent() {
        let mut rel = Relation::with_pairs([1, 2], [3, 4], []);
        assert_eq!(rel.add_pair(1, 3), Ok(true));
        assert_eq!(rel.add_pair(1, 3), Ok(false));
        assert_eq!(rel.size(), 1);
        assert!(rel.contains(&1, &3));
    }

    #[test]
    fn add_pair_violation() {
        let mut rel = Relation::with_pairs([1, 2], [3, 4], []);
        assert_eq!(
            rel.add_pair(5, 3),
            Err(RelationError::DomainViolation {
                side: Side::Domain,
                value: "5".into()
            })
        );
        assert_eq!(
            rel.add_pair(1, 5),
            Err(RelationError::DomainViolation {
                side: Side::Codomain,
                value: "5".into()
            })
        );
        assert!(rel.is_empty());
    }

    #[test]
    fn add_pair_predicate() {
        let mut rel = Relation::with_pairs(reals(), reals(), []);
        assert!(rel.add_pair(Number::Real(-0.5), Number::Real(2.0)).is_ok());
        assert!(matches!(
            rel.add_pair(Number::Complex(1.0, 1.0), Number::Real(0.0)),
            Err(RelationError::DomainViolation {
                side: Side::Domain,
                ..
            })
        ));
        assert!(matches!(
            rel.add_pair(Number::Real(1.0), Number::Complex(0.0, 2.0)),
            Err(RelationError::DomainViolation {
                side: Side::Codomain,
                ..
            })
        ));
        assert_eq!(rel.size(), 1);
        assert!(rel.contains(&Number::Real(-0.5), &Number::Real(2.0)));
    }

    #[test]
    fn remove_pair() {
        let mut rel = Relation::with_pairs([1, 2], [1, 2], [(1, 2), (2, 1)]);
        assert_eq!(rel.remove_pair(&1, &2), Ok(()));
        assert!(!rel.contains(&1, &2));
        assert_eq!(
            rel.remove_pair(&1, &2),
            Err(RelationError::NotFound {
                pair: "(1, 2)".into()
            })
        );
        assert_eq!(rel.size(), 1);
    }

    #[test]
    fn squares() {
        let rel = Relation::from_function([1, 2, 3, 4], |x: &i32| x * x).unwrap();
        assert!(rel.is_functional());
        assert!(rel.contains(&4, &16));
        assert!(!rel.contains(&5, &25));
        assert!(!rel.contains(&4, &15));
        assert_eq!(rel.size(), 4);
        assert_eq!(rel.codomain(), &Domain::from([1, 4, 9, 16]));
        assert_eq!(rel.image(&3), BTreeSet::from([9]));
        assert!(rel.image(&5).is_empty());
    }

    #[test]
    fn functional_rejects_predicate() {
        let rel = Relation::from_function(Domain::universe(), |x: &u8| *x);
        assert!(matches!(
            rel,
            Err(RelationError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn functional_is_immutable() {
        let mut rel = Relation::from_function([1, 2], |x: &i32| x + 1).unwrap();
        assert!(matches!(
            rel.add_pair(1, 2),
            Err(RelationError::UnsupportedOperation { .. })
        ));
        assert!(matches!(
            rel.remove_pair(&1, &2),
            Err(RelationError::UnsupportedOperation { .. })
        ));
        assert_eq!(rel.size(), 2);
    }

    #[test]
    fn elements_restart() {
        let rel = Relation::from_function([3, 1, 2], |x: &i32| -x).unwrap();
        let fst: Vec<_> = rel.elements().collect();
        let snd: Vec<_> = rel.elements().collect();
        assert_eq!(fst, vec![(1, -1), (2, -2), (3, -3)]);
        assert_eq!(fst, snd);
        assert_eq!(rel.elements().len(), 3);
    }

    #[test]
    fn image_preimage() {
        let rel: Relation<&str> = [("a", "x"), ("a", "y"), ("b", "x")].into_iter().collect();
        assert_eq!(rel.image(&"a"), BTreeSet::from(["x", "y"]));
        assert_eq!(rel.preimage(&"x"), BTreeSet::from(["a", "b"]));
        assert!(rel.preimage(&"z").is_empty());
    }

    #[test]
    fn eq_across_modes() {
        let functional = Relation::from_function([1, 2, 3], |x: &i32| x * 2).unwrap();
        let extensional = Relation::with_pairs([1, 2, 3], [2, 4, 6], [(1, 2), (2, 4), (3, 6)]);
        assert_eq!(functional, extensional);

        let other = Relation::with_pairs([1, 2, 3], [2, 4, 6, 8], [(1, 2), (2, 4), (3, 6)]);
        assert_ne!(functional, other);
    }

    #[test]
    fn identity() {
        let rel = Relation::identity([1, 2]).unwrap();
        assert_eq!(rel.to_string(), "{(1, 1), (2, 2)}");
        assert!(Relation::<u8>::identity(Domain::universe()).is_err());
    }

    #[test]
    fn full() {
        let rel = Relation::full([1, 2], ['x', 'y']).unwrap();
        assert_eq!(rel.to_string(), "{(1, x), (1, y), (2, x), (2, y)}");

        for res in [
            Relation::full(Domain::universe(), ['x']),
            Relation::full([1], Domain::universe()),
        ] {
            assert!(matches!(
                res,
                Err(RelationError::UnsupportedOperation {
                    operation: "full",
                    ..
                })
            ));
        }
    }

    #[test]
    fn display() {
        let rel = Relation::with_pairs([1, 2], [3], [(2, 3), (1, 3)]);
        assert_eq!(rel.to_string(), "{(1, 3), (2, 3)}");
        assert_eq!(format!("{rel:#}"), "{(1, 3), (2, 3)} ⊆ {1, 2} × {3}");
    }

    #[test]
    fn courses() {
        let takes: Relation<&str> = [
            ("Jason Goodfriend", "CS518"),
            ("Deborah Sherman", "CS518"),
            ("Jason Goodfriend", "CS510"),
        ]
        .into_iter()
        .collect();

        assert!(takes.contains(&"Jason Goodfriend", &"CS510"));
        assert!(!takes.contains(&"Deborah Sherman", &"CS510"));
        assert_eq!(takes.size(), 3);
    }
}
