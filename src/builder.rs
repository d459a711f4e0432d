//! Configurable construction of relations, via [`RelationBuilder`].

use crate::prelude::*;

/// Collects the optional pieces of a relation and validates them together.
///
/// A relation is either extensional, built from a domain, a codomain, and pairs, all of which
/// default to empty, or functional, built from a domain and a [`Generator`].
///
/// ```rust
/// use binrel::prelude::*;
///
/// let rel = Relation::builder()
///     .functional(true)
///     .domain([1, 2, 3])
///     .generator(|x: &i32| x % 2)
///     .build()
///     .unwrap();
/// assert!(rel.contains(&3, &1));
/// ```
pub struct RelationBuilder<A, B = A> {
    /// The domain, defaulting to the empty set.
    domain: Option<Domain<A>>,
    /// The codomain, defaulting to the empty set.
    codomain: Option<Domain<B>>,
    /// Explicit pairs.
    pairs: Option<BTreeSet<(A, B)>>,
    /// The generating function of a functional relation.
    generator: Option<Generator<A, B>>,
    /// Whether to build a functional relation.
    functional: bool,
}

impl<A, B> Default for RelationBuilder<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> RelationBuilder<A, B> {
    /// A builder with nothing set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            domain: None,
            codomain: None,
            pairs: None,
            generator: None,
            functional: false,
        }
    }

    /// Sets the domain.
    #[must_use]
    pub fn domain<D: Into<Domain<A>>>(mut self, domain: D) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Sets the codomain. Only valid for extensional relations.
    #[must_use]
    pub fn codomain<C: Into<Domain<B>>>(mut self, codomain: C) -> Self {
        self.codomain = Some(codomain.into());
        self
    }

    /// Sets the generating function. Only valid for functional relations.
    #[must_use]
    pub fn generator<F: Fn(&A) -> B + 'static>(mut self, f: F) -> Self {
        self.generator = Some(Rc::new(f));
        self
    }

    /// Chooses between a functional and an extensional relation.
    #[must_use]
    pub fn functional(mut self, functional: bool) -> Self {
        self.functional = functional;
        self
    }
}

impl<A: Element, B: Element> RelationBuilder<A, B> {
    /// Sets the pairs. Only valid for extensional relations.
    #[must_use]
    pub fn pairs<I: IntoIterator<Item = (A, B)>>(mut self, pairs: I) -> Self {
        self.pairs = Some(set_of(pairs));
        self
    }

    /// Validates the configuration and builds the relation.
    ///
    /// ## Errors
    ///
    /// Fails with [`RelationError::InvalidConfiguration`] if:
    ///
    /// - a functional relation is missing its domain or generator, has a predicate for a domain,
    ///   or was given a codomain or pairs;
    /// - an extensional relation was given a generator.
    pub fn build(self) -> Result<Relation<A, B>> {
        let result = if self.functional {
            self.build_functional()
        } else if self.generator.is_some() {
            Err(RelationError::config(
                "a generator can only be used for a functional relation",
            ))
        } else {
            Ok(Relation::with_pairs(
                self.domain.unwrap_or_default(),
                self.codomain.unwrap_or_default(),
                self.pairs.unwrap_or_default(),
            ))
        };

        if let Err(err) = &result {
            tracing::debug!(%err, "rejected relation configuration");
        }
        result
    }

    /// **Internal method.**
    ///
    /// Builds a functional relation.
    fn build_functional(self) -> Result<Relation<A, B>> {
        if self.pairs.is_some() {
            return Err(RelationError::config(
                "a functional relation can't be given explicit pairs",
            ));
        }
        if self.codomain.is_some() {
            return Err(RelationError::config(
                "a functional relation's codomain is the image of its generator",
            ));
        }

        let domain = self.domain.ok_or(RelationError::config(
            "a functional relation needs a domain",
        ))?;
        let generator = self.generator.ok_or(RelationError::config(
            "a functional relation needs a generator",
        ))?;
        Relation::from_generator(domain, generator)
    }
}
