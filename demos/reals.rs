//! Relations over the real numbers, whose domain can only be described by a predicate.

use binrel::prelude::*;
use std::cmp::Ordering;
use tracing_subscriber::EnvFilter;

/// A number, which might not be real.
#[derive(Clone, Copy, Debug)]
enum Number {
    /// A real number.
    Real(f64),
    /// A complex number a + bi.
    Complex(f64, f64),
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Reals come before complex numbers, which are ordered lexicographically.
impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Real(x), Self::Real(y)) => x.total_cmp(y),
            (Self::Real(_), Self::Complex(..)) => Ordering::Less,
            (Self::Complex(..), Self::Real(_)) => Ordering::Greater,
            (Self::Complex(a, b), Self::Complex(c, d)) => {
                a.total_cmp(c).then(b.total_cmp(d))
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reals = Domain::pred(|x: &Number| matches!(x, Number::Real(_)));
    let mut rel = Relation::with_pairs(reals.clone(), reals, []);

    for (a, b) in [
        (Number::Real(5.0), Number::Real(7.0)),
        (Number::Real(-0.5), Number::Real(0.25)),
        (Number::Complex(1.0, 1.0), Number::Real(2.0)),
        (Number::Real(3.0), Number::Complex(0.0, -1.0)),
    ] {
        match rel.add_pair(a, b) {
            Ok(_) => println!("added ({a:?}, {b:?})"),
            Err(err) => println!("rejected: {err}"),
        }
    }
    println!("{rel:?}");

    // Nothing requiring enumeration of the reals is defined.
    if let Err(err) = rel.is_reflexive() {
        println!("{err}");
    }
    if let Err(err) = rel.complement() {
        println!("{err}");
    }
}
