//! Divisibility among the first few positive integers, and a report on its properties.

use binrel::prelude::*;
use gcd::Gcd;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let set: Vec<u32> = (1..=6).collect();
    let divides = Relation::with_pairs(
        set.clone(),
        set.clone(),
        set.iter()
            .flat_map(|&a| set.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| a.gcd(b) == a),
    );
    println!("a | b: {divides:#}");

    let report = [
        ("reflexive", divides.is_reflexive()?),
        ("irreflexive", divides.is_irreflexive()?),
        ("symmetric", divides.is_symmetric()?),
        ("antisymmetric", divides.is_antisymmetric()?),
        ("asymmetric", divides.is_asymmetric()?),
        ("transitive", divides.is_transitive()?),
        ("connected", divides.is_connected()?),
        ("partial order", divides.is_partial_order()?),
        ("total order", divides.is_total_order()?),
    ];
    for (name, holds) in report {
        println!("{name:>14}: {holds}");
    }

    let coprime = Relation::with_pairs(
        set.clone(),
        set.clone(),
        set.iter()
            .flat_map(|&a| set.iter().map(move |&b| (a, b)))
            .filter(|&(a, b)| a.gcd(b) == 1),
    );
    println!("coprime and divisible: {}", divides.intersection(&coprime)?);
    println!("b | a: {}", divides.inverse());
    println!("a ∤ b: {}", divides.complement()?);

    Ok(())
}
