//! A relation defined by a function rather than by its pairs.

use binrel::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let squares = Relation::from_function((0..10).collect::<Domain<_>>(), |x: &u32| x * x)?;
    for (x, y) in &squares {
        println!("{x}² = {y}");
    }

    println!("(4, 16) ∈ R: {}", squares.contains(&4, &16));
    println!("(5, 25) ∈ R: {}", squares.contains(&5, &25));
    println!("(12, 144) ∈ R: {}", squares.contains(&12, &144));
    println!("injective: {}", squares.is_injective()?);

    // Functional relations can't be mutated.
    let mut squares = squares;
    if let Err(err) = squares.add_pair(10, 100) {
        println!("{err}");
    }

    Ok(())
}
