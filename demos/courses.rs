//! Students taking courses, and cities lying in states. Both relations are given by listing their
//! pairs, and we test every candidate pair for membership.
//!
//! Run with `RUST_LOG=debug` to see what the library logs.

use binrel::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let students = ["Jason Goodfriend", "Deborah Sherman"];
    let courses = ["CS518", "CS510"];
    let takes = Relation::with_pairs(
        students,
        courses,
        [
            ("Jason Goodfriend", "CS518"),
            ("Deborah Sherman", "CS518"),
            ("Jason Goodfriend", "CS510"),
        ],
    );

    for student in students {
        for course in courses {
            let verb = if takes.contains(&student, &course) {
                "takes"
            } else {
                "doesn't take"
            };
            println!("{student} {verb} {course}");
        }
    }
    println!();

    let located: Relation<&str> = [
        ("Boulder", "Colorado"),
        ("Bangor", "Maine"),
        ("Ann Arbor", "Michigan"),
        ("Middletown", "New Jersey"),
        ("Cupertino", "California"),
        ("Red Bank", "New Jersey"),
    ]
    .into_iter()
    .collect();

    for (city, state) in &located {
        println!("{city} is in {state}");
    }
    println!(
        "Cities in New Jersey: {:?}",
        located.preimage(&"New Jersey")
    );
    println!(
        "Is Boulder in Colorado? {}",
        located.contains(&"Boulder", &"Colorado")
    );
}
