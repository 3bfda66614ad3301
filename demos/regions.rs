//! Walkthrough of the region-algebra surface: parse, minimize, divide,
//! complement, and evaluate a region description.
//!
//! Run with: cargo run --example regions

use region_algebra::Term;
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A cell bounded by three surfaces, written with one redundant summand.
    let region = Term::parse("1 2 3+1 2 3'+4")?;
    println!("parsed:      {}", region);

    // Surface 3 is irrelevant; the minimizer removes it.
    let dnf = region.to_dnf()?;
    println!("minimal DNF: {}", dnf);

    let cnf = region.to_cnf()?;
    println!("minimal CNF: {}", cnf);

    // Factor surface 1 out of the DNF.
    let divisor = Term::parse("1")?;
    let (quotient, remainder) = dnf.divide(&divisor);
    match quotient {
        Some(quotient) => println!(
            "factored:    ({}) ({}) + {}",
            divisor, quotient, remainder
        ),
        None => println!("factored:    no summand divides by {}", divisor),
    }

    // The complement describes everything outside the cell.
    let mut outside = dnf.clone();
    outside.complement();
    println!("complement:  {}", outside);

    // The geometry layer supplies surface truth values for a point.
    let mut assignment = HashMap::new();
    assignment.insert(1, true);
    assignment.insert(2, true);
    assignment.insert(3, false);
    assignment.insert(4, false);
    println!("inside:      {}", region.evaluate(&assignment)?);

    // Minimization never changes the truth value at any point.
    assert_eq!(region.evaluate(&assignment)?, dnf.evaluate(&assignment)?);

    Ok(())
}
