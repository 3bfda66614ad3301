//! Integration tests for DNF/CNF reduction and implication

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use region_algebra::{Literal, Term};
use std::collections::HashMap;

/// Surfaces used by the random terms; small enough that every minimization
/// stays far below the universe ceiling.
const SURFACES: u32 = 4;

/// A random term of bounded depth over the fixed surface set.
fn random_term(rng: &mut StdRng, depth: u32) -> Term {
    if depth == 0 || rng.random_range(0..3) == 0 {
        let magnitude = rng.random_range(1..=SURFACES);
        let literal = if rng.random::<bool>() {
            Literal::positive(magnitude)
        } else {
            Literal::negative(magnitude)
        };
        return Term::literal(literal);
    }

    let arity = rng.random_range(2..=3);
    let operands: Vec<Term> = (0..arity).map(|_| random_term(rng, depth - 1)).collect();
    if rng.random::<bool>() {
        Term::intersection_of(operands)
    } else {
        Term::disjunction_of(operands)
    }
}

/// A random total assignment over the fixed surface set.
fn random_assignment(rng: &mut StdRng) -> HashMap<u32, bool> {
    (1..=SURFACES).map(|m| (m, rng.random::<bool>())).collect()
}

#[test]
fn minimization_identities() {
    assert_eq!(
        Term::parse("1 2+1 2'").unwrap().to_dnf().unwrap(),
        Term::parse("1").unwrap()
    );
    assert_eq!(
        Term::parse("1 2+1' 2").unwrap().to_dnf().unwrap(),
        Term::parse("2").unwrap()
    );
    assert!(Term::parse("1 2+1 2'+1' 2+1' 2'")
        .unwrap()
        .to_dnf()
        .unwrap()
        .is_true());
    assert!(Term::parse("1 1'").unwrap().to_dnf().unwrap().is_false());
}

#[test]
fn minimization_preserves_truth_everywhere() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let term = random_term(&mut rng, 3);
        let dnf = term.to_dnf().unwrap();
        let cnf = term.to_cnf().unwrap();

        for _ in 0..10 {
            let assignment = random_assignment(&mut rng);
            let expected = term.evaluate(&assignment).unwrap();
            assert_eq!(
                dnf.evaluate(&assignment).unwrap(),
                expected,
                "DNF of {} diverges at {:?}",
                term,
                assignment
            );
            assert_eq!(
                cnf.evaluate(&assignment).unwrap(),
                expected,
                "CNF of {} diverges at {:?}",
                term,
                assignment
            );
        }
    }
}

#[test]
fn minimization_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let term = random_term(&mut rng, 3);
        assert_eq!(term.to_dnf().unwrap(), term.to_dnf().unwrap());
        // Minimizing a minimal form changes nothing further
        let dnf = term.to_dnf().unwrap();
        assert_eq!(dnf.to_dnf().unwrap(), dnf);
    }
}

#[test]
fn implication_self_checks() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let term = random_term(&mut rng, 3);
        assert!(term.implies(&term).unwrap(), "{} does not imply itself", term);

        // t implies its own complement exactly when t is unsatisfiable
        let unsatisfiable = term.to_dnf().unwrap().is_false();
        assert_eq!(
            term.implies(&term.not()).unwrap(),
            unsatisfiable,
            "implication against complement disagrees for {}",
            term
        );
    }
}

#[test]
fn division_round_trip_on_random_terms() {
    let mut rng = StdRng::seed_from_u64(99);
    let divisor = Term::parse("1").unwrap();
    let mut divided = 0;

    for _ in 0..100 {
        let dnf = random_term(&mut rng, 3).to_dnf().unwrap();
        let (quotient, remainder) = dnf.divide(&divisor);
        let Some(quotient) = quotient else {
            assert_eq!(remainder, dnf);
            continue;
        };
        divided += 1;

        let recombined = &(&quotient * &divisor) + &remainder;
        assert_eq!(recombined.to_dnf().unwrap(), dnf, "division broke {}", dnf);
    }

    assert!(divided > 0, "divisor never divided any random DNF");
}

#[test]
fn cnf_and_dnf_agree_on_constants() {
    for input in ["1 1'", "1+1'"] {
        let term = Term::parse(input).unwrap();
        assert_eq!(term.to_dnf().unwrap(), term.to_cnf().unwrap());
    }
}
