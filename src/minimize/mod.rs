//! Quine-McCluskey minimization of region terms
//!
//! [`Term::to_dnf`] reduces a term to a minimal sum-of-products: it builds
//! the truth table over the term's literal universe, combines bit-adjacent
//! implicants until only prime implicants remain, keeps every essential
//! prime, and covers the leftover rows with a deterministic greedy
//! selection. [`Term::to_cnf`] is the dual, obtained by complementing on the
//! way in and out.
//!
//! The greedy covering step is a documented approximation policy, not a
//! guaranteed minimum (exact covering is NP-hard): it repeatedly takes the
//! prime implicant covering the most still-uncovered rows, breaking ties by
//! lowest literal count and then by the fixed pattern order.
//!
//! # Examples
//!
//! ```
//! use region_algebra::Term;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Surface 2 is irrelevant: 1 2 + 1 2' reduces to 1
//! let region = Term::parse("1 2+1 2'")?;
//! assert_eq!(region.to_dnf()?, Term::parse("1")?);
//!
//! // A cover of every assignment is the "true" element
//! let tautology = Term::parse("1 2+1 2'+1' 2+1' 2'")?;
//! assert!(tautology.to_dnf()?.is_true());
//! # Ok(())
//! # }
//! ```

mod implicant;


use crate::term::error::UniverseTooLargeError;
use crate::term::Term;
use implicant::Implicant;
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet};

/// Largest literal universe accepted for minimization.
///
/// The truth table has `2^n` rows for `n` distinct magnitudes, so the
/// ceiling bounds both time and memory. Above it, [`Term::to_dnf`] and
/// friends fail with [`UniverseTooLargeError`] and the caller keeps the
/// unminimized term.
pub const MAX_UNIVERSE: usize = 16;

impl Term {
    /// Reduce this term to a minimal disjunctive normal form.
    ///
    /// The result is a canonical disjunction of intersections (degenerating
    /// to a single intersection, a bare literal, or an absorbing element)
    /// that is true for exactly the assignments this term is true for.
    pub fn to_dnf(&self) -> Result<Term, UniverseTooLargeError> {
        let universe = self.universe();
        let width = universe.len();
        if width > MAX_UNIVERSE {
            return Err(UniverseTooLargeError {
                universe: width,
                ceiling: MAX_UNIVERSE,
            });
        }

        let rows: Vec<usize> = (0..1usize << width)
            .filter(|&row| self.evaluate_row(&universe, row))
            .collect();
        debug!(
            "to_dnf: universe = {:?}, {} of {} rows true",
            universe,
            rows.len(),
            1usize << width
        );

        if rows.is_empty() {
            return Ok(Term::falsity());
        }
        if rows.len() == 1usize << width {
            return Ok(Term::truth());
        }

        let primes = prime_implicants(&rows, width);
        let selected = select_cover(&rows, &primes);

        Ok(Term::disjunction_of(
            selected.iter().map(|&index| primes[index].to_term(&universe)),
        ))
    }

    /// Reduce this term to a minimal conjunctive normal form.
    ///
    /// Dual of [`Term::to_dnf`]: the complement is minimized and the result
    /// complemented back, yielding a canonical intersection of disjunctions.
    pub fn to_cnf(&self) -> Result<Term, UniverseTooLargeError> {
        let mut complemented = self.clone();
        complemented.complement();
        let mut dnf = complemented.to_dnf()?;
        dnf.complement();
        Ok(dnf)
    }

    /// Whether this term implies another: every assignment satisfying `self`
    /// also satisfies `other`.
    ///
    /// Decided by reducing `self ∧ ¬other` and checking for the "false"
    /// element, so the cost is the minimizer's `O(2^n)` over the combined
    /// universe.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_algebra::Term;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let inner = Term::parse("1 2")?;
    /// let outer = Term::parse("1")?;
    /// assert!(inner.implies(&outer)?);
    /// assert!(!outer.implies(&inner)?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn implies(&self, other: &Term) -> Result<bool, UniverseTooLargeError> {
        let mut negated = other.clone();
        negated.complement();
        let counterexamples = Term::intersection_of([self.clone(), negated]);
        Ok(counterexamples.to_dnf()?.is_false())
    }
}

/// Iteratively combine bit-adjacent implicants; whatever never combines in
/// any generation is prime.
fn prime_implicants(rows: &[usize], width: usize) -> Vec<Implicant> {
    let mut generation: Vec<Implicant> = rows
        .iter()
        .map(|&row| Implicant::from_row(row, width))
        .collect();
    let mut primes: Vec<Implicant> = Vec::new();

    while !generation.is_empty() {
        generation.sort_by_key(|implicant| implicant.weight());

        let mut combined = vec![false; generation.len()];
        let mut next: Vec<Implicant> = Vec::new();
        for i in 0..generation.len() {
            for j in i + 1..generation.len() {
                // Sorted by weight: only the adjacent group can combine.
                let gap = generation[j].weight() - generation[i].weight();
                if gap == 0 {
                    continue;
                }
                if gap > 1 {
                    break;
                }
                if let Some(merged) = generation[i].combine(&generation[j]) {
                    combined[i] = true;
                    combined[j] = true;
                    if !next.contains(&merged) {
                        next.push(merged);
                    }
                }
            }
        }

        for (index, implicant) in generation.iter().enumerate() {
            if !combined[index] && !primes.contains(implicant) {
                trace!("prime implicant: {:?}", implicant.bits());
                primes.push(implicant.clone());
            }
        }
        debug!(
            "combination pass: {} implicants -> {} combined, {} prime so far",
            generation.len(),
            next.len(),
            primes.len()
        );
        generation = next;
    }

    primes
}

/// Select essential prime implicants, then greedily cover the remaining
/// rows.
///
/// Deterministic policy: a row covered by exactly one prime makes that prime
/// essential; afterwards the prime covering the most still-uncovered rows is
/// taken repeatedly, ties broken by lowest literal count, then by the fixed
/// pattern order. Returns indices into `primes`.
fn select_cover(rows: &[usize], primes: &[Implicant]) -> Vec<usize> {
    let covering: BTreeMap<usize, Vec<usize>> = rows
        .iter()
        .map(|&row| {
            let by: Vec<usize> = primes
                .iter()
                .enumerate()
                .filter(|(_, prime)| prime.covers().contains(&row))
                .map(|(index, _)| index)
                .collect();
            (row, by)
        })
        .collect();

    let mut selected: BTreeSet<usize> = covering
        .values()
        .filter(|by| by.len() == 1)
        .map(|by| by[0])
        .collect();
    debug!(
        "cover: {} prime implicants, {} essential",
        primes.len(),
        selected.len()
    );

    let mut uncovered: BTreeSet<usize> = rows.iter().copied().collect();
    for &index in &selected {
        for row in primes[index].covers() {
            uncovered.remove(row);
        }
    }

    while !uncovered.is_empty() {
        let mut best: Option<usize> = None;
        let mut best_gain = 0;
        for (index, prime) in primes.iter().enumerate() {
            if selected.contains(&index) {
                continue;
            }
            let gain = prime
                .covers()
                .iter()
                .filter(|row| uncovered.contains(row))
                .count();
            if gain == 0 {
                continue;
            }
            let better = match best {
                None => true,
                Some(current) => {
                    gain > best_gain
                        || (gain == best_gain
                            && (prime.literal_count() < primes[current].literal_count()
                                || (prime.literal_count() == primes[current].literal_count()
                                    && prime < &primes[current])))
                }
            };
            if better {
                best = Some(index);
                best_gain = gain;
            }
        }

        // Every true row is covered by at least one prime implicant, so the
        // greedy step always finds a candidate.
        let index = best.expect("uncovered row with no covering prime implicant");
        trace!("greedy pick: {:?} covers {} new rows", primes[index].bits(), best_gain);
        selected.insert(index);
        for row in primes[index].covers() {
            uncovered.remove(row);
        }
    }

    selected.into_iter().collect()
}
