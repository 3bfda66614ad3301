//! Tri-state implicants for the prime-implicant search

use crate::term::{Literal, Term};
use std::collections::BTreeSet;

/// One position of an implicant pattern: the literal is complemented,
/// asserted, or eliminated ("don't care").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Tri {
    Zero,
    One,
    Dash,
}

/// A candidate product term over the literal universe.
///
/// `bits[i]` is the state of the literal at universe index `i`; `covers`
/// records which original truth-table rows this implicant subsumes.
/// Implicants live only for the duration of one minimization call.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Implicant {
    bits: Vec<Tri>,
    covers: BTreeSet<usize>,
}

impl Implicant {
    /// The full (dash-free) implicant for one true truth-table row.
    ///
    /// Bit `i` of `row` is the value of the literal at universe index `i`,
    /// index 0 least significant.
    pub fn from_row(row: usize, width: usize) -> Self {
        let bits = (0..width)
            .map(|i| if row >> i & 1 == 1 { Tri::One } else { Tri::Zero })
            .collect();
        let mut covers = BTreeSet::new();
        covers.insert(row);
        Implicant { bits, covers }
    }

    pub fn bits(&self) -> &[Tri] {
        &self.bits
    }

    pub fn covers(&self) -> &BTreeSet<usize> {
        &self.covers
    }

    /// Count of asserted (One) positions; used to group implicants so only
    /// adjacent groups need pairwise comparison.
    pub fn weight(&self) -> usize {
        self.bits.iter().filter(|&&b| b == Tri::One).count()
    }

    /// Count of fixed (non-dash) positions, the literal count of the product
    /// term this implicant denotes.
    pub fn literal_count(&self) -> usize {
        self.bits.iter().filter(|&&b| b != Tri::Dash).count()
    }

    /// Combine with another implicant differing in exactly one fixed
    /// position, dashes aligned. The result dashes that position and covers
    /// the union of both cover sets.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        let mut differing = None;
        for (index, (&a, &b)) in self.bits.iter().zip(other.bits.iter()).enumerate() {
            if a == b {
                continue;
            }
            if a == Tri::Dash || b == Tri::Dash || differing.is_some() {
                return None;
            }
            differing = Some(index);
        }

        let index = differing?;
        let mut bits = self.bits.clone();
        bits[index] = Tri::Dash;
        let covers = self.covers.union(&other.covers).copied().collect();
        Some(Implicant { bits, covers })
    }

    /// The intersection term this implicant denotes: One positions become
    /// asserted literals, Zero positions complemented ones, dashes drop out.
    /// An all-dash implicant denotes [`Term::truth`].
    pub fn to_term(&self, universe: &[u32]) -> Term {
        Term::intersection_of(self.bits.iter().enumerate().filter_map(|(index, &bit)| {
            match bit {
                Tri::One => Some(Term::literal(Literal::positive(universe[index]))),
                Tri::Zero => Some(Term::literal(Literal::negative(universe[index]))),
                Tri::Dash => None,
            }
        }))
    }
}
