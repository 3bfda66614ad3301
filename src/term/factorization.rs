//! Algebraic division of DNF terms
//!
//! [`Term::divide`] is the primitive a higher-level factoring pass applies
//! repeatedly to build reduced, literal-sharing forms: it splits a
//! union-of-intersections by a single intersection divisor into the summands
//! the divisor evenly divides (with the divisor's literals removed) and the
//! summands it does not touch.

use super::{Literal, Term, TermKind};

/// One top-level summand of a disjunction, viewed for division.
enum Summand<'a> {
    /// A pure product of literals
    Product(&'a [Literal]),
    /// Anything with nested structure; indivisible as far as algebraic
    /// division is concerned
    Opaque(&'a Term),
}

impl Term {
    /// Divide this term by a single-intersection divisor.
    ///
    /// Meaningful when this term is in disjunctive normal form. The quotient
    /// is the disjunction of every summand that contains all of the
    /// divisor's literals, with those literals removed; the remainder is the
    /// disjunction of the remaining summands. The quotient is `None` when no
    /// summand fully contains the divisor; the remainder is
    /// [`Term::falsity`] when every summand divides.
    ///
    /// Summands with nested structure, and divisors that are not a pure
    /// intersection of literals, do not participate: they land whole in the
    /// remainder (respectively make the quotient `None`), keeping the
    /// operation total.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_algebra::Term;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let dnf = Term::parse("1 2 3+1 2 4'+5")?;
    /// let divisor = Term::parse("1 2")?;
    ///
    /// let (quotient, remainder) = dnf.divide(&divisor);
    /// assert_eq!(quotient, Some(Term::parse("3+4'")?));
    /// assert_eq!(remainder, Term::parse("5")?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn divide(&self, divisor: &Term) -> (Option<Term>, Term) {
        let divisor_literals: &[Literal] =
            if divisor.kind() == TermKind::Intersection && divisor.children().is_empty() {
                divisor.literals()
            } else {
                return (None, self.clone());
            };

        let mut quotient_summands: Vec<Term> = Vec::new();
        let mut remainder_summands: Vec<Term> = Vec::new();

        for summand in self.summands() {
            match summand {
                Summand::Product(literals) if contains_all(literals, divisor_literals) => {
                    let reduced = literals
                        .iter()
                        .filter(|l| !divisor_literals.contains(l))
                        .map(|&l| Term::literal(l));
                    quotient_summands.push(Term::intersection_of(reduced));
                }
                Summand::Product(literals) => {
                    remainder_summands
                        .push(Term::intersection_of(literals.iter().map(|&l| Term::literal(l))));
                }
                Summand::Opaque(term) => remainder_summands.push(term.clone()),
            }
        }

        let quotient = if quotient_summands.is_empty() {
            None
        } else {
            Some(Term::disjunction_of(quotient_summands))
        };
        (quotient, Term::disjunction_of(remainder_summands))
    }

    /// The top-level summands of this term, treating a lone intersection (or
    /// bare literal) as a one-summand disjunction.
    fn summands(&self) -> Vec<Summand<'_>> {
        match self.kind() {
            TermKind::Disjunction => {
                let mut summands: Vec<Summand<'_>> = self
                    .literals()
                    .iter()
                    .map(|l| Summand::Product(std::slice::from_ref(l)))
                    .collect();
                for child in self.children() {
                    if child.children().is_empty() {
                        summands.push(Summand::Product(child.literals()));
                    } else {
                        summands.push(Summand::Opaque(child));
                    }
                }
                summands
            }
            TermKind::Intersection if self.children().is_empty() => {
                vec![Summand::Product(self.literals())]
            }
            TermKind::Intersection => vec![Summand::Opaque(self)],
        }
    }
}

/// Whether every literal of `required` appears in `literals`.
fn contains_all(literals: &[Literal], required: &[Literal]) -> bool {
    required.iter().all(|l| literals.contains(l))
}
