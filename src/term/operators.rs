//! Operator overloading and boolean combinators for region terms

use super::Term;
use std::ops::{Add, Mul, Not};

// Boolean combinators
impl Term {
    /// Canonical intersection of this term with another.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_algebra::Term;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let a = Term::parse("1")?;
    /// let b = Term::parse("2+3")?;
    /// assert_eq!(a.and(&b), Term::parse("1 (2+3)")?);
    /// # Ok(())
    /// # }
    /// ```
    pub fn and(&self, other: &Term) -> Term {
        Term::intersection_of([self.clone(), other.clone()])
    }

    /// Canonical disjunction of this term with another.
    pub fn or(&self, other: &Term) -> Term {
        Term::disjunction_of([self.clone(), other.clone()])
    }

    /// Canonical complement of this term ([`Term::complement`] on a clone).
    pub fn not(&self) -> Term {
        let mut complemented = self.clone();
        complemented.complement();
        complemented
    }
}

/// Intersection operator for references: `&a * &b`
impl Mul for &Term {
    type Output = Term;

    fn mul(self, rhs: &Term) -> Term {
        self.and(rhs)
    }
}

/// Intersection operator: `a * b` (delegates to the reference version)
impl Mul for Term {
    type Output = Term;

    fn mul(self, rhs: Term) -> Term {
        self.and(&rhs)
    }
}

/// Union operator for references: `&a + &b`
impl Add for &Term {
    type Output = Term;

    fn add(self, rhs: &Term) -> Term {
        self.or(rhs)
    }
}

/// Union operator: `a + b` (delegates to the reference version)
impl Add for Term {
    type Output = Term;

    fn add(self, rhs: Term) -> Term {
        self.or(&rhs)
    }
}

/// Complement operator for references: `!&a`
impl Not for &Term {
    type Output = Term;

    fn not(self) -> Term {
        Term::not(self)
    }
}

/// Complement operator: `!a` (delegates to the reference version)
impl Not for Term {
    type Output = Term;

    fn not(self) -> Term {
        Term::not(&self)
    }
}
