//! Canonical text serialization for region expressions

use super::{Literal, Term, TermKind};
use std::fmt;

impl Term {
    /// The canonical text form of this term.
    ///
    /// For a canonicalized, non-degenerate term this is the exact inverse of
    /// [`Term::parse`]: parsing the returned text reproduces a structurally
    /// equal term. The two absorbing elements render as `<T>` and `<F>`,
    /// which are not part of the grammar (a bare letter would collide with
    /// the legacy letter-literal alias).
    ///
    /// # Examples
    ///
    /// ```
    /// use region_algebra::Term;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let region = Term::parse("(1+2) 3'")?;
    /// assert_eq!(region.to_text(), "3' (1+2)");
    /// assert_eq!(Term::parse(&region.to_text())?, region);
    /// # Ok(())
    /// # }
    /// ```
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_true() {
            return write!(f, "<T>");
        }
        if self.is_false() {
            return write!(f, "<F>");
        }

        match self.kind() {
            TermKind::Intersection => {
                // Factors separated by spaces; child disjunctions need
                // parentheses because `+` binds looser than concatenation.
                let mut first = true;
                for literal in self.literals() {
                    if !first {
                        write!(f, " ")?;
                    }
                    first = false;
                    fmt_literal(f, *literal)?;
                }
                for child in self.children() {
                    if !first {
                        write!(f, " ")?;
                    }
                    first = false;
                    write!(f, "(")?;
                    child.fmt_node(f)?;
                    write!(f, ")")?;
                }
                Ok(())
            }
            TermKind::Disjunction => {
                let mut first = true;
                for literal in self.literals() {
                    if !first {
                        write!(f, "+")?;
                    }
                    first = false;
                    fmt_literal(f, *literal)?;
                }
                for child in self.children() {
                    if !first {
                        write!(f, "+")?;
                    }
                    first = false;
                    child.fmt_node(f)?;
                }
                Ok(())
            }
        }
    }
}

fn fmt_literal(f: &mut fmt::Formatter<'_>, literal: Literal) -> fmt::Result {
    if literal.is_positive() {
        write!(f, "{}", literal.magnitude())
    } else {
        write!(f, "{}'", literal.magnitude())
    }
}

/// Canonical text form; see [`Term::to_text`].
impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_node(f)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_literal(f, *self)
    }
}
