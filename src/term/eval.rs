//! Evaluation of region expressions against surface assignments

use super::error::UnboundLiteralError;
use super::{Term, TermKind};
use std::collections::HashMap;

impl Term {
    /// Evaluate this term against a surface assignment.
    ///
    /// The assignment maps each literal magnitude to the truth of the
    /// asserted sense of that surface test (the geometry layer supplies it).
    /// A complemented literal reads the negated value. Intersection nodes
    /// AND their operands, disjunction nodes OR them.
    ///
    /// Evaluation is strict: every literal reachable in the term must be
    /// bound, even when the result is already decided by another operand, so
    /// success never depends on operand ordering inside a node.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_algebra::Term;
    /// use std::collections::HashMap;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let region = Term::parse("12 13'+14")?;
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(12, true);
    /// assignment.insert(13, false);
    /// assignment.insert(14, false);
    ///
    /// assert!(region.evaluate(&assignment)?); // 12 ∧ ¬13 holds
    ///
    /// assignment.remove(&13);
    /// assert!(region.evaluate(&assignment).is_err()); // 13 is unbound
    /// # Ok(())
    /// # }
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<u32, bool>) -> Result<bool, UnboundLiteralError> {
        let mut value = self.kind() == TermKind::Intersection;
        for literal in self.literals() {
            let bound = assignment
                .get(&literal.magnitude())
                .copied()
                .ok_or(UnboundLiteralError {
                    magnitude: literal.magnitude(),
                })?;
            let operand = if literal.is_positive() { bound } else { !bound };
            value = combine(self.kind(), value, operand);
        }
        for child in self.children() {
            let operand = child.evaluate(assignment)?;
            value = combine(self.kind(), value, operand);
        }
        Ok(value)
    }

    /// Evaluate against one row of the truth table over `universe`.
    ///
    /// Bit `i` of `row` is the value assigned to `universe[i]`, with index 0
    /// in the least significant position. Infallible because the universe of
    /// a term covers every literal it contains.
    pub(crate) fn evaluate_row(&self, universe: &[u32], row: usize) -> bool {
        let mut value = self.kind() == TermKind::Intersection;
        for literal in self.literals() {
            let index = universe
                .binary_search(&literal.magnitude())
                .expect("literal magnitude missing from its own universe");
            let bound = row >> index & 1 == 1;
            let operand = if literal.is_positive() { bound } else { !bound };
            value = combine(self.kind(), value, operand);
        }
        for child in self.children() {
            value = combine(self.kind(), value, child.evaluate_row(universe, row));
        }
        value
    }
}

fn combine(kind: TermKind, accumulated: bool, operand: bool) -> bool {
    match kind {
        TermKind::Intersection => accumulated && operand,
        TermKind::Disjunction => accumulated || operand,
    }
}
