//! Term representation and canonicalization for region expressions
//!
//! A [`Term`] is the tree form of a boolean region description: each node is
//! either a pure intersection or a pure disjunction of signed surface
//! literals and sub-terms of the opposite kind. Terms are built by
//! [`Term::parse`], by the constructors below, or by the minimizer, and are
//! normalized in place with [`Term::canonicalize`].
//!
//! # Quick Start
//!
//! ```
//! use region_algebra::Term;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // (inside surface 12 AND outside surface 13) OR inside surface 14
//! let region = Term::parse("12 13'+14")?;
//!
//! // Canonical text form round-trips through the parser
//! let same = Term::parse(&region.to_text())?;
//! assert_eq!(region, same);
//! # Ok(())
//! # }
//! ```

mod display;
pub mod error;
mod eval;
mod factorization;
mod operators;
mod parser;


use std::collections::BTreeSet;

/// A signed surface literal.
///
/// The magnitude identifies the surface (an opaque key owned by the geometry
/// layer); the sign encodes polarity: positive for the asserted sense of the
/// surface test, negative for its complement. The zero value is not a valid
/// literal.
///
/// Literals order by magnitude first, with the asserted (positive) literal
/// before its complement at equal magnitude. This is the fixed total order
/// used everywhere for canonical comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal(i32);

impl Literal {
    /// Create a literal from a raw signed value, rejecting zero.
    pub fn new(value: i32) -> Option<Self> {
        if value == 0 {
            None
        } else {
            Some(Literal(value))
        }
    }

    /// The asserted literal for a surface magnitude.
    ///
    /// # Panics
    ///
    /// Panics if `magnitude` is zero or exceeds `i32::MAX`.
    pub fn positive(magnitude: u32) -> Self {
        assert!(
            magnitude != 0 && magnitude <= i32::MAX as u32,
            "literal magnitude out of range: {}",
            magnitude
        );
        Literal(magnitude as i32)
    }

    /// The complemented literal for a surface magnitude.
    ///
    /// # Panics
    ///
    /// Panics if `magnitude` is zero or exceeds `i32::MAX`.
    pub fn negative(magnitude: u32) -> Self {
        Literal(-Self::positive(magnitude).0)
    }

    /// The surface this literal tests.
    pub fn magnitude(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Whether this is the asserted (uncomplemented) sense.
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// The literal with opposite polarity on the same surface.
    pub fn complement(self) -> Self {
        Literal(-self.0)
    }

    /// Raw signed value.
    pub fn value(self) -> i32 {
        self.0
    }

    /// Magnitude alias for legacy single-letter call sites.
    ///
    /// Lowercase `a..z` map to 1..26 and uppercase `A..Z` to 27..52 in the
    /// shared magnitude space; canonical serialization always prints
    /// magnitudes.
    pub fn letter_magnitude(letter: char) -> u32 {
        match letter {
            'a'..='z' => letter as u32 - 'a' as u32 + 1,
            'A'..='Z' => letter as u32 - 'A' as u32 + 27,
            _ => 0,
        }
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Magnitude first; asserted before complemented at equal magnitude.
        self.magnitude()
            .cmp(&other.magnitude())
            .then_with(|| other.0.signum().cmp(&self.0.signum()))
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Which boolean connective a [`Term`] node applies to its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermKind {
    /// Logical AND over literals and children.
    Intersection,
    /// Logical OR over literals and children.
    Disjunction,
}

impl TermKind {
    /// The opposite connective.
    pub fn dual(self) -> TermKind {
        match self {
            TermKind::Intersection => TermKind::Disjunction,
            TermKind::Disjunction => TermKind::Intersection,
        }
    }
}

/// A boolean region expression in tree form.
///
/// Every node is a pure intersection or a pure disjunction over a set of
/// [`Literal`]s and a set of child terms of the opposite kind; children are
/// owned exclusively by their parent. An empty `Intersection` is the "always
/// true" element, an empty `Disjunction` the "always false" element.
///
/// Structural equality and the derived total order are defined on the
/// canonical form: compare two terms only after both have been through
/// [`Term::canonicalize`] (everything returned by [`Term::parse`] and the
/// minimizer already is canonical).
///
/// # Examples
///
/// ```
/// use region_algebra::Term;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Commutativity and associativity fall out of the canonical form
/// assert_eq!(Term::parse("a+b")?, Term::parse("b+a")?);
/// assert_eq!(Term::parse("a(bc)")?, Term::parse("(ab)c")?);
///
/// // A literal and its complement annihilate at the same node
/// assert_eq!(Term::parse("1 1'")?, Term::falsity());
/// assert_eq!(Term::parse("1+1'")?, Term::truth());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Term {
    kind: TermKind,
    literals: Vec<Literal>,
    children: Vec<Term>,
}

impl Term {
    /// The "always true" element: an empty intersection.
    pub fn truth() -> Self {
        Term::empty(TermKind::Intersection)
    }

    /// The "always false" element: an empty disjunction.
    pub fn falsity() -> Self {
        Term::empty(TermKind::Disjunction)
    }

    /// A pure literal term.
    pub fn literal(literal: Literal) -> Self {
        Term {
            kind: TermKind::Intersection,
            literals: vec![literal],
            children: Vec::new(),
        }
    }

    /// The canonical intersection of the given terms.
    ///
    /// An empty iterator yields [`Term::truth`].
    pub fn intersection_of<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        let mut term = Term {
            kind: TermKind::Intersection,
            literals: Vec::new(),
            children: terms.into_iter().collect(),
        };
        term.canonicalize();
        term
    }

    /// The canonical disjunction of the given terms.
    ///
    /// An empty iterator yields [`Term::falsity`].
    pub fn disjunction_of<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        let mut term = Term {
            kind: TermKind::Disjunction,
            literals: Vec::new(),
            children: terms.into_iter().collect(),
        };
        term.canonicalize();
        term
    }

    /// Raw two-operand join used by the parser; not canonical until
    /// [`Term::canonicalize`] runs over the finished tree.
    pub(crate) fn join(kind: TermKind, left: Term, right: Term) -> Self {
        Term {
            kind,
            literals: Vec::new(),
            children: vec![left, right],
        }
    }

    fn empty(kind: TermKind) -> Self {
        Term {
            kind,
            literals: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The connective at this node.
    pub fn kind(&self) -> TermKind {
        self.kind
    }

    /// Direct literals of this node, in canonical order.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// Direct children of this node (each of the opposite kind), in
    /// canonical order.
    pub fn children(&self) -> &[Term] {
        &self.children
    }

    /// Whether this is the "always true" element.
    pub fn is_true(&self) -> bool {
        self.kind == TermKind::Intersection && self.is_empty()
    }

    /// Whether this is the "always false" element.
    pub fn is_false(&self) -> bool {
        self.kind == TermKind::Disjunction && self.is_empty()
    }

    /// Whether this is a single bare literal.
    pub fn is_literal(&self) -> bool {
        self.children.is_empty() && self.literals.len() == 1
    }

    /// The literal, when this term is a single bare literal.
    pub fn as_literal(&self) -> Option<Literal> {
        if self.is_literal() {
            Some(self.literals[0])
        } else {
            None
        }
    }

    fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.children.is_empty()
    }

    /// The sorted, deduplicated surface magnitudes referenced anywhere in
    /// this term.
    ///
    /// Computed on demand; a structural edit invalidates any previously
    /// returned universe, so it is never cached.
    pub fn universe(&self) -> Vec<u32> {
        let mut magnitudes = BTreeSet::new();
        self.collect_magnitudes(&mut magnitudes);
        magnitudes.into_iter().collect()
    }

    fn collect_magnitudes(&self, magnitudes: &mut BTreeSet<u32>) {
        for literal in &self.literals {
            magnitudes.insert(literal.magnitude());
        }
        for child in &self.children {
            child.collect_magnitudes(magnitudes);
        }
    }

    /// Normalize this term in place. Idempotent.
    ///
    /// Recursively canonicalizes children, flattens same-kind children into
    /// this node (associativity), hoists bare-literal children, absorbs an
    /// empty opposite-kind child into the node's absorbing element, sorts and
    /// deduplicates literals and children (commutativity and idempotence),
    /// and collapses the node when a literal and its complement meet
    /// (`1 1'` is false, `1+1'` is true). Deeper absorption across levels is
    /// the minimizer's job, not canonicalization's.
    pub fn canonicalize(&mut self) {
        for child in &mut self.children {
            child.canonicalize();
        }

        let mut literals = std::mem::take(&mut self.literals);
        let mut children = Vec::new();
        for child in std::mem::take(&mut self.children) {
            if child.kind == self.kind {
                // Associativity: splice a same-kind child into this node.
                // An empty same-kind child is this node's identity element.
                literals.extend(child.literals);
                children.extend(child.children);
            } else if child.is_empty() {
                // An empty opposite-kind child is this node's absorbing
                // element: false under an intersection, true under a
                // disjunction.
                *self = Term::empty(self.kind.dual());
                return;
            } else if child.is_literal() {
                literals.push(child.literals[0]);
            } else {
                children.push(child);
            }
        }

        literals.sort();
        literals.dedup();
        if has_complement_pair(&literals) {
            // Single-level contradiction/tautology rule.
            *self = Term::empty(self.kind.dual());
            return;
        }

        children.sort();
        children.dedup();

        self.literals = literals;
        self.children = children;

        if self.literals.is_empty() && self.children.len() == 1 {
            // A one-child wrapper denotes its child.
            if let Some(child) = self.children.pop() {
                *self = child;
            }
        } else if self.children.is_empty() && self.literals.len() == 1 {
            // Bare literals always carry Intersection kind so that equal
            // literals compare equal regardless of how they were built.
            self.kind = TermKind::Intersection;
        }
    }

    /// Consuming convenience form of [`Term::canonicalize`].
    pub fn canonicalized(mut self) -> Self {
        self.canonicalize();
        self
    }

    /// Complement this term in place via De Morgan's laws.
    ///
    /// Flips the connective at every node and the polarity of every literal,
    /// then re-canonicalizes. Total; complementing twice restores the
    /// canonical form of the original term.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_algebra::Term;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut region = Term::parse("1 2'+3")?;
    /// let original = region.clone();
    ///
    /// region.complement();
    /// assert_eq!(region, Term::parse("(1'+2) 3'")?);
    ///
    /// region.complement();
    /// assert_eq!(region, original);
    /// # Ok(())
    /// # }
    /// ```
    pub fn complement(&mut self) {
        self.complement_raw();
        self.canonicalize();
    }

    fn complement_raw(&mut self) {
        self.kind = self.kind.dual();
        for literal in &mut self.literals {
            *literal = literal.complement();
        }
        for child in &mut self.children {
            child.complement_raw();
        }
    }

    /// Add a literal to this node and re-canonicalize.
    pub fn insert_literal(&mut self, literal: Literal) {
        self.literals.push(literal);
        self.canonicalize();
    }

    /// Remove a direct literal from this node, re-canonicalizing on success.
    ///
    /// Returns `false` when the literal is not a direct literal of this node.
    pub fn remove_literal(&mut self, literal: Literal) -> bool {
        match self.literals.iter().position(|&l| l == literal) {
            Some(index) => {
                self.literals.remove(index);
                self.canonicalize();
                true
            }
            None => false,
        }
    }

    /// Add a sub-term under this node and re-canonicalize.
    pub fn insert_child(&mut self, child: Term) {
        self.children.push(child);
        self.canonicalize();
    }

    /// Remove a structurally equal direct child, re-canonicalizing on
    /// success. Returns `false` when no direct child matches.
    pub fn remove_child(&mut self, child: &Term) -> bool {
        match self.children.iter().position(|c| c == child) {
            Some(index) => {
                self.children.remove(index);
                self.canonicalize();
                true
            }
            None => false,
        }
    }

    /// Merge another term into this node and re-canonicalize.
    ///
    /// A same-kind term contributes its literals and children directly
    /// (associativity); an opposite-kind term becomes a child.
    pub fn merge(&mut self, other: Term) {
        if other.kind == self.kind {
            self.literals.extend(other.literals);
            self.children.extend(other.children);
        } else {
            self.children.push(other);
        }
        self.canonicalize();
    }
}

/// Detect a literal together with its complement in a sorted literal list.
fn has_complement_pair(literals: &[Literal]) -> bool {
    literals
        .windows(2)
        .any(|pair| pair[0].magnitude() == pair[1].magnitude() && pair[0] != pair[1])
}
