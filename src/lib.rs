//! # Region Algebra
//!
//! A symbolic boolean-algebra engine for solid-geometry region
//! descriptions. A region is written as set operations over signed surface
//! literals ("inside surface 12", "outside surface 13") combined with
//! intersection and union. The crate parses the infix text form into a
//! canonical [`Term`] tree and can reduce that tree to a minimal
//! sum-of-products (DNF) or product-of-sums (CNF) with a
//! Quine-McCluskey-style prime-implicant search.
//!
//! The engine is deliberately narrow: surface geometry (distances, normals,
//! containment arithmetic) and file handling belong to the embedding
//! geometry layer, which supplies the literal-to-truth assignment for
//! [`Term::evaluate`] and consumes the canonical term for bounding volumes
//! or re-export.
//!
//! ## Text grammar
//!
//! `+` is union, concatenation is intersection, `'` immediately after a
//! literal complements it, and parentheses group. Literal tokens are
//! positive integers (single ASCII letters are a legacy alias for the same
//! magnitude space). `"12 13'+14"` denotes `(12 ∧ ¬13) ∨ 14`.
//!
//! ## Quick start
//!
//! ```
//! use region_algebra::Term;
//! use std::collections::HashMap;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let region = Term::parse("1 2+1 2'")?;
//!
//! // Surface 2 is irrelevant to this region
//! let minimal = region.to_dnf()?;
//! assert_eq!(minimal, Term::parse("1")?);
//!
//! // Evaluate against a surface assignment from the geometry layer
//! let mut assignment = HashMap::new();
//! assignment.insert(1, true);
//! assignment.insert(2, false);
//! assert!(region.evaluate(&assignment)?);
//! assert!(minimal.evaluate(&assignment)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Building terms programmatically
//!
//! Terms combine with `*` (intersection), `+` (union), and `!` (complement),
//! mirroring the text grammar:
//!
//! ```
//! use region_algebra::{Literal, Term};
//!
//! let a = Term::literal(Literal::positive(1));
//! let b = Term::literal(Literal::positive(2));
//!
//! let region = &(&a * &b) + &!&a;
//! assert_eq!(region, Term::parse("1'+1 2").unwrap());
//! ```
//!
//! ## Resource model
//!
//! Everything is synchronous and single-threaded on caller-owned data: no
//! I/O, no shared state, no background work. Minimization cost is
//! exponential in the literal universe and is bounded by the explicit
//! [`minimize::MAX_UNIVERSE`] ceiling rather than a timeout; a
//! [`UniverseTooLargeError`] means "keep the unminimized term", never a
//! fatal condition.

pub mod minimize;
pub mod term;

pub use minimize::MAX_UNIVERSE;
pub use term::error::{SyntaxError, UnboundLiteralError, UniverseTooLargeError};
pub use term::{Literal, Term, TermKind};
