//! Error types for region expression parsing, evaluation, and minimization

use std::fmt;
use std::io;
use std::sync::Arc;

/// Malformed region expression text.
///
/// Returned by [`Term::parse`](crate::Term::parse) on unmatched parentheses,
/// empty operands, illegal operator adjacency, or a complement marker that
/// does not follow a literal token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// What the parser rejected
    pub message: Arc<str>,
    /// The original input text that failed to parse
    pub input: Arc<str>,
    /// Byte offset in the input where the error occurred, when known
    pub position: Option<usize>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(position) = self.position {
            write!(
                f,
                "Failed to parse region expression at position {}: {}. Input: {:?}",
                position, self.message, self.input
            )
        } else {
            write!(
                f,
                "Failed to parse region expression: {}. Input: {:?}",
                self.message, self.input
            )
        }
    }
}

impl std::error::Error for SyntaxError {}

impl From<SyntaxError> for io::Error {
    fn from(err: SyntaxError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Evaluation reached a literal with no entry in the supplied assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnboundLiteralError {
    /// Magnitude of the unbound literal
    pub magnitude: u32,
}

impl fmt::Display for UnboundLiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "literal {} has no entry in the supplied assignment",
            self.magnitude
        )
    }
}

impl std::error::Error for UnboundLiteralError {}

impl From<UnboundLiteralError> for io::Error {
    fn from(err: UnboundLiteralError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Minimization was requested on a literal universe above the configured
/// ceiling.
///
/// The truth table is exponential in the universe size, so this is a
/// deliberate resource limit rather than a silent truncation. Callers should
/// fall back to the unminimized term, which stays fully usable for
/// evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UniverseTooLargeError {
    /// Number of distinct literal magnitudes in the term
    pub universe: usize,
    /// The configured ceiling ([`MAX_UNIVERSE`](crate::minimize::MAX_UNIVERSE))
    pub ceiling: usize,
}

impl fmt::Display for UniverseTooLargeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "literal universe of {} exceeds the minimization ceiling of {}",
            self.universe, self.ceiling
        )
    }
}

impl std::error::Error for UniverseTooLargeError {}

impl From<UniverseTooLargeError> for io::Error {
    fn from(err: UniverseTooLargeError) -> Self {
        io::Error::new(io::ErrorKind::OutOfMemory, err)
    }
}
