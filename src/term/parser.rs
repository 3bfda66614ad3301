//! Parsing support for region expressions

use super::error::SyntaxError;
use super::Term;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/term/grammar.rs"));
}

impl Term {
    /// Parse a region expression from its infix text form.
    ///
    /// The grammar, in precedence order from lowest to highest:
    /// - `+` for union
    /// - concatenation (no separator) for intersection
    /// - `'` immediately after a literal token for its complement
    /// - parentheses for grouping
    ///
    /// Literal tokens are positive integers; single ASCII letters are
    /// accepted as a legacy alias into the same magnitude space. `'` applies
    /// only to a single literal token, never to a parenthesized group; use
    /// [`Term::complement`] to negate a sub-expression.
    ///
    /// The returned term is already canonical.
    ///
    /// # Examples
    ///
    /// ```
    /// use region_algebra::{Term, TermKind};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let region = Term::parse("12 13'+14")?;
    /// assert_eq!(region.kind(), TermKind::Disjunction);
    ///
    /// assert!(Term::parse("12 (13'").is_err()); // unmatched parenthesis
    /// assert!(Term::parse("12 + + 13").is_err()); // empty operand
    /// assert!(Term::parse("'12").is_err()); // stray complement marker
    /// # Ok(())
    /// # }
    /// ```
    pub fn parse(input: &str) -> Result<Self, SyntaxError> {
        match parser_impl::RegionParser::new().parse(input) {
            Ok(mut term) => {
                term.canonicalize();
                Ok(term)
            }
            Err(e) => {
                let (position, message) = describe_parse_error(&e);
                Err(SyntaxError {
                    message: Arc::from(message.as_str()),
                    input: Arc::from(input),
                    position,
                })
            }
        }
    }
}

impl std::str::FromStr for Term {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Term::parse(s)
    }
}

/// Turn a lalrpop error into a position and a caller-facing message.
fn describe_parse_error(
    error: &lalrpop_util::ParseError<usize, lalrpop_util::lexer::Token<'_>, &'static str>,
) -> (Option<usize>, String) {
    use lalrpop_util::ParseError;

    match error {
        ParseError::InvalidToken { location } => (Some(*location), "invalid token".to_string()),
        ParseError::UnrecognizedEof { location, .. } => {
            (Some(*location), "unexpected end of expression".to_string())
        }
        ParseError::UnrecognizedToken {
            token: (start, token, _),
            ..
        } => (Some(*start), format!("unexpected token `{}`", token)),
        ParseError::ExtraToken {
            token: (start, token, _),
        } => (Some(*start), format!("extra token `{}`", token)),
        ParseError::User { error } => (None, (*error).to_string()),
    }
}
