//! Error taxonomy for expression compilation.
//!
//! Two tiers: recovered lexical errors are collected as [`Diagnostic`]s and
//! never stop a compilation by themselves, while [`CompileError`] is fatal
//! for the input at hand. Structural invariant violations (a DAG root
//! referenced as a successor, a redirection onto a non-leaf) indicate a
//! defect rather than bad input and are enforced with assertions instead.

use std::fmt;

use thiserror::Error;

/// Classification of a recovered lexical error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LexErrorKind {
    UnexpectedIdent,
    UnexpectedOperator,
    UnexpectedOpening,
    UnexpectedClosing,
    UnexpectedChar,
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LexErrorKind::UnexpectedIdent => "unexpected identifier",
            LexErrorKind::UnexpectedOperator => "unexpected operator",
            LexErrorKind::UnexpectedOpening => "unexpected opening parenthesis",
            LexErrorKind::UnexpectedClosing => "unexpected closing parenthesis",
            LexErrorKind::UnexpectedChar => "unexpected character",
        };
        write!(f, "{}", s)
    }
}

/// One recovered lexical error, tagged with the byte offset of the
/// offending character.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Diagnostic {
    pub kind: LexErrorKind,
    pub position: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.kind, self.position)
    }
}

/// Fatal errors: the compilation of this input fails as a whole, no partial
/// output is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// Strict lexing aborted after exceeding the configured error budget.
    #[error("aborted after {count} lexical errors")]
    TooManyLexicalErrors { count: usize },

    /// Parenthesis depth went negative or did not return to zero.
    #[error("unbalanced parentheses (depth {depth})")]
    UnbalancedParentheses { depth: i32 },

    /// No tokens survived lexing.
    #[error("empty expression")]
    EmptyExpression,

    /// The prefix token stream is not operator-rooted (and is not a lone
    /// identifier). `position` is the index of the offending prefix token.
    #[error("expression is not operator-rooted (prefix token {position})")]
    MalformedRoot { position: usize },

    /// An operator ended up with fewer than two operands.
    #[error("operator is missing an operand")]
    IncompleteExpression,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic {
            kind: LexErrorKind::UnexpectedOperator,
            position: 3,
        };
        assert_eq!(diagnostic.to_string(), "unexpected operator at position 3");
    }

    #[test]
    fn test_compile_error_display() {
        let e = CompileError::UnbalancedParentheses { depth: 1 };
        assert_eq!(e.to_string(), "unbalanced parentheses (depth 1)");
        let e = CompileError::MalformedRoot { position: 0 };
        assert_eq!(e.to_string(), "expression is not operator-rooted (prefix token 0)");
    }
}
