//! Character classes and tokens for boolean identifier expressions.
//!
//! The token alphabet is deliberately small: identifiers, the two binary
//! operators `&` and `|`, and parentheses. Identifiers are opaque — any
//! maximal run of characters outside the operator/parenthesis alphabet and
//! whitespace forms one identifier, so `02.50` and `02:50` are both single
//! tokens.

use std::fmt;

/// Classification of a single input character, as seen by the lexer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum CharClass {
    /// Part of an identifier run.
    Ident,
    /// `&` or `|`.
    Op,
    /// `(`.
    Open,
    /// `)`.
    Close,
    /// Whitespace or a control character; never valid in an expression.
    Other,
    /// End of input.
    Eof,
}

/// Classify one character.
pub fn classify(c: char) -> CharClass {
    match c {
        '&' | '|' => CharClass::Op,
        '(' => CharClass::Open,
        ')' => CharClass::Close,
        c if c.is_whitespace() || c.is_control() => CharClass::Other,
        _ => CharClass::Ident,
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Token {
    Ident(String),
    And,
    Or,
    Open,
    Close,
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(self, Token::And | Token::Or)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Token::Ident(name.into())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(name) => write!(f, "{}", name),
            Token::And => write!(f, "&"),
            Token::Or => write!(f, "|"),
            Token::Open => write!(f, "("),
            Token::Close => write!(f, ")"),
        }
    }
}
