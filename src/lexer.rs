//! Finite-state lexer for boolean identifier expressions.
//!
//! The lexer scans the input left to right, classifying each character and
//! feeding (state, class) pairs through a fixed transition table. The state
//! is the class of the token being accumulated; a token is emitted whenever
//! the table closes the pending run, and the boundary character is then
//! reprocessed from the start state. Disallowed transitions are recorded as
//! position-tagged [`Diagnostic`]s: the pending token is closed, the
//! offending character is skipped, and scanning resumes. Lexing is therefore
//! recoverable by default — `a&&b` produces the usable stream `a & b` plus
//! one diagnostic.
//!
//! # Example
//!
//! ```
//! use dnf_rs::lexer::{lex, LexOptions};
//! use dnf_rs::token::Token;
//!
//! let out = lex("a&(b|c)", &LexOptions::default()).unwrap();
//! assert!(out.diagnostics.is_empty());
//! assert_eq!(out.tokens[0], Token::ident("a"));
//! assert_eq!(out.tokens[1], Token::And);
//! assert_eq!(out.tokens.len(), 7);
//! ```

use log::warn;

use crate::error::{CompileError, Diagnostic, LexErrorKind};
use crate::token::{classify, CharClass, Token};

/// Lexer configuration.
#[derive(Debug, Copy, Clone)]
pub struct LexOptions {
    /// Number of recovered lexical errors tolerated before `strict` aborts.
    pub error_limit: usize,
    /// Abort with [`CompileError::TooManyLexicalErrors`] once the budget is
    /// exceeded. Off by default: diagnostics are collected, never fatal.
    pub strict: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            error_limit: 10,
            strict: false,
        }
    }
}

/// Result of a lexer run: the token stream plus recovered diagnostics.
#[derive(Debug, Clone, Default)]
pub struct LexOutput {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Lexer state: the class of the token currently being accumulated.
///
/// `Start` is entered at the beginning of the scan, after every emission,
/// and after every recovered error.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum State {
    Start,
    Ident,
    Op,
    Open,
    Close,
}

/// Outcome of one (state, class) transition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Action {
    /// Consume the character and continue in the given state.
    Goto(State),
    /// Close the pending token; the character is reprocessed from `Start`.
    Emit,
    /// End of input with nothing pending.
    Finish,
    /// Disallowed transition.
    Error(LexErrorKind),
}

/// The transition table: which class may follow which.
fn transition(state: State, class: CharClass) -> Action {
    use Action::*;
    use LexErrorKind::*;
    match state {
        State::Start => match class {
            CharClass::Ident => Goto(State::Ident),
            CharClass::Op => Goto(State::Op),
            CharClass::Open => Goto(State::Open),
            CharClass::Close => Goto(State::Close),
            CharClass::Other => Error(UnexpectedChar),
            CharClass::Eof => Finish,
        },
        State::Ident => match class {
            CharClass::Ident => Goto(State::Ident),
            CharClass::Op | CharClass::Close | CharClass::Eof => Emit,
            CharClass::Open => Error(UnexpectedOpening),
            CharClass::Other => Error(UnexpectedChar),
        },
        State::Op => match class {
            CharClass::Ident | CharClass::Open | CharClass::Eof => Emit,
            CharClass::Op => Error(UnexpectedOperator),
            CharClass::Close => Error(UnexpectedClosing),
            CharClass::Other => Error(UnexpectedChar),
        },
        State::Open => match class {
            CharClass::Ident | CharClass::Open | CharClass::Eof => Emit,
            CharClass::Op => Error(UnexpectedOperator),
            CharClass::Close => Error(UnexpectedClosing),
            CharClass::Other => Error(UnexpectedChar),
        },
        State::Close => match class {
            CharClass::Op | CharClass::Close | CharClass::Eof => Emit,
            CharClass::Ident => Error(UnexpectedIdent),
            CharClass::Open => Error(UnexpectedOpening),
            CharClass::Other => Error(UnexpectedChar),
        },
    }
}

/// Materialize the pending run as a token.
fn emit(state: State, text: &str) -> Token {
    match state {
        State::Ident => Token::Ident(text.to_string()),
        State::Op => match text {
            "&" => Token::And,
            "|" => Token::Or,
            _ => unreachable!("operator runs are single characters"),
        },
        State::Open => Token::Open,
        State::Close => Token::Close,
        State::Start => unreachable!("nothing is pending in the start state"),
    }
}

/// Tokenize `input`.
///
/// Errors only in strict mode, once the diagnostic count exceeds the
/// configured budget. Otherwise every recovered error lands in
/// [`LexOutput::diagnostics`] and is also logged through the `log` facade.
pub fn lex(input: &str, options: &LexOptions) -> Result<LexOutput, CompileError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut out = LexOutput::default();
    let mut state = State::Start;
    // Byte offset where the pending token begins.
    let mut start = 0;
    let mut i = 0;

    loop {
        let (pos, class) = match chars.get(i) {
            Some(&(pos, c)) => (pos, classify(c)),
            None => (input.len(), CharClass::Eof),
        };
        match transition(state, class) {
            Action::Goto(next) => {
                state = next;
                i += 1;
            }
            Action::Emit => {
                out.tokens.push(emit(state, &input[start..pos]));
                state = State::Start;
                start = pos;
            }
            Action::Finish => break,
            Action::Error(kind) => {
                let diagnostic = Diagnostic { kind, position: pos };
                warn!("{} in {:?}", diagnostic, input);
                out.diagnostics.push(diagnostic);
                if options.strict && out.diagnostics.len() > options.error_limit {
                    return Err(CompileError::TooManyLexicalErrors {
                        count: out.diagnostics.len(),
                    });
                }
                // Close the pending token, skip the offending character,
                // and resynchronize from the start state.
                if state != State::Start {
                    out.tokens.push(emit(state, &input[start..pos]));
                }
                state = State::Start;
                i += 1;
                start = chars.get(i).map_or(input.len(), |&(p, _)| p);
            }
        }
    }

    Ok(out)
}
