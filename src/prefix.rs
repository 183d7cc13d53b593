//! Infix to prefix (operator-first) reordering.
//!
//! Scanning the token stream in reverse with an operator stack produces
//! polish order without materializing a tree: identifiers go straight to
//! the output, a closing parenthesis acts as a barrier, an operator first
//! pops everything on the stack that outranks it, and an opening
//! parenthesis pops back to its barrier. Reversing the accumulated output
//! yields the prefix stream. `&` binds tighter than `|`, so `a&b|c`
//! reorders as `(a&b)|c`.

use crate::error::CompileError;
use crate::token::Token;

/// Check that parentheses balance: the running depth never goes negative
/// and returns to zero at the end. Must hold before tree construction.
pub fn check_balanced(tokens: &[Token]) -> Result<(), CompileError> {
    let mut depth: i32 = 0;
    for token in tokens {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return Err(CompileError::UnbalancedParentheses { depth });
        }
    }
    if depth != 0 {
        return Err(CompileError::UnbalancedParentheses { depth });
    }
    Ok(())
}

/// True if `top` must be popped before `incoming` is pushed: equal
/// operators, or `&` above `|`.
fn outranks_or_equal(top: &Token, incoming: &Token) -> bool {
    debug_assert!(top.is_operator() && incoming.is_operator());
    !(matches!(top, Token::Or) && matches!(incoming, Token::And))
}

/// Reorder a balanced infix token stream into prefix order.
///
/// Parentheses never appear in the output. The input must already have
/// passed [`check_balanced`]; stray barrier markers are discarded rather
/// than corrupting the output.
pub fn to_prefix(tokens: &[Token]) -> Vec<Token> {
    let mut stack: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().rev() {
        match token {
            Token::Ident(_) => output.push(token.clone()),
            Token::Close => stack.push(Token::Close),
            Token::And | Token::Or => {
                while let Some(top) = stack.last() {
                    if !top.is_operator() || !outranks_or_equal(top, token) {
                        break;
                    }
                    output.push(stack.pop().expect("stack top was just inspected"));
                }
                stack.push(token.clone());
            }
            Token::Open => {
                // Pop back to the matching barrier and discard it.
                while let Some(top) = stack.pop() {
                    if top == Token::Close {
                        break;
                    }
                    output.push(top);
                }
            }
        }
    }
    while let Some(top) = stack.pop() {
        if top != Token::Close {
            output.push(top);
        }
    }

    output.reverse();
    output
}
