//! The compile entry point: wires the pipeline stages together.
//!
//! Compilation is a strict left-to-right pipeline — lexical analysis,
//! parenthesis-balance check, prefix reordering, tree construction, DAG
//! folding — each stage fully consuming its input before the next runs.
//! Nothing is shared across calls, so independent compilations may run
//! concurrently.
//!
//! # Example
//!
//! ```
//! use dnf_rs::compile::{compile, Options};
//!
//! let compiled = compile("a&(b|c)&(d|e)", &Options::default()).unwrap();
//! let clauses: Vec<Vec<String>> = compiled.clauses().collect();
//! assert_eq!(clauses.len(), 4);
//! assert_eq!(clauses[0], vec!["a", "b", "d"]);
//! ```

use log::debug;

use crate::dag::Dag;
use crate::error::{CompileError, Diagnostic};
use crate::lexer::{lex, LexOptions};
use crate::paths::Clauses;
use crate::prefix::{check_balanced, to_prefix};
use crate::tree::ExprTree;

/// Compilation options.
#[derive(Debug, Copy, Clone, Default)]
pub struct Options {
    /// Merge all alternatives into one combined tuple instead of yielding
    /// one clause per branch. See [`Dag::combined_clause`] for the exact
    /// semantics.
    pub combine_or: bool,
    pub lexer: LexOptions,
}

/// A compiled expression: the folded DAG plus the lexical diagnostics
/// recovered on the way, ready for clause enumeration.
#[derive(Debug, Clone)]
pub struct Compiled {
    dag: Dag,
    diagnostics: Vec<Diagnostic>,
    combine_or: bool,
}

impl Compiled {
    pub fn dag(&self) -> &Dag {
        &self.dag
    }

    /// Lexical errors recovered during compilation, in input order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Lazily enumerate the clauses, honoring `combine_or`.
    pub fn clauses(&self) -> ClauseIter<'_> {
        let inner = if self.combine_or {
            ClauseIterInner::Combined(std::iter::once(self.dag.combined_clause()))
        } else {
            ClauseIterInner::PerBranch(self.dag.clauses())
        };
        ClauseIter { inner }
    }
}

/// Iterator over the compiled clause set, created by [`Compiled::clauses`].
pub struct ClauseIter<'a> {
    inner: ClauseIterInner<'a>,
}

enum ClauseIterInner<'a> {
    PerBranch(Clauses<'a>),
    Combined(std::iter::Once<Vec<String>>),
}

impl Iterator for ClauseIter<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ClauseIterInner::PerBranch(clauses) => clauses.next(),
            ClauseIterInner::Combined(combined) => combined.next(),
        }
    }
}

/// Compile an expression into its clause DAG.
///
/// Recovered lexical errors are collected on the returned [`Compiled`];
/// fatal errors (unbalanced parentheses, malformed structure, strict-mode
/// lexical overflow) fail the whole compilation and no partial output is
/// produced.
pub fn compile(input: &str, options: &Options) -> Result<Compiled, CompileError> {
    let lexed = lex(input, &options.lexer)?;
    debug!(
        "lexed {:?} into {} tokens with {} diagnostics",
        input,
        lexed.tokens.len(),
        lexed.diagnostics.len()
    );
    check_balanced(&lexed.tokens)?;
    let prefix = to_prefix(&lexed.tokens);
    let tree = ExprTree::from_prefix(&prefix)?;
    let dag = Dag::fold(&tree);
    Ok(Compiled {
        dag,
        diagnostics: lexed.diagnostics,
        combine_or: options.combine_or,
    })
}

/// Compile with default options and materialize the clause set.
pub fn compile_str(input: &str) -> Result<Vec<Vec<String>>, CompileError> {
    let compiled = compile(input, &Options::default())?;
    Ok(compiled.clauses().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    #[test]
    fn test_compile_str() {
        assert_eq!(
            compile_str("a&(b|c)&(d|e)").unwrap(),
            vec![
                vec!["a", "b", "d"],
                vec!["a", "b", "e"],
                vec!["a", "c", "d"],
                vec!["a", "c", "e"],
            ]
        );
    }

    #[test]
    fn test_compile_is_deterministic() {
        let input = "(a|b)&jp&(bc|cp)";
        assert_eq!(compile_str(input).unwrap(), compile_str(input).unwrap());
    }

    #[test]
    fn test_combine_or_merges_alternatives() {
        let options = Options {
            combine_or: true,
            ..Options::default()
        };
        let compiled = compile("(a|b)", &options).unwrap();
        let clauses: Vec<_> = compiled.clauses().collect();
        assert_eq!(clauses, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_combine_or_off_keeps_branches() {
        let compiled = compile("(a|b)", &Options::default()).unwrap();
        let clauses: Vec<_> = compiled.clauses().collect();
        assert_eq!(clauses, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_unbalanced_parentheses_are_fatal() {
        assert_eq!(
            compile_str("(a&b").unwrap_err(),
            CompileError::UnbalancedParentheses { depth: 1 }
        );
    }

    #[test]
    fn test_empty_input_is_fatal() {
        assert_eq!(compile_str("").unwrap_err(), CompileError::EmptyExpression);
    }

    #[test]
    fn test_incomplete_expression_is_fatal() {
        assert_eq!(compile_str("a&").unwrap_err(), CompileError::IncompleteExpression);
    }

    #[test]
    fn test_recovered_diagnostics_are_reported() {
        let compiled = compile("a&&b", &Options::default()).unwrap();
        assert_eq!(compiled.diagnostics().len(), 1);
        let clauses: Vec<_> = compiled.clauses().collect();
        assert_eq!(clauses, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_strict_lexing_is_fatal_past_budget() {
        let options = Options {
            lexer: LexOptions {
                error_limit: 0,
                strict: true,
            },
            ..Options::default()
        };
        assert_eq!(
            compile("a&&b", &options).unwrap_err(),
            CompileError::TooManyLexicalErrors { count: 1 }
        );
    }
}
