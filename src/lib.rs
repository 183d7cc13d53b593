//! # dnf-rs: DNF clause expansion for boolean identifier expressions
//!
//! **`dnf-rs`** compiles a boolean expression over opaque identifiers,
//! combined with `&`, `|`, and parentheses, into the complete set of
//! conjunctive clauses implied by its disjunctive-normal-form expansion.
//!
//! Given `a&(b|c)&(d|e)`, it enumerates every combination obtained by
//! choosing one branch from each OR group while keeping all AND-linked
//! terms: `(a,b,d)`, `(a,b,e)`, `(a,c,d)`, `(a,c,e)`.
//!
//! ## Pipeline
//!
//! Compilation is a strict left-to-right pipeline; each stage fully
//! consumes its input before the next runs:
//!
//! 1. **[`lexer`]** — a finite-state machine over character classes turns
//!    the raw string into a token stream, with recoverable position-tagged
//!    diagnostics.
//! 2. **[`prefix`]** — a reverse scan with an operator stack rewrites the
//!    infix stream into prefix (operator-first) order; `&` binds tighter
//!    than `|`.
//! 3. **[`tree`]** — the prefix stream builds a binary expression tree in
//!    an index arena.
//! 4. **[`dag`]** — the tree folds bottom-up into a DAG in which all
//!    OR branches share their AND successor tails instead of duplicating
//!    them.
//! 5. **[`paths`]** — exhaustive depth-first traversal yields one ordered
//!    identifier tuple per root-to-leaf path.
//!
//! Identifiers are opaque: any character outside `& | ( )` and whitespace
//! belongs to an identifier run, so tokens like `02.50` or `02:50` work.
//!
//! ## Quick start
//!
//! ```rust
//! use dnf_rs::compile::{compile, Options};
//!
//! let compiled = compile("a&(b|c)&(d|e)", &Options::default()).unwrap();
//! let clauses: Vec<Vec<String>> = compiled.clauses().collect();
//!
//! assert_eq!(clauses.len(), 4);
//! assert_eq!(clauses[0], vec!["a", "b", "d"]);
//! assert_eq!(clauses[3], vec!["a", "c", "e"]);
//! ```
//!
//! ## Core components
//!
//! - **[`compile`]**: the single entry point and its options.
//! - **[`dag`]**: the folded clause DAG, with clause counting.
//! - **[`dot`]**: Graphviz visualization of the DAG.
//! - **[`batch`]**: glue for feeding a two-column tab-delimited file of
//!   named expressions through the compiler.

pub mod batch;
pub mod compile;
pub mod dag;
pub mod dot;
pub mod error;
pub mod lexer;
pub mod paths;
pub mod prefix;
pub mod token;
pub mod tree;
