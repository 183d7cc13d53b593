//! Iterator over root-to-leaf paths in a clause DAG.
//!
//! Each path is one conjunctive clause: an ordered tuple of identifiers
//! obtained by walking from an entry node down to a terminal, taking every
//! branch in successor order. The traversal is depth-first, left to right,
//! and deterministic; re-running the same compilation yields the same
//! sequence.
//!
//! # Example
//!
//! ```
//! use dnf_rs::compile::{compile, Options};
//!
//! let compiled = compile("a&(b|c)", &Options::default()).unwrap();
//! let clauses: Vec<_> = compiled.dag().clauses().collect();
//! assert_eq!(clauses, vec![vec!["a", "b"], vec!["a", "c"]]);
//! ```
//!
//! # Performance
//!
//! The iterator keeps a single shared path vector that grows and shrinks
//! with the traversal; a clause is only materialized when a terminal is
//! reached. The number of clauses is the product of the OR-group sizes, so
//! it can be exponential in the input size.

use crate::dag::Dag;

impl Dag {
    /// Returns an iterator over every clause of the DAG, one ordered tuple
    /// of identifiers per root-to-leaf path.
    pub fn clauses(&self) -> Clauses<'_> {
        Clauses {
            dag: self,
            next_root: 0,
            stack: Vec::new(),
            current_path: Vec::new(),
        }
    }

    /// The union of every clause, in first-visit depth-first order with
    /// duplicates removed, as one combined tuple.
    pub fn combined_clause(&self) -> Vec<String> {
        let mut combined: Vec<String> = Vec::new();
        for clause in self.clauses() {
            for name in clause {
                if !combined.contains(&name) {
                    combined.push(name);
                }
            }
        }
        combined
    }
}

/// Frame on the exploration stack.
#[derive(Debug)]
struct Frame<'a> {
    /// The node being explored.
    node: &'a str,
    /// Index of the next successor branch to explore.
    next_child: usize,
}

/// An iterator over the clauses of a [`Dag`], created by [`Dag::clauses`].
///
/// Uses depth-first traversal with backtracking: the stack records which
/// branch of each node to explore next, and the current path is a single
/// vector that is pushed and popped as the traversal descends and returns.
pub struct Clauses<'a> {
    dag: &'a Dag,
    /// Index of the next entry node to start from once the stack drains.
    next_root: usize,
    stack: Vec<Frame<'a>>,
    current_path: Vec<&'a str>,
}

impl Iterator for Clauses<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                // Begin the walk from the next entry node, if any remain.
                let root = self.dag.roots().get(self.next_root)?;
                self.next_root += 1;
                self.current_path.clear();
                self.current_path.push(root.as_str());
                self.stack.push(Frame {
                    node: root.as_str(),
                    next_child: 0,
                });
                continue;
            };
            let node = frame.node;

            match self.dag.successors(node) {
                // Terminal: the accumulated path is one complete clause.
                None | Some([]) => {
                    let clause = self.current_path.iter().map(|name| name.to_string()).collect();
                    self.stack.pop();
                    self.current_path.pop();
                    return Some(clause);
                }
                Some(successors) => {
                    if let Some(child) = successors.get(frame.next_child) {
                        frame.next_child += 1;
                        self.current_path.push(child.as_str());
                        self.stack.push(Frame {
                            node: child.as_str(),
                            next_child: 0,
                        });
                    } else {
                        // Every branch explored: backtrack.
                        self.stack.pop();
                        self.current_path.pop();
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use num_bigint::BigUint;

    use crate::lexer::{lex, LexOptions};
    use crate::prefix::to_prefix;
    use crate::tree::ExprTree;

    fn dag(input: &str) -> Dag {
        let tokens = lex(input, &LexOptions::default()).unwrap().tokens;
        let tree = ExprTree::from_prefix(&to_prefix(&tokens)).unwrap();
        Dag::fold(&tree)
    }

    fn clauses(input: &str) -> Vec<Vec<String>> {
        dag(input).clauses().collect()
    }

    #[test]
    fn test_pure_conjunction_is_one_clause() {
        assert_eq!(clauses("a&b&c"), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_pure_disjunction_is_one_singleton_per_identifier() {
        assert_eq!(clauses("a|b|c"), vec![vec!["a"], vec!["b"], vec!["c"]]);
    }

    #[test]
    fn test_distribution_over_one_group() {
        assert_eq!(
            clauses("a&(b|c)&d"),
            vec![vec!["a", "b", "d"], vec!["a", "c", "d"]]
        );
    }

    #[test]
    fn test_distribution_over_two_groups() {
        assert_eq!(
            clauses("a&(b|c)&(d|e)"),
            vec![
                vec!["a", "b", "d"],
                vec!["a", "b", "e"],
                vec!["a", "c", "d"],
                vec!["a", "c", "e"],
            ]
        );
    }

    #[test]
    fn test_nested_group_stays_together() {
        assert_eq!(
            clauses("a&(b|(c&o))&(d|e)"),
            vec![
                vec!["a", "b", "d"],
                vec!["a", "b", "e"],
                vec!["a", "c", "o", "d"],
                vec!["a", "c", "o", "e"],
            ]
        );
    }

    #[test]
    fn test_group_rooted_product() {
        assert_eq!(
            clauses("(a|b)&jp&(bc|cp)"),
            vec![
                vec!["a", "jp", "bc"],
                vec!["a", "jp", "cp"],
                vec!["b", "jp", "bc"],
                vec!["b", "jp", "cp"],
            ]
        );
    }

    #[test]
    fn test_and_outranks_or() {
        assert_eq!(clauses("a&b|c"), vec![vec!["a", "b"], vec!["c"]]);
        assert_eq!(clauses("aa&bb|cc"), vec![vec!["aa", "bb"], vec!["cc"]]);
    }

    #[test]
    fn test_parenthesization_is_idempotent() {
        assert_eq!(clauses("(a|b)"), clauses("a|b"));
        assert_eq!(clauses("((a&b))"), clauses("a&b"));
    }

    #[test]
    fn test_punctuated_identifiers() {
        assert_eq!(
            clauses("(049&(02.50|02:50))"),
            vec![vec!["049", "02.50"], vec!["049", "02:50"]]
        );
    }

    #[test]
    fn test_single_identifier() {
        assert_eq!(clauses("a"), vec![vec!["a"]]);
    }

    #[test]
    fn test_count_matches_enumeration() {
        for input in ["a", "a|b|c", "a&(b|c)&(d|e)", "(a|b)&jp&(bc|cp)", "a&b|c"] {
            let dag = dag(input);
            let enumerated = dag.clauses().count();
            assert_eq!(dag.count_clauses(), BigUint::from(enumerated), "input {:?}", input);
        }
    }

    #[test]
    fn test_combined_clause() {
        assert_eq!(dag("(a|b)").combined_clause(), vec!["a", "b"]);
    }

    #[test]
    fn test_combined_clause_dedupes_shared_tails() {
        // Per-branch clauses (a,b,d) and (a,c,d) union to (a,b,d,c).
        assert_eq!(dag("a&(b|c)&d").combined_clause(), vec!["a", "b", "d", "c"]);
    }
}
