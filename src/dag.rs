//! Folding the expression tree into a DAG of identifier successor lists.
//!
//! The DAG maps each identifier to the ordered list of identifiers that may
//! follow it in a clause. OR contributes branching: the fold result of an
//! OR node is the concatenation of both operand results, one entry per
//! alternative. AND contributes sequencing: every leaf reachable from the
//! left operand is redirected to continue into the right operand's entry
//! nodes, so all branches share the right-hand tail instead of duplicating
//! it structurally. The fold's top-level result is the ordered set of entry
//! nodes ([`Dag::roots`]); with a plain conjunction that is a single node,
//! with a top-level disjunction there is one entry per alternative.
//!
//! # Example
//!
//! ```
//! use dnf_rs::compile::{compile, Options};
//!
//! let compiled = compile("a&(b|c)&(d|e)", &Options::default()).unwrap();
//! let dag = compiled.dag();
//! assert_eq!(dag.roots(), ["a"]);
//! assert_eq!(dag.successors("a").unwrap(), ["b", "c"]);
//! assert_eq!(dag.successors("b").unwrap(), ["d", "e"]);
//! assert!(dag.is_terminal("e"));
//! ```

use std::collections::HashMap;

use log::debug;
use num_bigint::BigUint;

use crate::token::Token;
use crate::tree::{ExprTree, NodeId};

/// The folded DAG: ordered successor lists keyed by identifier, plus the
/// ordered entry nodes produced by the top of the fold.
///
/// An identifier absent from the successor map is a terminal; a clause is
/// one walk from an entry node down to a terminal.
#[derive(Debug, Clone, Default)]
pub struct Dag {
    edges: HashMap<String, Vec<String>>,
    roots: Vec<String>,
}

impl Dag {
    /// Fold an expression tree bottom-up into a DAG.
    pub fn fold(tree: &ExprTree) -> Dag {
        let mut folder = Folder {
            edges: HashMap::new(),
        };
        let roots = folder.walk(tree, ExprTree::ROOT);

        // Pure leaves stay reachable as successor values but need no entry
        // of their own.
        folder.edges.retain(|_, successors| !successors.is_empty());

        // Entry nodes must not be reachable from inside the graph.
        for root in &roots {
            debug_assert!(
                !folder.edges.values().any(|successors| successors.contains(root)),
                "dag root {:?} is referenced as a successor",
                root
            );
        }

        debug!(
            "folded tree of {} nodes into dag with {} internal nodes and {} roots",
            tree.len(),
            folder.edges.len(),
            roots.len()
        );
        Dag {
            edges: folder.edges,
            roots,
        }
    }

    /// Ordered entry nodes of the DAG.
    pub fn roots(&self) -> &[String] {
        &self.roots
    }

    /// Successors of a node, in branch order. `None` marks a terminal.
    pub fn successors(&self, name: &str) -> Option<&[String]> {
        self.edges.get(name).map(Vec::as_slice)
    }

    pub fn is_terminal(&self, name: &str) -> bool {
        !self.edges.contains_key(name)
    }

    /// Number of internal nodes.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate internal nodes and their successor lists (unordered).
    pub fn internal_nodes(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges
            .iter()
            .map(|(name, successors)| (name.as_str(), successors.as_slice()))
    }

    /// Total number of root-to-leaf paths, without enumerating them.
    ///
    /// Clause counts are products of OR-group sizes and outgrow machine
    /// integers quickly, hence the big integer.
    pub fn count_clauses(&self) -> BigUint {
        let mut cache: HashMap<&str, BigUint> = HashMap::new();
        self.roots
            .iter()
            .map(|root| self.count_from(root, &mut cache))
            .sum()
    }

    fn count_from<'a>(&'a self, node: &'a str, cache: &mut HashMap<&'a str, BigUint>) -> BigUint {
        if let Some(count) = cache.get(node) {
            return count.clone();
        }
        let count = match self.successors(node) {
            None | Some([]) => BigUint::from(1u32),
            Some(successors) => successors.iter().map(|s| self.count_from(s, cache)).sum(),
        };
        cache.insert(node, count.clone());
        count
    }
}

struct Folder {
    edges: HashMap<String, Vec<String>>,
}

impl Folder {
    /// Post-order walk returning the entry tuple of the subtree: the single
    /// identifier of a leaf, the concatenation of both operand tuples for
    /// OR, the left tuple for AND. The right subtree is evaluated first.
    fn walk(&mut self, tree: &ExprTree, id: NodeId) -> Vec<String> {
        match &tree.node(id).token {
            Token::Ident(name) => {
                // Every identifier gets a (possibly still empty) entry.
                self.edges.entry(name.clone()).or_default();
                vec![name.clone()]
            }
            Token::Or => {
                let (left_id, right_id) = tree.children(id);
                let right = self.walk(tree, right_id);
                let mut left = self.walk(tree, left_id);
                left.extend(right);
                left
            }
            Token::And => {
                let (left_id, right_id) = tree.children(id);
                let right = self.walk(tree, right_id);
                let left = self.walk(tree, left_id);
                // Redirect every leaf reachable from the left side into the
                // right side's entry nodes. Redirection may only ever hit
                // genuine leaves; anything else is a structural defect.
                for entry in &left {
                    for leaf in self.leaves_of(entry) {
                        let successors = self.edges.entry(leaf).or_default();
                        debug_assert!(
                            successors.is_empty(),
                            "redirection target must be a genuine leaf"
                        );
                        *successors = right.clone();
                    }
                }
                left
            }
            Token::Open | Token::Close => {
                unreachable!("parentheses do not reach the fold")
            }
        }
    }

    /// All terminal identifiers reachable from `name` in the dag so far.
    fn leaves_of(&self, name: &str) -> Vec<String> {
        match self.edges.get(name) {
            Some(successors) if !successors.is_empty() => successors
                .iter()
                .flat_map(|successor| self.leaves_of(successor))
                .collect(),
            _ => vec![name.to_string()],
        }
    }
}
