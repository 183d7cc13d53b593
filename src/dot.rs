//! DAG to DOT (Graphviz) conversion.
//!
//! Entry nodes are rendered as boxes, every other identifier as an ellipse;
//! edges follow successor order. Node declarations are emitted in sorted
//! order so the output is stable across runs. Render with e.g.
//! `dot -Tpng clauses.dot -o clauses.png`.
//!
//! # Example
//!
//! ```
//! use dnf_rs::compile::{compile, Options};
//!
//! let compiled = compile("a&(b|c)", &Options::default()).unwrap();
//! let dot = compiled.dag().to_dot().unwrap();
//! assert!(dot.starts_with("digraph clauses {"));
//! assert!(dot.contains("\"a\" -> \"b\";"));
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Write};

use crate::dag::Dag;

fn quoted(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\\\""))
}

impl Dag {
    /// Render the DAG in DOT format.
    pub fn to_dot(&self) -> Result<String, fmt::Error> {
        let mut names: BTreeSet<&str> = self.roots().iter().map(String::as_str).collect();
        let mut edges: BTreeMap<&str, &[String]> = BTreeMap::new();
        for (name, successors) in self.internal_nodes() {
            names.insert(name);
            edges.insert(name, successors);
            for successor in successors {
                names.insert(successor);
            }
        }

        let mut out = String::new();
        writeln!(out, "digraph clauses {{")?;
        writeln!(out, "  rankdir=LR;")?;
        for name in &names {
            let shape = if self.roots().iter().any(|root| root == name) {
                "box"
            } else {
                "ellipse"
            };
            writeln!(out, "  {} [shape={}];", quoted(name), shape)?;
        }
        for (name, successors) in &edges {
            for successor in *successors {
                writeln!(out, "  {} -> {};", quoted(name), quoted(successor))?;
            }
        }
        writeln!(out, "}}")?;
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexer::{lex, LexOptions};
    use crate::prefix::to_prefix;
    use crate::tree::ExprTree;

    fn dag(input: &str) -> Dag {
        let tokens = lex(input, &LexOptions::default()).unwrap().tokens;
        let tree = ExprTree::from_prefix(&to_prefix(&tokens)).unwrap();
        Dag::fold(&tree)
    }

    #[test]
    fn test_to_dot_shapes_and_edges() {
        let dot = dag("a&(b|c)").to_dot().unwrap();
        println!("{}", dot);
        assert!(dot.contains("\"a\" [shape=box];"));
        assert!(dot.contains("\"b\" [shape=ellipse];"));
        assert!(dot.contains("\"a\" -> \"b\";"));
        assert!(dot.contains("\"a\" -> \"c\";"));
    }

    #[test]
    fn test_to_dot_disjunction_has_only_boxes() {
        let dot = dag("a|b").to_dot().unwrap();
        assert!(dot.contains("\"a\" [shape=box];"));
        assert!(dot.contains("\"b\" [shape=box];"));
        assert!(!dot.contains("->"));
    }

    #[test]
    fn test_to_dot_is_stable() {
        let first = dag("(a|b)&jp&(bc|cp)").to_dot().unwrap();
        let second = dag("(a|b)&jp&(bc|cp)").to_dot().unwrap();
        assert_eq!(first, second);
    }
}
