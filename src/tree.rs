//! Binary expression tree built from a prefix token stream.
//!
//! Nodes live in an index arena: each slot records its token plus the arena
//! indices of its parent and children. The prefix stream is consumed left
//! to right — an operator always opens its left subtree next, and a
//! finished identifier climbs back up to the nearest ancestor still missing
//! a right operand.
//!
//! A stream whose first token is not an operator only builds when it is a
//! lone identifier; anything else is rejected before folding, as is any
//! operator that ends up with fewer than two operands.

use crate::error::CompileError;
use crate::token::Token;

/// Index of a node in the tree arena.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub token: Token,
    pub parent: Option<NodeId>,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

/// Binary expression tree over an index arena. Slot 0 is the root.
#[derive(Debug, Clone)]
pub struct ExprTree {
    nodes: Vec<Node>,
}

impl ExprTree {
    pub const ROOT: NodeId = NodeId(0);

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Both children of an operator node.
    ///
    /// # Panics
    ///
    /// If the node is not a fully populated operator node. [`Self::from_prefix`]
    /// validates this, so a panic here indicates a structural defect.
    pub fn children(&self, id: NodeId) -> (NodeId, NodeId) {
        let node = self.node(id);
        match (node.left, node.right) {
            (Some(left), Some(right)) => (left, right),
            _ => panic!("operator node {:?} is missing a child", id),
        }
    }

    fn push(&mut self, token: Token, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            token,
            parent,
            left: None,
            right: None,
        });
        id
    }

    /// Every operator must have both operands before the tree is folded.
    fn validate(&self) -> Result<(), CompileError> {
        for node in &self.nodes {
            if node.token.is_operator() && (node.left.is_none() || node.right.is_none()) {
                return Err(CompileError::IncompleteExpression);
            }
        }
        Ok(())
    }

    /// Build the tree from a prefix token stream.
    pub fn from_prefix(prefix: &[Token]) -> Result<Self, CompileError> {
        let mut tree = ExprTree {
            nodes: Vec::with_capacity(prefix.len()),
        };
        let mut last: Option<NodeId> = None;

        for (position, token) in prefix.iter().enumerate() {
            debug_assert!(
                !matches!(token, Token::Open | Token::Close),
                "parentheses do not survive reordering"
            );
            let id = match last {
                None => {
                    // The root: an operator, or a lone identifier.
                    if !token.is_operator() && prefix.len() > 1 {
                        return Err(CompileError::MalformedRoot { position });
                    }
                    tree.push(token.clone(), None)
                }
                Some(last_id) if tree.node(last_id).token.is_operator() => {
                    // An operator's left subtree comes next.
                    let id = tree.push(token.clone(), Some(last_id));
                    tree.nodes[last_id.0].left = Some(id);
                    id
                }
                Some(last_id) => {
                    // A finished identifier: climb to the nearest ancestor
                    // with a free right slot.
                    let mut cursor = tree.node(last_id).parent;
                    while let Some(cur) = cursor {
                        if tree.node(cur).right.is_none() {
                            break;
                        }
                        cursor = tree.node(cur).parent;
                    }
                    let Some(cur) = cursor else {
                        return Err(CompileError::MalformedRoot { position });
                    };
                    let id = tree.push(token.clone(), Some(cur));
                    tree.nodes[cur.0].right = Some(id);
                    id
                }
            };
            last = Some(id);
        }

        if tree.is_empty() {
            return Err(CompileError::EmptyExpression);
        }
        tree.validate()?;
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::lexer::{lex, LexOptions};
    use crate::prefix::to_prefix;

    fn build(input: &str) -> Result<ExprTree, CompileError> {
        let tokens = lex(input, &LexOptions::default()).unwrap().tokens;
        ExprTree::from_prefix(&to_prefix(&tokens))
    }

    #[test]
    fn test_tree_structure() {
        // a&(b|c) reorders to `& a | b c`.
        let tree = build("a&(b|c)").unwrap();
        assert_eq!(tree.len(), 5);

        let root = tree.node(ExprTree::ROOT);
        assert_eq!(root.token, Token::And);
        assert_eq!(root.parent, None);

        let (left, right) = tree.children(ExprTree::ROOT);
        assert_eq!(tree.node(left).token, Token::ident("a"));
        assert_eq!(tree.node(right).token, Token::Or);

        let (b, c) = tree.children(right);
        assert_eq!(tree.node(b).token, Token::ident("b"));
        assert_eq!(tree.node(c).token, Token::ident("c"));
        assert_eq!(tree.node(b).parent, Some(right));
    }

    #[test]
    fn test_tree_climbs_past_filled_ancestors() {
        // a&(b|c)&(d|e) reorders to `& a & | b c | d e`; the second OR group
        // must attach to the inner AND after the first group is complete.
        let tree = build("a&(b|c)&(d|e)").unwrap();
        let (a, inner) = tree.children(ExprTree::ROOT);
        assert_eq!(tree.node(a).token, Token::ident("a"));
        assert_eq!(tree.node(inner).token, Token::And);
        let (first, second) = tree.children(inner);
        assert_eq!(tree.node(first).token, Token::Or);
        assert_eq!(tree.node(second).token, Token::Or);
    }

    #[test]
    fn test_single_identifier() {
        let tree = build("a").unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.node(ExprTree::ROOT).token, Token::ident("a"));
        assert_eq!(tree.node(ExprTree::ROOT).left, None);
        assert_eq!(tree.node(ExprTree::ROOT).right, None);
    }

    #[test]
    fn test_empty_stream() {
        assert_eq!(
            ExprTree::from_prefix(&[]).unwrap_err(),
            CompileError::EmptyExpression
        );
    }

    #[test]
    fn test_identifier_rooted_stream_is_rejected() {
        let prefix = vec![Token::ident("a"), Token::ident("b")];
        assert_eq!(
            ExprTree::from_prefix(&prefix).unwrap_err(),
            CompileError::MalformedRoot { position: 0 }
        );
    }

    #[test]
    fn test_trailing_operator() {
        assert_eq!(build("a&").unwrap_err(), CompileError::IncompleteExpression);
    }

    #[test]
    fn test_leading_operator() {
        assert_eq!(build("&a").unwrap_err(), CompileError::IncompleteExpression);
    }

    #[test]
    fn test_extra_operand_is_rejected() {
        // `& a b c` has nowhere to hang the second identifier.
        let prefix = vec![
            Token::And,
            Token::ident("a"),
            Token::ident("b"),
            Token::ident("c"),
        ];
        assert_eq!(
            ExprTree::from_prefix(&prefix).unwrap_err(),
            CompileError::MalformedRoot { position: 3 }
        );
    }
}
