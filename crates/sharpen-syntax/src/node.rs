//! Red layer: positioned cursors over green trees.
//!
//! A `SyntaxNode` pairs a green node with its absolute offset and a handle to
//! its parent cursor. Parent links exist only in this layer, are created on
//! demand while walking down from a root, and are never stored in green data,
//! so a green subtree can be shared by any number of trees.

use crate::green::{GreenElement, GreenNode, GreenToken};
use crate::SyntaxKind;
use sharpen_common::Span;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

struct NodeData {
    green: GreenNode,
    offset: u32,
    parent: Option<SyntaxNode>,
    index_in_parent: usize,
}

/// A node of a concrete tree, with position and parent.
#[derive(Clone)]
pub struct SyntaxNode(Arc<NodeData>);

/// A token of a concrete tree, with position and parent.
#[derive(Clone)]
pub struct SyntaxToken {
    green: GreenToken,
    offset: u32,
    parent: SyntaxNode,
    index_in_parent: usize,
}

/// A child of a `SyntaxNode`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyntaxElement {
    Node(SyntaxNode),
    Token(SyntaxToken),
}

impl SyntaxElement {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            SyntaxElement::Node(node) => node.kind(),
            SyntaxElement::Token(token) => token.kind(),
        }
    }

    pub fn full_span(&self) -> Span {
        match self {
            SyntaxElement::Node(node) => node.full_span(),
            SyntaxElement::Token(token) => token.span(),
        }
    }

    pub fn into_node(self) -> Option<SyntaxNode> {
        match self {
            SyntaxElement::Node(node) => Some(node),
            SyntaxElement::Token(_) => None,
        }
    }

    pub fn into_token(self) -> Option<SyntaxToken> {
        match self {
            SyntaxElement::Node(_) => None,
            SyntaxElement::Token(token) => Some(token),
        }
    }
}

impl SyntaxNode {
    pub fn new_root(green: GreenNode) -> SyntaxNode {
        SyntaxNode(Arc::new(NodeData {
            green,
            offset: 0,
            parent: None,
            index_in_parent: 0,
        }))
    }

    fn new_child(green: GreenNode, offset: u32, parent: SyntaxNode, index: usize) -> SyntaxNode {
        SyntaxNode(Arc::new(NodeData {
            green,
            offset,
            parent: Some(parent),
            index_in_parent: index,
        }))
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.green.kind()
    }

    #[inline]
    pub fn green(&self) -> &GreenNode {
        &self.0.green
    }

    #[inline]
    pub fn parent(&self) -> Option<SyntaxNode> {
        self.0.parent.clone()
    }

    /// Position of this node among its parent's children (tokens included).
    #[inline]
    pub fn index(&self) -> usize {
        self.0.index_in_parent
    }

    /// The root of the tree this cursor belongs to.
    pub fn root(&self) -> SyntaxNode {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Span including leading and trailing trivia.
    pub fn full_span(&self) -> Span {
        Span::new(self.0.offset, self.0.green.width())
    }

    /// Span from the first to the last non-trivia token.
    pub fn span(&self) -> Span {
        match (self.first_token(), self.last_token()) {
            (Some(first), Some(last)) => Span::from_bounds(first.span().start, last.span().end()),
            _ => Span::at(self.0.offset),
        }
    }

    pub fn text(&self) -> String {
        self.0.green.text()
    }

    pub fn children_with_tokens(&self) -> Vec<SyntaxElement> {
        let mut offset = self.0.offset;
        let mut elements = Vec::with_capacity(self.0.green.children().len());
        for (index, child) in self.0.green.children().iter().enumerate() {
            let element = match child {
                GreenElement::Node(green) => SyntaxElement::Node(SyntaxNode::new_child(
                    green.clone(),
                    offset,
                    self.clone(),
                    index,
                )),
                GreenElement::Token(green) => SyntaxElement::Token(SyntaxToken {
                    green: green.clone(),
                    offset,
                    parent: self.clone(),
                    index_in_parent: index,
                }),
            };
            offset += child.width();
            elements.push(element);
        }
        elements
    }

    pub fn children(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        let mut offset = self.0.offset;
        self.0
            .green
            .children()
            .iter()
            .enumerate()
            .filter_map(move |(index, child)| {
                let start = offset;
                offset += child.width();
                child
                    .as_node()
                    .map(|green| SyntaxNode::new_child(green.clone(), start, self.clone(), index))
            })
    }

    /// Tokens that are direct children of this node.
    pub fn child_tokens(&self) -> impl Iterator<Item = SyntaxToken> + use<> {
        self.children_with_tokens()
            .into_iter()
            .filter_map(SyntaxElement::into_token)
    }

    pub fn first_child(&self) -> Option<SyntaxNode> {
        self.children().next()
    }

    pub fn first_child_of_kind(&self, kind: SyntaxKind) -> Option<SyntaxNode> {
        self.children().find(|child| child.kind() == kind)
    }

    pub fn first_token_of_kind(&self, kind: SyntaxKind) -> Option<SyntaxToken> {
        self.child_tokens().find(|token| token.kind() == kind)
    }

    /// This node followed by its ancestors, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        std::iter::successors(Some(self.clone()), SyntaxNode::parent)
    }

    /// This node and every node below it, in preorder.
    pub fn descendants(&self) -> Descendants {
        let mut stack = SmallVec::new();
        stack.push(self.clone());
        Descendants { stack }
    }

    /// Every token under this node, trivia included, in document order.
    pub fn tokens(&self) -> Vec<SyntaxToken> {
        let mut tokens = Vec::new();
        let mut stack: Vec<SyntaxElement> = vec![SyntaxElement::Node(self.clone())];
        while let Some(element) = stack.pop() {
            match element {
                SyntaxElement::Token(token) => tokens.push(token),
                SyntaxElement::Node(node) => {
                    stack.extend(node.children_with_tokens().into_iter().rev());
                }
            }
        }
        tokens
    }

    pub fn first_token(&self) -> Option<SyntaxToken> {
        self.tokens().into_iter().find(|token| !token.kind().is_trivia())
    }

    pub fn last_token(&self) -> Option<SyntaxToken> {
        self.tokens()
            .into_iter()
            .rev()
            .find(|token| !token.kind().is_trivia())
    }

    /// The token whose full span covers `offset`, trivia included.
    ///
    /// Returns `None` when `offset` is at or past the end of this node.
    pub fn token_at_offset(&self, offset: u32) -> Option<SyntaxToken> {
        if !self.full_span().contains(offset) {
            return None;
        }

        let mut current = self.clone();
        loop {
            let child = current
                .children_with_tokens()
                .into_iter()
                .find(|child| child.full_span().contains(offset))?;
            match child {
                SyntaxElement::Token(token) => return Some(token),
                SyntaxElement::Node(node) => current = node,
            }
        }
    }

    /// Replace this node by `replacement` and return the new root.
    ///
    /// Only the ancestor chain is rebuilt; every sibling subtree of that chain
    /// is shared with the original tree. The original tree is not touched.
    pub fn replace_with(&self, replacement: GreenNode) -> GreenNode {
        let mut new_green = replacement;
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            new_green = parent
                .green()
                .replace_child(current.index(), GreenElement::Node(new_green));
            current = parent;
        }
        new_green
    }
}

// Unwinds the parent chain with a loop, so dropping a cursor deep inside a
// tree never recurses through its ancestors.
impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut parent = Arc::get_mut(&mut self.0).and_then(|data| data.parent.take());
        while let Some(mut node) = parent {
            parent = Arc::get_mut(&mut node.0).and_then(|data| data.parent.take());
        }
    }
}

impl PartialEq for SyntaxNode {
    fn eq(&self, other: &SyntaxNode) -> bool {
        self.0.offset == other.0.offset && self.0.green.ptr_eq(&other.0.green)
    }
}

impl Eq for SyntaxNode {}

impl fmt::Debug for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{}", self.kind(), self.full_span())
    }
}

impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Preorder iterator returned by [`SyntaxNode::descendants`].
pub struct Descendants {
    stack: SmallVec<[SyntaxNode; 16]>,
}

impl Iterator for Descendants {
    type Item = SyntaxNode;

    fn next(&mut self) -> Option<SyntaxNode> {
        let node = self.stack.pop()?;
        let children: SmallVec<[SyntaxNode; 8]> = node.children().collect();
        self.stack.extend(children.into_iter().rev());
        Some(node)
    }
}

impl SyntaxToken {
    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.green.kind()
    }

    #[inline]
    pub fn text(&self) -> &str {
        self.green.text()
    }

    #[inline]
    pub fn green(&self) -> &GreenToken {
        &self.green
    }

    pub fn span(&self) -> Span {
        Span::new(self.offset, self.green.width())
    }

    pub fn parent(&self) -> SyntaxNode {
        self.parent.clone()
    }

    pub fn index(&self) -> usize {
        self.index_in_parent
    }

    /// Enclosing nodes, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = SyntaxNode> + use<> {
        self.parent.ancestors()
    }

    /// The first non-trivia token starting at or after the end of this one.
    pub fn next_significant_token(&self) -> Option<SyntaxToken> {
        let end = self.span().end();
        self.parent
            .root()
            .tokens()
            .into_iter()
            .find(|token| token.span().start >= end && !token.kind().is_trivia() && token != self)
    }
}

impl PartialEq for SyntaxToken {
    fn eq(&self, other: &SyntaxToken) -> bool {
        self.offset == other.offset && self.green.ptr_eq(&other.green)
    }
}

impl Eq for SyntaxToken {}

impl fmt::Debug for SyntaxToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} {:?}", self.kind(), self.span(), self.text())
    }
}

#[cfg(test)]
#[path = "../tests/node_tests.rs"]
mod node_tests;
