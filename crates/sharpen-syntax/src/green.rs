//! Green layer: immutable, position-free, structurally shared tree data.
//!
//! Green nodes know their kind, their width and their children; they do not
//! know their absolute offset or their parent. Cloning a green node is a
//! reference-count bump, so every "modification" builds new nodes along one
//! path and reuses all other subtrees as-is.

use crate::SyntaxKind;
use std::fmt;
use std::sync::Arc;

#[derive(PartialEq, Eq, Hash)]
struct GreenTokenData {
    kind: SyntaxKind,
    text: Box<str>,
}

/// A leaf: a kind plus its exact source text.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GreenToken(Arc<GreenTokenData>);

impl GreenToken {
    pub fn new(kind: SyntaxKind, text: &str) -> Self {
        debug_assert!(kind.is_token(), "{kind:?} is not a token kind");
        GreenToken(Arc::new(GreenTokenData {
            kind,
            text: text.into(),
        }))
    }

    /// Keyword or punctuation token with its canonical text.
    pub fn fixed(kind: SyntaxKind) -> Self {
        GreenToken::new(kind, kind.fixed_text().unwrap_or_default())
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.0.text
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.0.text.len() as u32
    }

    pub fn ptr_eq(&self, other: &GreenToken) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for GreenToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?}", self.kind(), self.text())
    }
}

#[derive(PartialEq, Eq, Hash)]
struct GreenNodeData {
    kind: SyntaxKind,
    width: u32,
    children: Vec<GreenElement>,
}

/// An interior node.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GreenNode(Arc<GreenNodeData>);

/// Either child form of a green node.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum GreenElement {
    Node(GreenNode),
    Token(GreenToken),
}

impl GreenElement {
    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        match self {
            GreenElement::Node(node) => node.kind(),
            GreenElement::Token(token) => token.kind(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        match self {
            GreenElement::Node(node) => node.width(),
            GreenElement::Token(token) => token.width(),
        }
    }

    pub fn as_node(&self) -> Option<&GreenNode> {
        match self {
            GreenElement::Node(node) => Some(node),
            GreenElement::Token(_) => None,
        }
    }

    pub fn as_token(&self) -> Option<&GreenToken> {
        match self {
            GreenElement::Node(_) => None,
            GreenElement::Token(token) => Some(token),
        }
    }

    pub fn is_trivia(&self) -> bool {
        self.kind().is_trivia()
    }
}

impl From<GreenNode> for GreenElement {
    fn from(node: GreenNode) -> Self {
        GreenElement::Node(node)
    }
}

impl From<GreenToken> for GreenElement {
    fn from(token: GreenToken) -> Self {
        GreenElement::Token(token)
    }
}

impl fmt::Debug for GreenElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GreenElement::Node(node) => node.fmt(f),
            GreenElement::Token(token) => token.fmt(f),
        }
    }
}

impl GreenNode {
    pub fn new(kind: SyntaxKind, children: Vec<GreenElement>) -> Self {
        debug_assert!(kind.is_node(), "{kind:?} is not a node kind");
        let width = children.iter().map(GreenElement::width).sum();
        GreenNode(Arc::new(GreenNodeData {
            kind,
            width,
            children,
        }))
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.0.kind
    }

    /// Total text length of this node, trivia included.
    #[inline]
    pub fn width(&self) -> u32 {
        self.0.width
    }

    #[inline]
    pub fn children(&self) -> &[GreenElement] {
        &self.0.children
    }

    /// Whether both handles point at the same shared allocation.
    pub fn ptr_eq(&self, other: &GreenNode) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// New node with the child at `index` replaced; siblings are shared.
    pub fn replace_child(&self, index: usize, new_child: GreenElement) -> GreenNode {
        let mut children = self.0.children.clone();
        children[index] = new_child;
        GreenNode::new(self.kind(), children)
    }

    /// New node with `range` of children replaced by `replace_with`.
    pub fn splice_children<I>(&self, range: std::ops::Range<usize>, replace_with: I) -> GreenNode
    where
        I: IntoIterator<Item = GreenElement>,
    {
        let mut children = self.0.children.clone();
        children.splice(range, replace_with);
        GreenNode::new(self.kind(), children)
    }

    /// Write the source text of this node into `out`.
    ///
    /// Iterative so that deeply nested trees render without recursion.
    pub fn write_text(&self, out: &mut String) {
        let mut stack: Vec<std::slice::Iter<'_, GreenElement>> = vec![self.children().iter()];
        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                Some(GreenElement::Token(token)) => out.push_str(token.text()),
                Some(GreenElement::Node(node)) => stack.push(node.children().iter()),
                None => {
                    stack.pop();
                }
            }
        }
    }

    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.width() as usize);
        self.write_text(&mut out);
        out
    }

    /// All tokens under this node in document order.
    pub fn tokens(&self) -> Vec<GreenToken> {
        let mut tokens = Vec::new();
        let mut stack: Vec<std::slice::Iter<'_, GreenElement>> = vec![self.children().iter()];
        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                Some(GreenElement::Token(token)) => tokens.push(token.clone()),
                Some(GreenElement::Node(node)) => stack.push(node.children().iter()),
                None => {
                    stack.pop();
                }
            }
        }
        tokens
    }
}

// Children of the last owner are moved onto a heap stack, so dropping a
// deeply nested tree never recurses.
impl Drop for GreenNode {
    fn drop(&mut self) {
        let Some(data) = Arc::get_mut(&mut self.0) else {
            return;
        };
        let mut stack = std::mem::take(&mut data.children);
        while let Some(element) = stack.pop() {
            if let GreenElement::Node(mut node) = element
                && let Some(data) = Arc::get_mut(&mut node.0)
            {
                stack.append(&mut data.children);
            }
        }
    }
}

impl fmt::Display for GreenNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

impl fmt::Debug for GreenNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GreenNode")
            .field("kind", &self.kind())
            .field("width", &self.width())
            .field("children", &self.children())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/green_tests.rs"]
mod green_tests;
