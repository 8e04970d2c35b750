//! Serde representation of green trees.
//!
//! Tokens serialize as `{"kind": ..., "text": ...}` and nodes as
//! `{"kind": ..., "children": [...]}`. Workspace snapshots store trees in
//! this form.

use crate::green::{GreenElement, GreenNode, GreenToken};
use crate::SyntaxKind;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ElementRepr {
    Token {
        kind: SyntaxKind,
        text: String,
    },
    Node {
        kind: SyntaxKind,
        children: Vec<ElementRepr>,
    },
}

impl ElementRepr {
    fn from_green(element: &GreenElement) -> Self {
        match element {
            GreenElement::Token(token) => ElementRepr::Token {
                kind: token.kind(),
                text: token.text().to_string(),
            },
            GreenElement::Node(node) => ElementRepr::Node {
                kind: node.kind(),
                children: node.children().iter().map(ElementRepr::from_green).collect(),
            },
        }
    }

    fn into_green(self) -> Result<GreenElement, String> {
        match self {
            ElementRepr::Token { kind, text } => {
                if !kind.is_token() {
                    return Err(format!("{kind} is not a token kind"));
                }
                Ok(GreenToken::new(kind, &text).into())
            }
            ElementRepr::Node { kind, children } => {
                if !kind.is_node() {
                    return Err(format!("{kind} is not a node kind"));
                }
                let children = children
                    .into_iter()
                    .map(ElementRepr::into_green)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(GreenNode::new(kind, children).into())
            }
        }
    }
}

impl Serialize for GreenNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        ElementRepr::from_green(&GreenElement::Node(self.clone())).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GreenNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match ElementRepr::deserialize(deserializer)?
            .into_green()
            .map_err(D::Error::custom)?
        {
            GreenElement::Node(node) => Ok(node),
            GreenElement::Token(token) => Err(D::Error::custom(format!(
                "expected a syntax node, found token {}",
                token.kind()
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../tests/repr_tests.rs"]
mod repr_tests;
