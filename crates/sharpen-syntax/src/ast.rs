//! Typed views over `SyntaxNode`.
//!
//! Each view wraps a node of a known kind and exposes its parts by role.
//! Views are cheap to create and never own more than the node cursor.

use crate::green::{GreenElement, GreenNode};
use crate::node::{SyntaxNode, SyntaxToken};
use crate::SyntaxKind;
use std::ops::Deref;

/// Dotted text of a name or member-access chain (`System.AttributeTargets.Class`).
///
/// Returns `None` for anything that is not built purely from identifiers.
pub fn dotted_name(node: &SyntaxNode) -> Option<String> {
    match node.kind() {
        SyntaxKind::IdentifierName => node
            .first_token_of_kind(SyntaxKind::IdentifierToken)
            .map(|token| token.text().to_string()),
        SyntaxKind::QualifiedName | SyntaxKind::SimpleMemberAccessExpression => {
            let mut parts = node.children();
            let left = dotted_name(&parts.next()?)?;
            let right = dotted_name(&parts.next()?)?;
            Some(format!("{left}.{right}"))
        }
        _ => None,
    }
}

/// Class, struct or interface declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDeclaration(SyntaxNode);

impl TypeDeclaration {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        node.kind().is_type_declaration().then_some(TypeDeclaration(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn kind(&self) -> SyntaxKind {
        self.0.kind()
    }

    pub fn identifier(&self) -> Option<SyntaxToken> {
        self.0.first_token_of_kind(SyntaxKind::IdentifierToken)
    }

    pub fn name(&self) -> Option<String> {
        self.identifier().map(|token| token.text().to_string())
    }

    pub fn attribute_lists(&self) -> Vec<AttributeList> {
        self.0.children().filter_map(AttributeList::cast).collect()
    }

    pub fn base_list(&self) -> Option<BaseList> {
        self.0.children().find_map(BaseList::cast)
    }

    /// Nested methods and type declarations.
    pub fn members(&self) -> Vec<SyntaxNode> {
        self.0
            .children()
            .filter(|child| {
                child.kind() == SyntaxKind::MethodDeclaration || child.kind().is_type_declaration()
            })
            .collect()
    }

    /// A copy of this declaration's green node with `lists` appended after the
    /// existing attribute lists. No check is made for equivalent lists.
    pub fn add_attribute_lists<I>(&self, lists: I) -> GreenNode
    where
        I: IntoIterator<Item = GreenNode>,
    {
        let insert_at = self
            .0
            .green()
            .children()
            .iter()
            .rposition(|child| child.kind() == SyntaxKind::AttributeList)
            .map_or(0, |index| index + 1);
        self.0
            .green()
            .splice_children(insert_at..insert_at, lists.into_iter().map(GreenElement::Node))
    }
}

/// A `TypeDeclaration` known to be a class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassDeclaration(TypeDeclaration);

impl ClassDeclaration {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::ClassDeclaration)
            .then(|| ClassDeclaration(TypeDeclaration(node)))
    }
}

impl Deref for ClassDeclaration {
    type Target = TypeDeclaration;

    fn deref(&self) -> &TypeDeclaration {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseList(SyntaxNode);

impl BaseList {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::BaseList).then_some(BaseList(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn types(&self) -> Vec<SimpleBaseType> {
        self.0.children().filter_map(SimpleBaseType::cast).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimpleBaseType(SyntaxNode);

impl SimpleBaseType {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::SimpleBaseType).then_some(SimpleBaseType(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    /// The type name (`IdentifierName` or `QualifiedName`).
    pub fn ty(&self) -> Option<SyntaxNode> {
        self.0.first_child()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttributeList(SyntaxNode);

impl AttributeList {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::AttributeList).then_some(AttributeList(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn attributes(&self) -> Vec<Attribute> {
        self.0.children().filter_map(Attribute::cast).collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute(SyntaxNode);

impl Attribute {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::Attribute).then_some(Attribute(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn name(&self) -> Option<SyntaxNode> {
        self.0.first_child()
    }

    /// Argument expressions, in order.
    pub fn arguments(&self) -> Vec<SyntaxNode> {
        self.0
            .first_child_of_kind(SyntaxKind::AttributeArgumentList)
            .map(|list| {
                list.children()
                    .filter(|child| child.kind() == SyntaxKind::AttributeArgument)
                    .filter_map(|argument| argument.first_child())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// `left = right`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentExpression(SyntaxNode);

impl AssignmentExpression {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::SimpleAssignmentExpression).then_some(AssignmentExpression(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn left(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn right(&self) -> Option<SyntaxNode> {
        self.0.children().nth(1)
    }
}

/// `expression.Name`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemberAccessExpression(SyntaxNode);

impl MemberAccessExpression {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::SimpleMemberAccessExpression)
            .then_some(MemberAccessExpression(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    /// The receiver expression.
    pub fn expression(&self) -> Option<SyntaxNode> {
        self.0.children().next()
    }

    pub fn name(&self) -> Option<String> {
        self.0.children().nth(1).as_ref().and_then(dotted_name)
    }
}

/// String or numeric literal expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralExpression(SyntaxNode);

impl LiteralExpression {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        matches!(
            node.kind(),
            SyntaxKind::StringLiteralExpression | SyntaxKind::NumericLiteralExpression
        )
        .then_some(LiteralExpression(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn token(&self) -> Option<SyntaxToken> {
        self.0.child_tokens().find(|token| !token.kind().is_trivia())
    }

    pub fn is_string(&self) -> bool {
        self.token()
            .is_some_and(|token| token.kind() == SyntaxKind::StringLiteralToken)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamespaceDeclaration(SyntaxNode);

impl NamespaceDeclaration {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::NamespaceDeclaration).then_some(NamespaceDeclaration(node))
    }

    pub fn syntax(&self) -> &SyntaxNode {
        &self.0
    }

    pub fn name(&self) -> Option<String> {
        self.0
            .children()
            .find(|child| {
                matches!(
                    child.kind(),
                    SyntaxKind::IdentifierName | SyntaxKind::QualifiedName
                )
            })
            .as_ref()
            .and_then(dotted_name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsingDirective(SyntaxNode);

impl UsingDirective {
    pub fn cast(node: SyntaxNode) -> Option<Self> {
        (node.kind() == SyntaxKind::UsingDirective).then_some(UsingDirective(node))
    }

    pub fn name(&self) -> Option<String> {
        self.0.first_child().as_ref().and_then(dotted_name)
    }
}

/// Namespace names enclosing `node`, outermost first, joined with dots.
pub fn containing_namespace(node: &SyntaxNode) -> Option<String> {
    let mut parts: Vec<String> = node
        .ancestors()
        .skip(1)
        .filter_map(NamespaceDeclaration::cast)
        .filter_map(|namespace| namespace.name())
        .collect();
    if parts.is_empty() {
        return None;
    }
    parts.reverse();
    Some(parts.join("."))
}

#[cfg(test)]
#[path = "../tests/ast_tests.rs"]
mod ast_tests;
