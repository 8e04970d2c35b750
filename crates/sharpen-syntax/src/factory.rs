//! Constructors for green syntax.
//!
//! Every constructor returns a green node with single-space separation and
//! no line breaks. Layout beyond that is the formatter's job.

use crate::green::{GreenElement, GreenNode, GreenToken};
use crate::SyntaxKind;

fn token(kind: SyntaxKind) -> GreenElement {
    GreenElement::Token(GreenToken::fixed(kind))
}

fn identifier(text: &str) -> GreenElement {
    GreenElement::Token(GreenToken::new(SyntaxKind::IdentifierToken, text))
}

fn space() -> GreenElement {
    GreenElement::Token(whitespace(" "))
}

pub fn whitespace(text: &str) -> GreenToken {
    GreenToken::new(SyntaxKind::Whitespace, text)
}

pub fn end_of_line() -> GreenToken {
    GreenToken::new(SyntaxKind::EndOfLine, "\n")
}

/// Push `items` separated by `, `.
fn push_separated(children: &mut Vec<GreenElement>, items: Vec<GreenNode>) {
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            children.push(token(SyntaxKind::CommaToken));
            children.push(space());
        }
        children.push(item.into());
    }
}

pub fn identifier_name(name: &str) -> GreenNode {
    GreenNode::new(SyntaxKind::IdentifierName, vec![identifier(name)])
}

pub fn qualified_name(left: GreenNode, right: GreenNode) -> GreenNode {
    GreenNode::new(
        SyntaxKind::QualifiedName,
        vec![left.into(), token(SyntaxKind::DotToken), right.into()],
    )
}

/// Type or namespace name from dotted text: `A.B.C` becomes `QualifiedName(QualifiedName(A, B), C)`.
pub fn parse_name(dotted: &str) -> GreenNode {
    let mut segments = dotted.split('.');
    let mut name = identifier_name(segments.next().unwrap_or_default());
    for segment in segments {
        name = qualified_name(name, identifier_name(segment));
    }
    name
}

pub fn member_access(expression: GreenNode, name: &str) -> GreenNode {
    GreenNode::new(
        SyntaxKind::SimpleMemberAccessExpression,
        vec![
            expression.into(),
            token(SyntaxKind::DotToken),
            identifier_name(name).into(),
        ],
    )
}

/// Expression from dotted text: `a.b.c` becomes nested member accesses over `a`.
pub fn member_access_chain(dotted: &str) -> GreenNode {
    let mut segments = dotted.split('.');
    let mut expression = identifier_name(segments.next().unwrap_or_default());
    for segment in segments {
        expression = member_access(expression, segment);
    }
    expression
}

pub fn string_literal(value: &str) -> GreenNode {
    let mut text = String::with_capacity(value.len() + 2);
    text.push('"');
    for ch in value.chars() {
        match ch {
            '"' => text.push_str("\\\""),
            '\\' => text.push_str("\\\\"),
            '\n' => text.push_str("\\n"),
            _ => text.push(ch),
        }
    }
    text.push('"');
    GreenNode::new(
        SyntaxKind::StringLiteralExpression,
        vec![GreenToken::new(SyntaxKind::StringLiteralToken, &text).into()],
    )
}

pub fn numeric_literal(value: i64) -> GreenNode {
    GreenNode::new(
        SyntaxKind::NumericLiteralExpression,
        vec![GreenToken::new(SyntaxKind::NumericLiteralToken, &value.to_string()).into()],
    )
}

pub fn assignment(left: GreenNode, right: GreenNode) -> GreenNode {
    GreenNode::new(
        SyntaxKind::SimpleAssignmentExpression,
        vec![
            left.into(),
            space(),
            token(SyntaxKind::EqualsToken),
            space(),
            right.into(),
        ],
    )
}

pub fn expression_statement(expression: GreenNode) -> GreenNode {
    GreenNode::new(
        SyntaxKind::ExpressionStatement,
        vec![expression.into(), token(SyntaxKind::SemicolonToken)],
    )
}

pub fn attribute_argument(expression: GreenNode) -> GreenNode {
    GreenNode::new(SyntaxKind::AttributeArgument, vec![expression.into()])
}

pub fn attribute_argument_list(arguments: Vec<GreenNode>) -> GreenNode {
    let mut children = vec![token(SyntaxKind::OpenParenToken)];
    push_separated(&mut children, arguments);
    children.push(token(SyntaxKind::CloseParenToken));
    GreenNode::new(SyntaxKind::AttributeArgumentList, children)
}

pub fn attribute(name: GreenNode, arguments: Option<GreenNode>) -> GreenNode {
    let mut children = vec![name.into()];
    if let Some(arguments) = arguments {
        children.push(arguments.into());
    }
    GreenNode::new(SyntaxKind::Attribute, children)
}

pub fn attribute_list(attributes: Vec<GreenNode>) -> GreenNode {
    let mut children = vec![token(SyntaxKind::OpenBracketToken)];
    push_separated(&mut children, attributes);
    children.push(token(SyntaxKind::CloseBracketToken));
    GreenNode::new(SyntaxKind::AttributeList, children)
}

pub fn simple_base_type(ty: GreenNode) -> GreenNode {
    GreenNode::new(SyntaxKind::SimpleBaseType, vec![ty.into()])
}

/// `: A, B` from type names.
pub fn base_list(types: &[&str]) -> GreenNode {
    let mut children = vec![token(SyntaxKind::ColonToken), space()];
    push_separated(
        &mut children,
        types
            .iter()
            .map(|name| simple_base_type(parse_name(name)))
            .collect(),
    );
    GreenNode::new(SyntaxKind::BaseList, children)
}

/// `{ a b }`, or `{}` when empty.
fn braced(kind: SyntaxKind, prefix: Vec<GreenElement>, items: Vec<GreenNode>) -> GreenNode {
    let mut children = prefix;
    children.push(token(SyntaxKind::OpenBraceToken));
    let has_items = !items.is_empty();
    for item in items {
        children.push(space());
        children.push(item.into());
    }
    if has_items {
        children.push(space());
    }
    children.push(token(SyntaxKind::CloseBraceToken));
    GreenNode::new(kind, children)
}

pub fn block(statements: Vec<GreenNode>) -> GreenNode {
    braced(SyntaxKind::Block, Vec::new(), statements)
}

pub fn parameter_list() -> GreenNode {
    GreenNode::new(
        SyntaxKind::ParameterList,
        vec![
            token(SyntaxKind::OpenParenToken),
            token(SyntaxKind::CloseParenToken),
        ],
    )
}

/// `public void Name() { ... }`
pub fn method_declaration(name: &str, statements: Vec<GreenNode>) -> GreenNode {
    GreenNode::new(
        SyntaxKind::MethodDeclaration,
        vec![
            token(SyntaxKind::PublicKeyword),
            space(),
            token(SyntaxKind::VoidKeyword),
            space(),
            identifier(name),
            parameter_list().into(),
            space(),
            block(statements).into(),
        ],
    )
}

/// Builder for class, struct and interface declarations.
#[derive(Clone, Debug)]
pub struct TypeDeclarationBuilder {
    kind: SyntaxKind,
    name: String,
    attribute_lists: Vec<GreenNode>,
    public: bool,
    base_list: Option<GreenNode>,
    members: Vec<GreenNode>,
}

impl TypeDeclarationBuilder {
    fn new(kind: SyntaxKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
            attribute_lists: Vec::new(),
            public: false,
            base_list: None,
            members: Vec::new(),
        }
    }

    pub fn attribute_list(mut self, list: GreenNode) -> Self {
        self.attribute_lists.push(list);
        self
    }

    pub fn public(mut self) -> Self {
        self.public = true;
        self
    }

    /// Base types by name, e.g. `&["MyAttr", "IDisposable"]`.
    pub fn bases(mut self, types: &[&str]) -> Self {
        self.base_list = (!types.is_empty()).then(|| base_list(types));
        self
    }

    pub fn member(mut self, member: GreenNode) -> Self {
        self.members.push(member);
        self
    }

    pub fn build(self) -> GreenNode {
        let keyword = match self.kind {
            SyntaxKind::StructDeclaration => SyntaxKind::StructKeyword,
            SyntaxKind::InterfaceDeclaration => SyntaxKind::InterfaceKeyword,
            _ => SyntaxKind::ClassKeyword,
        };

        let mut prefix = Vec::new();
        for list in self.attribute_lists {
            prefix.push(list.into());
            prefix.push(space());
        }
        if self.public {
            prefix.push(token(SyntaxKind::PublicKeyword));
            prefix.push(space());
        }
        prefix.push(token(keyword));
        prefix.push(space());
        prefix.push(identifier(&self.name));
        if let Some(base_list) = self.base_list {
            prefix.push(space());
            prefix.push(base_list.into());
        }
        prefix.push(space());

        braced(self.kind, prefix, self.members)
    }
}

pub fn class_declaration(name: &str) -> TypeDeclarationBuilder {
    TypeDeclarationBuilder::new(SyntaxKind::ClassDeclaration, name)
}

pub fn struct_declaration(name: &str) -> TypeDeclarationBuilder {
    TypeDeclarationBuilder::new(SyntaxKind::StructDeclaration, name)
}

pub fn interface_declaration(name: &str) -> TypeDeclarationBuilder {
    TypeDeclarationBuilder::new(SyntaxKind::InterfaceDeclaration, name)
}

pub fn namespace_declaration(name: &str, members: Vec<GreenNode>) -> GreenNode {
    braced(
        SyntaxKind::NamespaceDeclaration,
        vec![
            token(SyntaxKind::NamespaceKeyword),
            space(),
            parse_name(name).into(),
            space(),
        ],
        members,
    )
}

pub fn using_directive(name: &str) -> GreenNode {
    GreenNode::new(
        SyntaxKind::UsingDirective,
        vec![
            token(SyntaxKind::UsingKeyword),
            space(),
            parse_name(name).into(),
            token(SyntaxKind::SemicolonToken),
        ],
    )
}

/// Usings and members, one per line, followed by the end-of-file token.
pub fn compilation_unit(usings: Vec<GreenNode>, members: Vec<GreenNode>) -> GreenNode {
    let mut children = Vec::new();
    for item in usings.into_iter().chain(members) {
        children.push(item.into());
        children.push(end_of_line().into());
    }
    children.push(token(SyntaxKind::EndOfFileToken));
    GreenNode::new(SyntaxKind::CompilationUnit, children)
}

#[cfg(test)]
#[path = "../tests/factory_tests.rs"]
mod factory_tests;
