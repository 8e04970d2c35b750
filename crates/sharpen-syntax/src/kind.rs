//! Syntax kinds for tokens, trivia and nodes.

use serde::{Deserialize, Serialize};

/// Kind tag carried by every green token and green node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u16)]
pub enum SyntaxKind {
    // Trivia
    Whitespace = 0,
    EndOfLine,

    // Tokens with variable text
    IdentifierToken,
    StringLiteralToken,
    NumericLiteralToken,

    // Keywords
    ClassKeyword,
    StructKeyword,
    InterfaceKeyword,
    NamespaceKeyword,
    UsingKeyword,
    PublicKeyword,
    VoidKeyword,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenBracketToken,
    CloseBracketToken,
    OpenParenToken,
    CloseParenToken,
    ColonToken,
    CommaToken,
    DotToken,
    EqualsToken,
    SemicolonToken,
    EndOfFileToken,

    // Nodes
    CompilationUnit,
    UsingDirective,
    NamespaceDeclaration,
    ClassDeclaration,
    StructDeclaration,
    InterfaceDeclaration,
    AttributeList,
    Attribute,
    AttributeArgumentList,
    AttributeArgument,
    BaseList,
    SimpleBaseType,
    MethodDeclaration,
    ParameterList,
    Block,
    ExpressionStatement,
    SimpleAssignmentExpression,
    SimpleMemberAccessExpression,
    StringLiteralExpression,
    NumericLiteralExpression,
    IdentifierName,
    QualifiedName,
}

impl SyntaxKind {
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(self, SyntaxKind::Whitespace | SyntaxKind::EndOfLine)
    }

    #[inline]
    pub fn is_token(self) -> bool {
        (self as u16) <= (SyntaxKind::EndOfFileToken as u16)
    }

    #[inline]
    pub fn is_node(self) -> bool {
        !self.is_token()
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassKeyword
                | SyntaxKind::StructKeyword
                | SyntaxKind::InterfaceKeyword
                | SyntaxKind::NamespaceKeyword
                | SyntaxKind::UsingKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::VoidKeyword
        )
    }

    /// Nodes the single-target locator descends through.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            SyntaxKind::CompilationUnit | SyntaxKind::NamespaceDeclaration
        )
    }

    pub fn is_type_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::ClassDeclaration
                | SyntaxKind::StructDeclaration
                | SyntaxKind::InterfaceDeclaration
        )
    }

    /// Fixed text of keywords and punctuation; `None` for variable tokens and nodes.
    pub fn fixed_text(self) -> Option<&'static str> {
        let text = match self {
            SyntaxKind::ClassKeyword => "class",
            SyntaxKind::StructKeyword => "struct",
            SyntaxKind::InterfaceKeyword => "interface",
            SyntaxKind::NamespaceKeyword => "namespace",
            SyntaxKind::UsingKeyword => "using",
            SyntaxKind::PublicKeyword => "public",
            SyntaxKind::VoidKeyword => "void",
            SyntaxKind::OpenBraceToken => "{",
            SyntaxKind::CloseBraceToken => "}",
            SyntaxKind::OpenBracketToken => "[",
            SyntaxKind::CloseBracketToken => "]",
            SyntaxKind::OpenParenToken => "(",
            SyntaxKind::CloseParenToken => ")",
            SyntaxKind::ColonToken => ":",
            SyntaxKind::CommaToken => ",",
            SyntaxKind::DotToken => ".",
            SyntaxKind::EqualsToken => "=",
            SyntaxKind::SemicolonToken => ";",
            SyntaxKind::EndOfFileToken => "",
            _ => return None,
        };
        Some(text)
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self, f)
    }
}
