//! Whitespace formatting for syntax trees.
//!
//! The formatter only rewrites trivia: every significant token keeps its
//! kind, text and order. Layout rules:
//! - members inside `{ }` go on their own lines, indented one level
//! - empty bodies render as `{}`
//! - attribute lists go on their own line unless configured otherwise
//! - tokens are otherwise separated by single spaces, with no space around
//!   `.` or before `,` `;` `(` `)` `]`

use serde::{Deserialize, Serialize};
use sharpen_syntax::{GreenElement, GreenNode, GreenToken, SyntaxKind, SyntaxNode, SyntaxToken};

/// Formatting options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormattingOptions {
    /// Spaces per indentation level.
    pub indent_size: u32,
    /// Indent with spaces instead of tabs.
    pub insert_spaces: bool,
    /// Line terminator.
    pub new_line: String,
    /// Put each attribute list on its own line.
    pub attribute_lists_on_own_line: bool,
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            indent_size: 4,
            insert_spaces: true,
            new_line: "\n".to_string(),
            attribute_lists_on_own_line: true,
        }
    }
}

impl FormattingOptions {
    fn indentation(&self, depth: usize) -> String {
        if self.insert_spaces {
            " ".repeat(self.indent_size as usize * depth)
        } else {
            "\t".repeat(depth)
        }
    }
}

/// Formatter service: layout normalization that leaves semantic content
/// untouched.
pub trait Formatter: Send + Sync {
    /// Return the formatted tree rooted at `root`.
    fn format(&self, root: &SyntaxNode, options: &FormattingOptions) -> GreenNode;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WhitespaceFormatter;

/// Trivia to put before a token.
enum Separator {
    None,
    Space,
    /// Line break followed by indentation at this depth.
    Line(usize),
}

impl WhitespaceFormatter {
    /// Separators for every significant token of `root`, in document order.
    fn separators(root: &SyntaxNode, options: &FormattingOptions) -> Vec<Separator> {
        let tokens: Vec<SyntaxToken> = root
            .tokens()
            .into_iter()
            .filter(|token| !token.kind().is_trivia())
            .collect();

        let mut depth = 0usize;
        let mut separators = Vec::with_capacity(tokens.len());
        let mut previous: Option<SyntaxKind> = None;
        for token in &tokens {
            let current = token.kind();
            let separator = match previous {
                None => Separator::None,
                Some(previous) => {
                    if current == SyntaxKind::CloseBraceToken {
                        if previous == SyntaxKind::OpenBraceToken {
                            Separator::None
                        } else {
                            depth = depth.saturating_sub(1);
                            Separator::Line(depth)
                        }
                    } else if previous == SyntaxKind::OpenBraceToken {
                        depth += 1;
                        Separator::Line(depth)
                    } else if current == SyntaxKind::EndOfFileToken {
                        Separator::Line(0)
                    } else {
                        Self::between(previous, current, depth, options)
                    }
                }
            };
            separators.push(separator);
            previous = Some(current);
        }
        separators
    }

    fn between(
        previous: SyntaxKind,
        current: SyntaxKind,
        depth: usize,
        options: &FormattingOptions,
    ) -> Separator {
        use SyntaxKind::*;
        match (previous, current) {
            (CloseBraceToken | SemicolonToken, _) => Separator::Line(depth),
            (CloseBracketToken, _) if options.attribute_lists_on_own_line => Separator::Line(depth),
            (CloseBracketToken, OpenBracketToken) => Separator::None,
            (DotToken | OpenParenToken | OpenBracketToken, _) => Separator::None,
            (
                _,
                DotToken | CommaToken | SemicolonToken | OpenParenToken | CloseParenToken
                | CloseBracketToken,
            ) => Separator::None,
            _ => Separator::Space,
        }
    }

    fn trivia(separator: &Separator, options: &FormattingOptions) -> Vec<GreenElement> {
        match separator {
            Separator::None => Vec::new(),
            Separator::Space => vec![GreenToken::new(SyntaxKind::Whitespace, " ").into()],
            Separator::Line(depth) => {
                let mut trivia = vec![GreenToken::new(SyntaxKind::EndOfLine, &options.new_line).into()];
                let indentation = options.indentation(*depth);
                if !indentation.is_empty() {
                    trivia.push(GreenToken::new(SyntaxKind::Whitespace, &indentation).into());
                }
                trivia
            }
        }
    }

    /// Rebuild `node` without its old trivia, inserting new trivia before
    /// each significant token.
    fn rebuild(
        node: &GreenNode,
        separators: &mut std::slice::Iter<'_, Separator>,
        options: &FormattingOptions,
    ) -> GreenNode {
        let mut children = Vec::with_capacity(node.children().len());
        for child in node.children() {
            match child {
                GreenElement::Token(token) if token.kind().is_trivia() => {}
                GreenElement::Token(token) => {
                    if let Some(separator) = separators.next() {
                        children.extend(Self::trivia(separator, options));
                    }
                    children.push(GreenElement::Token(token.clone()));
                }
                GreenElement::Node(child) => {
                    children.push(GreenElement::Node(Self::rebuild(child, separators, options)));
                }
            }
        }
        GreenNode::new(node.kind(), children)
    }
}

impl Formatter for WhitespaceFormatter {
    fn format(&self, root: &SyntaxNode, options: &FormattingOptions) -> GreenNode {
        let separators = Self::separators(root, options);
        let formatted = Self::rebuild(root.green(), &mut separators.iter(), options);
        tracing::trace!(
            tokens = separators.len(),
            width = formatted.width(),
            "formatted tree"
        );
        formatted
    }
}

#[cfg(test)]
#[path = "../tests/formatting_tests.rs"]
mod formatting_tests;
