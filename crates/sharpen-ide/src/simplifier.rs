//! Removing redundant qualification.

use crate::document::Document;
use sharpen_common::Span;
use sharpen_symbols::SemanticModel;
use sharpen_syntax::{GreenElement, SyntaxKind, SyntaxNode, ast, factory};

/// Simplifier service: rewrites names without changing what they refer to.
pub trait Simplifier: Send + Sync {
    fn simplify(&self, document: &Document) -> Document;
}

/// Shortens qualified type names in base lists, attribute names and
/// attribute arguments to the shortest suffix that still resolves to the
/// same type from the same position.
#[derive(Clone, Copy, Debug, Default)]
pub struct QualifiedNameSimplifier;

struct Rewrite {
    span: Span,
    kind: SyntaxKind,
    replacement: String,
}

impl QualifiedNameSimplifier {
    fn rewrites(model: &SemanticModel<'_>, root: &SyntaxNode) -> Vec<Rewrite> {
        let mut rewrites = Vec::new();
        for node in root.descendants() {
            let Some(attribute) = Self::candidate(&node) else {
                continue;
            };
            let Some(dotted) = ast::dotted_name(&node) else {
                continue;
            };
            let Some(target) = model.resolve_type_name(&dotted, &node, attribute) else {
                continue;
            };

            // Shortest suffix first.
            let segments: Vec<&str> = dotted.split('.').collect();
            let shorter = (1..segments.len()).rev().find_map(|skip| {
                let candidate = segments[skip..].join(".");
                (model.resolve_type_name(&candidate, &node, attribute) == Some(target))
                    .then_some(candidate)
            });
            if let Some(replacement) = shorter {
                rewrites.push(Rewrite {
                    span: node.full_span(),
                    kind: node.kind(),
                    replacement,
                });
            }
        }
        rewrites
    }

    /// Whether `node` names a type that may be shortened, and if so whether
    /// it is an attribute name.
    fn candidate(node: &SyntaxNode) -> Option<bool> {
        let parent = node.parent()?;
        match (node.kind(), parent.kind()) {
            (SyntaxKind::QualifiedName, SyntaxKind::SimpleBaseType) => Some(false),
            (SyntaxKind::QualifiedName, SyntaxKind::Attribute) => Some(true),
            // The receiver of `System.AttributeTargets.Class`.
            (SyntaxKind::SimpleMemberAccessExpression, SyntaxKind::SimpleMemberAccessExpression)
                if node.index() == 0
                    && parent
                        .parent()
                        .is_some_and(|grand| grand.kind() == SyntaxKind::AttributeArgument) =>
            {
                Some(false)
            }
            _ => None,
        }
    }
}

impl Simplifier for QualifiedNameSimplifier {
    fn simplify(&self, document: &Document) -> Document {
        let rewrites = Self::rewrites(&document.semantic_model(), document.root());
        if rewrites.is_empty() {
            return document.clone();
        }

        // Later rewrites first, so earlier spans stay valid.
        let mut root = document.root().clone();
        for rewrite in rewrites.iter().rev() {
            let Some(target) = root
                .descendants()
                .find(|node| node.full_span() == rewrite.span && node.kind() == rewrite.kind)
            else {
                continue;
            };
            let replacement = match rewrite.kind {
                SyntaxKind::QualifiedName => factory::parse_name(&rewrite.replacement),
                _ => factory::member_access_chain(&rewrite.replacement),
            };
            // Trivia attached inside the old name moves to the new one.
            let leading: Vec<GreenElement> = target
                .green()
                .tokens()
                .into_iter()
                .take_while(|token| token.kind().is_trivia())
                .map(GreenElement::from)
                .collect();
            let replacement = replacement.splice_children(0..0, leading);
            root = SyntaxNode::new_root(target.replace_with(replacement));
        }
        tracing::debug!(
            document = document.name(),
            rewrites = rewrites.len(),
            "simplified qualified names"
        );
        document.with_syntax_root(root.green().clone())
    }
}

#[cfg(test)]
#[path = "../tests/simplifier_tests.rs"]
mod simplifier_tests;
