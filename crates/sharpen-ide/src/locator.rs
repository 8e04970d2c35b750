//! Finding the one declaration a request is about.
//!
//! Two entry points share the same rule: only containers (the compilation
//! unit and namespaces) are descended into, and the first declaration of the
//! target kind wins.
//! - `DeclarationWalker` / `find_first_declaration`: top-down walk in
//!   document order, polling the cancellation token on every visit
//! - `find_declaration_at` / `find_declaration_for_span`: from the token under
//!   a position up through its ancestors

use sharpen_common::{CancellationToken, Cancelled, Span};
use sharpen_syntax::{SyntaxKind, SyntaxNode, SyntaxToken};

/// Kind-driven walk that stops at the first declaration of `target`.
pub struct DeclarationWalker<'a> {
    target: SyntaxKind,
    cancellation: &'a CancellationToken,
    found: Option<SyntaxNode>,
    cancelled: bool,
    visited: usize,
}

impl<'a> DeclarationWalker<'a> {
    pub fn new(target: SyntaxKind, cancellation: &'a CancellationToken) -> Self {
        Self {
            target,
            cancellation,
            found: None,
            cancelled: false,
            visited: 0,
        }
    }

    /// Walk `root`. A walker keeps the first match across calls.
    pub fn walk(&mut self, root: &SyntaxNode) {
        let mut stack = vec![root.clone()];
        while let Some(node) = stack.pop() {
            if self.found.is_some() {
                return;
            }
            self.visited += 1;
            if self.cancellation.is_cancelled() {
                tracing::trace!(visited = self.visited, "declaration walk cancelled");
                self.cancelled = true;
                return;
            }

            let kind = node.kind();
            if kind == self.target {
                self.found = Some(node);
                return;
            }
            if kind.is_container() {
                let children: Vec<SyntaxNode> = node.children().collect();
                stack.extend(children.into_iter().rev());
            }
        }
    }

    pub fn found(&self) -> Option<&SyntaxNode> {
        self.found.as_ref()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Nodes visited so far.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// The match, or `Cancelled` if the walk stopped on the token. A walk
    /// that was cancelled never reports a match.
    pub fn into_result(self) -> Result<Option<SyntaxNode>, Cancelled> {
        if self.cancelled {
            Err(Cancelled)
        } else {
            Ok(self.found)
        }
    }
}

/// The first declaration of `kind` in document order.
pub fn find_first_declaration(
    root: &SyntaxNode,
    kind: SyntaxKind,
    cancellation: &CancellationToken,
) -> Result<Option<SyntaxNode>, Cancelled> {
    let mut walker = DeclarationWalker::new(kind, cancellation);
    walker.walk(root);
    walker.into_result()
}

/// The token a position refers to: the token covering `offset`, or the
/// next significant token when `offset` falls in trivia.
///
/// Trivia belongs to the token before it, so an `offset` right at the end
/// of a significant token that is followed by trivia resolves to that token.
pub fn significant_token_at(root: &SyntaxNode, offset: u32) -> Option<SyntaxToken> {
    let token = root.token_at_offset(offset)?;
    if !token.kind().is_trivia() {
        return Some(token);
    }
    if offset == token.span().start
        && let Some(previous) = offset.checked_sub(1).and_then(|at| root.token_at_offset(at))
        && !previous.kind().is_trivia()
    {
        return Some(previous);
    }
    token.next_significant_token()
}

/// The nearest declaration of `kind` enclosing the token at `offset`.
pub fn find_declaration_at(root: &SyntaxNode, offset: u32, kind: SyntaxKind) -> Option<SyntaxNode> {
    let token = significant_token_at(root, offset)?;
    token.ancestors().find(|node| node.kind() == kind)
}

/// Like `find_declaration_at` for a selection: the token at `span.start`
/// must contain the whole span.
///
/// A span that starts or ends past the end of the text matches nothing.
pub fn find_declaration_for_span(
    root: &SyntaxNode,
    span: Span,
    kind: SyntaxKind,
) -> Option<SyntaxNode> {
    let width = root.full_span().length;
    if span.start >= width || span.checked_end().is_none_or(|end| end > width) {
        tracing::trace!(%span, width, "span outside the document");
        return None;
    }
    let token = significant_token_at(root, span.start)?;
    if !token.span().contains_span(span) {
        return None;
    }
    token.ancestors().find(|node| node.kind() == kind)
}

#[cfg(test)]
#[path = "../tests/locator_tests.rs"]
mod locator_tests;
