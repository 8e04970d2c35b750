//! Cursor-driven refactorings.

pub mod attribute_usage;

pub use attribute_usage::AttributeUsageRefactoring;

use crate::code_action::CodeAction;
use crate::document::{Document, WorkspaceKind};
use sharpen_common::{CancellationToken, Cancelled, Span};

/// One refactoring request: a document, the selected span and the caller's
/// cancellation token. Built per request and dropped with it.
#[derive(Clone, Copy)]
pub struct RefactoringContext<'a> {
    pub document: &'a Document,
    pub span: Span,
    pub cancellation: &'a CancellationToken,
    pub workspace_kind: WorkspaceKind,
}

impl<'a> RefactoringContext<'a> {
    pub fn new(
        document: &'a Document,
        span: Span,
        cancellation: &'a CancellationToken,
        workspace_kind: WorkspaceKind,
    ) -> Self {
        Self {
            document,
            span,
            cancellation,
            workspace_kind,
        }
    }
}

pub trait CodeRefactoringProvider: Send + Sync {
    /// Display name of the provider.
    fn name(&self) -> &'static str;

    /// The action offered for `context`, if any.
    fn compute_refactoring(
        &self,
        context: &RefactoringContext<'_>,
    ) -> Result<Option<CodeAction>, Cancelled>;
}
