//! Batch annotation: the refactoring without a cursor.
//!
//! For each document the first class is located, checked, annotated,
//! formatted and simplified, and the result becomes the document's current
//! snapshot in the workspace.

use crate::config::AnalyzerOptions;
use crate::document::{Document, Workspace};
use crate::formatting::{Formatter, WhitespaceFormatter};
use crate::refactorings::attribute_usage::Located;
use crate::simplifier::{QualifiedNameSimplifier, Simplifier};
use sharpen_common::{CancellationToken, Cancelled};
use std::sync::Arc;

#[derive(Clone)]
pub struct AnnotationPipeline {
    options: AnalyzerOptions,
    formatter: Arc<dyn Formatter>,
    simplifier: Arc<dyn Simplifier>,
}

impl AnnotationPipeline {
    /// A pipeline using `WhitespaceFormatter` and `QualifiedNameSimplifier`.
    pub fn new(options: AnalyzerOptions) -> Self {
        Self::with_services(
            options,
            Arc::new(WhitespaceFormatter),
            Arc::new(QualifiedNameSimplifier),
        )
    }

    pub fn with_services(
        options: AnalyzerOptions,
        formatter: Arc<dyn Formatter>,
        simplifier: Arc<dyn Simplifier>,
    ) -> Self {
        Self {
            options,
            formatter,
            simplifier,
        }
    }

    /// The annotated document, or `None` when the document has no class or
    /// its first class is not an attribute.
    pub fn run(
        &self,
        document: &Document,
        cancellation: &CancellationToken,
    ) -> Result<Option<Document>, Cancelled> {
        let Some(located) = Located::first_in(document, cancellation)? else {
            tracing::debug!(document = document.name(), "no class declaration");
            return Ok(None);
        };
        let Some(eligible) = located.eligible() else {
            return Ok(None);
        };

        let built = eligible.build(self.options.attribute_usage.target, cancellation)?;
        let simplifier = self.options.simplify.then_some(self.simplifier.as_ref());
        let document = built.finish(self.formatter.as_ref(), simplifier, &self.options);
        cancellation.check()?;
        Ok(Some(document))
    }

    /// Annotate `document` and make the result current in `workspace`.
    ///
    /// `Ok(None)` when nothing was annotated, or when `workspace` no longer
    /// holds the document and the change is dropped.
    pub fn run_and_apply(
        &self,
        workspace: &Workspace,
        document: &Document,
        cancellation: &CancellationToken,
    ) -> Result<Option<Document>, Cancelled> {
        let Some(annotated) = self.run(document, cancellation)? else {
            return Ok(None);
        };
        if !workspace.try_apply_changes(annotated.clone()) {
            tracing::warn!(document = annotated.name(), "document not in workspace, change dropped");
            return Ok(None);
        }
        Ok(Some(annotated))
    }

    /// Run over every document of `workspace` and apply the results.
    /// Returns the documents that changed.
    pub fn run_workspace(
        &self,
        workspace: &Workspace,
        cancellation: &CancellationToken,
    ) -> Result<Vec<Document>, Cancelled> {
        let _span = tracing::info_span!("annotate_workspace", documents = workspace.len()).entered();
        let mut changed = Vec::new();
        for document in workspace.documents() {
            if let Some(annotated) = self.run_and_apply(workspace, &document, cancellation)? {
                changed.push(annotated);
            }
        }
        Ok(changed)
    }
}

impl std::fmt::Debug for AnnotationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnnotationPipeline")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../tests/pipeline_tests.rs"]
mod pipeline_tests;
