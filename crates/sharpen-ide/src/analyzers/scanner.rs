//! Running analyzers over documents.

use super::{AnalysisContext, AnalyzerRegistry};
use crate::document::{Document, DocumentId};
use rayon::prelude::*;
use sharpen_common::{CancellationToken, Cancelled, Diagnostic};

#[derive(Debug, Clone)]
pub struct DiagnosticScanner {
    registry: AnalyzerRegistry,
}

impl DiagnosticScanner {
    pub fn new(registry: AnalyzerRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &AnalyzerRegistry {
        &self.registry
    }

    /// Diagnostics for one document, in document order. The token is polled
    /// before every node.
    #[tracing::instrument(level = "debug", skip_all, fields(document = document.name()))]
    pub fn scan(
        &self,
        document: &Document,
        cancellation: &CancellationToken,
    ) -> Result<Vec<Diagnostic>, Cancelled> {
        let model = document.semantic_model();
        let context = AnalysisContext {
            document,
            model: &model,
        };

        let mut diagnostics = Vec::new();
        let mut nodes = 0usize;
        for node in document.root().descendants() {
            cancellation.check()?;
            nodes += 1;
            for analyzer in self.registry.analyzers_for(node.kind()) {
                diagnostics.extend(analyzer.analyze(&node, &context));
            }
        }
        tracing::debug!(nodes, diagnostics = diagnostics.len(), "scanned document");
        Ok(diagnostics)
    }

    /// Scan independent documents in parallel. Results keep the order of
    /// `documents`; cancellation of any scan cancels the whole batch.
    pub fn scan_documents(
        &self,
        documents: &[Document],
        cancellation: &CancellationToken,
    ) -> Result<Vec<(DocumentId, Vec<Diagnostic>)>, Cancelled> {
        let _span = tracing::info_span!("scan_documents", documents = documents.len()).entered();
        documents
            .par_iter()
            .map(|document| {
                self.scan(document, cancellation)
                    .map(|diagnostics| (document.id(), diagnostics))
            })
            .collect()
    }
}
