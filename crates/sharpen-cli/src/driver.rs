//! Command implementations. Each returns what the binary prints.

use crate::reporter::Reporter;
use crate::snapshot::WorkspaceSnapshot;
use anyhow::{Context, Result, ensure};
use sharpen_common::{CancellationToken, Diagnostic, Severity, Span};
use sharpen_ide::{
    AnalyzerOptions, AnalyzerRegistry, AnnotationPipeline, AttributeUsageRefactoring,
    CodeRefactoringProvider, DiagnosticScanner, RefactoringContext,
};
use std::path::Path;

/// Output of `sharpen check`.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub diagnostics: Vec<Diagnostic>,
    pub output: String,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }
}

pub fn check(snapshot: &Path, options: &AnalyzerOptions, json: bool, color: bool) -> Result<CheckReport> {
    let workspace = WorkspaceSnapshot::load(snapshot)?.into_workspace()?;
    let scanner = DiagnosticScanner::new(AnalyzerRegistry::with_default_analyzers(options));
    let documents = workspace.documents();
    let results = scanner.scan_documents(&documents, &CancellationToken::none())?;
    let diagnostics: Vec<Diagnostic> = results
        .into_iter()
        .flat_map(|(_, diagnostics)| diagnostics)
        .collect();

    let output = if json {
        serde_json::to_string_pretty(&diagnostics).context("failed to serialize diagnostics")?
    } else {
        let mut reporter = Reporter::new(color);
        for document in &documents {
            reporter.add_source(document.name(), document.text());
        }
        let mut output = reporter.render(&diagnostics);
        if !output.is_empty() {
            output.push_str("\n\n");
        }
        output.push_str(&reporter.summary(&diagnostics));
        output
    };
    Ok(CheckReport {
        diagnostics,
        output,
    })
}

/// A cursor position in one document of a snapshot.
#[derive(Debug, Clone)]
pub struct RefactorRequest<'a> {
    pub document: &'a str,
    pub offset: u32,
    pub length: u32,
}

/// The refactored document text, or `None` when the refactoring is not
/// offered at the requested position.
pub fn refactor(
    snapshot: &Path,
    options: &AnalyzerOptions,
    request: &RefactorRequest<'_>,
) -> Result<Option<String>> {
    let workspace = WorkspaceSnapshot::load(snapshot)?.into_workspace()?;
    let document = workspace
        .document_by_name(request.document)
        .with_context(|| format!("no document named {} in snapshot", request.document))?;

    let provider = AttributeUsageRefactoring::with_default_services(options.clone());
    let token = CancellationToken::none();
    let context = RefactoringContext::new(
        &document,
        Span::new(request.offset, request.length),
        &token,
        workspace.kind(),
    );
    let Some(action) = provider.compute_refactoring(&context)? else {
        tracing::info!(document = request.document, offset = request.offset, "refactoring not offered");
        return Ok(None);
    };
    let changed = action.changed_document(&token)?;
    let text = changed.text();
    ensure!(
        workspace.try_apply_changes(changed),
        "document {} vanished from the workspace before the change was applied",
        request.document
    );
    Ok(Some(text))
}

/// `(document name, annotated text)` for every document the batch pipeline
/// changed, in document order.
pub fn annotate(snapshot: &Path, options: &AnalyzerOptions) -> Result<Vec<(String, String)>> {
    let workspace = WorkspaceSnapshot::load(snapshot)?.into_workspace()?;
    let pipeline = AnnotationPipeline::new(options.clone());
    let changed = pipeline.run_workspace(&workspace, &CancellationToken::none())?;
    Ok(changed
        .into_iter()
        .map(|document| (document.name().to_string(), document.text()))
        .collect())
}

pub fn show_config(options: &AnalyzerOptions) -> Result<String> {
    serde_json::to_string_pretty(options).context("failed to serialize configuration")
}

#[cfg(test)]
#[path = "../tests/driver_tests.rs"]
mod driver_tests;
