//! Diagnostic analyzers and the dispatch table that drives them.
//!
//! An analyzer declares the node kinds it inspects. The registry maps each
//! kind to its analyzers; the scanner walks a document once and hands every
//! node to the analyzers registered for its kind. Analyzers keep no state
//! between calls, so one registry serves any number of concurrent scans.

pub mod localisable_string;
pub mod scanner;

pub use localisable_string::LocalisableStringAnalyzer;
pub use scanner::DiagnosticScanner;

use crate::config::AnalyzerOptions;
use crate::document::Document;
use rustc_hash::FxHashMap;
use sharpen_common::{Diagnostic, DiagnosticDescriptor};
use sharpen_symbols::SemanticModel;
use sharpen_syntax::{SyntaxKind, SyntaxNode};
use std::sync::Arc;

/// What an analyzer may look at besides the node itself.
pub struct AnalysisContext<'a> {
    pub document: &'a Document,
    pub model: &'a SemanticModel<'a>,
}

pub trait Analyzer: Send + Sync {
    fn supported_diagnostics(&self) -> &[DiagnosticDescriptor];

    /// Node kinds this analyzer is called for.
    fn syntax_kinds(&self) -> &[SyntaxKind];

    fn analyze(&self, node: &SyntaxNode, context: &AnalysisContext<'_>) -> Vec<Diagnostic>;
}

/// Node kind to analyzers.
#[derive(Clone, Default)]
pub struct AnalyzerRegistry {
    analyzers: Vec<Arc<dyn Analyzer>>,
    by_kind: FxHashMap<SyntaxKind, Vec<Arc<dyn Analyzer>>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in analyzers enabled by `options`.
    pub fn with_default_analyzers(options: &AnalyzerOptions) -> Self {
        let mut registry = Self::new();
        if options.localisable_string.enabled {
            registry.register(Arc::new(LocalisableStringAnalyzer::from_options(
                &options.localisable_string,
            )));
        }
        registry
    }

    pub fn register(&mut self, analyzer: Arc<dyn Analyzer>) {
        for &kind in analyzer.syntax_kinds() {
            self.by_kind
                .entry(kind)
                .or_default()
                .push(Arc::clone(&analyzer));
        }
        self.analyzers.push(analyzer);
    }

    pub fn analyzers_for(&self, kind: SyntaxKind) -> &[Arc<dyn Analyzer>] {
        self.by_kind.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn supported_diagnostics(&self) -> Vec<&DiagnosticDescriptor> {
        self.analyzers
            .iter()
            .flat_map(|analyzer| analyzer.supported_diagnostics())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.analyzers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyzers.is_empty()
    }
}

impl std::fmt::Debug for AnalyzerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<&str> = self
            .supported_diagnostics()
            .into_iter()
            .map(|descriptor| descriptor.id)
            .collect();
        f.debug_struct("AnalyzerRegistry")
            .field("diagnostics", &ids)
            .field("kinds", &self.by_kind.len())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/analyzers_tests.rs"]
mod analyzers_tests;
