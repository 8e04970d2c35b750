//! Analyzers, refactorings and editor services for the sharpen toolkit.
//!
//! - `document`: immutable document snapshots and the workspace holding the
//!   current one for each id
//! - `locator`: finding the class declaration a request is about
//! - `analyzers`: the analyzer registry, the scanner and IR001
//! - `refactorings`: the `AttributeUsage` annotation refactoring
//! - `code_action`: deferred, cancellable document changes
//! - `formatting` / `simplifier`: services applied to generated code
//! - `pipeline`: batch annotation over a workspace

pub mod config;
pub use config::AnalyzerOptions;

pub mod document;
pub use document::{Document, DocumentId, Workspace, WorkspaceKind};

pub mod locator;

pub mod analyzers;
pub use analyzers::{AnalyzerRegistry, DiagnosticScanner};

pub mod generator;
pub use generator::{AttributeTargets, AttributeUsageAnnotationGenerator};

pub mod code_action;
pub use code_action::CodeAction;

pub mod formatting;
pub use formatting::{Formatter, FormattingOptions, WhitespaceFormatter};

pub mod simplifier;
pub use simplifier::{QualifiedNameSimplifier, Simplifier};

pub mod refactorings;
pub use refactorings::{AttributeUsageRefactoring, CodeRefactoringProvider, RefactoringContext};

pub mod pipeline;
pub use pipeline::AnnotationPipeline;
