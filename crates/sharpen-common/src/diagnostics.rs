//! Diagnostic records reported by analyzers.
//!
//! A `DiagnosticDescriptor` is the static description of a rule; a
//! `Diagnostic` is one observation of that rule at a concrete location,
//! created during a scan and handed to the host.

use crate::Span;
use serde::{Deserialize, Serialize};

/// Diagnostic severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static description of a diagnostic rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DiagnosticDescriptor {
    /// Stable rule identifier, e.g. `IR001`.
    pub id: &'static str,
    pub title: &'static str,
    pub message: &'static str,
    pub category: &'static str,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
    pub description: &'static str,
}

/// A file and the span within it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub span: Span,
}

impl Location {
    pub fn new(file: impl Into<String>, span: Span) -> Self {
        Self {
            file: file.into(),
            span,
        }
    }
}

/// One reported observation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub location: Location,
}

impl Diagnostic {
    /// Create a diagnostic for `descriptor` at `location` with the descriptor's
    /// default severity.
    #[must_use]
    pub fn create(descriptor: &DiagnosticDescriptor, location: Location) -> Self {
        Self {
            id: descriptor.id.to_string(),
            title: descriptor.title.to_string(),
            message: descriptor.message.to_string(),
            severity: descriptor.default_severity,
            location,
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn span(&self) -> Span {
        self.location.span
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics_tests.rs"]
mod diagnostics_tests;
