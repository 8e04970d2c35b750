//! IR001: string literals assigned to properties of views.
//!
//! Fires on `receiver.Member = "literal"` when the static type of `receiver`
//! derives from the configured view type (`Xamarin.Forms.View` by default).
//! Any other shape, an unresolved receiver, or a compilation that does not
//! know the view type produces nothing.

use super::{AnalysisContext, Analyzer};
use crate::config::LocalisableStringOptions;
use sharpen_common::{Diagnostic, DiagnosticDescriptor, Location, Severity, well_known};
use sharpen_symbols::{SymbolUniverse, derives_from};
use sharpen_syntax::ast::{AssignmentExpression, LiteralExpression, MemberAccessExpression};
use sharpen_syntax::{SyntaxKind, SyntaxNode};

pub const LOCALISABLE_STRING: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "IR001",
    title: "Potentially Localisable String",
    message: "This could be potentially localised. Consider using a resource lookup instead.",
    category: "MFractor",
    default_severity: Severity::Warning,
    enabled_by_default: true,
    description: "Inspects for string literals that are assigned to properties of a class that derives from Xamarin.Forms.View.",
};

const DESCRIPTORS: &[DiagnosticDescriptor] = &[LOCALISABLE_STRING];
const KINDS: &[SyntaxKind] = &[SyntaxKind::SimpleAssignmentExpression];

#[derive(Clone, Debug)]
pub struct LocalisableStringAnalyzer {
    view_type: String,
    severity: Severity,
}

impl Default for LocalisableStringAnalyzer {
    fn default() -> Self {
        Self {
            view_type: well_known::XAMARIN_FORMS_VIEW.to_string(),
            severity: LOCALISABLE_STRING.default_severity,
        }
    }
}

impl LocalisableStringAnalyzer {
    pub fn from_options(options: &LocalisableStringOptions) -> Self {
        Self {
            view_type: options.view_type.clone(),
            severity: options.severity,
        }
    }

    pub fn view_type(&self) -> &str {
        &self.view_type
    }
}

impl Analyzer for LocalisableStringAnalyzer {
    fn supported_diagnostics(&self) -> &[DiagnosticDescriptor] {
        DESCRIPTORS
    }

    fn syntax_kinds(&self) -> &[SyntaxKind] {
        KINDS
    }

    fn analyze(&self, node: &SyntaxNode, context: &AnalysisContext<'_>) -> Vec<Diagnostic> {
        let Some(assignment) = AssignmentExpression::cast(node.clone()) else {
            return Vec::new();
        };

        let is_string_literal = assignment
            .right()
            .and_then(LiteralExpression::cast)
            .is_some_and(|literal| literal.is_string());
        if !is_string_literal {
            return Vec::new();
        }

        let Some(member) = assignment.left().and_then(MemberAccessExpression::cast) else {
            return Vec::new();
        };
        let Some(receiver_type) = member
            .expression()
            .and_then(|receiver| context.model.type_of(&receiver))
        else {
            return Vec::new();
        };

        let compilation = context.model.compilation();
        let Some(view_type) = compilation.type_by_metadata_name(&self.view_type) else {
            return Vec::new();
        };

        if !derives_from(compilation, Some(receiver_type), Some(view_type)) {
            return Vec::new();
        }

        tracing::trace!(
            document = context.document.name(),
            span = %assignment.syntax().span(),
            "localisable string"
        );
        let location = Location::new(context.document.name(), assignment.syntax().span());
        vec![Diagnostic::create(&LOCALISABLE_STRING, location).with_severity(self.severity)]
    }
}
