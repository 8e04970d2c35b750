//! Annotate attribute classes with `[AttributeUsage]`.
//!
//! A request moves through three states, each a separate type:
//! - `Located`: a class declaration was found
//! - `Eligible`: one of its listed base types is a class deriving from
//!   `System.Attribute`
//! - `Built`: the class carries a new `AttributeUsage` list and a new root
//!   was derived from the original tree
//!
//! Any state may end the request with "not applicable". The annotation is
//! appended even when an equivalent list is already present.

use crate::code_action::CodeAction;
use crate::config::AnalyzerOptions;
use crate::document::{Document, WorkspaceKind};
use crate::formatting::{Formatter, WhitespaceFormatter};
use crate::generator::{AttributeTargets, AttributeUsageAnnotationGenerator};
use crate::locator;
use crate::refactorings::{CodeRefactoringProvider, RefactoringContext};
use crate::simplifier::{QualifiedNameSimplifier, Simplifier};
use sharpen_common::{CancellationToken, Cancelled, Span, well_known};
use sharpen_symbols::{SymbolUniverse, TypeId, derives_from};
use sharpen_syntax::ast::ClassDeclaration;
use sharpen_syntax::SyntaxKind;
use std::sync::Arc;

pub const TITLE: &str = "Annotate with AttributeUsage attribute";
pub const PROVIDER_NAME: &str = "Annotate With Attribute Usage";

/// A class declaration in a document.
#[derive(Clone, Debug)]
pub struct Located {
    document: Document,
    class: ClassDeclaration,
}

impl Located {
    /// The class enclosing the token selected by `span`.
    pub fn at_span(document: &Document, span: Span) -> Option<Located> {
        let node =
            locator::find_declaration_for_span(document.root(), span, SyntaxKind::ClassDeclaration)?;
        Some(Located {
            document: document.clone(),
            class: ClassDeclaration::cast(node)?,
        })
    }

    /// The first class of `document` in document order.
    pub fn first_in(
        document: &Document,
        cancellation: &CancellationToken,
    ) -> Result<Option<Located>, Cancelled> {
        let found = locator::find_first_declaration(
            document.root(),
            SyntaxKind::ClassDeclaration,
            cancellation,
        )?;
        Ok(found.and_then(ClassDeclaration::cast).map(|class| Located {
            document: document.clone(),
            class,
        }))
    }

    pub fn class(&self) -> &ClassDeclaration {
        &self.class
    }

    /// Move to `Eligible` when a listed base type, other than an interface,
    /// derives from `System.Attribute`.
    pub fn eligible(self) -> Option<Eligible> {
        let base_list = self.class.base_list()?;
        let model = self.document.semantic_model();
        let compilation = model.compilation();
        let attribute = compilation.type_by_metadata_name(well_known::SYSTEM_ATTRIBUTE)?;

        let base = base_list
            .types()
            .iter()
            .filter_map(|base| base.ty())
            .filter_map(|ty| model.resolve_type(&ty))
            .filter(|&ty| {
                compilation
                    .symbol(ty)
                    .is_some_and(|symbol| !symbol.is_interface())
            })
            .find(|&ty| derives_from(compilation, Some(ty), Some(attribute)));

        let Some(base) = base else {
            tracing::trace!(class = ?self.class.name(), "no base derives from System.Attribute");
            return None;
        };
        drop(model);
        Some(Eligible {
            document: self.document,
            class: self.class,
            base,
        })
    }
}

/// A class that may be annotated.
#[derive(Clone, Debug)]
pub struct Eligible {
    document: Document,
    class: ClassDeclaration,
    base: TypeId,
}

impl Eligible {
    pub fn class(&self) -> &ClassDeclaration {
        &self.class
    }

    /// The base type that made the class eligible.
    pub fn attribute_base(&self) -> TypeId {
        self.base
    }

    /// Append the annotation and substitute the class into a new root.
    /// The token is checked before anything is built.
    pub fn build(
        &self,
        target: AttributeTargets,
        cancellation: &CancellationToken,
    ) -> Result<Built, Cancelled> {
        cancellation.check()?;
        let list = AttributeUsageAnnotationGenerator::generate(target);
        let new_class = self.class.add_attribute_lists([list]);
        let new_root = self.class.syntax().replace_with(new_class);
        Ok(Built {
            document: self.document.with_syntax_root(new_root),
        })
    }
}

/// The annotated document before formatting.
#[derive(Clone, Debug)]
pub struct Built {
    document: Document,
}

impl Built {
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Format, then optionally simplify.
    pub fn finish(
        self,
        formatter: &dyn Formatter,
        simplifier: Option<&dyn Simplifier>,
        options: &AnalyzerOptions,
    ) -> Document {
        let formatted = formatter.format(self.document.root(), &options.formatting);
        let document = self.document.with_syntax_root(formatted);
        match simplifier {
            Some(simplifier) => simplifier.simplify(&document),
            None => document,
        }
    }
}

/// The refactoring provider.
#[derive(Clone)]
pub struct AttributeUsageRefactoring {
    options: Arc<AnalyzerOptions>,
    formatter: Arc<dyn Formatter>,
    simplifier: Arc<dyn Simplifier>,
}

impl AttributeUsageRefactoring {
    pub fn new(
        options: AnalyzerOptions,
        formatter: Arc<dyn Formatter>,
        simplifier: Arc<dyn Simplifier>,
    ) -> Self {
        Self {
            options: Arc::new(options),
            formatter,
            simplifier,
        }
    }

    /// A provider using `WhitespaceFormatter` and `QualifiedNameSimplifier`.
    pub fn with_default_services(options: AnalyzerOptions) -> Self {
        Self::new(
            options,
            Arc::new(WhitespaceFormatter),
            Arc::new(QualifiedNameSimplifier),
        )
    }

    /// The code action that annotates `eligible` when invoked.
    pub fn action(&self, eligible: Eligible) -> CodeAction {
        let options = Arc::clone(&self.options);
        let formatter = Arc::clone(&self.formatter);
        let simplifier = Arc::clone(&self.simplifier);
        CodeAction::new(TITLE, move |cancellation: &CancellationToken| {
            let built = eligible.build(options.attribute_usage.target, cancellation)?;
            let simplifier = options.simplify.then_some(simplifier.as_ref());
            let document = built.finish(formatter.as_ref(), simplifier, &options);
            // Discard the result if cancellation arrived while finishing.
            cancellation.check()?;
            Ok(document)
        })
    }
}

impl CodeRefactoringProvider for AttributeUsageRefactoring {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(document = context.document.name(), span = %context.span)
    )]
    fn compute_refactoring(
        &self,
        context: &RefactoringContext<'_>,
    ) -> Result<Option<CodeAction>, Cancelled> {
        if context.workspace_kind == WorkspaceKind::MiscellaneousFiles {
            return Ok(None);
        }
        context.cancellation.check()?;

        let located = Located::at_span(context.document, context.span);
        context.cancellation.check()?;

        let Some(eligible) = located.and_then(Located::eligible) else {
            return Ok(None);
        };
        tracing::debug!(class = ?eligible.class().name(), "offering AttributeUsage annotation");
        Ok(Some(self.action(eligible)))
    }
}

impl std::fmt::Debug for AttributeUsageRefactoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttributeUsageRefactoring")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
