//! IR001 over whole documents.

use sharpen_common::{CancellationToken, Severity};
use sharpen_ide::analyzers::localisable_string::LOCALISABLE_STRING;
use sharpen_ide::{AnalyzerOptions, AnalyzerRegistry, DiagnosticScanner, Workspace, WorkspaceKind};
use sharpen_symbols::{Compilation, SymbolTable, TypeKind};
use sharpen_syntax::{GreenNode, SyntaxNode, factory};

/// A core library extended with `Xamarin.Forms.View` and `Label : View`.
fn forms_table() -> SymbolTable {
    let mut table = SymbolTable::with_core_library();
    let object = table.object_type().expect("System.Object");
    let view = table.declare("Xamarin.Forms", "View", TypeKind::Class);
    table.set_base(view, object);
    let label = table.declare("Xamarin.Forms", "Label", TypeKind::Class);
    table.set_base(label, view);
    let control = table.declare("Other.UI", "Control", TypeKind::Class);
    table.set_base(control, object);
    table
}

fn assign(target: &str, value: GreenNode) -> GreenNode {
    factory::expression_statement(factory::assignment(factory::member_access_chain(target), value))
}

fn page(statements: Vec<GreenNode>) -> SyntaxNode {
    SyntaxNode::new_root(factory::compilation_unit(
        vec![],
        vec![
            factory::class_declaration("Page")
                .member(factory::method_declaration("Build", statements))
                .build(),
        ],
    ))
}

fn workspace(table: SymbolTable, trees: Vec<SyntaxNode>, locals: &[(&str, &str)]) -> Workspace {
    let mut compilation = Compilation::new(table, trees);
    for (name, ty) in locals {
        let id = sharpen_symbols::SymbolUniverse::type_by_metadata_name(&compilation, ty)
            .expect("local type");
        compilation.declare_local(*name, id);
    }
    Workspace::new(WorkspaceKind::Host, compilation, &[])
}

fn scan(workspace: &Workspace, options: &AnalyzerOptions) -> Vec<sharpen_common::Diagnostic> {
    let scanner = DiagnosticScanner::new(AnalyzerRegistry::with_default_analyzers(options));
    workspace
        .documents()
        .iter()
        .flat_map(|document| {
            scanner
                .scan(document, &CancellationToken::none())
                .expect("not cancelled")
        })
        .collect()
}

#[test]
fn test_literal_assigned_to_view_property() {
    let tree = page(vec![assign("label.Text", factory::string_literal("Hello"))]);
    let workspace = workspace(forms_table(), vec![tree], &[("label", "Xamarin.Forms.Label")]);

    let diagnostics = scan(&workspace, &AnalyzerOptions::default());
    assert_eq!(diagnostics.len(), 1);
    let diagnostic = &diagnostics[0];
    assert_eq!(diagnostic.id, "IR001");
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.location.file, "document0.cs");

    let text = workspace.documents()[0].text();
    let span = diagnostic.span();
    assert_eq!(
        &text[span.start as usize..span.end() as usize],
        "label.Text = \"Hello\""
    );
}

#[test]
fn test_view_itself_qualifies() {
    let tree = page(vec![assign("view.Text", factory::string_literal("Hello"))]);
    let workspace = workspace(forms_table(), vec![tree], &[("view", "Xamarin.Forms.View")]);
    assert_eq!(scan(&workspace, &AnalyzerOptions::default()).len(), 1);
}

#[test]
fn test_non_literal_value_is_ignored() {
    let tree = page(vec![
        assign("label.Text", factory::identifier_name("title")),
        assign("label.Lines", factory::numeric_literal(2)),
    ]);
    let workspace = workspace(forms_table(), vec![tree], &[("label", "Xamarin.Forms.Label")]);
    assert!(scan(&workspace, &AnalyzerOptions::default()).is_empty());
}

#[test]
fn test_simple_name_target_is_ignored() {
    let tree = page(vec![factory::expression_statement(factory::assignment(
        factory::identifier_name("label"),
        factory::string_literal("Hello"),
    ))]);
    let workspace = workspace(forms_table(), vec![tree], &[("label", "Xamarin.Forms.Label")]);
    assert!(scan(&workspace, &AnalyzerOptions::default()).is_empty());
}

#[test]
fn test_unrelated_receiver_is_ignored() {
    let tree = page(vec![
        assign("control.Text", factory::string_literal("Hello")),
        assign("unknown.Text", factory::string_literal("Hello")),
    ]);
    let workspace = workspace(forms_table(), vec![tree], &[("control", "Other.UI.Control")]);
    assert!(scan(&workspace, &AnalyzerOptions::default()).is_empty());
}

#[test]
fn test_compilation_without_view_type() {
    let mut table = SymbolTable::with_core_library();
    let object = table.object_type().expect("System.Object");
    let label = table.declare("Xamarin.Forms", "Label", TypeKind::Class);
    table.set_base(label, object);

    let tree = page(vec![assign("label.Text", factory::string_literal("Hello"))]);
    let workspace = workspace(table, vec![tree], &[("label", "Xamarin.Forms.Label")]);
    assert!(scan(&workspace, &AnalyzerOptions::default()).is_empty());
}

#[test]
fn test_options_change_severity_and_view_type() {
    let tree = page(vec![
        assign("label.Text", factory::string_literal("Hello")),
        assign("control.Text", factory::string_literal("World")),
    ]);
    let workspace = workspace(
        forms_table(),
        vec![tree],
        &[("label", "Xamarin.Forms.Label"), ("control", "Other.UI.Control")],
    );

    let mut options = AnalyzerOptions::default();
    options.localisable_string.severity = Severity::Error;
    options.localisable_string.view_type = "Other.UI.Control".to_string();
    let diagnostics = scan(&workspace, &options);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);

    options.localisable_string.enabled = false;
    assert!(scan(&workspace, &options).is_empty());
}

#[test]
fn test_scan_documents_over_workspace() {
    let trees = vec![
        page(vec![assign("label.Text", factory::string_literal("One"))]),
        page(vec![]),
        page(vec![
            assign("label.Text", factory::string_literal("Two")),
            assign("label.Detail", factory::string_literal("Three")),
        ]),
    ];
    let workspace = workspace(forms_table(), trees, &[("label", "Xamarin.Forms.Label")]);
    let scanner = DiagnosticScanner::new(AnalyzerRegistry::with_default_analyzers(
        &AnalyzerOptions::default(),
    ));

    let results = scanner
        .scan_documents(&workspace.documents(), &CancellationToken::none())
        .expect("not cancelled");
    let counts: Vec<usize> = results.iter().map(|(_, diagnostics)| diagnostics.len()).collect();
    assert_eq!(counts, vec![1, 0, 2]);
}

#[test]
fn test_descriptor() {
    assert_eq!(LOCALISABLE_STRING.id, "IR001");
    assert_eq!(LOCALISABLE_STRING.title, "Potentially Localisable String");
    assert_eq!(
        LOCALISABLE_STRING.message,
        "This could be potentially localised. Consider using a resource lookup instead."
    );
    assert_eq!(LOCALISABLE_STRING.category, "MFractor");
    assert_eq!(LOCALISABLE_STRING.default_severity, Severity::Warning);
    assert!(LOCALISABLE_STRING.enabled_by_default);
}
