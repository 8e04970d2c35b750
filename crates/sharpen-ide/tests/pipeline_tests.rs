use super::*;
use crate::document::{DocumentId, WorkspaceKind};
use sharpen_symbols::{Compilation, SymbolTable};
use sharpen_syntax::{GreenNode, SyntaxNode, factory};

fn unit(usings: &[&str], members: Vec<GreenNode>) -> SyntaxNode {
    SyntaxNode::new_root(factory::compilation_unit(
        usings.iter().map(|name| factory::using_directive(name)).collect(),
        members,
    ))
}

fn document(usings: &[&str], members: Vec<GreenNode>) -> Document {
    let root = unit(usings, members);
    let compilation = Compilation::new(SymbolTable::with_core_library(), [root.clone()]);
    Document::new(DocumentId(0), "Test.cs", root, Arc::new(compilation))
}

fn attribute_class(name: &str) -> GreenNode {
    factory::class_declaration(name)
        .bases(&["System.Attribute"])
        .build()
}

#[test]
fn test_annotates_first_class() {
    let pipeline = AnnotationPipeline::new(AnalyzerOptions::default());
    let annotated = pipeline
        .run(&document(&[], vec![attribute_class("Marker")]), &CancellationToken::none())
        .expect("not cancelled")
        .expect("Marker is an attribute");
    assert_eq!(
        annotated.text(),
        "[System.AttributeUsage(System.AttributeTargets.Class)]\nclass Marker : System.Attribute {}\n"
    );
}

#[test]
fn test_simplifies_with_using() {
    let pipeline = AnnotationPipeline::new(AnalyzerOptions::default());
    let annotated = pipeline
        .run(
            &document(&["System"], vec![attribute_class("Marker")]),
            &CancellationToken::none(),
        )
        .expect("not cancelled")
        .expect("Marker is an attribute");
    assert_eq!(
        annotated.text(),
        "using System;\n[AttributeUsage(AttributeTargets.Class)]\nclass Marker : Attribute {}\n"
    );
}

#[test]
fn test_only_the_first_class_is_considered() {
    let pipeline = AnnotationPipeline::new(AnalyzerOptions::default());
    let document = document(
        &[],
        vec![
            factory::class_declaration("Plain").build(),
            attribute_class("Marker"),
        ],
    );
    assert!(matches!(pipeline.run(&document, &CancellationToken::none()), Ok(None)));
}

#[test]
fn test_document_without_class() {
    let pipeline = AnnotationPipeline::new(AnalyzerOptions::default());
    let document = document(&[], vec![factory::struct_declaration("Point").build()]);
    assert!(matches!(pipeline.run(&document, &CancellationToken::none()), Ok(None)));
}

#[test]
fn test_cancelled_run() {
    let pipeline = AnnotationPipeline::new(AnalyzerOptions::default());
    let token = CancellationToken::new();
    token.cancel();
    assert!(matches!(
        pipeline.run(&document(&[], vec![attribute_class("Marker")]), &token),
        Err(Cancelled)
    ));
}

#[test]
fn test_run_workspace_applies_changes() {
    let trees = [
        unit(&[], vec![attribute_class("First")]),
        unit(&[], vec![factory::class_declaration("Plain").build()]),
        unit(&[], vec![attribute_class("Third")]),
    ];
    let compilation = Compilation::new(SymbolTable::with_core_library(), trees);
    let workspace = Workspace::new(WorkspaceKind::Host, compilation, &["First.cs", "Plain.cs", "Third.cs"]);

    let options = AnalyzerOptions {
        simplify: false,
        ..AnalyzerOptions::default()
    };
    let changed = AnnotationPipeline::new(options)
        .run_workspace(&workspace, &CancellationToken::none())
        .expect("not cancelled");

    let names: Vec<&str> = changed.iter().map(Document::name).collect();
    assert_eq!(names, vec!["First.cs", "Third.cs"]);
    for name in ["First.cs", "Third.cs"] {
        let current = workspace.document_by_name(name).expect("document");
        assert!(current.text().starts_with("[System.AttributeUsage("), "{name}");
    }
    let plain = workspace.document_by_name("Plain.cs").expect("document");
    assert_eq!(plain.text(), "class Plain {}\n");
}

#[test]
fn test_change_for_unknown_document_is_dropped() {
    let compilation = Compilation::new(
        SymbolTable::with_core_library(),
        [unit(&[], vec![factory::class_declaration("Plain").build()])],
    );
    let workspace = Workspace::new(WorkspaceKind::Host, compilation, &["Plain.cs"]);
    let root = unit(&[], vec![attribute_class("Stray")]);
    let stray_compilation = Compilation::new(SymbolTable::with_core_library(), [root.clone()]);
    let stray = Document::new(DocumentId(7), "Stray.cs", root, Arc::new(stray_compilation));

    let pipeline = AnnotationPipeline::new(AnalyzerOptions::default());
    assert!(pipeline.run(&stray, &CancellationToken::none()).expect("not cancelled").is_some());
    assert!(matches!(
        pipeline.run_and_apply(&workspace, &stray, &CancellationToken::none()),
        Ok(None)
    ));
    assert_eq!(workspace.len(), 1);
    assert!(workspace.document_by_name("Stray.cs").is_none());
}
