use super::*;
use sharpen_syntax::ast::TypeDeclaration;
use sharpen_syntax::factory;

fn sample() -> SyntaxNode {
    SyntaxNode::new_root(factory::compilation_unit(
        vec![factory::using_directive("System")],
        vec![
            factory::struct_declaration("Point").build(),
            factory::namespace_declaration(
                "App",
                vec![
                    factory::class_declaration("First")
                        .member(factory::method_declaration(
                            "Run",
                            vec![factory::expression_statement(factory::assignment(
                                factory::identifier_name("count"),
                                factory::numeric_literal(1),
                            ))],
                        ))
                        .build(),
                    factory::class_declaration("Second").build(),
                ],
            ),
            factory::class_declaration("Third").build(),
        ],
    ))
}

fn offset_of(root: &SyntaxNode, needle: &str) -> u32 {
    root.text().find(needle).expect("needle in text") as u32
}

/// `    class Indented {}` with four spaces of leading indentation.
fn indented() -> SyntaxNode {
    let class = factory::class_declaration("Indented")
        .build()
        .splice_children(0..0, [factory::whitespace("    ").into()]);
    SyntaxNode::new_root(factory::compilation_unit(vec![], vec![class]))
}

fn name_of(node: &SyntaxNode) -> Option<String> {
    TypeDeclaration::cast(node.clone()).and_then(|declaration| declaration.name())
}

#[test]
fn test_walk_finds_first_class_in_document_order() {
    let root = sample();
    let found = find_first_declaration(&root, SyntaxKind::ClassDeclaration, &CancellationToken::none())
        .expect("not cancelled")
        .expect("a class");
    assert_eq!(name_of(&found).as_deref(), Some("First"));
}

#[test]
fn test_walk_without_target_kind_finds_nothing() {
    let root = SyntaxNode::new_root(factory::compilation_unit(
        vec![],
        vec![
            factory::struct_declaration("Point").build(),
            factory::interface_declaration("IShape").build(),
        ],
    ));
    let found = find_first_declaration(&root, SyntaxKind::ClassDeclaration, &CancellationToken::none());
    assert_eq!(found, Ok(None));
}

#[test]
fn test_walk_does_not_descend_into_non_containers() {
    let root = sample();
    let cancellation = CancellationToken::none();
    let mut walker = DeclarationWalker::new(SyntaxKind::MethodDeclaration, &cancellation);
    walker.walk(&root);
    assert!(walker.found().is_none(), "methods live inside classes, which are not containers");
    assert!(!walker.is_cancelled());
}

#[test]
fn test_walk_cancelled_before_start() {
    let root = sample();
    let token = CancellationToken::new();
    token.cancel();

    let mut walker = DeclarationWalker::new(SyntaxKind::ClassDeclaration, &token);
    walker.walk(&root);
    assert!(walker.is_cancelled());
    assert!(walker.found().is_none());
    assert_eq!(walker.visited(), 1);
    assert_eq!(walker.into_result(), Err(Cancelled));
}

#[test]
fn test_walk_keeps_first_match_across_roots() {
    let root = sample();
    let other = SyntaxNode::new_root(factory::compilation_unit(
        vec![],
        vec![factory::class_declaration("Other").build()],
    ));
    let cancellation = CancellationToken::none();
    let mut walker = DeclarationWalker::new(SyntaxKind::ClassDeclaration, &cancellation);
    walker.walk(&other);
    walker.walk(&root);
    let found = walker.into_result().expect("not cancelled").expect("a class");
    assert_eq!(name_of(&found).as_deref(), Some("Other"));
}

#[test]
fn test_position_on_class_name() {
    let root = sample();
    let offset = offset_of(&root, "Second");
    let found = find_declaration_at(&root, offset, SyntaxKind::ClassDeclaration).expect("class");
    assert_eq!(name_of(&found).as_deref(), Some("Second"));
}

#[test]
fn test_position_inside_member_ascends_to_class() {
    let root = sample();
    let offset = offset_of(&root, "count");
    let found = find_declaration_at(&root, offset, SyntaxKind::ClassDeclaration).expect("class");
    assert_eq!(name_of(&found).as_deref(), Some("First"));
}

#[test]
fn test_position_in_trivia_uses_next_token() {
    let root = indented();
    let token = significant_token_at(&root, 2).expect("token");
    assert_eq!(token.text(), "class");
    let found = find_declaration_at(&root, 2, SyntaxKind::ClassDeclaration).expect("class");
    assert_eq!(name_of(&found).as_deref(), Some("Indented"));
}

#[test]
fn test_caret_after_token_belongs_to_that_token() {
    let root = sample();
    let end_of_name = offset_of(&root, "Third") + "Third".len() as u32;
    let token = significant_token_at(&root, end_of_name).expect("token");
    assert_eq!(token.text(), "Third");

    let found = find_declaration_for_span(&root, Span::at(end_of_name), SyntaxKind::ClassDeclaration);
    assert_eq!(found.as_ref().and_then(name_of).as_deref(), Some("Third"));

    // Right after the keyword, before the separating space.
    let end_of_keyword = offset_of(&root, "class Third") + 5;
    let token = significant_token_at(&root, end_of_keyword).expect("token");
    assert_eq!(token.text(), "class");
}

#[test]
fn test_position_out_of_range() {
    let root = sample();
    let width = root.full_span().length;
    assert!(find_declaration_at(&root, width, SyntaxKind::ClassDeclaration).is_none());
    assert!(find_declaration_at(&root, width + 100, SyntaxKind::ClassDeclaration).is_none());
}

#[test]
fn test_position_outside_any_declaration() {
    let root = sample();
    let offset = offset_of(&root, "System");
    assert!(find_declaration_at(&root, offset, SyntaxKind::ClassDeclaration).is_none());
    let point = offset_of(&root, "Point");
    assert!(find_declaration_at(&root, point, SyntaxKind::ClassDeclaration).is_none());
}

#[test]
fn test_span_must_fit_in_one_token() {
    let root = sample();
    let start = offset_of(&root, "Second");
    let inside = Span::new(start + 1, 3);
    let found = find_declaration_for_span(&root, inside, SyntaxKind::ClassDeclaration);
    assert_eq!(found.as_ref().and_then(name_of).as_deref(), Some("Second"));

    let across = Span::new(start, 10);
    assert!(find_declaration_for_span(&root, across, SyntaxKind::ClassDeclaration).is_none());
}

#[test]
fn test_span_in_trivia_is_not_applicable() {
    let root = indented();
    assert!(find_declaration_for_span(&root, Span::at(2), SyntaxKind::ClassDeclaration).is_none());
}

#[test]
fn test_span_at_or_past_end() {
    let root = sample();
    let width = root.full_span().length;
    assert!(find_declaration_for_span(&root, Span::at(width), SyntaxKind::ClassDeclaration).is_none());
    assert!(
        find_declaration_for_span(&root, Span::new(width + 5, 2), SyntaxKind::ClassDeclaration)
            .is_none()
    );
}

#[test]
fn test_span_running_past_end_is_not_applicable() {
    let root = sample();
    let start = offset_of(&root, "Third");
    let width = root.full_span().length;
    for length in [width, u32::MAX - start, u32::MAX] {
        assert!(
            find_declaration_for_span(&root, Span::new(start, length), SyntaxKind::ClassDeclaration)
                .is_none(),
            "length {length}"
        );
    }
}
