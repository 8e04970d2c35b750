use super::*;
use crate::factory;
use crate::green::GreenNode;

/// `class Foo : MyAttr {}\n`
fn sample_unit() -> GreenNode {
    factory::compilation_unit(
        vec![],
        vec![factory::class_declaration("Foo").bases(&["MyAttr"]).build()],
    )
}

#[test]
fn test_offsets_and_spans() {
    let root = SyntaxNode::new_root(sample_unit());
    assert_eq!(root.text(), "class Foo : MyAttr {}\n");

    let class = root.first_child().expect("class declaration");
    assert_eq!(class.kind(), SyntaxKind::ClassDeclaration);
    assert_eq!(class.full_span(), Span::new(0, 21));

    let base_list = class
        .first_child_of_kind(SyntaxKind::BaseList)
        .expect("base list");
    assert_eq!(base_list.full_span(), Span::new(10, 8));
    assert_eq!(base_list.text(), ": MyAttr");
}

#[test]
fn test_parent_is_derived_from_the_walk() {
    let root = SyntaxNode::new_root(sample_unit());
    let token = root.token_at_offset(12).expect("token at offset 12");
    assert_eq!(token.text(), "MyAttr");

    let kinds: Vec<SyntaxKind> = token.ancestors().map(|node| node.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::IdentifierName,
            SyntaxKind::SimpleBaseType,
            SyntaxKind::BaseList,
            SyntaxKind::ClassDeclaration,
            SyntaxKind::CompilationUnit,
        ]
    );
}

#[test]
fn test_token_at_offset_out_of_range() {
    let root = SyntaxNode::new_root(sample_unit());
    let width = root.full_span().end();
    assert!(root.token_at_offset(width).is_none());
    assert!(root.token_at_offset(width + 10).is_none());
}

#[test]
fn test_token_at_offset_on_trivia() {
    let root = SyntaxNode::new_root(sample_unit());
    let token = root.token_at_offset(5).expect("whitespace token");
    assert_eq!(token.kind(), SyntaxKind::Whitespace);
    let next = token.next_significant_token().expect("identifier follows");
    assert_eq!(next.text(), "Foo");
}

#[test]
fn test_span_excludes_surrounding_trivia() {
    let unit = factory::compilation_unit(
        vec![],
        vec![factory::namespace_declaration(
            "App",
            vec![factory::class_declaration("Foo").build()],
        )],
    );
    let root = SyntaxNode::new_root(unit);
    let namespace = root.first_child().expect("namespace");
    assert_eq!(namespace.text(), "namespace App { class Foo {} }");
    assert_eq!(namespace.span(), Span::new(0, 30));
    assert_eq!(namespace.full_span(), Span::new(0, 30));
    assert_eq!(root.full_span(), Span::new(0, 31), "trailing newline is trivia");
}

#[test]
fn test_descendants_preorder() {
    let root = SyntaxNode::new_root(sample_unit());
    let kinds: Vec<SyntaxKind> = root.descendants().map(|node| node.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            SyntaxKind::CompilationUnit,
            SyntaxKind::ClassDeclaration,
            SyntaxKind::BaseList,
            SyntaxKind::SimpleBaseType,
            SyntaxKind::IdentifierName,
        ]
    );
}

#[test]
fn test_replace_with_rebuilds_only_the_ancestor_chain() {
    let first = factory::class_declaration("First").build();
    let second = factory::class_declaration("Second").bases(&["Base"]).build();
    let unit = factory::compilation_unit(vec![], vec![first.clone(), second]);
    let root = SyntaxNode::new_root(unit.clone());

    let target = root
        .children()
        .find(|node| node.text().contains("Second"))
        .expect("second class");
    let replacement = factory::class_declaration("Renamed").build();
    let new_root = target.replace_with(replacement.clone());

    assert_eq!(new_root.text(), "class First {}\nclass Renamed {}\n");
    assert_eq!(unit.text(), "class First {}\nclass Second : Base {}\n");

    let children = new_root.children();
    assert!(children[0].as_node().expect("first").ptr_eq(&first));
    assert!(children[2].as_node().expect("replacement").ptr_eq(&replacement));
    assert!(!new_root.ptr_eq(&unit));
}

#[test]
fn test_replace_with_on_root_returns_replacement() {
    let root = SyntaxNode::new_root(sample_unit());
    let replacement = factory::compilation_unit(vec![], vec![]);
    let new_root = root.replace_with(replacement.clone());
    assert!(new_root.ptr_eq(&replacement));
}

#[test]
fn test_node_equality_is_position_and_identity() {
    let root = SyntaxNode::new_root(sample_unit());
    let a = root.first_child().expect("class");
    let b = root.first_child().expect("class");
    assert_eq!(a, b);
    assert_ne!(a, root);
}

#[test]
fn test_deep_cursor_drops_without_recursion() {
    let mut expression = factory::identifier_name("root");
    for i in 0..10_000 {
        expression = factory::member_access(expression, &format!("m{i}"));
    }
    let root = SyntaxNode::new_root(expression);
    let token = root.token_at_offset(0).expect("leftmost token");
    assert_eq!(token.text(), "root");
    assert_eq!(token.ancestors().count(), 10_001);
    drop(root);
    drop(token);
}
