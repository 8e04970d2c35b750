use super::*;
use crate::factory;

#[test]
fn test_width_is_sum_of_children() {
    let node = factory::assignment(
        factory::member_access_chain("view.Text"),
        factory::string_literal("Hello"),
    );
    assert_eq!(node.text(), "view.Text = \"Hello\"");
    assert_eq!(node.width() as usize, node.text().len());
}

#[test]
fn test_replace_child_shares_siblings() {
    let left = factory::member_access_chain("view.Text");
    let node = factory::assignment(left.clone(), factory::string_literal("Hello"));

    let replaced = node.replace_child(4, factory::string_literal("World").into());

    assert_eq!(replaced.text(), "view.Text = \"World\"");
    assert_eq!(node.text(), "view.Text = \"Hello\"", "original is unchanged");
    let shared_left = replaced.children()[0]
        .as_node()
        .expect("left operand is a node");
    assert!(shared_left.ptr_eq(&left), "untouched child is shared, not copied");
}

#[test]
fn test_splice_children_prepends() {
    let list = factory::attribute_list(vec![factory::attribute(
        factory::identifier_name("Serializable"),
        None,
    )]);
    let class = factory::class_declaration("Foo").build();
    let annotated = class.splice_children(0..0, [list.into()]);
    assert_eq!(annotated.text(), "[Serializable]class Foo {}");
}

#[test]
fn test_structural_equality_ignores_identity() {
    let a = factory::parse_name("System.Attribute");
    let b = factory::parse_name("System.Attribute");
    assert_eq!(a, b);
    assert!(!a.ptr_eq(&b));
}

#[test]
fn test_tokens_in_document_order() {
    let name = factory::parse_name("A.B.C");
    let texts: Vec<String> = name
        .tokens()
        .iter()
        .map(|token| token.text().to_string())
        .collect();
    assert_eq!(texts, vec!["A", ".", "B", ".", "C"]);
}

#[test]
fn test_deep_tree_renders_without_recursion() {
    let mut expression = factory::identifier_name("root");
    for i in 0..10_000 {
        expression = factory::member_access(expression, &format!("m{i}"));
    }
    let text = expression.text();
    assert!(text.starts_with("root.m0.m1"));
    assert!(text.ends_with(".m9999"));
    drop(expression);
}
