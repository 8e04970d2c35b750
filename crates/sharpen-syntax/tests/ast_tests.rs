use super::*;
use crate::factory;

fn root_of(members: Vec<GreenNode>) -> SyntaxNode {
    SyntaxNode::new_root(factory::compilation_unit(
        vec![factory::using_directive("System")],
        members,
    ))
}

#[test]
fn test_type_declaration_parts() {
    let root = root_of(vec![factory::class_declaration("Foo")
        .attribute_list(factory::attribute_list(vec![factory::attribute(
            factory::identifier_name("Obsolete"),
            None,
        )]))
        .bases(&["MyAttr", "System.IDisposable"])
        .member(factory::method_declaration("Run", vec![]))
        .build()]);

    let class = root
        .descendants()
        .find_map(ClassDeclaration::cast)
        .expect("class declaration");
    assert_eq!(class.name().as_deref(), Some("Foo"));
    assert_eq!(class.attribute_lists().len(), 1);
    assert_eq!(class.members().len(), 1);

    let base_names: Vec<String> = class
        .base_list()
        .expect("base list")
        .types()
        .iter()
        .filter_map(|base| base.ty())
        .filter_map(|ty| dotted_name(&ty))
        .collect();
    assert_eq!(base_names, vec!["MyAttr", "System.IDisposable"]);
}

#[test]
fn test_class_cast_rejects_struct() {
    let root = root_of(vec![factory::struct_declaration("Point").build()]);
    let declaration = root
        .descendants()
        .find(|node| node.kind().is_type_declaration())
        .expect("struct");
    assert!(ClassDeclaration::cast(declaration.clone()).is_none());
    assert!(TypeDeclaration::cast(declaration).is_some());
}

#[test]
fn test_add_attribute_lists_appends_after_existing_lists() {
    let root = root_of(vec![factory::class_declaration("Foo")
        .attribute_list(factory::attribute_list(vec![factory::attribute(
            factory::identifier_name("First"),
            None,
        )]))
        .build()]);
    let class = root
        .descendants()
        .find_map(ClassDeclaration::cast)
        .expect("class declaration");

    let second = factory::attribute_list(vec![factory::attribute(
        factory::identifier_name("Second"),
        None,
    )]);
    let updated = class.add_attribute_lists([second]);

    assert_eq!(updated.text(), "[First][Second] class Foo {}");
    assert_eq!(class.syntax().text(), "[First] class Foo {}", "view is untouched");
}

#[test]
fn test_add_attribute_lists_without_existing_lists() {
    let root = root_of(vec![factory::class_declaration("Foo").build()]);
    let class = root
        .descendants()
        .find_map(ClassDeclaration::cast)
        .expect("class declaration");
    let list = factory::attribute_list(vec![factory::attribute(
        factory::identifier_name("Marker"),
        None,
    )]);
    assert_eq!(class.add_attribute_lists([list]).text(), "[Marker]class Foo {}");
}

#[test]
fn test_assignment_and_member_access_views() {
    let root = root_of(vec![factory::class_declaration("Page")
        .member(factory::method_declaration(
            "Build",
            vec![
                factory::expression_statement(factory::assignment(
                    factory::member_access_chain("this.label.Text"),
                    factory::string_literal("Hello"),
                )),
                factory::expression_statement(factory::assignment(
                    factory::identifier_name("count"),
                    factory::numeric_literal(3),
                )),
            ],
        ))
        .build()]);

    let assignments: Vec<AssignmentExpression> = root
        .descendants()
        .filter_map(AssignmentExpression::cast)
        .collect();
    assert_eq!(assignments.len(), 2);

    let member = MemberAccessExpression::cast(assignments[0].left().expect("left"))
        .expect("member access");
    assert_eq!(member.name().as_deref(), Some("Text"));
    let receiver = member.expression().expect("receiver");
    assert_eq!(dotted_name(&receiver).as_deref(), Some("this.label"));

    let literal = LiteralExpression::cast(assignments[0].right().expect("right")).expect("literal");
    assert!(literal.is_string());
    let number = LiteralExpression::cast(assignments[1].right().expect("right")).expect("literal");
    assert!(!number.is_string());
    assert!(MemberAccessExpression::cast(assignments[1].left().expect("left")).is_none());
}

#[test]
fn test_attribute_arguments() {
    let root = root_of(vec![factory::class_declaration("Foo")
        .attribute_list(factory::attribute_list(vec![factory::attribute(
            factory::parse_name("System.AttributeUsage"),
            Some(factory::attribute_argument_list(vec![factory::attribute_argument(
                factory::member_access_chain("System.AttributeTargets.Class"),
            )])),
        )]))
        .build()]);
    let attribute = root
        .descendants()
        .find_map(Attribute::cast)
        .expect("attribute");
    let name = attribute.name().expect("name");
    assert_eq!(dotted_name(&name).as_deref(), Some("System.AttributeUsage"));
    let arguments = attribute.arguments();
    assert_eq!(arguments.len(), 1);
    assert_eq!(
        dotted_name(&arguments[0]).as_deref(),
        Some("System.AttributeTargets.Class")
    );
}

#[test]
fn test_containing_namespace_nested() {
    let root = root_of(vec![factory::namespace_declaration(
        "Outer",
        vec![factory::namespace_declaration(
            "Inner.Deep",
            vec![factory::class_declaration("Foo").build()],
        )],
    )]);
    let class = root
        .descendants()
        .find_map(ClassDeclaration::cast)
        .expect("class declaration");
    assert_eq!(
        containing_namespace(class.syntax()).as_deref(),
        Some("Outer.Inner.Deep")
    );
    assert_eq!(containing_namespace(&root), None);

    let using = root
        .children()
        .find_map(UsingDirective::cast)
        .expect("using directive");
    assert_eq!(using.name().as_deref(), Some("System"));
}
