use super::*;

#[test]
fn test_metadata_name() {
    let attribute = TypeSymbol::new("System", "Attribute", TypeKind::Class);
    assert_eq!(attribute.metadata_name(), "System.Attribute");
    assert_eq!(attribute.to_string(), "System.Attribute");

    let global = TypeSymbol::new("", "Foo", TypeKind::Class);
    assert_eq!(global.namespace, None);
    assert_eq!(global.metadata_name(), "Foo");
}

#[test]
fn test_has_metadata_name() {
    let symbol = TypeSymbol::new("Xamarin.Forms", "View", TypeKind::Class);
    assert!(symbol.has_metadata_name("Xamarin.Forms.View"));
    assert!(!symbol.has_metadata_name("View"));
    assert!(!symbol.has_metadata_name("Xamarin.FormsView"));
    assert!(!symbol.has_metadata_name("Xamarin.Forms.ViewCell"));

    let global = TypeSymbol::new("", "View", TypeKind::Class);
    assert!(global.has_metadata_name("View"));
    assert!(!global.has_metadata_name("Xamarin.Forms.View"));
}

#[test]
fn test_reference_and_value_kinds() {
    assert!(TypeKind::Class.is_reference_type());
    assert!(TypeKind::Interface.is_reference_type());
    assert!(TypeKind::Delegate.is_reference_type());
    assert!(!TypeKind::Struct.is_reference_type());
    assert!(!TypeKind::Enum.is_reference_type());
}
