use super::*;
use sharpen_syntax::SyntaxKind;

#[test]
fn test_generate_class_usage() {
    let list = AttributeUsageAnnotationGenerator::generate(AttributeTargets::Class);
    assert_eq!(list.kind(), SyntaxKind::AttributeList);
    assert_eq!(
        list.text(),
        "[System.AttributeUsage(System.AttributeTargets.Class)]"
    );
}

#[test]
fn test_generate_every_target() {
    for target in AttributeTargets::ALL {
        let text = AttributeUsageAnnotationGenerator::generate(target).text();
        assert_eq!(
            text,
            format!("[System.AttributeUsage(System.AttributeTargets.{target})]")
        );
    }
}

#[test]
fn test_generated_lists_share_nothing_mutable() {
    let first = AttributeUsageAnnotationGenerator::generate(AttributeTargets::Method);
    let second = AttributeUsageAnnotationGenerator::generate(AttributeTargets::Method);
    assert_eq!(first, second, "generation is deterministic");
    assert!(!first.ptr_eq(&second));
}

#[test]
fn test_targets_deserialize_by_member_name() {
    let target: AttributeTargets = serde_json::from_str("\"ReturnValue\"").expect("deserialize");
    assert_eq!(target, AttributeTargets::ReturnValue);
    assert_eq!(AttributeTargets::default(), AttributeTargets::Class);
}
