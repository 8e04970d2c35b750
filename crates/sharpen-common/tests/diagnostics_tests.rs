use super::*;

const SAMPLE: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "XX001",
    title: "Sample",
    message: "Sample message.",
    category: "Testing",
    default_severity: Severity::Warning,
    enabled_by_default: true,
    description: "A sample rule.",
};

#[test]
fn test_create_copies_descriptor_fields() {
    let diagnostic = Diagnostic::create(&SAMPLE, Location::new("a.cs", Span::new(3, 4)));

    assert_eq!(diagnostic.id, "XX001");
    assert_eq!(diagnostic.title, "Sample");
    assert_eq!(diagnostic.message, "Sample message.");
    assert_eq!(diagnostic.severity, Severity::Warning);
    assert_eq!(diagnostic.location.file, "a.cs");
    assert_eq!(diagnostic.span(), Span::new(3, 4));
}

#[test]
fn test_with_severity_overrides_default() {
    let diagnostic = Diagnostic::create(&SAMPLE, Location::new("a.cs", Span::at(0)))
        .with_severity(Severity::Error);
    assert_eq!(diagnostic.severity, Severity::Error);
}

#[test]
fn test_severity_serializes_lowercase() {
    let json = serde_json::to_string(&Severity::Info).expect("serialize");
    assert_eq!(json, "\"info\"");
    let parsed: Severity = serde_json::from_str("\"error\"").expect("deserialize");
    assert_eq!(parsed, Severity::Error);
    assert!(Severity::Error > Severity::Warning);
}
