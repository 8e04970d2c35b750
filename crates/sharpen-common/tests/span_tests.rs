use super::*;

#[test]
fn test_span_contains_is_half_open() {
    let span = Span::new(4, 3);
    assert!(!span.contains(3));
    assert!(span.contains(4));
    assert!(span.contains(6));
    assert!(!span.contains(7), "end offset is exclusive");
}

#[test]
fn test_span_contains_span_accepts_caret_at_end() {
    let span = Span::new(10, 5);
    assert!(span.contains_span(Span::new(11, 2)));
    assert!(span.contains_span(Span::at(15)));
    assert!(!span.contains_span(Span::new(14, 2)));
    assert!(!span.contains_span(Span::at(9)));
}

#[test]
fn test_span_from_bounds_clamps_inverted_range() {
    assert_eq!(Span::from_bounds(3, 8), Span::new(3, 5));
    assert_eq!(Span::from_bounds(8, 3), Span::new(8, 0));
}

#[test]
fn test_span_end_never_overflows() {
    let span = Span::new(10, u32::MAX);
    assert_eq!(span.end(), u32::MAX);
    assert_eq!(span.checked_end(), None);
    assert_eq!(Span::new(10, 5).checked_end(), Some(15));
    assert!(!Span::new(0, 20).contains_span(span));
}
