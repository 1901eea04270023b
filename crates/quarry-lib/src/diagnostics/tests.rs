use quarry_core::Span;

use super::*;

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedTerm, Span::new(0, 3))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    let diag = &diagnostics.as_slice()[0];
    assert_eq!(diag.kind(), DiagnosticKind::ExpectedTerm);
    assert_eq!(diag.message(), "expected a search term");
    assert_eq!(diag.offset(), 0);
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::MissingOperand, Span::new(4, 5))
        .message("-")
        .emit();

    insta::assert_snapshot!(diagnostics.to_string(), @"error at 4..5: `-` has no term to apply to");
}

#[test]
fn custom_message_templates() {
    assert_eq!(
        DiagnosticKind::UnclosedGroup.message(Some("group opened here")),
        "missing closing `)`; group opened here"
    );
    assert_eq!(
        DiagnosticKind::UnexpectedToken.message(Some("`AND`")),
        "unexpected token: `AND`"
    );
    assert_eq!(
        DiagnosticKind::DuplicateFilter.message(None),
        "term already has a filter"
    );
}

#[test]
fn priority_order() {
    assert!(DiagnosticKind::RecursionLimitExceeded < DiagnosticKind::UnclosedGroup);
    assert!(DiagnosticKind::ExpectedTerm < DiagnosticKind::DuplicateBoost);
    assert!(DiagnosticKind::RecursionLimitExceeded.is_fatal());
    assert!(!DiagnosticKind::UnclosedGroup.is_fatal());
}

#[test]
fn builder_with_related() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, Span::new(0, 5))
        .message("primary")
        .related_to("related info", Span::new(6, 10))
        .emit();

    let result = diagnostics.render("hello world!");
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`; primary
      |
    1 | hello world!
      | ^^^^^ ---- related info
    ");
}

#[test]
fn builder_with_fix() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::DuplicateBoost, Span::new(0, 5))
        .fix("remove the extra boost", "fixed")
        .emit();

    let result = diagnostics.render("hello world");
    insta::assert_snapshot!(result, @r"
    error: term already has a boost
      |
    1 | hello world
      | ^^^^^
      |
    help: remove the extra boost
      |
    1 - hello world
    1 + fixed world
      |
    ");
}

#[test]
fn printer_colored() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::EmptyGroup, Span::new(0, 2))
        .emit();

    let result = diagnostics.render_colored("() a", true);
    assert!(result.contains("empty"));
    assert!(result.contains('\x1b'));
}

#[test]
fn printer_empty_diagnostics() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.render("source").is_empty());
}

#[test]
fn printer_zero_width_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedTerm, Span::empty(0))
        .message("zero width error")
        .emit();

    let result = diagnostics.render("hello");
    insta::assert_snapshot!(result, @r"
    error: expected a search term: zero width error
      |
    1 | hello
      | ^
    ");
}

#[test]
fn printer_multiple_diagnostics() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, Span::new(0, 5))
        .message("first error")
        .emit();
    diagnostics
        .report(DiagnosticKind::IllegalToken, Span::new(6, 10))
        .message("second error")
        .emit();

    let result = diagnostics.render("hello world!");
    insta::assert_snapshot!(result, @r"
    error: missing closing `)`; first error
      |
    1 | hello world!
      | ^^^^^

    error: unrecognized input: second error
      |
    1 | hello world!
      |       ^^^^
    ");
}

#[test]
fn plain_printer_without_source() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, Span::new(0, 1))
        .fix("close the group", "()")
        .emit();
    diagnostics
        .report(DiagnosticKind::DanglingOperator, Span::new(3, 5))
        .message("OR")
        .related_to("left term", Span::new(1, 2))
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 0..1: missing closing `)` (fix: close the group)
    error at 3..5: `OR` has no right-hand term (related: left term at 1..2)
    ");
}

#[test]
fn parse_error_serializes() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedBoostValue, Span::new(2, 3))
        .emit();

    let json = serde_json::to_string(&diagnostics.as_slice()[0]).unwrap();
    insta::assert_snapshot!(json, @r#"{"kind":"ExpectedBoostValue","range":{"start":2,"end":3},"message":"expected a number after `^`"}"#);
}
