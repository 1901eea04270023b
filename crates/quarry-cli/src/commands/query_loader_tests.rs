use quarry_lib::ReaderOptions;

use super::query_loader::{load_query, parse, prepare};

#[test]
fn inline_text_wins() {
    assert_eq!(load_query(Some("a"), Some("b")), Ok("b".to_string()));
    assert_eq!(load_query(Some("a"), None), Ok("a".to_string()));
}

#[test]
fn missing_query() {
    let err = load_query(None, None).unwrap_err();
    insta::assert_snapshot!(err, @"query is required: use positional argument or -q/--query");
}

#[test]
fn prepare_normalizes_unless_asked_not_to() {
    let options = ReaderOptions::default();
    assert_eq!(prepare("a  b", options, false), "a OR b");
    assert_eq!(prepare("a  b", options, true), "a  b");
}

#[test]
fn parse_honors_depth_limit() {
    let options = ReaderOptions::default().recursion_limit(Some(1));
    assert!(parse("( ( a ) )", options).root().is_none());
    assert!(parse("( a )", options).root().is_some());
}
