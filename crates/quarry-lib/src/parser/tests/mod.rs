mod suffix_tests;

use super::{ParseResult, Parser};

#[track_caller]
pub fn expect_valid(src: &str) -> String {
    let result = Parser::new(src).parse();
    if result.has_errors() {
        panic!(
            "Expected valid query, got error:\n{}",
            result.diagnostics().printer().render()
        );
    }
    dump_root(&result)
}

/// Root dump, a separator, then one plain line per error.
#[track_caller]
pub fn expect_invalid(src: &str) -> String {
    let result = Parser::new(src).parse();
    if !result.has_errors() {
        panic!("Expected invalid query, got valid:\n{}", dump_root(&result));
    }
    format!(
        "{}---\n{}",
        dump_root(&result),
        result.diagnostics().printer().render()
    )
}

pub fn dump_root(result: &ParseResult) -> String {
    result
        .root()
        .map_or_else(|| "<no root>\n".to_string(), |root| root.dump())
}
