use quarry_core::Colors;
use quarry_lib::{ReaderOptions, lex};

use super::ast::to_json;
use super::query_loader::parse;
use super::tokens::format_token;

#[test]
fn token_lines() {
    let tokens = lex("lang:en^2");
    let lines: Vec<_> = tokens
        .iter()
        .map(|t| format_token(t, false, Colors::OFF))
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r#"
    Word "lang"
    Filter ":"
    Word "en"
    Boost "^"
    Number "2"
    "#);
}

#[test]
fn token_lines_with_spans() {
    let tokens = lex("#a");
    insta::assert_snapshot!(format_token(&tokens[0], true, Colors::OFF), @r##"Hashtag "#a" @ 0..2"##);
}

#[test]
fn ast_json_document() {
    let result = parse("a OR", ReaderOptions::default());
    insta::assert_snapshot!(to_json(&result).unwrap(), @r#"
    {
      "normalized": "a OR",
      "root": {
        "type": "Word",
        "text": "a",
        "kind": "Word"
      },
      "errors": [
        {
          "kind": "DanglingOperator",
          "range": {
            "start": 2,
            "end": 4
          },
          "message": "`OR` has no right-hand term"
        }
      ]
    }
    "#);
}
