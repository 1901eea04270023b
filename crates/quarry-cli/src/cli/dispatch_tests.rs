//! Tests for CLI argument wiring and params extraction.

use quarry_lib::ReaderOptions;

use super::*;
use crate::cli::commands::{ast_command, check_command, normalize_command, tokens_command};
use crate::commands::normalize::NormalizeArgs;

#[test]
fn positional_query() {
    let m = normalize_command()
        .try_get_matches_from(["normalize", "a b"])
        .unwrap();
    let params = NormalizeParams::from_matches(&m);
    assert_eq!(params.query.query.as_deref(), Some("a b"));
    assert_eq!(params.query.query_text, None);
}

#[test]
fn normalize_args_carry_reader_options() {
    let m = normalize_command()
        .try_get_matches_from(["normalize", "a", "--fold", "--max-depth", "7"])
        .unwrap();
    let args: NormalizeArgs = NormalizeParams::from_matches(&m).into();
    assert_eq!(args.query.as_deref(), Some("a"));
    assert_eq!(args.query_text, None);
    assert_eq!(
        args.options,
        ReaderOptions::default()
            .fold_operators(true)
            .recursion_limit(Some(7))
    );
}

#[test]
fn inline_query_may_start_with_hyphen() {
    let m = ast_command()
        .try_get_matches_from(["ast", "-q", "-word"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert_eq!(params.query.query_text.as_deref(), Some("-word"));
}

#[test]
fn positional_and_inline_conflict() {
    let result = check_command().try_get_matches_from(["check", "a", "-q", "b"]);
    assert!(result.is_err());
}

#[test]
fn reader_defaults() {
    let m = check_command().try_get_matches_from(["check", "a"]).unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.query.reader_options(), ReaderOptions::default());
    assert_eq!(params.query.color, ColorChoice::Auto);
    assert!(!params.no_normalize);
}

#[test]
fn reader_flags() {
    let m = ast_command()
        .try_get_matches_from(["ast", "a", "--fold", "--max-depth", "3", "--json"])
        .unwrap();
    let params = AstParams::from_matches(&m);
    assert!(params.json);
    assert_eq!(
        params.query.reader_options(),
        ReaderOptions::default()
            .fold_operators(true)
            .recursion_limit(Some(3))
    );
}

#[test]
fn zero_depth_disables_limit() {
    let m = check_command()
        .try_get_matches_from(["check", "a", "--max-depth", "0"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.query.reader_options().recursion_limit, None);
}

#[test]
fn invalid_depth_rejected() {
    let result = check_command().try_get_matches_from(["check", "a", "--max-depth", "deep"]);
    assert!(result.is_err());
}

#[test]
fn tokens_flags() {
    let m = tokens_command()
        .try_get_matches_from(["tokens", "a", "--spans", "--no-normalize", "--color", "never"])
        .unwrap();
    let params = TokensParams::from_matches(&m);
    assert!(params.spans);
    assert!(params.no_normalize);
    assert_eq!(params.query.color, ColorChoice::Never);
    assert!(!params.query.color.should_colorize());
}

#[test]
fn invalid_color_rejected() {
    let result = tokens_command().try_get_matches_from(["tokens", "a", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn json_only_on_ast() {
    let result = normalize_command().try_get_matches_from(["normalize", "a", "--json"]);
    assert!(result.is_err());
}

#[test]
fn subcommand_required() {
    assert!(build_cli().try_get_matches_from(["quarry"]).is_err());
    let m = build_cli()
        .try_get_matches_from(["quarry", "tokens", "a"])
        .unwrap();
    assert_eq!(m.subcommand_name(), Some("tokens"));
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    for name in ["normalize", "tokens", "ast", "check"] {
        assert!(help.contains(name), "missing {name} in help");
    }
}
