//! Command builders for the CLI.
//!
//! Every subcommand takes the query the same way and accepts the reader
//! flags, so a query can be moved between commands without editing flags.

use clap::Command;

use super::args::*;

/// Query input plus the reader knobs shared by every command.
fn with_query_args(cmd: Command) -> Command {
    cmd.arg(query_arg())
        .arg(query_text_arg())
        .arg(fold_arg())
        .arg(max_depth_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("quarry")
        .about("Inspect how free-text search queries normalize and parse")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(normalize_command())
        .subcommand(tokens_command())
        .subcommand(ast_command())
        .subcommand(check_command())
}

/// Print the normalized query.
pub fn normalize_command() -> Command {
    let cmd = Command::new("normalize")
        .about("Print the normalized form of a query")
        .after_help(
            r#"EXAMPLES:
  quarry normalize 'rust  --async (tokio'   # rust OR -async OR ( tokio )
  quarry normalize --fold 'a AND b'         # a OR b
  echo 'a b' | quarry normalize -"#,
        );
    with_query_args(cmd)
}

/// List scanner tokens.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("List the tokens of a normalized query")
        .after_help(
            r#"EXAMPLES:
  quarry tokens 'date:2020-01-01..2020-12-31'
  quarry tokens --spans 'lang:en^2'
  quarry tokens --no-normalize -q '-"open'"#,
        )
        .arg(spans_arg())
        .arg(no_normalize_arg());
    with_query_args(cmd)
}

/// Print the query AST.
pub fn ast_command() -> Command {
    let cmd = Command::new("ast")
        .about("Show the AST of a query")
        .after_help(
            r#"EXAMPLES:
  quarry ast 'rust (async OR tokio) -java'
  quarry ast --json 'country:"United States"^2'
  quarry ast --no-normalize 'a OR'          # report errors instead of repairing"#,
        )
        .arg(json_arg())
        .arg(no_normalize_arg());
    with_query_args(cmd)
}

/// Validate a query.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Report parse errors; exits with status 1 if there are any")
        .after_help(
            r#"EXAMPLES:
  quarry check 'a OR b'
  quarry check --no-normalize '( a'
  quarry check --max-depth 4 '((((((a))))))'"#,
        )
        .arg(no_normalize_arg());
    with_query_args(cmd)
}
