//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so every subcommand spells its flags
//! the same way.

use clap::{Arg, ArgAction, value_parser};

/// Query text (positional). `-` reads stdin.
pub fn query_arg() -> Arg {
    Arg::new("query")
        .value_name("QUERY")
        .conflicts_with("query_text")
        .help("Query text, or - to read stdin")
}

/// Inline query text (-q/--query).
pub fn query_text_arg() -> Arg {
    Arg::new("query_text")
        .short('q')
        .long("query")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Inline query text")
}

/// Operator folding (--fold).
pub fn fold_arg() -> Arg {
    Arg::new("fold")
        .long("fold")
        .action(ArgAction::SetTrue)
        .help("Rewrite AND to OR and drop parentheses embedded in terms")
}

/// Group nesting limit (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .default_value("256")
        .value_parser(value_parser!(u32))
        .help("Maximum group nesting (0 disables the limit)")
}

/// Skip the normalizer (--no-normalize).
pub fn no_normalize_arg() -> Arg {
    Arg::new("no_normalize")
        .long("no-normalize")
        .action(ArgAction::SetTrue)
        .help("Parse the query as written, without normalizing it first")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of the indented dump")
}

/// Show byte spans (--spans).
pub fn spans_arg() -> Arg {
    Arg::new("spans")
        .long("spans")
        .action(ArgAction::SetTrue)
        .help("Show byte spans")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
