//! Dispatch logic: extract params from `ArgMatches` and convert them to
//! command args.

use clap::ArgMatches;
use quarry_lib::ReaderOptions;

use super::ColorChoice;
use crate::commands::ast::AstArgs;
use crate::commands::check::CheckArgs;
use crate::commands::normalize::NormalizeArgs;
use crate::commands::tokens::TokensArgs;

/// Arguments every command shares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub query: Option<String>,
    pub query_text: Option<String>,
    pub fold: bool,
    pub max_depth: u32,
    pub color: ColorChoice,
}

impl QueryParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: m.get_one::<String>("query").cloned(),
            query_text: m.get_one::<String>("query_text").cloned(),
            fold: m.get_flag("fold"),
            max_depth: m.get_one::<u32>("max_depth").copied().unwrap_or(0),
            color: parse_color(m),
        }
    }

    /// `--max-depth 0` disables the nesting limit.
    pub fn reader_options(&self) -> ReaderOptions {
        let limit = (self.max_depth > 0).then_some(self.max_depth);
        ReaderOptions::default()
            .fold_operators(self.fold)
            .recursion_limit(limit)
    }
}

pub struct NormalizeParams {
    pub query: QueryParams,
}

impl NormalizeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: QueryParams::from_matches(m),
        }
    }
}

impl From<NormalizeParams> for NormalizeArgs {
    fn from(p: NormalizeParams) -> Self {
        Self {
            options: p.query.reader_options(),
            query: p.query.query,
            query_text: p.query.query_text,
        }
    }
}

pub struct TokensParams {
    pub query: QueryParams,
    pub spans: bool,
    pub no_normalize: bool,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: QueryParams::from_matches(m),
            spans: m.get_flag("spans"),
            no_normalize: m.get_flag("no_normalize"),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            options: p.query.reader_options(),
            color: p.query.color.should_colorize(),
            query: p.query.query,
            query_text: p.query.query_text,
            spans: p.spans,
            no_normalize: p.no_normalize,
        }
    }
}

pub struct AstParams {
    pub query: QueryParams,
    pub json: bool,
    pub no_normalize: bool,
}

impl AstParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: QueryParams::from_matches(m),
            json: m.get_flag("json"),
            no_normalize: m.get_flag("no_normalize"),
        }
    }
}

impl From<AstParams> for AstArgs {
    fn from(p: AstParams) -> Self {
        Self {
            options: p.query.reader_options(),
            color: p.query.color.should_colorize(),
            query: p.query.query,
            query_text: p.query.query_text,
            json: p.json,
            no_normalize: p.no_normalize,
        }
    }
}

pub struct CheckParams {
    pub query: QueryParams,
    pub no_normalize: bool,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            query: QueryParams::from_matches(m),
            no_normalize: m.get_flag("no_normalize"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            options: p.query.reader_options(),
            color: p.query.color.should_colorize(),
            query: p.query.query,
            query_text: p.query.query_text,
            no_normalize: p.no_normalize,
        }
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
