//! List the tokens the scanner produces.

use quarry_core::Colors;
use quarry_lib::{ReaderOptions, Token, lex};

use super::query_loader::{load_query_or_exit, prepare};

pub struct TokensArgs {
    pub query: Option<String>,
    pub query_text: Option<String>,
    pub options: ReaderOptions,
    pub spans: bool,
    pub no_normalize: bool,
    pub color: bool,
}

pub fn run(args: TokensArgs) {
    let raw = load_query_or_exit(args.query.as_deref(), args.query_text.as_deref());
    let source = prepare(&raw, args.options, args.no_normalize);
    let colors = Colors::new(args.color);
    for token in lex(&source) {
        println!("{}", format_token(&token, args.spans, colors));
    }
}

pub fn format_token(token: &Token<'_>, spans: bool, colors: Colors) -> String {
    let mut out = format!(
        "{}{}{} {}{:?}{}",
        colors.blue, token.kind, colors.reset, colors.green, token.text, colors.reset
    );
    if spans {
        out.push_str(&format!(" {}@ {}{}", colors.dim, token.span, colors.reset));
    }
    out
}
