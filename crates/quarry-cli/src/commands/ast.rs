//! Show the AST of a query.

use quarry_lib::{Node, ParseError, ParseResult, ReaderOptions};
use serde::Serialize;

use super::query_loader::{load_query_or_exit, parse, prepare};

pub struct AstArgs {
    pub query: Option<String>,
    pub query_text: Option<String>,
    pub options: ReaderOptions,
    pub json: bool,
    pub no_normalize: bool,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let raw = load_query_or_exit(args.query.as_deref(), args.query_text.as_deref());
    let source = prepare(&raw, args.options, args.no_normalize);
    let result = parse(&source, args.options);

    if args.json {
        match to_json(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    if result.has_errors() {
        eprint!("{}", result.render_errors(args.color));
    }
    match result.root() {
        Some(root) => print!("{}", root.printer().colored(args.color).dump()),
        None => eprintln!("(empty query)"),
    }
}

/// Root and errors in one document; spans point into `normalized`.
#[derive(Serialize)]
struct AstDocument<'r> {
    normalized: &'r str,
    root: Option<&'r Node>,
    errors: &'r [ParseError],
}

pub fn to_json(result: &ParseResult) -> serde_json::Result<String> {
    let doc = AstDocument {
        normalized: result.source(),
        root: result.root(),
        errors: result.errors(),
    };
    serde_json::to_string_pretty(&doc)
}
