//! Print the normalized query.

use quarry_lib::ReaderOptions;

use super::query_loader::{load_query_or_exit, prepare};

pub struct NormalizeArgs {
    pub query: Option<String>,
    pub query_text: Option<String>,
    pub options: ReaderOptions,
}

pub fn run(args: NormalizeArgs) {
    let raw = load_query_or_exit(args.query.as_deref(), args.query_text.as_deref());
    println!("{}", prepare(&raw, args.options, false));
}
