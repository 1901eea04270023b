use quarry_lib::ReaderOptions;

use super::query_loader::{load_query_or_exit, parse, prepare};

pub struct CheckArgs {
    pub query: Option<String>,
    pub query_text: Option<String>,
    pub options: ReaderOptions,
    pub no_normalize: bool,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let raw = load_query_or_exit(args.query.as_deref(), args.query_text.as_deref());
    let source = prepare(&raw, args.options, args.no_normalize);
    let result = parse(&source, args.options);

    if result.has_errors() {
        eprint!("{}", result.render_errors(args.color));
        std::process::exit(1);
    }

    // Silent on success
}
