use std::io::{self, Read};

use quarry_lib::{ParseResult, Parser, QueryReader, ReaderOptions};

/// Query text from `-q`, the positional argument, or stdin for `-`.
pub fn load_query(query: Option<&str>, query_text: Option<&str>) -> Result<String, String> {
    if let Some(text) = query_text {
        return Ok(text.to_string());
    }

    match query {
        Some("-") => load_stdin(),
        Some(text) => Ok(text.to_string()),
        None => Err("query is required: use positional argument or -q/--query".to_string()),
    }
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

/// Load the query or exit with status 1.
pub fn load_query_or_exit(query: Option<&str>, query_text: Option<&str>) -> String {
    load_query(query, query_text).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}

/// Text the parser sees: the raw query, or its normalized form.
pub fn prepare(raw: &str, options: ReaderOptions, no_normalize: bool) -> String {
    if no_normalize {
        return raw.to_string();
    }
    let mut reader = QueryReader::with_options(options);
    reader.read_string(raw).to_string()
}

pub fn parse(source: &str, options: ReaderOptions) -> ParseResult {
    Parser::new(source)
        .with_recursion_fuel(options.recursion_limit)
        .parse()
}
