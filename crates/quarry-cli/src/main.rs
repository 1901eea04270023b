mod cli;
mod commands;

use cli::{AstParams, CheckParams, NormalizeParams, TokensParams, build_cli};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    if let Some((name, _)) = matches.subcommand() {
        tracing::debug!(command = name, "running");
    }

    match matches.subcommand() {
        Some(("normalize", m)) => {
            let params = NormalizeParams::from_matches(m);
            commands::normalize::run(params.into());
        }
        Some(("tokens", m)) => {
            let params = TokensParams::from_matches(m);
            commands::tokens::run(params.into());
        }
        Some(("ast", m)) => {
            let params = AstParams::from_matches(m);
            commands::ast::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// Library events go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
