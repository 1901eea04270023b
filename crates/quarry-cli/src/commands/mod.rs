pub mod ast;
pub mod check;
pub mod normalize;
pub mod query_loader;
pub mod tokens;

#[cfg(test)]
mod query_loader_tests;
#[cfg(test)]
mod commands_tests;
