#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core lexical data shared by the quarry query pipeline.
//!
//! Everything here is stateless and allocation-free:
//! - [`Span`]: byte range into a query string
//! - [`emoticon`]: ASCII emoticon list and Unicode pictograph code-point table
//! - [`utils`]: operator characters and filter-key predicates
//! - [`Colors`]: ANSI palette for dumps

pub mod colors;
pub mod emoticon;
pub mod span;
pub mod utils;

pub use colors::Colors;
pub use span::Span;

#[cfg(test)]
mod emoticon_tests;
