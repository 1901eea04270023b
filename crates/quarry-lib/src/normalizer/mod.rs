//! Lenient rewriting of raw user input into a canonical query string.
//!
//! Every phase is total: any input produces some (possibly empty) output, and
//! nothing here reports an error. Repairs are silent.
//!
//! 1. [`segment`](segment::segment) splits raw text into typed pieces.
//! 2. [`clean`](cleanup::clean) trims, folds, collapses repeated operators and
//!    glues split URLs back together.
//! 3. [`rewrite`](rewrite::rewrite) drops bare operators, repairs filters and
//!    boosts, and quotes emoticons.
//! 4. [`assemble`](assemble::assemble) balances parentheses and joins the
//!    pieces with explicit `OR` separators.

mod assemble;
mod cleanup;
mod rewrite;
mod segment;

#[cfg(test)]
mod normalizer_tests;

/// The pipeline converges in one or two rounds on real input; this bounds
/// pathological cases.
const MAX_ROUNDS: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    fold_operators: bool,
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite `AND` to `OR` and drop parentheses embedded inside terms.
    pub fn fold_operators(mut self, value: bool) -> Self {
        self.fold_operators = value;
        self
    }

    /// Normalize until the output no longer changes.
    pub fn normalize(&self, raw: &str) -> String {
        let mut current = self.pass(raw);
        for _ in 1..MAX_ROUNDS {
            let next = self.pass(&current);
            if next == current {
                break;
            }
            current = next;
        }
        tracing::debug!(raw, normalized = %current, "normalized query");
        current
    }

    fn pass(&self, raw: &str) -> String {
        let segments = segment::segment(raw);
        tracing::trace!(count = segments.len(), "segmented");

        let segments = cleanup::clean(raw, segments, self.fold_operators);
        tracing::trace!(count = segments.len(), "cleaned");

        let segments = rewrite::rewrite(segments);
        tracing::trace!(count = segments.len(), "rewritten");

        assemble::assemble(segments)
    }
}

/// Normalize with default options.
pub fn normalize(raw: &str) -> String {
    Normalizer::new().normalize(raw)
}
