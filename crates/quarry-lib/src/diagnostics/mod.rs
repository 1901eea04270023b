//! Syntax errors collected while parsing a normalized query.

mod message;
mod printer;

#[cfg(test)]
mod tests;

use quarry_core::Span;

pub use message::{DiagnosticKind, Fix, ParseError, RelatedInfo};
pub use printer::DiagnosticsPrinter;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<ParseError>,
}

#[must_use = "diagnostic not emitted, call .emit()"]
pub struct DiagnosticBuilder<'a> {
    diagnostics: &'a mut Diagnostics,
    message: ParseError,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Create a diagnostic with the given kind and span.
    ///
    /// Uses the kind's default message. Call `.message()` on the builder to override.
    pub fn report(&mut self, kind: DiagnosticKind, range: Span) -> DiagnosticBuilder<'_> {
        DiagnosticBuilder {
            diagnostics: self,
            message: ParseError::with_default_message(kind, range),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn has_fatal(&self) -> bool {
        self.messages.iter().any(|m| m.kind.is_fatal())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParseError> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[ParseError] {
        &self.messages
    }

    pub fn into_vec(self) -> Vec<ParseError> {
        self.messages
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.messages.extend(other.messages);
    }

    /// Render against the query text the ranges point into.
    pub fn render(&self, source: &str) -> String {
        self.printer().source(source).render()
    }

    pub fn render_colored(&self, source: &str, colored: bool) -> String {
        self.printer().source(source).colored(colored).render()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diag) in self.messages.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diag}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a ParseError;
    type IntoIter = std::slice::Iter<'a, ParseError>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}

impl<'a> DiagnosticBuilder<'a> {
    /// Provide custom detail for this diagnostic, rendered using the kind's template.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        let detail = msg.into();
        self.message.message = self.message.kind.message(Some(&detail));
        self
    }

    pub fn related_to(mut self, msg: impl Into<String>, range: Span) -> Self {
        self.message.related.push(RelatedInfo::new(range, msg));
        self
    }

    pub fn fix(mut self, description: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.message.fix = Some(Fix::new(replacement, description));
        self
    }

    pub fn emit(self) {
        tracing::debug!(
            kind = ?self.message.kind,
            range = %self.message.range,
            "parse error: {}",
            self.message.message
        );
        self.diagnostics.messages.push(self.message);
    }
}
