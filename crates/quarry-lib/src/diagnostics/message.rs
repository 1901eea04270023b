use quarry_core::Span;
use serde::Serialize;

/// Diagnostic kinds ordered by priority (highest priority first).
///
/// The parser reports at most one diagnostic per source position; when two
/// productions fail at the same token the earlier (more specific) report wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DiagnosticKind {
    // Abort the whole parse
    RecursionLimitExceeded,

    // Group structure
    UnclosedGroup,
    UnmatchedCloseParen,
    EmptyGroup,

    // User omitted something required
    ExpectedTerm,
    MissingOperand,
    ExpectedFilterValue,
    ExpectedBoostValue,
    ExpectedRangeBound,
    DanglingOperator,

    // User wrote something that doesn't belong
    UnterminatedPhrase,
    IllegalToken,
    UnexpectedToken,

    // Suffix misuse on an otherwise valid term
    FilterOnNonWord,
    BoostOnGroup,
    RangeWithoutFilter,
    RangeKindMismatch,
    DuplicateFilter,
    DuplicateBoost,
    DuplicateRange,
}

impl DiagnosticKind {
    /// Kinds that discard the whole parse instead of recovering.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::RecursionLimitExceeded)
    }

    /// Base message for this kind, used when no detail is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::RecursionLimitExceeded => "groups are nested too deeply",

            Self::UnclosedGroup => "missing closing `)`",
            Self::UnmatchedCloseParen => "unmatched `)`",
            Self::EmptyGroup => "empty `()` group",

            Self::ExpectedTerm => "expected a search term",
            Self::MissingOperand => "prefix operator has no term",
            Self::ExpectedFilterValue => "expected a filter value",
            Self::ExpectedBoostValue => "expected a number after `^`",
            Self::ExpectedRangeBound => "expected a date or number after `..`",
            Self::DanglingOperator => "operator has no right-hand term",

            Self::UnterminatedPhrase => "unterminated phrase",
            Self::IllegalToken => "unrecognized input",
            Self::UnexpectedToken => "unexpected token",

            Self::FilterOnNonWord => "filters apply only to plain words",
            Self::BoostOnGroup => "only single terms can be boosted",
            Self::RangeWithoutFilter => "ranges are only valid as filter values",
            Self::RangeKindMismatch => "range bounds must both be dates or both numbers",
            Self::DuplicateFilter => "term already has a filter",
            Self::DuplicateBoost => "term already has a boost",
            Self::DuplicateRange => "term already has a range",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::MissingOperand => "`{}` has no term to apply to".to_string(),
            Self::DanglingOperator => "`{}` has no right-hand term".to_string(),
            Self::FilterOnNonWord => "filter `{}` must follow a plain word".to_string(),
            Self::DuplicateFilter => "term already has filter `{}`".to_string(),
            Self::UnclosedGroup | Self::UnterminatedPhrase => {
                format!("{}; {{}}", self.fallback_message())
            }
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

/// Suggested rewrite of the reported range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fix {
    pub(crate) replacement: String,
    pub(crate) description: String,
}

impl Fix {
    pub fn new(replacement: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            replacement: replacement.into(),
            description: description.into(),
        }
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Secondary location that explains a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedInfo {
    pub(crate) range: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(range: Span, message: impl Into<String>) -> Self {
        Self {
            range,
            message: message.into(),
        }
    }
}

/// One syntax error found while parsing, located in the normalized query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseError {
    pub(crate) kind: DiagnosticKind,
    pub(crate) range: Span,
    pub(crate) message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fix: Option<Fix>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) related: Vec<RelatedInfo>,
}

impl ParseError {
    pub(crate) fn new(kind: DiagnosticKind, range: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            range,
            message: message.into(),
            fix: None,
            related: Vec::new(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, range: Span) -> Self {
        Self::new(kind, range, kind.fallback_message())
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn range(&self) -> Span {
        self.range
    }

    /// Byte offset of the error in the normalized query.
    pub fn offset(&self) -> usize {
        self.range.start as usize
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn fix(&self) -> Option<&Fix> {
        self.fix.as_ref()
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error at {}: {}", self.range, self.message)?;
        if let Some(fix) = &self.fix {
            write!(f, " (fix: {})", fix.description)?;
        }
        for related in &self.related {
            write!(f, " (related: {} at {})", related.message, related.range)?;
        }
        Ok(())
    }
}
