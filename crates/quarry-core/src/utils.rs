//! Operator tables and character predicates shared by the normalizer and scanner.

/// Filter operators, longest first so prefix matching picks `:>=` over `:>`.
pub const FILTER_OPERATORS: &[&str] = &[":>=", ":<=", ":>", ":<", ":=", ":"];

/// Segments made of only one of these carry no term and are dropped.
pub const BARE_OPERATORS: &[&str] = &[
    ":", "-", "+", "#", "@", "^", "'", ":>", ":<", ":>=", ":<=", ":=",
];

/// Operators whose repeats collapse to one occurrence (`--a` → `-a`).
/// Two-character operators come first so `:>:>` is not read as `:` `>` `:` `>`.
pub const COLLAPSIBLE_OPERATORS: &[&str] = &[":>", ":<", "-", "+", "#", "@", "^", ":"];

/// Filter operator at the start of `s`.
pub fn filter_operator_prefix(s: &str) -> Option<&'static str> {
    FILTER_OPERATORS.iter().copied().find(|op| s.starts_with(op))
}

/// Filter operator at the end of `s`, longest match.
pub fn filter_operator_suffix(s: &str) -> Option<&'static str> {
    FILTER_OPERATORS.iter().copied().find(|op| s.ends_with(op))
}

pub fn is_bare_operator(s: &str) -> bool {
    BARE_OPERATORS.contains(&s)
}

/// `OR` / `AND`, case-sensitive like the query language itself.
pub fn is_operator_keyword(s: &str) -> bool {
    matches!(s, "OR" | "AND")
}

#[inline]
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Valid filter field name: a letter or `_`, then word characters.
///
/// # Examples
/// ```
/// use quarry_core::utils::is_filter_key;
/// assert!(is_filter_key("country"));
/// assert!(is_filter_key("_id2"));
/// assert!(!is_filter_key("2nd"));
/// assert!(!is_filter_key(""));
/// ```
pub fn is_filter_key(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(is_word_char),
        _ => false,
    }
}

/// Byte length of a `scheme://` prefix at the start of `s`.
pub fn url_scheme_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => return None,
    }
    for (i, c) in chars {
        if c.is_ascii_alphanumeric() || matches!(c, '+' | '.' | '-') {
            continue;
        }
        return s[i..].starts_with("://").then_some(i + 3);
    }
    None
}

/// `scheme://` followed by at least one more character.
pub fn looks_like_url(s: &str) -> bool {
    url_scheme_len(s).is_some_and(|n| n < s.len())
}

/// Whether `c` can begin the value of a `field:value` filter.
#[inline]
pub fn is_value_start(c: char) -> bool {
    is_word_char(c) || matches!(c, '"' | '#' | '@' | '-' | '+' | '(' | '.')
}
