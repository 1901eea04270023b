use super::cleanup::collapse_repeats;
use super::segment::{SegmentKind, segment};
use super::*;

fn norm(raw: &str) -> String {
    normalize(raw)
}

fn folded(raw: &str) -> String {
    Normalizer::new().fold_operators(true).normalize(raw)
}

#[test]
fn segment_kinds() {
    let kinds: Vec<_> = segment(r#"(a -b +c #d @e ^2 http://x.io "f g")"#)
        .into_iter()
        .map(|s| s.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Paren,
            SegmentKind::Other,
            SegmentKind::Exclude,
            SegmentKind::Include,
            SegmentKind::Hashtag,
            SegmentKind::Mention,
            SegmentKind::Boost,
            SegmentKind::Url,
            SegmentKind::Phrase,
            SegmentKind::Paren,
        ]
    );
}

#[test]
fn segment_drops_unmatched_characters() {
    let texts: Vec<_> = segment("a ^ \" # b")
        .into_iter()
        .map(|s| s.text)
        .collect();
    assert_eq!(texts, vec!["a", "b"]);
}

#[test]
fn segment_hashtag_needs_letter() {
    let segments = segment("#123 #a1");
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].kind, SegmentKind::Other);
    assert_eq!(segments[0].text, "123");
    assert_eq!(segments[1].kind, SegmentKind::Hashtag);
}

#[test]
fn collapse_repeated_operators() {
    assert_eq!(collapse_repeats("--word"), "-word");
    assert_eq!(collapse_repeats("-+-word"), "-word");
    assert_eq!(collapse_repeats("a::b"), "a:b");
    assert_eq!(collapse_repeats("a:>:>b"), "a:>b");
    assert_eq!(collapse_repeats("@@x"), "@x");
    assert_eq!(collapse_repeats("1..5"), "1..5");
}

#[test]
fn implicit_or() {
    insta::assert_snapshot!(norm("phrase word"), @"phrase OR word");
    insta::assert_snapshot!(norm("phrase   OR word"), @"phrase OR word");
    insta::assert_snapshot!(norm("phrase AND word"), @"phrase AND word");
    insta::assert_snapshot!(norm("a b AND c"), @"a OR b AND c");
}

#[test]
fn duplicate_operators() {
    assert_eq!(norm("--word"), norm("-word"));
    insta::assert_snapshot!(norm("--word"), @"-word");
    insta::assert_snapshot!(norm("a--b"), @"a-b");
}

#[test]
fn boost_on_boost() {
    insta::assert_snapshot!(norm("a^1^2"), @"a^2");
    insta::assert_snapshot!(norm("a ^3"), @"a^3");
    insta::assert_snapshot!(norm("a^^2"), @"a^2");
}

#[test]
fn orphan_boosts() {
    insta::assert_snapshot!(norm("(a)^2"), @"( a )");
    insta::assert_snapshot!(norm("^2 a"), @"a");
    insta::assert_snapshot!(norm("a OR ^2 b"), @"a OR b");
    insta::assert_snapshot!(norm("a^"), @"a");
}

#[test]
fn parentheses_balanced() {
    insta::assert_snapshot!(norm("(phrase"), @"( phrase )");
    insta::assert_snapshot!(norm("phrase)"), @"( phrase )");
    insta::assert_snapshot!(norm("(a (b) c"), @"( a OR ( b ) OR c )");
    insta::assert_snapshot!(norm(")("), @"");
    insta::assert_snapshot!(norm("a () b"), @"a OR b");
}

#[test]
fn misplaced_keywords() {
    insta::assert_snapshot!(norm("OR a"), @"a");
    insta::assert_snapshot!(norm("a AND"), @"a");
    insta::assert_snapshot!(norm("a OR OR b"), @"a OR b");
    insta::assert_snapshot!(norm("a OR AND b"), @"a OR b");
    insta::assert_snapshot!(norm("(AND a OR)"), @"( a )");
    insta::assert_snapshot!(norm("a or b"), @"a OR or OR b");
}

#[test]
fn bare_operators_dropped() {
    insta::assert_snapshot!(norm("- a + b : c"), @"a OR b OR c");
    insta::assert_snapshot!(norm("@ #"), @"");
}

#[test]
fn dangling_filter_before_keyword_or_group() {
    insta::assert_snapshot!(norm("a: OR b"), @"a: OR b");
    insta::assert_snapshot!(norm("a: AND b"), @"a: AND b");
    insta::assert_snapshot!(norm("a:(b)"), @"a: OR ( b )");
}

#[test]
fn bare_operator_is_not_a_filter_value() {
    insta::assert_snapshot!(norm("a : c"), @"a OR c");
    insta::assert_snapshot!(norm("a: : c"), @"a:c");
}

#[test]
fn filters() {
    insta::assert_snapshot!(norm(r#"country:"United State""#), @r#"country:"United State""#);
    insta::assert_snapshot!(norm("price:>10"), @"price:>10");
    insta::assert_snapshot!(norm("a: b"), @"a:b");
    insta::assert_snapshot!(norm("date:2020-01-01..2020-12-31"), @"date:2020-01-01..2020-12-31");
}

#[test]
fn invalid_filter_key() {
    insta::assert_snapshot!(norm("1a:b"), @"1a");
    insta::assert_snapshot!(norm("-9:x"), @"-9");
    insta::assert_snapshot!(norm("#tag:x"), @"#tag");
}

#[test]
fn filter_on_filter() {
    insta::assert_snapshot!(norm("a:1:2"), @"a:2");
    insta::assert_snapshot!(norm("a:>1:<2"), @"a:<2");
    insta::assert_snapshot!(norm("a: b:c"), @"a:c");
}

#[test]
fn urls() {
    insta::assert_snapshot!(norm("url:http://example.com:8080"), @"url:http://example.com:8080");
    insta::assert_snapshot!(norm("http://example.com/a_(b)"), @"http://example.com/a_(b)");
    insta::assert_snapshot!(norm("(see http://x.io)"), @"( see OR http://x.io )");
    insta::assert_snapshot!(norm("http://x.io/#top"), @"http://x.io/#top");
    insta::assert_snapshot!(norm("http://x.io^2"), @"http://x.io^2");
}

#[test]
fn url_keeps_only_closed_parens() {
    insta::assert_snapshot!(norm("http://a.b/c(x)"), @"http://a.b/c(x)");
    insta::assert_snapshot!(norm("see http://a.b/c( x"), @"see OR http://a.b/c OR ( x )");
    insta::assert_snapshot!(norm("http://a.b/c(x"), @"http://a.b/c OR ( x )");
}

#[test]
fn emoticons_quoted() {
    insta::assert_snapshot!(norm("a :) b"), @r#"a OR ":)" OR b"#);
    insta::assert_snapshot!(norm("I ❤️ rust"), @r#"I OR "❤️" OR rust"#);
    insta::assert_snapshot!(norm("🇫🇷"), @r#""🇫🇷""#);
    insta::assert_snapshot!(norm("(:-)"), @r#"( ":-)" )"#);
    insta::assert_snapshot!(norm("a:)"), @"( a: )");
}

#[test]
fn unterminated_quotes() {
    insta::assert_snapshot!(norm(r#""phrase"#), @"phrase");
    insta::assert_snapshot!(norm(r#"-"phrase"#), @r#"-"phrase"#);
    insta::assert_snapshot!(norm(r#"+"a b" c"#), @r#"+"a b" OR c"#);
}

#[test]
fn unterminated_signed_phrase_stops_at_paren() {
    insta::assert_snapshot!(norm(r#"(-"x"#), @r#"( -"x )"#);
    insta::assert_snapshot!(norm(r#"(+"x)"#), @r#"( +"x )"#);
}

#[test]
fn hashtags_and_mentions() {
    insta::assert_snapshot!(norm("#rust @alice"), @"#rust OR @alice");
    insta::assert_snapshot!(norm("@-"), @"@-");
    insta::assert_snapshot!(norm("##tag"), @"#tag");
}

#[test]
fn fold_operators() {
    insta::assert_snapshot!(folded("a AND b"), @"a OR b");
    insta::assert_snapshot!(folded("(a AND b) c"), @"( a OR b ) OR c");
    insta::assert_snapshot!(norm("a AND b"), @"a AND b");
}

#[test]
fn empty_input() {
    assert_eq!(norm(""), "");
    assert_eq!(norm("   \t\n"), "");
}

const SAMPLES: &[&str] = &[
    "phrase word",
    "--word ++x ##y",
    "a^1^2 (b)^3 ^4",
    "((a b) c",
    "a) (b",
    "OR AND a OR",
    "country:\"United State\" AND price:>=10",
    "a:1:2 1x:y a: b:c",
    "url:http://example.com:8080 http://example.com/a_(b)",
    "x http://x.io/#frag(1) y",
    "I ❤️ rust :) :-(",
    "-\"phrase +\"a b\"",
    "a::::b ::: ^^^",
    "date:2020-01-01..2020-12-31^2",
    "(:) (",
    "a AND (OR b) ()",
    "(-\"x",
    "(+\"x) y",
    "a: OR b a:(b) a : c",
    "see http://a.b/c( x http://a.b/c(x)",
];

#[test]
fn normalize_is_idempotent() {
    for raw in SAMPLES {
        let once = norm(raw);
        assert_eq!(norm(&once), once, "input: {raw:?}");
        let once = folded(raw);
        assert_eq!(folded(&once), once, "folded input: {raw:?}");
    }
}

fn assert_balanced(raw: &str, out: &str) {
    let mut depth = 0i32;
    for seg in segment(out) {
        if seg.is_open_paren() {
            depth += 1;
        } else if seg.is_close_paren() {
            depth -= 1;
        }
        assert!(depth >= 0, "input: {raw:?} → {out:?}");
    }
    assert_eq!(depth, 0, "input: {raw:?} → {out:?}");
}

#[test]
fn normalize_balances_parentheses() {
    for raw in SAMPLES {
        assert_balanced(raw, &norm(raw));
    }
}

const PIECES: &[&str] = &[
    "a", "b1", "(", ")", "\"", "-", "+", ":", ":>", "^2", "#t", "@u", "OR", "AND",
    "http://x.io/", ":)", "x:", " ", " ", " ",
];

/// Deterministic inputs glued together from query fragments.
fn generated_inputs(count: usize) -> impl Iterator<Item = String> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) as usize
    };
    (0..count).map(move |_| {
        let len = next() % 12;
        (0..len).map(|_| PIECES[next() % PIECES.len()]).collect()
    })
}

#[test]
fn generated_inputs_normalize_stably() {
    for raw in generated_inputs(4000) {
        let once = norm(&raw);
        assert_eq!(norm(&once), once, "input: {raw:?}");
        assert_balanced(&raw, &once);

        let once = folded(&raw);
        assert_eq!(folded(&once), once, "folded input: {raw:?}");
        assert_balanced(&raw, &once);
    }
}
