use super::{expect_invalid, expect_valid};

#[test]
fn filter_with_phrase_value() {
    insta::assert_snapshot!(expect_valid(r#"country:"United State""#), @r#"
    Explicit key=country op=:
      Text "United State"
    "#);
}

#[test]
fn boost() {
    insta::assert_snapshot!(expect_valid("phrase^2"), @r#"
    Explicit boost=2
      Word "phrase"
    "#);
}

#[test]
fn comparison_filter_with_boost() {
    insta::assert_snapshot!(expect_valid("price:>=10^1.5"), @r#"
    Explicit key=price op=:>= boost=1.5
      Word "10" (Number)
    "#);
}

#[test]
fn equals_is_equality() {
    insta::assert_snapshot!(expect_valid("lang:=en"), @r#"
    Explicit key=lang op=:
      Word "en"
    "#);
}

#[test]
fn date_range() {
    insta::assert_snapshot!(expect_valid("date:2020-01-01..2020-12-31"), @r#"
    Explicit key=date op=:
      Word "2020-01-01" (Date)
      .. Word "2020-12-31" (Date)
    "#);
}

#[test]
fn number_range_with_boost() {
    insta::assert_snapshot!(expect_valid("n:1..5^3"), @r#"
    Explicit key=n op=: boost=3
      Word "1" (Number)
      .. Word "5" (Number)
    "#);
}

#[test]
fn boosted_hashtag() {
    insta::assert_snapshot!(expect_valid("#tag^3"), @r#"
    Explicit boost=3
      Hashtag "tag"
    "#);
}

#[test]
fn excluded_filter() {
    insta::assert_snapshot!(expect_valid("-lang:en"), @r#"
    Exclude
      Explicit key=lang op=:
        Word "en"
    "#);
}

#[test]
fn duplicate_boost() {
    insta::assert_snapshot!(expect_invalid("a^1^2"), @r#"
    Explicit boost=1
      Word "a"
    ---
    error at 3..4: term already has a boost
    "#);
}

#[test]
fn duplicate_filter() {
    insta::assert_snapshot!(expect_invalid("a:b:c"), @r#"
    Explicit key=a op=:
      Word "b"
    ---
    error at 3..4: term already has filter `a`
    "#);
}

#[test]
fn filter_on_phrase() {
    insta::assert_snapshot!(expect_invalid(r#""a":b OR c"#), @r#"
    Or
      Text "a"
      Word "c"
    ---
    error at 3..4: filter `:` must follow a plain word
    "#);
}

#[test]
fn range_kind_mismatch() {
    insta::assert_snapshot!(expect_invalid("d:2020-01-01..5"), @r#"
    Explicit key=d op=:
      Word "2020-01-01" (Date)
    ---
    error at 12..15: range bounds must both be dates or both numbers: date .. number
    "#);
}

#[test]
fn missing_filter_value() {
    insta::assert_snapshot!(expect_invalid("a:(b)"), @r#"
    Word "a"
    ---
    error at 2..3: expected a filter value
    "#);
}

#[test]
fn missing_boost_value() {
    insta::assert_snapshot!(expect_invalid("a^2x"), @r#"
    Word "a"
    ---
    error at 1..2: expected a number after `^`
    "#);
}

#[test]
fn missing_range_bound() {
    insta::assert_snapshot!(expect_invalid("n:1.."), @r#"
    Explicit key=n op=:
      Word "1" (Number)
    ---
    error at 5..5: expected a date or number after `..`
    "#);
}

#[test]
fn boosted_group() {
    insta::assert_snapshot!(expect_invalid("(a)^2"), @r#"
    Subexpression
      Word "a"
    ---
    error at 3..4: only single terms can be boosted
    "#);
}
