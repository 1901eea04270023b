use crate::emoticon::{
    ascii_emoticon_prefix, is_basic_emoticon, is_emoticon, is_pictograph, pictograph_run_len,
};

#[test]
fn pictograph_table_covers_common_emoji() {
    assert!(is_pictograph('😀'));
    assert!(is_pictograph('🚀'));
    assert!(is_pictograph('❤'));
    assert!(is_pictograph('🤖'));
    assert!(is_pictograph('🇫'));
}

#[test]
fn pictograph_table_rejects_text() {
    assert!(!is_pictograph('a'));
    assert!(!is_pictograph('é'));
    assert!(!is_pictograph('中'));
    assert!(!is_pictograph(':'));
    // Skin tones only continue a sequence.
    assert!(!is_pictograph('\u{200D}'));
}

#[test]
fn run_includes_modifiers_and_joiners() {
    let family = "👨\u{200D}👩\u{200D}👧";
    assert_eq!(pictograph_run_len(family), family.len());

    let waving = "👋🏽";
    assert_eq!(pictograph_run_len(waving), waving.len());

    let flag = "🇫🇷";
    assert_eq!(pictograph_run_len(flag), flag.len());
}

#[test]
fn run_stops_at_text() {
    assert_eq!(pictograph_run_len("😀abc"), "😀".len());
    assert_eq!(pictograph_run_len("abc😀"), 0);
    assert_eq!(pictograph_run_len(""), 0);
}

#[test]
fn ascii_prefix_prefers_longest() {
    assert_eq!(ascii_emoticon_prefix(":-) rest"), Some(":-)"));
    assert_eq!(ascii_emoticon_prefix(":)"), Some(":)"));
    assert_eq!(ascii_emoticon_prefix("a:)"), None);
}

#[test]
fn whole_string_emoticons() {
    assert!(is_emoticon(":)"));
    assert!(is_emoticon("<3"));
    assert!(is_emoticon("😀😀"));
    assert!(!is_emoticon(":)x"));
    assert!(!is_emoticon("hi😀"));
    assert!(!is_emoticon(""));
    assert!(is_basic_emoticon("^_^"));
    assert!(!is_basic_emoticon("😀"));
}
