use lexguard_core::config::NormalizeConfig;
use lexguard_normalize::Preprocessor;

fn only(f: impl FnOnce(&mut NormalizeConfig)) -> Preprocessor {
    let mut config = NormalizeConfig::identity();
    f(&mut config);
    Preprocessor::new(config)
}

// ── Individual options ───────────────────────────────────────────────────

#[test]
fn case_fold() {
    let p = only(|c| c.ignore_case = Some(true));
    assert_eq!(p.process("SeQiNg"), "seqing");
    assert_eq!(p.process("ÄÖÜ"), "äöü");
}

#[test]
fn case_fold_expands_multi_char_lowercase() {
    let p = only(|c| c.ignore_case = Some(true));
    // U+0130 lowercases to "i" + U+0307.
    let n = p.process_with_offsets("xİy");
    assert_eq!(n.text(), "xi\u{307}y");
    assert_eq!(n.offsets(), &[0, 1, 1, 2]);
    assert_eq!(n.original_span(1, 3), (1, 2));
}

#[test]
fn width_fold() {
    let p = only(|c| c.ignore_width = Some(true));
    assert_eq!(p.process("Ｈello"), "Hello");
    assert_eq!(p.process("ａｂｃ１２３！"), "abc123!");
    assert_eq!(p.process("a\u{3000}b"), "a b");
}

#[test]
fn width_and_case_together() {
    let p = only(|c| {
        c.ignore_width = Some(true);
        c.ignore_case = Some(true);
    });
    assert_eq!(p.process("ＨＥＬＬＯ"), "hello");
}

#[test]
fn skip_whitespace() {
    let p = only(|c| c.skip_whitespace = Some(true));
    assert_eq!(p.process(" b a\td\n"), "bad");
    assert_eq!(p.process("敏 感"), "敏感");
}

#[test]
fn numeral_fold() {
    let p = only(|c| c.ignore_num_style = Some(true));
    assert_eq!(p.process("１②㈢四〇"), "12340");
    assert_eq!(p.process("二十"), "20");
    assert_eq!(p.process("abc"), "abc");
}

#[test]
fn identity_leaves_text_alone() {
    let p = Preprocessor::identity();
    assert!(p.is_identity());
    let text = "ＡＢＣ  Mixed 二";
    assert_eq!(p.process(text), text);
    let n = p.process_with_offsets(text);
    assert_eq!(n.text(), text);
    assert_eq!(n.offsets(), (0..text.chars().count()).collect::<Vec<_>>().as_slice());
}

#[test]
fn defaults_fold_case_and_width() {
    let p = Preprocessor::default();
    assert!(!p.is_identity());
    assert_eq!(p.process("ＢＡＤ Word"), "bad word");
}

#[test]
fn empty_text() {
    let p = Preprocessor::default();
    assert_eq!(p.process(""), "");
    let n = p.process_with_offsets("");
    assert!(n.is_empty());
    assert_eq!(n.original_len(), 0);
    assert_eq!(n.original_span(0, 0), (0, 0));
}

// ── Offset mapping ───────────────────────────────────────────────────────

#[test]
fn skipped_whitespace_is_covered_by_span() {
    let p = only(|c| c.skip_whitespace = Some(true));
    let n = p.process_with_offsets("x b a d y");
    assert_eq!(n.text(), "xbady");
    assert_eq!(n.offsets(), &[0, 2, 4, 6, 8]);
    // "bad" in normalized text is 1..4, which covers "b a d" in the original.
    assert_eq!(n.original_span(1, 4), (2, 7));
    assert_eq!(n.original_len(), 9);
}

#[test]
fn span_past_end_clamps_to_original_length() {
    let p = Preprocessor::default();
    let n = p.process_with_offsets("abc");
    assert_eq!(n.original_index(10), 3);
    assert_eq!(n.original_span(1, 3), (1, 3));
}

#[test]
fn inert_hooks_do_not_change_output() {
    let mut config = NormalizeConfig::default();
    config.enable_pinyin = true;
    config.enable_homophone = true;
    config.max_distance = Some(2);
    let hooked = Preprocessor::new(config);
    let plain = Preprocessor::default();
    assert_eq!(hooked.process("Ni Hao 你好"), plain.process("Ni Hao 你好"));
    assert!(hooked.config().enable_pinyin);
}
