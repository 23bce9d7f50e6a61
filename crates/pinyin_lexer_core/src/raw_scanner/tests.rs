use pretty_assertions::assert_eq;

use super::*;
use crate::Tone;

/// Helper: scan a source string and collect all units.
fn scan(source: &str) -> Vec<RawToken> {
    RawScanner::new(source).collect()
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

// ─── Coverage ───────────────────────────────────────────────────

#[test]
fn units_tile_the_source() {
    let sources = [
        "",
        "x",
        "ni3 hao3",
        "Yě kěyǐ.",
        "Zhōngguó，nǐ hǎo。",
        "ni\u{030C}ha\u{030C}o",
        "lu\u{0308}\u{0300} cha2\r\n",
        "nu\u{0308}3 LU\u{0308}",
        "e\u{0302} ~ 🙂",
    ];
    for source in sources {
        let mut expected_start = 0;
        for tok in scan(source) {
            assert_eq!(tok.start, expected_start, "gap before {tok:?} in {source:?}");
            assert!(tok.len > 0, "zero-length unit {tok:?} in {source:?}");
            expected_start = tok.end();
        }
        assert_eq!(expected_start, source.len(), "units do not cover {source:?}");
    }
}

#[test]
fn empty_source_yields_nothing() {
    assert!(scan("").is_empty());
}

// ─── Classification ─────────────────────────────────────────────

#[test]
fn numeric_pinyin() {
    assert_eq!(
        scan_tags("ni3 hao3."),
        vec![
            RawTag::Letter,
            RawTag::Letter,
            RawTag::Digit('3'),
            RawTag::Whitespace(' '),
            RawTag::Letter,
            RawTag::Letter,
            RawTag::Letter,
            RawTag::Digit('3'),
            RawTag::Punctuation('.'),
        ]
    );
}

#[test]
fn precomposed_marks() {
    assert_eq!(
        scan_tags("nǐ"),
        vec![RawTag::Letter, RawTag::MarkedLetter(Tone::Third)]
    );
}

#[test]
fn decomposed_mark_is_one_unit() {
    let tokens = scan("ni\u{030C}");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].tag, RawTag::MarkedLetter(Tone::Third));
    assert_eq!(tokens[1].start, 1);
    assert_eq!(tokens[1].len, 3);
}

#[test]
fn decomposed_umlaut_with_tone() {
    assert_eq!(
        scan_tags("lu\u{0308}\u{0300}"),
        vec![RawTag::Letter, RawTag::MarkedLetter(Tone::Fourth)]
    );
}

#[test]
fn decomposed_umlaut_without_tone() {
    let tokens = scan("lu\u{0308}4");
    assert_eq!(
        tokens.iter().map(|t| t.tag).collect::<Vec<_>>(),
        vec![RawTag::Letter, RawTag::Letter, RawTag::Digit('4')]
    );
    assert_eq!(tokens[1].start, 1);
    assert_eq!(tokens[1].len, 3);
}

#[test]
fn crlf_is_two_whitespace_units() {
    assert_eq!(
        scan_tags("a\r\nb"),
        vec![
            RawTag::Letter,
            RawTag::Whitespace('\r'),
            RawTag::Whitespace('\n'),
            RawTag::Letter,
        ]
    );
}

#[test]
fn non_tone_combining_mark_is_split_off() {
    assert_eq!(
        scan_tags("e\u{0302}"),
        vec![RawTag::Letter, RawTag::Other('\u{0302}')]
    );
}

#[test]
fn fullwidth_punctuation() {
    assert_eq!(
        scan_tags("。，–"),
        vec![
            RawTag::Punctuation('。'),
            RawTag::Punctuation('，'),
            RawTag::Punctuation('–'),
        ]
    );
}

#[test]
fn other_characters() {
    assert_eq!(
        scan_tags("~ 好"),
        vec![
            RawTag::Other('~'),
            RawTag::Whitespace(' '),
            RawTag::Other('好'),
        ]
    );
}

#[test]
fn classify_single_chars() {
    assert_eq!(classify_char('q'), RawTag::Letter);
    assert_eq!(classify_char('Ü'), RawTag::Letter);
    assert_eq!(classify_char('ā'), RawTag::MarkedLetter(Tone::First));
    assert_eq!(classify_char('0'), RawTag::Digit('0'));
    assert_eq!(classify_char('\u{000B}'), RawTag::Whitespace('\u{000B}'));
    assert_eq!(classify_char('?'), RawTag::Punctuation('?'));
    assert_eq!(classify_char('#'), RawTag::Other('#'));
}

// ─── Property Tests ─────────────────────────────────────────────

mod proptest_tiling {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn units_tile_arbitrary_text(source in "\\PC{0,64}") {
            let mut expected_start = 0;
            for tok in RawScanner::new(&source) {
                prop_assert_eq!(tok.start, expected_start);
                prop_assert!(tok.len > 0);
                expected_start = tok.end();
            }
            prop_assert_eq!(expected_start, source.len());
        }

        #[test]
        fn single_char_units_match_classify(source in "[a-zü0-9 .,;?!āáǎàēéěè~]{0,32}") {
            for tok in RawScanner::new(&source) {
                let unit = &source[tok.start..tok.end()];
                let mut chars = unit.chars();
                let first = chars.next();
                prop_assert!(first.is_some());
                prop_assert!(chars.next().is_none(), "multi-char unit {:?}", unit);
                if let Some(c) = first {
                    prop_assert_eq!(tok.tag, classify_char(c));
                }
            }
        }
    }
}
