use super::*;

#[test]
fn marked_tone_only_on_marked_letters() {
    assert_eq!(RawTag::MarkedLetter(Tone::Fourth).marked_tone(), Some(Tone::Fourth));
    assert_eq!(RawTag::Letter.marked_tone(), None);
    assert_eq!(RawTag::Punctuation('.').marked_tone(), None);
}

#[test]
fn end_is_exclusive() {
    let tok = RawToken {
        tag: RawTag::MarkedLetter(Tone::Third),
        start: 3,
        len: 2,
    };
    assert_eq!(tok.end(), 5);
}
