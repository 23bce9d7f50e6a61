//! Tone-marked vowel tables.
//!
//! Pinyin marks tones 1-4 with a diacritic on one vowel of the syllable:
//! macron (tone 1), acute (tone 2), caron (tone 3), grave (tone 4). The
//! neutral tone has no mark.
//!
//! Both the precomposed code points (`ǎ`, U+01CE) and the decomposed form
//! (`a` + U+030C COMBINING CARON) occur in real text. The precomposed table
//! is a flat array; decomposed clusters are recognized by their combining
//! mark.

use unicode_segmentation::UnicodeSegmentation;

use crate::Tone;

/// Number of vowels per tone block: `a e i o u ü` in both cases.
const BLOCK: usize = 12;

/// Plain vowels, in the same order as each block of [`TONE_MARKED_VOWELS`].
const PLAIN_VOWELS: [char; BLOCK] = [
    'a', 'e', 'i', 'o', 'u', '\u{00FC}', // ü
    'A', 'E', 'I', 'O', 'U', '\u{00DC}', // Ü
];

/// The 48 precomposed tone-marked vowels, in four 12-character blocks.
///
/// Block `n` (0-based) holds the vowels carrying tone `n + 1`. Within a
/// block, position `i` is the marked form of `PLAIN_VOWELS[i]`.
const TONE_MARKED_VOWELS: [char; 4 * BLOCK] = [
    // Tone 1: macron
    '\u{0101}', '\u{0113}', '\u{012B}', '\u{014D}', '\u{016B}', '\u{01D6}', // ā ē ī ō ū ǖ
    '\u{0100}', '\u{0112}', '\u{012A}', '\u{014C}', '\u{016A}', '\u{01D5}', // Ā Ē Ī Ō Ū Ǖ
    // Tone 2: acute
    '\u{00E1}', '\u{00E9}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{01D8}', // á é í ó ú ǘ
    '\u{00C1}', '\u{00C9}', '\u{00CD}', '\u{00D3}', '\u{00DA}', '\u{01D7}', // Á É Í Ó Ú Ǘ
    // Tone 3: caron
    '\u{01CE}', '\u{011B}', '\u{01D0}', '\u{01D2}', '\u{01D4}', '\u{01DA}', // ǎ ě ǐ ǒ ǔ ǚ
    '\u{01CD}', '\u{011A}', '\u{01CF}', '\u{01D1}', '\u{01D3}', '\u{01D9}', // Ǎ Ě Ǐ Ǒ Ǔ Ǚ
    // Tone 4: grave
    '\u{00E0}', '\u{00E8}', '\u{00EC}', '\u{00F2}', '\u{00F9}', '\u{01DC}', // à è ì ò ù ǜ
    '\u{00C0}', '\u{00C8}', '\u{00CC}', '\u{00D2}', '\u{00D9}', '\u{01DB}', // À È Ì Ò Ù Ǜ
];

/// Combining marks for tones 1-4, indexed by `tone - 1`.
const COMBINING_TONE_MARKS: [char; 4] = [
    '\u{0304}', // macron
    '\u{0301}', // acute
    '\u{030C}', // caron
    '\u{0300}', // grave
];

/// U+0308 COMBINING DIAERESIS, turning a decomposed `u` into `ü`.
const COMBINING_DIAERESIS: char = '\u{0308}';

#[inline]
fn marked_position(c: char) -> Option<usize> {
    TONE_MARKED_VOWELS.iter().position(|&marked| marked == c)
}

fn tone_of_block(block: usize) -> Option<Tone> {
    u8::try_from(block + 1).ok().and_then(Tone::from_number)
}

/// Returns `true` for one of the 48 precomposed tone-marked vowels.
#[inline]
pub fn is_diacritic_letter(c: char) -> bool {
    marked_position(c).is_some()
}

/// Tone carried by a precomposed tone-marked vowel.
///
/// Returns `None` for every other character, including plain vowels. No
/// character maps to [`Tone::Neutral`].
pub fn tone_of_diacritic(c: char) -> Option<Tone> {
    marked_position(c).and_then(|pos| tone_of_block(pos / BLOCK))
}

/// Map a precomposed tone-marked vowel to its plain vowel, preserving case.
///
/// `ǚ` maps to `ü`, not `u`. Characters outside the table are returned
/// unchanged.
pub fn strip_diacritic(c: char) -> char {
    match marked_position(c) {
        Some(pos) => PLAIN_VOWELS[pos % BLOCK],
        None => c,
    }
}

fn combining_tone(mark: char) -> Option<Tone> {
    COMBINING_TONE_MARKS
        .iter()
        .position(|&m| m == mark)
        .and_then(tone_of_block)
}

/// Recognize a decomposed tone-marked vowel.
///
/// Accepts a grapheme cluster made of a plain Pinyin vowel followed by one
/// combining tone mark. `u`/`U` may carry U+0308 before the tone mark, in
/// which case the plain vowel is `ü`/`Ü`. Returns the plain vowel and the
/// tone, or `None` if the cluster has any other shape.
pub fn decomposed_tone(cluster: &str) -> Option<(char, Tone)> {
    let mut chars = cluster.chars();
    let base = chars.next()?;
    let mut mark = chars.next()?;

    let plain = match (base, mark) {
        ('u', COMBINING_DIAERESIS) => {
            mark = chars.next()?;
            '\u{00FC}'
        }
        ('U', COMBINING_DIAERESIS) => {
            mark = chars.next()?;
            '\u{00DC}'
        }
        _ => base,
    };

    if chars.next().is_some() || !PLAIN_VOWELS.contains(&plain) {
        return None;
    }
    combining_tone(mark).map(|tone| (plain, tone))
}

/// Recognize a decomposed `ü`/`Ü` with no tone mark: `u`/`U` + U+0308.
pub fn decomposed_umlaut(cluster: &str) -> Option<char> {
    let mut chars = cluster.chars();
    let plain = match chars.next()? {
        'u' => '\u{00FC}',
        'U' => '\u{00DC}',
        _ => return None,
    };
    (chars.next()? == COMBINING_DIAERESIS && chars.next().is_none()).then_some(plain)
}

/// Replace every tone-marked vowel in `text` with its plain vowel.
///
/// Handles precomposed and decomposed marks. Everything else, including
/// combining marks that are not tone marks, passes through unchanged.
pub fn strip_diacritics(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for cluster in text.graphemes(true) {
        match decomposed_tone(cluster) {
            Some((plain, _)) => out.push(plain),
            None => out.extend(cluster.chars().map(strip_diacritic)),
        }
    }
    out
}
