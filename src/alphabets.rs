//! Alphabet presets for non-ASCII string generation.
//!
//! Each preset is a plain string of letters (no digits, no punctuation) for
//! the `alphabet` option. Script presets whose letters form contiguous
//! code-point runs are built from ranges; combine presets by concatenating
//! the strings.
//!
//! ```
//! use strgen::{alphabets, StringGen};
//!
//! let mut gen = StringGen::builder(r"\w{8}")
//!     .alphabet(alphabets::GREEK)
//!     .seed(11u64)
//!     .build()
//!     .unwrap();
//! let word = gen.render();
//! assert_eq!(word.chars().count(), 8);
//! ```

/// Latin letters `a-z A-Z` (the built-in default).
pub const ASCII: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Russian Cyrillic letters, both cases.
pub const CYRILLIC: &str =
    "абвгдеёжзийклмнопрстуфхцчшщъыьэюяАБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";

/// Greek letters, both cases (including final sigma).
pub const GREEK: &str = "αβγδεζηθικλμνξοπρσςτυφχψωΑΒΓΔΕΖΗΘΙΚΛΜΝΞΟΠΡΣΤΥΦΧΨΩ";

/// Latin letters plus the Latin-1 accented letters.
pub const LATIN_EXTENDED: &str = concat!(
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝÞß",
    "àáâãäåæçèéêëìíîïðñòóôõöøùúûüýþÿ",
);

/// Builds a string from inclusive Unicode code-point ranges.
fn from_ranges(ranges: &[(u32, u32)]) -> String {
    ranges
        .iter()
        .flat_map(|(start, end)| (*start..=*end).filter_map(char::from_u32))
        .collect()
}

/// Hiragana syllabary.
pub fn hiragana() -> String {
    from_ranges(&[(0x3041, 0x3096)])
}

/// Katakana syllabary.
pub fn katakana() -> String {
    from_ranges(&[(0x30A1, 0x30FA)])
}

/// CJK Unified Ideographs.
pub fn cjk() -> String {
    from_ranges(&[(0x4E00, 0x9FFF)])
}

/// Hangul syllables.
pub fn hangul() -> String {
    from_ranges(&[(0xAC00, 0xD7A3)])
}

/// Arabic letters.
pub fn arabic() -> String {
    from_ranges(&[(0x0621, 0x064A)])
}

/// Devanagari letters.
pub fn devanagari() -> String {
    from_ranges(&[(0x0904, 0x096F)])
}

/// Thai letters.
pub fn thai() -> String {
    from_ranges(&[(0x0E01, 0x0E3A)])
}

/// Hebrew letters.
pub fn hebrew() -> String {
    from_ranges(&[(0x05D0, 0x05EA)])
}

/// Bengali letters.
pub fn bengali() -> String {
    from_ranges(&[(0x0985, 0x09AF), (0x09B6, 0x09B9)])
}

/// Tamil letters.
pub fn tamil() -> String {
    from_ranges(&[
        (0x0B85, 0x0B8A),
        (0x0B8E, 0x0B90),
        (0x0B92, 0x0B95),
        (0x0B99, 0x0B9A),
        (0x0B9C, 0x0B9C),
        (0x0B9E, 0x0B9F),
        (0x0BA3, 0x0BA4),
        (0x0BA8, 0x0BAA),
        (0x0BAE, 0x0BB9),
    ])
}

/// Telugu letters.
pub fn telugu() -> String {
    from_ranges(&[(0x0C05, 0x0C39)])
}

/// Georgian letters (Asomtavruli and Mkhedruli).
pub fn georgian() -> String {
    from_ranges(&[(0x10A0, 0x10C5), (0x10D0, 0x10FA)])
}

/// Armenian letters, both cases.
pub fn armenian() -> String {
    from_ranges(&[(0x0531, 0x0556), (0x0561, 0x0587)])
}

/// Ethiopic syllables.
pub fn ethiopic() -> String {
    from_ranges(&[(0x1200, 0x1248)])
}

/// Myanmar letters.
pub fn myanmar() -> String {
    from_ranges(&[(0x1000, 0x102A)])
}

/// Sinhala letters.
pub fn sinhala() -> String {
    from_ranges(&[(0x0D85, 0x0D96), (0x0D9A, 0x0DC6)])
}

/// Gujarati letters.
pub fn gujarati() -> String {
    from_ranges(&[
        (0x0A85, 0x0A8D),
        (0x0A8F, 0x0A91),
        (0x0A93, 0x0AA9),
        (0x0AAB, 0x0AB0),
        (0x0AB2, 0x0AB3),
        (0x0AB5, 0x0AB9),
    ])
}

/// Punjabi (Gurmukhi) letters.
pub fn punjabi() -> String {
    from_ranges(&[
        (0x0A05, 0x0A0A),
        (0x0A0F, 0x0A10),
        (0x0A13, 0x0A28),
        (0x0A2A, 0x0A30),
        (0x0A32, 0x0A33),
        (0x0A35, 0x0A36),
        (0x0A38, 0x0A39),
    ])
}
