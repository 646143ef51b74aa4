// Character classification for Ukrainian text

/// The apostrophe used in Ukrainian orthography (U+02BC MODIFIER LETTER APOSTROPHE).
pub const APOSTROPHE: char = '\u{02BC}';

/// Characters that are written in place of [`APOSTROPHE`] in practice.
const APOSTROPHE_VARIANTS: &[char] = &['\'', '\u{2019}', '`', '\u{02BC}'];

/// Script of a word, decided by its letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// Only ASCII digits.
    Digits,
    /// At least one Latin letter.
    Latin,
    /// Cyrillic letters (and apostrophes or hyphens), no Latin.
    Cyrillic,
    /// Anything else, including the empty string.
    Other,
}

pub fn is_cyrillic(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x04FF | 0x0500..=0x052F)
}

pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c as u32, 0xC0..=0x24F)
}

pub fn is_apostrophe(c: char) -> bool {
    APOSTROPHE_VARIANTS.contains(&c)
}

/// Classify a word by script.
pub fn detect_script(word: &str) -> Script {
    if word.is_empty() {
        return Script::Other;
    }
    if word.chars().all(|c| c.is_ascii_digit()) {
        return Script::Digits;
    }
    if word.chars().any(is_latin) {
        return Script::Latin;
    }
    if word.chars().any(is_cyrillic)
        && word
            .chars()
            .all(|c| is_cyrillic(c) || is_apostrophe(c) || c == '-')
    {
        return Script::Cyrillic;
    }
    Script::Other
}

/// Lowercase a word and replace every apostrophe variant with [`APOSTROPHE`].
pub fn normalize_word(word: &str) -> String {
    word.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if is_apostrophe(c) { APOSTROPHE } else { c })
        .collect()
}
