/// The five mutually exclusive buckets a character is assigned to.
///
/// Letters carry their case so the scanner can split them into
/// upper/lower counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Space,
    Punctuation,
    Digit,
    Other,
}

impl CharClass {
    /// Whether this class terminates a word in progress.
    #[inline]
    pub const fn closes_word(self) -> bool {
        matches!(self, Self::Space | Self::Punctuation)
    }

    #[inline]
    pub const fn is_letter(self) -> bool {
        matches!(self, Self::Upper | Self::Lower)
    }
}

/// Classify a single character.
///
/// The checks overlap for some code points, so they run in a fixed order
/// and the first match wins: alphabetic, whitespace, punctuation, digit.
/// Alphabetic characters without an uppercase form (e.g. CJK) count as
/// lowercase.
#[inline]
pub fn classify(c: char) -> CharClass {
    if c.is_alphabetic() {
        if c.is_uppercase() {
            CharClass::Upper
        } else {
            CharClass::Lower
        }
    } else if c.is_whitespace() {
        CharClass::Space
    } else if c.is_ascii_punctuation() {
        CharClass::Punctuation
    } else if c.is_ascii_digit() {
        CharClass::Digit
    } else {
        CharClass::Other
    }
}
