//! Single-pass character classification.
//!
//! The input is consumed one line at a time. Only the `\n` terminator is
//! stripped before a line is measured; a `\r` left by CRLF input is an
//! ordinary whitespace character.

use crate::classify::{CharClass, classify};
use crate::options::TrailingWordPolicy;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead};

/// Final counters of one scan.
///
/// `letters` is not stored; it is always `uppercase + lowercase`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCounts {
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
    pub spaces: usize,
    pub punctuation: usize,
    pub digits: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    pub other: usize,
}

impl ClassCounts {
    #[inline]
    pub const fn letters(&self) -> usize {
        self.uppercase + self.lowercase
    }

    /// Sum over all classification buckets.
    #[inline]
    pub const fn classified(&self) -> usize {
        self.spaces + self.punctuation + self.digits + self.letters() + self.other
    }
}

/// Accumulator threaded through a scan.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanState {
    counts: ClassCounts,
    in_word: bool,
}

impl ScanState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one line (without its terminator) into the state.
    #[must_use]
    pub fn feed_line(self, line: &str) -> Self {
        let Self { mut counts, in_word } = self;
        counts.lines += 1;
        let in_word = line.chars().fold(in_word, |in_word, c| {
            counts.characters += 1;
            let class = classify(c);
            match class {
                CharClass::Upper => counts.uppercase += 1,
                CharClass::Lower => counts.lowercase += 1,
                CharClass::Space => counts.spaces += 1,
                CharClass::Punctuation => counts.punctuation += 1,
                CharClass::Digit => counts.digits += 1,
                CharClass::Other => counts.other += 1,
            }
            if class.is_letter() {
                true
            } else if class.closes_word() {
                if in_word {
                    counts.words += 1;
                }
                false
            } else {
                in_word
            }
        });
        Self { counts, in_word }
    }

    #[must_use]
    pub const fn finish(self, policy: TrailingWordPolicy) -> ClassCounts {
        let mut counts = self.counts;
        if self.in_word && matches!(policy, TrailingWordPolicy::Count) {
            counts.words += 1;
        }
        counts
    }
}

/// Scan a whole stream.
///
/// # Errors
/// Returns the underlying I/O error if reading fails part way through.
pub fn scan<R: BufRead>(reader: &mut R, policy: TrailingWordPolicy) -> io::Result<ClassCounts> {
    let mut state = ScanState::new();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        let line = line_buf.strip_suffix(b"\n").unwrap_or(&line_buf[..]);
        let line = String::from_utf8_lossy(line);
        state = state.feed_line(&line);
    }

    Ok(state.finish(policy))
}
