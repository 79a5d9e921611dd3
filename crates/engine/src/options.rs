use serde::{Deserialize, Serialize};

/// Optional analyses that run in addition to the character scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Analysis {
    /// Most frequent pair of adjacent whitespace-delimited tokens.
    MostFrequentOrderedPair,
}

/// What to do with a word that is still open when the stream ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrailingWordPolicy {
    /// Only words closed by whitespace or punctuation are counted.
    #[default]
    Drop,
    /// An unterminated final word is counted as well.
    Count,
}
