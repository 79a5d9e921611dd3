use crate::pairs::MostFrequentPair;
use crate::report::Report;
use crate::scanner::ClassCounts;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const KEY_CHARACTERS: &str = "CHARACTERS";
pub const KEY_DIGITS: &str = "DIGITS";
pub const KEY_LETTERS: &str = "LETTERS";
pub const KEY_LINES: &str = "LINES";
pub const KEY_LOWERCASE: &str = "LOWERCASE";
pub const KEY_OTHER: &str = "OTHER";
pub const KEY_PUNCTUATION: &str = "PUNCTUATION";
pub const KEY_SPACES: &str = "SPACES";
pub const KEY_UPPERCASE: &str = "UPPERCASE";
pub const KEY_WORDS: &str = "WORDS";
pub const KEY_PAIR: &str = "MOST_FREQUENT_ORDERED_PAIR";
pub const KEY_PAIR_COUNT: &str = "MOST_FREQUENT_ORDERED_PAIR_COUNT";

/// Value of [`KEY_PAIR`] when the stream held fewer than two tokens.
pub const NO_PAIR: &str = "none";

/// Result of the pair analysis, when it was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    NoPairs,
    Found(MostFrequentPair),
}

impl From<Option<MostFrequentPair>> for PairOutcome {
    fn from(value: Option<MostFrequentPair>) -> Self {
        value.map_or(Self::NoPairs, Self::Found)
    }
}

/// Everything measured for one readable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub counts: ClassCounts,
    /// `None` when the pair analysis was not requested.
    pub pair: Option<PairOutcome>,
}

impl Statistics {
    /// Named statistics, sorted by key.
    #[must_use]
    pub fn to_stat_map(&self) -> BTreeMap<String, String> {
        let c = &self.counts;
        let mut map: BTreeMap<String, String> = [
            (KEY_LINES, c.lines),
            (KEY_WORDS, c.words),
            (KEY_CHARACTERS, c.characters),
            (KEY_SPACES, c.spaces),
            (KEY_PUNCTUATION, c.punctuation),
            (KEY_DIGITS, c.digits),
            (KEY_LETTERS, c.letters()),
            (KEY_UPPERCASE, c.uppercase),
            (KEY_LOWERCASE, c.lowercase),
            (KEY_OTHER, c.other),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_string()))
        .collect();

        match &self.pair {
            None => {}
            Some(PairOutcome::NoPairs) => {
                map.insert(KEY_PAIR.to_owned(), NO_PAIR.to_owned());
            }
            Some(PairOutcome::Found(best)) => {
                map.insert(KEY_PAIR.to_owned(), best.pair.to_string());
                map.insert(KEY_PAIR_COUNT.to_owned(), best.count.to_string());
            }
        }

        map
    }
}

/// Per-file result of a batch run.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub report: Report,
    pub statistics: Option<Statistics>,
}

/// Outcome of a whole batch.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Reports that were written, including "could not open" ones.
    pub reports: Vec<FileReport>,
    pub errors: Vec<(PathBuf, crate::error::EngineError)>,
}
