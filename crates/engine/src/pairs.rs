//! Frequency of adjacent ordered token pairs.
//!
//! Tokens are runs of non-whitespace. The window slides across line breaks,
//! so the last token of one line pairs with the first token of the next.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, BufRead};

/// Two consecutive tokens in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderedPair {
    pub first: String,
    pub second: String,
}

impl OrderedPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }
}

impl fmt::Display for OrderedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostFrequentPair {
    pub pair: OrderedPair,
    pub count: u64,
}

#[derive(Debug, Clone, Default)]
pub struct PairFrequencies {
    counts: HashMap<OrderedPair, u64>,
}

impl PairFrequencies {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, pair: OrderedPair) {
        *self.counts.entry(pair).or_insert(0) += 1;
    }

    #[must_use]
    pub fn get(&self, first: &str, second: &str) -> Option<u64> {
        self.counts.get(&OrderedPair::new(first, second)).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// The highest-count pair.
    ///
    /// Ties go to the lexicographically smallest `(first, second)`, which
    /// keeps the answer independent of hash order. `None` when no pair was
    /// recorded.
    #[must_use]
    pub fn most_frequent(&self) -> Option<MostFrequentPair> {
        self.counts
            .iter()
            .max_by(|(pa, ca), (pb, cb)| ca.cmp(cb).then_with(|| pb.cmp(pa)))
            .map(|(pair, &count)| MostFrequentPair {
                pair: pair.clone(),
                count,
            })
    }
}

/// Count every adjacent token pair of a stream.
///
/// # Errors
/// Returns the underlying I/O error if reading fails.
pub fn count_pairs<R: BufRead>(reader: &mut R) -> io::Result<PairFrequencies> {
    let mut freqs = PairFrequencies::new();
    let mut previous: Option<String> = None;
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        if reader.read_until(b'\n', &mut line_buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&line_buf);
        for token in line.split_whitespace() {
            if let Some(prev) = previous.replace(token.to_owned()) {
                freqs.record(OrderedPair::new(prev, token));
            }
        }
    }

    Ok(freqs)
}

/// Most frequent adjacent pair of a stream, `None` for fewer than two tokens.
///
/// # Errors
/// Returns the underlying I/O error if reading fails.
pub fn most_frequent_pair<R: BufRead>(reader: &mut R) -> io::Result<Option<MostFrequentPair>> {
    Ok(count_pairs(reader)?.most_frequent())
}
