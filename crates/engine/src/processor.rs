use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::options::Analysis;
use crate::pairs;
use crate::report::{Report, ReportBody};
use crate::scanner;
use crate::stats::{PairOutcome, Statistics};
use std::fs::File;
use std::io::{BufReader, Seek};
use std::path::Path;
use std::time::Instant;

/// Report for one file plus what produced it.
#[derive(Debug)]
pub struct FileOutcome {
    pub report: Report,
    pub result: Result<Statistics>,
}

/// Measure a single file.
///
/// Never fails as a whole: when the file cannot be read the report carries
/// the "could not open" body and `result` holds the error.
pub fn process_file(path: &Path, config: &Config) -> FileOutcome {
    let size = std::fs::metadata(path).ok().map(|meta| meta.len());
    let started = Instant::now();

    let result = measure(path, config);

    let elapsed = started.elapsed();
    let body = match &result {
        Ok(stats) => ReportBody::Statistics(stats.to_stat_map()),
        Err(_) => ReportBody::CouldNotOpen,
    };

    FileOutcome {
        report: Report {
            name: path.display().to_string(),
            size,
            elapsed,
            body,
        },
        result,
    }
}

fn measure(path: &Path, config: &Config) -> Result<Statistics> {
    let file = File::open(path).map_err(|e| EngineError::FileOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);
    let read_err = |e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    };

    let counts = scanner::scan(&mut reader, config.trailing_word).map_err(read_err)?;

    let pair = if config.is_enabled(Analysis::MostFrequentOrderedPair) {
        reader.rewind().map_err(read_err)?;
        let best = pairs::most_frequent_pair(&mut reader).map_err(read_err)?;
        Some(PairOutcome::from(best))
    } else {
        None
    };

    Ok(Statistics { counts, pair })
}
