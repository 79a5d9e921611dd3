// crates/engine/src/lib.rs
use hashbrown::HashMap;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

pub mod classify;
pub mod config;
pub mod error;
pub mod options;
pub mod pairs;
pub mod processor;
pub mod report;
pub mod scanner;
pub mod stats;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::report::{Report, stats_path};
use crate::stats::{FileReport, RunResult};

/// Run the statistics engine over every configured file, in order.
///
/// Each file gets its own report. A file that cannot be opened still gets a
/// report (with the "could not open" body) and its error is collected in
/// `RunResult::errors`; the remaining files are processed regardless.
/// A file whose report path is already taken by another input is skipped
/// with [`EngineError::ReportCollision`].
///
/// # Errors
///
/// Returns an error only for critical failures (the output directory cannot
/// be created), or for the first per-file failure when `config.strict` is
/// set.
pub fn run(config: &Config) -> Result<RunResult> {
    if let Some(dir) = &config.output_dir {
        std::fs::create_dir_all(dir).map_err(|e| {
            EngineError::Config(format!(
                "cannot create output directory '{}': {e}",
                dir.display()
            ))
        })?;
    }

    let mut result = RunResult::default();
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::new();

    for path in &config.files {
        let output = match claim_output(path, config, &mut claimed) {
            Ok(output) => output,
            Err(e) => {
                record(&mut result, path, e, config.strict)?;
                continue;
            }
        };

        debug!("processing {}", path.display());
        let outcome = processor::process_file(path, config);

        let statistics = match outcome.result {
            Ok(stats) => Some(stats),
            Err(e) => {
                record(&mut result, path, e, config.strict)?;
                None
            }
        };

        if let Err(e) = write_report(&outcome.report, &output) {
            record(&mut result, path, e, config.strict)?;
            continue;
        }
        info!("wrote {}", output.display());

        result.reports.push(FileReport {
            input: path.clone(),
            output,
            report: outcome.report,
            statistics,
        });
    }

    Ok(result)
}

/// Resolve the report path of `input` and reserve it for this run.
///
/// The same input listed twice may reuse its path; a different input may not.
fn claim_output(
    input: &Path,
    config: &Config,
    claimed: &mut HashMap<PathBuf, PathBuf>,
) -> Result<PathBuf> {
    let output = stats_path(input, config.output_dir.as_deref())?;
    match claimed.get(&output) {
        Some(previous) if previous.as_path() != input => Err(EngineError::ReportCollision {
            path: output,
            input: input.to_path_buf(),
            previous: previous.clone(),
        }),
        Some(_) => Ok(output),
        None => {
            claimed.insert(output.clone(), input.to_path_buf());
            Ok(output)
        }
    }
}

/// Log a per-file failure and keep it, or abort in strict mode.
fn record(result: &mut RunResult, path: &Path, e: EngineError, strict: bool) -> Result<()> {
    warn!("{e}");
    if strict {
        return Err(e);
    }
    result.errors.push((path.to_path_buf(), e));
    Ok(())
}

fn write_report(report: &Report, path: &Path) -> Result<()> {
    std::fs::write(path, report.render()).map_err(|e| EngineError::ReportWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::options::Analysis;
    use crate::report::ReportBody;

    #[test]
    fn test_batch_continues_after_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.txt");
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "Some words here.\n").unwrap();

        let config = ConfigBuilder::default()
            .files(vec![missing.clone(), good.clone()])
            .build()
            .unwrap();
        let result = run(&config).unwrap();

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, missing);
        assert!(result.errors[0].1.is_open_failure());

        assert_eq!(result.reports.len(), 2);
        assert_eq!(result.reports[0].report.body, ReportBody::CouldNotOpen);
        assert_eq!(result.reports[1].statistics.as_ref().unwrap().counts.words, 3);

        let written = std::fs::read_to_string(dir.path().join("good_stats.txt")).unwrap();
        let parsed = Report::parse(&written).unwrap();
        assert_eq!(parsed.statistics().unwrap()["WORDS"], "3");
        let written = std::fs::read_to_string(dir.path().join("missing_stats.txt")).unwrap();
        assert!(written.contains(report::COULD_NOT_OPEN));
    }

    #[test]
    fn test_strict_stops_at_first_error() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.txt");
        std::fs::write(&good, "x\n").unwrap();

        let config = ConfigBuilder::default()
            .files(vec![dir.path().join("missing.txt"), good])
            .strict(true)
            .build()
            .unwrap();

        assert!(matches!(run(&config), Err(EngineError::FileOpen { .. })));
        assert!(!dir.path().join("good_stats.txt").exists());
    }

    #[test]
    fn test_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("book.md");
        std::fs::write(&input, "to be or not to be\n").unwrap();
        let out = dir.path().join("reports/nested");

        let config = ConfigBuilder::default()
            .files(vec![input])
            .analyses(vec![Analysis::MostFrequentOrderedPair])
            .output_dir(Some(out.clone()))
            .build()
            .unwrap();
        let result = run(&config).unwrap();

        assert!(result.errors.is_empty());
        assert_eq!(result.reports[0].output, out.join("book_stats.md"));
        let parsed = Report::parse(&std::fs::read_to_string(out.join("book_stats.md")).unwrap())
            .unwrap();
        let map = parsed.statistics().unwrap();
        assert_eq!(map["MOST_FREQUENT_ORDERED_PAIR"], "to be");
        assert_eq!(map["MOST_FREQUENT_ORDERED_PAIR_COUNT"], "2");
    }

    #[test]
    fn test_same_name_in_output_dir_is_a_collision() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("a/x.txt");
        let second = dir.path().join("b/x.txt");
        for (path, content) in [(&first, "first file.\n"), (&second, "second\n")] {
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, content).unwrap();
        }
        let out = dir.path().join("out");

        let config = ConfigBuilder::default()
            .files(vec![first.clone(), second.clone()])
            .output_dir(Some(out.clone()))
            .build()
            .unwrap();
        let result = run(&config).unwrap();

        assert_eq!(result.reports.len(), 1);
        assert_eq!(result.reports[0].input, first);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].0, second);
        assert!(matches!(
            &result.errors[0].1,
            EngineError::ReportCollision { previous, .. } if *previous == first
        ));

        // The first report is intact.
        let parsed = Report::parse(&std::fs::read_to_string(out.join("x_stats.txt")).unwrap())
            .unwrap();
        assert_eq!(parsed.statistics().unwrap()["WORDS"], "2");

        let strict = ConfigBuilder::default()
            .files(vec![first, second])
            .output_dir(Some(out))
            .strict(true)
            .build()
            .unwrap();
        assert!(matches!(run(&strict), Err(EngineError::ReportCollision { .. })));
    }

    #[test]
    fn test_repeated_input_is_not_a_collision() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("same.txt");
        std::fs::write(&input, "again and again\n").unwrap();

        let config = ConfigBuilder::default()
            .files(vec![input.clone(), input])
            .build()
            .unwrap();
        let result = run(&config).unwrap();

        assert!(result.errors.is_empty());
        assert_eq!(result.reports.len(), 2);
    }

    #[test]
    fn test_input_without_file_name() {
        let config = ConfigBuilder::default()
            .files(vec![PathBuf::from("..")])
            .build()
            .unwrap();
        let result = run(&config).unwrap();

        assert!(result.reports.is_empty());
        assert!(matches!(result.errors[0].1, EngineError::Config(_)));
    }

    #[test]
    fn test_empty_batch() {
        let result = run(&Config::default()).unwrap();
        assert!(result.reports.is_empty());
        assert!(result.errors.is_empty());
    }
}
