// crates/cli/src/presentation.rs
use std::io::{self, Write};
use text_stats_engine::stats::{FileReport, RunResult};

/// Print one summary row per written report.
///
/// # Errors
/// Propagates write errors from `out`.
pub fn print_results<W: Write>(result: &RunResult, out: &mut W) -> io::Result<()> {
    writeln!(out, "text_stats v{}", crate::VERSION)?;
    writeln!(out)?;
    writeln!(out, "    LINES       WORDS      CHARACTERS     FILE")?;
    writeln!(out, "----------------------------------------------")?;

    for entry in &result.reports {
        write_row(entry, out)?;
    }

    writeln!(out, "---")?;
    writeln!(
        out,
        "{} report(s) written, {} error(s)",
        result.reports.len(),
        result.errors.len()
    )?;
    Ok(())
}

fn write_row<W: Write>(entry: &FileReport, out: &mut W) -> io::Result<()> {
    match &entry.statistics {
        Some(stats) => writeln!(
            out,
            "{:>9}{:>12}{:>16}     {} -> {}",
            stats.counts.lines,
            stats.counts.words,
            stats.counts.characters,
            entry.input.display(),
            entry.output.display()
        ),
        None => writeln!(
            out,
            "{:>9}{:>12}{:>16}     {} (could not open) -> {}",
            "-",
            "-",
            "-",
            entry.input.display(),
            entry.output.display()
        ),
    }
}
