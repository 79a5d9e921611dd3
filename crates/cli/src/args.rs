// crates/cli/src/args.rs
use crate::options::TrailingWord;
use clap::{Args as ClapArgs, Parser, ValueHint};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "text_stats",
    version,
    about = "Writes a statistics report (lines, words, character classes) for each text file",
    long_about = "Writes a statistics report for each FILE to <name>_stats<ext>: line, word and \
                  character counts, character classes, and optionally the most frequent ordered \
                  word pair. Unknown --flags are ignored.",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(flatten)]
    pub analysis: AnalysisOptions,

    #[command(flatten)]
    pub output: OutputOptions,

    #[command(flatten)]
    pub behavior: BehaviorOptions,

    /// Files to analyze
    #[arg(value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub paths: Vec<PathBuf>,
}

#[derive(ClapArgs, Debug)]
pub struct AnalysisOptions {
    /// Also report the most frequent pair of adjacent words
    #[arg(long, help_heading = "Analysis")]
    pub most_frequent_ordered_pair: bool,

    /// How to treat a word still open at the end of the file
    #[arg(long, value_enum, default_value = "drop", help_heading = "Analysis")]
    pub trailing_word: TrailingWord,
}

#[derive(ClapArgs, Debug)]
pub struct OutputOptions {
    /// Directory for the reports (default: next to each input)
    #[arg(short, long, value_hint = ValueHint::DirPath, help_heading = "Output")]
    pub output_dir: Option<PathBuf>,

    /// Do not print the summary table
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
}

#[derive(ClapArgs, Debug)]
pub struct BehaviorOptions {
    /// Stop at the first file that cannot be processed
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,
}
