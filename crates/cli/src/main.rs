use clap::Parser;
use log::debug;
use std::process::ExitCode;
use text_stats_cli::args::Args;
use text_stats_cli::{flags, presentation};

fn main() -> ExitCode {
    text_stats_cli::init_logger();

    let partitioned = flags::partition(std::env::args_os());
    for flag in &partitioned.unknown {
        debug!("ignoring unknown flag {flag}");
    }

    let args = Args::parse_from(partitioned.args);
    let quiet = args.output.quiet;

    match text_stats_cli::run(args) {
        Ok(result) => {
            for (path, err) in &result.errors {
                eprintln!("Error processing {}: {err}", path.display());
            }

            if !quiet
                && let Err(e) = presentation::print_results(&result, &mut std::io::stdout().lock())
            {
                eprintln!("Output Error: {e}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
