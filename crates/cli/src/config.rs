// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
use crate::options;
pub use text_stats_engine::config::{Config, ConfigBuilder};
use text_stats_engine::options::{self as engine_options, Analysis};

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let mut analyses = Vec::new();
        if args.analysis.most_frequent_ordered_pair {
            analyses.push(Analysis::MostFrequentOrderedPair);
        }

        let trailing_word: engine_options::TrailingWordPolicy = args.analysis.trailing_word.into();

        let config = ConfigBuilder::default()
            .files(args.paths)
            .analyses(analyses)
            .trailing_word(trailing_word)
            .output_dir(args.output.output_dir)
            .strict(args.behavior.strict)
            .build()?;
        Ok(config)
    }
}

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident => $target:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$target, )+
                }
            }
        }
    };
}

map_enum!(
    options::TrailingWord,
    engine_options::TrailingWordPolicy,
    Drop => Drop,
    Count => Count,
);
