use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TrailingWord {
    /// Only words followed by whitespace or punctuation count
    #[default]
    Drop,
    /// Count an unterminated final word too
    Count,
}
