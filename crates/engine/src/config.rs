use crate::options::{Analysis, TrailingWordPolicy};
use derive_builder::Builder;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Input files, processed in this order.
    #[builder(default)]
    pub files: Vec<PathBuf>,
    #[builder(default)]
    pub analyses: Vec<Analysis>,
    #[builder(default)]
    pub trailing_word: TrailingWordPolicy,
    /// Directory receiving the reports. `None` writes next to each input.
    #[builder(default)]
    pub output_dir: Option<PathBuf>,
    #[builder(default)]
    pub strict: bool,
}

impl Config {
    #[must_use]
    pub fn is_enabled(&self, analysis: Analysis) -> bool {
        self.analyses.contains(&analysis)
    }
}
