//! Flat text report written next to each input file.
//!
//! ```text
//! notes.txt
//! 1234 bytes.
//! --------------------------------------------------------------------------------
//! CHARACTERS: 1100
//! ...
//! --------------------------------------------------------------------------------
//! Took 3 ms.
//! ```

use crate::error::{EngineError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const LINE_SEPARATOR: &str = "\n";
pub const SEPARATOR_WIDTH: usize = 80;
pub const COULD_NOT_OPEN: &str = "Could not open the file.";
const STATS_SUFFIX: &str = "_stats";
const UNKNOWN_SIZE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportBody {
    Statistics(BTreeMap<String, String>),
    CouldNotOpen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub name: String,
    /// Size in bytes; `None` when the file could not be stat'ed.
    pub size: Option<u64>,
    pub elapsed: Duration,
    pub body: ReportBody,
}

impl Report {
    #[must_use]
    pub fn render(&self) -> String {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        let mut out = String::new();

        push_line(&mut out, &self.name);
        match self.size {
            Some(size) => push_line(&mut out, &format!("{size} bytes.")),
            None => push_line(&mut out, &format!("{UNKNOWN_SIZE} bytes.")),
        }
        push_line(&mut out, &separator);
        match &self.body {
            ReportBody::Statistics(map) => {
                for (key, value) in map {
                    push_line(&mut out, &format!("{key}: {value}"));
                }
            }
            ReportBody::CouldNotOpen => push_line(&mut out, COULD_NOT_OPEN),
        }
        push_line(&mut out, &separator);
        push_line(&mut out, &format!("Took {} ms.", self.elapsed.as_millis()));
        out
    }

    /// Read a rendered report back.
    ///
    /// The elapsed time only survives at millisecond resolution.
    ///
    /// # Errors
    /// Returns [`EngineError::ReportParse`] when the text does not follow the
    /// report layout.
    pub fn parse(text: &str) -> Result<Self> {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        let mut lines = text
            .strip_suffix(LINE_SEPARATOR)
            .unwrap_or(text)
            .split(LINE_SEPARATOR);

        let name = lines.next().ok_or_else(|| malformed("missing file name"))?;
        let size_line = lines.next().ok_or_else(|| malformed("missing file size"))?;
        let size = parse_size(size_line)?;

        if lines.next() != Some(separator.as_str()) {
            return Err(malformed("missing header separator"));
        }

        let mut map = BTreeMap::new();
        let mut could_not_open = false;
        loop {
            let line = lines
                .next()
                .ok_or_else(|| malformed("missing footer separator"))?;
            if line == separator {
                break;
            }
            if line == COULD_NOT_OPEN {
                could_not_open = true;
                continue;
            }
            let (key, value) = line
                .split_once(": ")
                .ok_or_else(|| malformed(&format!("bad statistic line '{line}'")))?;
            map.insert(key.to_owned(), value.to_owned());
        }

        let took = lines.next().ok_or_else(|| malformed("missing timing line"))?;
        let millis = took
            .strip_prefix("Took ")
            .and_then(|s| s.strip_suffix(" ms."))
            .and_then(|s| s.parse::<u64>().ok())
            .ok_or_else(|| malformed(&format!("bad timing line '{took}'")))?;

        if lines.next().is_some() {
            return Err(malformed("trailing content after timing line"));
        }

        let body = if could_not_open {
            if !map.is_empty() {
                return Err(malformed("statistics mixed with open failure"));
            }
            ReportBody::CouldNotOpen
        } else {
            ReportBody::Statistics(map)
        };

        Ok(Self {
            name: name.to_owned(),
            size,
            elapsed: Duration::from_millis(millis),
            body,
        })
    }

    #[must_use]
    pub const fn statistics(&self) -> Option<&BTreeMap<String, String>> {
        match &self.body {
            ReportBody::Statistics(map) => Some(map),
            ReportBody::CouldNotOpen => None,
        }
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push_str(LINE_SEPARATOR);
}

fn parse_size(line: &str) -> Result<Option<u64>> {
    let value = line
        .strip_suffix(" bytes.")
        .ok_or_else(|| malformed(&format!("bad size line '{line}'")))?;
    if value == UNKNOWN_SIZE {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| malformed(&format!("bad size '{value}'")))
}

fn malformed(reason: &str) -> EngineError {
    EngineError::ReportParse(reason.to_owned())
}

/// Path of the report for `input`.
///
/// `_stats` goes in front of the last `.` of the file name, or at the end
/// when there is none. With `output_dir` the report lands there instead of
/// next to the input.
///
/// # Errors
/// Returns [`EngineError::Config`] when `input` has no file name (`..`, `/`).
pub fn stats_path(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| {
        EngineError::Config(format!("'{}' does not name a file", input.display()))
    })?;
    let file_name = stats_file_name(&name.to_string_lossy());
    Ok(match output_dir {
        Some(dir) => dir.join(file_name),
        None => input.with_file_name(file_name),
    })
}

fn stats_file_name(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) => format!("{}{STATS_SUFFIX}{}", &name[..dot], &name[dot..]),
        None => format!("{name}{STATS_SUFFIX}"),
    }
}
