//! Mapping of raw `--` arguments to known flags.
//!
//! Unknown long flags are not an error: they are dropped before the
//! arguments reach clap.

use std::ffi::OsString;

/// Long flags understood by [`crate::args::Args`].
pub const KNOWN_LONG_FLAGS: &[&str] = &[
    "most-frequent-ordered-pair",
    "trailing-word",
    "output-dir",
    "quiet",
    "strict",
    "help",
    "version",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Known,
    Unknown,
}

impl Flag {
    /// Map a `--name` or `--name=value` argument.
    ///
    /// Returns `None` for anything that is not a long flag, including the
    /// bare `--` separator.
    pub fn from_arg(arg: &str) -> Option<Self> {
        let name = arg.strip_prefix("--").filter(|n| !n.is_empty())?;
        let name = name.split_once('=').map_or(name, |(n, _)| n);
        if KNOWN_LONG_FLAGS.contains(&name) {
            Some(Self::Known)
        } else {
            Some(Self::Unknown)
        }
    }
}

/// Arguments with unknown long flags removed, plus the removed ones.
#[derive(Debug, Default)]
pub struct Partitioned {
    pub args: Vec<OsString>,
    pub unknown: Vec<String>,
}

/// Split raw process arguments (program name first).
///
/// Everything after a bare `--` is positional and passes through untouched.
pub fn partition<I>(raw: I) -> Partitioned
where
    I: IntoIterator<Item = OsString>,
{
    let mut out = Partitioned::default();
    let mut positional_only = false;

    for arg in raw {
        if !positional_only
            && let Some(s) = arg.to_str()
        {
            if s == "--" {
                positional_only = true;
            } else if Flag::from_arg(s) == Some(Flag::Unknown) {
                out.unknown.push(s.to_owned());
                continue;
            }
        }
        out.args.push(arg);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use clap::CommandFactory;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_from_arg() {
        assert_eq!(Flag::from_arg("--most-frequent-ordered-pair"), Some(Flag::Known));
        assert_eq!(Flag::from_arg("--output-dir=out"), Some(Flag::Known));
        assert_eq!(Flag::from_arg("--frobnicate"), Some(Flag::Unknown));
        assert_eq!(Flag::from_arg("--"), None);
        assert_eq!(Flag::from_arg("-h"), None);
        assert_eq!(Flag::from_arg("notes.txt"), None);
    }

    #[test]
    fn test_partition_drops_unknown() {
        let p = partition(os(&["text_stats", "--bogus", "a.txt", "--what=1", "b.txt"]));
        assert_eq!(p.args, os(&["text_stats", "a.txt", "b.txt"]));
        assert_eq!(p.unknown, ["--bogus", "--what=1"]);
    }

    #[test]
    fn test_partition_keeps_known_and_positional_after_separator() {
        let p = partition(os(&[
            "text_stats",
            "--most-frequent-ordered-pair",
            "--",
            "--weird-file-name",
        ]));
        assert_eq!(
            p.args,
            os(&[
                "text_stats",
                "--most-frequent-ordered-pair",
                "--",
                "--weird-file-name"
            ])
        );
        assert!(p.unknown.is_empty());
    }

    #[test]
    fn test_every_clap_long_flag_is_known() {
        let cmd = Args::command();
        let longs = cmd
            .get_arguments()
            .filter_map(clap::Arg::get_long)
            .chain(["help", "version"]);
        for long in longs {
            assert_eq!(
                Flag::from_arg(&format!("--{long}")),
                Some(Flag::Known),
                "--{long} is not mapped"
            );
        }
    }
}
