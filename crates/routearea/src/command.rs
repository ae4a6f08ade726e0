//! Command script: grammar and interpreter.
//!
//! Grammar (one command per line, whitespace-separated, keywords any case)
//! - `sort name asc|dsc` and `sort area asc|dsc` reorder the list.
//! - Any other line is a lookup of its first token by driver name.
//!
//! A `sort <key> <dir>` line with an unknown key or direction is ignored, and
//! so is a blank line. `sort` with fewer than three tokens is not a sort form;
//! it is looked up as a name like any other word.

use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

use crate::driver::SortKey;
use crate::list::DriverList;
use crate::order::Direction;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Sort { key: SortKey, direction: Direction },
    Lookup(String),
}

/// A line that does not form a command. The interpreter skips these silently.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("blank command line")]
    Blank,
    #[error("unrecognized sort form `sort {key} {direction}`")]
    UnknownSort { key: String, direction: String },
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(&first) = tokens.first() else {
            return Err(CommandError::Blank);
        };
        if first.eq_ignore_ascii_case("sort") && tokens.len() >= 3 {
            let key = SortKey::from_keyword(tokens[1]);
            let direction = Direction::from_keyword(tokens[2]);
            return match (key, direction) {
                (Some(key), Some(direction)) => Ok(Command::Sort { key, direction }),
                _ => Err(CommandError::UnknownSort {
                    key: tokens[1].to_string(),
                    direction: tokens[2].to_string(),
                }),
            };
        }
        Ok(Command::Lookup(first.to_string()))
    }
}

/// What a successfully parsed command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Sorted { swaps: usize },
    Found,
    NotFound,
}

impl Command {
    /// Apply the command to `list`, writing lookup results to `out`.
    pub fn execute<W: Write>(&self, list: &mut DriverList, out: &mut W) -> io::Result<Outcome> {
        match self {
            Command::Sort { key, direction } => {
                let swaps = list.sort_by_key(*key, *direction);
                Ok(Outcome::Sorted { swaps })
            }
            Command::Lookup(name) => match list.search_by_name(name) {
                Some(driver) => {
                    writeln!(out, "{:.2}", driver.area)?;
                    Ok(Outcome::Found)
                }
                None => {
                    writeln!(out, "{name} not found")?;
                    Ok(Outcome::NotFound)
                }
            },
        }
    }
}

/// Counters for one script run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScriptStats {
    pub sorts: usize,
    pub lookups: usize,
    pub misses: usize,
    pub ignored: usize,
}

fn run_line<W: Write>(
    list: &mut DriverList,
    lineno: usize,
    line: &str,
    out: &mut W,
    stats: &mut ScriptStats,
) -> io::Result<()> {
    let cmd = match line.parse::<Command>() {
        Ok(cmd) => cmd,
        Err(err) => {
            tracing::debug!(lineno, error = %err, "ignoring command line");
            stats.ignored += 1;
            return Ok(());
        }
    };
    tracing::debug!(lineno, command = ?cmd, "executing");
    match cmd.execute(list, out)? {
        Outcome::Sorted { .. } => stats.sorts += 1,
        Outcome::Found => stats.lookups += 1,
        Outcome::NotFound => {
            stats.lookups += 1;
            stats.misses += 1;
        }
    }
    Ok(())
}

/// Interpret every line in order. Unrecognized lines are skipped without
/// affecting later ones; only a failing writer aborts the run.
pub fn run_script<I, S, W>(list: &mut DriverList, lines: I, out: &mut W) -> io::Result<ScriptStats>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut stats = ScriptStats::default();
    for (idx, line) in lines.into_iter().enumerate() {
        run_line(list, idx + 1, line.as_ref(), out, &mut stats)?;
    }
    Ok(stats)
}

/// Run a script read line by line from `reader`.
///
/// Lines read before an I/O error have already taken effect; the error is
/// returned so the caller can report it.
pub fn run_script_from<R, W>(list: &mut DriverList, reader: R, out: &mut W) -> io::Result<ScriptStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ScriptStats::default();
    for (idx, line) in reader.lines().enumerate() {
        run_line(list, idx + 1, &line?, out, &mut stats)?;
    }
    Ok(stats)
}
