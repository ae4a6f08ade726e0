//! One batch run: resolve file names, load routes, replay commands, display.

use anyhow::{bail, Context, Result};
use routearea::prelude::*;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

const ROUTES_PROMPT: &str = "Enter the name of the file containing driver routes: ";
const COMMANDS_PROMPT: &str = "Enter the name of the file containing search and sort commands: ";

pub struct Options {
    pub routes: Option<PathBuf>,
    pub commands: Option<PathBuf>,
    pub json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    version: &'static str,
    loaded: usize,
    skipped: usize,
    drivers: Vec<&'a Driver>,
}

/// Run the whole pipeline. Only a missing or unreadable route file (or a
/// failing output stream) is an error; command file problems are reported on
/// `out` and the run continues to the final display.
pub fn run<R: BufRead, W: Write>(opts: &Options, mut input: R, out: &mut W) -> Result<()> {
    let routes_path = resolve(opts.routes.as_deref(), ROUTES_PROMPT, &mut input, out)?;
    let commands_path = resolve(opts.commands.as_deref(), COMMANDS_PROMPT, &mut input, out)?;

    let file = File::open(&routes_path)
        .with_context(|| format!("opening route file {}", routes_path.display()))?;
    let (mut list, stats) = load_drivers(BufReader::new(file), &LoadCfg::default())
        .with_context(|| format!("reading route file {}", routes_path.display()))?;
    tracing::info!(
        loaded = stats.loaded,
        open_routes = stats.open_routes,
        malformed = stats.malformed,
        "routes loaded"
    );

    process_commands(&commands_path, &mut list, out)?;

    if opts.json {
        let report = Report {
            version: routearea::VERSION,
            loaded: stats.loaded,
            skipped: stats.open_routes + stats.malformed,
            drivers: list.iter().collect(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{list}")?;
    }
    out.flush()?;
    Ok(())
}

/// Use the given path, or prompt on `out` and read one line from `input`.
fn resolve<R: BufRead, W: Write>(
    given: Option<&Path>,
    prompt: &str,
    input: &mut R,
    out: &mut W,
) -> Result<PathBuf> {
    if let Some(path) = given {
        return Ok(path.to_path_buf());
    }
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("no file name given for prompt {:?}", prompt.trim_end());
    }
    Ok(PathBuf::from(line.trim_end_matches(|c| c == '\r' || c == '\n')))
}

fn process_commands<W: Write>(path: &Path, list: &mut DriverList, out: &mut W) -> io::Result<()> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "command file unavailable");
            if err.kind() == io::ErrorKind::NotFound {
                writeln!(out, "Error: Command file not found.")?;
            } else {
                writeln!(out, "Error: Could not open command file: {err}")?;
            }
            return Ok(());
        }
    };
    match run_script_from(list, BufReader::new(file), out) {
        Ok(stats) => {
            tracing::info!(
                sorts = stats.sorts,
                lookups = stats.lookups,
                misses = stats.misses,
                ignored = stats.ignored,
                "commands processed"
            );
        }
        Err(err) => {
            tracing::warn!(error = %err, "command processing stopped");
            writeln!(out, "Error: An unexpected error occurred while processing commands.")?;
        }
    }
    Ok(())
}
