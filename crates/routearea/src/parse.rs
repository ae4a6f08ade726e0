//! Route file parsing.
//!
//! Purpose
//! - Split one route line (`<name> <x1> <y1> ... <xn> <yn>`, separators are
//!   runs of spaces and/or commas) into a name and its vertex list.
//! - Load a whole route file into a `DriverList`, skipping lines that are
//!   blank, malformed, or describe an open route. A bad line never stops the
//!   load.
//!
//! Code cross-refs: `driver::Driver::from_route`, `list::DriverList`

use std::io::BufRead;
use std::num::ParseFloatError;
use thiserror::Error;

use crate::driver::Driver;
use crate::geom::{point, Point};
use crate::list::DriverList;

/// Route loading configuration.
#[derive(Clone, Copy, Debug)]
pub struct LoadCfg {
    /// Minimum token count (name included) before a line is parsed at all.
    pub min_tokens: usize,
    /// Drop routes whose first and last vertices differ.
    pub require_closed: bool,
}

impl Default for LoadCfg {
    fn default() -> Self {
        Self {
            min_tokens: 2,
            require_closed: true,
        }
    }
}

/// Why a route line was rejected.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("expected a name followed by coordinates, found {found} token(s)")]
    TooFewTokens { found: usize },
    #[error("route `{name}` has an odd number of coordinates ({count})")]
    OddCoordinates { name: String, count: usize },
    #[error("route `{name}` has an invalid coordinate `{token}`")]
    InvalidNumber {
        name: String,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

/// A parsed route line, not yet checked for closure.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedRoute {
    pub name: String,
    pub points: Vec<Point>,
}

impl NamedRoute {
    /// Convert into a driver; `None` if the route is open and `cfg` requires
    /// closed routes.
    pub fn into_driver(self, cfg: &LoadCfg) -> Option<Driver> {
        if cfg.require_closed {
            Driver::from_route(self.name, &self.points)
        } else {
            let area = crate::geom::compute_area(&self.points);
            Some(Driver::new(self.name, area))
        }
    }
}

#[inline]
fn is_separator(c: char) -> bool {
    c == ' ' || c == ','
}

/// Tokens of a route line; empty fields between separators are dropped.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|t| !t.is_empty())
}

/// Parse one route line with the default configuration.
pub fn parse_route_line(line: &str) -> Result<NamedRoute, ParseError> {
    parse_route_line_with(line, &LoadCfg::default())
}

pub fn parse_route_line_with(line: &str, cfg: &LoadCfg) -> Result<NamedRoute, ParseError> {
    let tokens: Vec<&str> = tokenize(line).collect();
    if tokens.len() < cfg.min_tokens.max(1) {
        return Err(ParseError::TooFewTokens {
            found: tokens.len(),
        });
    }
    let name = tokens[0].to_string();
    let coords = &tokens[1..];
    if coords.len() % 2 != 0 {
        return Err(ParseError::OddCoordinates {
            name,
            count: coords.len(),
        });
    }
    let mut points = Vec::with_capacity(coords.len() / 2);
    for pair in coords.chunks_exact(2) {
        let x = parse_coord(&name, pair[0])?;
        let y = parse_coord(&name, pair[1])?;
        points.push(point(x, y));
    }
    Ok(NamedRoute { name, points })
}

fn parse_coord(name: &str, token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .map_err(|source| ParseError::InvalidNumber {
            name: name.to_string(),
            token: token.to_string(),
            source,
        })
}

/// Counters for one route load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub loaded: usize,
    pub open_routes: usize,
    pub malformed: usize,
    pub blank: usize,
}

/// Read every line of `reader`, appending one driver per valid closed route.
///
/// Only I/O failures abort; bad lines are counted and logged.
pub fn load_drivers<R: BufRead>(
    reader: R,
    cfg: &LoadCfg,
) -> std::io::Result<(DriverList, LoadStats)> {
    let mut list = DriverList::new();
    let mut stats = LoadStats::default();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        match parse_route_line_with(&line, cfg) {
            Ok(route) => {
                let name = route.name.clone();
                match route.into_driver(cfg) {
                    Some(driver) => {
                        tracing::debug!(lineno, name = %driver.name, area = driver.area, "loaded driver");
                        list.append(driver);
                        stats.loaded += 1;
                    }
                    None => {
                        tracing::debug!(lineno, %name, "skipping open route");
                        stats.open_routes += 1;
                    }
                }
            }
            Err(ParseError::TooFewTokens { found: 0 }) => stats.blank += 1,
            Err(err) => {
                tracing::warn!(lineno, error = %err, "skipping malformed route line");
                stats.malformed += 1;
            }
        }
    }
    Ok((list, stats))
}
