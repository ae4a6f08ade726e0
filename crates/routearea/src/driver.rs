//! Driver records: a name and the area enclosed by the driver's route.
//!
//! The sort criterion is never stored on a `Driver`; callers pass a `SortKey`
//! to whatever comparison they run.

use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

use crate::geom::{compute_area, is_closed, Point};

/// A named route with its computed area.
///
/// Natural order (`Ord`) and equality compare the name only, case-sensitively,
/// so the generic container sorts behave like a name sort and drivers sharing
/// a name are ties.
#[derive(Clone, Debug, Serialize)]
pub struct Driver {
    pub name: String,
    pub area: f64,
}

impl Driver {
    #[inline]
    pub fn new(name: impl Into<String>, area: f64) -> Self {
        Self {
            name: name.into(),
            area,
        }
    }

    /// Build a driver from a route, or `None` if the route is not closed.
    pub fn from_route(name: impl Into<String>, route: &[Point]) -> Option<Self> {
        if !is_closed(route) {
            return None;
        }
        Some(Self::new(name, compute_area(route)))
    }

    /// Case-insensitive, whitespace-trimmed name match.
    pub fn name_matches(&self, target: &str) -> bool {
        let ours = self.name.trim();
        let theirs = target.trim();
        ours == theirs || ours.to_lowercase() == theirs.to_lowercase()
    }
}

impl PartialEq for Driver {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Driver {}

impl PartialOrd for Driver {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Driver {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// `name<TAB>area` with the area rounded to two decimals.
impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{:.2}", self.name, self.area)
    }
}

/// Field a driver sort compares on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Area,
}

impl SortKey {
    /// Parse the command keyword (`name` / `area`, any case).
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("name") {
            Some(SortKey::Name)
        } else if word.eq_ignore_ascii_case("area") {
            Some(SortKey::Area)
        } else {
            None
        }
    }

    /// Three-way comparison of `a` against `b` on this key.
    ///
    /// Names compare case-sensitively. Areas compare numerically; an
    /// unordered pair (NaN) counts as a tie and is left in place.
    #[inline]
    pub fn compare(self, a: &Driver, b: &Driver) -> Ordering {
        match self {
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Area => a.area.partial_cmp(&b.area).unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::Name => "name",
            SortKey::Area => "area",
        })
    }
}
