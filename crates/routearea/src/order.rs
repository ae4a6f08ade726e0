//! Sort direction shared by every container sort.

use std::cmp::Ordering;
use std::fmt;

/// Requested order of a sort pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Asc,
    Dsc,
}

impl Direction {
    /// Parse the command keyword (`asc` / `dsc`, any case).
    pub fn from_keyword(word: &str) -> Option<Self> {
        if word.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if word.eq_ignore_ascii_case("dsc") {
            Some(Direction::Dsc)
        } else {
            None
        }
    }

    /// Whether two adjacent payloads comparing as `ord` (left vs right) are out
    /// of order. Only strict inequality swaps, so ties keep their input order.
    #[inline]
    pub fn wants_swap(self, ord: Ordering) -> bool {
        match self {
            Direction::Asc => ord == Ordering::Greater,
            Direction::Dsc => ord == Ordering::Less,
        }
    }

    /// Whether `ord` (left vs right) is acceptable for adjacent payloads.
    #[inline]
    pub fn is_ordered(self, ord: Ordering) -> bool {
        !self.wants_swap(ord)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Asc => "asc",
            Direction::Dsc => "dsc",
        })
    }
}
