use super::OrderedList;
use crate::driver::{Driver, SortKey};
use crate::order::Direction;

/// The container specialised to driver records.
pub type DriverList = OrderedList<Driver>;

impl OrderedList<Driver> {
    /// Linear scan for the first driver whose name matches `target` after
    /// trimming both sides, ignoring case. A miss is `None`.
    pub fn search_by_name(&self, target: &str) -> Option<&Driver> {
        self.find(|driver| driver.name_matches(target))
    }

    /// Stable bubble sort on the case-sensitive driver name.
    pub fn sort_by_name(&mut self, direction: Direction) -> usize {
        self.sort_by_key(SortKey::Name, direction)
    }

    /// Stable bubble sort on the numeric route area.
    pub fn sort_by_area(&mut self, direction: Direction) -> usize {
        self.sort_by_key(SortKey::Area, direction)
    }

    pub fn sort_by_key(&mut self, key: SortKey, direction: Direction) -> usize {
        let swaps = self.sort_by(direction, |a, b| key.compare(a, b));
        tracing::debug!(%key, %direction, swaps, "sorted drivers");
        swaps
    }

    pub fn is_sorted_by_key(&self, key: SortKey, direction: Direction) -> bool {
        self.is_sorted_by(direction, |a, b| key.compare(a, b))
    }
}
