//! Delivery-route areas: geometry, driver records, an ordered container, and
//! a small sort/search command language.
//!
//! Layout
//! - `geom`: shoelace area and closure check over `nalgebra` points.
//! - `driver`: `Driver` records and the `SortKey` a comparison runs on.
//! - `list`: `OrderedList<T>`, an arena-backed doubly linked sequence with
//!   stable in-place bubble sorts; `DriverList` adds name search.
//! - `parse`: route file lines → drivers.
//! - `command`: command grammar and interpreter.
//!
//! The crate does no file handling of its own; callers hand it readers and
//! writers.

pub mod command;
pub mod driver;
pub mod geom;
pub mod list;
pub mod order;
pub mod parse;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::command::{run_script, run_script_from, Command, CommandError, ScriptStats};
    pub use crate::driver::{Driver, SortKey};
    pub use crate::geom::{compute_area, is_closed, point, Point};
    pub use crate::list::{DriverList, OrderedList};
    pub use crate::order::Direction;
    pub use crate::parse::{load_drivers, parse_route_line, LoadCfg, LoadStats, ParseError};
}
