//! Decoder for the linedef special-effects table.
//!
//! The table is whitespace-delimited prose: one blank-line-separated
//! section per behavior category (doors, floors, ...), one row per special
//! type. `compile` turns the whole table into a TOML document of
//! `[[linedef]]` records.

pub mod ceilings;
pub mod chunk;
pub mod decode;
pub mod doors;
pub mod driver;
pub mod emit;
pub mod error;
pub mod exits;
pub mod floors;
pub mod platforms;
pub mod row;

pub use driver::{CompileSummary, SECTIONS, compile};
pub use error::TableError;
