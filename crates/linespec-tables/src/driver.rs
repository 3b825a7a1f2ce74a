//! Section dispatch: one chunk per table section, in file order.

use std::io::Write;

use linespec_types::LinedefSpecial;

use crate::chunk::{self, Line};
use crate::emit;
use crate::error::TableError;
use crate::{ceilings, doors, exits, floors, platforms};

type Generator = fn(&[Line]) -> Result<(Vec<LinedefSpecial>, usize), TableError>;

/// Table sections in file order. `None` marks sections whose chunk is
/// consumed but not decoded.
pub const SECTIONS: [(&str, Option<Generator>); 11] = [
    ("Doors", Some(doors::generate as Generator)),
    ("Floors", Some(floors::generate as Generator)),
    ("Ceilings", Some(ceilings::generate as Generator)),
    ("Platforms", Some(platforms::generate as Generator)),
    ("Crusher Ceilings", None),
    ("Stair Builders", None),
    ("Elevators", None),
    ("Lighting", None),
    ("Exits", Some(exits::generate as Generator)),
    ("Teleporters", None),
    ("Donuts", None),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileSummary {
    pub emitted: usize,
    pub skipped_rows: usize,
}

/// Decode the whole table and write the TOML document to `out`. Chunks
/// beyond the last expected section are ignored; running out of chunks
/// before the list ends is an error.
pub fn compile(input: &str, out: &mut impl Write) -> Result<CompileSummary, TableError> {
    let mut chunks = chunk::chunks(input);
    let mut summary = CompileSummary::default();
    for (section, generator) in SECTIONS {
        let chunk = chunks
            .next()
            .ok_or(TableError::MissingSection { section })?;
        let Some(generate) = generator else {
            continue;
        };
        let (records, skipped) = generate(&chunk)?;
        emit::write_section_header(out, section)?;
        for record in &records {
            emit::write_record(out, record)?;
        }
        summary.emitted += records.len();
        summary.skipped_rows += skipped;
    }
    Ok(summary)
}
