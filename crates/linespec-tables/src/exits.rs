//! Exit specials: 4 columns, no movement payload.

use linespec_types::{ExitKind, LinedefSpecial, SpecialEffect};

use crate::chunk::Line;
use crate::decode;
use crate::error::TableError;
use crate::row::split_fields;

const COLUMNS: usize = 4;

fn exit_kind(token: &str, line: usize) -> Result<ExitKind, TableError> {
    match token {
        "Normal" => Ok(ExitKind::Normal),
        "Secret" => Ok(ExitKind::Secret),
        _ => Err(decode::unknown(line, "exit kind", token)),
    }
}

pub fn generate(chunk: &[Line]) -> Result<(Vec<LinedefSpecial>, usize), TableError> {
    let mut records = Vec::with_capacity(chunk.len());
    for line in chunk {
        let row = split_fields::<COLUMNS>(line.text, line.number)?;
        let (trigger, only_once) = decode::trigger_and_only_once(row[2], line.number)?;
        records.push(LinedefSpecial {
            special_type: decode::special_type(row[0], line.number)?,
            trigger,
            extended: decode::extended(row[1]),
            only_once,
            monsters: false,
            lock: None,
            effect: SpecialEffect::Exit(exit_kind(row[3], line.number)?),
        });
    }
    Ok((records, 0))
}
