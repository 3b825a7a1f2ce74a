//! Ceiling specials: same 10-column layout as floors, narrower target
//! vocabulary, no skip markers.

use linespec_types::{HeightDef, HeightPair, HeightRef, LinedefSpecial, MoveSpec, SpecialEffect};

use crate::chunk::Line;
use crate::decode;
use crate::error::TableError;
use crate::row::split_fields;

const COLUMNS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CeilingTarget {
    EightAboveFloor,
    Floor,
    HighestCeiling,
    HighestFloor,
    LowestCeiling,
}

impl CeilingTarget {
    fn from_token(token: &str, line: usize) -> Result<Self, TableError> {
        match token {
            "8 Above Floor" => Ok(Self::EightAboveFloor),
            "Floor" => Ok(Self::Floor),
            "Highest Neighbor Ceiling" => Ok(Self::HighestCeiling),
            "Highest Neighbor Floor" => Ok(Self::HighestFloor),
            "Lowest Neighbor Ceiling" => Ok(Self::LowestCeiling),
            _ => Err(decode::unknown(line, "ceiling target", token)),
        }
    }

    fn height(self) -> HeightDef {
        match self {
            Self::EightAboveFloor => HeightDef::offset(HeightRef::Floor, 8),
            Self::Floor => HeightDef::new(HeightRef::Floor),
            Self::HighestCeiling => HeightDef::new(HeightRef::HighestCeiling),
            Self::HighestFloor => HeightDef::new(HeightRef::HighestFloor),
            Self::LowestCeiling => HeightDef::new(HeightRef::LowestCeiling),
        }
    }
}

pub fn generate(chunk: &[Line]) -> Result<(Vec<LinedefSpecial>, usize), TableError> {
    let mut records = Vec::with_capacity(chunk.len());
    for line in chunk {
        let row = split_fields::<COLUMNS>(line.text, line.number)?;
        let (trigger, only_once) = decode::trigger_and_only_once(row[2], line.number)?;
        let first = CeilingTarget::from_token(row[9], line.number)?.height();
        records.push(LinedefSpecial {
            special_type: decode::special_type(row[0], line.number)?,
            trigger,
            extended: decode::extended(row[1]),
            only_once,
            monsters: decode::yes_no(row[7], line.number, "monsters")?,
            lock: None,
            effect: SpecialEffect::Move(MoveSpec {
                speed: decode::speed(row[4], line.number)?,
                ceiling: Some(HeightPair {
                    first,
                    second: None,
                }),
                ..MoveSpec::default()
            }),
        });
    }
    Ok((records, 0))
}
