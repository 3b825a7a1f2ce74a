//! Floor specials: 10 columns, single-phase floor movement. Two targets in
//! the table describe behaviors this model does not represent; their rows
//! are dropped, not errored.

use linespec_types::{HeightDef, HeightPair, HeightRef, LinedefSpecial, MoveSpec, SpecialEffect};

use crate::chunk::Line;
use crate::decode;
use crate::error::TableError;
use crate::row::split_fields;

const COLUMNS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FloorTarget {
    Absolute24,
    Absolute512,
    HighestFloor,
    HighestFloorPlus8,
    LowestCeiling,
    LowestCeilingMinus8,
    LowestFloor,
    NextFloor,
    /// Target depends on the line's lower texture; not representable here.
    AbsShortestLowerTexture,
    /// Texture/type change only, no movement.
    NoTarget,
}

impl FloorTarget {
    fn from_token(token: &str, line: usize) -> Result<Self, TableError> {
        match token {
            "Absolute 24" => Ok(Self::Absolute24),
            "Absolute 512" => Ok(Self::Absolute512),
            "Highest Neighbor Floor" => Ok(Self::HighestFloor),
            "Highest Neighbor Floor + 8" => Ok(Self::HighestFloorPlus8),
            "Lowest Neighbor Ceiling" => Ok(Self::LowestCeiling),
            "Lowest Neighbor Ceiling - 8" => Ok(Self::LowestCeilingMinus8),
            "Lowest Neighbor Floor" => Ok(Self::LowestFloor),
            "Next Neighbor Floor" => Ok(Self::NextFloor),
            "Abs Shortest Lower Texture" => Ok(Self::AbsShortestLowerTexture),
            "None" => Ok(Self::NoTarget),
            _ => Err(decode::unknown(line, "floor target", token)),
        }
    }

    fn height(self) -> Option<HeightDef> {
        match self {
            Self::Absolute24 => Some(HeightDef::offset(HeightRef::Floor, 24)),
            Self::Absolute512 => Some(HeightDef::offset(HeightRef::Floor, 512)),
            Self::HighestFloor => Some(HeightDef::new(HeightRef::HighestFloor)),
            Self::HighestFloorPlus8 => Some(HeightDef::offset(HeightRef::HighestFloor, 8)),
            Self::LowestCeiling => Some(HeightDef::new(HeightRef::LowestCeiling)),
            Self::LowestCeilingMinus8 => Some(HeightDef::offset(HeightRef::LowestCeiling, -8)),
            Self::LowestFloor => Some(HeightDef::new(HeightRef::LowestFloor)),
            Self::NextFloor => Some(HeightDef::new(HeightRef::NextFloor)),
            Self::AbsShortestLowerTexture | Self::NoTarget => None,
        }
    }
}

pub fn generate(chunk: &[Line]) -> Result<(Vec<LinedefSpecial>, usize), TableError> {
    let mut records = Vec::with_capacity(chunk.len());
    let mut skipped = 0;
    for line in chunk {
        let row = split_fields::<COLUMNS>(line.text, line.number)?;
        let special_type = decode::special_type(row[0], line.number)?;
        let extended = decode::extended(row[1]);
        let (trigger, only_once) = decode::trigger_and_only_once(row[2], line.number)?;
        let speed = decode::speed(row[4], line.number)?;
        let monsters = decode::yes_no(row[7], line.number, "monsters")?;
        // Decode every column before deciding to skip: a bad token in a
        // skipped row is still a table authoring bug.
        let Some(first) = FloorTarget::from_token(row[9], line.number)?.height() else {
            skipped += 1;
            continue;
        };
        records.push(LinedefSpecial {
            special_type,
            trigger,
            extended,
            only_once,
            monsters,
            lock: None,
            effect: SpecialEffect::Move(MoveSpec {
                speed,
                floor: Some(HeightPair {
                    first,
                    second: None,
                }),
                ..MoveSpec::default()
            }),
        });
    }
    Ok((records, skipped))
}
