//! Platform specials: 9 columns, one- or two-phase floor movement with an
//! optional perpetual repeat. Stop and toggle actions are dropped.

use linespec_types::{HeightDef, HeightPair, HeightRef, LinedefSpecial, MoveSpec, SpecialEffect};

use crate::chunk::Line;
use crate::decode;
use crate::error::TableError;
use crate::row::split_fields;

const COLUMNS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlatformMotion {
    PerpetualLowHigh,
    Lift,
    Raise24,
    Raise32,
    RaiseNextFloor,
    /// Instant floor-to-ceiling toggle; not representable as a height move.
    CeilingToggle,
    /// Halts an in-progress platform, no movement of its own.
    Stop,
}

impl PlatformMotion {
    fn from_token(token: &str, line: usize) -> Result<Self, TableError> {
        match token {
            "Lowest and Highest Floor (perpetual)" => Ok(Self::PerpetualLowHigh),
            "Lowest Neighbor Floor (lift)" => Ok(Self::Lift),
            "Raise 24 Units" => Ok(Self::Raise24),
            "Raise 32 Units" => Ok(Self::Raise32),
            "Raise Next Floor" => Ok(Self::RaiseNextFloor),
            "Ceiling (toggle)" => Ok(Self::CeilingToggle),
            "Stop" => Ok(Self::Stop),
            _ => Err(decode::unknown(line, "platform motion", token)),
        }
    }

    /// Floor pair plus the perpetual-repeat flag, or `None` to skip.
    fn motion(self) -> Option<(HeightPair, bool)> {
        let pair = |first, second| HeightPair { first, second };
        match self {
            Self::PerpetualLowHigh => Some((
                pair(
                    HeightDef::new(HeightRef::LowestFloor),
                    Some(HeightDef::new(HeightRef::HighestFloor)),
                ),
                true,
            )),
            Self::Lift => Some((
                pair(
                    HeightDef::new(HeightRef::LowestFloor),
                    Some(HeightDef::new(HeightRef::Floor)),
                ),
                false,
            )),
            Self::Raise24 => Some((pair(HeightDef::offset(HeightRef::Floor, 24), None), false)),
            Self::Raise32 => Some((pair(HeightDef::offset(HeightRef::Floor, 32), None), false)),
            Self::RaiseNextFloor => {
                Some((pair(HeightDef::new(HeightRef::NextFloor), None), false))
            }
            Self::CeilingToggle | Self::Stop => None,
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
        let wait = decode::wait(row[3], line.number)?;
        let speed = decode::speed(row[4], line.number)?;
        let monsters = decode::yes_no(row[7], line.number, "monsters")?;
        // Decode every column before deciding to skip: a bad token in a
        // skipped row is still a table authoring bug.
        let Some((floor, repeat)) = PlatformMotion::from_token(row[8], line.number)?.motion()
        else {
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
                wait,
                speed,
                repeat,
                floor: Some(floor),
                ceiling: None,
            }),
        });
    }
    Ok((records, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linespec_types::{Speed, Trigger};

    use crate::chunk::chunks;

    fn generate_one(line: &str) -> LinedefSpecial {
        let chunk: Vec<_> = chunks(line).next().expect("chunk");
        let (records, skipped) = generate(&chunk).expect("generate");
        assert_eq!(skipped, 0);
        records[0]
    }

    #[test]
    fn lift_row() {
        let record = generate_one("88 ---- WR 3s Fast None -- Yes Lowest Neighbor Floor (lift)");
        assert_eq!(record.special_type, 88);
        assert_eq!(record.trigger, Trigger::WalkOver);
        assert!(!record.only_once);
        assert!(record.monsters);
        let SpecialEffect::Move(spec) = record.effect else {
            panic!("platforms emit a move payload");
        };
        assert_eq!(spec.wait, 3.0);
        assert_eq!(spec.speed, Some(Speed::Fast));
        assert!(!spec.repeat);
        let pair = spec.floor.expect("floor pair");
        assert_eq!(pair.first, HeightDef::new(HeightRef::LowestFloor));
        assert_eq!(pair.second, Some(HeightDef::new(HeightRef::Floor)));
    }

    #[test]
    fn perpetual_motion_sets_repeat() {
        let record =
            generate_one("53 ---- W1 3s Slow None -- No Lowest and Highest Floor (perpetual)");
        let SpecialEffect::Move(spec) = record.effect else {
            panic!("platforms emit a move payload");
        };
        assert!(spec.repeat);
        let pair = spec.floor.expect("floor pair");
        assert_eq!(pair.first, HeightDef::new(HeightRef::LowestFloor));
        assert_eq!(pair.second, Some(HeightDef::new(HeightRef::HighestFloor)));
    }

    #[test]
    fn raise_24_without_wait() {
        let record = generate_one("15 ---- S1 -- Slow TxTy -- No Raise 24 Units");
        let SpecialEffect::Move(spec) = record.effect else {
            panic!("platforms emit a move payload");
        };
        assert_eq!(spec.wait, 0.0);
        assert!(!spec.repeat);
        let pair = spec.floor.expect("floor pair");
        assert_eq!(pair.first, HeightDef::offset(HeightRef::Floor, 24));
        assert_eq!(pair.second, None);
    }

    #[test]
    fn stop_and_toggle_skip_the_row() {
        let input = "54 ---- W1 -- ---- None -- No Stop\n\
                     211 Ext SR -- Inst None -- No Ceiling (toggle)";
        let chunk: Vec<_> = chunks(input).next().expect("chunk");
        let (records, skipped) = generate(&chunk).expect("generate");
        assert!(records.is_empty());
        assert_eq!(skipped, 2);
    }
}
