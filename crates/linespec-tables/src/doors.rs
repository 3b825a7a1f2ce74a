//! Door specials: 8 columns, every row maps to a ceiling movement.

use linespec_types::{HeightDef, HeightPair, HeightRef, LinedefSpecial, MoveSpec, SpecialEffect};

use crate::chunk::Line;
use crate::decode;
use crate::error::TableError;
use crate::row::split_fields;

const COLUMNS: usize = 8;

/// What a door does once triggered, from the table's last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DoorBehavior {
    OpenWaitClose,
    OpenStayOpen,
    CloseStayClosed,
    CloseWaitOpen,
}

impl DoorBehavior {
    fn from_token(token: &str, line: usize) -> Result<Self, TableError> {
        match token {
            "Open, Wait, Then Close" => Ok(Self::OpenWaitClose),
            "Open and Stay Open" => Ok(Self::OpenStayOpen),
            "Close and Stay Closed" => Ok(Self::CloseStayClosed),
            "Close, Wait, Then Open" => Ok(Self::CloseWaitOpen),
            _ => Err(decode::unknown(line, "door behavior", token)),
        }
    }

    /// Doors always move the ceiling: open raises it to 4 below the lowest
    /// neighboring ceiling, close drops it back to the floor.
    fn ceiling(self) -> HeightPair {
        let open = HeightDef::offset(HeightRef::LowestCeiling, -4);
        let close = HeightDef::new(HeightRef::Floor);
        match self {
            Self::OpenWaitClose => HeightPair {
                first: open,
                second: Some(close),
            },
            Self::OpenStayOpen => HeightPair {
                first: open,
                second: None,
            },
            Self::CloseStayClosed => HeightPair {
                first: close,
                second: None,
            },
            Self::CloseWaitOpen => HeightPair {
                first: close,
                second: Some(open),
            },
        }
    }
}

pub fn generate(chunk: &[Line]) -> Result<(Vec<LinedefSpecial>, usize), TableError> {
    let mut records = Vec::with_capacity(chunk.len());
    for line in chunk {
        let row = split_fields::<COLUMNS>(line.text, line.number)?;
        let (trigger, only_once) = decode::trigger_and_only_once(row[2], line.number)?;
        let behavior = DoorBehavior::from_token(row[7], line.number)?;
        records.push(LinedefSpecial {
            special_type: decode::special_type(row[0], line.number)?,
            trigger,
            extended: decode::extended(row[1]),
            only_once,
            monsters: decode::yes_no(row[6], line.number, "monsters")?,
            lock: decode::lock(row[3], line.number)?,
            effect: SpecialEffect::Move(MoveSpec {
                wait: decode::wait(row[5], line.number)?,
                speed: decode::speed(row[4], line.number)?,
                ceiling: Some(behavior.ceiling()),
                ..MoveSpec::default()
            }),
        });
    }
    Ok((records, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linespec_types::{KeyLock, Speed, Trigger};

    use crate::chunk::chunks;

    fn generate_one(line: &str) -> LinedefSpecial {
        let chunk: Vec<_> = chunks(line).next().expect("chunk");
        let (records, skipped) = generate(&chunk).expect("generate");
        assert_eq!(skipped, 0);
        assert_eq!(records.len(), 1);
        records[0]
    }

    #[test]
    fn push_door_row() {
        let record = generate_one("1 Ext P1 No Fast 30s Yes Open, Wait, Then Close");
        assert_eq!(record.special_type, 1);
        assert_eq!(record.trigger, Trigger::Push);
        assert!(record.extended);
        assert!(record.only_once);
        assert!(record.monsters);
        assert_eq!(record.lock, None);
        let SpecialEffect::Move(spec) = record.effect else {
            panic!("doors emit a move payload");
        };
        assert_eq!(spec.wait, 30.0);
        assert_eq!(spec.speed, Some(Speed::Fast));
        let pair = spec.ceiling.expect("ceiling pair");
        assert_eq!(pair.first, HeightDef::offset(HeightRef::LowestCeiling, -4));
        assert_eq!(pair.second, Some(HeightDef::new(HeightRef::Floor)));
        assert_eq!(spec.floor, None);
    }

    #[test]
    fn locked_door_row() {
        let record = generate_one("26 ---- PR Blue Normal 4s No Open, Wait, Then Close");
        assert_eq!(record.lock, Some(KeyLock::Blue));
        assert!(!record.extended);
        assert!(!record.only_once);
    }

    #[test]
    fn second_phase_present_iff_behavior_waits() {
        for (token, opens, has_second) in [
            ("Open, Wait, Then Close", true, true),
            ("Open and Stay Open", true, false),
            ("Close and Stay Closed", false, false),
            ("Close, Wait, Then Open", false, true),
        ] {
            let pair = DoorBehavior::from_token(token, 1)
                .expect("behavior")
                .ceiling();
            if opens {
                assert_eq!(pair.first.to, HeightRef::LowestCeiling);
                assert_eq!(pair.first.off, Some(-4));
            } else {
                assert_eq!(pair.first.to, HeightRef::Floor);
                assert_eq!(pair.first.off, None);
            }
            assert_eq!(pair.second.is_some(), has_second, "{token}");
        }
    }

    #[test]
    fn unknown_behavior_is_an_error() {
        let chunk: Vec<_> = chunks("1 ---- P1 No Fast 30s Yes Fold Neatly")
            .next()
            .expect("chunk");
        let err = generate(&chunk).expect_err("unknown behavior");
        assert!(matches!(err, TableError::UnknownToken { .. }));
    }

    #[test]
    fn short_row_is_malformed() {
        let chunk: Vec<_> = chunks("1 ---- P1 No").next().expect("chunk");
        let err = generate(&chunk).expect_err("malformed");
        assert!(matches!(
            err,
            TableError::MalformedRow { expected: 8, found: 4, .. }
        ));
    }

    #[test]
    fn empty_chunk_emits_nothing() {
        let (records, skipped) = generate(&[]).expect("generate");
        assert!(records.is_empty());
        assert_eq!(skipped, 0);
    }
}
