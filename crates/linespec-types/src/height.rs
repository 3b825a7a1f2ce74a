use std::fmt;

use serde::Serialize;
use strum::{EnumCount, EnumIter};

/// Reference surface a moving floor or ceiling targets. Heights in the map
/// format are always relative to some neighboring surface, never absolute
/// map coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount)]
pub enum HeightRef {
    Floor,
    LowestFloor,
    NextFloor,
    HighestFloor,
    LowestCeiling,
    HighestCeiling,
}

impl fmt::Display for HeightRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// A target height: a reference surface plus an optional offset in map
/// units (`i16`, the map format's coordinate type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeightDef {
    pub to: HeightRef,
    pub off: Option<i16>,
}

impl HeightDef {
    pub const fn new(to: HeightRef) -> Self {
        Self { to, off: None }
    }

    pub const fn offset(to: HeightRef, off: i16) -> Self {
        Self { to, off: Some(off) }
    }
}

/// One- or two-phase movement: a single target, or a first target followed
/// by a second (open-then-close, down-then-up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeightPair {
    pub first: HeightDef,
    pub second: Option<HeightDef>,
}
