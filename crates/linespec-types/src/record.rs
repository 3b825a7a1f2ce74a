use std::fmt;

use serde::Serialize;

use crate::height::HeightPair;
use crate::lock::KeyLock;
use crate::speed::Speed;
use crate::trigger::Trigger;

/// Movement payload of a door, floor, ceiling or platform special.
/// A `wait` of 0.0 and a `speed` of `None` both mean "not applicable" and
/// are never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoveSpec {
    /// Pause between the two phases, in seconds.
    pub wait: f32,
    pub speed: Option<Speed>,
    /// Motion cycles perpetually between the two targets.
    pub repeat: bool,
    pub floor: Option<HeightPair>,
    pub ceiling: Option<HeightPair>,
}

impl Default for MoveSpec {
    fn default() -> Self {
        Self {
            wait: 0.0,
            speed: None,
            repeat: false,
            floor: None,
            ceiling: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExitKind {
    Normal,
    Secret,
}

impl fmt::Display for ExitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Category payload of a linedef record. Each record carries exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SpecialEffect {
    Move(MoveSpec),
    Exit(ExitKind),
}

/// One decoded linedef special, ready for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinedefSpecial {
    pub special_type: u16,
    pub trigger: Trigger,
    /// The type code belongs to the extended numeric range.
    pub extended: bool,
    pub only_once: bool,
    /// Monsters may also activate the trigger.
    pub monsters: bool,
    pub lock: Option<KeyLock>,
    pub effect: SpecialEffect,
}
