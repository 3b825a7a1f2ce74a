use std::fmt;

use serde::Serialize;
use strum::{EnumCount, EnumIter};

/// Player/monster action that activates a linedef special.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount)]
pub enum Trigger {
    /// Player pushes on the line ("use" in front of a door).
    Push,
    /// Player uses a switch texture on the line.
    Switch,
    /// Something crosses the line.
    WalkOver,
    /// The line is shot with a hitscan weapon.
    Gun,
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
