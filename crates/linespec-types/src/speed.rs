use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr};

/// Movement speed tier. The discriminant is the rate in map units per tic.
/// "Not applicable" is `Option::<Speed>::None` at the use sites, never a
/// zero variant, so an absent speed can never be emitted by mistake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr)]
#[repr(u16)]
pub enum Speed {
    Slow = 8,
    Normal = 16,
    Fast = 32,
    Turbo = 64,
    Instant = 16384,
}

impl Speed {
    pub fn units_per_tic(self) -> u16 {
        self as u16
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count() {
        assert_eq!(Speed::COUNT, 5);
    }

    #[test]
    fn rates() {
        assert_eq!(Speed::Slow.units_per_tic(), 8);
        assert_eq!(Speed::Fast.units_per_tic(), 32);
        assert_eq!(Speed::Instant.units_per_tic(), 16384);
    }

    #[test]
    fn round_trip() {
        for speed in Speed::iter() {
            assert_eq!(Speed::from_repr(speed as u16), Some(speed));
        }
    }
}
