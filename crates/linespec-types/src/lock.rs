use serde::Serialize;
use strum::{EnumCount, EnumIter, FromRepr};

/// Key required to activate a locked linedef. The discriminant is the
/// engine's key index and is what gets written to the output document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumCount, FromRepr)]
#[repr(u8)]
pub enum KeyLock {
    Blue = 0,
    Red = 1,
    Yellow = 2,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn count() {
        assert_eq!(KeyLock::COUNT, 3);
    }

    #[test]
    fn discriminants() {
        assert_eq!(KeyLock::Blue as u8, 0);
        assert_eq!(KeyLock::Red as u8, 1);
        assert_eq!(KeyLock::Yellow as u8, 2);
    }

    #[test]
    fn round_trip() {
        for lock in KeyLock::iter() {
            assert_eq!(KeyLock::from_repr(lock as u8), Some(lock));
        }
    }
}
