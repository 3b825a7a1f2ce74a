pub mod height;
pub mod lock;
pub mod record;
pub mod speed;
pub mod trigger;

pub use height::{HeightDef, HeightPair, HeightRef};
pub use lock::KeyLock;
pub use record::{ExitKind, LinedefSpecial, MoveSpec, SpecialEffect};
pub use speed::Speed;
pub use trigger::Trigger;
