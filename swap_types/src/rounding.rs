use serde::Deserialize;
use serde::Serialize;

/// How digits beyond the requested precision are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::EnumIs)]
pub enum Rounding {
    /// Truncate toward zero.
    #[default]
    Down,
    /// Away from zero whenever any digit is dropped.
    Up,
    /// To nearest, ties away from zero.
    HalfUp,
}
