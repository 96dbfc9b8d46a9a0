use strum::{Display as StrumDisplay, EnumIter, EnumString};

/// Compass sector the stick currently points into, or [`Direction::Center`]
/// when the deflection is too small to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    #[strum(serialize = "Center", serialize = "c")]
    Center,
    #[strum(serialize = "North", serialize = "n")]
    North,
    #[strum(serialize = "NorthEast", serialize = "ne")]
    NorthEast,
    #[strum(serialize = "East", serialize = "e")]
    East,
    #[strum(serialize = "SouthEast", serialize = "se")]
    SouthEast,
    #[strum(serialize = "South", serialize = "s")]
    South,
    #[strum(serialize = "SouthWest", serialize = "sw")]
    SouthWest,
    #[strum(serialize = "West", serialize = "w")]
    West,
    #[strum(serialize = "NorthWest", serialize = "nw")]
    NorthWest,
}

impl Direction {
    /// Classifies an integer angle in degrees into one of the eight compass
    /// sectors. 0 degrees is due east and angles grow toward north.
    ///
    /// Sector bounds are inclusive integer degrees. The east sector wraps
    /// across the 0/360 boundary and its wrap half is one degree narrower
    /// (338-359 against 0-22). Never returns [`Direction::Center`]; the
    /// strength gate owns that classification.
    pub fn from_angle(angle: u16) -> Self {
        match angle % 360 {
            23..=67 => Self::NorthEast,
            68..=112 => Self::North,
            113..=157 => Self::NorthWest,
            158..=202 => Self::West,
            203..=247 => Self::SouthWest,
            248..=292 => Self::South,
            293..=337 => Self::SouthEast,
            // 0-22 and 338-359 wrap around due east
            _ => Self::East,
        }
    }
}
