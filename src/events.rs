use crate::geometry::Point;
use strum::{Display as StrumDisplay, EnumString};

/// What the pointer did, stripped of any platform event type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum SampleKind {
    #[strum(to_string = "down", serialize = "press")]
    Down,
    #[strum(to_string = "move", serialize = "drag")]
    Move,
    #[strum(to_string = "up", serialize = "release")]
    Up,
}

/// One raw pointer sample in container coordinates.
///
/// `Up` samples carry a position like any other sample; release handling
/// ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerSample {
    pub kind: SampleKind,
    pub at: Point,
}

impl PointerSample {
    pub fn new(kind: SampleKind, at: Point) -> Self {
        Self { kind, at }
    }

    pub fn down(at: Point) -> Self {
        Self::new(SampleKind::Down, at)
    }

    pub fn move_to(at: Point) -> Self {
        Self::new(SampleKind::Move, at)
    }

    pub fn up(at: Point) -> Self {
        Self::new(SampleKind::Up, at)
    }
}
