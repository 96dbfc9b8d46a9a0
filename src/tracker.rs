use crate::config::MovementAxis;
use crate::direction::Direction;
use crate::events::{PointerSample, SampleKind};
use crate::geometry::Point;
use crate::joystick::Joystick;

/// Derived stick state after one processed sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reading {
    pub angle: u16,
    pub strength: u8,
    pub direction: Direction,
}

/// Feeds pointer samples into a [`Joystick`] and keeps the stick inside the
/// container.
///
/// This is the only code path that moves the stick from raw input: it
/// applies the configured axis lock, then pulls any position outside the
/// container back onto the border along the ray from the center.
#[derive(Debug, Clone)]
pub struct Tracker {
    joystick: Joystick,
}

impl Tracker {
    pub fn new(joystick: Joystick) -> Self {
        Self { joystick }
    }

    pub fn joystick(&self) -> &Joystick {
        &self.joystick
    }

    pub fn joystick_mut(&mut self) -> &mut Joystick {
        &mut self.joystick
    }

    /// Current derived state, without consuming a sample.
    pub fn reading(&self) -> Reading {
        Reading {
            angle: self.joystick.angle(),
            strength: self.joystick.strength(),
            direction: self.joystick.direction(),
        }
    }

    /// Processes one pointer sample and returns the resulting state.
    ///
    /// Positions are taken from the sample's absolute coordinates, so
    /// handling the same sample twice is idempotent.
    pub fn handle(&mut self, sample: PointerSample) -> Reading {
        match sample.kind {
            SampleKind::Up => self.release(),
            SampleKind::Down | SampleKind::Move => self.drag_to(sample.at),
        }
        self.reading()
    }

    fn release(&mut self) {
        if self.joystick.auto_recenter() {
            self.joystick.set_stick(self.joystick.center());
        }
    }

    fn drag_to(&mut self, at: Point) {
        let center = self.joystick.center();
        let at = match self.joystick.movement_axis() {
            MovementAxis::Free => at,
            MovementAxis::HorizontalOnly => Point::new(at.x, center.y),
            MovementAxis::VerticalOnly => Point::new(center.x, at.y),
        };
        self.joystick.set_stick(at);

        let distance = self.joystick.distance();
        let radius = self.joystick.radius();
        if distance > radius {
            self.joystick.set_stick(Point::new(
                pull_to_border(at.x, center.x, radius, distance),
                pull_to_border(at.y, center.y, radius, distance),
            ));
        }
    }
}

/// One coordinate of the border projection: scales the offset from `origin`
/// down by `radius / distance`. Truncation may land the result fractionally
/// inside the border; never outside it.
fn pull_to_border(coord: i32, origin: i32, radius: u32, distance: u32) -> i32 {
    ((coord as i64 - origin as i64) * radius as i64 / distance as i64 + origin as i64) as i32
}
