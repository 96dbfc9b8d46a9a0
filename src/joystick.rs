use crate::config::{MovementAxis, StickOptions};
use crate::direction::Direction;
use crate::geometry::Point;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JoystickError {
    #[error("Container radius must be greater than zero")]
    ZeroRadius,
    #[error("Stick ratio must be finite and positive, got {0}")]
    InvalidStickRatio(f64),
    #[error("Bounds {width}x{height} leave no room for the container circle")]
    BoundsTooSmall { width: u32, height: u32 },
}

/// The joystick's container circle and free-moving stick point.
///
/// Holds positions and derives angle, strength and compass direction on
/// read. Keeping the stick inside the container is the caller's job (see
/// [`Tracker`](crate::tracker::Tracker)); the model computes but never
/// clamps.
#[derive(Debug, Clone, PartialEq)]
pub struct Joystick {
    radius: u32,
    center: Point,
    stick: Point,
    stick_ratio: f64,
    movement_axis: MovementAxis,
    auto_recenter: bool,
}

impl Joystick {
    pub fn new(radius: u32, center: Point, options: StickOptions) -> Result<Self, JoystickError> {
        if radius == 0 {
            return Err(JoystickError::ZeroRadius);
        }
        validate_ratio(options.stick_ratio)?;
        Ok(Self {
            radius,
            center,
            stick: center,
            stick_ratio: options.stick_ratio,
            movement_axis: options.movement_axis,
            auto_recenter: options.auto_recenter,
        })
    }

    /// Builds a joystick sized to fill a `width`x`height` area, leaving room
    /// for the stick circle to be drawn fully inside the smaller extent.
    pub fn for_bounds(
        width: u32,
        height: u32,
        options: StickOptions,
    ) -> Result<Self, JoystickError> {
        validate_ratio(options.stick_ratio)?;
        let radius = fitted_radius(width, height, options.stick_ratio);
        if radius == 0 {
            return Err(JoystickError::BoundsTooSmall { width, height });
        }
        let center = Point::new((width / 2) as i32, (height / 2) as i32);
        Self::new(radius, center, options)
    }

    /// Re-derives center and radius from new bounds and snaps the stick to
    /// the new center. Bounds too small to fit a nonzero radius are rejected
    /// and leave the joystick untouched.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JoystickError> {
        let radius = fitted_radius(width, height, self.stick_ratio);
        if radius == 0 {
            return Err(JoystickError::BoundsTooSmall { width, height });
        }
        self.radius = radius;
        self.center = Point::new((width / 2) as i32, (height / 2) as i32);
        self.stick = self.center;
        Ok(())
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn stick(&self) -> Point {
        self.stick
    }

    pub fn stick_ratio(&self) -> f64 {
        self.stick_ratio
    }

    pub fn movement_axis(&self) -> MovementAxis {
        self.movement_axis
    }

    pub fn auto_recenter(&self) -> bool {
        self.auto_recenter
    }

    /// Rendered radius of the stick circle, never larger than the container.
    pub fn stick_radius(&self) -> u32 {
        ((self.stick_ratio * self.radius as f64).round() as u32).min(self.radius)
    }

    /// Moves the stick without any boundary check.
    pub fn set_stick(&mut self, at: Point) {
        self.stick = at;
    }

    /// Euclidean distance from the stick to the container center, truncated
    /// to whole pixels.
    pub fn distance(&self) -> u32 {
        self.center.distance_to(self.stick) as u32
    }

    /// Stick angle in degrees, `[0, 360)`, measured counterclockwise from
    /// due east. The vertical delta is flipped so that "up" on screen reads
    /// as 90 despite screen y growing downward.
    pub fn angle(&self) -> u16 {
        let dx = self.stick.x as f64 - self.center.x as f64;
        let dy = self.center.y as f64 - self.stick.y as f64;
        let degrees = dy.atan2(dx).to_degrees() as i32;
        if degrees < 0 {
            (degrees + 360) as u16
        } else {
            degrees as u16
        }
    }

    /// How far the stick is pushed, as a percentage of the container radius.
    pub fn strength(&self) -> u8 {
        (100 * self.distance() as u64 / self.radius as u64).min(100) as u8
    }

    /// Compass direction of the stick, or `Center` when the push is too
    /// small to register any strength.
    pub fn direction(&self) -> Direction {
        if self.strength() == 0 {
            Direction::Center
        } else {
            Direction::from_angle(self.angle())
        }
    }
}

fn validate_ratio(ratio: f64) -> Result<(), JoystickError> {
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(JoystickError::InvalidStickRatio(ratio));
    }
    Ok(())
}

/// Largest container radius for which container plus stick fit inside the
/// smaller extent of a `width`x`height` area.
fn fitted_radius(width: u32, height: u32, stick_ratio: f64) -> u32 {
    (width.min(height) as f64 / 2.0 / (1.0 + stick_ratio)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered(radius: u32) -> Joystick {
        Joystick::new(radius, Point::new(0, 0), StickOptions::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_zero_radius() {
        let result = Joystick::new(0, Point::new(0, 0), StickOptions::default());
        assert!(matches!(result, Err(JoystickError::ZeroRadius)));
    }

    #[test]
    fn test_new_rejects_bad_ratios() {
        for ratio in [0.0, -0.25, f64::NAN, f64::INFINITY] {
            let options = StickOptions {
                stick_ratio: ratio,
                ..StickOptions::default()
            };
            let result = Joystick::new(100, Point::new(0, 0), options);
            assert!(
                matches!(result, Err(JoystickError::InvalidStickRatio(_))),
                "ratio {} should be rejected",
                ratio
            );
        }
    }

    #[test]
    fn test_for_bounds_sizes_and_centers() {
        let joystick = Joystick::for_bounds(200, 200, StickOptions::default()).unwrap();
        assert_eq!(joystick.radius(), 80);
        assert_eq!(joystick.center(), Point::new(100, 100));
        assert_eq!(joystick.stick(), Point::new(100, 100));
        assert_eq!(joystick.stick_radius(), 20);
    }

    #[test]
    fn test_for_bounds_uses_smaller_extent() {
        let joystick = Joystick::for_bounds(400, 200, StickOptions::default()).unwrap();
        assert_eq!(joystick.radius(), 80);
        assert_eq!(joystick.center(), Point::new(200, 100));
    }

    #[test]
    fn test_for_bounds_rejects_degenerate_area() {
        let result = Joystick::for_bounds(2, 2, StickOptions::default());
        assert!(matches!(
            result,
            Err(JoystickError::BoundsTooSmall {
                width: 2,
                height: 2
            })
        ));
    }

    #[test]
    fn test_resize_recenters_stick() {
        let mut joystick = Joystick::for_bounds(200, 200, StickOptions::default()).unwrap();
        joystick.set_stick(Point::new(150, 100));

        joystick.resize(400, 400).unwrap();
        assert_eq!(joystick.radius(), 160);
        assert_eq!(joystick.center(), Point::new(200, 200));
        assert_eq!(joystick.stick(), Point::new(200, 200));
    }

    #[test]
    fn test_failed_resize_leaves_joystick_untouched() {
        let mut joystick = Joystick::for_bounds(200, 200, StickOptions::default()).unwrap();
        joystick.set_stick(Point::new(150, 100));
        let before = joystick.clone();

        let result = joystick.resize(1, 1);
        assert!(matches!(result, Err(JoystickError::BoundsTooSmall { .. })));
        assert_eq!(joystick, before);
    }

    #[test]
    fn test_derived_state() {
        let cases = vec![
            // stick, angle, strength, direction
            (Point::new(100, 0), 0, 100, Direction::East),
            (Point::new(0, -100), 90, 100, Direction::North),
            (Point::new(-100, 0), 180, 100, Direction::West),
            (Point::new(0, 100), 270, 100, Direction::South),
            (Point::new(50, -50), 45, 70, Direction::NorthEast),
            (Point::new(-50, 50), 225, 70, Direction::SouthWest),
            (Point::new(30, 40), 307, 50, Direction::SouthEast),
            (Point::new(0, 0), 0, 0, Direction::Center),
        ];

        let mut joystick = centered(100);
        for (stick, angle, strength, direction) in cases {
            joystick.set_stick(stick);
            assert_eq!(joystick.angle(), angle, "angle at {:?}", stick);
            assert_eq!(joystick.strength(), strength, "strength at {:?}", stick);
            assert_eq!(joystick.direction(), direction, "direction at {:?}", stick);
        }
    }

    #[test]
    fn test_angle_truncates_toward_zero() {
        let mut joystick = centered(100);
        // Just below due east from either side.
        joystick.set_stick(Point::new(100, 1));
        assert_eq!(joystick.angle(), 0);
        joystick.set_stick(Point::new(100, 2));
        assert_eq!(joystick.angle(), 359);
    }

    #[test]
    fn test_strength_is_capped_for_out_of_bounds_sticks() {
        let mut joystick = centered(100);
        joystick.set_stick(Point::new(1000, 0));
        assert_eq!(joystick.strength(), 100);
    }

    #[test]
    fn test_direction_is_center_only_at_zero_strength() {
        let mut joystick = centered(1000);
        // Nine pixels out of a thousand truncates to zero percent.
        joystick.set_stick(Point::new(9, 0));
        assert_eq!(joystick.strength(), 0);
        assert_eq!(joystick.direction(), Direction::Center);

        joystick.set_stick(Point::new(10, 0));
        assert_eq!(joystick.strength(), 1);
        assert_eq!(joystick.direction(), Direction::East);
    }
}
