//! Input and geometry engine for a virtual analog joystick: a container
//! circle, a stick point kept inside it, and derived angle, strength and
//! compass direction readings.

pub mod config;
pub mod direction;
pub mod events;
pub mod geometry;
pub mod joystick;
pub mod tracker;
