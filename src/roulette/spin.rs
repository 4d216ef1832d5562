//! Spin physics and winner resolution
//!
//! The wheel turns clockwise. Wedge 0 starts at 12 o'clock and the fixed
//! pointer sits at the top pointing down into the wheel, so the winner is
//! found by inverting the rotation.

/// Degrees advanced on the first frame
pub const INITIAL_SPEED: f64 = 45.0;

/// Per-frame speed divisor
pub const SLOWDOWN: f64 = 1.008;

/// The wheel stops once speed drops to this value or below
pub const STOP_SPEED: f64 = 0.2;

/// Rotation and speed of a spinning wheel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinMotion {
    /// Accumulated rotation in degrees
    pub rotation: f64,
    /// Degrees per frame
    pub speed: f64,
}

impl SpinMotion {
    /// Start a spin from the wheel's current orientation
    pub fn new(rotation: f64) -> Self {
        Self {
            rotation,
            speed: INITIAL_SPEED,
        }
    }

    /// Advance one frame
    pub fn step(self) -> Self {
        Self {
            rotation: self.rotation + self.speed,
            speed: self.speed / SLOWDOWN,
        }
    }

    /// Whether another frame should be scheduled
    pub fn is_moving(&self) -> bool {
        self.speed > STOP_SPEED
    }
}

/// Index of the wedge under the pointer for a given rotation.
///
/// Returns `None` for an empty wheel.
pub fn select_index(rotation: f64, count: usize) -> Option<usize> {
    if count == 0 {
        return None;
    }

    let actual = rotation.rem_euclid(360.0);
    let section = 360.0 / count as f64;
    let under_pointer = (360.0 - actual).rem_euclid(360.0);
    let index = (under_pointer / section).floor() as usize;

    Some(index.min(count - 1))
}
