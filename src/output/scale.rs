//! Mapping from drawing space into unit space

use crate::normalizer::Point;

/// Default drawing-space size that maps onto the unit square
pub const DEFAULT_SCALE: f64 = 1000.0;

/// Rescales positions into unit space with an inverted Y axis:
/// `(x / scale, 1 - y / scale)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitTransform {
    pub scale: f64,
}

impl Default for UnitTransform {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl UnitTransform {
    pub fn new(scale: f64) -> Self {
        Self { scale }
    }

    /// Drawing space to unit space
    pub fn apply(&self, p: Point) -> (f64, f64) {
        (p.x / self.scale, 1.0 - p.y / self.scale)
    }

    /// Unit space back to drawing space
    pub fn invert(&self, x: f64, y: f64) -> Point {
        Point::new(x * self.scale, (1.0 - y) * self.scale)
    }
}
