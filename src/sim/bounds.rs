//! Active simulation area

use glam::Vec2;

/// Rectangle balls bounce inside of. `min.y` sits below the header band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Bounds for a window whose top `header_fraction` is reserved for controls
    pub fn from_window(width: f32, height: f32, header_fraction: f32) -> Self {
        Self {
            min: Vec2::new(0.0, height * header_fraction),
            max: Vec2::new(width, height),
        }
    }

    /// Size of the active area
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Whether a square of side `extent` at `pos` has left the area
    /// horizontally and vertically
    #[inline]
    pub fn crossing(&self, pos: Vec2, extent: f32) -> (bool, bool) {
        let far = pos + Vec2::splat(extent);
        (
            pos.x < self.min.x || far.x > self.max.x,
            pos.y < self.min.y || far.y > self.max.y,
        )
    }
}
