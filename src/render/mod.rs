//! Drawing surface seam
//!
//! The host toolkit owns actual pixels. The simulation only issues
//! "draw this sprite into this rect" requests.

pub mod recording;

pub use recording::{DrawCall, RecordingSurface};

use glam::Vec2;

use crate::assets::Sprite;
use crate::error::RenderError;

/// Axis-aligned rectangle (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Square of side `side` at `pos`
    pub fn square(pos: Vec2, side: f32) -> Self {
        Self::new(pos, Vec2::splat(side))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// Anything that can draw a sprite into a rectangle
pub trait Surface {
    fn draw_image(&mut self, sprite: &Sprite, rect: Rect) -> Result<(), RenderError>;
}

/// Per-frame render outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub drawn: usize,
    pub skipped: usize,
}
