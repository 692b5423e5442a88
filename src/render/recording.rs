//! In-memory surface that records draw requests

use std::path::PathBuf;

use super::{Rect, Surface};
use crate::assets::Sprite;
use crate::error::RenderError;

/// One recorded draw request
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub sprite: PathBuf,
    pub rect: Rect,
}

/// Records draw calls per frame. Used by the headless host and tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    /// Total draws across all frames
    total: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls since the last `clear`, in draw order (later = on top)
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Start a new frame
    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn draw_image(&mut self, sprite: &Sprite, rect: Rect) -> Result<(), RenderError> {
        if !rect.size.is_finite() || !rect.pos.is_finite() {
            return Err(RenderError::Surface(format!("non-finite rect {:?}", rect)));
        }
        self.calls.push(DrawCall {
            sprite: sprite.path().to_path_buf(),
            rect,
        });
        self.total += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_records_in_order() {
        let mut surface = RecordingSurface::new();
        let a = Sprite::new("a.png", vec![1u8]);
        let b = Sprite::new("b.png", vec![1u8]);

        surface
            .draw_image(&a, Rect::square(Vec2::ZERO, 50.0))
            .unwrap();
        surface
            .draw_image(&b, Rect::square(Vec2::new(10.0, 10.0), 50.0))
            .unwrap();

        let calls = surface.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].sprite, PathBuf::from("a.png"));
        assert_eq!(calls[1].sprite, PathBuf::from("b.png"));
        assert_eq!(calls[1].rect.max(), Vec2::new(60.0, 60.0));

        surface.clear();
        assert!(surface.calls().is_empty());
        assert_eq!(surface.total(), 2);
    }

    #[test]
    fn test_rejects_non_finite_rect() {
        let mut surface = RecordingSurface::new();
        let sprite = Sprite::new("a.png", vec![1u8]);
        let result = surface.draw_image(&sprite, Rect::square(Vec2::new(f32::NAN, 0.0), 50.0));
        assert!(matches!(result, Err(RenderError::Surface(_))));
        assert_eq!(surface.total(), 0);
    }
}
