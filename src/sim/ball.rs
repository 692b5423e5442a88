//! A single ball: extrinsic state plus a shared flyweight

use std::sync::Arc;

use glam::Vec2;

use super::bounds::Bounds;
use super::kind::BallKind;
use super::registry::BallFlyweight;
use crate::error::RenderError;
use crate::render::{Rect, Surface};

/// Stable identifier for a spawned ball (never reused)
pub type BodyHandle = u64;

/// A ball entity
#[derive(Debug, Clone)]
pub struct Ball {
    id: BodyHandle,
    /// Top-left corner of the ball's bounding square
    pub pos: Vec2,
    pub vel: Vec2,
    flyweight: Arc<BallFlyweight>,
}

impl Ball {
    pub fn new(id: BodyHandle, pos: Vec2, vel: Vec2, flyweight: Arc<BallFlyweight>) -> Self {
        Self {
            id,
            pos,
            vel,
            flyweight,
        }
    }

    pub fn id(&self) -> BodyHandle {
        self.id
    }

    pub fn kind(&self) -> BallKind {
        self.flyweight.kind()
    }

    pub fn radius(&self) -> f32 {
        self.flyweight.radius()
    }

    pub fn flyweight(&self) -> &Arc<BallFlyweight> {
        &self.flyweight
    }

    /// Where the sprite is drawn
    pub fn rect(&self) -> Rect {
        Rect::square(self.pos, self.flyweight.diameter())
    }

    /// Advance by `dt` and bounce off the edges of `bounds`.
    ///
    /// Reflection only flips the velocity sign. The ball is not pushed back
    /// inside, so it may be drawn past the edge for one frame.
    pub fn update(&mut self, dt: f32, bounds: &Bounds) {
        self.pos += self.vel * dt;

        let (cross_x, cross_y) = bounds.crossing(self.pos, self.flyweight.diameter());
        if cross_x {
            self.vel.x = -self.vel.x;
        }
        if cross_y {
            self.vel.y = -self.vel.y;
        }
    }

    /// Draw the shared sprite at the current position
    pub fn render(&self, surface: &mut dyn Surface) -> Result<(), RenderError> {
        let sprite = self.flyweight.sprite();
        if !sprite.is_valid() {
            return Err(RenderError::InvalidSprite { kind: self.kind() });
        }
        surface.draw_image(sprite, self.rect())
    }
}
