//! Pointer input forwarded by the host

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Pointer event in simulation-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { pos: Vec2, button: PointerButton },
    Release { pos: Vec2, button: PointerButton },
    Move { pos: Vec2 },
}

impl PointerEvent {
    /// Primary-button press at `pos`
    pub fn click(pos: Vec2) -> Self {
        PointerEvent::Press {
            pos,
            button: PointerButton::Primary,
        }
    }

    pub fn pos(&self) -> Vec2 {
        match *self {
            PointerEvent::Press { pos, .. }
            | PointerEvent::Release { pos, .. }
            | PointerEvent::Move { pos } => pos,
        }
    }
}
