//! Flyweight Balls - bouncing balls that share their per-type sprite
//!
//! Core modules:
//! - `sim`: Ball kinds, the flyweight registry, balls and the simulation
//! - `assets`: Sprite loading seam (filesystem loader, no decoding)
//! - `render`: Drawing surface seam and an in-memory recording surface
//! - `ui`: Radio-style ball type selector
//! - `settings`: Data-driven simulation configuration

pub mod assets;
pub mod error;
pub mod render;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::{ConfigError, RenderError, ResourceLoadError, SpawnError};
pub use settings::SimConfig;

use std::sync::{Mutex, MutexGuard};

/// Simulation configuration constants
pub mod consts {
    /// Fixed simulation timestep (~60 Hz, matches the 16.67 ms host timer)
    pub const SIM_DT: f32 = 0.01667;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest real-time gap a single frame may feed into the accumulator
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Reference window size
    pub const WINDOW_WIDTH: f32 = 1280.0;
    pub const WINDOW_HEIGHT: f32 = 720.0;
    /// Fraction of the window height reserved for the type selector band
    pub const HEADER_FRACTION: f32 = 0.1;

    /// Radius shared by every ball kind
    pub const BALL_RADIUS: f32 = 25.0;

    /// Balls spawned per click
    pub const SPAWN_BATCH: usize = 5;
    /// Spawn speed distribution (pixels/s)
    pub const SPAWN_SPEED_MEAN: f32 = 300.0;
    pub const SPAWN_SPEED_STD_DEV: f32 = 150.0;
}

/// Lock a mutex, recovering the guard if a previous holder panicked.
///
/// Every critical section in this crate leaves its data consistent, so a
/// poisoned lock carries no torn state.
#[inline]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}
