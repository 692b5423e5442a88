//! The ball simulation
//!
//! Owns the live balls, advances them each tick, spawns batches on clicks and
//! draws them. Balls are kept in spawn order, which is both the update order
//! and the draw order (later balls on top).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use rand_pcg::Pcg32;

use super::ball::{Ball, BodyHandle};
use super::bounds::Bounds;
use super::input::{PointerButton, PointerEvent};
use super::kind::BallKind;
use super::registry::BallRegistry;
use crate::error::{ConfigError, SpawnError};
use crate::render::{RenderStats, Surface};
use crate::settings::SimConfig;

/// Handle shared between the host loop and UI controls
pub type SharedSimulation = Arc<Mutex<Simulation>>;

/// Lock a shared simulation for one tick, render or input batch
pub fn lock_shared(sim: &SharedSimulation) -> MutexGuard<'_, Simulation> {
    crate::lock(sim)
}

/// Snapshot counters for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimStats {
    pub balls: usize,
    pub kinds_loaded: usize,
    pub ticks: u64,
    pub retired: u64,
}

pub struct Simulation {
    registry: Arc<BallRegistry>,
    balls: VecDeque<Ball>,
    bounds: Bounds,
    active_kind: BallKind,
    batch_size: usize,
    speed: Normal<f32>,
    max_bodies: Option<usize>,
    rng: Pcg32,
    next_id: BodyHandle,
    tick_count: u64,
    retired: u64,
}

impl Simulation {
    pub fn new(config: &SimConfig, registry: Arc<BallRegistry>) -> Result<Self, ConfigError> {
        config.validate()?;
        let speed = Normal::new(config.speed_mean, config.speed_std_dev)
            .map_err(|e| ConfigError::Invalid(format!("spawn speed distribution: {e}")))?;
        let seed = config.resolved_seed();
        log::info!("Simulation seeded with {}", seed);

        Ok(Self {
            registry,
            balls: VecDeque::new(),
            bounds: config.bounds(),
            active_kind: config.default_kind,
            batch_size: config.batch_size,
            speed,
            max_bodies: config.max_bodies,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            tick_count: 0,
            retired: 0,
        })
    }

    /// Wrap for sharing with a [`TypeSelector`](crate::ui::TypeSelector)
    pub fn into_shared(self) -> SharedSimulation {
        Arc::new(Mutex::new(self))
    }

    pub fn set_active_kind(&mut self, kind: BallKind) {
        if kind != self.active_kind {
            log::debug!("Active kind {:?} -> {:?}", self.active_kind, kind);
        }
        self.active_kind = kind;
    }

    pub fn active_kind(&self) -> BallKind {
        self.active_kind
    }

    /// Spawn one ball of the active kind.
    ///
    /// `radius` must be positive. The extent actually used comes from the
    /// kind's shared state.
    pub fn spawn(&mut self, pos: Vec2, vel: Vec2, radius: f32) -> Result<BodyHandle, SpawnError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SpawnError::InvalidRadius(radius));
        }

        let flyweight = self.registry.get(self.active_kind)?;
        if radius != flyweight.radius() {
            log::debug!(
                "Requested radius {} overridden by {:?} radius {}",
                radius,
                self.active_kind,
                flyweight.radius()
            );
        }

        if let Some(max) = self.max_bodies {
            while self.balls.len() >= max {
                self.balls.pop_front();
                self.retired += 1;
            }
        }

        let id = self.next_id;
        self.next_id += 1;
        self.balls.push_back(Ball::new(id, pos, vel, flyweight));
        log::debug!("Spawned {:?} ball {} at {} vel {}", self.active_kind, id, pos, vel);
        Ok(id)
    }

    /// Advance every ball by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for ball in self.balls.iter_mut() {
            ball.update(dt, &self.bounds);
        }
        self.tick_count += 1;
    }

    /// Draw every ball. A ball that fails to draw is skipped for this frame.
    pub fn render(&self, surface: &mut dyn Surface) -> RenderStats {
        let mut stats = RenderStats::default();
        for ball in &self.balls {
            match ball.render(surface) {
                Ok(()) => stats.drawn += 1,
                Err(e) => {
                    log::warn!("Skipping ball {}: {}", ball.id(), e);
                    stats.skipped += 1;
                }
            }
        }
        stats
    }

    /// Spawn a batch on primary press. Returns how many balls were added.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> usize {
        let PointerEvent::Press {
            pos,
            button: PointerButton::Primary,
        } = event
        else {
            return 0;
        };

        let radius = self.active_kind.radius();
        let mut spawned = 0;
        for _ in 0..self.batch_size {
            let vel = self.random_velocity();
            match self.spawn(pos, vel, radius) {
                Ok(_) => spawned += 1,
                Err(e) => log::warn!("Spawn at {} failed: {}", pos, e),
            }
        }
        spawned
    }

    /// Both axes share one random sign; magnitudes are drawn independently
    fn random_velocity(&mut self) -> Vec2 {
        let sign = if self.rng.random_bool(0.5) { 1.0 } else { -1.0 };
        let vx = self.speed.sample(&mut self.rng);
        let vy = self.speed.sample(&mut self.rng);
        Vec2::new(vx, vy) * sign
    }

    pub fn balls(&self) -> impl Iterator<Item = &Ball> {
        self.balls.iter()
    }

    pub fn ball(&self, id: BodyHandle) -> Option<&Ball> {
        // Ids are handed out in increasing order
        self.balls
            .binary_search_by_key(&id, Ball::id)
            .ok()
            .map(|i| &self.balls[i])
    }

    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Host resized the window
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    pub fn registry(&self) -> &Arc<BallRegistry> {
        &self.registry
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn stats(&self) -> SimStats {
        SimStats {
            balls: self.balls.len(),
            kinds_loaded: self.registry.len(),
            ticks: self.tick_count,
            retired: self.retired,
        }
    }
}
