//! Flyweight Balls entry point
//!
//! Headless host: loads config, wires the selector to the simulation, feeds a
//! scripted series of clicks and runs the fixed-step loop for a few simulated
//! seconds, rendering each frame into a recording surface.
//!
//! Usage: `flyweight-balls [config.json]`

use std::path::PathBuf;
use std::sync::Arc;

use glam::Vec2;

use flyweight_balls::assets::FsAssetLoader;
use flyweight_balls::render::RecordingSurface;
use flyweight_balls::sim::{
    BallKind, BallRegistry, Bounds, FixedStep, PointerEvent, Simulation, lock_shared,
};
use flyweight_balls::ui::TypeSelector;
use flyweight_balls::{ConfigError, SimConfig};

/// Simulated run length
const RUN_SECONDS: f32 = 3.0;
/// Host frame time, deliberately not a multiple of the sim step
const FRAME_TIME: f32 = 1.0 / 50.0;
/// When the scripted window resize happens
const RESIZE_AT: f32 = 2.0;

fn main() {
    env_logger::init();
    log::info!("Flyweight Balls (headless) starting...");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ConfigError> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = SimConfig::load_or_default(config_path.as_deref());

    let registry = Arc::new(BallRegistry::new(
        config.asset_dir.clone(),
        FsAssetLoader::new("."),
    ));
    if let Err(e) = registry.preload_all() {
        log::warn!("Not every sprite is available: {}", e);
    }

    let sim = Simulation::new(&config, Arc::clone(&registry))?.into_shared();
    let mut selector = TypeSelector::new(Arc::clone(&sim));
    for option in selector.options() {
        log::info!(
            "[{}] {}",
            if option.selected { "x" } else { " " },
            option.label
        );
    }

    let bounds = config.bounds();
    let center = (bounds.min + bounds.max) / 2.0;
    let script = [
        (0.0, Some(BallKind::Soccer), center),
        (0.5, Some(BallKind::Beach), center - Vec2::new(300.0, 100.0)),
        (1.0, None, center + Vec2::new(250.0, 150.0)),
        (1.5, Some(BallKind::Basket), bounds.min + Vec2::splat(60.0)),
    ];
    let mut next_event = 0;

    let mut clock = FixedStep::new(config.tick_interval);
    let mut surface = RecordingSurface::new();
    let mut elapsed = 0.0;
    let mut skipped = 0;
    let mut resized = false;

    while elapsed < RUN_SECONDS {
        while next_event < script.len() && script[next_event].0 <= elapsed {
            let (_, kind, pos) = script[next_event];
            if let Some(kind) = kind {
                selector.select(kind);
            }
            let spawned = lock_shared(&sim).handle_pointer_event(PointerEvent::click(pos));
            log::info!("Click at {} spawned {} balls", pos, spawned);
            next_event += 1;
        }

        let steps = clock.advance(FRAME_TIME);
        let mut guard = lock_shared(&sim);
        if !resized && elapsed >= RESIZE_AT {
            // Host window shrinks to three quarters of its width
            guard.set_bounds(Bounds::new(
                bounds.min,
                Vec2::new(bounds.max.x * 0.75, bounds.max.y),
            ));
            log::info!("Window resized, bounds now {:?}", guard.bounds());
            resized = true;
        }
        for _ in 0..steps {
            guard.tick(clock.dt());
        }

        surface.clear();
        skipped += guard.render(&mut surface).skipped;
        elapsed += FRAME_TIME;
    }

    let sim = lock_shared(&sim);
    let stats = sim.stats();
    log::info!(
        "Done: {} balls, {} kinds loaded ({} constructions), {} ticks, {} draws, {} skipped",
        stats.balls,
        stats.kinds_loaded,
        registry.constructions(),
        stats.ticks,
        surface.total(),
        skipped
    );
    for ball in sim.balls().take(5) {
        log::debug!("ball {} {:?} at {} vel {}", ball.id(), ball.kind(), ball.pos, ball.vel);
    }

    Ok(())
}
