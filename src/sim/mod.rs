//! Simulation module
//!
//! Balls split their state in two:
//! - intrinsic (sprite, radius), shared per kind through [`BallRegistry`]
//! - extrinsic (position, velocity), owned by each [`Ball`]
//!
//! Seeded RNG only, stable iteration order (spawn order), no platform
//! dependencies.

pub mod ball;
pub mod bounds;
pub mod clock;
pub mod input;
pub mod kind;
pub mod registry;
pub mod simulation;

pub use ball::{Ball, BodyHandle};
pub use bounds::Bounds;
pub use clock::FixedStep;
pub use input::{PointerButton, PointerEvent};
pub use kind::BallKind;
pub use registry::{BallFlyweight, BallRegistry};
pub use simulation::{SharedSimulation, SimStats, Simulation, lock_shared};
