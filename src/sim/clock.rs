//! Fixed timestep accumulator for host loops

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS};

/// Turns variable frame times into whole fixed steps
#[derive(Debug, Clone)]
pub struct FixedStep {
    dt: f32,
    accumulator: f32,
}

impl FixedStep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    pub fn dt(&self) -> f32 {
        self.dt
    }

    /// Feed `elapsed` seconds of real time and return how many steps to run.
    ///
    /// Long stalls are clamped and at most `MAX_SUBSTEPS` steps are returned
    /// per call; leftover time carries to the next frame.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut steps = 0;
        while self.accumulator >= self.dt && steps < MAX_SUBSTEPS {
            self.accumulator -= self.dt;
            steps += 1;
        }
        steps
    }

    /// Fraction of a step currently buffered (for interpolation)
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Power-of-two step so the arithmetic is exact
    const DT: f32 = 1.0 / 128.0;

    #[test]
    fn test_whole_steps() {
        let mut clock = FixedStep::new(DT);
        assert_eq!(clock.advance(3.5 * DT), 3);
        assert_eq!(clock.alpha(), 0.5);
        assert_eq!(clock.advance(0.5 * DT), 1);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_clamps_long_stall() {
        let mut clock = FixedStep::new(DT);
        assert_eq!(clock.advance(5.0), MAX_SUBSTEPS);
        // Clamped to MAX_FRAME_TIME (12.8 steps); the rest of the stall is dropped
        assert_eq!(clock.advance(0.0), 4);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_negative_elapsed_ignored() {
        let mut clock = FixedStep::new(DT);
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
