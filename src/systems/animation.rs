//! Animation clock
//!
//! Owns the master angle and the tick interval. The angle only ever grows by
//! `step` per tick; the engine reduces it when building a frame.

use std::time::{Duration, Instant};
use crate::config::{AnimationConfig, ConfigError};

/// Drives the master angle at a fixed tick rate
pub struct Animator {
    angle: f64,
    step: f64,
    tick: Duration,
    next_tick: Instant,
}

impl Animator {
    /// Create an animator from validated settings
    pub fn new(start_angle: f64, step: f64, tick: Duration) -> Self {
        Self {
            angle: start_angle,
            step,
            tick,
            next_tick: Instant::now() + tick,
        }
    }

    /// Create an animator from configuration
    pub fn from_config(config: &AnimationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config.start_angle, config.step, config.tick_interval()?))
    }

    /// Angle of the current frame
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick
    }

    /// Advance to the next frame and return its angle
    pub fn advance(&mut self) -> f64 {
        self.angle += self.step;
        self.angle
    }

    /// Sleep until the next tick is due
    ///
    /// When a frame overran its tick the schedule restarts from now instead of
    /// trying to catch up.
    pub fn wait_for_tick(&mut self) {
        let now = Instant::now();
        if self.next_tick > now {
            std::thread::sleep(self.next_tick - now);
            self.next_tick += self.tick;
        } else {
            self.next_tick = now + self.tick;
        }
    }
}
