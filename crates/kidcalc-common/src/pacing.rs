//! Cooperative pacing for console output.
//!
//! Demos pause between sections so the output can be read as it scrolls.
//! A pause never synchronises anything: it blocks the single demo thread
//! for a while and advances a virtual clock used for log timestamps.
//!
//! ## Features
//!
//! - **Speed multiplier**: pause shorter or longer than requested
//! - **Disabled mode**: skip wall-clock sleeping entirely (tests, CI)
//! - **Virtual clock**: timestamps stay the same whatever the speed

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use thiserror::Error;

/// Errors in pacing configuration.
#[derive(Debug, Error, PartialEq)]
pub enum PacingError {
    /// Speed multiplier was zero, negative or not a number.
    #[error("speed multiplier must be a positive finite number, got {0}")]
    InvalidSpeed(f64),
}

/// Configuration for paced console output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// Enable/disable wall-clock sleeping.
    /// When disabled, delays only advance the virtual clock.
    pub enabled: bool,

    /// Speed multiplier (1.0 = as written, 2.0 = pauses half as long).
    /// Values must be positive.
    pub speed_multiplier: f64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        PacingConfig {
            enabled: true,
            speed_multiplier: 1.0,
        }
    }
}

impl PacingConfig {
    /// Create a pacing config with the given speed multiplier.
    pub fn with_speed(speed: f64) -> Self {
        assert!(speed > 0.0, "Speed multiplier must be positive");
        PacingConfig {
            speed_multiplier: speed,
            ..Default::default()
        }
    }

    /// Create a disabled pacing config (no sleeping at all).
    pub fn disabled() -> Self {
        PacingConfig {
            enabled: false,
            ..Default::default()
        }
    }

    /// Check values that may have come from a config file or the command line.
    pub fn validate(&self) -> Result<(), PacingError> {
        if !self.speed_multiplier.is_finite() || self.speed_multiplier <= 0.0 {
            return Err(PacingError::InvalidSpeed(self.speed_multiplier));
        }
        Ok(())
    }

    /// Wall-clock time a requested delay should take under this config.
    pub fn wall_duration(&self, ms: u64) -> Duration {
        if !self.enabled {
            return Duration::ZERO;
        }
        Duration::from_micros((ms as f64 * 1000.0 / self.speed_multiplier) as u64)
    }
}

/// A source of cooperative delays.
///
/// `elapsed_ms` is virtual: the sum of every delay requested so far,
/// independent of how long the pauses actually took.
pub trait Pacer {
    /// Pause for `ms` milliseconds of demo time.
    fn delay(&mut self, ms: u64);

    /// Virtual milliseconds since the pacer was created.
    fn elapsed_ms(&self) -> u64;
}

/// Sleeps the current thread, scaled by the configured speed.
#[derive(Debug)]
pub struct RealTimePacer {
    config: PacingConfig,
    start_wall: Instant,
    virtual_ms: u64,
}

impl RealTimePacer {
    /// Create a new real-time pacer.
    pub fn new(config: PacingConfig) -> Self {
        RealTimePacer {
            config,
            start_wall: Instant::now(),
            virtual_ms: 0,
        }
    }

    /// Wall time actually spent since creation.
    pub fn wall_elapsed(&self) -> Duration {
        self.start_wall.elapsed()
    }
}

impl Pacer for RealTimePacer {
    fn delay(&mut self, ms: u64) {
        self.virtual_ms += ms;
        let wall = self.config.wall_duration(ms);
        tracing::trace!(ms, wall_us = wall.as_micros() as u64, "pacing delay");
        if !wall.is_zero() {
            std::thread::sleep(wall);
        }
    }

    fn elapsed_ms(&self) -> u64 {
        self.virtual_ms
    }
}

/// Advances the virtual clock without sleeping.
#[derive(Debug, Default)]
pub struct InstantPacer {
    virtual_ms: u64,
}

impl InstantPacer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Pacer for InstantPacer {
    fn delay(&mut self, ms: u64) {
        self.virtual_ms += ms;
    }

    fn elapsed_ms(&self) -> u64 {
        self.virtual_ms
    }
}
