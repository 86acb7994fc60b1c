// src/policy/takeoff.rs

//! # Takeoff Velocity-Ramp Module
//!
//! This module provides a stateful trapezoidal velocity-profile generator
//! used to accelerate the vehicle from rest toward a target altitude gain.
//! The profile starts at a floor speed, accelerates at a fixed rate until
//! it reaches the requested maximum, and self-terminates once the
//! closed-form height covered reaches the requested altitude delta.
//! Closed-form height avoids accumulating numerical integration error, so
//! the ramp terminates in bounded time regardless of tick-rate jitter.

use crate::policy::blend::{blend_climb_rates, ClimbRateBlend};
use crate::vehicle::Number;

/// Configuration for the takeoff velocity profile.
///
/// Example Usage
/// ```
/// use depth_hold_control::policy::TakeoffConfig;
///
/// let mut config = TakeoffConfig::<f32>::new();
///
/// // Fixed profile acceleration in cm/s².
/// config.accel = 50.0;
///
/// // Floor for the profile starting speed in cm/s. The effective floor is
/// // never above the ramp's maximum speed.
/// config.min_speed = 50.0;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TakeoffConfig<T: Number> {
    /// Profile acceleration in cm/s².
    pub accel: T,
    /// Starting-speed floor in cm/s.
    pub min_speed: T,
}

impl<T: Number> TakeoffConfig<T> {
    /// Creates a new configuration with neutral values. These should be
    /// replaced with values tuned for the vehicle.
    pub fn new() -> Self {
        Self {
            accel: T::one(),
            min_speed: T::one(),
        }
    }
}

impl<T: Number> Default for TakeoffConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful takeoff velocity-ramp generator.
///
/// All operations take the current monotonic time in seconds; the ramp
/// holds no clock of its own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TakeoffRamp<T: Number> {
    config: TakeoffConfig<T>,
    running: bool,
    start_time: T,
    max_speed: T,
    alt_delta: T,
}

impl<T: Number> TakeoffRamp<T> {
    /// Creates an idle ramp using the provided configuration.
    pub fn with_config(config: TakeoffConfig<T>) -> Self {
        Self {
            config,
            running: false,
            start_time: T::zero(),
            max_speed: T::zero(),
            alt_delta: T::zero(),
        }
    }

    /// Creates an idle ramp with default settings.
    pub fn new() -> Self {
        Self::with_config(TakeoffConfig::new())
    }

    /// Whether a ramp is in progress.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begins a ramp covering `alt_delta` cm with asymptotic speed
    /// `max_speed` cm/s.
    ///
    /// Start requests are best-effort hints: a ramp already running, or a
    /// non-positive speed or altitude delta, leaves the ramp untouched.
    pub fn start(&mut self, now: T, alt_delta: T, max_speed: T) {
        if self.running || max_speed <= T::zero() || alt_delta <= T::zero() {
            return;
        }

        self.running = true;
        self.start_time = now;
        self.max_speed = max_speed;
        self.alt_delta = alt_delta;
    }

    /// Stops the ramp. Idempotent.
    pub fn stop(&mut self) {
        self.running = false;
        self.start_time = T::zero();
    }

    /// Evaluates the profile at time `now`, returning the ramp climb rate in
    /// cm/s and whether the ramp is still running.
    ///
    /// Termination is checked here and only here: once the closed-form
    /// height covered reaches the altitude delta the ramp stops, but the
    /// rate returned for that tick is still the profile speed, so the ramp
    /// winds down one tick after the target height is crossed.
    pub fn evaluate(&mut self, now: T) -> (T, bool) {
        if !self.running {
            return (T::zero(), false);
        }

        let accel = self.config.accel;
        let min_speed = self.config.min_speed.min(self.max_speed);
        let elapsed = (now - self.start_time).max(T::zero());

        let half = T::one() / (T::one() + T::one());
        let (speed, height) = if accel > T::zero() {
            let speed = (elapsed * accel + min_speed).min(self.max_speed);
            let time_to_max = (self.max_speed - min_speed) / accel;
            let height = if elapsed <= time_to_max {
                half * accel * elapsed * elapsed + min_speed * elapsed
            } else {
                half * accel * time_to_max * time_to_max
                    + min_speed * time_to_max
                    + (elapsed - time_to_max) * self.max_speed
            };
            (speed, height)
        } else {
            // Degenerate profile: no acceleration phase, linear in max speed.
            (self.max_speed, elapsed * self.max_speed)
        };

        if height >= self.alt_delta {
            self.stop();
        }

        if speed <= T::zero() {
            return (T::zero(), self.running);
        }

        (speed, self.running)
    }

    /// Evaluates the ramp and blends its climb rate with the pilot's in one
    /// call. Returns the pilot input unchanged while the ramp is idle.
    pub fn climb_rates(&mut self, pilot_climb_rate: T, now: T) -> ClimbRateBlend<T> {
        if !self.running {
            return ClimbRateBlend {
                pilot: pilot_climb_rate,
                takeoff: T::zero(),
            };
        }

        let (takeoff_climb_rate, _) = self.evaluate(now);
        blend_climb_rates(pilot_climb_rate, takeoff_climb_rate)
    }
}

impl<T: Number> Default for TakeoffRamp<T> {
    fn default() -> Self {
        Self::new()
    }
}
