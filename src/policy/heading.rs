// src/policy/heading.rs

//! # Heading-Hold Policy Module
//!
//! This module provides the debounced state machine deciding whether the
//! vehicle yaws at a pilot-commanded rate or holds a previously-latched
//! heading. Commanding an absolute heading the instant the pilot releases
//! the yaw stick causes bounce back: vehicle inertia carries the heading
//! past the release point and the controller snaps it backwards. The policy
//! therefore commands a zero yaw rate for a short deceleration window after
//! release, refreshing the latched heading every tick, and only then locks
//! onto the heading reached.

use crate::vehicle::Number;

/// Configuration for the heading-hold debounce.
///
/// Example Usage
/// ```
/// use depth_hold_control::policy::HeadingHoldConfig;
///
/// let mut config = HeadingHoldConfig::<f32>::new();
///
/// // Seconds of zero-rate deceleration after yaw release before the
/// // heading latch engages.
/// config.decel_window = 0.25;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingHoldConfig<T: Number> {
    /// Deceleration window in seconds after the last pilot yaw input.
    pub decel_window: T,
}

impl<T: Number> HeadingHoldConfig<T> {
    /// Creates a new configuration with neutral values. These should be
    /// replaced with values tuned for the vehicle.
    pub fn new() -> Self {
        Self {
            decel_window: T::zero(),
        }
    }
}

impl<T: Number> Default for HeadingHoldConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Yaw command selected by the policy for this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum YawCommand<T> {
    /// Command the attitude controller with a raw yaw rate in degrees/s.
    Rate(T),
    /// Command the attitude controller to steer to an absolute heading in
    /// degrees.
    Heading(T),
}

/// Debounced heading-hold state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingHold<T: Number> {
    config: HeadingHoldConfig<T>,
    latched_heading: T,
    last_input_time: T,
}

impl<T: Number> HeadingHold<T> {
    /// Creates the policy using the provided configuration, latched to a
    /// zero heading until [`Self::reset`] runs.
    pub fn with_config(config: HeadingHoldConfig<T>) -> Self {
        Self {
            config,
            latched_heading: T::zero(),
            last_input_time: T::zero(),
        }
    }

    /// Creates the policy with default settings.
    pub fn new() -> Self {
        Self::with_config(HeadingHoldConfig::new())
    }

    /// Heading the policy would hold if the pilot stays off the yaw stick.
    pub fn latched_heading(&self) -> T {
        self.latched_heading
    }

    /// Re-latches onto `heading` as if the pilot had just released the yaw
    /// stick at `now`. Used at mode entry and while disarmed so the latch
    /// never goes stale.
    pub fn reset(&mut self, heading: T, now: T) {
        self.latched_heading = heading;
        self.last_input_time = now;
    }

    /// Advances the state machine one tick and selects the yaw command.
    ///
    /// `heading` is the current heading estimate and `pilot_yaw_rate` the
    /// deadzone-applied pilot yaw-rate input; any non-zero input tracks the
    /// pilot directly.
    pub fn update(&mut self, now: T, heading: T, pilot_yaw_rate: T) -> YawCommand<T> {
        if pilot_yaw_rate != T::zero() {
            // Tracking: yaw at the pilot rate, remember where we are.
            self.latched_heading = heading;
            self.last_input_time = now;
            return YawCommand::Rate(pilot_yaw_rate);
        }

        if now < self.last_input_time + self.config.decel_window {
            // Decelerating: zero-rate command while inertia bleeds off,
            // still following the actual heading.
            self.latched_heading = heading;
            return YawCommand::Rate(T::zero());
        }

        YawCommand::Heading(self.latched_heading)
    }
}

impl<T: Number> Default for HeadingHold<T> {
    fn default() -> Self {
        Self::new()
    }
}
