// src/policy/depth.rs

//! # Depth-Constraint Policy Module
//!
//! This module selects the depth target submitted to the position
//! controller each tick, honoring bottom contact and the configured
//! surface-depth limit. The policy enforces the hard physical bounds while
//! leaving the pilot full authority elsewhere, and relaxes the position
//! controller's velocity and integrator state exactly when motion direction
//! reverses across the surface boundary, so the controller never fights a
//! fresh downward command with stale upward momentum.

use crate::vehicle::{Number, PositionControl};

/// Configured depth bounds.
///
/// Example Usage
/// ```
/// use depth_hold_control::policy::DepthLimits;
///
/// let mut limits = DepthLimits::<f32>::new();
///
/// // Shallowest permissible depth target in cm (negative below surface).
/// limits.surface_depth = -10.0;
///
/// // Target offset above the floor while resting on the bottom, in cm.
/// limits.bottom_clearance = 10.0;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthLimits<T: Number> {
    /// Shallowest permissible depth target in cm.
    pub surface_depth: T,
    /// Depth-target offset above the current altitude while on the bottom,
    /// in cm.
    pub bottom_clearance: T,
}

impl<T: Number> DepthLimits<T> {
    /// Creates new limits with neutral values. These should be replaced
    /// with values tuned for the vehicle.
    pub fn new() -> Self {
        Self {
            surface_depth: T::zero(),
            bottom_clearance: T::zero(),
        }
    }
}

impl<T: Number> Default for DepthLimits<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-tick inputs to the depth-constraint decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthInputs<T> {
    /// Current altitude estimate in cm.
    pub altitude: T,
    /// Commanded climb rate in cm/s, after takeoff blending and any
    /// rangefinder surface-tracking substitution.
    pub climb_rate: T,
    /// Whether the vehicle is resting on the bottom.
    pub at_bottom: bool,
}

/// Drives the position controller's depth target for one tick.
///
/// Decision order:
/// 1. bottom contact clears all velocity/position/integrator state and
///    pins the target a fixed clearance above the current altitude;
/// 2. below the surface-depth limit the pilot moves freely via climb-rate
///    feed-forward;
/// 3. at or above the limit a descent command is honored, relaxing first if
///    the controller still carries an upward velocity target;
/// 4. otherwise the depth target is clamped to the surface-depth limit.
pub fn apply_depth_constraints<T, P>(pos: &mut P, limits: &DepthLimits<T>, inputs: DepthInputs<T>, dt: T)
where
    T: Number,
    P: PositionControl<T>,
{
    if inputs.at_bottom {
        pos.relax(T::zero());
        pos.set_depth_target(inputs.altitude + limits.bottom_clearance);
    } else if inputs.altitude < limits.surface_depth {
        // Pilot allowed to move up or down freely.
        pos.input_climb_rate(inputs.climb_rate, dt);
    } else if inputs.climb_rate < T::zero() {
        // Pilot allowed to move only down freely.
        if pos.velocity_target() > T::zero() {
            pos.relax(T::zero());
        }
        pos.input_climb_rate(inputs.climb_rate, dt);
    } else if pos.depth_target() > limits.surface_depth {
        // Hold depth at the surface limit.
        pos.set_depth_target(limits.surface_depth);
    }
}
