// src/vehicle.rs

//! Contracts for the external collaborators the vertical-motion core drives.
//!
//! The controller in this crate never owns attitude math, position-control
//! integration, motor allocation, or sensing. Each of those lives behind one
//! of the narrow traits below, implemented by the surrounding firmware (or by
//! a simulation double in tests). All trait calls are non-blocking
//! snapshot/set operations expected to complete within the control tick.

use num_traits::float::FloatCore;

/// Custom trait to encapsulate base number requirements.
///
/// Every quantity in this crate (rates in cm/s, altitudes in cm, headings in
/// degrees, times in seconds) is generic over one scalar implementing this
/// trait; `f32` and `f64` both qualify.
pub trait Number: FloatCore {}

impl<T: FloatCore> Number for T {}

/// Requested motor spool state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpoolState {
    /// Spin at ground-idle only; no pilot throttle authority.
    SpinWhenArmed,
    /// Full throttle authority for active flight.
    ThrottleUnlimited,
}

/// Severity attached to operator notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    /// Informational message.
    Info,
    /// Condition the operator should act on.
    Warning,
    /// Condition preventing or aborting operation.
    Critical,
}

/// Attitude controller contract.
///
/// Accepts either a rate-yaw or an absolute-heading command each tick and is
/// assumed to converge independently.
pub trait AttitudeControl<T: Number> {
    /// Maximum lean angle (degrees) permitted while holding depth.
    fn lean_angle_max(&self) -> T;

    /// Command roll/pitch angles with a pilot yaw rate.
    fn input_euler_rate_yaw(&mut self, roll: T, pitch: T, yaw_rate: T, smoothing: T);

    /// Command roll/pitch angles with an absolute heading to steer to.
    /// `slew` selects rate-limited rotation toward the target heading.
    fn input_euler_heading(&mut self, roll: T, pitch: T, heading: T, slew: bool, smoothing: T);

    /// Drive throttle output directly without attitude stabilization.
    /// Used while disarmed or interlocked.
    fn set_throttle_unstabilized(&mut self, throttle: T);
}

/// Vertical position controller contract (the depth axis).
pub trait PositionControl<T: Number> {
    /// Set the maximum descent and climb speeds (cm/s, descent negative).
    fn set_speed_limits(&mut self, speed_down: T, speed_up: T);

    /// Set the maximum vertical acceleration (cm/s²).
    fn set_accel_limit(&mut self, accel: T);

    /// Current depth (altitude) target in cm.
    fn depth_target(&self) -> T;

    /// Replace the depth target outright.
    fn set_depth_target(&mut self, target: T);

    /// Seed the desired vertical velocity (cm/s), typically at mode entry.
    fn set_desired_velocity(&mut self, velocity: T);

    /// Current vertical velocity target in cm/s.
    fn velocity_target(&self) -> T;

    /// Advance the depth target from a climb rate via feed-forward.
    fn input_climb_rate(&mut self, climb_rate: T, dt: T);

    /// Clear velocity/position targets and the depth integrator, biasing
    /// throttle output by `throttle_bias`.
    fn relax(&mut self, throttle_bias: T);

    /// Run the per-tick depth-axis update.
    fn update(&mut self, dt: T);
}

/// Motor and interlock interface.
pub trait Motors<T: Number> {
    /// Whether the motors are armed.
    fn armed(&self) -> bool;

    /// Whether the mechanical interlock is engaged.
    fn interlock(&self) -> bool;

    /// Request a motor spool state.
    fn set_spool_state(&mut self, state: SpoolState);

    /// Forward thrust command, normalized to [-1, 1].
    fn set_forward(&mut self, thrust: T);

    /// Lateral thrust command, normalized to [-1, 1].
    fn set_lateral(&mut self, thrust: T);
}

/// Inertial/sensor estimates consumed each tick.
pub trait Navigation<T: Number> {
    /// Current altitude estimate in cm (negative below the surface).
    fn altitude(&self) -> T;

    /// Current vertical velocity estimate in cm/s.
    fn velocity_z(&self) -> T;

    /// Current heading estimate in degrees.
    fn heading(&self) -> T;

    /// Whether an external pressure (depth) sensor is available.
    fn depth_sensor_present(&self) -> bool;

    /// Whether the vehicle is resting on the bottom.
    fn at_bottom(&self) -> bool;

    /// Whether the rangefinder currently reports a usable reading.
    fn rangefinder_ok(&self) -> bool;

    /// Replace `climb_rate` with a surface-tracking rate derived from the
    /// rangefinder altitude error. Only called while [`Self::rangefinder_ok`]
    /// holds.
    fn surface_tracking_climb_rate(&mut self, climb_rate: T, depth_target: T, dt: T) -> T;
}

/// Pilot input channels with deadzone-applied derived helpers.
pub trait PilotInput<T: Number> {
    /// Apply any configured input-remapping transform (e.g. simple mode)
    /// before the derived helpers are read this tick.
    fn apply_transform(&mut self);

    /// Desired (roll, pitch) lean angles in degrees, limited to `angle_max`.
    fn desired_lean_angles(&self, angle_max: T) -> (T, T);

    /// Desired yaw rate in degrees/s; zero when the stick is centered.
    fn desired_yaw_rate(&self) -> T;

    /// Desired climb rate in cm/s from the throttle channel deadzone.
    fn desired_climb_rate(&self) -> T;

    /// Throttle bias used to relax the position controller before arming.
    fn prearm_throttle_bias(&self) -> T;

    /// Forward channel, normalized with deadzone applied.
    fn forward(&self) -> T;

    /// Lateral channel, normalized with deadzone applied.
    fn lateral(&self) -> T;
}

/// One-way operator messaging channel.
pub trait OperatorLink {
    /// Deliver a text notification at the given severity.
    fn notify(&mut self, severity: Severity, message: &str);
}

/// Umbrella trait for a complete vehicle: anything implementing every
/// collaborator contract qualifies automatically.
pub trait Vehicle<T: Number>:
    AttitudeControl<T> + PositionControl<T> + Motors<T> + Navigation<T> + PilotInput<T> + OperatorLink
{
}

impl<T: Number, V> Vehicle<T> for V where
    V: AttitudeControl<T>
        + PositionControl<T>
        + Motors<T>
        + Navigation<T>
        + PilotInput<T>
        + OperatorLink
{
}
