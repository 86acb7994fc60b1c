// src/controller/depth_hold.rs

//! # Depth-Hold Controller
//!
//! The top-level vertical-motion controller, invoked once per control-loop
//! tick (100 Hz or more) while a depth-hold capable mode is active. Each
//! tick it refreshes the position controller's limits, handles the
//! disarmed/interlocked safe state, derives attitude and climb-rate targets
//! from pilot input, runs the heading-hold and depth-constraint policies,
//! and forwards translational pilot input to the motors.
//!
//! A missing depth sensor is the only unrecoverable failure and is checked
//! once at mode entry; every per-tick numeric edge case is handled as a
//! no-op, and a bad tick self-corrects on the next one.

use core::fmt;

use crate::policy::{
    apply_depth_constraints, DepthInputs, DepthLimits, HeadingHold, HeadingHoldConfig,
    TakeoffConfig, TakeoffRamp, YawCommand,
};
use crate::vehicle::{Number, Severity, SpoolState, Vehicle};

/// Mode-entry failure reported by [`DepthHoldController::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitError {
    /// No external pressure sensor is available to measure depth.
    DepthSensorMissing,
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::DepthSensorMissing => {
                write!(f, "depth hold requires an external pressure sensor")
            }
        }
    }
}

/// Configuration for the depth-hold controller and its policies.
///
/// Example Usage
/// ```
/// use depth_hold_control::DepthHoldConfig;
///
/// let mut config = DepthHoldConfig::<f32>::new();
///
/// // Pilot vertical speed limit (cm/s) and vertical acceleration (cm/s²).
/// config.pilot_speed_max = 500.0;
/// config.pilot_accel = 100.0;
///
/// // Attitude-controller input smoothing gain.
/// config.smoothing_gain = 4.0;
///
/// // Takeoff profile: 50 cm/s² acceleration from a 50 cm/s floor.
/// config.takeoff.accel = 50.0;
/// config.takeoff.min_speed = 50.0;
///
/// // Hold heading 250 ms after the pilot releases the yaw stick.
/// config.heading.decel_window = 0.25;
///
/// // Depth bounds: clamp 10 cm below the surface, rest 10 cm off the
/// // bottom.
/// config.limits.surface_depth = -10.0;
/// config.limits.bottom_clearance = 10.0;
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthHoldConfig<T: Number> {
    /// Maximum pilot vertical speed in cm/s, applied symmetrically.
    pub pilot_speed_max: T,
    /// Maximum vertical acceleration in cm/s².
    pub pilot_accel: T,
    /// Smoothing gain passed with every attitude-controller input.
    pub smoothing_gain: T,
    /// Takeoff velocity-profile settings.
    pub takeoff: TakeoffConfig<T>,
    /// Heading-hold debounce settings.
    pub heading: HeadingHoldConfig<T>,
    /// Depth bounds.
    pub limits: DepthLimits<T>,
}

impl<T: Number> DepthHoldConfig<T> {
    /// Creates a new configuration with neutral values. These should be
    /// replaced with values tuned for the vehicle.
    pub fn new() -> Self {
        Self {
            pilot_speed_max: T::one(),
            pilot_accel: T::one(),
            smoothing_gain: T::one(),
            takeoff: TakeoffConfig::new(),
            heading: HeadingHoldConfig::new(),
            limits: DepthLimits::new(),
        }
    }
}

impl<T: Number> Default for DepthHoldConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-tick vertical-motion controller for depth-hold flight.
///
/// Owns the heading-hold and takeoff-ramp state for the lifetime of the
/// active mode; both reset at mode entry and while the vehicle is not under
/// active control.
pub struct DepthHoldController<T: Number> {
    config: DepthHoldConfig<T>,
    heading: HeadingHold<T>,
    takeoff: TakeoffRamp<T>,
}

impl<T: Number> DepthHoldController<T> {
    /// Creates a controller using the provided configuration.
    pub fn with_config(config: DepthHoldConfig<T>) -> Self {
        Self {
            heading: HeadingHold::with_config(config.heading),
            takeoff: TakeoffRamp::with_config(config.takeoff),
            config,
        }
    }

    /// Creates a controller with default settings.
    pub fn new() -> Self {
        Self::with_config(DepthHoldConfig::new())
    }

    /// Initializes the mode.
    ///
    /// Verifies the depth-sensor precondition, seeds the position
    /// controller's limits and targets from the current inertial estimate,
    /// stops any running takeoff, and latches the current heading. On
    /// failure the operator is notified and the controller must not be
    /// ticked.
    pub fn init<V: Vehicle<T>>(&mut self, vehicle: &mut V, now: T) -> Result<(), InitError> {
        if !vehicle.depth_sensor_present() {
            vehicle.notify(
                Severity::Warning,
                "depth hold requires an external pressure sensor",
            );
            return Err(InitError::DepthSensorMissing);
        }

        vehicle.set_speed_limits(-self.config.pilot_speed_max, self.config.pilot_speed_max);
        vehicle.set_accel_limit(self.config.pilot_accel);

        let altitude = vehicle.altitude();
        vehicle.set_depth_target(altitude);
        let velocity = vehicle.velocity_z();
        vehicle.set_desired_velocity(velocity);

        self.takeoff.stop();
        let heading = vehicle.heading();
        self.heading.reset(heading, now);

        Ok(())
    }

    /// Begins a takeoff ramp covering `alt_delta` cm at up to `max_speed`
    /// cm/s. Best-effort: ignored while a ramp is already running or when
    /// either parameter is non-positive.
    pub fn start_takeoff(&mut self, now: T, alt_delta: T, max_speed: T) {
        self.takeoff.start(now, alt_delta, max_speed);
    }

    /// Stops any running takeoff ramp.
    pub fn stop_takeoff(&mut self) {
        self.takeoff.stop();
    }

    /// Whether a takeoff ramp is in progress.
    pub fn takeoff_running(&self) -> bool {
        self.takeoff.is_running()
    }

    /// Runs one control tick. `now` is the monotonic time in seconds and
    /// `dt` the time since the previous tick.
    pub fn tick<V: Vehicle<T>>(&mut self, vehicle: &mut V, now: T, dt: T) {
        // Limits are refreshed unconditionally so configuration changes
        // take effect on the next tick.
        vehicle.set_speed_limits(-self.config.pilot_speed_max, self.config.pilot_speed_max);
        vehicle.set_accel_limit(self.config.pilot_accel);

        if !vehicle.armed() || !vehicle.interlock() {
            // Safe state: no stabilization, no depth-target motion, heading
            // latch kept fresh so nothing snaps when control resumes.
            vehicle.set_spool_state(SpoolState::SpinWhenArmed);
            vehicle.set_throttle_unstabilized(T::zero());
            let bias = vehicle.prearm_throttle_bias();
            vehicle.relax(bias);
            let heading = vehicle.heading();
            self.heading.reset(heading, now);
            self.takeoff.stop();
            return;
        }

        vehicle.set_spool_state(SpoolState::ThrottleUnlimited);
        vehicle.apply_transform();

        let angle_max = vehicle.lean_angle_max();
        let (roll, pitch) = vehicle.desired_lean_angles(angle_max);
        let yaw_rate = vehicle.desired_yaw_rate();
        let pilot_climb_rate = vehicle
            .desired_climb_rate()
            .clamp(-self.config.pilot_speed_max, self.config.pilot_speed_max);

        let heading_now = vehicle.heading();
        match self.heading.update(now, heading_now, yaw_rate) {
            YawCommand::Rate(rate) => {
                vehicle.input_euler_rate_yaw(roll, pitch, rate, self.config.smoothing_gain)
            }
            YawCommand::Heading(heading) => vehicle.input_euler_heading(
                roll,
                pitch,
                heading,
                true,
                self.config.smoothing_gain,
            ),
        }

        let blend = self.takeoff.climb_rates(pilot_climb_rate, now);
        let mut climb_rate = blend.net();

        if vehicle.rangefinder_ok() {
            let depth_target = vehicle.depth_target();
            climb_rate = vehicle.surface_tracking_climb_rate(climb_rate, depth_target, dt);
        }

        let inputs = DepthInputs {
            altitude: vehicle.altitude(),
            climb_rate,
            at_bottom: vehicle.at_bottom(),
        };
        apply_depth_constraints(vehicle, &self.config.limits, inputs, dt);
        vehicle.update(dt);

        // Translational pilot input passes straight through to the motors.
        let forward = vehicle.forward();
        vehicle.set_forward(forward);
        let lateral = vehicle.lateral();
        vehicle.set_lateral(lateral);
    }
}

impl<T: Number> Default for DepthHoldController<T> {
    fn default() -> Self {
        Self::new()
    }
}
