// src/test_utils.rs

//! This module contains utilities for testing.

use crate::vehicle::{
    AttitudeControl, Motors, Navigation, OperatorLink, PilotInput, PositionControl, Severity,
    SpoolState,
};

/// A constant defining the tolerance within which floating-point values
/// are considered close enough to be equal.
pub const TEST_TOLERANCE: f32 = 1e-5;

/// Checks if two floating point numbers are close enough to be considered
/// equal.
///
/// # Arguments
/// * `target` - The target value.
/// * `value` - The value to compare against the target.
///
/// # Returns
/// `true` if the absolute difference between `target` and `value` is less than
/// `TEST_TOLERANCE`, otherwise `false`.
pub fn value_close(target: f32, value: f32) -> bool {
    (target - value).abs() < TEST_TOLERANCE
}

/// Attitude command recorded by [`SimVehicle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttitudeCommand {
    /// Roll/pitch angles with a pilot yaw rate.
    RateYaw {
        /// Commanded roll angle.
        roll: f32,
        /// Commanded pitch angle.
        pitch: f32,
        /// Commanded yaw rate.
        yaw_rate: f32,
        /// Smoothing gain.
        smoothing: f32,
    },
    /// Roll/pitch angles with an absolute heading.
    Heading {
        /// Commanded roll angle.
        roll: f32,
        /// Commanded pitch angle.
        pitch: f32,
        /// Commanded heading.
        heading: f32,
        /// Rate-limited rotation flag.
        slew: bool,
        /// Smoothing gain.
        smoothing: f32,
    },
}

/// Simulation double implementing every vehicle collaborator contract,
/// recording the commands the controller issues.
pub struct SimVehicle {
    // Navigation estimates.
    pub altitude: f32,
    pub velocity_z: f32,
    pub heading: f32,
    pub depth_sensor: bool,
    pub at_bottom: bool,
    pub rangefinder: bool,
    pub surface_tracking_rate: f32,

    // Motor and interlock state.
    pub armed: bool,
    pub interlock: bool,
    pub spool_state: Option<SpoolState>,
    pub forward_out: f32,
    pub lateral_out: f32,

    // Pilot channel values.
    pub pilot_roll: f32,
    pub pilot_pitch: f32,
    pub pilot_yaw_rate: f32,
    pub pilot_climb_rate: f32,
    pub prearm_bias: f32,
    pub pilot_forward: f32,
    pub pilot_lateral: f32,
    pub transform_count: u32,

    // Attitude controller recording.
    pub max_lean_angle: f32,
    pub attitude_command: Option<AttitudeCommand>,
    pub throttle_unstabilized: Option<f32>,

    // Position controller recording.
    pub pos_speed_limits: (f32, f32),
    pub pos_accel_limit: f32,
    pub pos_depth_target: f32,
    pub pos_desired_velocity: f32,
    pub pos_velocity_target: f32,
    pub pos_ff_climb_rate: f32,
    pub pos_relax_count: u32,
    pub pos_relax_bias: f32,
    pub pos_update_count: u32,

    // Operator messaging recording.
    pub last_notice: Option<Severity>,
    pub notice_count: u32,
}

impl SimVehicle {
    /// An armed, interlocked vehicle at rest with a depth sensor fitted.
    pub fn new() -> Self {
        Self {
            altitude: 0.0,
            velocity_z: 0.0,
            heading: 0.0,
            depth_sensor: true,
            at_bottom: false,
            rangefinder: false,
            surface_tracking_rate: 0.0,
            armed: true,
            interlock: true,
            spool_state: None,
            forward_out: 0.0,
            lateral_out: 0.0,
            pilot_roll: 0.0,
            pilot_pitch: 0.0,
            pilot_yaw_rate: 0.0,
            pilot_climb_rate: 0.0,
            prearm_bias: 0.0,
            pilot_forward: 0.0,
            pilot_lateral: 0.0,
            transform_count: 0,
            max_lean_angle: 45.0,
            attitude_command: None,
            throttle_unstabilized: None,
            pos_speed_limits: (0.0, 0.0),
            pos_accel_limit: 0.0,
            pos_depth_target: 0.0,
            pos_desired_velocity: 0.0,
            pos_velocity_target: 0.0,
            pos_ff_climb_rate: 0.0,
            pos_relax_count: 0,
            pos_relax_bias: 0.0,
            pos_update_count: 0,
            last_notice: None,
            notice_count: 0,
        }
    }
}

impl AttitudeControl<f32> for SimVehicle {
    fn lean_angle_max(&self) -> f32 {
        self.max_lean_angle
    }

    fn input_euler_rate_yaw(&mut self, roll: f32, pitch: f32, yaw_rate: f32, smoothing: f32) {
        self.attitude_command = Some(AttitudeCommand::RateYaw {
            roll,
            pitch,
            yaw_rate,
            smoothing,
        });
    }

    fn input_euler_heading(&mut self, roll: f32, pitch: f32, heading: f32, slew: bool, smoothing: f32) {
        self.attitude_command = Some(AttitudeCommand::Heading {
            roll,
            pitch,
            heading,
            slew,
            smoothing,
        });
    }

    fn set_throttle_unstabilized(&mut self, throttle: f32) {
        self.throttle_unstabilized = Some(throttle);
    }
}

impl PositionControl<f32> for SimVehicle {
    fn set_speed_limits(&mut self, speed_down: f32, speed_up: f32) {
        self.pos_speed_limits = (speed_down, speed_up);
    }

    fn set_accel_limit(&mut self, accel: f32) {
        self.pos_accel_limit = accel;
    }

    fn depth_target(&self) -> f32 {
        self.pos_depth_target
    }

    fn set_depth_target(&mut self, target: f32) {
        self.pos_depth_target = target;
    }

    fn set_desired_velocity(&mut self, velocity: f32) {
        self.pos_desired_velocity = velocity;
    }

    fn velocity_target(&self) -> f32 {
        self.pos_velocity_target
    }

    fn input_climb_rate(&mut self, climb_rate: f32, dt: f32) {
        self.pos_ff_climb_rate = climb_rate;
        self.pos_velocity_target = climb_rate;
        self.pos_depth_target += climb_rate * dt;
    }

    fn relax(&mut self, throttle_bias: f32) {
        self.pos_relax_count += 1;
        self.pos_relax_bias = throttle_bias;
        self.pos_velocity_target = 0.0;
        self.pos_ff_climb_rate = 0.0;
    }

    fn update(&mut self, _dt: f32) {
        self.pos_update_count += 1;
    }
}

impl Motors<f32> for SimVehicle {
    fn armed(&self) -> bool {
        self.armed
    }

    fn interlock(&self) -> bool {
        self.interlock
    }

    fn set_spool_state(&mut self, state: SpoolState) {
        self.spool_state = Some(state);
    }

    fn set_forward(&mut self, thrust: f32) {
        self.forward_out = thrust;
    }

    fn set_lateral(&mut self, thrust: f32) {
        self.lateral_out = thrust;
    }
}

impl Navigation<f32> for SimVehicle {
    fn altitude(&self) -> f32 {
        self.altitude
    }

    fn velocity_z(&self) -> f32 {
        self.velocity_z
    }

    fn heading(&self) -> f32 {
        self.heading
    }

    fn depth_sensor_present(&self) -> bool {
        self.depth_sensor
    }

    fn at_bottom(&self) -> bool {
        self.at_bottom
    }

    fn rangefinder_ok(&self) -> bool {
        self.rangefinder
    }

    fn surface_tracking_climb_rate(&mut self, _climb_rate: f32, _depth_target: f32, _dt: f32) -> f32 {
        self.surface_tracking_rate
    }
}

impl PilotInput<f32> for SimVehicle {
    fn apply_transform(&mut self) {
        self.transform_count += 1;
    }

    fn desired_lean_angles(&self, angle_max: f32) -> (f32, f32) {
        (
            self.pilot_roll.clamp(-angle_max, angle_max),
            self.pilot_pitch.clamp(-angle_max, angle_max),
        )
    }

    fn desired_yaw_rate(&self) -> f32 {
        self.pilot_yaw_rate
    }

    fn desired_climb_rate(&self) -> f32 {
        self.pilot_climb_rate
    }

    fn prearm_throttle_bias(&self) -> f32 {
        self.prearm_bias
    }

    fn forward(&self) -> f32 {
        self.pilot_forward
    }

    fn lateral(&self) -> f32 {
        self.pilot_lateral
    }
}

impl OperatorLink for SimVehicle {
    fn notify(&mut self, severity: Severity, _message: &str) {
        self.last_notice = Some(severity);
        self.notice_count += 1;
    }
}
