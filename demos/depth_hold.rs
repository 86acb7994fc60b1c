// demos/depth_hold.rs

use depth_hold_control::vehicle::{
    AttitudeControl, Motors, Navigation, OperatorLink, PilotInput, PositionControl, Severity,
    SpoolState,
};
use depth_hold_control::{DepthHoldConfig, DepthHoldController};

/// Toy vehicle: a point mass on the depth axis that follows its velocity
/// target with a little lag, plus pass-through recording for everything else.
struct DemoVehicle {
    altitude: f32,
    velocity: f32,
    heading: f32,
    armed: bool,
    at_bottom: bool,
    pilot_yaw_rate: f32,
    pilot_climb_rate: f32,
    depth_target: f32,
    velocity_target: f32,
    last_attitude: &'static str,
}

impl DemoVehicle {
    fn new() -> Self {
        Self {
            altitude: -500.0,
            velocity: 0.0,
            heading: 90.0,
            armed: false,
            at_bottom: false,
            pilot_yaw_rate: 0.0,
            pilot_climb_rate: 0.0,
            depth_target: -500.0,
            velocity_target: 0.0,
            last_attitude: "none",
        }
    }

    /// Crude plant model: chase the velocity target, integrate altitude.
    fn step_physics(&mut self, dt: f32) {
        self.velocity += (self.velocity_target - self.velocity) * 0.5;
        self.altitude += self.velocity * dt;
    }
}

impl AttitudeControl<f32> for DemoVehicle {
    fn lean_angle_max(&self) -> f32 {
        45.0
    }

    fn input_euler_rate_yaw(&mut self, _roll: f32, _pitch: f32, yaw_rate: f32, _smoothing: f32) {
        self.heading += yaw_rate * 0.01;
        self.last_attitude = "rate yaw";
    }

    fn input_euler_heading(&mut self, _roll: f32, _pitch: f32, heading: f32, _slew: bool, _smoothing: f32) {
        self.heading += (heading - self.heading) * 0.2;
        self.last_attitude = "hold heading";
    }

    fn set_throttle_unstabilized(&mut self, _throttle: f32) {
        self.last_attitude = "unstabilized";
    }
}

impl PositionControl<f32> for DemoVehicle {
    fn set_speed_limits(&mut self, _speed_down: f32, _speed_up: f32) {}

    fn set_accel_limit(&mut self, _accel: f32) {}

    fn depth_target(&self) -> f32 {
        self.depth_target
    }

    fn set_depth_target(&mut self, target: f32) {
        self.depth_target = target;
        self.velocity_target = (target - self.altitude).clamp(-100.0, 100.0);
    }

    fn set_desired_velocity(&mut self, velocity: f32) {
        self.velocity_target = velocity;
    }

    fn velocity_target(&self) -> f32 {
        self.velocity_target
    }

    fn input_climb_rate(&mut self, climb_rate: f32, dt: f32) {
        self.depth_target += climb_rate * dt;
        self.velocity_target = climb_rate;
    }

    fn relax(&mut self, _throttle_bias: f32) {
        self.depth_target = self.altitude;
        self.velocity_target = 0.0;
    }

    fn update(&mut self, _dt: f32) {}
}

impl Motors<f32> for DemoVehicle {
    fn armed(&self) -> bool {
        self.armed
    }

    fn interlock(&self) -> bool {
        true
    }

    fn set_spool_state(&mut self, _state: SpoolState) {}

    fn set_forward(&mut self, _thrust: f32) {}

    fn set_lateral(&mut self, _thrust: f32) {}
}

impl Navigation<f32> for DemoVehicle {
    fn altitude(&self) -> f32 {
        self.altitude
    }

    fn velocity_z(&self) -> f32 {
        self.velocity
    }

    fn heading(&self) -> f32 {
        self.heading
    }

    fn depth_sensor_present(&self) -> bool {
        true
    }

    fn at_bottom(&self) -> bool {
        self.at_bottom
    }

    fn rangefinder_ok(&self) -> bool {
        false
    }

    fn surface_tracking_climb_rate(&mut self, climb_rate: f32, _depth_target: f32, _dt: f32) -> f32 {
        climb_rate
    }
}

impl PilotInput<f32> for DemoVehicle {
    fn apply_transform(&mut self) {}

    fn desired_lean_angles(&self, _angle_max: f32) -> (f32, f32) {
        (0.0, 0.0)
    }

    fn desired_yaw_rate(&self) -> f32 {
        self.pilot_yaw_rate
    }

    fn desired_climb_rate(&self) -> f32 {
        self.pilot_climb_rate
    }

    fn prearm_throttle_bias(&self) -> f32 {
        0.0
    }

    fn forward(&self) -> f32 {
        0.0
    }

    fn lateral(&self) -> f32 {
        0.0
    }
}

impl OperatorLink for DemoVehicle {
    fn notify(&mut self, severity: Severity, message: &str) {
        println!("[{:?}] {}", severity, message);
    }
}

fn main() {
    let mut config = DepthHoldConfig::<f32>::new();

    // Pilot vertical speed limit (cm/s) and vertical acceleration (cm/s²).
    config.pilot_speed_max = 500.0;
    config.pilot_accel = 100.0;

    // Attitude-controller input smoothing gain.
    config.smoothing_gain = 4.0;

    // Takeoff profile: 50 cm/s² acceleration from a 50 cm/s floor.
    config.takeoff.accel = 50.0;
    config.takeoff.min_speed = 50.0;

    // Hold heading 250 ms after the pilot releases the yaw stick.
    config.heading.decel_window = 0.25;

    // Depth bounds: clamp 10 cm below the surface, rest 10 cm off the bottom.
    config.limits.surface_depth = -10.0;
    config.limits.bottom_clearance = 10.0;

    let mut controller = DepthHoldController::with_config(config);
    let mut vehicle = DemoVehicle::new();
    let dt = 0.01;

    vehicle.armed = true;
    controller
        .init(&mut vehicle, 0.0)
        .expect("demo vehicle carries a depth sensor");

    // Climb 200 cm under a takeoff ramp, yawing for the first second.
    controller.start_takeoff(0.0, 200.0, 150.0);
    for step in 0..600 {
        let now = step as f32 * dt;
        vehicle.pilot_yaw_rate = if now < 1.0 { 20.0 } else { 0.0 };
        controller.tick(&mut vehicle, now, dt);
        vehicle.step_physics(dt);

        if step % 100 == 0 {
            println!(
                "t={:4.1}s alt={:7.1}cm vz={:6.1}cm/s heading={:5.1}° attitude={} takeoff={}",
                now,
                vehicle.altitude,
                vehicle.velocity,
                vehicle.heading,
                vehicle.last_attitude,
                controller.takeoff_running(),
            );
        }
    }

    // Settle onto the bottom and show the contact override through the
    // regular tick path.
    vehicle.at_bottom = true;
    vehicle.altitude = -950.0;
    vehicle.pilot_climb_rate = -100.0;
    controller.tick(&mut vehicle, 6.0, dt);
    println!(
        "bottom contact: depth target pinned to {:.1}cm",
        vehicle.depth_target
    );
}
