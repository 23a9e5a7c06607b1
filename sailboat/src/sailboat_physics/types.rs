use serde::{Deserialize, Serialize};

use super::frames::Frame;
use crate::math::Vec3d;
use crate::InitialConditions;

/// Kinematic state of the boat plus the control values of the last step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoatState {
    /// World position along X0.
    pub x: f64,
    /// World position along Y0.
    pub y: f64,
    /// Heading: rotation about world Z0 (rad).
    pub phi: f64,
    /// Heel: rotation about X1 (rad).
    pub theta: f64,
    pub x_dot: f64,
    pub y_dot: f64,
    pub theta_dot: f64,
    pub phi_dot: f64,
    /// Sail angle relative to the centreline (rad), overwritten every step.
    pub sail_angle: f64,
    /// Rudder angle (rad), overwritten every step.
    pub rudder_angle: f64,
    /// Last sail normal force, kept for presentation (sail curvature etc.).
    pub sail_force: f64,
    /// Last commanded sail angle limit.
    pub sail_angle_limit: f64,
}

impl BoatState {
    pub fn from_initial(initial: &InitialConditions, sail_angle: f64, rudder_angle: f64) -> Self {
        Self {
            x: initial.x,
            y: initial.y,
            phi: initial.phi,
            theta: initial.theta,
            x_dot: initial.x_dot,
            y_dot: initial.y_dot,
            theta_dot: initial.theta_dot,
            phi_dot: initial.phi_dot,
            sail_angle,
            rudder_angle,
            sail_force: 0.0,
            sail_angle_limit: 0.0,
        }
    }

    /// World-frame velocity (the model has no heave, so z is always 0).
    pub fn velocity(&self) -> Vec3d { Vec3d::new(self.x_dot, self.y_dot, 0.0) }

    pub fn body_frame(&self) -> Frame { Frame::body(self.phi, self.theta) }

    /// Velocity components `(vx1, vy1)` along the body axes.
    pub fn body_velocity(&self) -> (f64, f64) {
        let f = self.body_frame();
        let v = self.velocity();
        (v.dot(f.x), v.dot(f.y))
    }

    pub fn speed(&self) -> f64 { self.x_dot.hypot(self.y_dot) }

    pub fn is_finite(&self) -> bool {
        [
            self.x,
            self.y,
            self.phi,
            self.theta,
            self.x_dot,
            self.y_dot,
            self.theta_dot,
            self.phi_dot,
            self.sail_angle,
            self.rudder_angle,
            self.sail_force,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

impl Default for BoatState {
    fn default() -> Self {
        Self::from_initial(&InitialConditions::default(), 45f64.to_radians(), 0.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoatInputs {
    /// Rudder angle (rad).
    pub rudder: f64,
    /// Commanded sail angle (rad). The sail is set to this value directly.
    pub sail_angle_limit: f64,
}

/// Second derivatives produced by one evaluation of the equations of motion.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accelerations {
    pub x: f64,
    pub y: f64,
    pub theta: f64,
    pub phi: f64,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StepDebug {
    pub dt: f64,
    pub inputs: BoatInputs,
    pub wind_speed: f64,
    pub wind_dir: f64,
    // Body-frame velocity
    pub vx1: f64,
    pub vy1: f64,
    // Apparent wind (frame 2)
    pub apparent_wind: Vec3d,
    pub apparent_angle: f64,
    // Forces in their natural frames
    pub f_sail_y2: f64,
    pub f_anti_drift_y1: f64,
    pub f_deviation_y3: f64,
    pub f_resistance_x1: f64,
    pub f_resistance_y1: f64,
    pub weight: f64,
    pub buoyancy: f64,
    // Forces in world frame
    pub f_sail_world: Vec3d,
    pub f_anti_drift_world: Vec3d,
    pub f_deviation_world: Vec3d,
    pub f_resistance_world: Vec3d,
    // Moments about G in frame 1
    pub m_sail: Vec3d,
    pub m_anti_drift: Vec3d,
    pub m_deviation: Vec3d,
    pub m_buoyancy: Vec3d,
    pub m_friction: Vec3d,
    pub m_total: Vec3d,
    pub jy: f64,
    pub acc: Accelerations,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_velocity_of_boat_moving_along_its_bow() {
        let state = BoatState { phi: 0.6, theta: -0.3, x_dot: 0.6f64.cos() * 2.0, y_dot: 0.6f64.sin() * 2.0, ..BoatState::default() };
        let (vx1, vy1) = state.body_velocity();
        assert!((vx1 - 2.0).abs() < 1e-12);
        assert!(vy1.abs() < 1e-12);
    }

    #[test]
    fn default_state_matches_initial_conditions() {
        let s = BoatState::default();
        assert_eq!((s.phi, s.theta), (0.2, -0.25));
        assert_eq!((s.x, s.y, s.x_dot, s.y_dot, s.theta_dot, s.phi_dot), (0.0, 0.0, 0.0, 0.0, 0.0, 0.0));
        assert!((s.sail_angle - std::f64::consts::FRAC_PI_4).abs() < 1e-15);
    }
}
