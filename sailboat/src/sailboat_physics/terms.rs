use super::frames::turned_to_body;
use crate::math::Vec3d;
use crate::{BuoyancySpec, HullSpec, RudderSpec, SailSpec};

// ----- Moments about G, each in the frame where its force is naturally expressed -----

/// Sail force acts at height `hV` above G, `rV·cosδ - l` forward of G along x2.
pub(super) fn moment_sail_frame2(sail: &SailSpec, hull: &HullSpec, f_sail: f64, sail_angle: f64) -> Vec3d {
    Vec3d::new(
        -sail.centre_of_effort_height * f_sail,
        0.0,
        f_sail * (hull.r_v * sail_angle.cos() - sail.boom_offset),
    )
}

/// Keel lift acts `ladz1` below G.
pub(super) fn moment_anti_drift_frame1(hull: &HullSpec, f_anti_drift: f64) -> Vec3d {
    Vec3d::new(hull.anti_drift_depth * f_anti_drift, 0.0, 0.0)
}

/// Rudder force acts half a blade below G and `rG` plus half a blade aft.
pub(super) fn moment_deviation_frame3(rudder: &RudderSpec, hull: &HullSpec, f_deviation: f64) -> Vec3d {
    Vec3d::new(
        0.5 * rudder.blade_height * f_deviation,
        0.0,
        -f_deviation * (hull.r_g + 0.5 * rudder.blade_length),
    )
}

/// Righting moment of the buoyancy force about x1.
pub(super) fn moment_buoyancy_frame1(buoyancy: &BuoyancySpec, theta: f64, f_buoyancy: f64) -> Vec3d {
    let (st, ct) = theta.sin_cos();
    let mx = -buoyancy.max_lateral_offset * st * ct * f_buoyancy
        - buoyancy.vertical_offset * f_buoyancy * st;
    Vec3d::new(mx, 0.0, 0.0)
}

/// Linear friction couples: heel rate about x1, heading rate about world z
/// (which reads `(0, sinθ, cosθ)` in frame 1).
pub(super) fn moment_friction_frame1(hull: &HullSpec, theta: f64, theta_dot: f64, phi_dot: f64) -> Vec3d {
    let heel = -hull.alpha_phi * theta_dot;
    let yaw = -hull.alpha_phi * phi_dot;
    let (st, ct) = theta.sin_cos();
    Vec3d::new(heel, yaw * st, yaw * ct)
}

/// Every moment about G, re-expressed in frame 1.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyMoments {
    pub sail: Vec3d,
    pub anti_drift: Vec3d,
    pub deviation: Vec3d,
    pub buoyancy: Vec3d,
    pub friction: Vec3d,
}

impl BodyMoments {
    pub fn total(&self) -> Vec3d {
        self.sail + self.anti_drift + self.deviation + self.buoyancy + self.friction
    }
}

/// Scalar forces and angles the moment assembly needs.
#[derive(Debug, Clone, Copy)]
pub(super) struct MomentInputs {
    pub f_sail: f64,
    pub sail_angle: f64,
    pub f_anti_drift: f64,
    pub f_deviation: f64,
    pub rudder_angle: f64,
    pub f_buoyancy: f64,
    pub theta: f64,
    pub theta_dot: f64,
    pub phi_dot: f64,
}

pub(super) fn assemble_body_moments(
    hull: &HullSpec,
    sail: &SailSpec,
    rudder: &RudderSpec,
    buoyancy: &BuoyancySpec,
    m: &MomentInputs,
) -> BodyMoments {
    BodyMoments {
        sail: turned_to_body(moment_sail_frame2(sail, hull, m.f_sail, m.sail_angle), m.sail_angle),
        anti_drift: moment_anti_drift_frame1(hull, m.f_anti_drift),
        deviation: turned_to_body(moment_deviation_frame3(rudder, hull, m.f_deviation), m.rudder_angle),
        buoyancy: moment_buoyancy_frame1(buoyancy, m.theta, m.f_buoyancy),
        friction: moment_friction_frame1(hull, m.theta, m.theta_dot, m.phi_dot),
    }
}
