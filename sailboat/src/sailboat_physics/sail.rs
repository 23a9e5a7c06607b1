use super::frames::Frame;
use super::util::{sign, RHO_AIR};
use crate::math::Vec3d;
use crate::wind::wind_velocity;
use crate::{BoatState, SailSpec};

/// Peak lift coefficient, reached 15° either side of the wind axis.
const CX_PEAK: f64 = 0.9;

/// Result of one sail evaluation. The caller stores `angle` and `force`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SailUpdate {
    /// Sail angle relative to the centreline (rad), as commanded.
    pub angle: f64,
    /// Sail normal force along y2.
    pub force: f64,
    /// Apparent wind in frame 2.
    pub apparent_wind: Vec3d,
    /// `atan2(w_y2, w_x2)`.
    pub apparent_angle: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sail {
    spec: SailSpec,
}

impl Sail {
    pub fn new(spec: SailSpec) -> Self { Self { spec } }

    pub fn spec(&self) -> &SailSpec { &self.spec }

    /// Sail angle at construction, in radians.
    pub fn initial_angle(&self) -> f64 { self.spec.initial_angle_deg.to_radians() }

    /// Piecewise-linear lift coefficient of the apparent wind angle (rad).
    /// Breakpoints 0°/15°/90°/165°/180° map to 0/0.9/0/0.9/0.
    pub fn lift_coefficient(apparent_angle: f64) -> f64 {
        let deg = apparent_angle.abs().to_degrees();
        if deg <= 15.0 {
            CX_PEAK / 15.0 * deg
        } else if deg <= 90.0 {
            CX_PEAK - CX_PEAK / 75.0 * (deg - 15.0)
        } else if deg <= 165.0 {
            CX_PEAK / 75.0 * (deg - 90.0)
        } else if deg <= 180.0 {
            CX_PEAK - CX_PEAK / 15.0 * (deg - 165.0)
        } else {
            0.0
        }
    }

    /// Apparent wind (true wind minus boat velocity) in the sail frame.
    pub fn apparent_wind(sail_frame: &Frame, true_wind: Vec3d, boat_velocity: Vec3d) -> Vec3d {
        sail_frame.project(true_wind - boat_velocity)
    }

    /// Normal force produced by a given apparent wind in frame 2.
    pub fn force_from_apparent(&self, apparent: Vec3d) -> f64 {
        let angle = apparent.y.atan2(apparent.x);
        0.5 * RHO_AIR
            * self.spec.area
            * apparent.length_squared()
            * Self::lift_coefficient(angle)
            * sign(apparent.y)
    }

    /// Sets the sail to `commanded_angle` and evaluates the sail force for the
    /// boat's current attitude and velocity.
    pub fn update(
        &self,
        commanded_angle: f64,
        wind_speed: f64,
        wind_dir: f64,
        boat: &BoatState,
    ) -> SailUpdate {
        let frame = boat.body_frame().turned(commanded_angle);
        let true_wind = wind_velocity(wind_speed, wind_dir);
        let apparent = Self::apparent_wind(&frame, true_wind, boat.velocity());
        SailUpdate {
            angle: commanded_angle,
            force: self.force_from_apparent(apparent),
            apparent_wind: apparent,
            apparent_angle: apparent.y.atan2(apparent.x),
        }
    }
}
