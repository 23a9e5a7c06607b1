use super::util::{sign, GRAVITY, RHO_WATER};
use crate::HullSpec;

/// Hull force laws and the pitch-axis inertia solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    spec: HullSpec,
}

impl Hull {
    pub fn new(spec: HullSpec) -> Self { Self { spec } }

    pub fn spec(&self) -> &HullSpec { &self.spec }

    pub fn mass(&self) -> f64 { self.spec.mass }

    /// Lateral lift of the keel along y1, quadratic in water speed.
    /// `(vx1, vy1)` is the water velocity seen by the hull. Zero when `vy1 == 0`.
    pub fn anti_drift_force(&self, vx1: f64, vy1: f64) -> f64 {
        let v2 = vx1 * vx1 + vy1 * vy1;
        0.5 * RHO_WATER * self.spec.anti_drift_area * v2 * sign(vy1)
    }

    pub fn resistance_force(&self, v: f64) -> f64 {
        -self.spec.alpha_f * v
    }

    /// Weight along world z (negative, downward).
    pub fn weight(&self) -> f64 {
        -self.spec.mass * GRAVITY
    }

    /// Inertia about Gy1 that closes the angular-momentum balance this step.
    ///
    /// `moment_y1` and `moment_z1` are the summed sail, rudder and friction
    /// moments along y1 and z1. Returns 0 when there is no usable real root.
    pub fn solve_pitch_inertia(
        &self,
        theta: f64,
        theta_dot: f64,
        phi_dot: f64,
        moment_y1: f64,
        moment_z1: f64,
    ) -> f64 {
        let jx = self.spec.jx;
        let jz = self.spec.jz;
        let (st, ct) = theta.sin_cos();
        let rates = phi_dot * theta_dot;

        let a = rates * st * st / (jz * ct);
        let b = -rates * ct - (st / (jz * ct)) * (moment_z1 + rates * st * (jx + jz));
        let c = moment_y1 - rates * ct * (jx - jz);
        pick_inertia_root(a, b, c)
    }
}

/// Root selection for `a·J² + b·J + c = 0`.
///
/// - `a == 0` or non-finite coefficients: 0.
/// - two roots: `(-b - √Δ)/2a` if positive, else `(-b + √Δ)/2a` if positive,
///   else the larger one.
/// - double root: `-b/2a`.
/// - no real root: 0.
pub fn pick_inertia_root(a: f64, b: f64, c: f64) -> f64 {
    if a == 0.0 || !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return 0.0;
    }
    let delta = b * b - 4.0 * a * c;
    if delta > 0.0 {
        let sq = delta.sqrt();
        let first = (-b - sq) / (2.0 * a);
        let second = (-b + sq) / (2.0 * a);
        if first > 0.0 {
            first
        } else if second > 0.0 {
            second
        } else {
            first.max(second)
        }
    } else if delta == 0.0 {
        -b / (2.0 * a)
    } else {
        0.0
    }
}
