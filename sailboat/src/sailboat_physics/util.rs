/// Water density in the model's unit system (not SI).
pub const RHO_WATER: f64 = 1.100;
/// Air density.
pub const RHO_AIR: f64 = 1.293;
pub const GRAVITY: f64 = 9.81;

/// Smallest `|cos θ|` used as a divisor; keeps a boat on its beam ends finite.
pub(super) const MIN_HEEL_COS: f64 = 1e-9;

/// Sign with `sign(±0) = 0`. `f64::signum` returns ±1 for signed zeros, which
/// would give a lateral force at zero lateral speed.
#[inline]
pub fn sign(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// `cos θ` pushed away from zero, keeping its sign.
#[inline]
pub(super) fn guarded_cos(theta: f64) -> f64 {
    let c = theta.cos();
    if c.abs() < MIN_HEEL_COS {
        if c < 0.0 { -MIN_HEEL_COS } else { MIN_HEEL_COS }
    } else {
        c
    }
}
