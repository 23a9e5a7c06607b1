use serde::{Deserialize, Serialize};

use crate::math::Vec3d;

/// Anything able to report the wind at the current instant.
///
/// Speed is expressed in the same unit system as boat velocities; direction
/// is the world-frame angle (radians) the wind blows *toward*, measured from
/// world +X.
pub trait WindSource {
    fn speed(&self) -> f64;
    fn direction(&self) -> f64;

    /// True wind velocity in world components (no vertical part).
    fn velocity(&self) -> Vec3d { wind_velocity(self.speed(), self.direction()) }
}

/// World velocity of a wind of `speed` blowing toward `direction`.
pub(crate) fn wind_velocity(speed: f64, direction: f64) -> Vec3d {
    let (s, c) = direction.sin_cos();
    Vec3d::new(speed * c, speed * s, 0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstantWind {
    pub speed: f64,
    pub direction: f64,
}

impl ConstantWind {
    pub const fn new(speed: f64, direction: f64) -> Self { Self { speed, direction } }

    pub const fn calm() -> Self { Self::new(0.0, 0.0) }
}

impl Default for ConstantWind {
    fn default() -> Self { Self::new(4.0, 0.0) }
}

impl WindSource for ConstantWind {
    fn speed(&self) -> f64 { self.speed }
    fn direction(&self) -> f64 { self.direction }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn velocity_points_along_direction() {
        let w = ConstantWind::new(2.0, std::f64::consts::FRAC_PI_2);
        let v = w.velocity();
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);
        assert_eq!(v.z, 0.0);
    }
}
