//! Reference frames.
//!
//! - Frame 0 (world): +X east, +Y north, +Z up.
//! - Frame 1 (body): heading `phi` about world Z, then heel `theta` about X1.
//!   X1 points to the bow, Y1 to port, Z1 up the mast.
//! - Frames 2 (sail) and 3 (rudder): frame 1 turned about Z1 by the sail angle
//!   or the rudder angle.
//!
//! Axes are stored as unit vectors in world components, so projecting a world
//! vector is a dot product and recomposing a local vector is a weighted sum.

use crate::math::Vec3d;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: Vec3d,
    pub y: Vec3d,
    pub z: Vec3d,
}

impl Frame {
    pub const WORLD: Self = Self { x: Vec3d::X, y: Vec3d::Y, z: Vec3d::Z };

    /// Body frame 1 for heading `phi` and heel `theta`.
    pub fn body(phi: f64, theta: f64) -> Self {
        let (sp, cp) = phi.sin_cos();
        let (st, ct) = theta.sin_cos();
        Self {
            x: Vec3d::new(cp, sp, 0.0),
            y: Vec3d::new(-ct * sp, ct * cp, st),
            z: Vec3d::new(sp * st, -cp * st, ct),
        }
    }

    /// This frame turned by `delta` about its own Z axis.
    pub fn turned(&self, delta: f64) -> Self {
        let (s, c) = delta.sin_cos();
        Self {
            x: self.x * c + self.y * s,
            y: self.y * c - self.x * s,
            z: self.z,
        }
    }

    /// Components of a world vector in this frame.
    pub fn project(&self, world: Vec3d) -> Vec3d {
        Vec3d::new(world.dot(self.x), world.dot(self.y), world.dot(self.z))
    }

    /// World vector from components expressed in this frame.
    pub fn to_world(&self, local: Vec3d) -> Vec3d {
        self.x * local.x + self.y * local.y + self.z * local.z
    }
}

/// Re-express a vector given in a frame turned by `delta` about Z1 in frame 1.
pub fn turned_to_body(local: Vec3d, delta: f64) -> Vec3d {
    let (s, c) = delta.sin_cos();
    Vec3d::new(local.x * c - local.y * s, local.x * s + local.y * c, local.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3d, b: Vec3d) {
        assert!((a - b).length() < 1e-12, "{a:?} != {b:?}");
    }

    #[test]
    fn body_frame_is_orthonormal_and_right_handed() {
        for &(phi, theta) in &[(0.0, 0.0), (0.2, -0.25), (-2.4, 0.9), (3.0, 1.2)] {
            let f = Frame::body(phi, theta);
            assert!((f.x.length() - 1.0).abs() < 1e-12);
            assert!((f.y.length() - 1.0).abs() < 1e-12);
            assert!((f.z.length() - 1.0).abs() < 1e-12);
            assert!(f.x.dot(f.y).abs() < 1e-12);
            assert!(f.y.dot(f.z).abs() < 1e-12);
            assert_close(f.x.cross(f.y), f.z);
        }
    }

    #[test]
    fn level_boat_pointing_east_matches_world() {
        assert_eq!(Frame::body(0.0, 0.0), Frame::WORLD);
    }

    #[test]
    fn heel_keeps_bow_axis_horizontal() {
        let f = Frame::body(0.7, -0.4);
        assert_eq!(f.x.z, 0.0);
        assert!((f.y.z - (-0.4_f64).sin()).abs() < 1e-15);
    }

    #[test]
    fn project_and_recompose_are_inverse() {
        let f = Frame::body(0.2, -0.25).turned(0.3);
        let v = Vec3d::new(1.5, -2.0, 0.25);
        assert_close(f.to_world(f.project(v)), v);
    }

    #[test]
    fn turned_frame_matches_turned_to_body() {
        let body = Frame::body(1.1, 0.3);
        let sail = body.turned(0.45);
        let local = Vec3d::new(0.3, -1.2, 2.0);
        let via_world = body.project(sail.to_world(local));
        assert_close(via_world, turned_to_body(local, 0.45));
    }
}
