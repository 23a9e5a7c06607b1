use crate::{RudderSingularity, RudderSpec};

#[derive(Debug, Clone, PartialEq)]
pub struct Rudder {
    spec: RudderSpec,
}

impl Rudder {
    pub fn new(spec: RudderSpec) -> Self { Self { spec } }

    pub fn spec(&self) -> &RudderSpec { &self.spec }

    /// Angle of attack of the water on the blade: `(vx1, vy1)` rotated into
    /// the rudder frame 3, then `atan2(vy3, vx3)`.
    pub fn angle_of_attack(vx1: f64, vy1: f64, rudder_angle: f64) -> f64 {
        let (s, c) = rudder_angle.sin_cos();
        let vx3 = vx1 * c + vy1 * s;
        let vy3 = vy1 * c - vx1 * s;
        vy3.atan2(vx3)
    }

    /// Deviation (side) force along y3 for a rudder held at `rudder_angle`.
    /// `(vx1, vy1)` is the water velocity seen by the blade in frame 1.
    pub fn deviation_force(&self, vx1: f64, vy1: f64, rudder_angle: f64) -> f64 {
        let v2 = vx1 * vx1 + vy1 * vy1;
        let sin_a = Self::angle_of_attack(vx1, vy1, rudder_angle).sin();
        let den = self.denominator(sin_a);
        self.spec.area * v2 * sin_a * 0.9 / den
    }

    fn denominator(&self, sin_a: f64) -> f64 {
        let raw = 0.2 + 0.3 * sin_a;
        match self.spec.singularity {
            RudderSingularity::Propagate => raw,
            RudderSingularity::Saturate { min_denominator } => {
                let den = saturate(raw, min_denominator);
                if den != raw {
                    tracing::debug!(raw, min_denominator, "Saturated rudder force denominator");
                }
                den
            }
        }
    }
}

/// `raw` if `|raw| >= floor`, otherwise `±floor` with the sign of `raw`
/// (`+floor` for both signed zeros).
fn saturate(raw: f64, floor: f64) -> f64 {
    if raw.abs() >= floor {
        raw
    } else if raw < 0.0 {
        -floor
    } else {
        floor
    }
}
