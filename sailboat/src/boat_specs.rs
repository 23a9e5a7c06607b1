use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Hull mass properties, damping and lever arms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullSpec {
    /// Displacement (kg).
    pub mass: f64,
    /// Inertia about the heel axis Gx1.
    pub jx: f64,
    /// Inertia about Gz1, used as the yaw inertia.
    pub jz: f64,
    /// Linear resistance coefficient (N·s/m).
    pub alpha_f: f64,
    /// Rotational friction coefficient, applied to both heel and heading rates.
    pub alpha_phi: f64,
    /// Distance CG -> rudder stock along x1.
    pub r_g: f64,
    /// Distance CG -> mast along x1.
    pub r_v: f64,
    /// Lateral plane (keel) area producing the anti-drift force.
    pub anti_drift_area: f64,
    /// Depth below CG at which the anti-drift force acts (along -z1).
    pub anti_drift_depth: f64,
}

impl Default for HullSpec {
    fn default() -> Self {
        Self {
            mass: 500.0,
            jx: 10_000.0,
            jz: 10_000.0,
            alpha_f: 100.0,
            alpha_phi: 6_000.0,
            r_g: 2.0,
            r_v: 1.0,
            anti_drift_area: 0.4,
            anti_drift_depth: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SailSpec {
    /// Sail angle at construction, in degrees (converted once to radians).
    pub initial_angle_deg: f64,
    pub area: f64,
    /// Height of the centre of effort above CG.
    pub centre_of_effort_height: f64,
    /// Mast -> centre of effort distance along the boom.
    pub boom_offset: f64,
}

impl Default for SailSpec {
    fn default() -> Self {
        Self {
            initial_angle_deg: 45.0,
            area: 8.0,
            centre_of_effort_height: 6.0,
            boom_offset: 1.0,
        }
    }
}

/// How the rudder law treats its `0.2 + 0.3·sin(a)` denominator near zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum RudderSingularity {
    /// Denominators smaller than `min_denominator` in magnitude are replaced by
    /// `±min_denominator` (sign kept, `+` at exactly zero).
    Saturate { min_denominator: f64 },
    /// Raw IEEE arithmetic: forces grow without bound and may become infinite.
    Propagate,
}

impl Default for RudderSingularity {
    fn default() -> Self { Self::Saturate { min_denominator: 0.05 } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RudderSpec {
    /// Initial rudder angle (radians).
    pub initial_angle: f64,
    pub area: f64,
    pub blade_length: f64,
    pub blade_height: f64,
    pub singularity: RudderSingularity,
}

impl Default for RudderSpec {
    fn default() -> Self {
        Self {
            initial_angle: 0.0,
            area: 0.2,
            blade_length: 0.4,
            blade_height: 1.0,
            singularity: RudderSingularity::default(),
        }
    }
}

/// Offsets between centre of gravity and centre of buoyancy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuoyancySpec {
    /// CG/centre-of-buoyancy offset scale along y1. The restoring lever is
    /// `max_lateral_offset·sinθ·cosθ`.
    pub max_lateral_offset: f64,
    /// CG/centre-of-buoyancy offset along z1. Zero means vertically coincident.
    pub vertical_offset: f64,
}

impl Default for BuoyancySpec {
    fn default() -> Self { Self { max_lateral_offset: 0.8, vertical_offset: 0.0 } }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialConditions {
    pub x: f64,
    pub y: f64,
    /// Heading (rad).
    pub phi: f64,
    /// Heel (rad).
    pub theta: f64,
    pub x_dot: f64,
    pub y_dot: f64,
    pub theta_dot: f64,
    pub phi_dot: f64,
}

impl Default for InitialConditions {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            phi: 0.2,
            theta: -0.25,
            x_dot: 0.0,
            y_dot: 0.0,
            theta_dot: 0.0,
            phi_dot: 0.0,
        }
    }
}

/// Complete parameter set for one boat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoatSpec {
    pub hull: HullSpec,
    pub sail: SailSpec,
    pub rudder: RudderSpec,
    pub buoyancy: BuoyancySpec,
    pub initial: InitialConditions,
}

fn finite(field: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if finite(field, value)? > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

impl BoatSpec {
    /// Checks that every physical parameter is usable before a boat is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let h = &self.hull;
        positive("hull.mass", h.mass)?;
        positive("hull.jx", h.jx)?;
        positive("hull.jz", h.jz)?;
        positive("hull.alpha_f", h.alpha_f)?;
        positive("hull.alpha_phi", h.alpha_phi)?;
        positive("hull.r_g", h.r_g)?;
        positive("hull.r_v", h.r_v)?;
        positive("hull.anti_drift_area", h.anti_drift_area)?;
        positive("hull.anti_drift_depth", h.anti_drift_depth)?;

        let s = &self.sail;
        finite("sail.initial_angle_deg", s.initial_angle_deg)?;
        positive("sail.area", s.area)?;
        positive("sail.centre_of_effort_height", s.centre_of_effort_height)?;
        positive("sail.boom_offset", s.boom_offset)?;

        let r = &self.rudder;
        finite("rudder.initial_angle", r.initial_angle)?;
        positive("rudder.area", r.area)?;
        positive("rudder.blade_length", r.blade_length)?;
        positive("rudder.blade_height", r.blade_height)?;
        if let RudderSingularity::Saturate { min_denominator } = r.singularity {
            positive("rudder.singularity.min_denominator", min_denominator)?;
        }

        // Offsets carry sign; only require them to be finite.
        finite("buoyancy.max_lateral_offset", self.buoyancy.max_lateral_offset)?;
        finite("buoyancy.vertical_offset", self.buoyancy.vertical_offset)?;

        let i = &self.initial;
        for (field, value) in [
            ("initial.x", i.x),
            ("initial.y", i.y),
            ("initial.phi", i.phi),
            ("initial.theta", i.theta),
            ("initial.x_dot", i.x_dot),
            ("initial.y_dot", i.y_dot),
            ("initial.theta_dot", i.theta_dot),
            ("initial.phi_dot", i.phi_dot),
        ] {
            finite(field, value)?;
        }
        Ok(())
    }
}

pub mod boatspecs {
    use super::*;

    /// The training dinghy every simulation starts from: 500 kg, 8 m² sail,
    /// heeled to -0.25 rad and heading 0.2 rad.
    pub fn training_dinghy_spec() -> BoatSpec {
        BoatSpec::default()
    }

    /// Heavier hull with a smaller, lower sail and a deeper keel, for stronger breezes.
    pub fn heavy_weather_spec() -> BoatSpec {
        let mut spec = training_dinghy_spec();
        spec.hull.mass = 800.0;
        spec.hull.anti_drift_area = 0.6;
        spec.hull.anti_drift_depth = 1.8;
        spec.sail.area = 6.0;
        spec.sail.centre_of_effort_height = 5.0;
        spec
    }
}
