use super::dynamics::{step_sailboat_dbg, BoatModels};
use super::hull::Hull;
use super::rudder::Rudder;
use super::sail::Sail;
use super::types::{BoatInputs, BoatState, StepDebug};
use crate::error::ConfigError;
use crate::{BoatSpec, WindSource};

/// One boat: its force models and its state. Independent boats share nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Sailboat {
    pub models: BoatModels,
    pub state: BoatState,
}

impl Sailboat {
    /// The default training dinghy, at its fixed initial heel and heading.
    pub fn new() -> Self {
        Self::build(BoatSpec::default())
    }

    pub fn from_spec(spec: BoatSpec) -> Result<Self, ConfigError> {
        spec.validate()?;
        Ok(Self::build(spec))
    }

    fn build(spec: BoatSpec) -> Self {
        let BoatSpec { hull, sail, rudder, buoyancy, initial } = spec;
        let sail = Sail::new(sail);
        let rudder = Rudder::new(rudder);
        let state = BoatState::from_initial(&initial, sail.initial_angle(), rudder.spec().initial_angle);
        Self {
            models: BoatModels { hull: Hull::new(hull), sail, rudder, buoyancy },
            state,
        }
    }

    /// Advance by `dt` seconds with the rudder at `rudder_angle` and the sail
    /// set to `sail_angle_limit` (both radians).
    pub fn advance<W: WindSource + ?Sized>(
        &mut self,
        dt: f64,
        rudder_angle: f64,
        sail_angle_limit: f64,
        wind: &W,
    ) {
        self.advance_dbg(dt, rudder_angle, sail_angle_limit, wind, None);
    }

    pub fn advance_dbg<W: WindSource + ?Sized>(
        &mut self,
        dt: f64,
        rudder_angle: f64,
        sail_angle_limit: f64,
        wind: &W,
        dbg: Option<&mut StepDebug>,
    ) {
        let inputs = BoatInputs { rudder: rudder_angle, sail_angle_limit };
        step_sailboat_dbg(&self.models, wind, inputs, &mut self.state, dt, dbg);
    }

    pub fn state(&self) -> &BoatState { &self.state }

    pub fn x(&self) -> f64 { self.state.x }
    pub fn y(&self) -> f64 { self.state.y }
    pub fn heading(&self) -> f64 { self.state.phi }
    pub fn heel(&self) -> f64 { self.state.theta }
    pub fn sail_angle(&self) -> f64 { self.state.sail_angle }
    pub fn rudder_angle(&self) -> f64 { self.state.rudder_angle }
    pub fn sail_force(&self) -> f64 { self.state.sail_force }
}

impl Default for Sailboat {
    fn default() -> Self { Self::new() }
}
