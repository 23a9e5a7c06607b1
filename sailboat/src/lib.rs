//! Planar-plus-roll sailboat dynamics.
//!
//! The crate holds no I/O: parameter specs, the hull/sail/rudder force laws
//! and the per-tick `advance` step. Callers own the render loop and supply the
//! wind through [`WindSource`].

mod math;
pub use math::Vec3d;

mod error;
pub use error::ConfigError;

mod boat_specs;
pub use boat_specs::{
    BoatSpec, BuoyancySpec, HullSpec, InitialConditions, RudderSingularity, RudderSpec, SailSpec,
};
pub use boat_specs::boatspecs;

mod wind;
pub use wind::{ConstantWind, WindSource};

pub mod sailboat_physics;
pub use sailboat_physics::{
    step_sailboat, step_sailboat_dbg, BoatInputs, BoatState, Sailboat, StepDebug,
};
