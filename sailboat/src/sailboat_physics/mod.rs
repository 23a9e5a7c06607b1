mod util;
mod frames;
mod hull;
mod sail;
mod rudder;
mod types;
mod terms;
mod dynamics;
mod boat;

pub use util::{sign, GRAVITY, RHO_AIR, RHO_WATER};
pub use frames::{turned_to_body, Frame};
pub use hull::{pick_inertia_root, Hull};
pub use sail::{Sail, SailUpdate};
pub use rudder::Rudder;
pub use types::{Accelerations, BoatInputs, BoatState, StepDebug};
pub use terms::BodyMoments;
pub use dynamics::{
    angular_acceleration, body_forces, integrate, linear_acceleration, step_sailboat,
    step_sailboat_dbg, world_forces, BoatModels, BodyForces, WorldForces,
};
pub use boat::Sailboat;
