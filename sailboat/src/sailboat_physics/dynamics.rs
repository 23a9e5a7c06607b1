use super::frames::Frame;
use super::hull::Hull;
use super::rudder::Rudder;
use super::sail::{Sail, SailUpdate};
use super::terms::{assemble_body_moments, BodyMoments, MomentInputs};
use super::types::{Accelerations, BoatInputs, BoatState, StepDebug};
use super::util::guarded_cos;
use crate::math::Vec3d;
use crate::{BuoyancySpec, WindSource};

/// The three force models plus buoyancy geometry of one boat.
#[derive(Debug, Clone, PartialEq)]
pub struct BoatModels {
    pub hull: Hull,
    pub sail: Sail,
    pub rudder: Rudder,
    pub buoyancy: BuoyancySpec,
}

/// Forces in their natural frames, evaluated from the state at step start.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyForces {
    /// Sail evaluation; `sail.force` acts along y2.
    pub sail: SailUpdate,
    /// Along y1.
    pub anti_drift: f64,
    /// Along y3.
    pub deviation: f64,
    pub resistance_x1: f64,
    pub resistance_y1: f64,
    /// Along world z.
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WorldForces {
    pub sail: Vec3d,
    pub anti_drift: Vec3d,
    pub deviation: Vec3d,
    pub resistance: Vec3d,
    pub weight: f64,
    /// Vertical force cancelling every other vertical component.
    pub buoyancy: f64,
}

impl WorldForces {
    /// Horizontal resultant; the vertical part is zero by construction.
    pub fn horizontal(&self) -> (f64, f64) {
        let f = self.sail + self.anti_drift + self.deviation + self.resistance;
        (f.x, f.y)
    }
}

/// Evaluates every force law. The anti-drift plane and the rudder see the
/// water velocity, i.e. the negated boat velocity.
pub fn body_forces(
    models: &BoatModels,
    state: &BoatState,
    inputs: BoatInputs,
    wind_speed: f64,
    wind_dir: f64,
) -> BodyForces {
    let sail = models.sail.update(inputs.sail_angle_limit, wind_speed, wind_dir, state);
    let (vx1, vy1) = state.body_velocity();
    BodyForces {
        sail,
        anti_drift: models.hull.anti_drift_force(-vx1, -vy1),
        deviation: models.rudder.deviation_force(-vx1, -vy1, inputs.rudder),
        resistance_x1: models.hull.resistance_force(vx1),
        resistance_y1: models.hull.resistance_force(vy1),
        weight: models.hull.weight(),
    }
}

/// Recomposes the body forces in the world frame and closes the vertical
/// balance with buoyancy (quasi-static heave: the boat never accelerates
/// vertically).
pub fn world_forces(body: &Frame, rudder_angle: f64, f: &BodyForces) -> WorldForces {
    let sail_frame = body.turned(f.sail.angle);
    let rudder_frame = body.turned(rudder_angle);
    let sail = sail_frame.y * f.sail.force;
    let anti_drift = body.y * f.anti_drift;
    let deviation = rudder_frame.y * f.deviation;
    let resistance = body.x * f.resistance_x1 + body.y * f.resistance_y1;
    let buoyancy = -(sail.z + anti_drift.z + deviation.z + f.weight + resistance.z);
    WorldForces { sail, anti_drift, deviation, resistance, weight: f.weight, buoyancy }
}

/// World-frame horizontal accelerations `ΣF / m`.
pub fn linear_acceleration(mass: f64, forces: &WorldForces) -> (f64, f64) {
    let (fx, fy) = forces.horizontal();
    (fx / mass, fy / mass)
}

/// Heel and heading accelerations from the frame-1 moment sum and the
/// solved pitch inertia `jy`, including gyroscopic cross-coupling.
pub fn angular_acceleration(hull: &Hull, state: &BoatState, total: Vec3d, jy: f64) -> (f64, f64) {
    let spec = hull.spec();
    let (st, ct) = state.theta.sin_cos();
    let theta_dd = (total.x - state.phi_dot * state.phi_dot * ct * st * (spec.jz - jy)) / spec.jx;
    let phi_dd = (total.z - state.theta_dot * state.phi_dot * st * (jy - spec.jx - spec.jz))
        / (spec.jz * guarded_cos(state.theta));
    (theta_dd, phi_dd)
}

/// Semi-implicit Euler: rates first, then positions and angles from the
/// updated rates.
pub fn integrate(state: &mut BoatState, acc: Accelerations, dt: f64) {
    state.x_dot += acc.x * dt;
    state.y_dot += acc.y * dt;
    state.x += state.x_dot * dt;
    state.y += state.y_dot * dt;
    state.theta_dot += acc.theta * dt;
    state.phi_dot += acc.phi * dt;
    state.theta += state.theta_dot * dt;
    state.phi += state.phi_dot * dt;
}

/// Advance the boat by `dt` under the given rudder and sail commands.
/// See `step_sailboat_dbg` for the telemetry variant.
pub fn step_sailboat<W: WindSource + ?Sized>(
    models: &BoatModels,
    wind: &W,
    inputs: BoatInputs,
    state: &mut BoatState,
    dt: f64,
) {
    step_sailboat_dbg(models, wind, inputs, state, dt, None);
}

/// Variant of `step_sailboat` that fills out an optional debug record.
///
/// Forces and commanded angles are always recomputed and stored; the
/// integration half only runs for `dt > 0`.
pub fn step_sailboat_dbg<W: WindSource + ?Sized>(
    models: &BoatModels,
    wind: &W,
    inputs: BoatInputs,
    state: &mut BoatState,
    dt: f64,
    mut dbg: Option<&mut StepDebug>,
) {
    let wind_speed = wind.speed();
    let wind_dir = wind.direction();
    let (vx1, vy1) = state.body_velocity();

    let forces = body_forces(models, state, inputs, wind_speed, wind_dir);
    let body = state.body_frame();
    let world = world_forces(&body, inputs.rudder, &forces);
    let (x_dd, y_dd) = linear_acceleration(models.hull.mass(), &world);

    let moments: BodyMoments = assemble_body_moments(
        models.hull.spec(),
        models.sail.spec(),
        models.rudder.spec(),
        &models.buoyancy,
        &MomentInputs {
            f_sail: forces.sail.force,
            sail_angle: forces.sail.angle,
            f_anti_drift: forces.anti_drift,
            f_deviation: forces.deviation,
            rudder_angle: inputs.rudder,
            f_buoyancy: world.buoyancy,
            theta: state.theta,
            theta_dot: state.theta_dot,
            phi_dot: state.phi_dot,
        },
    );
    let total = moments.total();
    let jy = models
        .hull
        .solve_pitch_inertia(state.theta, state.theta_dot, state.phi_dot, total.y, total.z);
    let (theta_dd, phi_dd) = angular_acceleration(&models.hull, state, total, jy);
    let acc = Accelerations { x: x_dd, y: y_dd, theta: theta_dd, phi: phi_dd };

    state.sail_angle_limit = inputs.sail_angle_limit;
    state.sail_angle = forces.sail.angle;
    state.sail_force = forces.sail.force;
    state.rudder_angle = inputs.rudder;

    if dt > 0.0 {
        integrate(state, acc, dt);
    } else if dt < 0.0 {
        tracing::warn!(dt, "Negative time step ignored; forces refreshed, state not integrated");
    }

    tracing::trace!(
        x = state.x,
        y = state.y,
        phi = state.phi,
        theta = state.theta,
        sail_force = forces.sail.force,
        jy,
        "sailboat step"
    );

    if let Some(d) = dbg.as_mut() {
        d.dt = dt;
        d.inputs = inputs;
        d.wind_speed = wind_speed;
        d.wind_dir = wind_dir;
        d.vx1 = vx1;
        d.vy1 = vy1;
        d.apparent_wind = forces.sail.apparent_wind;
        d.apparent_angle = forces.sail.apparent_angle;
        d.f_sail_y2 = forces.sail.force;
        d.f_anti_drift_y1 = forces.anti_drift;
        d.f_deviation_y3 = forces.deviation;
        d.f_resistance_x1 = forces.resistance_x1;
        d.f_resistance_y1 = forces.resistance_y1;
        d.weight = world.weight;
        d.buoyancy = world.buoyancy;
        d.f_sail_world = world.sail;
        d.f_anti_drift_world = world.anti_drift;
        d.f_deviation_world = world.deviation;
        d.f_resistance_world = world.resistance;
        d.m_sail = moments.sail;
        d.m_anti_drift = moments.anti_drift;
        d.m_deviation = moments.deviation;
        d.m_buoyancy = moments.buoyancy;
        d.m_friction = moments.friction;
        d.m_total = total;
        d.jy = jy;
        d.acc = acc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HullSpec, RudderSpec, SailSpec};

    fn models() -> BoatModels {
        BoatModels {
            hull: Hull::new(HullSpec::default()),
            sail: Sail::new(SailSpec::default()),
            rudder: Rudder::new(RudderSpec::default()),
            buoyancy: BuoyancySpec::default(),
        }
    }

    #[test]
    fn buoyancy_cancels_every_vertical_component() {
        let body = Frame::body(0.2, -0.25);
        let f = BodyForces {
            sail: SailUpdate { angle: 0.3, force: -60.0, ..SailUpdate::default() },
            anti_drift: 3.0,
            deviation: -1.5,
            resistance_x1: -20.0,
            resistance_y1: 7.0,
            weight: -4905.0,
        };
        let w = world_forces(&body, 0.1, &f);
        let net_z = w.sail.z + w.anti_drift.z + w.deviation.z + w.resistance.z + w.weight + w.buoyancy;
        assert!(net_z.abs() < 1e-9, "net vertical force {net_z}");
        assert!(w.buoyancy > 0.0);
    }

    #[test]
    fn resistance_opposes_motion_in_world_frame() {
        let m = models();
        let state = BoatState { x_dot: 1.0, y_dot: -0.5, ..BoatState::default() };
        let f = body_forces(&m, &state, BoatInputs::default(), 0.0, 0.0);
        let w = world_forces(&state.body_frame(), 0.0, &f);
        assert!(w.resistance.dot(state.velocity()) < 0.0);
    }

    #[test]
    fn linear_acceleration_divides_by_mass() {
        let w = WorldForces { sail: Vec3d::new(50.0, -25.0, 3.0), ..WorldForces::default() };
        assert_eq!(linear_acceleration(500.0, &w), (0.1, -0.05));
    }

    #[test]
    fn angular_acceleration_without_rates_is_moment_over_inertia() {
        let m = models();
        let state = BoatState { theta: 0.0, theta_dot: 0.0, phi_dot: 0.0, ..BoatState::default() };
        let (tdd, pdd) = angular_acceleration(&m.hull, &state, Vec3d::new(100.0, 7.0, -50.0), 0.0);
        assert_eq!(tdd, 0.01);
        assert_eq!(pdd, -0.005);
    }

    #[test]
    fn angular_acceleration_on_beam_ends_stays_finite() {
        let m = models();
        let state = BoatState { theta: std::f64::consts::FRAC_PI_2, phi_dot: 0.1, theta_dot: 0.2, ..BoatState::default() };
        let (tdd, pdd) = angular_acceleration(&m.hull, &state, Vec3d::new(1.0, 1.0, 1.0), 0.0);
        assert!(tdd.is_finite() && pdd.is_finite());
    }

    #[test]
    fn integration_uses_updated_rates() {
        let mut state = BoatState { x: 0.0, theta: 0.0, phi: 0.0, ..BoatState::default() };
        let acc = Accelerations { x: 1.0, y: -2.0, theta: 4.0, phi: 0.5 };
        integrate(&mut state, acc, 0.5);
        assert_eq!((state.x_dot, state.x), (0.5, 0.25));
        assert_eq!((state.y_dot, state.y), (-1.0, -0.5));
        assert_eq!((state.theta_dot, state.theta), (2.0, 1.0));
        assert_eq!((state.phi_dot, state.phi), (0.25, 0.125));
    }

    #[test]
    fn debug_record_is_filled() {
        let m = models();
        let mut state = BoatState::default();
        let mut dbg = StepDebug::default();
        let wind = crate::ConstantWind::default();
        let inputs = BoatInputs { rudder: 0.1, sail_angle_limit: 0.3 };
        step_sailboat_dbg(&m, &wind, inputs, &mut state, 0.02, Some(&mut dbg));
        assert_eq!(dbg.dt, 0.02);
        assert_eq!(dbg.wind_speed, 4.0);
        assert_eq!(dbg.f_sail_y2, state.sail_force);
        assert!((dbg.weight + 4905.0).abs() < 1e-9);
        assert_eq!(dbg.m_total, dbg.m_sail + dbg.m_anti_drift + dbg.m_deviation + dbg.m_buoyancy + dbg.m_friction);
        assert!(dbg.buoyancy > 0.0);
        assert_eq!(state.rudder_angle, 0.1);
        assert_eq!(state.sail_angle, 0.3);
    }
}
