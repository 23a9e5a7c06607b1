use sailboat::{boatspecs, ConstantWind, RudderSingularity, Sailboat, StepDebug};

const DT: f64 = 0.02; // 50 Hz

#[test]
fn following_wind_accelerates_the_boat_forward() {
    let wind = ConstantWind::new(4.0, 0.0);
    let mut boat = Sailboat::new();
    let x_dot0 = boat.state().x_dot;

    for i in 0..50 {
        boat.advance(DT, 0.0, 0.3, &wind);
        let s = boat.state();
        assert!(s.theta.is_finite() && s.phi.is_finite(), "non-finite attitude at step {i}: {s:?}");
        assert!(s.is_finite(), "non-finite state at step {i}: {s:?}");
    }

    let s = boat.state();
    assert!(s.x_dot > x_dot0, "x_dot should grow: {} -> {}", x_dot0, s.x_dot);
    assert!(s.x > 0.0, "boat should have moved forward, x = {}", s.x);
    // Heel relaxes from the initial -0.25 rad under the righting moment.
    assert!(s.theta > -0.25, "theta = {}", s.theta);
}

#[test]
fn calm_water_keeps_the_boat_at_rest() {
    let calm = ConstantWind::calm();
    let mut boat = Sailboat::new();
    let phi0 = boat.heading();
    let mut dbg = StepDebug::default();

    for i in 0..5000 {
        boat.advance_dbg(DT, 0.0, 0.3, &calm, Some(&mut dbg));
        assert_eq!(dbg.f_sail_y2, 0.0, "sail force at step {i}");
        let s = boat.state();
        assert_eq!([s.x, s.y, s.x_dot, s.y_dot], [0.0; 4], "boat moved at step {i}");
        assert_eq!(s.phi, phi0, "heading changed at step {i}");
    }
    // Only the heel moves: it rights itself toward level.
    assert!(boat.heel().abs() < 0.25 * 0.1, "heel = {}", boat.heel());
}

#[test]
fn long_run_in_steady_breeze_stays_bounded() {
    let wind = ConstantWind::default();
    let mut boat = Sailboat::new();
    for i in 0..10_000 {
        let rudder = 0.4 * (i as f64 * 0.002).sin();
        boat.advance(DT, rudder, 0.3, &wind);
        assert!(boat.state().is_finite(), "non-finite state at step {i}");
        assert!(boat.heel().abs() < 1.0, "capsized at step {i}: heel {}", boat.heel());
    }
    assert!(boat.state().speed() > 0.1);
}

#[test]
fn rudder_changes_the_track() {
    let wind = ConstantWind::default();
    let mut straight = Sailboat::new();
    let mut turning = Sailboat::new();
    for _ in 0..1000 {
        straight.advance(DT, 0.0, 0.3, &wind);
        turning.advance(DT, 0.0, 0.3, &wind);
    }
    for _ in 0..1000 {
        straight.advance(DT, 0.0, 0.3, &wind);
        turning.advance(DT, -0.3, 0.3, &wind);
    }
    assert!(
        (straight.heading() - turning.heading()).abs() > 1e-3,
        "rudder had no effect on heading: {} vs {}",
        straight.heading(),
        turning.heading()
    );
    assert_eq!(turning.rudder_angle(), -0.3);
}

#[test]
fn rudder_pole_is_saturated_through_advance() {
    // A boat drifting straight astern at 1 m/s in still air sees water along
    // +x1; with δ = asin(2/3) the rudder denominator crosses zero.
    let calm = ConstantWind::calm();
    let mut spec = boatspecs::training_dinghy_spec();
    spec.initial.phi = 0.0;
    spec.initial.theta = 0.0;
    spec.initial.x_dot = -1.0;
    let delta = (2.0_f64 / 3.0).asin();

    let mut boat = Sailboat::from_spec(spec.clone()).expect("valid spec");
    let mut dbg = StepDebug::default();
    boat.advance_dbg(DT, delta, 0.0, &calm, Some(&mut dbg));
    assert!(dbg.f_deviation_y3.is_finite());
    assert!((dbg.f_deviation_y3.abs() - 2.4).abs() < 1e-9, "f_dev = {}", dbg.f_deviation_y3);
    assert!(boat.state().is_finite());

    spec.rudder.singularity = RudderSingularity::Propagate;
    let mut raw = Sailboat::from_spec(spec).expect("valid spec");
    raw.advance_dbg(DT, delta, 0.0, &calm, Some(&mut dbg));
    assert!(!dbg.f_deviation_y3.is_finite() || dbg.f_deviation_y3.abs() > 1e6);
}

#[test]
fn heavy_weather_preset_sails() {
    let wind = ConstantWind::default();
    let mut boat = Sailboat::from_spec(boatspecs::heavy_weather_spec()).expect("valid preset");
    for _ in 0..5000 {
        boat.advance(DT, 0.0, 0.3, &wind);
    }
    assert!(boat.state().is_finite());
    assert!(boat.x() > 0.0);
}

#[test]
fn independent_boats_do_not_interact() {
    let wind = ConstantWind::default();
    let mut lone = Sailboat::new();
    let mut fleet = vec![Sailboat::new(), Sailboat::new(), Sailboat::new()];
    for _ in 0..300 {
        lone.advance(DT, 0.0, 0.3, &wind);
        fleet[0].advance(DT, 0.0, 0.3, &wind);
        fleet[1].advance(DT, 0.2, -0.4, &wind);
        fleet[2].advance(DT, -0.2, 0.8, &ConstantWind::new(9.0, 2.0));
    }
    assert_eq!(lone.state(), fleet[0].state());
}
