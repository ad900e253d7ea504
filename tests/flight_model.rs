mod common;

use approx::assert_relative_eq;
use common::*;
use flyer_dynamics::{
    components::{
        ActuatorBank, AttitudeHold, ControlInputs, ControlState, EngineStates, ForceCategory,
        PhysicsComponent, ProbeDragState, VehicleConfig,
    },
    resources::PhysicsConfig,
    systems::probe_drag_category,
};
use nalgebra::Vector3;
use std::f64::consts::PI;

#[test]
fn test_level_flight_force_balance() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(VehicleConfig::light_jet(), level_flight(100.0))
        .build();
    let jet = test_app.vehicle(0);

    test_app.run_ticks(1);

    let physics = test_app.get::<PhysicsComponent>(jet);
    assert_physics_valid(physics);

    let lift = physics
        .forces_in(&ForceCategory::Aerodynamic)
        .find(|f| f.point.is_some())
        .expect("lift should be published");
    assert_relative_eq!(lift.vector.norm(), 56962.5, epsilon = 1e-6);

    // Half throttle: 49 kN forward, minus parasitic (612.5 N) and induced (512.6625 N) drag
    assert_vector_eq(
        &physics.net_force,
        &Vector3::new(49_000.0 - 612.5 - 512.6625, 0.0, -56962.5),
        1e-6,
    );
    // Lift behind the centre of mass pitches down, thrust below it pitches up
    assert_relative_eq!(
        physics.net_moment.y,
        -0.3 * 56962.5 + 0.2 * 49_000.0,
        epsilon = 1e-6
    );
    assert_relative_eq!(physics.net_moment.x, 0.0, epsilon = 1e-9);
}

#[test]
fn test_neutral_control_forces_cancel() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(VehicleConfig::light_jet(), at_rest())
        .build();
    let jet = test_app.vehicle(0);

    test_app.run_ticks(1);

    let physics = test_app.get::<PhysicsComponent>(jet);
    assert_eq!(physics.forces_in(&ForceCategory::Aerodynamic).count(), 0);
    assert_eq!(physics.moments_in(&ForceCategory::Aerodynamic).count(), 0);
    assert_eq!(physics.forces_in(&ForceCategory::Control).count(), 6);
    // Only thrust remains
    assert_vector_eq(&physics.net_force, &Vector3::new(49_000.0, 0.0, 0.0), 1e-9);
}

#[test]
fn test_throttle_spools_up_at_actuator_rate() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(VehicleConfig::light_jet(), level_flight(100.0))
        .build();
    let jet = test_app.vehicle(0);
    test_app.get_mut::<ControlInputs>(jet).throttle[0] = 1.0;

    test_app.run_ticks(1);

    let dt = PhysicsConfig::default().timestep;
    let spool = 0.8 * dt;
    let expected = 98_000.0 * (spool + 1.0) / 2.0;
    assert_relative_eq!(
        test_app.get::<EngineStates>(jet).engines[0].thrust,
        expected,
        epsilon = 1e-6
    );

    test_app.run_ticks(200);
    assert_relative_eq!(
        test_app.get::<EngineStates>(jet).total_thrust(),
        98_000.0,
        epsilon = 1e-6
    );
}

#[test]
fn test_timestep_drives_actuators() {
    let mut test_app = TestAppBuilder::new()
        .with_physics(PhysicsConfig::new(0.01, 1.225).unwrap())
        .with_vehicle(VehicleConfig::light_jet(), level_flight(100.0))
        .build();
    let jet = test_app.vehicle(0);
    test_app.get_mut::<ControlInputs>(jet).roll = 1.0;

    test_app.run_ticks(1);

    let aileron = test_app
        .get::<ActuatorBank>(jet)
        .get("aileron")
        .unwrap()
        .current_value;
    assert_relative_eq!(aileron, 0.02, epsilon = 1e-12);
}

#[test]
fn test_full_roll_input_rolls_right() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(instant_light_jet(), level_flight(100.0))
        .build();
    let jet = test_app.vehicle(0);
    test_app.get_mut::<ControlInputs>(jet).roll = 1.0;

    test_app.run_ticks(1);

    assert_relative_eq!(test_app.get::<ControlState>(jet).roll, 1.0);
    let physics = test_app.get::<PhysicsComponent>(jet);
    // 8 kN at each wingtip, 4.5 m out
    assert_relative_eq!(physics.net_moment.x, 2.0 * 4.5 * 8_000.0, epsilon = 1e-6);
    // Reversed ailerons leave the lift untouched
    let lift = physics
        .forces_in(&ForceCategory::Aerodynamic)
        .find(|f| f.point.is_some())
        .unwrap();
    assert_relative_eq!(lift.vector.norm(), 56962.5, epsilon = 1e-6);
}

#[test]
fn test_attitude_hold_levels_wings() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(VehicleConfig::light_jet(), banked_flight(100.0, 0.3))
        .build();
    let jet = test_app.vehicle(0);
    test_app.insert(jet, AttitudeHold::wings_level());

    test_app.run_ticks(1);

    assert!(test_app.get::<ControlInputs>(jet).roll < 0.0);
    assert!(test_app.get::<ControlState>(jet).roll < 0.0);
    // Stability and control forces both roll left
    assert!(test_app.get::<PhysicsComponent>(jet).net_moment.x < 0.0);
}

#[test]
fn test_missing_throttle_skips_engine() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(VehicleConfig::light_jet(), level_flight(100.0))
        .build();
    let jet = test_app.vehicle(0);
    test_app.get_mut::<ControlInputs>(jet).throttle.clear();

    test_app.run_ticks(1);

    let physics = test_app.get::<PhysicsComponent>(jet);
    assert_eq!(physics.forces_in(&ForceCategory::Propulsive).count(), 0);
    assert!(physics.forces_in(&ForceCategory::Aerodynamic).count() > 0);
    assert_physics_valid(physics);
}

#[test]
fn test_thrust_vectoring_lags_one_tick() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(instant_light_jet(), level_flight(100.0))
        .build();
    let jet = test_app.vehicle(0);
    {
        let mut inputs = test_app.get_mut::<ControlInputs>(jet);
        inputs.throttle[0] = 1.0;
        inputs.vectoring[0] = 1.0;
    }

    test_app.run_ticks(1);
    let first = test_app.get::<EngineStates>(jet).engines[0].thrust_vector;
    assert_vector_eq(&first, &Vector3::new(98_000.0, 0.0, 0.0), 1e-9);

    test_app.run_ticks(1);
    let second = test_app.get::<EngineStates>(jet).engines[0].thrust_vector;
    let angle = 20f64.to_radians();
    assert_vector_eq(
        &second,
        &(Vector3::new(angle.cos(), 0.0, -angle.sin()) * 98_000.0),
        1e-6,
    );
}

#[test]
fn test_glider_probe_drag_and_damping_override() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(damped_glider(), yawed_flight(30.0, 0.2))
        .build();
    let glider = test_app.vehicle(0);

    test_app.run_ticks(1);

    assert_relative_eq!(
        test_app.get::<ProbeDragState>(glider).offbore,
        0.2,
        epsilon = 1e-9
    );

    let physics = test_app.get::<PhysicsComponent>(glider);
    let probe: Vec<_> = physics.forces_in(&probe_drag_category()).collect();
    assert_eq!(probe.len(), 1);
    let q = 0.5 * 1.225 * 900.0;
    assert_vector_eq(
        &probe[0].vector,
        &Vector3::new(-q * 0.6 * 0.8 * (1.0 - 0.2f64.cos()), 0.0, 0.0),
        1e-9,
    );
    assert_relative_eq!(
        physics.linear_damping_override.unwrap(),
        0.05 + 1.5 * 0.2 / PI,
        epsilon = 1e-9
    );
    assert_eq!(physics.forces_in(&ForceCategory::Propulsive).count(), 0);
}

#[test]
fn test_contributions_do_not_accumulate_across_ticks() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(VehicleConfig::light_jet(), level_flight(100.0))
        .build();
    let jet = test_app.vehicle(0);

    test_app.run_ticks(1);
    let first = test_app.get::<PhysicsComponent>(jet).clone();
    test_app.run_ticks(5);
    let later = test_app.get::<PhysicsComponent>(jet);

    assert_eq!(first.forces.len(), later.forces.len());
    assert_vector_eq(&first.net_force, &later.net_force, 1e-9);
}

#[test]
fn test_unbound_throttle_passes_through() {
    let mut test_app = TestAppBuilder::new()
        .with_vehicle(direct_throttle_jet(), level_flight(100.0))
        .build();
    let jet = test_app.vehicle(0);
    test_app.get_mut::<ControlInputs>(jet).throttle[0] = 1.0;

    test_app.run_ticks(1);

    assert_relative_eq!(
        test_app.get::<EngineStates>(jet).total_thrust(),
        98_000.0,
        epsilon = 1e-9
    );
}
