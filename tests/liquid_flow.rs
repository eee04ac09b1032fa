//! Water membership and current.

use blockmotion::prelude::*;
use test_utils::{palette, GridWorld};

fn swimmer() -> ActorState {
    ActorState::at(DVec3::new(0.5, 60.5, 0.5))
}

#[test]
fn distant_water_has_no_effect() {
    let physics = palette::engine(LiquidGravity::Independent);
    let dry = GridWorld::flat(60, palette::stone());
    let mut wet = dry.clone();
    wet.fill(IVec3::new(3, 60, -1), IVec3::new(5, 60, 1), &palette::water(2));

    let mut in_dry = swimmer();
    let mut in_wet = swimmer();
    in_dry.velocity = DVec3::new(0.05, 0.0, -0.02);
    in_wet.velocity = in_dry.velocity;
    for _ in 0..5 {
        physics.simulate_tick(&mut in_dry, &dry).expect("tick");
        physics.simulate_tick(&mut in_wet, &wet).expect("tick");
        assert!(!in_wet.in_water);
        assert_eq!(in_dry, in_wet);
    }
}

#[test]
fn still_source_exerts_no_current() {
    let physics = palette::engine(LiquidGravity::Independent);
    let mut world = GridWorld::flat(60, palette::stone());
    world.fill(IVec3::new(-2, 60, -2), IVec3::new(2, 61, 2), &palette::water(0));
    let mut state = swimmer();
    physics.simulate_tick(&mut state, &world).expect("tick");
    assert!(state.in_water);
    assert_eq!(state.velocity.x, 0.0);
    assert_eq!(state.velocity.z, 0.0);
}

#[test]
fn current_pushes_downstream() {
    let physics = palette::engine(LiquidGravity::Independent);
    let mut world = GridWorld::flat(60, palette::stone());
    for (x, level) in (-1..=2).zip(0_u8..) {
        world.set(IVec3::new(x, 60, 0), palette::water(level));
    }
    let mut state = swimmer();
    physics.simulate_tick(&mut state, &world).expect("tick");

    assert!(state.in_water);
    approx::assert_relative_eq!(state.velocity.x, 0.014 * f64::from(0.8_f32), epsilon = 1e-15);
    assert_eq!(state.velocity.z, 0.0);
}

#[test]
fn walled_falling_water_pulls_down() {
    let physics = palette::engine(LiquidGravity::Independent);
    let world = GridWorld::flat(60, palette::stone())
        .with(IVec3::new(0, 60, 0), palette::water(8))
        .with(IVec3::new(1, 60, 0), palette::stone());
    let mut state = ActorState::at(DVec3::new(0.35, 60.5, 0.5));
    physics.simulate_tick(&mut state, &world).expect("tick");

    assert!(state.in_water);
    assert_eq!(state.velocity.x, 0.0);
    approx::assert_relative_eq!(
        state.velocity.y,
        -0.014 * f64::from(0.8_f32) - 0.02,
        epsilon = 1e-15
    );
}
