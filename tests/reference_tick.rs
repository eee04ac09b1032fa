//! Golden-value regression for one walking tick.
//!
//! The expected values were produced by the reference client for an actor
//! walking forward on flat stone. Every component must match to the bit.

use blockmotion::prelude::*;
use rstest::rstest;
use static_assertions::assert_impl_all;
use test_utils::{palette, GridWorld};

assert_impl_all!(Physics: Send, Sync, Clone);
assert_impl_all!(ActorState: Send, Sync, Clone);

fn walking(yaw: Option<f64>) -> ActorState {
    ActorState {
        velocity: DVec3::new(
            -0.006_821_141_663_837_831,
            -0.078_400_001_525_878_9,
            0.117_661_490_220_990_86,
        ),
        yaw,
        pitch: yaw.map(|_| 3.521_599_743_472_960_2),
        yaw_degrees: 3.318_554_2,
        pitch_degrees: -201.772_8,
        on_ground: true,
        collided_vertically: true,
        control: Control::forward(),
        ..ActorState::at(DVec3::new(384.724_369_402_295_96, 60.0, -815.253_607_197_641_9))
    }
}

#[rstest]
#[case::degrees_only(
    None,
    DVec3::new(384.711_876_470_296_8, 60.0, -815.038_109_987_835_6),
    DVec3::new(-0.006_821_141_663_837_737, -0.078_400_001_525_878_9, 0.117_661_490_220_990_89)
)]
#[case::radians_recomputed(
    Some(3.307_809_096_078_320_6),
    DVec3::new(384.733_756_076_711_36, 60.0, -815.039_296_835_522_4),
    DVec3::new(0.005_125_124_826_116_629, -0.078_400_001_525_878_9, 0.117_013_471_308_746_69)
)]
fn walking_tick_matches_reference(
    #[case] yaw: Option<f64>,
    #[case] position: DVec3,
    #[case] velocity: DVec3,
) {
    let physics = palette::engine(LiquidGravity::Independent);
    let world = GridWorld::flat(60, palette::stone());
    let mut state = walking(yaw);
    physics.simulate_tick(&mut state, &world).expect("tick");

    assert_eq!(state.position, position);
    assert_eq!(state.velocity, velocity);
    assert!(state.on_ground);
    assert!(state.collided_vertically);
    assert!(!state.collided_horizontally);
    assert!(!state.in_water);
    assert!(!state.in_lava);
}

#[test]
fn steady_walk_keeps_its_velocity() {
    let physics = palette::engine(LiquidGravity::Independent);
    let world = GridWorld::flat(60, palette::stone());
    let mut state = walking(None);
    let before = state.velocity;
    physics.simulate_tick(&mut state, &world).expect("tick");
    approx::assert_relative_eq!(state.velocity.x, before.x, epsilon = 1e-15);
    approx::assert_relative_eq!(state.velocity.z, before.z, epsilon = 1e-15);
}
