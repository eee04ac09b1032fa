//! Identical inputs give bit-identical trajectories, whichever engine
//! instance or thread runs them.

use std::thread;

use blockmotion::prelude::*;
use blockmotion::{Facing, Half};
use test_utils::{palette, run_ticks, GridWorld};

fn course() -> GridWorld {
    let mut world = GridWorld::flat(60, palette::stone());
    world.set(IVec3::new(2, 59, 0), palette::slime());
    world.set(IVec3::new(3, 59, 0), palette::soul_sand());
    world.set(IVec3::new(4, 60, 0), palette::stairs(Facing::East, Half::Bottom));
    world.fill(IVec3::new(6, 60, -2), IVec3::new(8, 60, 2), &palette::water(0));
    world.set(IVec3::new(10, 60, 0), palette::fence());
    world
}

fn runner() -> ActorState {
    ActorState {
        yaw_degrees: -90.0,
        control: Control {
            forward: true,
            sprint: true,
            jump: true,
            ..Control::default()
        },
        ..ActorState::at(DVec3::new(0.5, 60.0, 0.5))
    }
}

#[test]
fn repeated_runs_match() {
    let world = course();
    let first = run_ticks(
        &palette::engine(LiquidGravity::Proportional),
        &mut runner(),
        &world,
        200,
    );
    let second = run_ticks(
        &palette::engine(LiquidGravity::Proportional),
        &mut runner(),
        &world,
        200,
    );
    assert_eq!(first, second);
    assert!(first.iter().any(|s| s.in_water), "course should reach the pool");
}

#[test]
fn shared_engine_across_threads_matches() {
    let physics = palette::engine(LiquidGravity::Independent);
    let world = course();
    let expected = run_ticks(&physics, &mut runner(), &world, 120);

    let results: Vec<Vec<ActorState>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| run_ticks(&physics, &mut runner(), &world, 120)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker"))
            .collect()
    });
    for trajectory in results {
        assert_eq!(trajectory, expected);
    }
}
