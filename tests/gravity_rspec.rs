//! Behaviour-driven tests using rust-rspec.
//!
//! An actor dropped above a flat floor settles on it from any height without
//! passing through.

use blockmotion::prelude::*;
use rstest::rstest;
use test_utils::{palette, GridWorld};

const FLOOR: f64 = 60.0;
const TICK_LIMIT: usize = 400;

#[derive(Clone, Debug)]
struct FallingActor {
    physics: Physics,
    world: GridWorld,
    state: ActorState,
    lowest: f64,
    ticks: usize,
}

impl FallingActor {
    fn at_height(height: f64) -> Self {
        Self {
            physics: palette::engine(LiquidGravity::Independent),
            world: GridWorld::flat(60, palette::stone()),
            state: ActorState::at(DVec3::new(0.5, FLOOR + height, 0.5)),
            lowest: f64::INFINITY,
            ticks: 0,
        }
    }

    fn tick(&mut self) {
        self.physics
            .simulate_tick(&mut self.state, &self.world)
            .expect("tick");
        self.lowest = self.lowest.min(self.state.position.y);
        self.ticks += 1;
    }

    fn fall(&mut self) {
        while !self.state.on_ground && self.ticks < TICK_LIMIT {
            self.tick();
        }
    }

    fn assert_resting(&self) {
        assert!(self.state.on_ground, "still falling after {} ticks", self.ticks);
        assert_eq!(self.state.position.y, FLOOR);
        assert!(self.lowest >= FLOOR, "sank to {}", self.lowest);
        assert_eq!(
            self.state.velocity.y,
            -0.08 * f64::from(0.98_f32),
            "vertical velocity should restart from rest"
        );
    }
}

#[test]
fn dropped_actor_lands() {
    rspec::run(&rspec::given(
        "an actor ten blocks above a stone floor",
        FallingActor::at_height(10.0),
        |ctx| {
            ctx.when("it ticks once", |ctx| {
                ctx.before_each(FallingActor::tick);
                ctx.then("it is airborne and accelerating down", |actor| {
                    assert!(!actor.state.on_ground);
                    assert!(actor.state.velocity.y < 0.0);
                });
            });
            ctx.when("it ticks until grounded", |ctx| {
                ctx.before_each(FallingActor::fall);
                ctx.then("it rests on the floor", FallingActor::assert_resting);
                ctx.then("it stays there on the next tick", |actor| {
                    let mut next = actor.clone();
                    next.tick();
                    next.assert_resting();
                });
            });
        },
    ));
}

#[rstest]
#[case::just_above(0.01)]
#[case::half_block(0.5)]
#[case::one_jump(1.25)]
#[case::high(64.0)]
#[case::terminal_speed(250.5)]
fn falls_never_tunnel(#[case] height: f64) {
    let mut actor = FallingActor::at_height(height);
    actor.fall();
    actor.assert_resting();
}
