//! Utility helpers for tests.
//!
//! [`GridWorld`] is an in-memory terrain and [`palette`] a fixed set of
//! cells with a matching engine configuration.

pub mod palette;
pub mod world;

pub use world::GridWorld;

use blockmotion::{ActorState, Physics, WorldPort};

/// Run `ticks` ticks of `physics` on `state`, returning every intermediate
/// state after its tick.
///
/// # Panics
/// Panics if a tick rejects the state.
pub fn run_ticks<W: WorldPort + ?Sized>(
    physics: &Physics,
    state: &mut ActorState,
    world: &W,
    ticks: usize,
) -> Vec<ActorState> {
    (0..ticks)
        .map(|tick| {
            physics
                .simulate_tick(state, world)
                .unwrap_or_else(|e| panic!("tick {tick} rejected: {e}"));
            state.clone()
        })
        .collect()
}
