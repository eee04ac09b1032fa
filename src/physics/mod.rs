//! The per-tick movement engine.
//!
//! [`Physics`] holds only what a game version fixes: feature flags, the
//! cell-kind table and the liquid gravities derived from them. Everything
//! that changes between ticks lives in the caller's [`ActorState`], so one
//! engine can drive any number of actors from any number of threads.
//!
//! A tick runs in a fixed order: cooldown and angles, liquid membership and
//! water current, negligible-velocity snapping, jumping, input, then one of
//! the water, lava or land movement modes. Each mode ends in the shared
//! collision step.

mod collision;
mod liquid;
mod movement;

use glam::DVec3;
use log::{debug, trace};

use crate::actor::{ActorState, Control};
use crate::attribute::movement_speed;
use crate::cell_kind::{CellKind, CellKindTable};
use crate::config::{EngineConfig, FeatureFlags, LiquidGravity};
use crate::constants::{
    AUTOJUMP_COOLDOWN, JUMP_BOOST_PER_LEVEL, JUMP_MOTION_Y, LAVA_HORIZONTAL_MARGIN,
    LIQUID_MOTION_Y, LIQUID_VERTICAL_MARGIN, MOVEMENT_INPUT_FACTOR, NEGLIGIBLE_VELOCITY,
    SNEAK_SPEED, SPRINT_JUMP_BOOST, SPRINT_JUMP_DEG_TO_RAD, WATER_MARGIN,
};
use crate::error::{ConfigError, PhysicsError};
use crate::numeric::{cos32, round32, sin32, warm_trig_table};
use crate::shapes::ShapeResolver;
use crate::world::WorldPort;

const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// The movement engine for one game version.
#[derive(Debug, Clone)]
pub struct Physics {
    features: FeatureFlags,
    cell_kinds: CellKindTable,
    liquid_gravity: LiquidGravity,
    water_gravity: f64,
    lava_gravity: f64,
}

impl Physics {
    /// Resolve a configuration into an engine.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingLiquidGravity`] when the flags select no
    /// liquid-gravity variant.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let EngineConfig {
            features,
            cell_kinds,
        } = config;
        let liquid_gravity = features
            .liquid_gravity
            .ok_or(ConfigError::MissingLiquidGravity)?;
        let (water_gravity, lava_gravity) = liquid_gravity.constants();
        warm_trig_table();
        debug!(
            "physics ready: {liquid_gravity:?} liquid gravity (water {water_gravity}, lava {lava_gravity}), {} classified cells",
            cell_kinds.len()
        );
        Ok(Self {
            features,
            cell_kinds,
            liquid_gravity,
            water_gravity,
            lava_gravity,
        })
    }

    /// Feature flags the engine was built with.
    #[must_use]
    pub const fn features(&self) -> FeatureFlags {
        self.features
    }

    /// The selected liquid-gravity variant.
    #[must_use]
    pub const fn liquid_gravity(&self) -> LiquidGravity {
        self.liquid_gravity
    }

    /// Advance `state` by one tick against `world`.
    ///
    /// # Errors
    /// Returns [`PhysicsError::NonFinite`] without touching `state` when a
    /// coordinate, velocity or angle is NaN or infinite, and
    /// [`PhysicsError::OutOfRange`] when the position lies beyond
    /// [`crate::constants::MAX_COORDINATE`].
    pub fn simulate_tick<W: WorldPort + ?Sized>(
        &self,
        state: &mut ActorState,
        world: &W,
    ) -> Result<(), PhysicsError> {
        state.validate()?;
        Tick {
            physics: self,
            shapes: ShapeResolver::new(&self.cell_kinds),
            world,
            state,
        }
        .run();
        Ok(())
    }
}

/// One tick in progress.
struct Tick<'a, W: ?Sized> {
    physics: &'a Physics,
    shapes: ShapeResolver<'a>,
    world: &'a W,
    state: &'a mut ActorState,
}

impl<W: WorldPort + ?Sized> Tick<'_, W> {
    fn run(mut self) {
        if self.state.jump_ticks > 0 {
            self.state.jump_ticks -= 1;
        }
        update_degrees(self.state);

        let bb = self.state.bounding_box();
        let water_region = bb
            .contract(0.0, f64::from(LIQUID_VERTICAL_MARGIN), 0.0)
            .contract(WATER_MARGIN, WATER_MARGIN, WATER_MARGIN);
        let lava_region = bb.contract(
            f64::from(LAVA_HORIZONTAL_MARGIN),
            f64::from(LIQUID_VERTICAL_MARGIN),
            f64::from(LAVA_HORIZONTAL_MARGIN),
        );
        self.state.in_water = self.apply_water_current(&water_region);
        self.state.in_lava = self.contains_kind(&lava_region, CellKind::Lava);

        self.state.velocity = snap_negligible(self.state.velocity);
        self.jump();

        let (strafe, forward) = movement_input(&self.state.control);
        let speed = round32(movement_speed(
            self.state.movement_speed.as_ref(),
            self.state.control.sprint_applies(),
        ));
        self.move_with_heading(strafe, forward, speed);

        trace!(
            "tick done: position {} velocity {} on_ground {} water {} lava {}",
            self.state.position,
            self.state.velocity,
            self.state.on_ground,
            self.state.in_water,
            self.state.in_lava
        );
    }

    fn jump(&mut self) {
        let state = &mut *self.state;
        if state.control.jump || state.jump_queued {
            if state.in_water || state.in_lava {
                state.velocity.y += LIQUID_MOTION_Y;
            } else if state.on_ground && state.jump_ticks == 0 {
                state.velocity.y = f64::from(JUMP_MOTION_Y);
                if state.jump_boost_level > 0 {
                    state.velocity.y +=
                        f64::from(f32::from(state.jump_boost_level) * JUMP_BOOST_PER_LEVEL);
                }
                if state.control.sprint_applies() {
                    let angle = state.yaw_degrees * SPRINT_JUMP_DEG_TO_RAD;
                    state.velocity.x -= f64::from(sin32(angle) * SPRINT_JUMP_BOOST);
                    state.velocity.z += f64::from(cos32(angle) * SPRINT_JUMP_BOOST);
                }
                state.jump_ticks = AUTOJUMP_COOLDOWN;
            }
        } else {
            state.jump_ticks = 0;
        }
        state.jump_queued = false;
    }
}

/// Refresh the degree projections from whichever radian angles are present.
pub fn update_degrees(state: &mut ActorState) {
    if let Some(yaw) = state.yaw {
        state.yaw_degrees = round32((std::f64::consts::PI - yaw) * RAD_TO_DEG);
    }
    if let Some(pitch) = state.pitch {
        state.pitch_degrees = round32(-pitch * RAD_TO_DEG);
    }
}

/// Zero every component smaller in magnitude than the negligible threshold.
///
/// # Examples
/// ```
/// use blockmotion::physics::snap_negligible;
/// use glam::DVec3;
/// let v = snap_negligible(DVec3::new(0.004, -0.0049, 0.005));
/// assert_eq!(v, DVec3::new(0.0, 0.0, 0.005));
/// ```
#[must_use]
pub fn snap_negligible(velocity: DVec3) -> DVec3 {
    let snap = |c: f64| if c.abs() < NEGLIGIBLE_VELOCITY { 0.0 } else { c };
    DVec3::new(snap(velocity.x), snap(velocity.y), snap(velocity.z))
}

/// Strafe and forward input in `[-0.98, 0.98]`, reduced while sneaking.
#[must_use]
pub fn movement_input(control: &Control) -> (f32, f32) {
    let axis = |positive: bool, negative: bool| f32::from(i8::from(positive) - i8::from(negative));
    let strafe = axis(control.right, control.left) * MOVEMENT_INPUT_FACTOR;
    let forward = axis(control.forward, control.back) * MOVEMENT_INPUT_FACTOR;
    if control.sneak {
        (
            round32(f64::from(strafe) * SNEAK_SPEED),
            round32(f64::from(forward) * SNEAK_SPEED),
        )
    } else {
        (strafe, forward)
    }
}
