//! Physics constants used across the movement engine.
//!
//! Each value carries the width the reference client stores it in. `f32`
//! constants must only meet other `f32` values until they are explicitly
//! widened, otherwise the rounding sequence drifts from the client.

/// Vertical acceleration subtracted every airborne tick.
pub const GRAVITY: f64 = 0.08;
/// Multiplier applied to vertical velocity after gravity.
pub const AIR_DRAG: f32 = 0.98;
/// Base value of the movement-speed attribute.
pub const PLAYER_SPEED: f32 = 0.1;
/// Horizontal acceleration while airborne.
pub const AIRBORNE_ACCELERATION: f32 = 0.02;
/// Horizontal velocity retained per airborne tick.
pub const AIRBORNE_INERTIA: f32 = 0.91;
/// Amount of the multiply-total sprint modifier.
///
/// The client stores this as the double nearest to `0.3_f32`.
pub const SPRINT_SPEED: f64 = 0.300_000_011_920_928_96;
/// Identifier of the client's sprint modifier.
pub const SPRINTING_MODIFIER_ID: &str = "662a6b8d-da3e-4c1c-8813-96ea6097278d";
/// Input scale applied while sneaking.
pub const SNEAK_SPEED: f64 = 0.3;
/// Velocity components below this magnitude snap to zero.
pub const NEGLIGIBLE_VELOCITY: f64 = 0.005;
/// Squared input magnitude below which `move_flying` does nothing.
pub const NEGLIGIBLE_FLYING_SPEED: f32 = 1.0e-4;
/// Height of ledge the actor climbs without jumping.
pub const STEP_HEIGHT: f32 = 0.6;
/// Horizontal speed cap and descent cap on climbable cells.
pub const LADDER_MAX_SPEED: f32 = 0.15;
/// Vertical velocity set when climbing a ladder.
pub const LADDER_CLIMB_SPEED: f64 = 0.2;
/// Upward impulse per tick while jumping inside a liquid.
pub const LIQUID_MOTION_Y: f64 = 0.039_999_999_105_930_33;
/// Vertical velocity at the start of a jump.
pub const JUMP_MOTION_Y: f32 = 0.42;
/// Extra vertical velocity per jump boost level.
pub const JUMP_BOOST_PER_LEVEL: f32 = 0.1;
/// Horizontal impulse of a sprint jump.
pub const SPRINT_JUMP_BOOST: f32 = 0.2;
/// Degrees to radians as the client's jump code spells it.
pub const SPRINT_JUMP_DEG_TO_RAD: f32 = 0.017_453_292;
/// Half the actor's horizontal extent.
pub const PLAYER_HALF_WIDTH: f64 = 0.3;
/// Actor height.
pub const PLAYER_HEIGHT: f64 = 1.8;
/// Velocity retained per tick in water.
pub const WATER_INERTIA: f32 = 0.8;
/// Velocity retained per tick in lava.
pub const LAVA_INERTIA: f32 = 0.5;
/// Acceleration inside liquids.
pub const BASE_LIQUID_ACCELERATION: f32 = 0.02;
/// Slipperiness of ordinary ground.
pub const DEFAULT_SLIPPERINESS: f32 = 0.6;
/// Slipperiness of slime blocks.
pub const SLIME_SLIPPERINESS: f32 = 0.8;
/// Slipperiness of ice and packed ice.
pub const ICE_SLIPPERINESS: f32 = 0.98;
/// Multiplier folding slipperiness into ground inertia.
pub const GROUND_INERTIA_FACTOR: f32 = 0.91;
/// Vertical impulse when climbing out of a liquid onto a ledge.
pub const OUT_OF_LIQUID_IMPULSE: f32 = 0.3;
/// Ticks before a held jump fires again.
pub const AUTOJUMP_COOLDOWN: u32 = 10;
/// Ground inertia that depth strider blends water inertia towards.
pub const MAGIC_FRICTION_WATER: f32 = 0.546_000_06;
/// Cube of the default ground inertia (`0.6 * 0.91`).
pub const MAGIC_FRICTION_CUBED: f32 = 0.162_771_36;
/// Highest depth strider level with an effect.
pub const MAX_DEPTH_STRIDER: u8 = 3;
/// Horizontal velocity multiplier while overlapping soul sand.
pub const SOUL_SAND_SPEED: f64 = 0.4;
/// Horizontal displacement multiplier while caught in a web.
pub const WEB_HORIZONTAL_FACTOR: f64 = 0.25;
/// Vertical displacement multiplier while caught in a web.
pub const WEB_VERTICAL_FACTOR: f32 = 0.05;
/// Scale of the normalised water current added to velocity.
pub const WATER_FLOW_SCALE: f64 = 0.014;
/// Multiplier applied to raw strafe/forward input.
pub const MOVEMENT_INPUT_FACTOR: f32 = 0.98;
/// Retraction step of the sneak-edge guard.
pub const SNEAK_EDGE_STEP: f64 = 0.05;
/// Vertical velocity when the column below the actor is unloaded.
pub const UNLOADED_FALL_SPEED: f64 = -0.1;
/// Liquid gravity when liquids fall independently of the world gravity.
pub const INDEPENDENT_LIQUID_GRAVITY: f64 = 0.02;
/// Divisor of [`GRAVITY`] for water in proportional-gravity versions.
pub const PROPORTIONAL_WATER_GRAVITY_DIVISOR: f64 = 16.0;
/// Divisor of [`GRAVITY`] for lava in proportional-gravity versions.
pub const PROPORTIONAL_LAVA_GRAVITY_DIVISOR: f64 = 4.0;
/// Full depth range of a liquid column, in levels.
pub const LIQUID_LEVELS: f32 = 9.0;
/// Level at and above which liquid is falling.
pub const FALLING_LIQUID_LEVEL: u8 = 8;
/// Layer count of a full snow cell.
pub const MAX_SNOW_LAYERS: u8 = 8;
/// Largest absolute feet coordinate the engine accepts; cell indices and
/// their neighbours stay well inside `i32`.
pub const MAX_COORDINATE: f64 = 1.0e9;
/// Largest descent speed on a ladder.
pub const LADDER_MAX_DESCENT: f64 = 0.15;
/// Shrink on every axis applied after the vertical liquid margin when
/// testing for water.
pub const WATER_MARGIN: f64 = 0.001;
/// Horizontal shrink of the actor box when testing for lava.
pub const LAVA_HORIZONTAL_MARGIN: f32 = 0.1;
/// Vertical shrink of the actor box when testing for either liquid.
pub const LIQUID_VERTICAL_MARGIN: f32 = 0.4;
/// Shrink of the actor box when touching soul sand and webs.
pub const CONTACT_MARGIN: f64 = 0.001;
/// Height added to the probe deciding whether an actor can leave a liquid.
pub const LIQUID_EXIT_HEIGHT: f64 = 0.600_000_023_841_857_9;
/// Depth-strider strength multiplier while not standing on anything.
pub const DEPTH_STRIDER_AIRBORNE_FACTOR: f32 = 0.5;
/// Share of the airborne acceleration added while sprinting.
pub const SPRINT_AIR_BOOST: f64 = 0.3;
/// How far below the feet the landing cell is looked up.
pub const LANDING_PROBE_DEPTH: f32 = 0.2;
/// Vertical offset of the box probing for ground under a sneaking actor.
pub const SNEAK_PROBE_DEPTH: f64 = -1.0;
/// Downward pull added to falling water walled in by solid cells.
pub const FALLING_WATER_PULL: f64 = -6.0;
