//! Movement modes: water, lava and land.

use glam::IVec3;

use super::Tick;
use crate::cell_kind::CellKind;
use crate::constants::{
    AIRBORNE_ACCELERATION, AIRBORNE_INERTIA, AIR_DRAG, BASE_LIQUID_ACCELERATION,
    DEFAULT_SLIPPERINESS, DEPTH_STRIDER_AIRBORNE_FACTOR, GRAVITY, GROUND_INERTIA_FACTOR,
    ICE_SLIPPERINESS, LADDER_CLIMB_SPEED, LADDER_MAX_DESCENT, LADDER_MAX_SPEED, LAVA_INERTIA,
    LIQUID_EXIT_HEIGHT, MAGIC_FRICTION_CUBED, MAGIC_FRICTION_WATER, MAX_DEPTH_STRIDER,
    NEGLIGIBLE_FLYING_SPEED, OUT_OF_LIQUID_IMPULSE, SLIME_SLIPPERINESS, SPRINT_AIR_BOOST,
    UNLOADED_FALL_SPEED, WATER_INERTIA,
};
use crate::numeric::{block_coord, cos32, round32, sin32};
use crate::world::{cell_at, WorldPort};

const DEPTH_STRIDER_DIVISOR: f32 = 3.0;
const DEGREES_PER_HALF_TURN: f32 = 180.0;

impl<W: WorldPort + ?Sized> Tick<'_, W> {
    /// Pick the movement mode for this tick and run it.
    pub(super) fn move_with_heading(&mut self, strafe: f32, forward: f32, speed: f32) {
        if self.state.in_water {
            self.move_in_water(strafe, forward, speed);
        } else if self.state.in_lava {
            self.move_in_lava(strafe, forward);
        } else {
            self.move_on_land(strafe, forward, speed);
        }
    }

    fn move_in_water(&mut self, strafe: f32, forward: f32, speed: f32) {
        let last_y = self.state.position.y;
        let mut inertia = WATER_INERTIA;
        let mut acceleration = BASE_LIQUID_ACCELERATION;
        let mut strider = f32::from(self.state.depth_strider_level.min(MAX_DEPTH_STRIDER));
        if !self.state.on_ground {
            strider *= DEPTH_STRIDER_AIRBORNE_FACTOR;
        }
        if strider > 0.0 {
            inertia += (MAGIC_FRICTION_WATER - inertia) * strider / DEPTH_STRIDER_DIVISOR;
            acceleration += (speed - acceleration) * strider / DEPTH_STRIDER_DIVISOR;
        }

        self.move_flying(strafe, forward, acceleration);
        self.move_by(self.state.velocity);

        let velocity = &mut self.state.velocity;
        velocity.x *= f64::from(inertia);
        velocity.y *= f64::from(WATER_INERTIA);
        velocity.z *= f64::from(inertia);
        velocity.y -= self.physics.water_gravity;
        self.leave_liquid(last_y);
    }

    fn move_in_lava(&mut self, strafe: f32, forward: f32) {
        let last_y = self.state.position.y;
        self.move_flying(strafe, forward, BASE_LIQUID_ACCELERATION);
        self.move_by(self.state.velocity);

        let velocity = &mut self.state.velocity;
        *velocity *= f64::from(LAVA_INERTIA);
        velocity.y -= self.physics.lava_gravity;
        self.leave_liquid(last_y);
    }

    /// Hop out of a liquid when swimming against a wall with room above.
    fn leave_liquid(&mut self, last_y: f64) {
        if !self.state.collided_horizontally {
            return;
        }
        let velocity = self.state.velocity;
        let probe = self.state.bounding_box().offset(
            velocity.x,
            velocity.y + LIQUID_EXIT_HEIGHT - self.state.position.y + last_y,
            velocity.z,
        );
        if self.is_clear(&probe) {
            self.state.velocity.y = f64::from(OUT_OF_LIQUID_IMPULSE);
        }
    }

    fn move_on_land(&mut self, strafe: f32, forward: f32, speed: f32) {
        let inertia = if self.state.on_ground {
            self.slipperiness_below() * GROUND_INERTIA_FACTOR
        } else {
            AIRBORNE_INERTIA
        };
        let acceleration = if self.state.on_ground {
            speed * (MAGIC_FRICTION_CUBED / (inertia * inertia * inertia))
        } else if self.state.control.sprint_applies() {
            round32(
                f64::from(AIRBORNE_ACCELERATION)
                    + f64::from(AIRBORNE_ACCELERATION) * SPRINT_AIR_BOOST,
            )
        } else {
            AIRBORNE_ACCELERATION
        };

        self.move_flying(strafe, forward, acceleration);

        if self.is_on_ladder() {
            let limit = f64::from(LADDER_MAX_SPEED);
            let velocity = &mut self.state.velocity;
            velocity.x = velocity.x.clamp(-limit, limit);
            velocity.z = velocity.z.clamp(-limit, limit);
            if velocity.y < -LADDER_MAX_DESCENT {
                velocity.y = -LADDER_MAX_DESCENT;
            }
            if self.state.control.sneak && self.state.velocity.y < 0.0 {
                self.state.velocity.y = 0.0;
            }
        }

        self.move_by(self.state.velocity);

        let climbing = self.state.collided_horizontally
            || (self.physics.features.climb_using_jump && self.state.control.jump);
        if climbing && self.is_on_ladder() {
            self.state.velocity.y = LADDER_CLIMB_SPEED;
        }

        let position = self.state.position;
        let column = IVec3::new(block_coord(position.x), 0, block_coord(position.z));
        if self.world.get_cell(column).is_none() {
            self.state.velocity.y = if position.y > 0.0 {
                UNLOADED_FALL_SPEED
            } else {
                0.0
            };
        } else {
            self.state.velocity.y -= GRAVITY;
        }

        let velocity = &mut self.state.velocity;
        velocity.y *= f64::from(AIR_DRAG);
        velocity.x *= f64::from(inertia);
        velocity.z *= f64::from(inertia);
    }

    /// Accelerate along the heading by `friction`, splitting the input
    /// between the strafe and forward axes.
    pub(super) fn move_flying(&mut self, strafe: f32, forward: f32, friction: f32) {
        let speed_squared = strafe * strafe + forward * forward;
        if speed_squared < NEGLIGIBLE_FLYING_SPEED {
            return;
        }
        let speed = round32(f64::from(speed_squared).sqrt()).max(1.0);
        let scale = friction / speed;
        let scaled_strafe = strafe * scale;
        let scaled_forward = forward * scale;
        let angle = self.state.yaw_degrees * std::f32::consts::PI / DEGREES_PER_HALF_TURN;
        let sin = sin32(angle);
        let cos = cos32(angle);
        self.state.velocity.x += f64::from(scaled_strafe * cos - scaled_forward * sin);
        self.state.velocity.z += f64::from(scaled_forward * cos + scaled_strafe * sin);
    }

    fn slipperiness_below(&self) -> f32 {
        let below = cell_at(self.state.position).saturating_sub(IVec3::Y);
        match self.shapes.kind_at(self.world, below) {
            Some(CellKind::Slime) => SLIME_SLIPPERINESS,
            Some(CellKind::Ice | CellKind::PackedIce) => ICE_SLIPPERINESS,
            _ => DEFAULT_SLIPPERINESS,
        }
    }

    /// Whether the cell at the actor's feet can be climbed.
    ///
    /// With climbable trapdoors enabled, an open trapdoor resting on a ladder
    /// of the same facing also counts.
    pub(super) fn is_on_ladder(&self) -> bool {
        let feet = cell_at(self.state.position);
        let Some(cell) = self.world.get_cell(feet) else {
            return false;
        };
        match self.shapes.kind_of(&cell) {
            kind if kind.is_climbable() => true,
            CellKind::Trapdoor if self.physics.features.climbable_trapdoor && cell.is_open() => self
                .world
                .get_cell(feet.saturating_sub(IVec3::Y))
                .is_some_and(|below| {
                    self.shapes.kind_of(&below) == CellKind::Ladder
                        && below.facing().is_some()
                        && below.facing() == cell.facing()
                }),
            _ => false,
        }
    }
}
