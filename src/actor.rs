//! The mutable record one tick consumes and produces.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeValue;
use crate::constants::{MAX_COORDINATE, PLAYER_HALF_WIDTH, PLAYER_HEIGHT};
use crate::error::PhysicsError;
use crate::geometry::Aabb;

/// Held movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "Each field mirrors one independent input key."
)]
pub struct Control {
    /// Move forward.
    pub forward: bool,
    /// Move backward.
    pub back: bool,
    /// Strafe left.
    pub left: bool,
    /// Strafe right.
    pub right: bool,
    /// Jump, or swim up.
    pub jump: bool,
    /// Sprint.
    pub sprint: bool,
    /// Sneak.
    pub sneak: bool,
}

impl Control {
    /// Only `forward` held.
    #[must_use]
    pub const fn forward() -> Self {
        Self {
            forward: true,
            back: false,
            left: false,
            right: false,
            jump: false,
            sprint: false,
            sneak: false,
        }
    }

    /// Net forward input is positive and the actor is not sneaking, so a
    /// held sprint key takes effect.
    #[must_use]
    pub const fn sprint_applies(&self) -> bool {
        self.sprint && self.forward && !self.back && !self.sneak
    }
}

/// State of the simulated actor.
///
/// Owned by the caller between ticks. Angles in radians are inputs only; the
/// `*_degrees` fields are what the movement code reads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "The flags are independent outputs of the collision step."
)]
pub struct ActorState {
    /// Feet position in block space.
    pub position: DVec3,
    /// Velocity in blocks per tick.
    pub velocity: DVec3,
    /// Yaw in radians; when present the degree projection is recomputed.
    pub yaw: Option<f64>,
    /// Pitch in radians; when present the degree projection is recomputed.
    pub pitch: Option<f64>,
    /// Yaw in the client's degree convention.
    pub yaw_degrees: f32,
    /// Pitch in the client's degree convention.
    pub pitch_degrees: f32,
    /// Standing on something after the last tick.
    pub on_ground: bool,
    /// Inside water after the last tick.
    pub in_water: bool,
    /// Inside lava after the last tick.
    pub in_lava: bool,
    /// Caught in a web; dampens the next collision step.
    pub in_cobweb: bool,
    /// Horizontal motion was blocked.
    pub collided_horizontally: bool,
    /// Vertical motion was blocked.
    pub collided_vertically: bool,
    /// Ticks until a held jump fires again.
    pub jump_ticks: u32,
    /// One-shot jump request, cleared every tick.
    pub jump_queued: bool,
    /// Held keys.
    pub control: Control,
    /// Jump boost effect level (amplifier + 1), zero when inactive.
    pub jump_boost_level: u8,
    /// Depth strider enchantment level.
    pub depth_strider_level: u8,
    /// Server-asserted movement speed; the client default when absent.
    pub movement_speed: Option<AttributeValue>,
}

impl ActorState {
    /// An actor standing still at `position`.
    #[must_use]
    pub fn at(position: DVec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Bounding box of an actor whose feet are at `position`.
    #[must_use]
    pub fn bounding_box_at(position: DVec3) -> Aabb {
        Aabb::new(
            -PLAYER_HALF_WIDTH,
            0.0,
            -PLAYER_HALF_WIDTH,
            PLAYER_HALF_WIDTH,
            PLAYER_HEIGHT,
            PLAYER_HALF_WIDTH,
        )
        .offset_by(position)
    }

    /// Current bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> Aabb {
        Self::bounding_box_at(self.position)
    }

    /// Reject states the engine cannot simulate.
    ///
    /// # Errors
    /// Returns [`PhysicsError::NonFinite`] naming the first NaN or infinite
    /// field, then [`PhysicsError::OutOfRange`] for a position component
    /// beyond [`MAX_COORDINATE`].
    pub fn validate(&self) -> Result<(), PhysicsError> {
        let checks = [
            ("position", self.position.is_finite()),
            ("velocity", self.velocity.is_finite()),
            ("yaw", self.yaw.map_or(true, f64::is_finite)),
            ("pitch", self.pitch.map_or(true, f64::is_finite)),
            ("yaw_degrees", self.yaw_degrees.is_finite()),
            ("pitch_degrees", self.pitch_degrees.is_finite()),
        ];
        if let Some((field, _)) = checks.into_iter().find(|(_, ok)| !ok) {
            return Err(PhysicsError::NonFinite { field });
        }
        let axes = [
            ("position.x", self.position.x),
            ("position.y", self.position.y),
            ("position.z", self.position.z),
        ];
        axes.into_iter()
            .find(|(_, v)| v.abs() > MAX_COORDINATE)
            .map_or(Ok(()), |(field, value)| {
                Err(PhysicsError::OutOfRange {
                    field,
                    value,
                    limit: MAX_COORDINATE,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn bounding_box_is_centred_on_feet() {
        let bb = ActorState::bounding_box_at(DVec3::new(0.5, 60.0, 0.5));
        let feet = bb.feet_position();
        assert_relative_eq!(feet.x, 0.5);
        assert_eq!(feet.y, 60.0);
        assert_relative_eq!(feet.z, 0.5);
        assert_relative_eq!(bb.max.y, 61.8);
    }

    #[test]
    fn validation_names_the_field() {
        let mut state = ActorState::at(DVec3::new(0.0, 64.0, 0.0));
        assert_eq!(state.validate(), Ok(()));
        state.velocity.y = f64::NAN;
        assert_eq!(
            state.validate(),
            Err(PhysicsError::NonFinite { field: "velocity" })
        );
    }

    #[rstest]
    #[case::far_below(DVec3::new(0.5, -3.0e9, 0.5), "position.y", -3.0e9)]
    #[case::far_east(DVec3::new(3.0e9, 64.0, 0.5), "position.x", 3.0e9)]
    #[case::just_past_limit(DVec3::new(0.5, 64.0, -1.000_000_1e9), "position.z", -1.000_000_1e9)]
    fn distant_positions_are_out_of_range(
        #[case] position: DVec3,
        #[case] field: &'static str,
        #[case] value: f64,
    ) {
        assert_eq!(
            ActorState::at(position).validate(),
            Err(PhysicsError::OutOfRange {
                field,
                value,
                limit: MAX_COORDINATE,
            })
        );
    }

    #[test]
    fn positions_at_the_limit_are_accepted() {
        let state = ActorState::at(DVec3::splat(-MAX_COORDINATE));
        assert_eq!(state.validate(), Ok(()));
    }

    #[test]
    fn sprint_needs_forward_without_sneak() {
        let mut control = Control::forward();
        control.sprint = true;
        assert!(control.sprint_applies());
        control.sneak = true;
        assert!(!control.sprint_applies());
    }
}
