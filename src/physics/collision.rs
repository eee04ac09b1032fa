//! The collision step shared by every movement mode.
//!
//! Motion resolves one axis at a time against the boxes around the swept
//! volume. A grounded actor blocked horizontally also tries the same motion
//! raised by the step height and keeps whichever attempt travels further.

use glam::{DVec3, IVec3};

use super::Tick;
use crate::cell_kind::CellKind;
use crate::constants::{
    CONTACT_MARGIN, LANDING_PROBE_DEPTH, SNEAK_EDGE_STEP, SNEAK_PROBE_DEPTH, SOUL_SAND_SPEED,
    STEP_HEIGHT, WEB_HORIZONTAL_FACTOR, WEB_VERTICAL_FACTOR,
};
use crate::geometry::{offset_along, sweep_axis, Aabb, Axis, RESOLUTION_ORDER};
use crate::world::{cell_at, cells_in, WorldPort};

/// A box and the motion it actually made.
///
/// Every attempt owns its own copy; choosing between attempts moves one out.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Trajectory {
    aabb: Aabb,
    delta: DVec3,
}

impl Trajectory {
    /// Resolve `delta` from `start` one axis at a time.
    fn sweep(obstacles: &[Aabb], start: Aabb, delta: DVec3) -> Self {
        RESOLUTION_ORDER
            .into_iter()
            .fold(Self { aabb: start, delta }, |acc, axis| acc.advance(obstacles, axis))
    }

    /// Resolve this trajectory's own component along `axis`.
    fn advance(self, obstacles: &[Aabb], axis: Axis) -> Self {
        let allowed = sweep_axis(obstacles, &self.aabb, axis, axis.of(self.delta));
        Self {
            aabb: offset_along(&self.aabb, axis, allowed),
            delta: axis.with(self.delta, allowed),
        }
    }

    fn horizontal_sq(&self) -> f64 {
        self.delta.x * self.delta.x + self.delta.z * self.delta.z
    }
}

/// Shorten a sneaking displacement by one step towards zero.
fn retract(delta: f64) -> f64 {
    if delta < SNEAK_EDGE_STEP && delta >= -SNEAK_EDGE_STEP {
        0.0
    } else if delta > 0.0 {
        delta - SNEAK_EDGE_STEP
    } else {
        delta + SNEAK_EDGE_STEP
    }
}

impl<W: WorldPort + ?Sized> Tick<'_, W> {
    /// Move the actor by `requested`, stopping at obstacles.
    ///
    /// Updates position, the collision flags and `on_ground`, zeroes blocked
    /// velocity components and applies the effects of the cells touched.
    #[expect(
        clippy::float_cmp,
        reason = "A component is blocked exactly when the sweep changed it."
    )]
    pub(super) fn move_by(&mut self, requested: DVec3) {
        let mut delta = requested;
        if self.state.in_cobweb {
            self.state.in_cobweb = false;
            delta.x *= WEB_HORIZONTAL_FACTOR;
            delta.y *= f64::from(WEB_VERTICAL_FACTOR);
            delta.z *= WEB_HORIZONTAL_FACTOR;
            self.state.velocity = DVec3::ZERO;
        }

        let start = self.state.bounding_box();
        let wanted = if self.state.control.sneak && self.state.on_ground {
            self.keep_off_edges(&start, delta)
        } else {
            delta
        };

        let obstacles = self
            .shapes
            .collision_boxes(self.world, &start.extend(wanted.x, wanted.y, wanted.z));
        let mut outcome = Trajectory::sweep(&obstacles, start, wanted);

        let can_step = self.state.on_ground || (outcome.delta.y != wanted.y && wanted.y < 0.0);
        let blocked = outcome.delta.x != wanted.x || outcome.delta.z != wanted.z;
        if can_step && blocked {
            let stepped = self.step_up(&start, wanted);
            if stepped.horizontal_sq() > outcome.horizontal_sq() {
                outcome = stepped;
            }
        }

        self.state.position = outcome.aabb.feet_position();
        let resolved = outcome.delta;
        self.state.collided_horizontally = resolved.x != wanted.x || resolved.z != wanted.z;
        self.state.collided_vertically = resolved.y != wanted.y;
        self.state.on_ground = self.state.collided_vertically && wanted.y < 0.0;

        if resolved.x != wanted.x {
            self.state.velocity.x = 0.0;
        }
        if resolved.z != wanted.z {
            self.state.velocity.z = 0.0;
        }
        if self.state.collided_vertically {
            self.land();
        }

        self.touch_cells();
    }

    /// Retract the horizontal motion of a sneaking actor until the box it
    /// would occupy still has ground under it.
    fn keep_off_edges(&self, start: &Aabb, delta: DVec3) -> DVec3 {
        let supported = |dx: f64, dz: f64| {
            let probe = start.offset(dx, SNEAK_PROBE_DEPTH, dz);
            self.shapes.any_collision(self.world, &probe)
        };
        let mut out = delta;
        while out.x != 0.0 && !supported(out.x, 0.0) {
            out.x = retract(out.x);
        }
        while out.z != 0.0 && !supported(0.0, out.z) {
            out.z = retract(out.z);
        }
        while out.x != 0.0 && out.z != 0.0 && !supported(out.x, out.z) {
            out.x = retract(out.x);
            out.z = retract(out.z);
        }
        out
    }

    /// Best of the two raised attempts, settled back onto whatever lies
    /// below it.
    fn step_up(&self, start: &Aabb, wanted: DVec3) -> Trajectory {
        let rise = f64::from(STEP_HEIGHT);
        let obstacles = self
            .shapes
            .collision_boxes(self.world, &start.extend(wanted.x, rise, wanted.z));

        let raised = |clearance: &Aabb| {
            let lift = sweep_axis(&obstacles, clearance, Axis::Y, rise);
            let lifted = Trajectory {
                aabb: start.offset(0.0, lift, 0.0),
                delta: DVec3::new(wanted.x, lift, wanted.z),
            };
            lifted
                .advance(&obstacles, Axis::X)
                .advance(&obstacles, Axis::Z)
        };
        let across = raised(&start.extend(wanted.x, 0.0, wanted.z));
        let straight = raised(start);
        let chosen = if across.horizontal_sq() > straight.horizontal_sq() {
            across
        } else {
            straight
        };

        let settle = sweep_axis(&obstacles, &chosen.aabb, Axis::Y, -chosen.delta.y);
        Trajectory {
            aabb: chosen.aabb.offset(0.0, settle, 0.0),
            delta: DVec3::new(chosen.delta.x, settle, chosen.delta.z),
        }
    }

    /// React to a vertical collision according to the cell under the feet.
    fn land(&mut self) {
        let bounces = self.landing_kind() == Some(CellKind::Slime) && !self.state.control.sneak;
        if !bounces {
            self.state.velocity.y = 0.0;
        } else if self.state.velocity.y < 0.0 {
            self.state.velocity.y = -self.state.velocity.y;
        }
    }

    /// Kind of the cell the actor stands on.
    ///
    /// Fences, walls and gates reach into the cell above them, so an empty
    /// cell over one of them reports the post instead.
    fn landing_kind(&self) -> Option<CellKind> {
        let probe = self.state.position - DVec3::new(0.0, f64::from(LANDING_PROBE_DEPTH), 0.0);
        let feet = cell_at(probe);
        let kind = self.shapes.kind_at(self.world, feet);
        if matches!(kind, None | Some(CellKind::Air)) {
            let below = self.shapes.kind_at(self.world, feet.saturating_sub(IVec3::Y));
            if below.is_some_and(CellKind::is_tall_post) {
                return below;
            }
        }
        kind
    }

    /// Soul sand slows the actor; a web catches it for the next move.
    fn touch_cells(&mut self) {
        let contact = self
            .state
            .bounding_box()
            .contract(CONTACT_MARGIN, CONTACT_MARGIN, CONTACT_MARGIN);
        for position in cells_in(&contact) {
            match self.shapes.kind_at(self.world, position) {
                Some(CellKind::SoulSand) => {
                    self.state.velocity.x *= SOUL_SAND_SPEED;
                    self.state.velocity.z *= SOUL_SAND_SPEED;
                }
                Some(CellKind::Cobweb) => self.state.in_cobweb = true,
                _ => {}
            }
        }
    }
}
