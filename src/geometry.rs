//! Axis-aligned boxes and the per-axis sweep used by collision.
//!
//! All operations return new values; an [`Aabb`] is a plain `Copy` value and
//! never aliases another box. Every arithmetic step is a single `f64`
//! operation per component, so results match the client's box code exactly.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// East/west.
    X,
    /// Up/down.
    Y,
    /// North/south.
    Z,
}

impl Axis {
    /// Component of `vector` along this axis.
    #[must_use]
    pub const fn of(self, vector: DVec3) -> f64 {
        match self {
            Self::X => vector.x,
            Self::Y => vector.y,
            Self::Z => vector.z,
        }
    }

    /// `vector` with its component along this axis replaced.
    #[must_use]
    pub const fn with(self, vector: DVec3, value: f64) -> DVec3 {
        match self {
            Self::X => DVec3::new(value, vector.y, vector.z),
            Self::Y => DVec3::new(vector.x, value, vector.z),
            Self::Z => DVec3::new(vector.x, vector.y, value),
        }
    }
}

/// Resolution order of the collision step.
///
/// Vertical motion resolves first so horizontal motion is tested against the
/// box after it has risen or fallen.
pub const RESOLUTION_ORDER: [Axis; 3] = [Axis::Y, Axis::X, Axis::Z];

/// An axis-aligned bounding box with `min <= max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Lower corner.
    pub min: DVec3,
    /// Upper corner.
    pub max: DVec3,
}

impl Aabb {
    /// The unit cube in cell-local coordinates.
    pub const UNIT: Self = Self::new(0.0, 0.0, 0.0, 1.0, 1.0, 1.0);

    /// Build a box from its six bounds.
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) -> Self {
        Self {
            min: DVec3::new(min_x, min_y, min_z),
            max: DVec3::new(max_x, max_y, max_z),
        }
    }

    /// Translate the box.
    #[must_use]
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(
            self.min.x + dx,
            self.min.y + dy,
            self.min.z + dz,
            self.max.x + dx,
            self.max.y + dy,
            self.max.z + dz,
        )
    }

    /// Translate the box by a vector.
    #[must_use]
    pub fn offset_by(&self, delta: DVec3) -> Self {
        self.offset(delta.x, delta.y, delta.z)
    }

    /// Stretch the box along a motion: negative deltas move the minimum,
    /// positive deltas move the maximum.
    #[must_use]
    pub fn extend(&self, dx: f64, dy: f64, dz: f64) -> Self {
        let mut out = *self;
        if dx < 0.0 {
            out.min.x += dx;
        } else {
            out.max.x += dx;
        }
        if dy < 0.0 {
            out.min.y += dy;
        } else {
            out.max.y += dy;
        }
        if dz < 0.0 {
            out.min.z += dz;
        } else {
            out.max.z += dz;
        }
        out
    }

    /// Grow the box symmetrically by the given margins.
    #[must_use]
    pub fn expand(&self, x: f64, y: f64, z: f64) -> Self {
        Self::new(
            self.min.x - x,
            self.min.y - y,
            self.min.z - z,
            self.max.x + x,
            self.max.y + y,
            self.max.z + z,
        )
    }

    /// Shrink the box symmetrically by the given margins.
    #[must_use]
    pub fn contract(&self, x: f64, y: f64, z: f64) -> Self {
        let out = Self::new(
            self.min.x + x,
            self.min.y + y,
            self.min.z + z,
            self.max.x - x,
            self.max.y - y,
            self.max.z - z,
        );
        debug_assert!(out.min.cmple(out.max).all(), "contracted past zero extent");
        out
    }

    /// Whether the interiors of the boxes overlap. Touching faces do not.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
            && self.min.z < other.max.z
            && self.max.z > other.min.z
    }

    /// Centre of the footprint with the bottom face's height.
    ///
    /// This is the actor position a box of the actor's shape corresponds to.
    #[must_use]
    pub fn feet_position(&self) -> DVec3 {
        DVec3::new(
            (self.min.x + self.max.x) / 2.0,
            self.min.y,
            (self.min.z + self.max.z) / 2.0,
        )
    }

    /// Clip `dx` so `moving` stops at this obstacle's face.
    ///
    /// Returns `dx` unchanged when the boxes do not overlap on Y and Z or when
    /// `moving` is not on the side the motion approaches from.
    #[must_use]
    pub fn compute_offset_x(&self, moving: &Self, dx: f64) -> f64 {
        let overlaps = moving.max.y > self.min.y
            && moving.min.y < self.max.y
            && moving.max.z > self.min.z
            && moving.min.z < self.max.z;
        if !overlaps {
            return dx;
        }
        if dx > 0.0 && moving.max.x <= self.min.x {
            dx.min(self.min.x - moving.max.x)
        } else if dx < 0.0 && moving.min.x >= self.max.x {
            dx.max(self.max.x - moving.min.x)
        } else {
            dx
        }
    }

    /// Clip `dy` so `moving` stops at this obstacle's face.
    #[must_use]
    pub fn compute_offset_y(&self, moving: &Self, dy: f64) -> f64 {
        let overlaps = moving.max.x > self.min.x
            && moving.min.x < self.max.x
            && moving.max.z > self.min.z
            && moving.min.z < self.max.z;
        if !overlaps {
            return dy;
        }
        if dy > 0.0 && moving.max.y <= self.min.y {
            dy.min(self.min.y - moving.max.y)
        } else if dy < 0.0 && moving.min.y >= self.max.y {
            dy.max(self.max.y - moving.min.y)
        } else {
            dy
        }
    }

    /// Clip `dz` so `moving` stops at this obstacle's face.
    #[must_use]
    pub fn compute_offset_z(&self, moving: &Self, dz: f64) -> f64 {
        let overlaps = moving.max.x > self.min.x
            && moving.min.x < self.max.x
            && moving.max.y > self.min.y
            && moving.min.y < self.max.y;
        if !overlaps {
            return dz;
        }
        if dz > 0.0 && moving.max.z <= self.min.z {
            dz.min(self.min.z - moving.max.z)
        } else if dz < 0.0 && moving.min.z >= self.max.z {
            dz.max(self.max.z - moving.min.z)
        } else {
            dz
        }
    }

    /// Clip `delta` along `axis` so `moving` stops at this obstacle.
    #[must_use]
    pub fn compute_axis_offset(&self, moving: &Self, axis: Axis, delta: f64) -> f64 {
        match axis {
            Axis::X => self.compute_offset_x(moving, delta),
            Axis::Y => self.compute_offset_y(moving, delta),
            Axis::Z => self.compute_offset_z(moving, delta),
        }
    }
}

/// Resolve `delta` along `axis` against every obstacle in turn.
#[must_use]
pub fn sweep_axis(obstacles: &[Aabb], moving: &Aabb, axis: Axis, delta: f64) -> f64 {
    obstacles
        .iter()
        .fold(delta, |allowed, obstacle| obstacle.compute_axis_offset(moving, axis, allowed))
}

/// Translate `aabb` by `delta` along `axis`.
#[must_use]
pub fn offset_along(aabb: &Aabb, axis: Axis, delta: f64) -> Aabb {
    match axis {
        Axis::X => aabb.offset(delta, 0.0, 0.0),
        Axis::Y => aabb.offset(0.0, delta, 0.0),
        Axis::Z => aabb.offset(0.0, 0.0, delta),
    }
}
