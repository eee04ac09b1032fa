//! Stair classification and box tables.
//!
//! Footprints are tabulated for a north-facing stair and rotated clockwise a
//! quarter turn per step of facing. Coordinates are all multiples of one half,
//! so the rotation is exact.

use crate::geometry::Aabb;
use crate::world::{Facing, Half};

/// Shape of a stair after looking at its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StairShape {
    /// A plain step across the full width.
    Straight,
    /// Concave corner with the extra quarter on the left.
    InnerLeft,
    /// Concave corner with the extra quarter on the right.
    InnerRight,
    /// Convex corner keeping only the left quarter.
    OuterLeft,
    /// Convex corner keeping only the right quarter.
    OuterRight,
}

impl StairShape {
    /// All shapes.
    pub const ALL: [Self; 5] = [
        Self::Straight,
        Self::InnerLeft,
        Self::InnerRight,
        Self::OuterLeft,
        Self::OuterRight,
    ];

    /// Classify a stair facing `facing` from the facings of same-half stairs
    /// directly ahead of and behind it.
    ///
    /// A stair ahead turned across this one makes an outer corner; failing
    /// that, a stair behind turned across makes an inner corner.
    #[must_use]
    pub fn classify(facing: Facing, ahead: Option<Facing>, behind: Option<Facing>) -> Self {
        match ahead {
            Some(f) if f == facing.counter_clockwise() => return Self::OuterLeft,
            Some(f) if f == facing.clockwise() => return Self::OuterRight,
            _ => {}
        }
        match behind {
            Some(f) if f == facing.counter_clockwise() => Self::InnerLeft,
            Some(f) if f == facing.clockwise() => Self::InnerRight,
            _ => Self::Straight,
        }
    }

    /// The same shape seen in a mirror.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Straight => Self::Straight,
            Self::InnerLeft => Self::InnerRight,
            Self::InnerRight => Self::InnerLeft,
            Self::OuterLeft => Self::OuterRight,
            Self::OuterRight => Self::OuterLeft,
        }
    }

    /// Step footprints of a north-facing stair as `[min_x, min_z, max_x, max_z]`.
    const fn north_footprints(self) -> &'static [[f64; 4]] {
        match self {
            Self::Straight => &[[0.0, 0.0, 1.0, 0.5]],
            Self::OuterLeft => &[[0.0, 0.0, 0.5, 0.5]],
            Self::OuterRight => &[[0.5, 0.0, 1.0, 0.5]],
            Self::InnerLeft => &[[0.0, 0.0, 1.0, 0.5], [0.0, 0.5, 0.5, 1.0]],
            Self::InnerRight => &[[0.0, 0.0, 1.0, 0.5], [0.5, 0.5, 1.0, 1.0]],
        }
    }
}

/// Rotate a footprint a quarter turn clockwise about the cell centre.
const fn rotate_clockwise([min_x, min_z, max_x, max_z]: [f64; 4]) -> [f64; 4] {
    [1.0 - max_z, min_x, 1.0 - min_z, max_x]
}

/// Collision boxes of a stair: the slab plus its step.
#[must_use]
pub fn stair_boxes(shape: StairShape, facing: Facing, half: Half) -> Vec<Aabb> {
    let (slab, step) = match half {
        Half::Bottom => ((0.0, 0.5), (0.5, 1.0)),
        Half::Top => ((0.5, 1.0), (0.0, 0.5)),
    };
    let mut boxes = vec![Aabb::new(0.0, slab.0, 0.0, 1.0, slab.1, 1.0)];
    for footprint in shape.north_footprints() {
        let mut rotated = *footprint;
        for _ in 0..facing.quarter_turns() {
            rotated = rotate_clockwise(rotated);
        }
        let [min_x, min_z, max_x, max_z] = rotated;
        boxes.push(Aabb::new(min_x, step.0, min_z, max_x, step.1, max_z));
    }
    boxes
}
