//! Shapes that reach towards connectable neighbours.

use crate::geometry::Aabb;
use crate::world::Facing;

/// Which horizontal neighbours a cell connects to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "One flag per horizontal direction."
)]
pub(crate) struct Connections {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Connections {
    pub(crate) fn probe(mut connects: impl FnMut(Facing) -> bool) -> Self {
        Self {
            north: connects(Facing::North),
            east: connects(Facing::East),
            south: connects(Facing::South),
            west: connects(Facing::West),
        }
    }
}

const FENCE_POST: Aabb = Aabb::new(0.375, 0.0, 0.375, 0.625, 1.5, 0.625);
const FENCE_NORTH: Aabb = Aabb::new(0.375, 0.0, 0.0, 0.625, 1.5, 0.375);
const FENCE_EAST: Aabb = Aabb::new(0.625, 0.0, 0.375, 1.0, 1.5, 0.625);
const FENCE_SOUTH: Aabb = Aabb::new(0.375, 0.0, 0.625, 0.625, 1.5, 1.0);
const FENCE_WEST: Aabb = Aabb::new(0.0, 0.0, 0.375, 0.375, 1.5, 0.625);

const WALL_POST: Aabb = Aabb::new(0.25, 0.0, 0.25, 0.75, 1.5, 0.75);

const PANE_MIN: f64 = 7.0 / 16.0;
const PANE_MAX: f64 = 9.0 / 16.0;

/// A fence post plus one arm per connection.
pub(crate) fn fence_boxes(connections: Connections) -> Vec<Aabb> {
    let arms = [
        (connections.north, FENCE_NORTH),
        (connections.east, FENCE_EAST),
        (connections.south, FENCE_SOUTH),
        (connections.west, FENCE_WEST),
    ];
    std::iter::once(FENCE_POST)
        .chain(arms.into_iter().filter_map(|(on, arm)| on.then_some(arm)))
        .collect()
}

/// A wall post stretched to the edge of every connected side.
pub(crate) fn wall_boxes(connections: Connections) -> Vec<Aabb> {
    let mut wall = WALL_POST;
    if connections.north {
        wall.min.z = 0.0;
    }
    if connections.east {
        wall.max.x = 1.0;
    }
    if connections.south {
        wall.max.z = 1.0;
    }
    if connections.west {
        wall.min.x = 0.0;
    }
    vec![wall]
}

/// Span of one pane plane: the full width unless exactly one side connects.
fn pane_span(towards_min: bool, towards_max: bool) -> (f64, f64) {
    match (towards_min, towards_max) {
        (true, false) => (0.0, 0.5),
        (false, true) => (0.5, 1.0),
        _ => (0.0, 1.0),
    }
}

/// One thin plane per axis, each spanning towards its connected sides.
pub(crate) fn pane_boxes(connections: Connections) -> Vec<Aabb> {
    let (min_x, max_x) = pane_span(connections.west, connections.east);
    let (min_z, max_z) = pane_span(connections.north, connections.south);
    vec![
        Aabb::new(min_x, 0.0, PANE_MIN, max_x, 1.0, PANE_MAX),
        Aabb::new(PANE_MIN, 0.0, min_z, PANE_MAX, 1.0, max_z),
    ]
}
