//! Collision shapes of terrain cells.
//!
//! Most cells collide with the static boxes their descriptor carries. Stairs,
//! fences, walls, panes and stacked snow depend on their neighbours, so the
//! [`ShapeResolver`] re-derives them on every query. Nothing is cached: a
//! neighbour may change between ticks.

mod connect;
mod stairs;

use glam::IVec3;
use log::warn;

use crate::cell_kind::{CellKind, CellKindTable};
use crate::constants::MAX_SNOW_LAYERS;
use crate::geometry::Aabb;
use crate::world::{cell_at, cells_between, BoundaryKind, CellDescriptor, WorldPort};

pub use stairs::{stair_boxes, StairShape};

/// The boxes of one cell in cell-local unit-cube coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CellShape {
    /// Cell the shape belongs to.
    pub position: IVec3,
    /// Local boxes; empty for cells without collision.
    pub boxes: Vec<Aabb>,
}

impl CellShape {
    /// The boxes translated into block space.
    pub fn world_boxes(&self) -> impl Iterator<Item = Aabb> + '_ {
        let origin = self.position.as_dvec3();
        self.boxes.iter().map(move |b| b.offset_by(origin))
    }
}

/// Resolves cell shapes against a version's cell-kind table.
#[derive(Debug, Clone, Copy)]
pub struct ShapeResolver<'a> {
    kinds: &'a CellKindTable,
}

impl<'a> ShapeResolver<'a> {
    /// Borrow a cell-kind table for resolution.
    #[must_use]
    pub const fn new(kinds: &'a CellKindTable) -> Self {
        Self { kinds }
    }

    /// Kind of a cell descriptor.
    #[must_use]
    pub fn kind_of(&self, cell: &CellDescriptor) -> CellKind {
        self.kinds.kind_of(cell.id)
    }

    /// Kind of the cell at `position`, if loaded.
    pub fn kind_at<W: WorldPort + ?Sized>(&self, world: &W, position: IVec3) -> Option<CellKind> {
        world.get_cell(position).map(|cell| self.kind_of(&cell))
    }

    /// Derive the shape of `cell`, found at `position`.
    pub fn resolve<W: WorldPort + ?Sized>(
        &self,
        world: &W,
        position: IVec3,
        cell: &CellDescriptor,
    ) -> CellShape {
        let boxes = match self.kind_of(cell) {
            CellKind::Stairs => self.stairs(world, position, cell),
            CellKind::Fence => connect::fence_boxes(self.connections(world, position, |kind| {
                matches!(kind, CellKind::Fence | CellKind::FenceGate)
            })),
            CellKind::Wall => connect::wall_boxes(self.connections(world, position, |kind| {
                matches!(kind, CellKind::Wall | CellKind::FenceGate)
            })),
            CellKind::Pane => connect::pane_boxes(self.pane_connections(world, position)),
            CellKind::SnowLayer => self.snow(world, position, cell),
            _ => static_shape(position, cell),
        };
        CellShape { position, boxes }
    }

    /// Every block-space box of the cells around `query` that strictly
    /// intersects it.
    ///
    /// Cells are visited from one below the query's floor to its top, Y then
    /// Z then X, so tall shapes such as fences rising into the query are
    /// found.
    pub fn collision_boxes<W: WorldPort + ?Sized>(&self, world: &W, query: &Aabb) -> Vec<Aabb> {
        let lo = cell_at(query.min).saturating_sub(IVec3::Y);
        let hi = cell_at(query.max);
        let mut boxes = Vec::new();
        for position in cells_between(lo, hi) {
            let Some(cell) = world.get_cell(position) else {
                continue;
            };
            let shape = self.resolve(world, position, &cell);
            boxes.extend(shape.world_boxes().filter(|b| b.intersects(query)));
        }
        boxes
    }

    /// Whether any cell shape strictly intersects `query`.
    pub fn any_collision<W: WorldPort + ?Sized>(&self, world: &W, query: &Aabb) -> bool {
        !self.collision_boxes(world, query).is_empty()
    }

    fn stairs<W: WorldPort + ?Sized>(
        &self,
        world: &W,
        position: IVec3,
        cell: &CellDescriptor,
    ) -> Vec<Aabb> {
        let Some(facing) = cell.facing() else {
            warn!("stair at {position} has no facing; using its static shape");
            return static_shape(position, cell);
        };
        let half = cell.half();
        let neighbour = |offset: IVec3| {
            world
                .get_cell(position.saturating_add(offset))
                .filter(|n| self.kind_of(n) == CellKind::Stairs && n.half() == half)
                .and_then(|n| n.facing())
        };
        let shape = StairShape::classify(
            facing,
            neighbour(facing.offset()),
            neighbour(-facing.offset()),
        );
        stair_boxes(shape, facing, half)
    }

    fn connections<W, F>(&self, world: &W, position: IVec3, connects: F) -> connect::Connections
    where
        W: WorldPort + ?Sized,
        F: Fn(CellKind) -> bool,
    {
        connect::Connections::probe(|facing| {
            self.kind_at(world, position.saturating_add(facing.offset()))
                .is_some_and(&connects)
        })
    }

    fn pane_connections<W: WorldPort + ?Sized>(
        &self,
        world: &W,
        position: IVec3,
    ) -> connect::Connections {
        connect::Connections::probe(|facing| {
            world
                .get_cell(position.saturating_add(facing.offset()))
                .is_some_and(|n| match self.kind_of(&n) {
                    CellKind::Pane => true,
                    CellKind::Other => n.boundary_kind == BoundaryKind::Solid,
                    _ => false,
                })
        })
    }

    fn snow<W: WorldPort + ?Sized>(
        &self,
        world: &W,
        position: IVec3,
        cell: &CellDescriptor,
    ) -> Vec<Aabb> {
        let full = |c: &CellDescriptor| c.layers() == Some(MAX_SNOW_LAYERS);
        let stacked = full(cell)
            && world
                .get_cell(position.saturating_add(IVec3::Y))
                .is_some_and(|above| self.kind_of(&above) == CellKind::SnowLayer && full(&above));
        if stacked {
            vec![Aabb::UNIT]
        } else {
            static_shape(position, cell)
        }
    }
}

/// The descriptor's own boxes.
///
/// A cell that should collide but carries no shape data becomes a unit cube;
/// empty cells without data simply have no boxes.
fn static_shape(position: IVec3, cell: &CellDescriptor) -> Vec<Aabb> {
    match &cell.default_shape {
        Some(boxes) => boxes.clone(),
        None if cell.boundary_kind == BoundaryKind::Empty => Vec::new(),
        None => {
            warn!(
                "cell {} at {position} has no shape data; substituting a unit cube",
                cell.id
            );
            vec![Aabb::UNIT]
        }
    }
}

#[cfg(test)]
mod tests;
