//! Liquid membership and water current.

use glam::{DVec3, IVec3};

use super::Tick;
use crate::cell_kind::CellKind;
use crate::constants::{FALLING_LIQUID_LEVEL, FALLING_WATER_PULL, LIQUID_LEVELS, WATER_FLOW_SCALE};
use crate::geometry::Aabb;
use crate::numeric::block_coord;
use crate::vector_math::{vec_length, vec_normalize};
use crate::world::{cells_in, BoundaryKind, CellDescriptor, Facing, WorldPort};

/// Height of a cell's floor as the client's `float`.
#[expect(
    clippy::cast_precision_loss,
    reason = "Cell heights stay far inside the exactly representable range."
)]
fn cell_floor(y: i32) -> f32 {
    y as f32
}

impl<W: WorldPort + ?Sized> Tick<'_, W> {
    /// Report whether `region` touches water and push the actor along the
    /// combined current of every water cell it touches.
    pub(super) fn apply_water_current(&mut self, region: &Aabb) -> bool {
        let reach = f64::from(block_coord(region.max.y + 1.0));
        let mut in_water = false;
        let mut current = DVec3::ZERO;
        for position in cells_in(region) {
            let Some(cell) = self.world.get_cell(position) else {
                continue;
            };
            let Some(depth) = self.water_depth(&cell) else {
                continue;
            };
            let surface = cell_floor(position.y.saturating_add(1)) - f32::from(depth + 1) / LIQUID_LEVELS;
            if reach >= f64::from(surface) {
                in_water = true;
                current += self.flow_at(position, &cell, depth);
            }
        }
        if vec_length(current) > 0.0 {
            self.state.velocity += vec_normalize(current) * WATER_FLOW_SCALE;
        }
        in_water
    }

    /// Rendered depth of a water cell, zero at the source; `None` when the
    /// cell holds no water.
    fn water_depth(&self, cell: &CellDescriptor) -> Option<u8> {
        if cell.is_waterlogged() {
            return Some(0);
        }
        if self.shapes.kind_of(cell) != CellKind::Water {
            return None;
        }
        let level = cell.level().unwrap_or(0);
        Some(if level >= FALLING_LIQUID_LEVEL { 0 } else { level })
    }

    /// Unit direction water in the cell at `position` flows.
    fn flow_at(&self, position: IVec3, cell: &CellDescriptor, depth: u8) -> DVec3 {
        let own = i32::from(depth);
        let mut flow = DVec3::ZERO;
        for facing in Facing::ALL {
            let side = position.saturating_add(facing.offset());
            let neighbour = self.world.get_cell(side);
            let weight = neighbour
                .as_ref()
                .and_then(|n| self.water_depth(n))
                .map(|d| i32::from(d) - own)
                .or_else(|| {
                    if neighbour
                        .as_ref()
                        .is_some_and(CellDescriptor::blocks_movement)
                    {
                        return None;
                    }
                    self.world
                        .get_cell(side.saturating_sub(IVec3::Y))
                        .and_then(|below| self.water_depth(&below))
                        .map(|d| i32::from(d) - (own - i32::from(FALLING_LIQUID_LEVEL)))
                });
            if let Some(w) = weight {
                flow += facing.offset().as_dvec3() * f64::from(w);
            }
        }
        if cell.level().is_some_and(|l| l >= FALLING_LIQUID_LEVEL) && self.is_walled_in(position) {
            flow = vec_normalize(flow) + DVec3::new(0.0, FALLING_WATER_PULL, 0.0);
        }
        vec_normalize(flow)
    }

    fn is_walled_in(&self, position: IVec3) -> bool {
        let solid = |at: IVec3| {
            self.world
                .get_cell(at)
                .is_some_and(|c| c.boundary_kind == BoundaryKind::Solid)
        };
        Facing::ALL.into_iter().any(|facing| {
            let side = position.saturating_add(facing.offset());
            solid(side) || solid(side.saturating_add(IVec3::Y))
        })
    }

    /// Whether any cell touching `region` is of `kind`.
    pub(super) fn contains_kind(&self, region: &Aabb, kind: CellKind) -> bool {
        cells_in(region).any(|p| self.shapes.kind_at(self.world, p) == Some(kind))
    }

    fn contains_liquid(&self, region: &Aabb) -> bool {
        cells_in(region).any(|p| {
            self.world.get_cell(p).is_some_and(|cell| {
                cell.is_waterlogged() || self.shapes.kind_of(&cell).is_liquid()
            })
        })
    }

    /// Whether `region` is free of both collision boxes and liquid.
    pub(super) fn is_clear(&self, region: &Aabb) -> bool {
        !self.shapes.any_collision(self.world, region) && !self.contains_liquid(region)
    }
}
