//! A `WorldPort` over an in-memory grid.

use blockmotion::{CellDescriptor, WorldPort};
use glam::IVec3;
use hashbrown::HashMap;

/// What a [`GridWorld`] answers for cells nobody placed.
#[derive(Clone, Debug)]
enum Fallback {
    /// Every unplaced cell is unloaded.
    Unloaded,
    /// `ground` below `surface`, `above` from it upwards.
    Layered {
        surface: i32,
        ground: CellDescriptor,
        above: CellDescriptor,
    },
}

/// Explicitly placed cells over a layered background.
#[derive(Clone, Debug)]
pub struct GridWorld {
    cells: HashMap<IVec3, CellDescriptor>,
    fallback: Fallback,
}

impl GridWorld {
    /// Nothing loaded anywhere.
    ///
    /// # Examples
    /// ```
    /// use blockmotion::WorldPort;
    /// use glam::IVec3;
    /// use test_utils::GridWorld;
    /// assert!(GridWorld::unloaded().get_cell(IVec3::ZERO).is_none());
    /// ```
    #[must_use]
    pub fn unloaded() -> Self {
        Self {
            cells: HashMap::new(),
            fallback: Fallback::Unloaded,
        }
    }

    /// `ground` below `surface`, air from `surface` up.
    #[must_use]
    pub fn flat(surface: i32, ground: CellDescriptor) -> Self {
        Self::layered(surface, ground, crate::palette::air())
    }

    /// `ground` below `surface`, `above` from `surface` up.
    #[must_use]
    pub fn layered(surface: i32, ground: CellDescriptor, above: CellDescriptor) -> Self {
        Self {
            cells: HashMap::new(),
            fallback: Fallback::Layered {
                surface,
                ground,
                above,
            },
        }
    }

    /// Place `cell` at `position`, replacing the background.
    #[must_use]
    pub fn with(mut self, position: IVec3, cell: CellDescriptor) -> Self {
        self.set(position, cell);
        self
    }

    /// Place `cell` at `position`.
    pub fn set(&mut self, position: IVec3, cell: CellDescriptor) {
        self.cells.insert(position, cell);
    }

    /// Fill every cell from `lo` to `hi` inclusive with `cell`.
    pub fn fill(&mut self, lo: IVec3, hi: IVec3, cell: &CellDescriptor) {
        for y in lo.y..=hi.y {
            for z in lo.z..=hi.z {
                for x in lo.x..=hi.x {
                    self.set(IVec3::new(x, y, z), cell.clone());
                }
            }
        }
    }
}

impl WorldPort for GridWorld {
    fn get_cell(&self, position: IVec3) -> Option<CellDescriptor> {
        if let Some(cell) = self.cells.get(&position) {
            return Some(cell.clone());
        }
        match &self.fallback {
            Fallback::Unloaded => None,
            Fallback::Layered {
                surface,
                ground,
                above,
            } => Some(if position.y < *surface {
                ground.clone()
            } else {
                above.clone()
            }),
        }
    }
}
