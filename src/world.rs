//! The terrain interface the engine consumes.
//!
//! The engine never owns terrain. It asks a [`WorldPort`] for the cell at an
//! integer position and interprets the returned [`CellDescriptor`]. Answers
//! must stay consistent for the duration of one tick.

use glam::{DVec3, IVec3};
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::geometry::Aabb;
use crate::numeric::block_coord;

/// Source of terrain cells.
///
/// `None` means the cell is not loaded. Loaded empty space is a descriptor
/// with [`BoundaryKind::Empty`] and no boxes.
pub trait WorldPort {
    /// Look up the cell at `position`.
    fn get_cell(&self, position: IVec3) -> Option<CellDescriptor>;
}

impl<W: WorldPort + ?Sized> WorldPort for &W {
    fn get_cell(&self, position: IVec3) -> Option<CellDescriptor> {
        (**self).get_cell(position)
    }
}

/// How a cell interacts with movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryKind {
    /// Nothing to collide with.
    #[default]
    Empty,
    /// A full or partial solid obstacle.
    Solid,
    /// Collision boxes that do not fill the cell (plants, rails, open gates).
    Partial,
}

/// Static data for one terrain cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CellDescriptor {
    /// Registry id, classified through
    /// [`CellKindTable`](crate::cell_kind::CellKindTable).
    pub id: u32,
    /// Collision boxes in cell-local unit-cube coordinates.
    ///
    /// `None` means the source had no shape data for this cell.
    pub default_shape: Option<Vec<Aabb>>,
    /// Coarse collision class.
    pub boundary_kind: BoundaryKind,
    /// Block-state properties such as `facing`, `half`, `layers` or `level`.
    #[serde(default)]
    pub properties: HashMap<String, String>,
}

/// A horizontal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Towards -Z.
    North,
    /// Towards +X.
    East,
    /// Towards +Z.
    South,
    /// Towards -X.
    West,
}

impl Facing {
    /// All horizontal directions in clockwise order starting north.
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// Parse a block-state `facing` value.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "north" => Some(Self::North),
            "east" => Some(Self::East),
            "south" => Some(Self::South),
            "west" => Some(Self::West),
            _ => None,
        }
    }

    /// The block-state spelling of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        }
    }

    /// Unit offset to the neighbouring cell in this direction.
    #[must_use]
    pub const fn offset(self) -> IVec3 {
        match self {
            Self::North => IVec3::new(0, 0, -1),
            Self::East => IVec3::new(1, 0, 0),
            Self::South => IVec3::new(0, 0, 1),
            Self::West => IVec3::new(-1, 0, 0),
        }
    }

    /// The next direction clockwise seen from above.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    /// The next direction counter-clockwise seen from above.
    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::East => Self::North,
            Self::South => Self::East,
            Self::West => Self::South,
        }
    }

    /// Number of clockwise quarter turns from north.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::North => 0,
            Self::East => 1,
            Self::South => 2,
            Self::West => 3,
        }
    }
}

/// Vertical half of a stair or slab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Half {
    /// Occupies the lower half; the step rises above it.
    Bottom,
    /// Upside-down.
    Top,
}

impl CellDescriptor {
    /// Raw property value.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Parsed `facing` property.
    #[must_use]
    pub fn facing(&self) -> Option<Facing> {
        self.property("facing").and_then(Facing::parse)
    }

    /// Parsed `half` property; anything other than `top` is the bottom half.
    #[must_use]
    pub fn half(&self) -> Half {
        match self.property("half") {
            Some("top") => Half::Top,
            _ => Half::Bottom,
        }
    }

    /// Snow layer count.
    #[must_use]
    pub fn layers(&self) -> Option<u8> {
        self.property("layers").and_then(|v| v.parse().ok())
    }

    /// Liquid level, read from `level` or the legacy `metadata` value.
    #[must_use]
    pub fn level(&self) -> Option<u8> {
        self.property("level")
            .or_else(|| self.property("metadata"))
            .and_then(|v| v.parse().ok())
    }

    /// Whether a door, gate or trapdoor is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.property("open") == Some("true")
    }

    /// Whether the cell holds water alongside its own block.
    #[must_use]
    pub fn is_waterlogged(&self) -> bool {
        self.property("waterlogged") == Some("true")
    }

    /// Whether the cell stops movement through it.
    #[must_use]
    pub fn blocks_movement(&self) -> bool {
        self.boundary_kind != BoundaryKind::Empty
    }
}

/// The cell containing a block-space point.
#[must_use]
pub fn cell_at(point: DVec3) -> IVec3 {
    IVec3::new(block_coord(point.x), block_coord(point.y), block_coord(point.z))
}

/// Every cell from `lo` to `hi` inclusive, iterating Y, then Z, then X.
pub fn cells_between(lo: IVec3, hi: IVec3) -> impl Iterator<Item = IVec3> {
    (lo.y..=hi.y).flat_map(move |y| {
        (lo.z..=hi.z).flat_map(move |z| (lo.x..=hi.x).map(move |x| IVec3::new(x, y, z)))
    })
}

/// Every cell a box touches.
pub fn cells_in(aabb: &Aabb) -> impl Iterator<Item = IVec3> {
    cells_between(cell_at(aabb.min), cell_at(aabb.max))
}
