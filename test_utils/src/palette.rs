//! A fixed block palette and the engine configuration that classifies it.

use blockmotion::{
    Aabb, BoundaryKind, CellDescriptor, CellKindTable, EngineConfig, Facing, FeatureFlags, Half,
    LiquidGravity, Physics,
};

pub const AIR: u32 = 0;
pub const STONE: u32 = 1;
pub const WATER: u32 = 9;
pub const LAVA: u32 = 11;
pub const WEB: u32 = 30;
pub const OAK_STAIRS: u32 = 53;
pub const LADDER: u32 = 65;
pub const SNOW_LAYER: u32 = 78;
pub const ICE: u32 = 79;
pub const OAK_FENCE: u32 = 85;
pub const TRAPDOOR: u32 = 96;
pub const SOUL_SAND: u32 = 88;
pub const GLASS_PANE: u32 = 102;
pub const COBBLESTONE_WALL: u32 = 139;
pub const SLIME: u32 = 165;

/// Registry names of every palette id.
pub const NAMES: [(u32, &str); 15] = [
    (AIR, "air"),
    (STONE, "stone"),
    (WATER, "water"),
    (LAVA, "lava"),
    (WEB, "web"),
    (OAK_STAIRS, "oak_stairs"),
    (LADDER, "ladder"),
    (SNOW_LAYER, "snow_layer"),
    (ICE, "ice"),
    (OAK_FENCE, "oak_fence"),
    (TRAPDOOR, "trapdoor"),
    (SOUL_SAND, "soul_sand"),
    (GLASS_PANE, "glass_pane"),
    (COBBLESTONE_WALL, "cobblestone_wall"),
    (SLIME, "slime"),
];

/// Cell-kind table for the palette.
#[must_use]
pub fn kinds() -> CellKindTable {
    CellKindTable::from_names(NAMES)
}

/// Engine configuration for the palette with the given liquid gravity.
#[must_use]
pub fn config(gravity: LiquidGravity) -> EngineConfig {
    let features = FeatureFlags {
        liquid_gravity: Some(gravity),
        ..FeatureFlags::default()
    };
    EngineConfig::new(features, kinds())
}

/// An engine for the palette.
///
/// # Panics
/// Never; the configuration always selects a liquid gravity.
#[must_use]
pub fn engine(gravity: LiquidGravity) -> Physics {
    Physics::new(config(gravity)).unwrap_or_else(|e| panic!("palette config rejected: {e}"))
}

fn cell(id: u32, boundary_kind: BoundaryKind, boxes: Vec<Aabb>) -> CellDescriptor {
    CellDescriptor {
        id,
        default_shape: Some(boxes),
        boundary_kind,
        ..CellDescriptor::default()
    }
}

fn with_props(mut cell: CellDescriptor, props: &[(&str, &str)]) -> CellDescriptor {
    cell.properties = props
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    cell
}

#[must_use]
pub fn air() -> CellDescriptor {
    cell(AIR, BoundaryKind::Empty, Vec::new())
}

#[must_use]
pub fn stone() -> CellDescriptor {
    cell(STONE, BoundaryKind::Solid, vec![Aabb::UNIT])
}

#[must_use]
pub fn ice() -> CellDescriptor {
    cell(ICE, BoundaryKind::Solid, vec![Aabb::UNIT])
}

#[must_use]
pub fn slime() -> CellDescriptor {
    cell(SLIME, BoundaryKind::Solid, vec![Aabb::UNIT])
}

#[must_use]
pub fn soul_sand() -> CellDescriptor {
    cell(
        SOUL_SAND,
        BoundaryKind::Solid,
        vec![Aabb::new(0.0, 0.0, 0.0, 1.0, 0.875, 1.0)],
    )
}

#[must_use]
pub fn web() -> CellDescriptor {
    cell(WEB, BoundaryKind::Partial, Vec::new())
}

/// Water at `level`; 0 is a source, 8 and above is falling.
#[must_use]
pub fn water(level: u8) -> CellDescriptor {
    with_props(
        cell(WATER, BoundaryKind::Empty, Vec::new()),
        &[("level", &level.to_string())],
    )
}

#[must_use]
pub fn lava() -> CellDescriptor {
    with_props(cell(LAVA, BoundaryKind::Empty, Vec::new()), &[("level", "0")])
}

/// A ladder hanging on the wall it faces away from.
#[must_use]
pub fn ladder(facing: Facing) -> CellDescriptor {
    let board = match facing {
        Facing::North => Aabb::new(0.0, 0.0, 0.8125, 1.0, 1.0, 1.0),
        Facing::South => Aabb::new(0.0, 0.0, 0.0, 1.0, 1.0, 0.1875),
        Facing::West => Aabb::new(0.8125, 0.0, 0.0, 1.0, 1.0, 1.0),
        Facing::East => Aabb::new(0.0, 0.0, 0.0, 0.1875, 1.0, 1.0),
    };
    with_props(
        cell(LADDER, BoundaryKind::Partial, vec![board]),
        &[("facing", facing.name())],
    )
}

/// A trapdoor hinged on the side it faces away from.
#[must_use]
pub fn trapdoor(facing: Facing, open: bool) -> CellDescriptor {
    let board = if open {
        ladder(facing)
            .default_shape
            .and_then(|boxes| boxes.first().copied())
            .unwrap_or(Aabb::UNIT)
    } else {
        Aabb::new(0.0, 0.0, 0.0, 1.0, 0.1875, 1.0)
    };
    with_props(
        cell(TRAPDOOR, BoundaryKind::Solid, vec![board]),
        &[
            ("facing", facing.name()),
            ("open", if open { "true" } else { "false" }),
        ],
    )
}

#[must_use]
pub fn stairs(facing: Facing, half: Half) -> CellDescriptor {
    let half = match half {
        Half::Top => "top",
        Half::Bottom => "bottom",
    };
    with_props(
        cell(OAK_STAIRS, BoundaryKind::Solid, vec![Aabb::UNIT]),
        &[("facing", facing.name()), ("half", half)],
    )
}

#[must_use]
pub fn fence() -> CellDescriptor {
    cell(
        OAK_FENCE,
        BoundaryKind::Solid,
        vec![Aabb::new(0.375, 0.0, 0.375, 0.625, 1.5, 0.625)],
    )
}

#[must_use]
pub fn wall() -> CellDescriptor {
    cell(
        COBBLESTONE_WALL,
        BoundaryKind::Solid,
        vec![Aabb::new(0.25, 0.0, 0.25, 0.75, 1.5, 0.75)],
    )
}

#[must_use]
pub fn glass_pane() -> CellDescriptor {
    cell(
        GLASS_PANE,
        BoundaryKind::Solid,
        vec![Aabb::new(0.4375, 0.0, 0.4375, 0.5625, 1.0, 0.5625)],
    )
}

/// A snow layer `layers` eighths deep; it collides one eighth lower.
#[must_use]
pub fn snow(layers: u8) -> CellDescriptor {
    let height = f64::from(layers.saturating_sub(1)) * 0.125;
    let boxes = if height > 0.0 {
        vec![Aabb::new(0.0, 0.0, 0.0, 1.0, height, 1.0)]
    } else {
        Vec::new()
    };
    with_props(
        cell(SNOW_LAYER, BoundaryKind::Solid, boxes),
        &[("layers", &layers.to_string())],
    )
}
