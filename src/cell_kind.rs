//! Closed classification of cell ids.
//!
//! The engine dispatches on [`CellKind`] instead of comparing block names
//! during a tick. A [`CellKindTable`] is built once from a version's id/name
//! registry and then only read.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Behavioural class of a terrain cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellKind {
    /// Empty air.
    Air,
    /// Still or flowing water.
    Water,
    /// Still or flowing lava.
    Lava,
    /// Climbable ladder.
    Ladder,
    /// Climbable vine.
    Vine,
    /// Cobweb; slows the next movement.
    Cobweb,
    /// Soul sand; slows horizontal movement.
    SoulSand,
    /// Slime block; bouncy and slippery.
    Slime,
    /// Ice.
    Ice,
    /// Packed ice.
    PackedIce,
    /// Any stair.
    Stairs,
    /// Any fence.
    Fence,
    /// Any fence gate.
    FenceGate,
    /// Any wall.
    Wall,
    /// Glass panes and iron bars.
    Pane,
    /// Stackable snow layers.
    SnowLayer,
    /// Any trapdoor.
    Trapdoor,
    /// Everything else; uses its static shape.
    #[default]
    Other,
}

impl CellKind {
    /// Classify a registry name.
    ///
    /// Both legacy and flattened names are recognised.
    ///
    /// # Examples
    /// ```
    /// use blockmotion::CellKind;
    /// assert_eq!(CellKind::from_name("oak_stairs"), CellKind::Stairs);
    /// assert_eq!(CellKind::from_name("cobblestone_wall"), CellKind::Wall);
    /// assert_eq!(CellKind::from_name("oak_wall_sign"), CellKind::Other);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "air" | "cave_air" | "void_air" => Self::Air,
            "water" | "flowing_water" => Self::Water,
            "lava" | "flowing_lava" => Self::Lava,
            "ladder" => Self::Ladder,
            "vine" => Self::Vine,
            "web" | "cobweb" => Self::Cobweb,
            "soul_sand" => Self::SoulSand,
            "slime" | "slime_block" => Self::Slime,
            "ice" => Self::Ice,
            "packed_ice" => Self::PackedIce,
            "snow_layer" | "snow" => Self::SnowLayer,
            "iron_bars" => Self::Pane,
            _ if name.ends_with("_stairs") => Self::Stairs,
            _ if name == "fence_gate" || name.ends_with("_fence_gate") => Self::FenceGate,
            _ if name == "fence" || name.ends_with("_fence") => Self::Fence,
            _ if name.ends_with("_wall") => Self::Wall,
            _ if name.ends_with("glass_pane") => Self::Pane,
            _ if name.ends_with("trapdoor") => Self::Trapdoor,
            _ => Self::Other,
        }
    }

    /// Water or lava.
    #[must_use]
    pub const fn is_liquid(self) -> bool {
        matches!(self, Self::Water | Self::Lava)
    }

    /// Ladders and vines.
    #[must_use]
    pub const fn is_climbable(self) -> bool {
        matches!(self, Self::Ladder | Self::Vine)
    }

    /// Cells a landing actor reports through the air cell above them.
    #[must_use]
    pub const fn is_tall_post(self) -> bool {
        matches!(self, Self::Fence | Self::Wall | Self::FenceGate)
    }
}

/// One entry of a block registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Registry id as reported by the world.
    pub id: u32,
    /// Registry name, without namespace.
    pub name: String,
}

/// Lookup from cell id to [`CellKind`].
///
/// Unknown ids classify as [`CellKind::Other`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellKindTable {
    kinds: HashMap<u32, CellKind>,
}

impl CellKindTable {
    /// Build a table from `(id, name)` pairs.
    ///
    /// A `minecraft:` namespace prefix is ignored.
    pub fn from_names<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (u32, &'a str)>,
    {
        let kinds = entries
            .into_iter()
            .map(|(id, name)| {
                let bare = name.strip_prefix("minecraft:").unwrap_or(name);
                (id, CellKind::from_name(bare))
            })
            .collect();
        Self { kinds }
    }

    /// Build a table from registry entries.
    pub fn from_registry<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a RegistryEntry>,
    {
        Self::from_names(entries.into_iter().map(|e| (e.id, e.name.as_str())))
    }

    /// Override the kind of one id.
    #[must_use]
    pub fn with_kind(mut self, id: u32, kind: CellKind) -> Self {
        self.kinds.insert(id, kind);
        self
    }

    /// Kind of the given id.
    #[must_use]
    pub fn kind_of(&self, id: u32) -> CellKind {
        self.kinds.get(&id).copied().unwrap_or_default()
    }

    /// Number of classified ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether no ids are classified.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
