//! Construction-time configuration.
//!
//! Version differences reach the engine only through [`FeatureFlags`] and the
//! [`CellKindTable`]. Both are resolved once by
//! [`Physics::new`](crate::Physics::new) and never consulted by name again.

use serde::Deserialize;

use crate::cell_kind::{CellKindTable, RegistryEntry};
use crate::constants::{
    GRAVITY, INDEPENDENT_LIQUID_GRAVITY, PROPORTIONAL_LAVA_GRAVITY_DIVISOR,
    PROPORTIONAL_WATER_GRAVITY_DIVISOR,
};
use crate::error::ConfigError;

/// How liquids pull an actor down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiquidGravity {
    /// A fixed 0.02 in both water and lava.
    Independent,
    /// A fraction of world gravity: 1/16 in water, 1/4 in lava.
    Proportional,
}

impl LiquidGravity {
    /// Vertical velocity subtracted per tick in `(water, lava)`.
    #[must_use]
    pub fn constants(self) -> (f64, f64) {
        match self {
            Self::Independent => (INDEPENDENT_LIQUID_GRAVITY, INDEPENDENT_LIQUID_GRAVITY),
            Self::Proportional => (
                GRAVITY / PROPORTIONAL_WATER_GRAVITY_DIVISOR,
                GRAVITY / PROPORTIONAL_LAVA_GRAVITY_DIVISOR,
            ),
        }
    }
}

/// Version-dependent behaviour switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeatureFlags {
    /// Selected liquid-gravity formula; required.
    pub liquid_gravity: Option<LiquidGravity>,
    /// Holding jump on a ladder climbs without touching a wall.
    pub climb_using_jump: bool,
    /// An open trapdoor above a ladder of the same facing is climbable.
    pub climbable_trapdoor: bool,
}

impl FeatureFlags {
    /// Collect flags from their registry names.
    ///
    /// # Errors
    /// Returns [`ConfigError::UnknownFeature`] for an unrecognised name and
    /// [`ConfigError::ConflictingLiquidGravity`] when both gravity variants
    /// are named.
    ///
    /// # Examples
    /// ```
    /// use blockmotion::{FeatureFlags, LiquidGravity};
    /// let flags = FeatureFlags::from_names(["proportionalLiquidGravity", "climbUsingJump"])?;
    /// assert_eq!(flags.liquid_gravity, Some(LiquidGravity::Proportional));
    /// assert!(flags.climb_using_jump);
    /// # Ok::<(), blockmotion::ConfigError>(())
    /// ```
    pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = Self::default();
        for name in names {
            match name.as_ref() {
                "independentLiquidGravity" => flags.select_gravity(LiquidGravity::Independent)?,
                "proportionalLiquidGravity" => {
                    flags.select_gravity(LiquidGravity::Proportional)?;
                }
                "climbUsingJump" => flags.climb_using_jump = true,
                "climbableTrapdoor" => flags.climbable_trapdoor = true,
                other => return Err(ConfigError::UnknownFeature(other.to_owned())),
            }
        }
        Ok(flags)
    }

    fn select_gravity(&mut self, variant: LiquidGravity) -> Result<(), ConfigError> {
        match self.liquid_gravity {
            Some(existing) if existing != variant => Err(ConfigError::ConflictingLiquidGravity),
            _ => {
                self.liquid_gravity = Some(variant);
                Ok(())
            }
        }
    }
}

/// Everything the engine needs to know about a game version.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    /// Behaviour switches.
    pub features: FeatureFlags,
    /// Classification of cell ids.
    pub cell_kinds: CellKindTable,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    cells: Vec<RegistryEntry>,
}

impl EngineConfig {
    /// Pair feature flags with a cell table.
    #[must_use]
    pub const fn new(features: FeatureFlags, cell_kinds: CellKindTable) -> Self {
        Self {
            features,
            cell_kinds,
        }
    }

    /// Parse a JSON document of the form
    /// `{"features": [..names..], "cells": [{"id": 1, "name": "stone"}, ..]}`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Json`] for malformed documents and the errors of
    /// [`FeatureFlags::from_names`] for bad flag lists.
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(document)?;
        let features = FeatureFlags::from_names(&raw.features)?;
        let cell_kinds = CellKindTable::from_registry(&raw.cells);
        Ok(Self::new(features, cell_kinds))
    }
}
