//! Bit-exact movement and collision prediction for a single actor in a
//! block world.
//!
//! The engine reproduces the reference client's arithmetic, `f32` rounding
//! points included, so a predicted position matches the server's to the last
//! bit. Callers describe the world through [`WorldPort`], hold each actor's
//! mutable state in an [`ActorState`] and advance it with
//! [`Physics::simulate_tick`].
pub mod actor;
pub mod attribute;
pub mod cell_kind;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod logging;
pub mod numeric;
pub mod physics;
pub mod shapes;
pub mod vector_math;
pub mod world;

// Re-export commonly used items
pub use actor::{ActorState, Control};
pub use attribute::{AttributeModifier, AttributeValue, ModifierOperation};
pub use cell_kind::{CellKind, CellKindTable};
pub use config::{EngineConfig, FeatureFlags, LiquidGravity};
pub use error::{ConfigError, PhysicsError};
pub use geometry::Aabb;
pub use logging::init as init_logging;
pub use physics::Physics;
pub use vector_math::{vec_length, vec_normalize};
pub use world::{BoundaryKind, CellDescriptor, Facing, Half, WorldPort};

pub mod prelude {
    //! Everything needed to build an engine and run ticks.
    //!
    //! ```rust,no_run
    //! use blockmotion::prelude::*;
    //! ```

    pub use crate::ActorState;
    pub use crate::Control;
    pub use crate::EngineConfig;
    pub use crate::FeatureFlags;
    pub use crate::LiquidGravity;
    pub use crate::Physics;
    pub use crate::WorldPort;
    pub use crate::{CellDescriptor, CellKindTable};
    pub use glam::{DVec3, IVec3};
}
