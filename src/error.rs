//! Error types surfaced at the engine's boundaries.
//!
//! A tick itself never fails once its input passed validation; recoverable
//! data problems are logged and replaced with defaults instead.

use thiserror::Error;

/// The engine configuration cannot be resolved.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A feature flag name is not recognised.
    #[error("unknown feature flag `{0}`")]
    UnknownFeature(String),
    /// Both liquid-gravity variants were selected.
    #[error("liquid gravity variants are mutually exclusive")]
    ConflictingLiquidGravity,
    /// No liquid-gravity variant was selected.
    #[error("no liquid gravity variant selected")]
    MissingLiquidGravity,
    /// The JSON document could not be parsed.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

/// The caller handed the engine a state it cannot simulate.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PhysicsError {
    /// A coordinate or angle is NaN or infinite.
    #[error("actor field `{field}` is not finite")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A coordinate lies beyond the addressable block range.
    #[error("actor field `{field}` is {value}, outside ±{limit}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
        /// The accepted magnitude.
        limit: f64,
    },
}
