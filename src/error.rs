//! Crate error types

use thiserror::Error;

use crate::config::ConfigError;

/// An entity constructor was handed values that break its invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntityError {
    #[error("radius must not be negative (got {0})")]
    NegativeRadius(f32),
    #[error("asteroid needs at least {min} vertices (got {found})")]
    TooFewVertices { found: usize, min: usize },
}

/// Anything that can stop a game from starting
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Entity(#[from] EntityError),
}
