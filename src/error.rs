//! Error types for mask construction

use thiserror::Error;

/// Errors surfaced while configuring a mask builder
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    /// A color name outside the recognized palette
    #[error("Invalid color name: {0}")]
    InvalidColorName(String),

    /// A malformed or mistyped options document
    #[error("Invalid mask options: {0}")]
    InvalidOptions(String),
}

pub type Result<T> = std::result::Result<T, MaskError>;
