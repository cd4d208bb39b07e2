//! Error types for the HexCull culling core
//!
//! Culling itself never fails: stale indices and malformed batch input
//! degrade to empty results. Errors are reserved for rejected
//! configuration and for view-projection matrices that cannot produce
//! a usable frustum.

use std::fmt;

/// Result type for HexCull operations
pub type Result<T> = std::result::Result<T, Error>;

/// HexCull errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Spatial index configuration rejected (radius, bucket size, level count)
    InvalidConfig(String),

    /// A frustum plane extracted from the view-projection matrix has a zero-length normal
    DegenerateFrustum(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::DegenerateFrustum(msg) => write!(f, "Degenerate frustum: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
