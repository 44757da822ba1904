//! Error types for voxgrid.

use std::fmt;

use thiserror::Error;

use crate::coords::{VolumeBounds, WorldPos};

/// A world axis, used to point at the offending dimension in errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        };
        f.write_str(name)
    }
}

/// Engine-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A volume extent is zero or too large to address.
    #[error("Invalid extent along {axis}: {reason}")]
    InvalidExtent { axis: Axis, reason: String },

    /// Out of bounds access
    #[error("Out of bounds: {pos} is outside {bounds}")]
    OutOfBounds { pos: WorldPos, bounds: VolumeBounds },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
