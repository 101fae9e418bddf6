//! Invalid-input errors raised by the planning core.

use thiserror::Error;

/// A plot or tree set that violates an estate invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EstateError {
    #[error("invalid estate dimensions: length {length}, width {width}")]
    InvalidDimensions { length: u32, width: u32 },

    #[error("estate size {size} exceeds maximum of {max}")]
    EstateTooLarge { size: u64, max: u64 },

    #[error("tree at ({x}, {y}) is outside the {length}x{width} estate")]
    TreeOutOfBounds {
        x: u32,
        y: u32,
        length: u32,
        width: u32,
    },

    #[error("tree height {height} outside allowed range {min}..={max}")]
    InvalidHeight { height: u32, min: u32, max: u32 },

    #[error("more than one tree at ({x}, {y})")]
    DuplicateTree { x: u32, y: u32 },
}
