use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// An item had a zero width or height. The whole packing call is rejected
    /// rather than silently skipping the item, so the correspondence between
    /// inputs and placements stays exact.
    #[error("Item {index} has invalid dimensions {size:?}; width and height must be positive.")]
    InvalidDimension { index: usize, size: (u32, u32) },
}
