//! Growpack is a small library for packing rectangles into a single bin that
//! grows on demand. Instead of packing into a fixed-size container, the bin
//! starts at the size of the first item and is extended rightward or downward
//! whenever the next item does not fit, optionally bounded by a maximum width
//! and/or height.
//!
//! The packer is a first-fit heuristic over a binary tree of free regions. It
//! is deterministic: packing the same items with the same options twice
//! produces identical placements.
//!
//! ## Example
//! ```
//! use growpack::{GrowingPacker, InputItem};
//!
//! // First, transform the rectangles you want to pack into the Growpack
//! // InputItem type.
//! let my_items = vec![
//!     InputItem::new((128, 64)),
//!     InputItem::new((64, 64)),
//!     InputItem::new((1, 300)),
//! ];
//!
//! // Construct a packer and configure it with your constraints.
//! let packer = GrowingPacker::new().max_width(512);
//!
//! // Compute a solution. Placements come back in the same order the items
//! // went in.
//! let output = packer.pack(my_items)?;
//! assert_eq!(output.items().len(), 3);
//! # Ok::<(), growpack::Error>(())
//! ```

mod error;
mod geometry;
mod node;
mod order;
mod packer;
mod types;

pub use error::*;
pub use geometry::*;
pub use packer::*;
pub use types::*;
