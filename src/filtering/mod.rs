/*! Filtering utilities

Length gates applied before classification:
- [length::ChunkLength] keeps text nodes that are long enough for chunk-level classification,
- [length::WordLength] keeps tokens that are long enough to be corpus words.
! */
mod filter;
pub mod length;

pub use filter::Filter;
pub use length::{ChunkLength, WordLength};
