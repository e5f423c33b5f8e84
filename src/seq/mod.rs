//! Minimal cursor contracts the adaptor builds on, plus the model slice
//! sequence used wherever bidirectional traversal is needed.
//!
//! Advancing and element access come from the standard
//! [`Iterator`]/[`IntoIterator`] family; multi-pass traversal is expressed
//! as cursor [`Clone`]. The only contract added here is [`Retreat`],
//! because standard cursors shed the elements they step over.

pub mod retreat;
pub mod slice;

pub use retreat::Retreat;
pub use slice::{
    Slice,
    SliceCursor,
};
