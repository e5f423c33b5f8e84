//! Lazy flattening with a separator.
//!
//! [`JoinWithView`] adapts an outer sequence of inner sequences and a
//! separator pattern into one lazy sequence: the concatenation of the
//! inner sequences, with the pattern interspersed strictly *between*
//! consecutive inner sequences. Nothing is materialized beyond a single
//! element of lookahead per leg.
//!
//! ```
//! use join_with::JoinWith;
//!
//! let rows = vec![vec!["a", "b"], vec!["c"]];
//! let joined: Vec<_> = rows.join_with(vec![","]).into_cursor().collect();
//! assert_eq!(joined, ["a", "b", ",", "c"]);
//! ```
//!
//! Traversal strength follows the capabilities of the participating
//! sequences: consuming a view yields elements by value, a shared
//! reference to a multi-pass view hands out independent re-traversable
//! cursors, and when every participating cursor supports [`Retreat`] the
//! composition can be walked backwards as well.

pub mod adapt;
pub mod seq;
pub mod view;

#[cfg(test)]
mod tests;

pub use crate::{
    adapt::{
        JoinWith,
        joining_with,
    },
    seq::{
        retreat::Retreat,
        slice::{
            Slice,
            SliceCursor,
        },
    },
    view::{
        JoinWithView,
        cursor::Cursor,
        end::EndMarker,
    },
};
