//! Edge sources feeding the network builder.
//!
//! An [`EdgeSource`] streams `(from, to)` pairs in source order. It reports
//! failures through the three source-level error variants:
//!
//! | When | Variant |
//! |------|---------|
//! | Before the first row (bad query, unusable schema) | [`Error::Query`] |
//! | A row is not two integers | [`Error::RowDecode`] |
//! | The stream breaks part way through | [`Error::Stream`] |
//!
//! [`Error::Query`]: crate::Error::Query
//! [`Error::RowDecode`]: crate::Error::RowDecode
//! [`Error::Stream`]: crate::Error::Stream

use crate::error::Result;
use crate::network::{Edge, NodeId};

/// A fallible stream of directed edges.
pub trait EdgeSource {
    /// Feed every edge to `visit`, in stream order.
    ///
    /// Returns `Ok(())` once the stream is exhausted cleanly. On error, some
    /// edges may already have been visited; callers must discard them.
    fn for_each_edge(&self, visit: &mut dyn FnMut(NodeId, NodeId)) -> Result<()>;
}

impl EdgeSource for [Edge] {
    fn for_each_edge(&self, visit: &mut dyn FnMut(NodeId, NodeId)) -> Result<()> {
        for &(from, to) in self {
            visit(from, to);
        }
        Ok(())
    }
}

impl<S: EdgeSource + ?Sized> EdgeSource for &S {
    fn for_each_edge(&self, visit: &mut dyn FnMut(NodeId, NodeId)) -> Result<()> {
        (**self).for_each_edge(visit)
    }
}
