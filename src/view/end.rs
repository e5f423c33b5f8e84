use crate::view::cursor::Cursor;

/// One-past-the-end marker.
///
/// Compares equal to a cursor exactly when its outer traversal is
/// exhausted; normalization guarantees no sub-elements are pending by
/// then. Works for single-pass cursors too, where a true end-valued
/// cursor cannot exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EndMarker;

impl<O, P> PartialEq<EndMarker> for Cursor<O, P>
where
    O: Iterator,
    O::Item: IntoIterator,
    P: Iterator + Clone,
{
    fn eq(&self, _: &EndMarker) -> bool {
        self.at_end()
    }
}

impl<O, P> PartialEq<Cursor<O, P>> for EndMarker
where
    O: Iterator,
    O::Item: IntoIterator,
    P: Iterator + Clone,
{
    fn eq(&self, cursor: &Cursor<O, P>) -> bool {
        cursor.at_end()
    }
}
