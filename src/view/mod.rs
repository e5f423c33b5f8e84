pub mod cursor;
pub mod end;
pub(crate) mod leg;

use derive_new::new;
use tracing::instrument;

use crate::view::{
    cursor::Cursor,
    end::EndMarker,
};

/// Owns the outer sequence and the separator pattern and hands out
/// cursors over the joined composition.
///
/// Which entry points exist is decided entirely by trait bounds, never at
/// runtime: [`cursor`](Self::cursor) needs an outer sequence traversable
/// from behind a shared reference, [`cursor_mut`](Self::cursor_mut)
/// serves a single-pass outer cursor through an exclusive borrow, and
/// [`into_cursor`](Self::into_cursor) consumes the view. Constructing a
/// view over incompatible sequence types fails to compile.
#[derive(Debug, Clone, new)]
pub struct JoinWithView<O, P> {
    outer: O,
    pattern: P,
}

impl<O, T> JoinWithView<O, [T; 1]> {
    /// Joins with a single separator element instead of a whole pattern
    /// sequence.
    pub fn from_separator(outer: O, separator: T) -> Self {
        Self::new(outer, [separator])
    }
}

impl<O, P> JoinWithView<O, P> {
    /// Independent, self-contained cursor over the composition. Cursors
    /// from repeated calls traverse identical element sequences.
    pub fn cursor<'v>(
        &'v self,
    ) -> Cursor<<&'v O as IntoIterator>::IntoIter, <&'v P as IntoIterator>::IntoIter>
    where
        &'v O: IntoIterator,
        <&'v O as IntoIterator>::Item: IntoIterator,
        &'v P: IntoIterator,
        <&'v P as IntoIterator>::IntoIter: Clone,
    {
        Cursor::new((&self.outer).into_iter(), (&self.pattern).into_iter())
    }

    /// Cursor over a single-pass outer cursor stored in the view.
    ///
    /// The view itself is the shared slot holding the partially consumed
    /// outer cursor: the exclusive borrow keeps a second live cursor from
    /// existing, and a later call resumes at the first outer element not
    /// yet pulled. Inner sequences pulled into a dropped cursor are gone
    /// with it.
    #[instrument(level = "trace", skip_all)]
    pub fn cursor_mut<'v>(&'v mut self) -> Cursor<&'v mut O, P::IntoIter>
    where
        O: Iterator,
        O::Item: IntoIterator,
        P: IntoIterator + Clone,
        P::IntoIter: Clone,
    {
        Cursor::new(&mut self.outer, self.pattern.clone().into_iter())
    }

    /// Consumes the view; the cursor yields the composition by value.
    pub fn into_cursor(self) -> Cursor<O::IntoIter, P::IntoIter>
    where
        O: IntoIterator,
        O::Item: IntoIterator,
        P: IntoIterator,
        P::IntoIter: Clone,
    {
        Cursor::new(self.outer.into_iter(), self.pattern.into_iter())
    }

    /// One-past-the-end marker, comparable against any cursor of this
    /// view.
    pub fn end(&self) -> EndMarker {
        EndMarker
    }

    /// A true cursor positioned at the logical end, equal to a begin
    /// cursor advanced to exhaustion. Produced by draining a fresh
    /// cursor, since iterator-based cursors carry no constant-time end
    /// position.
    #[instrument(level = "trace", skip_all)]
    pub fn end_cursor<'v>(
        &'v self,
    ) -> Cursor<<&'v O as IntoIterator>::IntoIter, <&'v P as IntoIterator>::IntoIter>
    where
        &'v O: IntoIterator,
        <&'v O as IntoIterator>::Item: IntoIterator,
        &'v P: IntoIterator,
        <&'v P as IntoIterator>::IntoIter: Clone,
    {
        let mut cursor = self.cursor();
        while cursor.next_part().is_some() {}
        cursor
    }
}

impl<O, P> IntoIterator for JoinWithView<O, P>
where
    O: IntoIterator,
    O::Item: IntoIterator,
    P: IntoIterator<Item = <O::Item as IntoIterator>::Item>,
    P::IntoIter: Clone,
{
    type Item = P::Item;
    type IntoIter = Cursor<O::IntoIter, P::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_cursor()
    }
}

impl<'v, O, P> IntoIterator for &'v JoinWithView<O, P>
where
    &'v O: IntoIterator,
    <&'v O as IntoIterator>::Item: IntoIterator<Item = <&'v P as IntoIterator>::Item>,
    &'v P: IntoIterator,
    <&'v P as IntoIterator>::IntoIter: Clone,
{
    type Item = <&'v P as IntoIterator>::Item;
    type IntoIter =
        Cursor<<&'v O as IntoIterator>::IntoIter, <&'v P as IntoIterator>::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}

impl<'v, O, P> IntoIterator for &'v mut JoinWithView<O, P>
where
    O: Iterator,
    O::Item: IntoIterator<Item = P::Item>,
    P: IntoIterator + Clone,
    P::IntoIter: Clone,
{
    type Item = P::Item;
    type IntoIter = Cursor<&'v mut O, P::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor_mut()
    }
}
