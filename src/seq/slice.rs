use derive_more::From;

use crate::seq::retreat::Retreat;

/// Borrowed slice sequence, the model multi-pass sequence: iterating it
/// or a reference to it yields independent [`SliceCursor`]s.
#[derive(Debug, From)]
pub struct Slice<'a, T>(pub &'a [T]);

impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

impl<'a, T> IntoIterator for Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = SliceCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        SliceCursor {
            slice: self.0,
            pos: 0,
        }
    }
}

impl<'a, T> IntoIterator for &Slice<'a, T> {
    type Item = &'a T;
    type IntoIter = SliceCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        (*self).into_iter()
    }
}

/// Index-based cursor over a slice. Unlike `slice::Iter` it keeps the
/// whole slice around, so it can step back over consumed elements.
#[derive(Debug)]
pub struct SliceCursor<'a, T> {
    slice: &'a [T],
    pos: usize,
}

impl<T> Clone for SliceCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<'_, T> {}

impl<'a, T> Iterator for SliceCursor<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let item = self.slice.get(self.pos)?;
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.slice.len() - self.pos;
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for SliceCursor<'_, T> {}

impl<T> std::iter::FusedIterator for SliceCursor<'_, T> {}

impl<T> Retreat for SliceCursor<'_, T> {
    fn retreat(&mut self) -> bool {
        if self.pos == 0 {
            return false;
        }
        self.pos -= 1;
        true
    }
}
