use derive_more::Debug;

use crate::seq::retreat::Retreat;

/// Sub-cursor over one leg of the composition: the separator pattern or
/// the current inner sequence.
///
/// Keeps a single element of lookahead so exhaustion can be tested
/// without discarding an element. This slot is the only storage the
/// adaptor materializes; it holds at most one element per leg and is
/// replaced wholesale, never merged. The `taken` counter is the leg's
/// logical position, which makes position equality and start-of-leg
/// checks independent of the base cursor type.
#[derive(Debug)]
pub(crate) struct Leg<I: Iterator> {
    #[debug(skip)]
    iter: I,
    #[debug(skip)]
    slot: Option<I::Item>,
    taken: usize,
}

impl<I: Iterator> Leg<I> {
    /// Leg positioned at its start, lookahead filled.
    pub(crate) fn new(mut iter: I) -> Self {
        let slot = iter.next();
        Self {
            iter,
            slot,
            taken: 0,
        }
    }

    /// Leg positioned at its end, draining the cursor to learn how many
    /// elements it steps over.
    pub(crate) fn at_end(mut iter: I) -> Self {
        let mut taken = 0;
        while iter.next().is_some() {
            taken += 1;
        }
        Self {
            iter,
            slot: None,
            taken,
        }
    }

    pub(crate) fn has_current(&self) -> bool {
        self.slot.is_some()
    }

    pub(crate) fn position(&self) -> usize {
        self.taken
    }

    pub(crate) fn next(&mut self) -> Option<I::Item> {
        let item = self.slot.take()?;
        self.taken += 1;
        self.slot = self.iter.next();
        Some(item)
    }
}

impl<I: Retreat> Leg<I> {
    /// Steps one position back. The lookahead element is dropped and
    /// re-pulled, keeping the base cursor exactly one step ahead of
    /// `taken`.
    pub(crate) fn retreat(&mut self) -> bool {
        if self.taken == 0 {
            return false;
        }
        if self.slot.take().is_some() {
            self.iter.retreat();
        }
        self.iter.retreat();
        self.taken -= 1;
        self.slot = self.iter.next();
        true
    }

    /// Unwinds the lookahead and recovers the base cursor. Only called at
    /// the start of a leg, where the recovered cursor is pristine.
    pub(crate) fn into_raw(mut self) -> I {
        if self.slot.take().is_some() {
            self.iter.retreat();
        }
        self.iter
    }
}

impl<I> Clone for Leg<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            iter: self.iter.clone(),
            slot: self.slot.clone(),
            taken: self.taken,
        }
    }
}
