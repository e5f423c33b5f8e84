use std::{
    iter::FusedIterator,
    mem,
};

use derive_more::{
    Debug,
    IsVariant,
};
use either::Either;
use tap::Tap;
use tracing::trace;

use crate::{
    seq::retreat::Retreat,
    view::leg::Leg,
};

/// Cursor of the inner sequence produced by one outer element.
pub type InnerCursor<O> = <<O as Iterator>::Item as IntoIterator>::IntoIter;

/// Element type of the inner sequences.
pub type InnerItem<O> = <<O as Iterator>::Item as IntoIterator>::Item;

/// Which leg of the composition the cursor is positioned in.
///
/// Exactly one variant is active at a time. A normalized cursor is either
/// `Done` or holds a leg with a current element.
#[derive(Debug, IsVariant)]
pub(crate) enum State<P: Iterator, I: Iterator> {
    /// Emitting separator elements. The inner sequence they precede has
    /// already been pulled from the outer cursor and waits in `next`.
    Pattern {
        #[debug(skip)]
        sep: Leg<P>,
        #[debug(skip)]
        next: I,
    },
    /// Emitting the current inner sequence.
    Inner(#[debug(skip)] Leg<I>),
    /// The outer cursor is exhausted.
    Done,
}

impl<P: Iterator, I: Iterator> State<P, I> {
    fn pos_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Inner(a), Self::Inner(b)) => a.position() == b.position(),
            (Self::Pattern { sep: a, .. }, Self::Pattern { sep: b, .. }) => {
                a.position() == b.position()
            }
            (Self::Done, Self::Done) => true,
            _ => false,
        }
    }
}

impl<P, I> Clone for State<P, I>
where
    P: Iterator + Clone,
    P::Item: Clone,
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Pattern { sep, next } => Self::Pattern {
                sep: sep.clone(),
                next: next.clone(),
            },
            Self::Inner(leg) => Self::Inner(leg.clone()),
            Self::Done => Self::Done,
        }
    }
}

/// Position in the joined composition.
///
/// Holds the outer cursor, a pristine copy of the pattern cursor to
/// restart each separator from, and the active [`State`]. Invariant: the
/// outer cursor sits just past the outer element the active state refers
/// to, and `outer_pos` counts the outer elements pulled so far.
#[derive(Debug)]
pub struct Cursor<O, P>
where
    O: Iterator,
    O::Item: IntoIterator,
    P: Iterator + Clone,
{
    #[debug(skip)]
    outer: O,
    #[debug(skip)]
    pattern: P,
    outer_pos: usize,
    state: State<P, InnerCursor<O>>,
}

impl<O, P> Cursor<O, P>
where
    O: Iterator,
    O::Item: IntoIterator,
    P: Iterator + Clone,
{
    pub(crate) fn new(outer: O, pattern: P) -> Self {
        Self {
            outer,
            pattern,
            outer_pos: 0,
            state: State::Done,
        }
        .tap_mut(|cursor| {
            // no separator precedes the first inner sequence
            if let Some(inner) = cursor.pull_outer() {
                cursor.state = State::Inner(Leg::new(inner.into_iter()));
                cursor.normalize();
            }
        })
    }

    /// Whether the cursor is past the last element of the composition.
    pub fn at_end(&self) -> bool {
        self.state.is_done()
    }

    /// Current element, tagged by the leg it comes from: `Left` for a
    /// separator element, `Right` for an inner element.
    ///
    /// This is the common-type seam: the plain [`Iterator`] impl requires
    /// both legs to yield one element type, while `next_part` serves
    /// pattern and inner sequences with unrelated element types.
    pub fn next_part(&mut self) -> Option<Either<P::Item, InnerItem<O>>> {
        let part = match &mut self.state {
            State::Pattern { sep, .. } => sep.next().map(Either::Left),
            State::Inner(leg) => leg.next().map(Either::Right),
            State::Done => None,
        }?;
        self.normalize();
        Some(part)
    }

    fn pull_outer(&mut self) -> Option<O::Item> {
        let inner = self.outer.next();
        if inner.is_some() {
            self.outer_pos += 1;
        }
        inner
    }

    /// True when the active leg still has an element to hand out.
    fn settled(&self) -> bool {
        match &self.state {
            State::Pattern { sep, .. } => sep.has_current(),
            State::Inner(leg) => leg.has_current(),
            State::Done => true,
        }
    }

    /// Restores the cursor invariant after construction and after every
    /// element handed out: skips exhausted legs until the active leg has
    /// a current element, collapsing empty inner sequences and empty
    /// patterns into the next real element. Each round either pulls an
    /// outer element or flips the pattern leg over to its parked inner
    /// sequence, so the loop terminates on finite outer sequences.
    fn normalize(&mut self) {
        while !self.settled() {
            match mem::replace(&mut self.state, State::Done) {
                State::Inner(_) => {
                    if let Some(inner) = self.pull_outer() {
                        trace!(outer_pos = self.outer_pos, "entering separator");
                        self.state = State::Pattern {
                            sep: Leg::new(self.pattern.clone()),
                            next: inner.into_iter(),
                        };
                    } else {
                        trace!(outer_pos = self.outer_pos, "outer cursor exhausted");
                    }
                }
                State::Pattern { next, .. } => {
                    self.state = State::Inner(Leg::new(next));
                }
                State::Done => {}
            }
        }
    }
}

impl<O, P> Cursor<O, P>
where
    O: Retreat,
    O::Item: IntoIterator,
    InnerCursor<O>: Retreat,
    P: Retreat + Clone,
{
    fn retreat_outer(&mut self) -> bool {
        let moved = self.outer.retreat();
        if moved {
            self.outer_pos -= 1;
        }
        moved
    }

    /// Re-enters the inner sequence the outer cursor is about to yield,
    /// positioned at its end.
    fn reenter_prev_inner(&mut self) -> bool {
        match self.pull_outer() {
            Some(inner) => {
                self.state = State::Inner(Leg::at_end(inner.into_iter()));
                true
            }
            None => false,
        }
    }
}

impl<O, P> Iterator for Cursor<O, P>
where
    O: Iterator,
    O::Item: IntoIterator<Item = P::Item>,
    P: Iterator + Clone,
{
    type Item = P::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_part().map(Either::into_inner)
    }
}

impl<O, P> FusedIterator for Cursor<O, P>
where
    O: Iterator,
    O::Item: IntoIterator<Item = P::Item>,
    P: Iterator + Clone,
{
}

impl<O, P> Retreat for Cursor<O, P>
where
    O: Retreat,
    O::Item: IntoIterator<Item = P::Item>,
    InnerCursor<O>: Retreat,
    P: Retreat + Clone,
{
    /// Mirror image of advancing: flips across leg boundaries until a leg
    /// can take a real step back. At the very beginning of the
    /// composition there is nothing to step back to; the cursor is left
    /// at a position equal to a fresh begin cursor and `false` comes
    /// back.
    fn retreat(&mut self) -> bool {
        if self.state.is_done() {
            // step back into the last inner sequence, at its end
            if !self.retreat_outer() {
                return false;
            }
            if !self.reenter_prev_inner() {
                return false;
            }
        }
        loop {
            match mem::replace(&mut self.state, State::Done) {
                State::Inner(mut leg) => {
                    if leg.retreat() {
                        self.state = State::Inner(leg);
                        return true;
                    }
                    if self.outer_pos == 1 {
                        // start of the first inner sequence
                        self.state = State::Inner(leg);
                        self.normalize();
                        return false;
                    }
                    trace!(outer_pos = self.outer_pos, "retreating into separator");
                    self.state = State::Pattern {
                        sep: Leg::at_end(self.pattern.clone()),
                        next: leg.into_raw(),
                    };
                }
                State::Pattern { mut sep, next } => {
                    if sep.retreat() {
                        self.state = State::Pattern { sep, next };
                        return true;
                    }
                    // start of the separator: the previous element is the
                    // last of the preceding inner sequence
                    trace!(
                        outer_pos = self.outer_pos,
                        "retreating into previous inner sequence"
                    );
                    self.retreat_outer();
                    self.retreat_outer();
                    if !self.reenter_prev_inner() {
                        return false;
                    }
                }
                State::Done => return false,
            }
        }
    }
}

impl<O, P> Clone for Cursor<O, P>
where
    O: Iterator + Clone,
    O::Item: IntoIterator,
    InnerCursor<O>: Clone,
    InnerItem<O>: Clone,
    P: Iterator + Clone,
    P::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            pattern: self.pattern.clone(),
            outer_pos: self.outer_pos,
            state: self.state.clone(),
        }
    }
}

/// Position equality. Meaningful only between cursors of the same view,
/// and only offered when the outer cursor is multi-pass.
impl<O, P> PartialEq for Cursor<O, P>
where
    O: Iterator + Clone,
    O::Item: IntoIterator,
    P: Iterator + Clone,
{
    fn eq(&self, other: &Self) -> bool {
        self.outer_pos == other.outer_pos && self.state.pos_eq(&other.state)
    }
}

impl<O, P> Eq for Cursor<O, P>
where
    O: Iterator + Clone,
    O::Item: IntoIterator,
    P: Iterator + Clone,
{
}
