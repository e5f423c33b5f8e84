/// A cursor that can step back over elements it has already yielded.
///
/// `retreat` undoes one `next`: after it returns `true`, the next call to
/// `next` yields the element most recently stepped back over. When the
/// cursor is already at its start, `retreat` returns `false` and leaves
/// it untouched.
pub trait Retreat: Iterator {
    fn retreat(&mut self) -> bool;
}

impl<I: Retreat + ?Sized> Retreat for &mut I {
    fn retreat(&mut self) -> bool {
        (**self).retreat()
    }
}
