use crate::view::JoinWithView;

/// Direct call form of the adaptor, available on any sequence of
/// sequences.
pub trait JoinWith: IntoIterator + Sized {
    /// Joins the inner sequences with `pattern` interspersed between
    /// consecutive ones.
    fn join_with<P>(self, pattern: P) -> JoinWithView<Self, P> {
        JoinWithView::new(self, pattern)
    }

    /// Joins with a single separator element.
    fn join_with_item<T>(self, element: T) -> JoinWithView<Self, [T; 1]> {
        JoinWithView::from_separator(self, element)
    }
}

impl<O: IntoIterator> JoinWith for O {}

/// Curried form for pipeline composition, e.g. with [`tap::Pipe`]:
///
/// ```
/// use join_with::joining_with;
/// use tap::Pipe;
///
/// let out: Vec<_> = vec![vec![1, 2], vec![3]]
///     .pipe(joining_with(vec![0]))
///     .into_cursor()
///     .collect();
/// assert_eq!(out, [1, 2, 0, 3]);
/// ```
pub fn joining_with<O, P>(pattern: P) -> impl FnOnce(O) -> JoinWithView<O, P> {
    move |outer| JoinWithView::new(outer, pattern)
}
