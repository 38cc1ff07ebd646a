use std::fmt::{self, Formatter};

/// Writes `items` in set notation, `#{a, b, c}`, using `each` to format a single item.
pub(crate) fn write_set<I, F>(f: &mut Formatter<'_>, items: I, mut each: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut Formatter<'_>, I::Item) -> fmt::Result,
{
    write!(f, "#{{")?;
    for (i, item) in items.into_iter().enumerate() {
        if i != 0 {
            write!(f, ", ")?;
        }
        each(f, item)?;
    }
    write!(f, "}}")
}

/// Adapts a closure into a [`Debug`](fmt::Debug) implementation, so that it can be passed as a
/// field to [`Formatter::debug_struct`].
pub(crate) struct DebugWith<F: Fn(&mut Formatter<'_>) -> fmt::Result>(pub F);

impl<F: Fn(&mut Formatter<'_>) -> fmt::Result> fmt::Debug for DebugWith<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}
