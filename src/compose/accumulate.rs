//! Accumulator combinator for folds over records.

/// Builds a fold step: project the next record and combine it into the
/// running accumulator, `accumulate(f, combine)(acc, root) == combine(acc, f(root))`.
///
/// The result has exactly the shape [`Iterator::fold`] expects for an
/// iterator over references.
///
/// # Examples
///
/// ```
/// use fnkit::compose::accumulate;
///
/// struct Item { count: i64 }
///
/// let items = [Item { count: 1 }, Item { count: 2 }, Item { count: 3 }];
/// let total = items
///     .iter()
///     .fold(0, accumulate(|item: &Item| item.count, |sum, count| sum + count));
/// assert_eq!(total, 6);
/// ```
#[inline]
pub fn accumulate<R, V, F, C>(projection: F, combine: C) -> impl Fn(V, &R) -> V
where
    R: ?Sized,
    F: Fn(&R) -> V,
    C: Fn(V, V) -> V,
{
    move |accumulator, root: &R| combine(accumulator, projection(root))
}
