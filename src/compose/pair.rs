//! Mapping one component of a pair.
//!
//! The untouched component is moved through, never cloned, so it keeps its
//! identity (the same heap allocation, for example).

/// Applies `function` to the first component of a pair.
///
/// # Examples
///
/// ```
/// use fnkit::compose::map_first;
///
/// assert_eq!(map_first(|x: i32| x + 1)((1, "kept")), (2, "kept"));
/// ```
#[inline]
pub fn map_first<A, B, C, F>(function: F) -> impl Fn((A, B)) -> (C, B)
where
    F: Fn(A) -> C,
{
    move |(first, second)| (function(first), second)
}

/// Applies `function` to the second component of a pair.
///
/// # Examples
///
/// ```
/// use fnkit::compose::map_second;
///
/// assert_eq!(map_second(|s: &str| s.len())(("kept", "four")), ("kept", 4));
/// ```
#[inline]
pub fn map_second<A, B, C, F>(function: F) -> impl Fn((A, B)) -> (A, C)
where
    F: Fn(B) -> C,
{
    move |(first, second)| (first, function(second))
}
