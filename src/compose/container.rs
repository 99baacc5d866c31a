//! Shape-preserving maps over sequences and optionals.
//!
//! Kept as two separately named functions rather than one overloaded `map`.

/// Lifts `function` to a map over a `Vec`, preserving length and order.
///
/// # Examples
///
/// ```
/// use fnkit::compose::map_list;
///
/// let lengths = map_list(|word: &str| word.len());
/// assert_eq!(lengths(vec!["a", "abc"]), vec![1, 3]);
/// assert_eq!(lengths(Vec::new()), Vec::<usize>::new());
/// ```
#[inline]
pub fn map_list<A, B, F>(function: F) -> impl Fn(Vec<A>) -> Vec<B>
where
    F: Fn(A) -> B,
{
    move |items| items.into_iter().map(&function).collect()
}

/// Lifts `function` to a map over an `Option`; `None` stays `None`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::map_optional;
///
/// let double = map_optional(|x: i32| x * 2);
/// assert_eq!(double(Some(4)), Some(8));
/// assert_eq!(double(None), None);
/// ```
#[inline]
pub fn map_optional<A, B, F>(function: F) -> impl Fn(Option<A>) -> Option<B>
where
    F: Fn(A) -> B,
{
    move |value| value.map(&function)
}
