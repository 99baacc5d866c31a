//! Comparator builders from projections.
//!
//! A projection picks the value to compare out of a larger record; the
//! builders combine it with a base comparison so sort predicates do not
//! repeat the projection on both sides.

use std::cmp::Ordering;

/// Builds a binary predicate comparing `projection(left)` with
/// `projection(right)` using `compare`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::order_by;
///
/// struct Player { name: &'static str, score: u32 }
///
/// let higher_score = order_by(|player: &Player| player.score, |left, right| left > right);
/// let alice = Player { name: "alice", score: 30 };
/// let bob = Player { name: "bob", score: 10 };
/// assert!(higher_score(&alice, &bob));
/// assert!(!higher_score(&bob, &alice));
/// ```
#[inline]
pub fn order_by<R, V, F, C>(projection: F, compare: C) -> impl Fn(&R, &R) -> bool
where
    R: ?Sized,
    F: Fn(&R) -> V,
    C: Fn(&V, &V) -> bool,
{
    move |left: &R, right: &R| compare(&projection(left), &projection(right))
}

/// [`order_by`] with `<` as the base comparison.
#[inline]
pub fn ascending<R, V, F>(projection: F) -> impl Fn(&R, &R) -> bool
where
    R: ?Sized,
    V: PartialOrd,
    F: Fn(&R) -> V,
{
    order_by(projection, |left: &V, right: &V| left < right)
}

/// [`order_by`] with `>` as the base comparison.
#[inline]
pub fn descending<R, V, F>(projection: F) -> impl Fn(&R, &R) -> bool
where
    R: ?Sized,
    V: PartialOrd,
    F: Fn(&R) -> V,
{
    order_by(projection, |left: &V, right: &V| left > right)
}

/// Builds a total ordering on records from a projection, for
/// [`slice::sort_by`] and friends.
///
/// # Examples
///
/// ```
/// use fnkit::compose::comparing;
///
/// let mut words = vec!["ccc", "a", "bb"];
/// words.sort_by(comparing(|word: &&str| word.len()));
/// assert_eq!(words, ["a", "bb", "ccc"]);
/// ```
#[inline]
pub fn comparing<R, V, F>(projection: F) -> impl Fn(&R, &R) -> Ordering
where
    R: ?Sized,
    V: Ord,
    F: Fn(&R) -> V,
{
    move |left: &R, right: &R| projection(left).cmp(&projection(right))
}
