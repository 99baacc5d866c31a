//! Merging side effects into a single effect.
//!
//! A merged effect calls its parts on the same input, strictly left before
//! right. There is no rollback: if the left effect panics the right one never
//! runs, and [`try_merge`] stops at the first `Err`.

/// Runs `first` and then `second` on the same shared reference.
///
/// # Examples
///
/// ```
/// use fnkit::compose::merge;
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let both = merge(
///     |value: &i32| seen.borrow_mut().push(format!("f{value}")),
///     |value: &i32| seen.borrow_mut().push(format!("g{value}")),
/// );
/// both(&1);
/// assert_eq!(*seen.borrow(), ["f1", "g1"]);
/// ```
#[inline]
pub fn merge<A, F, G>(first: F, second: G) -> impl Fn(&A)
where
    A: ?Sized,
    F: Fn(&A),
    G: Fn(&A),
{
    move |target: &A| {
        first(target);
        second(target);
    }
}

/// Runs `first` and then `second` on the same mutable target.
///
/// This is the shape of "configure this value in place" helpers, which can
/// be merged into one configuration step.
///
/// # Examples
///
/// ```
/// use fnkit::compose::merge_mut;
///
/// #[derive(Default)]
/// struct Label { text: String, size: u32 }
///
/// let style = merge_mut(
///     |label: &mut Label| label.text.push_str("Title"),
///     |label: &mut Label| label.size = 28,
/// );
/// let mut label = Label::default();
/// style(&mut label);
/// assert_eq!((label.text.as_str(), label.size), ("Title", 28));
/// ```
#[inline]
pub fn merge_mut<A, F, G>(first: F, second: G) -> impl Fn(&mut A)
where
    A: ?Sized,
    F: Fn(&mut A),
    G: Fn(&mut A),
{
    move |target: &mut A| {
        first(&mut *target);
        second(target);
    }
}

/// Two-argument form of [`merge`]: both effects receive the same pair.
#[inline]
pub fn merge2<A, B, F, G>(first: F, second: G) -> impl Fn(&A, &B)
where
    A: ?Sized,
    B: ?Sized,
    F: Fn(&A, &B),
    G: Fn(&A, &B),
{
    move |left: &A, right: &B| {
        first(left, right);
        second(left, right);
    }
}

/// Fallible form of [`merge`].
///
/// If `first` returns `Err`, `second` is not called and the error is
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use fnkit::compose::try_merge;
///
/// let non_empty = |text: &str| if text.is_empty() { Err("empty") } else { Ok(()) };
/// let ascii = |text: &str| if text.is_ascii() { Ok(()) } else { Err("not ascii") };
/// let validate = try_merge(non_empty, ascii);
///
/// assert_eq!(validate("ok"), Ok(()));
/// assert_eq!(validate(""), Err("empty"));
/// assert_eq!(validate("é"), Err("not ascii"));
/// ```
#[inline]
pub fn try_merge<A, E, F, G>(first: F, second: G) -> impl Fn(&A) -> Result<(), E>
where
    A: ?Sized,
    F: Fn(&A) -> Result<(), E>,
    G: Fn(&A) -> Result<(), E>,
{
    move |target: &A| {
        first(target)?;
        second(target)
    }
}

/// Merges any number of shared-reference effects, left to right.
///
/// # Examples
///
/// ```
/// use fnkit::merge;
/// use std::cell::Cell;
///
/// let total = Cell::new(0);
/// let digits = &total;
/// let add = |amount: i32| move |_: &()| digits.set(digits.get() * 10 + amount);
/// let all = merge!(add(1), add(2), add(3));
/// all(&());
/// assert_eq!(total.get(), 123);
/// ```
#[macro_export]
macro_rules! merge {
    ($effect:expr $(,)?) => {
        $effect
    };

    ($first_effect:expr, $($remaining_effects:expr),+ $(,)?) => {
        $crate::compose::merge($first_effect, $crate::merge!($($remaining_effects),+))
    };
}
