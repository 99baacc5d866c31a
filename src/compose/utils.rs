//! Basic combinators: identity, constant, argument flipping and forcing.
//!
//! - [`identity`]: I combinator
//! - [`constant`]: K combinator
//! - [`flip_args`]: swaps the arguments of a binary function (C combinator)
//! - [`thunk`]: forces a zero-argument function

/// Returns the value unchanged.
///
/// The unit of composition: `compose(identity, f)` and `compose(f, identity)`
/// both behave like `f`, and `pipe(a, identity) == a`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns a clone of `value`, ignoring its
/// input.
///
/// # Examples
///
/// ```
/// use fnkit::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of an uncurried binary function.
///
/// `flip_args(f)(b, a) == f(a, b)`. For curried functions use
/// [`flip`](crate::compose::flip).
///
/// # Examples
///
/// ```
/// use fnkit::compose::flip_args;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// assert_eq!(flip_args(subtract)(3, 10), 7);
/// assert_eq!(flip_args(flip_args(subtract))(10, 3), 7);
/// ```
#[inline]
pub fn flip_args<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Calls a zero-argument function immediately and returns its result.
///
/// Pairs with closures that defer building a value until it is demanded.
///
/// # Examples
///
/// ```
/// use fnkit::compose::thunk;
///
/// let make_greeting = || format!("hello {}", "world");
/// assert_eq!(thunk(make_greeting), "hello world");
/// ```
#[inline]
pub fn thunk<A, F>(function: F) -> A
where
    F: FnOnce() -> A,
{
    function()
}
