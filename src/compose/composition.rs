//! Forward, backward and fallible function composition.
//!
//! Composition is lazy: nothing runs until the composite is called, and then
//! the stages run in data-flow order, each exactly once.

/// Forward composition: `compose(f, g)(a) == g(f(a))`.
///
/// `first` runs before `second`. Chains are built by nesting, or with
/// [`compose!`](crate::compose!).
///
/// # Examples
///
/// ```
/// use fnkit::compose::compose;
///
/// let double_then_describe = compose(|x: i32| x * 2, |x: i32| format!("<{x}>"));
/// assert_eq!(double_then_describe(21), "<42>");
/// ```
#[inline]
pub fn compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| second(first(input))
}

/// Backward composition: `compose_r(g, f)(a) == g(f(a))`.
///
/// Same behaviour as [`compose`] with the arguments written in
/// mathematical order, outermost first.
///
/// # Examples
///
/// ```
/// use fnkit::compose::compose_r;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// assert_eq!(compose_r(add_one, double)(5), 11);
/// ```
#[inline]
pub fn compose_r<A, B, C, F, G>(outer: G, inner: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| outer(inner(input))
}

/// Forward composition of fallible stages.
///
/// If `first` returns `Err`, `second` is never called and the error is
/// returned exactly as produced.
///
/// # Examples
///
/// ```
/// use fnkit::compose::try_compose;
///
/// let parse = |text: &str| text.parse::<i32>().map_err(|error| error.to_string());
/// let halve = |value: i32| {
///     if value % 2 == 0 { Ok(value / 2) } else { Err(format!("{value} is odd")) }
/// };
/// let parse_and_halve = try_compose(parse, halve);
///
/// assert_eq!(parse_and_halve("42"), Ok(21));
/// assert_eq!(parse_and_halve("7"), Err("7 is odd".to_string()));
/// assert!(parse_and_halve("x").is_err());
/// ```
#[inline]
pub fn try_compose<A, B, C, E, F, G>(first: F, second: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<B, E>,
    G: Fn(B) -> Result<C, E>,
{
    move |input| second(first(input)?)
}

/// Composes functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, matching
/// [`compose`](crate::compose::compose). A single argument is returned as is.
///
/// # Examples
///
/// ```
/// use fnkit::compose;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// let composed = compose!(square, double, add_one);
/// assert_eq!(composed(3), 19);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose($first_function, $crate::compose!($($remaining_functions),+))
    };
}

/// Composes functions from right to left.
///
/// `compose_r!(h, g, f)(x)` is equivalent to `h(g(f(x)))`.
///
/// # Examples
///
/// ```
/// use fnkit::compose_r;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// let composed = compose_r!(add_one, double, square);
/// assert_eq!(composed(3), 19);
/// ```
#[macro_export]
macro_rules! compose_r {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::compose::compose_r($outer_function, $crate::compose_r!($($remaining_functions),+))
    };
}
