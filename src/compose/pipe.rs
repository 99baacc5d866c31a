//! Forward application: `pipe`, the [`Pipe`] extension trait and `pipe!`.

/// Applies `function` to `value`.
///
/// `pipe(a, f) == f(a)`. It exists so that code can read in data-flow
/// order; see [`pipe!`](crate::pipe!) for chains and [`Pipe`] for method
/// syntax.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{identity, pipe};
///
/// assert_eq!(pipe(5, |x: i32| x * 2), 10);
/// assert_eq!(pipe("unchanged", identity), "unchanged");
/// ```
#[inline]
pub fn pipe<A, B, F>(value: A, function: F) -> B
where
    F: FnOnce(A) -> B,
{
    function(value)
}

/// Method-call form of [`pipe`], implemented for every sized type.
///
/// `value.pipe(f).pipe(g)` reads the same as `value |> f |> g`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::Pipe;
///
/// let length = 12345
///     .pipe(|x: i32| x.to_string())
///     .pipe(|s: String| s.len());
/// assert_eq!(length, 5);
///
/// let mut labels = vec!["b", "a"];
/// labels.pipe_mut(|items| items.sort_unstable());
/// assert_eq!(labels, ["a", "b"]);
/// ```
pub trait Pipe: Sized {
    /// Passes `self` by value to `function`.
    #[inline]
    fn pipe<B, F>(self, function: F) -> B
    where
        F: FnOnce(Self) -> B,
    {
        function(self)
    }

    /// Passes `&self` to `function`.
    #[inline]
    fn pipe_ref<B, F>(&self, function: F) -> B
    where
        F: FnOnce(&Self) -> B,
    {
        function(self)
    }

    /// Passes `&mut self` to `function`, the usual shape of a side effect
    /// that configures a value in place.
    #[inline]
    fn pipe_mut<B, F>(&mut self, function: F) -> B
    where
        F: FnOnce(&mut Self) -> B,
    {
        function(self)
    }
}

impl<T> Pipe for T {}

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// Each function is called exactly once, so [`FnOnce`] is enough.
///
/// # Examples
///
/// ```
/// use fnkit::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> 9 -> 18 -> 19
/// assert_eq!(pipe!(3, square, double, add_one), 19);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipe_applies_function() {
        assert_eq!(pipe(4, |x: i32| x + 1), 5);
    }

    #[test]
    fn test_pipe_accepts_consuming_closure() {
        let suffix = String::from("!");
        let shout = move |text: String| text + &suffix;
        assert_eq!(pipe(String::from("hi"), shout), "hi!");
    }

    #[test]
    fn test_pipe_method_chain() {
        let result = 3.pipe(|x: i32| x * x).pipe(|x: i32| x + 1);
        assert_eq!(result, 10);
    }

    #[test]
    fn test_pipe_ref_leaves_value_usable() {
        let items = vec![1, 2, 3];
        let total: i32 = items.pipe_ref(|items| items.iter().sum());
        assert_eq!(total, 6);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_pipe_macro_chain() {
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        assert_eq!(pipe!(5, double, add_one), 11);
        assert_eq!(pipe!(42), 42);
    }
}
