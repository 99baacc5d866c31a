//! Composition of stages that return a value together with a log.
//!
//! A logged stage has the shape `A -> (B, Log)`. Composing two of them with
//! [`bind`] threads the value through and concatenates the logs in call
//! order, so a pipeline produces a deterministic audit trail:
//!
//! ```text
//! bind(f, g)(a) = let (b, log_f) = f(a)
//!                 let (c, log_g) = g(b)
//!                 (c, log_f ++ log_g)
//! ```
//!
//! Entries are never dropped, deduplicated or capped.
//!
//! # Laws
//!
//! - **Left Identity**: `bind(logged, f)(a) == f(a)`
//! - **Right Identity**: `bind(f, logged)(a) == f(a)`
//! - **Associativity**: `bind(bind(f, g), h)(a) == bind(f, bind(g, h))(a)`

/// An append-only sequence of log entries.
pub type Log = Vec<String>;

/// A value paired with the log produced while computing it.
pub type Logged<T> = (T, Log);

/// Wraps a value with an empty log. Identity element of [`bind`].
///
/// # Examples
///
/// ```
/// use fnkit::compose::logged;
///
/// assert_eq!(logged(7), (7, Vec::<String>::new()));
/// ```
#[inline]
pub const fn logged<T>(value: T) -> Logged<T> {
    (value, Vec::new())
}

/// Lifts a plain function into a logged stage that writes nothing.
#[inline]
pub fn lift_logged<A, B, F>(function: F) -> impl Fn(A) -> Logged<B>
where
    F: Fn(A) -> B,
{
    move |input| logged(function(input))
}

/// A stage that passes its input through and appends one entry.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{bind, tell};
///
/// let stage = bind(tell("start"), |x: i32| (x + 1, vec![format!("incremented to {}", x + 1)]));
/// assert_eq!(stage(1), (2, vec!["start".to_string(), "incremented to 2".to_string()]));
/// ```
pub fn tell<A, M>(message: M) -> impl Fn(A) -> Logged<A>
where
    M: Into<String>,
{
    let message = message.into();
    move |value| (value, vec![message.clone()])
}

/// Composes two logged stages; `first` runs before `second` and its entries
/// come first in the combined log.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{Logged, bind};
///
/// fn parse(text: &str) -> Logged<i32> {
///     (text.len() as i32, vec![format!("parsed {text}")])
/// }
///
/// fn double(value: i32) -> Logged<i32> {
///     (value * 2, vec![format!("doubled {value}")])
/// }
///
/// let (value, log) = bind(parse, double)("abc");
/// assert_eq!(value, 6);
/// assert_eq!(log, ["parsed abc", "doubled 3"]);
/// ```
#[inline]
pub fn bind<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Logged<C>
where
    F: Fn(A) -> Logged<B>,
    G: Fn(B) -> Logged<C>,
{
    move |input| {
        let (intermediate, mut log) = first(input);
        let (output, more_log) = second(intermediate);
        log.extend(more_log);
        (output, log)
    }
}

/// Chains any number of logged stages from left to right with [`bind`].
///
/// # Examples
///
/// ```
/// use fnkit::{bind, compose::tell};
///
/// let pipeline = bind!(
///     tell("a"),
///     |x: i32| (x * 10, vec!["times ten".to_string()]),
///     tell("z"),
/// );
/// assert_eq!(pipeline(4), (40, vec!["a".into(), "times ten".into(), "z".into()]));
/// ```
#[macro_export]
macro_rules! bind {
    ($stage:expr $(,)?) => {
        $stage
    };

    ($first_stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::compose::bind($first_stage, $crate::bind!($($remaining_stages),+))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn increment(value: i32) -> Logged<i32> {
        (value + 1, vec![format!("inc {value}")])
    }

    fn square(value: i32) -> Logged<i32> {
        (value * value, vec![format!("sq {value}")])
    }

    #[test]
    fn test_bind_concatenates_in_call_order() {
        let (value, log) = bind(increment, square)(2);
        assert_eq!(value, 9);
        assert_eq!(log, ["inc 2", "sq 3"]);
    }

    #[test]
    fn test_bind_keeps_duplicate_entries() {
        let (_, log) = bind(tell("same"), tell("same"))(());
        assert_eq!(log, ["same", "same"]);
    }

    #[test]
    fn test_lift_logged_writes_nothing() {
        let (value, log) = lift_logged(|x: i32| x - 1)(10);
        assert_eq!(value, 9);
        assert!(log.is_empty());
    }

    #[test]
    fn test_bind_macro_three_stages() {
        let (value, log) = bind!(increment, square, increment)(1);
        assert_eq!(value, 5);
        assert_eq!(log, ["inc 1", "sq 2", "inc 4"]);
    }
}
