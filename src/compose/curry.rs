//! Currying, uncurrying and flipping of curried functions.
//!
//! Stable Rust cannot name a closure that returns another unnamed closure in
//! return position, so the inner stage of a curried function is returned as
//! `Box<dyn Fn>`. The wrapped function is shared through [`Rc`], which keeps
//! every partial application reusable; as a consequence curried functions are
//! neither `Send` nor `Sync`.
//!
//! # Laws
//!
//! - **Curry Equivalence**: `curry(f)(a)(b) == f(a, b)`
//! - **Flip Equivalence**: `flip(curry(f))(b)(a) == f(a, b)`
//! - **Round Trip**: `uncurry(curry(f))(a, b) == f(a, b)`

use std::rc::Rc;

/// Converts a binary function into curried form.
///
/// Arguments of the first stage are cloned on each call of the second
/// stage, so a partial application can be called any number of times.
///
/// # Examples
///
/// ```
/// use fnkit::compose::curry;
///
/// let add = curry(|first: i32, second: i32| first + second);
/// let add_five = add(5);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
/// ```
pub fn curry<A, B, C, F>(function: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
where
    F: Fn(A, B) -> C + 'static,
    A: Clone + 'static,
    B: 'static,
    C: 'static,
{
    let function = Rc::new(function);
    move |first_argument| {
        let function = Rc::clone(&function);
        let stage: Box<dyn Fn(B) -> C> =
            Box::new(move |second_argument| function(first_argument.clone(), second_argument));
        stage
    }
}

/// Converts a curried function back into a binary one.
///
/// # Examples
///
/// ```
/// use fnkit::compose::uncurry;
///
/// let multiply = |first: i32| move |second: i32| first * second;
/// assert_eq!(uncurry(multiply)(6, 7), 42);
/// ```
#[inline]
pub fn uncurry<A, B, C, F, G>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> G,
    G: Fn(B) -> C,
{
    move |first_argument, second_argument| function(first_argument)(second_argument)
}

/// Reverses the application order of a curried function.
///
/// `flip(f)(b)(a) == f(a)(b)`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{curry, flip};
///
/// let divide = curry(|numerator: f64, denominator: f64| numerator / denominator);
/// let halve = flip(divide)(2.0);
/// assert_eq!(halve(10.0), 5.0);
/// ```
pub fn flip<A, B, C, F, G>(function: F) -> impl Fn(B) -> Box<dyn Fn(A) -> C>
where
    F: Fn(A) -> G + 'static,
    G: Fn(B) -> C,
    A: 'static,
    B: Clone + 'static,
    C: 'static,
{
    let function = Rc::new(function);
    move |second_argument| {
        let function = Rc::clone(&function);
        let stage: Box<dyn Fn(A) -> C> =
            Box::new(move |first_argument| function(first_argument)(second_argument.clone()));
        stage
    }
}
