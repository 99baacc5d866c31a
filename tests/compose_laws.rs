#![cfg(feature = "compose")]
//! Property-based tests for composition laws.
//!
//! ## Pipe Laws
//! - **Identity**: `pipe(a, identity) == a`
//! - **Consistency with Compose**: `pipe(pipe(a, f), g) == compose(f, g)(a)`
//!
//! ## Composition Laws
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Identity**: `compose(identity, f) == f == compose(f, identity)`
//! - **Mirror**: `compose_r(g, f) == compose(f, g)`
//!
//! ## Curry Laws
//! - **Equivalence**: `curry(f)(a)(b) == f(a, b)`
//! - **Flip**: `flip(curry(f))(b)(a) == f(a, b)`

use fnkit::compose::{
    Pipe, compose, compose_r, curry, flip, flip_args, identity, pipe, uncurry,
};
use proptest::prelude::*;

fn double(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn increment(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn square(n: i32) -> i32 {
    n.wrapping_mul(n)
}

// =============================================================================
// Pipe Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_pipe_identity(x in any::<i32>()) {
        prop_assert_eq!(pipe(x, identity), x);
        prop_assert_eq!(x.pipe(identity), x);
    }

    #[test]
    fn prop_pipe_identity_on_strings(text in ".*") {
        prop_assert_eq!(pipe(text.clone(), identity), text);
    }

    #[test]
    fn prop_pipe_chain_matches_compose(x in any::<i32>()) {
        let piped = pipe(pipe(x, double), increment);
        prop_assert_eq!(piped, compose(double, increment)(x));
    }

    #[test]
    fn prop_pipe_macro_matches_nested_calls(x in any::<i32>()) {
        prop_assert_eq!(fnkit::pipe!(x, double, increment, square), square(increment(double(x))));
    }
}

// =============================================================================
// Composition Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_compose_associativity(x in any::<i32>()) {
        let left = compose(compose(double, increment), square);
        let right = compose(double, compose(increment, square));
        prop_assert_eq!(left(x), right(x));
    }

    #[test]
    fn prop_compose_left_identity(x in any::<i32>()) {
        prop_assert_eq!(compose(identity, double)(x), double(x));
    }

    #[test]
    fn prop_compose_right_identity(x in any::<i32>()) {
        prop_assert_eq!(compose(double, identity)(x), double(x));
    }

    #[test]
    fn prop_compose_r_mirrors_compose(x in any::<i32>()) {
        prop_assert_eq!(compose_r(increment, double)(x), compose(double, increment)(x));
    }

    #[test]
    fn prop_compose_macros_mirror_each_other(x in any::<i32>()) {
        let forward = fnkit::compose!(double, increment, square);
        let backward = fnkit::compose_r!(square, increment, double);
        prop_assert_eq!(forward(x), backward(x));
    }
}

// =============================================================================
// Curry and Flip Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_curry_equivalence(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        prop_assert_eq!(curry(subtract)(a)(b), subtract(a, b));
    }

    #[test]
    fn prop_flip_of_curried_function(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        prop_assert_eq!(flip(curry(subtract))(b)(a), subtract(a, b));
    }

    #[test]
    fn prop_uncurry_inverts_curry(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        prop_assert_eq!(uncurry(curry(subtract))(a, b), subtract(a, b));
    }

    #[test]
    fn prop_double_flip_args_is_identity(a in any::<i32>(), b in any::<i32>()) {
        let subtract = |left: i32, right: i32| left.wrapping_sub(right);
        prop_assert_eq!(flip_args(flip_args(subtract))(a, b), subtract(a, b));
    }
}
