//! Function combinators.
//!
//! Building blocks for point-free, left-to-right pipelines. Every combinator
//! is a plain generic function returning a closure; nothing here keeps state
//! between calls, and binary combinators always run their left operand first.
//!
//! # Overview
//!
//! | Combinator | Shape |
//! |---|---|
//! | [`pipe`], [`Pipe`], [`pipe!`] | `a, A -> B` to `B` |
//! | [`compose`], [`compose!`] | `A -> B`, `B -> C` to `A -> C`, left first |
//! | [`compose_r`], [`compose_r!`] | same, written outermost first |
//! | [`try_compose`] | fallible stages, stops at the first `Err` |
//! | [`bind`], [`bind!`] | `A -> (B, Log)`, `B -> (C, Log)` to `A -> (C, Log)` |
//! | [`merge`], [`merge_mut`], [`merge2`], [`merge!`] | two effects to one |
//! | [`try_merge`] | fallible effects, stops at the first `Err` |
//! | [`curry`], [`uncurry`], [`flip`], [`flip_args`], [`thunk`] | argument plumbing |
//! | [`map_first`], [`map_second`] | map one side of a pair |
//! | [`map_list`], [`map_optional`] | map inside a `Vec` / `Option` |
//! | [`order_by`], [`ascending`], [`descending`], [`comparing`] | comparators from projections |
//! | [`accumulate`] | fold step from a projection |
//!
//! # Examples
//!
//! ## Pipeline
//!
//! ```
//! use fnkit::compose::{Pipe, compose, map_list};
//!
//! let trimmed_lengths = map_list(compose(|s: &str| s.trim().to_string(), |s: String| s.len()));
//! let lengths = vec![" a ", "bb"].pipe(trimmed_lengths);
//! assert_eq!(lengths, [1, 2]);
//! ```
//!
//! ## Sorting and folding records
//!
//! ```
//! use fnkit::compose::{accumulate, comparing};
//!
//! struct Order { id: u32, total: u64 }
//!
//! let mut orders = vec![Order { id: 2, total: 30 }, Order { id: 1, total: 12 }];
//! orders.sort_by(comparing(|order: &Order| order.id));
//! let revenue = orders.iter().fold(0, accumulate(|order: &Order| order.total, |a, b| a + b));
//!
//! assert_eq!(orders[0].id, 1);
//! assert_eq!(revenue, 42);
//! ```
//!
//! # Laws
//!
//! - **Pipe Identity**: `pipe(a, identity) == a`
//! - **Associativity**: `compose(compose(f, g), h) == compose(f, compose(g, h))`
//! - **Identity**: `compose(identity, f) == f == compose(f, identity)`
//! - **Log Order**: `bind(f, g)(a).1 == f(a).1 ++ g(f(a).0).1`
//! - **Curry**: `curry(f)(a)(b) == f(a, b)` and `flip(curry(f))(b)(a) == f(a, b)`

mod accumulate;
mod composition;
mod container;
mod curry;
mod logged;
mod merge;
mod ordering;
mod pair;
mod pipe;
#[cfg(feature = "tracing")]
mod trace;
mod utils;

pub use accumulate::accumulate;
pub use composition::{compose, compose_r, try_compose};
pub use container::{map_list, map_optional};
pub use curry::{curry, flip, uncurry};
pub use logged::{Log, Logged, bind, lift_logged, logged, tell};
pub use merge::{merge, merge_mut, merge2, try_merge};
pub use ordering::{ascending, comparing, descending, order_by};
pub use pair::{map_first, map_second};
pub use pipe::{Pipe, pipe};
#[cfg(feature = "tracing")]
pub use trace::{emit_log, traced};
pub use utils::{constant, flip_args, identity, thunk};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::bind;
pub use crate::compose;
pub use crate::compose_r;
pub use crate::merge;
pub use crate::pipe;
