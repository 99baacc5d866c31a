//! Lenses for immutable field updates.
//!
//! A lens is a reusable, type-checked reference to one field of a larger
//! value, paired with a way to rebuild that value with the field replaced.
//! Lenses come from three places:
//!
//! - [`FunctionLens::new`] with an explicit getter and setter
//! - the [`lens!`](crate::lens!) macro for a single struct field
//! - `#[derive(Lenses)]`, which generates `<field>_lens()` for every field
//!
//! The curried accessors [`get`], [`view`], [`set`] and [`prop`] turn a lens
//! into plain functions for use in pipelines.
//!
//! # Example
//!
//! ```
//! use fnkit::lens;
//! use fnkit::optics::{Lens, get, prop, set};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Counter { count: i64, name: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Board { title: String, counter: Counter }
//!
//! let board_count = lens!(Board, counter).compose(lens!(Counter, count));
//!
//! let board = Board {
//!     title: "ops".to_string(),
//!     counter: Counter { count: 0, name: "x".to_string() },
//! };
//!
//! let board = set(board_count.clone(), 5)(board);
//! let board = prop(board_count.clone())(Box::new(|n: i64| n + 1))(board);
//!
//! let count: i64 = get(board_count)(&board);
//! assert_eq!(count, 6);
//! assert_eq!(board.counter.name, "x");
//! assert_eq!(board.title, "ops");
//! ```
//!
//! # Derived Lenses
//!
//! For a field `count: i64`, `#[derive(Lenses)]` adds
//! `fn count_lens() -> impl Lens<Self, i64> + Clone`. Fields marked
//! `#[lens(skip)]` get no constructor.
//!
//! ```
//! use fnkit::Lenses;
//! use fnkit::optics::prop;
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Counter { count: i64, name: String }
//!
//! let counter = Counter { count: 5, name: "x".into() };
//! let bumped = prop(Counter::count_lens())(Box::new(|n: i64| n + 1))(counter);
//! assert_eq!(bumped.count, 6);
//! ```
//!
//! Only structs with named fields are accepted:
//!
//! ```compile_fail
//! use fnkit::Lenses;
//!
//! #[derive(Lenses)]
//! struct Pair(i32, i32);
//! ```
//!
//! ```compile_fail
//! use fnkit::Lenses;
//!
//! #[derive(Lenses)]
//! enum Shape { Circle { radius: f64 } }
//! ```
//!
//! A skipped field has no lens to call:
//!
//! ```compile_fail
//! use fnkit::Lenses;
//!
//! #[derive(Lenses)]
//! struct Cached { key: String, #[lens(skip)] hits: u64 }
//!
//! let hits = Cached::hits_lens();
//! ```
//!
//! # Lens Laws
//!
//! 1. **GetPut**: `set(lens, get(lens)(&root))(root.clone()) == root`
//! 2. **PutGet**: `get(lens)(&set(lens, v)(root)) == v`
//! 3. **PutPut**: `set(lens, v2)(set(lens, v1)(root)) == set(lens, v2)(root)`

mod accessors;
mod lens;

pub use accessors::{Transform, get, prop, set, view};
pub use lens::{ComposedLens, FunctionLens, Lens};
