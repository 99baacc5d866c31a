//! # fnkit
//!
//! Small function combinators and lens-based immutable updates.
//!
//! ## Overview
//!
//! - **Composition**: [`pipe`](compose::pipe), [`compose`](compose::compose),
//!   [`compose_r`](compose::compose_r) and their variadic macros
//! - **Logged composition**: [`bind`](compose::bind) threads a value through
//!   stages that each append to a string log
//! - **Effects**: [`merge`](compose::merge) runs side effects in order,
//!   [`try_merge`](compose::try_merge) stops at the first error
//! - **Currying**: [`curry`](compose::curry), [`flip`](compose::flip),
//!   [`thunk`](compose::thunk)
//! - **Projections and folds**: pair mapping, container mapping,
//!   comparator builders and [`accumulate`](compose::accumulate)
//! - **Optics**: [`Lens`](optics::Lens) plus curried
//!   [`get`](optics::get) / [`set`](optics::set) / [`prop`](optics::prop)
//!
//! ## Feature Flags
//!
//! - `compose`: function combinators
//! - `optics`: lenses
//! - `derive`: `#[derive(Lenses)]`
//! - `tracing`: forward logged pipelines to `tracing`
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//! use fnkit::lens;
//!
//! #[derive(Clone, Debug, PartialEq)]
//! struct Counter { count: i64, name: String }
//!
//! let bump = prop(lens!(Counter, count))(Box::new(|n: i64| n + 1));
//! let counter = Counter { count: 5, name: "x".to_string() }.pipe(bump);
//! assert_eq!(counter, Counter { count: 6, name: "x".to_string() });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `#[derive(Lenses)]` expand to `::fnkit::..` inside this crate's own tests.
extern crate self as fnkit;

/// Prelude module for convenient imports.
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use fnkit_derive::Lenses;
}

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "optics")]
pub mod optics;

/// Derives `<field>_lens()` constructors; see [`optics`] for details.
#[cfg(feature = "derive")]
pub use fnkit_derive::Lenses;
