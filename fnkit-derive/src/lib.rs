//! Derive macro for fnkit lenses.
//!
//! `#[derive(Lenses)]` turns every named field of a struct into a
//! type-checked field path: a `<field>_lens()` constructor returning an
//! `fnkit::optics::Lens`. Because the generated code accesses the field
//! directly, a lens for a field that does not exist can never be built.
//!
//! # Example
//!
//! ```rust,ignore
//! use fnkit::optics::{Lens, prop, set};
//! use fnkit_derive::Lenses;
//!
//! #[derive(Clone, Debug, PartialEq, Lenses)]
//! struct Counter {
//!     count: i64,
//!     name: String,
//! }
//!
//! let counter = Counter { count: 0, name: "x".to_string() };
//! let counter = set(Counter::count_lens(), 5)(counter);
//! let counter = prop(Counter::count_lens())(Box::new(|n: i64| n + 1))(counter);
//! assert_eq!(counter.count, 6);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating one lens constructor per named struct field.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl fnkit::optics::Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// Fields annotated with `#[lens(skip)]` get no constructor.
///
/// # Errors
///
/// Enums, unions, tuple structs and unit structs are rejected at compile
/// time, as are unknown `#[lens(..)]` options.
///
/// # Generics
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Tagged<T> {
///     value: T,
///     tag: String,
/// }
///
/// let lens = Tagged::<i32>::value_lens();
/// ```
#[proc_macro_derive(Lenses, attributes(lens))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
