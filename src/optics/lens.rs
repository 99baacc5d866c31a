//! Lenses: type-checked field paths with paired get and set.
//!
//! A lens names one field inside a larger value. Reading goes through
//! [`Lens::get`]; writing through [`Lens::set`] consumes the old value and
//! returns a new one that differs only in that field.
//!
//! # Laws
//!
//! 1. **GetPut**: `lens.set(source.clone(), lens.get(&source).clone()) == source`
//! 2. **PutGet**: `lens.get(&lens.set(source, value.clone())) == &value`
//! 3. **PutPut**: `lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)`
//!
//! Lenses built by [`lens!`](crate::lens!), `#[derive(Lenses)]` and
//! [`Lens::compose`] satisfy all three.

use std::fmt;
use std::marker::PhantomData;

/// A Lens focuses on a single field within a larger structure.
///
/// - `S`: the source type (the whole structure)
/// - `A`: the focused field
pub trait Lens<S, A> {
    /// Borrows the focused field.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Replaces the focused field, returning the updated source.
    fn set(&self, source: S, value: A) -> S;

    /// Replaces the focused field with `function(old_value)`.
    ///
    /// ```
    /// use fnkit::lens;
    /// use fnkit::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Counter { count: i64, name: String }
    ///
    /// let count = lens!(Counter, count);
    /// let counter = count.modify(Counter { count: 5, name: "x".into() }, |n| n + 1);
    /// assert_eq!(counter.count, 6);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Like [`modify`](Lens::modify), computing the new value from a
    /// reference so the focus is never cloned.
    fn modify_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.get(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with a lens into its focus, giving a path into a
    /// nested field.
    ///
    /// ```
    /// use fnkit::lens;
    /// use fnkit::optics::Lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Frame { width: u32, height: u32 }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Panel { title: String, frame: Frame }
    ///
    /// let panel_width = lens!(Panel, frame).compose(lens!(Frame, width));
    /// let panel = Panel { title: "main".into(), frame: Frame { width: 320, height: 200 } };
    ///
    /// let wider = panel_width.set(panel, 640);
    /// assert_eq!(wider.frame, Frame { width: 640, height: 200 });
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }
}

/// A lens built from a getter and a setter.
///
/// ```
/// use fnkit::optics::{FunctionLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
/// assert_eq!(*x_lens.get(&Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S) -> A>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a lens from a getter and a setter. The pair must obey the
    /// lens laws; the setter may only touch the field the getter reads.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// Two lenses chained: `first` focuses `S -> A`, `second` focuses `A -> B`.
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Chains `first` and `second`.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a B {
        self.second.get(self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source).clone();
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: fmt::Debug, L2: fmt::Debug, A> fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// Lenses over plain `fn` items carry no state and may cross threads.
static_assertions::assert_impl_all!(
    FunctionLens<(u8, u8), u8, fn(&(u8, u8)) -> &u8, fn((u8, u8), u8) -> (u8, u8)>:
    Send, Sync, Clone
);

/// Creates a lens for a struct field.
///
/// This is the field-path form that [`prop`](crate::optics::prop),
/// [`get`](crate::optics::get) and [`set`](crate::optics::set) take when a
/// struct does not derive `Lenses`, for example a type from another crate
/// with public fields.
///
/// The field is accessed directly in the generated closures, so naming a
/// field that does not exist is a compile error rather than a runtime one.
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use fnkit::lens;
/// use fnkit::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let updated = x_lens.set(Point { x: 10, y: 20 }, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
///
/// A field that does not exist is rejected at compile time:
///
/// ```compile_fail
/// use fnkit::lens;
///
/// struct Point { x: i32, y: i32 }
///
/// let z_lens = lens!(Point, z);
/// ```
///
/// So is a setter value of the wrong type:
///
/// ```compile_fail
/// use fnkit::lens;
/// use fnkit::optics::Lens;
///
/// struct Point { x: i32, y: i32 }
///
/// let moved = lens!(Point, x).set(Point { x: 1, y: 2 }, "left");
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
