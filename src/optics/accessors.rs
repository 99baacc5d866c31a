//! Curried accessors over any [`Lens`]: `get`, `view`, `set` and `prop`.
//!
//! These turn a lens into plain functions that slot into `pipe` and
//! `compose` chains.

use std::rc::Rc;

use super::lens::Lens;

/// The read half of a lens as a function: `get(lens)(&root)` clones the
/// focused field out of `root`.
///
/// # Examples
///
/// ```
/// use fnkit::lens;
/// use fnkit::optics::get;
///
/// #[derive(Clone)]
/// struct Counter { count: i64, name: String }
///
/// let counters = vec![
///     Counter { count: 1, name: "a".into() },
///     Counter { count: 2, name: "b".into() },
/// ];
/// let counts: Vec<i64> = counters.iter().map(get(lens!(Counter, count))).collect();
/// assert_eq!(counts, [1, 2]);
/// ```
#[inline]
pub fn get<S, A, L>(lens: L) -> impl Fn(&S) -> A
where
    L: Lens<S, A>,
    A: Clone,
{
    move |source: &S| lens.get(source).clone()
}

/// Alias of [`get`] for call sites that read better as "view this field".
#[inline]
pub fn view<S, A, L>(lens: L) -> impl Fn(&S) -> A
where
    L: Lens<S, A>,
    A: Clone,
{
    get(lens)
}

/// A function replacing the focused field with `value`.
///
/// # Examples
///
/// ```
/// use fnkit::lens;
/// use fnkit::optics::set;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter { count: i64, name: String }
///
/// let reset = set(lens!(Counter, count), 0);
/// let counter = reset(Counter { count: 9, name: "x".into() });
/// assert_eq!(counter, Counter { count: 0, name: "x".into() });
/// ```
#[inline]
pub fn set<S, A, L>(lens: L, value: A) -> impl Fn(S) -> S
where
    L: Lens<S, A>,
    A: Clone,
{
    move |source| lens.set(source, value.clone())
}

/// A boxed `A -> A` function, the argument type of a [`prop`] updater.
pub type Transform<A> = Box<dyn Fn(A) -> A>;

/// Turns a lens into a field updater: `prop(lens)(transform)(root)` returns
/// `root` with the focused field replaced by `transform(old_value)`.
///
/// The transform is boxed, so one `prop(lens)` accepts any number of
/// different closures. The lens is shared through `Rc`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::Pipe;
/// use fnkit::lens;
/// use fnkit::optics::prop;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter { count: i64, name: String }
///
/// let count = prop(lens!(Counter, count));
/// let counter = Counter { count: 5, name: "x".into() }
///     .pipe(count(Box::new(|n: i64| n + 1)))
///     .pipe(count(Box::new(|n: i64| n * 10)));
/// assert_eq!(counter.count, 60);
/// ```
pub fn prop<S, A, L>(lens: L) -> impl Fn(Transform<A>) -> Box<dyn Fn(S) -> S>
where
    L: Lens<S, A> + 'static,
    S: 'static,
    A: Clone + 'static,
{
    let lens = Rc::new(lens);
    move |transform: Transform<A>| {
        let lens = Rc::clone(&lens);
        let updater: Box<dyn Fn(S) -> S> =
            Box::new(move |source| lens.modify(source, &transform));
        updater
    }
}
