//! Bridges between combinator pipelines and `tracing`.
//!
//! Only compiled with the `tracing` feature. Nothing here changes the value
//! a stage produces; the helpers only emit events.

use tracing::{debug, trace, trace_span};

use super::logged::Logged;

/// Wraps a stage so that every call runs inside a `fnkit.stage` span and
/// emits `enter` / `exit` trace events tagged with `label`.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{compose, traced};
///
/// let pipeline = compose(traced("parse", |s: &str| s.len()), traced("double", |n: usize| n * 2));
/// assert_eq!(pipeline("abc"), 6);
/// ```
pub fn traced<A, B, F>(label: &'static str, function: F) -> impl Fn(A) -> B
where
    F: Fn(A) -> B,
{
    move |input| {
        let span = trace_span!("fnkit.stage", label);
        let _entered = span.enter();
        trace!(label, "enter");
        let output = function(input);
        trace!(label, "exit");
        output
    }
}

/// Forwards every entry of a logged result to `tracing` at debug level, in
/// order, and returns the bare value.
///
/// # Examples
///
/// ```
/// use fnkit::compose::{bind, emit_log, tell};
///
/// let checkout = bind(tell("validated"), tell("charged"));
/// assert_eq!(emit_log("checkout", checkout(42)), 42);
/// ```
pub fn emit_log<T>(label: &'static str, (value, log): Logged<T>) -> T {
    for (index, entry) in log.iter().enumerate() {
        debug!(label, index, entry = %entry, "log entry");
    }
    value
}
