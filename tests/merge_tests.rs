//! Unit tests for merge, merge_mut, merge2, try_merge and merge!.

#![cfg(feature = "compose")]

use fnkit::compose::{merge, merge2, merge_mut, try_merge};
use std::cell::RefCell;
use std::panic::{AssertUnwindSafe, catch_unwind};

#[derive(Debug, Default, PartialEq)]
struct Constraint {
    top: Option<String>,
    leading: Option<String>,
}

// =============================================================================
// merge
// =============================================================================

#[test]
fn test_merge_records_calls_in_order() {
    let calls = RefCell::new(Vec::new());
    let merged = merge(
        |value: &String| calls.borrow_mut().push(format!("f:{value}")),
        |value: &String| calls.borrow_mut().push(format!("g:{value}")),
    );
    merged(&String::from("a"));
    merged(&String::from("b"));
    assert_eq!(*calls.borrow(), ["f:a", "g:a", "f:b", "g:b"]);
}

#[test]
fn test_merge_on_unsized_target() {
    let lengths = RefCell::new(Vec::new());
    let merged = merge(
        |items: &[u8]| lengths.borrow_mut().push(items.len()),
        |items: &[u8]| lengths.borrow_mut().push(items.iter().map(|&n| usize::from(n)).sum()),
    );
    merged(&[1, 2, 3]);
    assert_eq!(*lengths.borrow(), [3, 6]);
}

#[test]
fn test_merge_left_panic_skips_right() {
    let reached = RefCell::new(false);
    let merged = merge(
        |value: &i32| assert!(*value >= 0, "negative input"),
        |_: &i32| *reached.borrow_mut() = true,
    );

    merged(&1);
    assert!(*reached.borrow());

    *reached.borrow_mut() = false;
    let outcome = catch_unwind(AssertUnwindSafe(|| merged(&-1)));
    assert!(outcome.is_err());
    assert!(!*reached.borrow());
}

// =============================================================================
// merge_mut / merge2
// =============================================================================

#[test]
fn test_merge_mut_applies_both_configurations() {
    let pin = merge_mut(
        |constraint: &mut Constraint| constraint.top = Some("parent.top".into()),
        |constraint: &mut Constraint| constraint.leading = Some("parent.leading".into()),
    );
    let mut constraint = Constraint::default();
    pin(&mut constraint);
    assert_eq!(
        constraint,
        Constraint {
            top: Some("parent.top".into()),
            leading: Some("parent.leading".into()),
        }
    );
}

#[test]
fn test_merge2_shares_both_arguments() {
    let pairs = RefCell::new(Vec::new());
    let merged = merge2(
        |child: &str, parent: &str| pairs.borrow_mut().push((child.len(), parent.len())),
        |child: &str, parent: &str| pairs.borrow_mut().push((parent.len(), child.len())),
    );
    merged("ab", "wxyz");
    assert_eq!(*pairs.borrow(), [(2, 4), (4, 2)]);
}

// =============================================================================
// try_merge
// =============================================================================

#[derive(Debug, PartialEq)]
enum Rejected {
    TooShort,
    NotLowercase,
}

fn long_enough(name: &str) -> Result<(), Rejected> {
    if name.len() >= 3 { Ok(()) } else { Err(Rejected::TooShort) }
}

fn lowercase(name: &str) -> Result<(), Rejected> {
    if name.chars().all(char::is_lowercase) {
        Ok(())
    } else {
        Err(Rejected::NotLowercase)
    }
}

#[test]
fn test_try_merge_passes_when_both_pass() {
    assert_eq!(try_merge(long_enough, lowercase)("alice"), Ok(()));
}

#[test]
fn test_try_merge_reports_second_failure() {
    assert_eq!(try_merge(long_enough, lowercase)("Alice"), Err(Rejected::NotLowercase));
}

#[test]
fn test_try_merge_stops_at_first_failure() {
    let checked = RefCell::new(0);
    let validate = try_merge(long_enough, |name: &str| {
        *checked.borrow_mut() += 1;
        lowercase(name)
    });
    assert_eq!(validate("AB"), Err(Rejected::TooShort));
    assert_eq!(*checked.borrow(), 0);
}

// =============================================================================
// merge!
// =============================================================================

#[test]
fn test_merge_macro_runs_all_in_order() {
    let order = RefCell::new(String::new());
    let recorded = &order;
    let record = |tag: char| move |_: &()| recorded.borrow_mut().push(tag);
    let merged = fnkit::merge!(record('a'), record('b'), record('c'));
    merged(&());
    assert_eq!(*order.borrow(), "abc");
}

#[test]
fn test_merge_macro_single_effect() {
    let hits = RefCell::new(0);
    let merged = fnkit::merge!(|_: &u8| *hits.borrow_mut() += 1);
    merged(&0);
    assert_eq!(*hits.borrow(), 1);
}
