//! Unit tests for forward application: pipe, Pipe and pipe!.

#![cfg(feature = "compose")]

use fnkit::compose::{Pipe, compose, identity, merge_mut, pipe};

#[test]
fn test_pipe_function_applies() {
    assert_eq!(pipe(5, |x: i32| x * 2), 10);
}

#[test]
fn test_pipe_with_identity_returns_input() {
    assert_eq!(pipe(String::from("same"), identity), "same");
}

#[test]
fn test_pipe_macro_value_only() {
    assert_eq!(pipe!(String::from("hello")), "hello");
}

#[test]
fn test_pipe_macro_three_functions() {
    fn add_one(value: i32) -> i32 {
        value + 1
    }
    fn double(value: i32) -> i32 {
        value * 2
    }
    fn square(value: i32) -> i32 {
        value * value
    }

    assert_eq!(pipe!(3, square, double, add_one), 19);
}

#[test]
fn test_pipe_macro_trailing_comma() {
    let double = |x: i32| x * 2;
    assert_eq!(pipe!(4, double, double,), 16);
}

#[test]
fn test_pipe_macro_matches_compose() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;
    assert_eq!(pipe!(10, f, g), compose(f, g)(10));
}

#[test]
fn test_pipe_method_reads_left_to_right() {
    let longest = "a bb ccc"
        .pipe(|text| text.split(' ').map(str::len).max())
        .pipe(|length: Option<usize>| length.unwrap_or(0));
    assert_eq!(longest, 3);
}

#[test]
fn test_pipe_mut_applies_merged_configuration() {
    #[derive(Default, Debug, PartialEq)]
    struct Button {
        title: String,
        enabled: bool,
    }

    let configure = merge_mut(
        |button: &mut Button| button.title = "Save".to_string(),
        |button: &mut Button| button.enabled = true,
    );

    let mut button = Button::default();
    button.pipe_mut(&configure);

    assert_eq!(
        button,
        Button {
            title: "Save".to_string(),
            enabled: true
        }
    );
}
