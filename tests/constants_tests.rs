// Host-side tests for the browser-side constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn dom_hooks_are_distinct_ids() {
    assert!(!STATUS_ELEMENT_ID.is_empty());
    assert!(!TOAST_ELEMENT_ID.is_empty());
    assert_ne!(STATUS_ELEMENT_ID, TOAST_ELEMENT_ID);
    assert!(!STATUS_ELEMENT_ID.contains(' '));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn toast_stays_up_long_enough_to_read() {
    assert!(TOAST_VISIBLE_MS >= 1000);
    assert!(TOAST_VISIBLE_MS <= 10_000);
}

#[test]
fn console_defaults_to_info() {
    assert_eq!(DEFAULT_LOG_LEVEL, log::Level::Info);
}
