// Host-side tests for the frame loop's run state and callback slot.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod loop_state {
    include!("../src/loop_state.rs");
}

use loop_state::*;
use std::cell::Cell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

#[test]
fn start_is_idempotent_while_running() {
    let state = LoopState::default();
    let first = state.start().unwrap();
    assert!(state.start().is_none());
    assert!(state.is_running());
    assert!(state.is_current(first));
}

#[test]
fn restart_retires_the_previous_run() {
    let state = LoopState::default();
    let first = state.start().unwrap();
    state.stop();
    assert!(!state.is_current(first));
    let second = state.start().unwrap();
    assert_ne!(first, second);
    assert!(!state.is_current(first));
    assert!(state.is_current(second));
}

#[test]
fn callback_may_stop_the_loop_and_replace_itself() {
    let state = Rc::new(LoopState::default());
    let slot: CallbackSlot<Callback> = CallbackSlot::default();
    let calls = Rc::new(Cell::new(0));
    let generation = state.start().unwrap();

    let (state_in, slot_in, calls_in) = (state.clone(), slot.clone(), calls.clone());
    let on_frame: Callback = Rc::new(move || {
        calls_in.set(calls_in.get() + 1);
        // Re-entering both the state and the slot from inside the callback.
        state_in.stop();
        slot_in.set(None);
    });
    slot.set(Some(on_frame));

    if let Some(f) = slot.get() {
        f();
    }
    assert_eq!(calls.get(), 1);
    assert!(!state.is_current(generation));
    assert!(slot.get().is_none());
}

#[test]
fn empty_slot_yields_nothing() {
    let slot: CallbackSlot<Callback> = CallbackSlot::default();
    assert!(slot.get().is_none());
}
