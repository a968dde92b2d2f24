use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Run state of the animation-frame loop. Each start bumps the generation,
/// so a callback scheduled by an earlier run sees it is stale and stops.
#[derive(Debug, Default)]
pub struct LoopState {
    running: Cell<bool>,
    generation: Cell<u32>,
}

impl LoopState {
    /// Returns the new run's generation, or `None` if already running.
    pub fn start(&self) -> Option<u32> {
        if self.running.replace(true) {
            return None;
        }
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        Some(generation)
    }

    pub fn stop(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Whether the run started as `generation` should keep going.
    pub fn is_current(&self, generation: u32) -> bool {
        self.running.get() && self.generation.get() == generation
    }
}

/// A replaceable host callback. `get` hands out a clone so the slot is not
/// borrowed while the callback runs.
pub struct CallbackSlot<F: Clone> {
    inner: Rc<RefCell<Option<F>>>,
}

impl<F: Clone> Clone for CallbackSlot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<F: Clone> Default for CallbackSlot<F> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(None)),
        }
    }
}

impl<F: Clone> CallbackSlot<F> {
    pub fn set(&self, callback: Option<F>) {
        *self.inner.borrow_mut() = callback;
    }

    pub fn get(&self) -> Option<F> {
        self.inner.borrow().clone()
    }
}
